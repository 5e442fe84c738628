use super::common::PageParams;
use crate::enums::coffee::{ProcessingMethod, RoastLevel};
use brewlog_codec::validate_symbolic;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BeanListParams {
    pub name: Option<String>,
    #[serde(default, with = "brewlog_codec::wire::option")]
    pub roast_level: Option<RoastLevel>,
    #[serde(default, with = "brewlog_codec::wire::option")]
    pub processing_method: Option<ProcessingMethod>,
    #[serde(flatten)]
    #[validate(nested)]
    pub page: PageParams,
}

/// Coffee bean as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoffeeBeanInfo {
    pub id: i64,
    pub name: String,
    pub roaster: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    pub roast_level: RoastLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_method: Option<ProcessingMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roast_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /beans` and `PUT /beans/{id}`
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CoffeeBeanPayload {
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 100, message = "roaster must be 1-100 characters"))]
    pub roaster: String,
    #[validate(length(max = 100, message = "origin must be at most 100 characters"))]
    pub origin: Option<String>,
    #[serde(default, with = "brewlog_codec::wire::option")]
    #[validate(
        required(message = "roastLevel is required"),
        custom(function = "validate_symbolic")
    )]
    pub roast_level: Option<RoastLevel>,
    #[serde(default, with = "brewlog_codec::wire::option")]
    #[validate(custom(function = "validate_symbolic"))]
    pub processing_method: Option<ProcessingMethod>,
    pub roast_date: Option<NaiveDate>,
    #[validate(length(max = 1000, message = "notes must be at most 1000 characters"))]
    pub notes: Option<String>,
}
