use super::common::PageParams;
use crate::enums::brewing::GrindSize;
use brewlog_codec::validate_symbolic;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_aux::prelude::*;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GrindSettingListParams {
    #[serde(default, with = "brewlog_codec::wire::option")]
    pub size: Option<GrindSize>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    pub grinder_id: Option<i64>,
    #[serde(flatten)]
    #[validate(nested)]
    pub page: PageParams,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrindSettingInfo {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grinder_id: Option<i64>,
    /// Grinder specific setting, e.g. "18 clicks"
    pub setting: String,
    pub size: GrindSize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GrindSettingPayload {
    #[validate(range(min = 1, message = "grinderId must be positive"))]
    pub grinder_id: Option<i64>,
    #[validate(length(min = 1, max = 50, message = "setting must be 1-50 characters"))]
    pub setting: String,
    #[serde(default, with = "brewlog_codec::wire::option")]
    #[validate(
        required(message = "size is required"),
        custom(function = "validate_symbolic")
    )]
    pub size: Option<GrindSize>,
    #[validate(length(max = 1000, message = "notes must be at most 1000 characters"))]
    pub notes: Option<String>,
}
