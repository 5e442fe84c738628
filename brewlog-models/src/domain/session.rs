use super::common::PageParams;
use crate::enums::brewing::BrewMethod;
use brewlog_codec::{decode_name, validate_symbolic, SymbolicError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_aux::prelude::*;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BrewSessionListParams {
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    pub bean_id: Option<i64>,
    /// Comma separated brew methods, e.g. `pourOver,Espresso`
    pub brew_method: Option<String>,
    #[serde(flatten)]
    #[validate(nested)]
    pub page: PageParams,
}

impl BrewSessionListParams {
    /// Decodes the `brewMethod` filter; an empty list means "any method".
    pub fn brew_methods(&self) -> Result<Vec<BrewMethod>, SymbolicError> {
        let Some(raw) = self.brew_method.as_deref() else {
            return Ok(Vec::new());
        };
        let mut methods = Vec::new();
        for part in raw.split(',').map(str::trim) {
            if let Some(method) = decode_name::<BrewMethod>(part)? {
                if !methods.contains(&method) {
                    methods.push(method);
                }
            }
        }
        Ok(methods)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrewSessionInfo {
    pub id: i64,
    pub bean_id: i64,
    pub brew_method: BrewMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grind_setting_id: Option<i64>,
    pub equipment_ids: Vec<i64>,
    pub dose_grams: f64,
    pub water_grams: f64,
    /// Water to coffee ratio, e.g. 16.0 for 1:16
    pub ratio: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub water_temperature_c: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brew_time_seconds: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasting_notes: Option<String>,
    pub brewed_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BrewSessionPayload {
    #[validate(range(min = 1, message = "beanId must be positive"))]
    pub bean_id: i64,
    #[serde(default, with = "brewlog_codec::wire::option")]
    #[validate(
        required(message = "brewMethod is required"),
        custom(function = "validate_symbolic")
    )]
    pub brew_method: Option<BrewMethod>,
    #[validate(range(min = 1, message = "grindSettingId must be positive"))]
    pub grind_setting_id: Option<i64>,
    #[serde(default)]
    #[validate(length(max = 10, message = "at most 10 pieces of equipment"))]
    pub equipment_ids: Vec<i64>,
    #[validate(range(min = 1.0, max = 100.0, message = "doseGrams must be between 1 and 100"))]
    pub dose_grams: f64,
    #[validate(range(min = 1.0, max = 2000.0, message = "waterGrams must be between 1 and 2000"))]
    pub water_grams: f64,
    #[validate(range(
        min = 0.0,
        max = 100.0,
        message = "waterTemperatureC must be between 0 and 100"
    ))]
    pub water_temperature_c: Option<f64>,
    #[validate(range(max = 86400, message = "brewTimeSeconds must be at most one day"))]
    pub brew_time_seconds: Option<u32>,
    #[validate(range(min = 1, max = 10, message = "rating must be between 1 and 10"))]
    pub rating: Option<u8>,
    #[validate(length(max = 2000, message = "tastingNotes must be at most 2000 characters"))]
    pub tasting_notes: Option<String>,
    pub brewed_at: Option<DateTime<Utc>>,
}
