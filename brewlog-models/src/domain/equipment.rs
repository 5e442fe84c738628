use super::common::PageParams;
use crate::enums::brewing::EquipmentType;
use brewlog_codec::validate_symbolic;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentListParams {
    #[serde(rename = "type", default, with = "brewlog_codec::wire::option")]
    pub equipment_type: Option<EquipmentType>,
    #[serde(flatten)]
    #[validate(nested)]
    pub page: PageParams,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentInfo {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub equipment_type: EquipmentType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentPayload {
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: String,
    #[serde(rename = "type", default, with = "brewlog_codec::wire::option")]
    #[validate(
        required(message = "type is required"),
        custom(function = "validate_symbolic")
    )]
    pub r#type: Option<EquipmentType>,
    #[validate(length(max = 100, message = "brand must be at most 100 characters"))]
    pub brand: Option<String>,
    #[validate(length(max = 1000, message = "notes must be at most 1000 characters"))]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_type_field_uses_symbolic_codec() {
        let payload: EquipmentPayload =
            serde_json::from_value(json!({"name": "Comandante C40", "type": "GRINDER"})).unwrap();
        assert_eq!(payload.r#type, Some(EquipmentType::Grinder));
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_missing_type_is_a_validation_error() {
        let payload: EquipmentPayload =
            serde_json::from_value(json!({"name": "Kettle"})).unwrap();
        assert!(payload.validate().is_err());
    }
}
