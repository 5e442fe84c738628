//! Stored row for the coffee bean table.
//!
//! Symbolic columns are kept as ordinals, the way a relational schema
//! would store them, and resolved on the way out.

use crate::{
    domain::prelude::CoffeeBeanInfo,
    enums::coffee::{ProcessingMethod, RoastLevel},
};
use brewlog_codec::RawOrdinal;
use brewlog_error::{storage::StorageError, StorageResult};
use chrono::{DateTime, NaiveDate, Utc};

#[derive(Clone, Debug, PartialEq)]
pub struct Model {
    pub id: i64,
    pub name: String,
    pub roaster: String,
    pub origin: Option<String>,
    pub roast_level: i64,
    pub processing_method: Option<i64>,
    pub roast_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<Model> for CoffeeBeanInfo {
    type Error = StorageError;

    fn try_from(model: Model) -> StorageResult<Self> {
        Ok(CoffeeBeanInfo {
            id: model.id,
            name: model.name,
            roaster: model.roaster,
            origin: model.origin,
            roast_level: RawOrdinal::<RoastLevel>::new(model.roast_level).resolve()?,
            processing_method: model
                .processing_method
                .map(|o| RawOrdinal::<ProcessingMethod>::new(o).resolve())
                .transpose()?,
            roast_date: model.roast_date,
            notes: model.notes,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(roast_level: i64) -> Model {
        let now = Utc::now();
        Model {
            id: 7,
            name: "Kieni".into(),
            roaster: "Coffee Collective".into(),
            origin: Some("Kenya".into()),
            roast_level,
            processing_method: Some(0),
            roast_date: None,
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_resolves_ordinals() {
        let info = CoffeeBeanInfo::try_from(model(1)).unwrap();
        assert_eq!(info.roast_level, RoastLevel::MediumLight);
        assert_eq!(info.processing_method, Some(ProcessingMethod::Washed));
    }

    #[test]
    fn test_undefined_ordinal_is_corruption() {
        let err = CoffeeBeanInfo::try_from(model(9)).unwrap_err();
        match err {
            StorageError::Corrupted(e) => assert_eq!(
                e.to_string(),
                "Invalid RoastLevel. Accepted values: Light, MediumLight, Medium, MediumDark, Dark"
            ),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
