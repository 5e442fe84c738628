use crate::{domain::prelude::EquipmentInfo, enums::brewing::EquipmentType};
use brewlog_codec::RawOrdinal;
use brewlog_error::{storage::StorageError, StorageResult};
use chrono::{DateTime, Utc};

#[derive(Clone, Debug, PartialEq)]
pub struct Model {
    pub id: i64,
    pub name: String,
    pub equipment_type: i64,
    pub brand: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Model {
    #[inline]
    pub fn is_a(&self, equipment_type: EquipmentType) -> bool {
        self.equipment_type == RawOrdinal::from(equipment_type).get()
    }
}

impl TryFrom<Model> for EquipmentInfo {
    type Error = StorageError;

    fn try_from(model: Model) -> StorageResult<Self> {
        Ok(EquipmentInfo {
            id: model.id,
            name: model.name,
            equipment_type: RawOrdinal::<EquipmentType>::new(model.equipment_type).resolve()?,
            brand: model.brand,
            notes: model.notes,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
