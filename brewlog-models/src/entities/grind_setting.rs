use crate::{domain::prelude::GrindSettingInfo, enums::brewing::GrindSize};
use brewlog_codec::RawOrdinal;
use brewlog_error::{storage::StorageError, StorageResult};
use chrono::{DateTime, Utc};

#[derive(Clone, Debug, PartialEq)]
pub struct Model {
    pub id: i64,
    pub grinder_id: Option<i64>,
    pub setting: String,
    pub size: i64,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<Model> for GrindSettingInfo {
    type Error = StorageError;

    fn try_from(model: Model) -> StorageResult<Self> {
        Ok(GrindSettingInfo {
            id: model.id,
            grinder_id: model.grinder_id,
            setting: model.setting,
            size: RawOrdinal::<GrindSize>::new(model.size).resolve()?,
            notes: model.notes,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
