use crate::{domain::prelude::BrewSessionInfo, enums::brewing::BrewMethod};
use brewlog_codec::RawOrdinal;
use brewlog_error::{storage::StorageError, StorageResult};
use chrono::{DateTime, Utc};

#[derive(Clone, Debug, PartialEq)]
pub struct Model {
    pub id: i64,
    pub bean_id: i64,
    pub brew_method: i64,
    pub grind_setting_id: Option<i64>,
    pub equipment_ids: Vec<i64>,
    pub dose_grams: f64,
    pub water_grams: f64,
    pub water_temperature_c: Option<f64>,
    pub brew_time_seconds: Option<u32>,
    pub rating: Option<u8>,
    pub tasting_notes: Option<String>,
    pub brewed_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Model {
    /// Grams of water per gram of coffee, rounded to one decimal.
    pub fn ratio(&self) -> f64 {
        if self.dose_grams <= 0.0 {
            return 0.0;
        }
        (self.water_grams / self.dose_grams * 10.0).round() / 10.0
    }
}

impl TryFrom<Model> for BrewSessionInfo {
    type Error = StorageError;

    fn try_from(model: Model) -> StorageResult<Self> {
        let ratio = model.ratio();
        Ok(BrewSessionInfo {
            id: model.id,
            bean_id: model.bean_id,
            brew_method: RawOrdinal::<BrewMethod>::new(model.brew_method).resolve()?,
            grind_setting_id: model.grind_setting_id,
            equipment_ids: model.equipment_ids,
            dose_grams: model.dose_grams,
            water_grams: model.water_grams,
            ratio,
            water_temperature_c: model.water_temperature_c,
            brew_time_seconds: model.brew_time_seconds,
            rating: model.rating,
            tasting_notes: model.tasting_notes,
            brewed_at: model.brewed_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
