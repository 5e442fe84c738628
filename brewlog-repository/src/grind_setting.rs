use crate::{Database, EquipmentRepository};
use brewlog_codec::Symbolic;
use brewlog_error::{storage::StorageError, StorageResult};
use brewlog_models::{
    domain::prelude::{GrindSettingInfo, GrindSettingListParams, GrindSettingPayload, PageResult},
    entities::prelude::GrindSettingModel,
    enums::brewing::EquipmentType,
};
use chrono::{DateTime, Utc};
use tracing::{info, instrument};

/// Repository for grind setting operations
pub struct GrindSettingRepository;

impl GrindSettingRepository {
    #[instrument(skip(db, payload))]
    pub fn create(db: &Database, payload: GrindSettingPayload) -> StorageResult<GrindSettingInfo> {
        let _guard = db.reference_guard();
        check_grinder(db, payload.grinder_id)?;
        let now = Utc::now();
        let table = &db.tables().grind_settings;
        let model = to_model(0, payload, now, now)?;
        // ids are only reserved for rows that will be stored
        let id = table.next_id();
        let model = GrindSettingModel { id, ..model };
        table.insert(id, model.clone());
        info!(id, "grind setting created");
        GrindSettingInfo::try_from(model)
    }

    pub fn get(db: &Database, id: i64) -> StorageResult<GrindSettingInfo> {
        Self::find_model(db, id).and_then(GrindSettingInfo::try_from)
    }

    pub(crate) fn find_model(db: &Database, id: i64) -> StorageResult<GrindSettingModel> {
        db.tables()
            .grind_settings
            .get(id)
            .ok_or_else(|| StorageError::EntityNotFound(format!("grind setting {id}")))
    }

    #[instrument(skip(db, payload))]
    pub fn update(
        db: &Database,
        id: i64,
        payload: GrindSettingPayload,
    ) -> StorageResult<GrindSettingInfo> {
        let _guard = db.reference_guard();
        let current = Self::find_model(db, id)?;
        check_grinder(db, payload.grinder_id)?;
        let model = to_model(id, payload, current.created_at, Utc::now())?;
        if !db.tables().grind_settings.replace(id, model.clone()) {
            return Err(StorageError::EntityNotFound(format!("grind setting {id}")));
        }
        info!("grind setting updated");
        GrindSettingInfo::try_from(model)
    }

    #[instrument(skip(db))]
    pub fn delete(db: &Database, id: i64) -> StorageResult<()> {
        let _guard = db.delete_guard();
        let tables = db.tables();
        if !tables.grind_settings.contains(id) {
            return Err(StorageError::EntityNotFound(format!("grind setting {id}")));
        }
        if tables
            .brew_sessions
            .any(|s| s.grind_setting_id == Some(id))
        {
            return Err(StorageError::Conflict(format!(
                "grind setting {id} is referenced by brew sessions"
            )));
        }
        tables.grind_settings.remove(id);
        info!("grind setting deleted");
        Ok(())
    }

    pub fn list(
        db: &Database,
        params: &GrindSettingListParams,
    ) -> StorageResult<PageResult<GrindSettingInfo>> {
        let size = params.size.map(Symbolic::ordinal);
        let items = db
            .tables()
            .grind_settings
            .scan(|g| {
                size.map_or(true, |s| g.size == s)
                    && params.grinder_id.map_or(true, |id| g.grinder_id == Some(id))
            })
            .into_iter()
            .map(GrindSettingInfo::try_from)
            .collect::<StorageResult<Vec<_>>>()?;
        Ok(PageResult::paginate(items, &params.page))
    }
}

/// A grind setting may only point at equipment of type `Grinder`.
fn check_grinder(db: &Database, grinder_id: Option<i64>) -> StorageResult<()> {
    let Some(grinder_id) = grinder_id else {
        return Ok(());
    };
    let equipment = EquipmentRepository::find_model(db, grinder_id).map_err(|_| {
        StorageError::InvalidReference(format!("grinder {grinder_id} does not exist"))
    })?;
    if !equipment.is_a(EquipmentType::Grinder) {
        return Err(StorageError::InvalidReference(format!(
            "equipment {grinder_id} is not a grinder"
        )));
    }
    Ok(())
}

fn to_model(
    id: i64,
    payload: GrindSettingPayload,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
) -> StorageResult<GrindSettingModel> {
    let size = payload.size.ok_or(StorageError::MissingField("size"))?;
    Ok(GrindSettingModel {
        id,
        grinder_id: payload.grinder_id,
        setting: payload.setting,
        size: size.ordinal(),
        notes: payload.notes,
        created_at,
        updated_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use brewlog_models::{domain::prelude::PageParams, enums::brewing::GrindSize};

    #[test]
    fn test_grinder_reference_must_be_a_grinder() {
        let db = Database::new();
        let kettle =
            EquipmentRepository::create(&db, fixtures::equipment("Stagg", EquipmentType::Kettle))
                .unwrap();

        let missing =
            GrindSettingRepository::create(&db, fixtures::grind(Some(99), GrindSize::Fine));
        assert!(matches!(missing, Err(StorageError::InvalidReference(_))));

        let wrong_type =
            GrindSettingRepository::create(&db, fixtures::grind(Some(kettle.id), GrindSize::Fine));
        assert!(matches!(wrong_type, Err(StorageError::InvalidReference(_))));

        let standalone =
            GrindSettingRepository::create(&db, fixtures::grind(None, GrindSize::Fine)).unwrap();
        assert_eq!(standalone.size, GrindSize::Fine);
    }

    #[test]
    fn test_list_by_size_and_grinder() {
        let db = Database::new();
        let grinder =
            EquipmentRepository::create(&db, fixtures::equipment("EK43", EquipmentType::Grinder))
                .unwrap();
        GrindSettingRepository::create(&db, fixtures::grind(Some(grinder.id), GrindSize::Fine))
            .unwrap();
        GrindSettingRepository::create(&db, fixtures::grind(None, GrindSize::Fine)).unwrap();
        GrindSettingRepository::create(&db, fixtures::grind(None, GrindSize::Coarse)).unwrap();

        let mut params = GrindSettingListParams {
            size: Some(GrindSize::Fine),
            grinder_id: None,
            page: PageParams::default(),
        };
        assert_eq!(GrindSettingRepository::list(&db, &params).unwrap().total, 2);
        params.grinder_id = Some(grinder.id);
        assert_eq!(GrindSettingRepository::list(&db, &params).unwrap().total, 1);
    }
}
