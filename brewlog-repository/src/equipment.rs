use crate::Database;
use brewlog_codec::Symbolic;
use brewlog_error::{storage::StorageError, StorageResult};
use brewlog_models::{
    domain::prelude::{EquipmentInfo, EquipmentListParams, EquipmentPayload, PageResult},
    entities::prelude::EquipmentModel,
    enums::brewing::EquipmentType,
};
use chrono::{DateTime, Utc};
use tracing::{info, instrument};

/// Repository for equipment operations
pub struct EquipmentRepository;

impl EquipmentRepository {
    #[instrument(skip(db, payload), fields(name = %payload.name))]
    pub fn create(db: &Database, payload: EquipmentPayload) -> StorageResult<EquipmentInfo> {
        let now = Utc::now();
        let table = &db.tables().equipment;
        let model = to_model(0, payload, now, now)?;
        // ids are only reserved for rows that will be stored
        let id = table.next_id();
        let model = EquipmentModel { id, ..model };
        table.insert(id, model.clone());
        info!(id, "equipment created");
        EquipmentInfo::try_from(model)
    }

    pub fn get(db: &Database, id: i64) -> StorageResult<EquipmentInfo> {
        Self::find_model(db, id).and_then(EquipmentInfo::try_from)
    }

    pub(crate) fn find_model(db: &Database, id: i64) -> StorageResult<EquipmentModel> {
        db.tables()
            .equipment
            .get(id)
            .ok_or_else(|| StorageError::EntityNotFound(format!("equipment {id}")))
    }

    /// Update existing equipment.
    ///
    /// A grinder that grind settings point at cannot change its type.
    #[instrument(skip(db, payload))]
    pub fn update(
        db: &Database,
        id: i64,
        payload: EquipmentPayload,
    ) -> StorageResult<EquipmentInfo> {
        let _guard = db.delete_guard();
        let current = Self::find_model(db, id)?;
        let model = to_model(id, payload, current.created_at, Utc::now())?;
        if current.is_a(EquipmentType::Grinder)
            && !model.is_a(EquipmentType::Grinder)
            && db
                .tables()
                .grind_settings
                .any(|g| g.grinder_id == Some(id))
        {
            return Err(StorageError::Conflict(format!(
                "equipment {id} is the grinder of existing grind settings"
            )));
        }
        db.tables().equipment.replace(id, model.clone());
        info!("equipment updated");
        EquipmentInfo::try_from(model)
    }

    /// Delete equipment by ID; refused while grind settings or sessions use it
    #[instrument(skip(db))]
    pub fn delete(db: &Database, id: i64) -> StorageResult<()> {
        let _guard = db.delete_guard();
        let tables = db.tables();
        if !tables.equipment.contains(id) {
            return Err(StorageError::EntityNotFound(format!("equipment {id}")));
        }
        if tables.grind_settings.any(|g| g.grinder_id == Some(id)) {
            return Err(StorageError::Conflict(format!(
                "equipment {id} is referenced by grind settings"
            )));
        }
        if tables.brew_sessions.any(|s| s.equipment_ids.contains(&id)) {
            return Err(StorageError::Conflict(format!(
                "equipment {id} is referenced by brew sessions"
            )));
        }
        tables.equipment.remove(id);
        info!("equipment deleted");
        Ok(())
    }

    pub fn list(
        db: &Database,
        params: &EquipmentListParams,
    ) -> StorageResult<PageResult<EquipmentInfo>> {
        let equipment_type = params.equipment_type.map(Symbolic::ordinal);
        let items = db
            .tables()
            .equipment
            .scan(|e| equipment_type.map_or(true, |t| e.equipment_type == t))
            .into_iter()
            .map(EquipmentInfo::try_from)
            .collect::<StorageResult<Vec<_>>>()?;
        Ok(PageResult::paginate(items, &params.page))
    }
}

fn to_model(
    id: i64,
    payload: EquipmentPayload,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
) -> StorageResult<EquipmentModel> {
    let equipment_type = payload
        .r#type
        .ok_or(StorageError::MissingField("type"))?;
    Ok(EquipmentModel {
        id,
        name: payload.name,
        equipment_type: equipment_type.ordinal(),
        brand: payload.brand,
        notes: payload.notes,
        created_at,
        updated_at,
    })
}
