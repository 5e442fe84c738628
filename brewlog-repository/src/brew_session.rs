use crate::Database;
use brewlog_codec::Symbolic;
use brewlog_error::{storage::StorageError, StorageResult};
use brewlog_models::{
    domain::prelude::{BrewSessionInfo, BrewSessionListParams, BrewSessionPayload, PageResult},
    entities::prelude::BrewSessionModel,
    enums::brewing::BrewMethod,
};
use chrono::{DateTime, Utc};
use std::cmp::Reverse;
use tracing::{info, instrument};

/// Repository for brew session operations
pub struct BrewSessionRepository;

impl BrewSessionRepository {
    #[instrument(skip(db, payload), fields(bean_id = payload.bean_id))]
    pub fn create(db: &Database, payload: BrewSessionPayload) -> StorageResult<BrewSessionInfo> {
        let _guard = db.reference_guard();
        check_references(db, &payload)?;
        let now = Utc::now();
        let table = &db.tables().brew_sessions;
        let model = to_model(0, payload, now, now)?;
        // ids are only reserved for rows that will be stored
        let id = table.next_id();
        let model = BrewSessionModel { id, ..model };
        table.insert(id, model.clone());
        info!(id, "brew session recorded");
        BrewSessionInfo::try_from(model)
    }

    pub fn get(db: &Database, id: i64) -> StorageResult<BrewSessionInfo> {
        db.tables()
            .brew_sessions
            .get(id)
            .ok_or_else(|| StorageError::EntityNotFound(format!("brew session {id}")))
            .and_then(BrewSessionInfo::try_from)
    }

    #[instrument(skip(db, payload))]
    pub fn update(
        db: &Database,
        id: i64,
        payload: BrewSessionPayload,
    ) -> StorageResult<BrewSessionInfo> {
        let _guard = db.reference_guard();
        let current = db
            .tables()
            .brew_sessions
            .get(id)
            .ok_or_else(|| StorageError::EntityNotFound(format!("brew session {id}")))?;
        check_references(db, &payload)?;
        let model = to_model(id, payload, current.created_at, Utc::now())?;
        if !db.tables().brew_sessions.replace(id, model.clone()) {
            return Err(StorageError::EntityNotFound(format!("brew session {id}")));
        }
        info!("brew session updated");
        BrewSessionInfo::try_from(model)
    }

    #[instrument(skip(db))]
    pub fn delete(db: &Database, id: i64) -> StorageResult<()> {
        db.tables()
            .brew_sessions
            .remove(id)
            .ok_or_else(|| StorageError::EntityNotFound(format!("brew session {id}")))?;
        info!("brew session deleted");
        Ok(())
    }

    /// Sessions newest first; an empty `methods` slice matches every method.
    pub fn list(
        db: &Database,
        params: &BrewSessionListParams,
        methods: &[BrewMethod],
    ) -> StorageResult<PageResult<BrewSessionInfo>> {
        let methods: Vec<i64> = methods.iter().map(|m| m.ordinal()).collect();
        let mut rows = db.tables().brew_sessions.scan(|s| {
            params.bean_id.map_or(true, |id| s.bean_id == id)
                && (methods.is_empty() || methods.contains(&s.brew_method))
        });
        rows.sort_by_key(|s| (Reverse(s.brewed_at), Reverse(s.id)));
        let items = rows
            .into_iter()
            .map(BrewSessionInfo::try_from)
            .collect::<StorageResult<Vec<_>>>()?;
        Ok(PageResult::paginate(items, &params.page))
    }
}

fn check_references(db: &Database, payload: &BrewSessionPayload) -> StorageResult<()> {
    let tables = db.tables();
    if !tables.beans.contains(payload.bean_id) {
        return Err(StorageError::InvalidReference(format!(
            "coffee bean {} does not exist",
            payload.bean_id
        )));
    }
    if let Some(grind_setting_id) = payload.grind_setting_id {
        if !tables.grind_settings.contains(grind_setting_id) {
            return Err(StorageError::InvalidReference(format!(
                "grind setting {grind_setting_id} does not exist"
            )));
        }
    }
    if let Some(missing) = payload
        .equipment_ids
        .iter()
        .find(|id| !tables.equipment.contains(**id))
    {
        return Err(StorageError::InvalidReference(format!(
            "equipment {missing} does not exist"
        )));
    }
    Ok(())
}

fn to_model(
    id: i64,
    payload: BrewSessionPayload,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
) -> StorageResult<BrewSessionModel> {
    let brew_method = payload
        .brew_method
        .ok_or(StorageError::MissingField("brewMethod"))?;
    let mut equipment_ids = payload.equipment_ids;
    equipment_ids.sort_unstable();
    equipment_ids.dedup();
    Ok(BrewSessionModel {
        id,
        bean_id: payload.bean_id,
        brew_method: brew_method.ordinal(),
        grind_setting_id: payload.grind_setting_id,
        equipment_ids,
        dose_grams: payload.dose_grams,
        water_grams: payload.water_grams,
        water_temperature_c: payload.water_temperature_c,
        brew_time_seconds: payload.brew_time_seconds,
        rating: payload.rating,
        tasting_notes: payload.tasting_notes,
        brewed_at: payload.brewed_at.unwrap_or(created_at),
        created_at,
        updated_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{fixtures, BeanRepository, EquipmentRepository};
    use brewlog_models::{
        domain::prelude::PageParams,
        enums::{brewing::EquipmentType, coffee::RoastLevel},
    };
    use chrono::Duration;

    fn list_params(bean_id: Option<i64>) -> BrewSessionListParams {
        BrewSessionListParams {
            bean_id,
            brew_method: None,
            page: PageParams::default(),
        }
    }

    #[test]
    fn test_references_are_checked() {
        let db = Database::new();
        let unknown_bean =
            BrewSessionRepository::create(&db, fixtures::session(5, BrewMethod::Espresso));
        assert!(matches!(unknown_bean, Err(StorageError::InvalidReference(_))));

        let bean =
            BeanRepository::create(&db, fixtures::bean("Kochere", RoastLevel::Light)).unwrap();
        let mut payload = fixtures::session(bean.id, BrewMethod::Espresso);
        payload.equipment_ids = vec![3];
        assert!(matches!(
            BrewSessionRepository::create(&db, payload.clone()),
            Err(StorageError::InvalidReference(_))
        ));

        let brewer =
            EquipmentRepository::create(&db, fixtures::equipment("V60", EquipmentType::Brewer))
                .unwrap();
        payload.equipment_ids = vec![brewer.id, brewer.id];
        let session = BrewSessionRepository::create(&db, payload).unwrap();
        assert_eq!(session.id, 1);
        assert_eq!(session.equipment_ids, vec![brewer.id]);
        assert_eq!(session.ratio, 16.7);
    }

    #[test]
    fn test_list_filters_and_orders_newest_first() {
        let db = Database::new();
        let bean =
            BeanRepository::create(&db, fixtures::bean("Kochere", RoastLevel::Light)).unwrap();
        let other =
            BeanRepository::create(&db, fixtures::bean("Sumatra", RoastLevel::Dark)).unwrap();
        let earlier = Utc::now() - Duration::days(1);

        let mut old = fixtures::session(bean.id, BrewMethod::PourOver);
        old.brewed_at = Some(earlier);
        BrewSessionRepository::create(&db, old).unwrap();
        BrewSessionRepository::create(&db, fixtures::session(bean.id, BrewMethod::Espresso))
            .unwrap();
        BrewSessionRepository::create(&db, fixtures::session(other.id, BrewMethod::PourOver))
            .unwrap();

        let all = BrewSessionRepository::list(&db, &list_params(Some(bean.id)), &[]).unwrap();
        assert_eq!(all.total, 2);
        assert_eq!(all.records[0].brew_method, BrewMethod::Espresso);
        assert_eq!(all.records[1].brewed_at, earlier);

        let pour_overs =
            BrewSessionRepository::list(&db, &list_params(None), &[BrewMethod::PourOver])
                .unwrap();
        assert_eq!(pour_overs.total, 2);
        let either = BrewSessionRepository::list(
            &db,
            &list_params(None),
            &[BrewMethod::PourOver, BrewMethod::Espresso],
        )
        .unwrap();
        assert_eq!(either.total, 3);
    }

    #[test]
    fn test_delete_unknown_is_not_found() {
        let db = Database::new();
        assert!(matches!(
            BrewSessionRepository::delete(&db, 1),
            Err(StorageError::EntityNotFound(_))
        ));
    }
}
