use crate::Database;
use brewlog_codec::Symbolic;
use brewlog_error::{storage::StorageError, StorageResult};
use brewlog_models::{
    domain::prelude::{BeanListParams, CoffeeBeanInfo, CoffeeBeanPayload, PageResult},
    entities::prelude::BeanModel,
};
use chrono::{DateTime, Utc};
use tracing::{info, instrument};

/// Repository for coffee bean operations
pub struct BeanRepository;

impl BeanRepository {
    /// Create new bean
    #[instrument(skip(db, payload), fields(name = %payload.name))]
    pub fn create(db: &Database, payload: CoffeeBeanPayload) -> StorageResult<CoffeeBeanInfo> {
        let now = Utc::now();
        let table = &db.tables().beans;
        let model = to_model(0, payload, now, now)?;
        // ids are only reserved for rows that will be stored
        let id = table.next_id();
        let model = BeanModel { id, ..model };
        table.insert(id, model.clone());
        info!(id, "coffee bean created");
        CoffeeBeanInfo::try_from(model)
    }

    pub fn get(db: &Database, id: i64) -> StorageResult<CoffeeBeanInfo> {
        Self::find_model(db, id).and_then(CoffeeBeanInfo::try_from)
    }

    pub(crate) fn find_model(db: &Database, id: i64) -> StorageResult<BeanModel> {
        db.tables()
            .beans
            .get(id)
            .ok_or_else(|| StorageError::EntityNotFound(format!("coffee bean {id}")))
    }

    /// Update existing bean
    #[instrument(skip(db, payload))]
    pub fn update(
        db: &Database,
        id: i64,
        payload: CoffeeBeanPayload,
    ) -> StorageResult<CoffeeBeanInfo> {
        let current = Self::find_model(db, id)?;
        let model = to_model(id, payload, current.created_at, Utc::now())?;
        if !db.tables().beans.replace(id, model.clone()) {
            return Err(StorageError::EntityNotFound(format!("coffee bean {id}")));
        }
        info!("coffee bean updated");
        CoffeeBeanInfo::try_from(model)
    }

    /// Delete bean by ID; refused while brew sessions still reference it
    #[instrument(skip(db))]
    pub fn delete(db: &Database, id: i64) -> StorageResult<()> {
        let _guard = db.delete_guard();
        let tables = db.tables();
        if !tables.beans.contains(id) {
            return Err(StorageError::EntityNotFound(format!("coffee bean {id}")));
        }
        if tables.brew_sessions.any(|s| s.bean_id == id) {
            return Err(StorageError::Conflict(format!(
                "coffee bean {id} is referenced by brew sessions"
            )));
        }
        tables.beans.remove(id);
        info!("coffee bean deleted");
        Ok(())
    }

    /// Filtered page of beans, ordered by id
    pub fn list(
        db: &Database,
        params: &BeanListParams,
    ) -> StorageResult<PageResult<CoffeeBeanInfo>> {
        let name = params
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_lowercase);
        let roast_level = params.roast_level.map(Symbolic::ordinal);
        let processing_method = params.processing_method.map(Symbolic::ordinal);

        let items = db
            .tables()
            .beans
            .scan(|bean| {
                name.as_deref()
                    .map_or(true, |n| bean.name.to_lowercase().contains(n))
                    && roast_level.map_or(true, |r| bean.roast_level == r)
                    && processing_method.map_or(true, |p| bean.processing_method == Some(p))
            })
            .into_iter()
            .map(CoffeeBeanInfo::try_from)
            .collect::<StorageResult<Vec<_>>>()?;
        Ok(PageResult::paginate(items, &params.page))
    }
}

fn to_model(
    id: i64,
    payload: CoffeeBeanPayload,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
) -> StorageResult<BeanModel> {
    let roast_level = payload
        .roast_level
        .ok_or(StorageError::MissingField("roastLevel"))?;
    Ok(BeanModel {
        id,
        name: payload.name,
        roaster: payload.roaster,
        origin: payload.origin,
        roast_level: roast_level.ordinal(),
        processing_method: payload.processing_method.map(Symbolic::ordinal),
        roast_date: payload.roast_date,
        notes: payload.notes,
        created_at,
        updated_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{fixtures, BrewSessionRepository};
    use brewlog_models::{
        domain::prelude::PageParams,
        enums::{brewing::BrewMethod, coffee::RoastLevel},
    };

    fn list_params(roast_level: Option<RoastLevel>) -> BeanListParams {
        BeanListParams {
            name: None,
            roast_level,
            processing_method: None,
            page: PageParams::default(),
        }
    }

    #[test]
    fn test_create_and_get() {
        let db = Database::new();
        let created = BeanRepository::create(&db, fixtures::bean("Geisha", RoastLevel::Light))
            .unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(db.tables().beans.get(1).unwrap().roast_level, 0);
        assert_eq!(BeanRepository::get(&db, 1).unwrap(), created);
        assert!(matches!(
            BeanRepository::get(&db, 2),
            Err(StorageError::EntityNotFound(_))
        ));
    }

    #[test]
    fn test_missing_roast_level_is_rejected() {
        let db = Database::new();
        let mut payload = fixtures::bean("Geisha", RoastLevel::Light);
        payload.roast_level = None;
        assert_eq!(
            BeanRepository::create(&db, payload),
            Err(StorageError::MissingField("roastLevel"))
        );
        assert!(db.tables().beans.is_empty());
    }

    #[test]
    fn test_rejected_create_does_not_use_up_an_id() {
        let db = Database::new();
        let mut payload = fixtures::bean("Geisha", RoastLevel::Light);
        payload.roast_level = None;
        assert!(BeanRepository::create(&db, payload).is_err());

        let created =
            BeanRepository::create(&db, fixtures::bean("Geisha", RoastLevel::Light)).unwrap();
        assert_eq!(created.id, 1);
    }

    #[test]
    fn test_update_keeps_created_at() {
        let db = Database::new();
        let created =
            BeanRepository::create(&db, fixtures::bean("Geisha", RoastLevel::Light)).unwrap();
        let updated =
            BeanRepository::update(&db, created.id, fixtures::bean("Geisha", RoastLevel::Dark))
                .unwrap();
        assert_eq!(updated.roast_level, RoastLevel::Dark);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[test]
    fn test_list_filters_by_roast_level() {
        let db = Database::new();
        BeanRepository::create(&db, fixtures::bean("Kochere", RoastLevel::Light)).unwrap();
        BeanRepository::create(&db, fixtures::bean("Sumatra", RoastLevel::Dark)).unwrap();
        BeanRepository::create(&db, fixtures::bean("Gesha", RoastLevel::Light)).unwrap();

        let page = BeanRepository::list(&db, &list_params(Some(RoastLevel::Light))).unwrap();
        assert_eq!(page.total, 2);
        assert_eq!(page.records[1].name, "Gesha");

        let mut by_name = list_params(None);
        by_name.name = Some("SUMA".into());
        assert_eq!(BeanRepository::list(&db, &by_name).unwrap().total, 1);
    }

    #[test]
    fn test_delete_in_use_is_conflict() {
        let db = Database::new();
        let bean =
            BeanRepository::create(&db, fixtures::bean("Kochere", RoastLevel::Light)).unwrap();
        let session =
            BrewSessionRepository::create(&db, fixtures::session(bean.id, BrewMethod::Chemex))
                .unwrap();

        assert!(matches!(
            BeanRepository::delete(&db, bean.id),
            Err(StorageError::Conflict(_))
        ));
        BrewSessionRepository::delete(&db, session.id).unwrap();
        BeanRepository::delete(&db, bean.id).unwrap();
        assert!(db.tables().beans.is_empty());
    }

    #[test]
    fn test_corrupted_row_surfaces_symbolic_error() {
        let db = Database::new();
        let bean =
            BeanRepository::create(&db, fixtures::bean("Kochere", RoastLevel::Light)).unwrap();
        let mut row = db.tables().beans.get(bean.id).unwrap();
        row.roast_level = 42;
        db.tables().beans.replace(bean.id, row);
        assert!(matches!(
            BeanRepository::get(&db, bean.id),
            Err(StorageError::Corrupted(_))
        ));
    }
}
