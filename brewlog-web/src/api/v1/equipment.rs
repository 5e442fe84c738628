use crate::AppState;
use actix_web::web::{self, ServiceConfig};
use actix_web_validator::{Json, Path, Query};
use brewlog_error::WebResult;
use brewlog_models::{
    domain::prelude::{EquipmentInfo, EquipmentListParams, EquipmentPayload, PageResult, PathId},
    web::WebResponse,
};
use brewlog_repository::EquipmentRepository;
use tracing::instrument;

pub(super) const ROUTER_PREFIX: &str = "/equipment";

/// Configure equipment routes
pub(crate) fn configure_routes(cfg: &mut ServiceConfig) {
    cfg.route("", web::get().to(list))
        .route("", web::post().to(create))
        .route("/{id}", web::get().to(get_by_id))
        .route("/{id}", web::put().to(update))
        .route("/{id}", web::delete().to(delete));
}

/// `GET /api/equipment?type=&page=&pageSize=`
#[instrument(name = "list-equipment", skip_all)]
pub async fn list(
    params: Query<EquipmentListParams>,
    state: web::Data<AppState>,
) -> WebResult<WebResponse<PageResult<EquipmentInfo>>> {
    let result = EquipmentRepository::list(&state.db, &params.into_inner())?;
    Ok(WebResponse::ok(result))
}

#[instrument(name = "get-equipment", skip_all, fields(id = req.id))]
pub async fn get_by_id(
    req: Path<PathId>,
    state: web::Data<AppState>,
) -> WebResult<WebResponse<EquipmentInfo>> {
    Ok(WebResponse::ok(EquipmentRepository::get(&state.db, req.id)?))
}

#[instrument(name = "create-equipment", skip_all)]
pub async fn create(
    payload: Json<EquipmentPayload>,
    state: web::Data<AppState>,
) -> WebResult<WebResponse<EquipmentInfo>> {
    let equipment = EquipmentRepository::create(&state.db, payload.into_inner())?;
    Ok(WebResponse::ok(equipment))
}

/// Replace equipment
///
/// # Errors
/// - Conflict (409): a grinder used by grind settings changes its type
#[instrument(name = "update-equipment", skip_all, fields(id = req.id))]
pub async fn update(
    req: Path<PathId>,
    payload: Json<EquipmentPayload>,
    state: web::Data<AppState>,
) -> WebResult<WebResponse<EquipmentInfo>> {
    let equipment = EquipmentRepository::update(&state.db, req.id, payload.into_inner())?;
    Ok(WebResponse::ok(equipment))
}

#[instrument(name = "delete-equipment", skip_all, fields(id = req.id))]
pub async fn delete(
    req: Path<PathId>,
    state: web::Data<AppState>,
) -> WebResult<WebResponse<bool>> {
    EquipmentRepository::delete(&state.db, req.id)?;
    Ok(WebResponse::ok(true))
}
