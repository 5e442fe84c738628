use crate::AppState;
use actix_web::web::{self, ServiceConfig};
use actix_web_validator::{Json, Path, Query};
use brewlog_error::WebResult;
use brewlog_models::{
    domain::prelude::{
        GrindSettingInfo, GrindSettingListParams, GrindSettingPayload, PageResult, PathId,
    },
    web::WebResponse,
};
use brewlog_repository::GrindSettingRepository;
use tracing::instrument;

pub(super) const ROUTER_PREFIX: &str = "/grind-settings";

/// Configure grind setting routes
pub(crate) fn configure_routes(cfg: &mut ServiceConfig) {
    cfg.route("", web::get().to(list))
        .route("", web::post().to(create))
        .route("/{id}", web::get().to(get_by_id))
        .route("/{id}", web::put().to(update))
        .route("/{id}", web::delete().to(delete));
}

/// `GET /api/grind-settings?size=&grinderId=&page=&pageSize=`
#[instrument(name = "list-grind-settings", skip_all)]
pub async fn list(
    params: Query<GrindSettingListParams>,
    state: web::Data<AppState>,
) -> WebResult<WebResponse<PageResult<GrindSettingInfo>>> {
    let result = GrindSettingRepository::list(&state.db, &params.into_inner())?;
    Ok(WebResponse::ok(result))
}

#[instrument(name = "get-grind-setting", skip_all, fields(id = req.id))]
pub async fn get_by_id(
    req: Path<PathId>,
    state: web::Data<AppState>,
) -> WebResult<WebResponse<GrindSettingInfo>> {
    Ok(WebResponse::ok(GrindSettingRepository::get(&state.db, req.id)?))
}

/// Create a grind setting
///
/// # Errors
/// - Bad Request (400): `grinderId` is unknown or not a grinder
#[instrument(name = "create-grind-setting", skip_all)]
pub async fn create(
    payload: Json<GrindSettingPayload>,
    state: web::Data<AppState>,
) -> WebResult<WebResponse<GrindSettingInfo>> {
    let setting = GrindSettingRepository::create(&state.db, payload.into_inner())?;
    Ok(WebResponse::ok(setting))
}

#[instrument(name = "update-grind-setting", skip_all, fields(id = req.id))]
pub async fn update(
    req: Path<PathId>,
    payload: Json<GrindSettingPayload>,
    state: web::Data<AppState>,
) -> WebResult<WebResponse<GrindSettingInfo>> {
    let setting = GrindSettingRepository::update(&state.db, req.id, payload.into_inner())?;
    Ok(WebResponse::ok(setting))
}

#[instrument(name = "delete-grind-setting", skip_all, fields(id = req.id))]
pub async fn delete(
    req: Path<PathId>,
    state: web::Data<AppState>,
) -> WebResult<WebResponse<bool>> {
    GrindSettingRepository::delete(&state.db, req.id)?;
    Ok(WebResponse::ok(true))
}

#[cfg(test)]
mod tests {
    use crate::testing::app;
    use actix_web::{http::StatusCode, test};
    use brewlog_repository::Database;
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn test_grinder_must_be_a_grinder() {
        let app = test::init_service(app(Database::new())).await;
        let req = test::TestRequest::post()
            .uri("/api/equipment")
            .set_json(json!({"name": "V60", "type": "Brewer"}))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::post()
            .uri("/api/grind-settings")
            .set_json(json!({"grinderId": 1, "setting": "18 clicks", "size": "medium"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "equipment 1 is not a grinder");
    }

    #[actix_web::test]
    async fn test_size_round_trips_as_name() {
        let app = test::init_service(app(Database::new())).await;
        let req = test::TestRequest::post()
            .uri("/api/grind-settings")
            .set_json(json!({"setting": "2.5", "size": 1}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["size"], "Fine");
        assert!(body["data"].get("grinderId").is_none());
    }
}
