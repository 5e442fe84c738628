use crate::AppState;
use actix_web::web::{self, ServiceConfig};
use actix_web_validator::{Json, Path, Query};
use brewlog_error::WebResult;
use brewlog_models::{
    domain::prelude::{BeanListParams, CoffeeBeanInfo, CoffeeBeanPayload, PageResult, PathId},
    web::WebResponse,
};
use brewlog_repository::BeanRepository;
use tracing::instrument;

pub(super) const ROUTER_PREFIX: &str = "/beans";

/// Configure coffee bean routes
///
/// # Routes
/// - GET ``: Filtered page of beans
/// - POST ``: Create a bean
/// - GET `/{id}`: Bean details
/// - PUT `/{id}`: Replace a bean
/// - DELETE `/{id}`: Delete a bean that no brew session references
pub(crate) fn configure_routes(cfg: &mut ServiceConfig) {
    cfg.route("", web::get().to(list))
        .route("", web::post().to(create))
        .route("/{id}", web::get().to(get_by_id))
        .route("/{id}", web::put().to(update))
        .route("/{id}", web::delete().to(delete));
}

/// `GET /api/beans?name=&roastLevel=&processingMethod=&page=&pageSize=`
#[instrument(name = "list-beans", skip_all)]
pub async fn list(
    params: Query<BeanListParams>,
    state: web::Data<AppState>,
) -> WebResult<WebResponse<PageResult<CoffeeBeanInfo>>> {
    let result = BeanRepository::list(&state.db, &params.into_inner())?;
    Ok(WebResponse::ok(result))
}

#[instrument(name = "get-bean", skip_all, fields(id = req.id))]
pub async fn get_by_id(
    req: Path<PathId>,
    state: web::Data<AppState>,
) -> WebResult<WebResponse<CoffeeBeanInfo>> {
    Ok(WebResponse::ok(BeanRepository::get(&state.db, req.id)?))
}

/// Create a new bean
///
/// # Errors
/// - Bad Request (400): malformed body, or a payload failing validation
#[instrument(name = "create-bean", skip_all)]
pub async fn create(
    payload: Json<CoffeeBeanPayload>,
    state: web::Data<AppState>,
) -> WebResult<WebResponse<CoffeeBeanInfo>> {
    let bean = BeanRepository::create(&state.db, payload.into_inner())?;
    Ok(WebResponse::ok(bean))
}

#[instrument(name = "update-bean", skip_all, fields(id = req.id))]
pub async fn update(
    req: Path<PathId>,
    payload: Json<CoffeeBeanPayload>,
    state: web::Data<AppState>,
) -> WebResult<WebResponse<CoffeeBeanInfo>> {
    let bean = BeanRepository::update(&state.db, req.id, payload.into_inner())?;
    Ok(WebResponse::ok(bean))
}

/// Delete a bean
///
/// # Errors
/// - Not Found (404): unknown id
/// - Conflict (409): brew sessions still reference the bean
#[instrument(name = "delete-bean", skip_all, fields(id = req.id))]
pub async fn delete(
    req: Path<PathId>,
    state: web::Data<AppState>,
) -> WebResult<WebResponse<bool>> {
    BeanRepository::delete(&state.db, req.id)?;
    Ok(WebResponse::ok(true))
}

#[cfg(test)]
mod tests {
    use crate::testing::app;
    use actix_web::{http::StatusCode, test};
    use brewlog_repository::Database;
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn test_create_accepts_any_casing_and_answers_canonical_name() {
        let app = test::init_service(app(Database::new())).await;
        let req = test::TestRequest::post()
            .uri("/api/beans")
            .set_json(json!({
                "name": "Kochere",
                "roaster": "Tim Wendelboe",
                "roastLevel": "mediumlight",
                "processingMethod": 4,
            }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["code"], 0);
        assert_eq!(body["data"]["roastLevel"], "MediumLight");
        assert_eq!(body["data"]["processingMethod"], "WetHulled");

        let req = test::TestRequest::get().uri("/api/beans/1").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["name"], "Kochere");
    }

    #[actix_web::test]
    async fn test_unknown_roast_level_is_malformed_request() {
        let app = test::init_service(app(Database::new())).await;
        let req = test::TestRequest::post()
            .uri("/api/beans")
            .set_json(json!({"name": "Kochere", "roaster": "TW", "roastLevel": "Charcoal"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Malformed Request");
        assert_eq!(
            body["message"],
            "Unable to convert \"Charcoal\" to RoastLevel. \
             Valid values are: Light, MediumLight, Medium, MediumDark, Dark"
        );
        assert_eq!(body["type"], "RoastLevel");
        assert_eq!(body["value"], "Charcoal");
        assert_eq!(
            body["accepted"],
            json!(["Light", "MediumLight", "Medium", "MediumDark", "Dark"])
        );
    }

    #[actix_web::test]
    async fn test_validation_failures_are_reported_together() {
        let app = test::init_service(app(Database::new())).await;
        let req = test::TestRequest::post()
            .uri("/api/beans")
            .set_json(json!({"name": "", "roaster": "TW", "roastLevel": ""}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Validation Failed");
        assert!(body["fields"].get("name").is_some());
        assert_eq!(body["fields"]["roastLevel"][0], "roastLevel is required");
        assert!(body["fields"].get("roast_level").is_none());
    }

    #[actix_web::test]
    async fn test_list_filters_by_query() {
        let app = test::init_service(app(Database::new())).await;
        for (name, level) in [("Kochere", "Light"), ("Sumatra", "Dark")] {
            let req = test::TestRequest::post()
                .uri("/api/beans")
                .set_json(json!({"name": name, "roaster": "TW", "roastLevel": level}))
                .to_request();
            test::call_service(&app, req).await;
        }

        let req = test::TestRequest::get()
            .uri("/api/beans?roastLevel=DARK")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["total"], 1);
        assert_eq!(body["data"]["records"][0]["name"], "Sumatra");

        let req = test::TestRequest::get()
            .uri("/api/beans?roastLevel=Burnt")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Malformed Request");
        assert_eq!(body["type"], "RoastLevel");
        assert_eq!(body["value"], "Burnt");
        assert_eq!(body["accepted"].as_array().unwrap().len(), 5);
    }

    #[actix_web::test]
    async fn test_missing_bean_is_not_found() {
        let app = test::init_service(app(Database::new())).await;
        let req = test::TestRequest::delete().uri("/api/beans/42").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::get().uri("/api/beans/0").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
