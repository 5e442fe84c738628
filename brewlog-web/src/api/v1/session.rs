use crate::AppState;
use actix_web::web::{self, ServiceConfig};
use actix_web_validator::{Json, Path, Query};
use brewlog_error::{web::WebError, WebResult};
use brewlog_models::{
    domain::prelude::{
        BrewSessionInfo, BrewSessionListParams, BrewSessionPayload, PageResult, PathId,
    },
    web::WebResponse,
};
use brewlog_repository::BrewSessionRepository;
use tracing::{instrument, warn};

pub(super) const ROUTER_PREFIX: &str = "/brew-sessions";

/// Configure brew session routes
pub(crate) fn configure_routes(cfg: &mut ServiceConfig) {
    cfg.route("", web::get().to(list))
        .route("", web::post().to(create))
        .route("/{id}", web::get().to(get_by_id))
        .route("/{id}", web::put().to(update))
        .route("/{id}", web::delete().to(delete));
}

/// `GET /api/brew-sessions?beanId=&brewMethod=PourOver,Chemex&page=&pageSize=`
///
/// An unknown method in `brewMethod` answers 400 with the attempted value
/// and the accepted names.
#[instrument(name = "list-brew-sessions", skip_all)]
pub async fn list(
    params: Query<BrewSessionListParams>,
    state: web::Data<AppState>,
) -> WebResult<WebResponse<PageResult<BrewSessionInfo>>> {
    let params = params.into_inner();
    let methods = params.brew_methods().map_err(|e| {
        warn!(error = %e, "rejected brewMethod filter");
        WebError::from(e)
    })?;
    let result = BrewSessionRepository::list(&state.db, &params, &methods)?;
    Ok(WebResponse::ok(result))
}

#[instrument(name = "get-brew-session", skip_all, fields(id = req.id))]
pub async fn get_by_id(
    req: Path<PathId>,
    state: web::Data<AppState>,
) -> WebResult<WebResponse<BrewSessionInfo>> {
    Ok(WebResponse::ok(BrewSessionRepository::get(&state.db, req.id)?))
}

/// Record a brew session
///
/// # Errors
/// - Bad Request (400): malformed body, failed validation, or a reference to
///   a bean, grind setting or piece of equipment that does not exist
#[instrument(name = "create-brew-session", skip_all)]
pub async fn create(
    payload: Json<BrewSessionPayload>,
    state: web::Data<AppState>,
) -> WebResult<WebResponse<BrewSessionInfo>> {
    let session = BrewSessionRepository::create(&state.db, payload.into_inner())?;
    Ok(WebResponse::ok(session))
}

#[instrument(name = "update-brew-session", skip_all, fields(id = req.id))]
pub async fn update(
    req: Path<PathId>,
    payload: Json<BrewSessionPayload>,
    state: web::Data<AppState>,
) -> WebResult<WebResponse<BrewSessionInfo>> {
    let session = BrewSessionRepository::update(&state.db, req.id, payload.into_inner())?;
    Ok(WebResponse::ok(session))
}

#[instrument(name = "delete-brew-session", skip_all, fields(id = req.id))]
pub async fn delete(
    req: Path<PathId>,
    state: web::Data<AppState>,
) -> WebResult<WebResponse<bool>> {
    BrewSessionRepository::delete(&state.db, req.id)?;
    Ok(WebResponse::ok(true))
}

#[cfg(test)]
mod tests {
    use crate::testing::app;
    use actix_web::{http::StatusCode, test};
    use brewlog_repository::Database;
    use serde_json::{json, Value};

    fn post(uri: &str, body: Value) -> test::TestRequest {
        test::TestRequest::post().uri(uri).set_json(body)
    }

    #[actix_web::test]
    async fn test_session_lifecycle() {
        let app = test::init_service(app(Database::new())).await;
        let bean = json!({"name": "Kochere", "roaster": "TW", "roastLevel": "Light"});
        let resp = test::call_service(&app, post("/api/beans", bean).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        for method in ["PourOver", "espresso", "CHEMEX"] {
            let session =
                json!({"beanId": 1, "brewMethod": method, "doseGrams": 18, "waterGrams": 300});
            let req = post("/api/brew-sessions", session).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK);
        }

        let req = test::TestRequest::get()
            .uri("/api/brew-sessions?beanId=1&brewMethod=pourover,Chemex")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["total"], 2);

        let req = test::TestRequest::delete().uri("/api/beans/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }

    #[actix_web::test]
    async fn test_bad_brew_method_filter_lists_accepted_values() {
        let app = test::init_service(app(Database::new())).await;
        let req = test::TestRequest::get()
            .uri("/api/brew-sessions?brewMethod=Espresso,Percolator")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Malformed Request");
        assert_eq!(body["type"], "BrewMethod");
        assert_eq!(body["value"], "Percolator");
        assert_eq!(body["accepted"][0], "PourOver");
        assert_eq!(body["accepted"].as_array().unwrap().len(), 8);
    }

    #[actix_web::test]
    async fn test_every_rule_violation_is_reported() {
        let app = test::init_service(app(Database::new())).await;
        let session = json!({
            "beanId": 1,
            "brewMethod": "",
            "doseGrams": 0,
            "waterGrams": 5000,
            "rating": 0,
        });
        let resp = test::call_service(&app, post("/api/brew-sessions", session).to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        let fields = body["fields"].as_object().unwrap();
        for field in ["brewMethod", "doseGrams", "waterGrams", "rating"] {
            assert!(fields.contains_key(field), "missing {field}");
        }
    }

    #[actix_web::test]
    async fn test_unknown_bean_is_rejected() {
        let app = test::init_service(app(Database::new())).await;
        let session = json!({"beanId": 9, "brewMethod": 2, "doseGrams": 18, "waterGrams": 36});
        let resp = test::call_service(&app, post("/api/brew-sessions", session).to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "coffee bean 9 does not exist");
    }
}
