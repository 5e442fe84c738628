use crate::AppState;
use actix_web::{
    web::{self, ServiceConfig},
    HttpResponse,
};

pub(super) const ROUTER_PREFIX: &str = "/docs";

pub(crate) fn configure_routes(cfg: &mut ServiceConfig) {
    cfg.route("/openapi.json", web::get().to(openapi));
}

/// The OpenAPI document is built once at startup and served as is.
pub async fn openapi(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.openapi.as_ref())
}
