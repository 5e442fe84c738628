//! V1 version API routes
mod bean;
mod docs;
mod enums;
mod equipment;
mod grind_setting;
mod session;

use actix_web::web;

/// Configure all v1 routes
pub fn configure_v1_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope(bean::ROUTER_PREFIX).configure(bean::configure_routes))
        .service(web::scope(equipment::ROUTER_PREFIX).configure(equipment::configure_routes))
        .service(
            web::scope(grind_setting::ROUTER_PREFIX).configure(grind_setting::configure_routes),
        )
        .service(web::scope(session::ROUTER_PREFIX).configure(session::configure_routes))
        .service(web::scope(enums::ROUTER_PREFIX).configure(enums::configure_routes))
        .service(web::scope(docs::ROUTER_PREFIX).configure(docs::configure_routes));
}
