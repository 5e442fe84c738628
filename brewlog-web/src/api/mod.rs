//! Router module for handling all API routes

pub mod public;
pub mod v1;

use actix_web::web;

/// Configure all routes under the router prefix
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(v1::configure_v1_routes);
}

/// Configure public root routes (mounted outside the router prefix).
pub fn configure_public_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(public::configure_public_routes);
}
