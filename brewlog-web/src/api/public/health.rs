//! Health check endpoint, independent of the API router prefix.

use actix_web::{web, HttpResponse};

/// Configure health check routes.
pub fn configure_health_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health));
}

/// Simple health check handler.
async fn health() -> HttpResponse {
    HttpResponse::Ok().body("OK")
}

#[cfg(test)]
mod tests {
    use crate::testing::app;
    use actix_web::test;
    use brewlog_repository::Database;

    #[actix_web::test]
    async fn test_health_ignores_router_prefix() {
        let app = test::init_service(app(Database::new())).await;
        let req = test::TestRequest::get().uri("/health").to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, "OK");
    }
}
