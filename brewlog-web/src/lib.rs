//! Web server module for the BrewLog application
mod api;
mod extract;
mod openapi;

use actix_web::{
    dev::{Server, ServerHandle},
    middleware::{Logger, NormalizePath},
    web::{self, Data},
    App, HttpServer,
};
use async_trait::async_trait;
use brewlog_common::WebServer;
use brewlog_error::{BrewError, BrewResult};
use brewlog_models::settings::{Settings, Web as WebSettings};
use brewlog_repository::Database;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, instrument};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    db: Database,
    openapi: Arc<Value>,
}

impl AppState {
    pub fn new(db: Database, router_prefix: &str) -> Self {
        Self {
            db,
            openapi: Arc::new(openapi::build(router_prefix)),
        }
    }
}

/// Registers state, extractor error handling and every route.
pub fn configure_app(cfg: &mut web::ServiceConfig, state: AppState, settings: &WebSettings) {
    cfg.app_data(Data::new(state))
        .app_data(extract::json_config(settings.json_limit))
        .app_data(extract::query_config())
        .app_data(extract::path_config())
        // Public root routes (not under `/api`).
        .configure(api::configure_public_routes)
        .service(web::scope(&settings.router_prefix).configure(api::configure_routes));
}

/// BrewWebServer handles the web server initialization and management
#[derive(Clone)]
pub struct BrewWebServer {
    /// Server handle for graceful shutdown
    server: Arc<Mutex<Option<ServerHandle>>>,
}

impl BrewWebServer {
    /// Create and configure the HTTP server
    fn create_server(settings: &Settings, db: Database) -> BrewResult<Server> {
        let addr = format!("{}:{}", settings.web.host, settings.web.port);
        let worker_count = settings.web.get_worker_count();
        let web_settings = settings.web.clone();
        let state = AppState::new(db, &web_settings.router_prefix);

        let server = HttpServer::new(move || {
            App::new()
                .wrap(Logger::default())
                .wrap(NormalizePath::trim())
                .configure(|cfg| configure_app(cfg, state.clone(), &web_settings))
        })
        .workers(worker_count)
        .bind(&addr)
        .map_err(|e| BrewError::from(format!("Failed to bind HTTP server to {addr}: {e}")))?;

        info!(%addr, workers = worker_count, "HTTP server bound");
        Ok(server.run())
    }
}

#[async_trait]
impl WebServer for BrewWebServer {
    #[instrument(name = "init-web-server", skip_all)]
    async fn init(settings: &Settings, db: Database) -> BrewResult<Arc<Self>> {
        let server = Self::create_server(settings, db)?;
        let server_handle = server.handle();

        tokio::spawn(async move {
            if let Err(e) = server.await {
                error!(error = %e, "Web server terminated with an error");
            }
        });

        Ok(Arc::new(BrewWebServer {
            server: Arc::new(Mutex::new(Some(server_handle))),
        }))
    }

    #[instrument(name = "web-server-stop", skip_all)]
    async fn stop(&self) -> BrewResult<()> {
        info!("Stopping web server");
        let mut server_guard = self.server.lock().await;
        if let Some(handle) = server_guard.take() {
            handle.stop(true).await;
        }
        info!("Web server stopped");
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use actix_web::{
        body::MessageBody,
        dev::{ServiceFactory, ServiceRequest, ServiceResponse},
        Error,
    };

    /// The application as served, without the network listener.
    pub fn app(
        db: Database,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse<impl MessageBody>,
            Error = Error,
            InitError = (),
        >,
    > {
        let settings = WebSettings::default();
        let state = AppState::new(db, &settings.router_prefix);
        App::new()
            .wrap(NormalizePath::trim())
            .configure(move |cfg| configure_app(cfg, state, &settings))
    }
}
