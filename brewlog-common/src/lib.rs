pub mod logger;

pub use brewlog_error::{BrewError, BrewResult};

use async_trait::async_trait;
use brewlog_models::{constants::LOG_DIR, settings::Settings};
use brewlog_repository::Database;
use logger::Logger;
use std::{
    future::Future,
    path::PathBuf,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};
#[cfg(not(unix))]
use tokio::signal::ctrl_c;
#[cfg(unix)]
use tokio::signal::unix::{signal, SignalKind};
use tracing::{info, instrument, warn, Level};

/// HTTP front end of the application
#[async_trait]
pub trait WebServer: Send + Sync + 'static {
    /// Binds and spawns the server.
    async fn init(settings: &Settings, db: Database) -> BrewResult<Arc<Self>>
    where
        Self: Sized;

    /// Gracefully stops the web server.
    async fn stop(&self) -> BrewResult<()>;
}

/// Everything the running process owns
pub struct BrewAppContext<W: WebServer> {
    shutting_down: AtomicBool,
    config_path: PathBuf,
    logger: Logger,
    web_server: Arc<W>,
}

impl<W: WebServer> BrewAppContext<W> {
    /// Loads settings, switches to the runtime directory, installs the
    /// logger and starts the web server.
    #[instrument(name = "init-app", skip_all)]
    pub async fn init(config: &str) -> BrewResult<Self> {
        let settings = Settings::new(config)?;
        // resolved before leaving the launch directory so reloads find the same file
        let config_path = std::env::current_dir()
            .map(|dir| dir.join(config))
            .unwrap_or_else(|_| PathBuf::from(config));

        apply_runtime_dir(&settings.general.runtime_dir)?;
        ensure_runtime_directories(&settings)?;

        let mut logger = Logger::new(Some(Logger::parse_level(&settings.general.log_level)));
        logger.initialize(settings.general.file_log)?;

        info!(config, level = %logger.get_level(), "settings loaded");

        let web_server = W::init(&settings, Database::new()).await?;

        Ok(BrewAppContext {
            shutting_down: AtomicBool::new(false),
            config_path,
            logger,
            web_server,
        })
    }

    #[inline]
    pub fn change_log_level(&self, level: Level) {
        self.logger.set_level(level);
    }

    /// Re-reads `general.log_level` and applies it. Other settings need a restart.
    #[instrument(name = "reload-log-level", skip_all)]
    pub fn reload_log_level(&self) -> BrewResult<Level> {
        let level = configured_level(&self.config_path.to_string_lossy())?;
        self.change_log_level(level);
        info!(%level, "log level reloaded");
        Ok(level)
    }

    /// Runs until a shutdown signal arrives, then stops every component.
    pub async fn run(&self) -> BrewResult<()> {
        self.listen_for_shutdown(async { self.graceful_shutdown().await })
            .await
    }

    /// SIGTERM and SIGINT stop the process; SIGHUP reloads the log level.
    async fn listen_for_shutdown<F>(&self, shutdown_fn: F) -> BrewResult<()>
    where
        F: Future<Output = BrewResult<()>>,
    {
        #[cfg(unix)]
        {
            let mut sigterm = signal(SignalKind::terminate())?;
            let mut sigint = signal(SignalKind::interrupt())?;
            let mut sighup = signal(SignalKind::hangup())?;

            loop {
                tokio::select! {
                    _ = sigterm.recv() => {
                        info!("Received SIGTERM signal");
                        break;
                    }
                    _ = sigint.recv() => {
                        info!("Received SIGINT signal");
                        break;
                    }
                    _ = sighup.recv() => {
                        info!("Received SIGHUP signal");
                        if let Err(e) = self.reload_log_level() {
                            warn!(error = %e, "Keeping current log level");
                        }
                    }
                }
            }
        }

        #[cfg(not(unix))]
        {
            ctrl_c().await?;
            info!("Received ctrl-c signal");
        }

        shutdown_fn.await
    }

    #[instrument(name = "graceful-shutdown", skip_all)]
    pub async fn graceful_shutdown(&self) -> BrewResult<()> {
        if self.shutting_down.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        info!("Starting graceful shutdown");
        if let Err(e) = self.web_server.stop().await {
            warn!(error = %e, "Web server did not stop cleanly");
        }
        info!("Graceful shutdown completed");
        Ok(())
    }
}

/// Level named by `general.log_level` in the config file or `BREW__*` environment.
pub fn configured_level(config: &str) -> BrewResult<Level> {
    let settings = Settings::new(config)?;
    Ok(Logger::parse_level(&settings.general.log_level))
}

/// Switches the working directory so relative paths (`./logs`) land under `runtime_dir`.
pub fn apply_runtime_dir(runtime_dir: &str) -> BrewResult<()> {
    let dir = runtime_dir.trim();
    if dir.is_empty() || dir == "." {
        return Ok(());
    }

    std::fs::create_dir_all(dir)
        .map_err(|e| BrewError::from(format!("Failed to create runtime_dir {dir}: {e}")))?;

    std::env::set_current_dir(dir).map_err(|e| {
        BrewError::from(format!(
            "Failed to set current_dir to runtime_dir {dir}: {e}"
        ))
    })?;

    Ok(())
}

fn ensure_runtime_directories(settings: &Settings) -> BrewResult<()> {
    if settings.general.file_log {
        std::fs::create_dir_all(LOG_DIR)
            .map_err(|e| BrewError::from(format!("Failed to create directory {LOG_DIR}: {e}")))?;
    }
    Ok(())
}
