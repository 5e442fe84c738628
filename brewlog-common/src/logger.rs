use brewlog_error::{BrewError, BrewResult};
use brewlog_models::constants::{LOG_DIR, LOG_FILE_NAME};
use std::{
    str::FromStr,
    sync::{Arc, PoisonError, RwLock},
};
use tracing::{subscriber::set_global_default, Level};
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{
    filter::DynFilterFn,
    fmt::{self},
    layer::SubscriberExt,
    Layer, Registry,
};

pub struct Logger {
    level: Arc<RwLock<Level>>,
    _file_guard: Option<WorkerGuard>,
}

impl Logger {
    pub fn new(level: Option<Level>) -> Self {
        Logger {
            level: Arc::new(RwLock::new(level.unwrap_or(Level::INFO))),
            _file_guard: None,
        }
    }

    /// Parses a configured level such as `"debug"`; unknown names fall back to `INFO`.
    pub fn parse_level(level: &str) -> Level {
        Level::from_str(level.trim()).unwrap_or(Level::INFO)
    }

    #[inline]
    /// Sets the new logging level; takes effect for the next event.
    pub fn set_level(&self, new_level: Level) {
        let mut level = self.level.write().unwrap_or_else(PoisonError::into_inner);
        *level = new_level;
    }

    #[inline]
    pub fn get_level(&self) -> Level {
        *self.level.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Installs the global subscriber.
    ///
    /// Console output is always on. With `file_log`, events are also written to
    /// a daily rolling file under `./logs`, relative to the runtime directory.
    pub fn initialize(&mut self, file_log: bool) -> BrewResult<()> {
        let console_filter = {
            let level = Arc::clone(&self.level);
            DynFilterFn::new(move |metadata, _| {
                metadata.level() <= &*level.read().unwrap_or_else(PoisonError::into_inner)
            })
        };

        let console_layer = {
            #[cfg(debug_assertions)]
            let layer = fmt::layer()
                .pretty()
                .with_writer(std::io::stdout)
                .with_file(true)
                .with_line_number(true);

            #[cfg(not(debug_assertions))]
            let layer = fmt::layer()
                .with_writer(std::io::stdout)
                .with_file(false)
                .with_line_number(false);

            layer.with_filter(console_filter)
        };

        let file_layer = if file_log {
            let file_appender = rolling::daily(LOG_DIR, LOG_FILE_NAME);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            self._file_guard = Some(guard);
            let file_filter = {
                let level = Arc::clone(&self.level);
                DynFilterFn::new(move |metadata, _| {
                    metadata.level() <= &*level.read().unwrap_or_else(PoisonError::into_inner)
                })
            };
            Some(
                fmt::layer()
                    .with_writer(non_blocking)
                    .with_ansi(false)
                    .with_target(true)
                    .with_filter(file_filter),
            )
        } else {
            None
        };

        let subscriber = Registry::default().with(console_layer).with(file_layer);
        set_global_default(subscriber).map_err(|_| BrewError::from("Failed to set logger"))?;
        Ok(())
    }
}
