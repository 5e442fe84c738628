use brewlog_common::BrewAppContext;
use brewlog_error::{BrewError, BrewResult};
use brewlog_models::constants::DEFAULT_CONFIG_FILE_NAME;
use brewlog_web::BrewWebServer;
use clap::Parser;
use std::{env::current_dir, path::PathBuf};

/// BrewLog - coffee brewing journal
///
/// Serves a JSON API for beans, equipment, grind settings and brew sessions.
#[derive(Parser)]
#[command(name = "brewlog")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "BrewLog", long_about = None)]
struct Cli {
    /// Sets a custom config file with full path
    ///
    /// If not specified, 'brewlog.toml' in the current working directory is
    /// used when present. Every setting can also come from `BREW__*`
    /// environment variables.
    #[arg(short, long, env = "BREW_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> BrewResult<()> {
    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(p) => p,
        None => {
            let dir = current_dir()
                .map_err(|e| BrewError::from(format!("Failed to get current directory: {e}")))?;
            dir.join(DEFAULT_CONFIG_FILE_NAME)
        }
    };

    let ctx = BrewAppContext::<BrewWebServer>::init(&config_path.to_string_lossy()).await?;

    // Run until a shutdown signal is received
    ctx.run().await
}
