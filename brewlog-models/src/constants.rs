// Constants shared across the brewlog crates

/// The default configuration file name for the application.
/// This constant is used to specify the default configuration file
/// that the application will attempt to load at startup.
pub const DEFAULT_CONFIG_FILE_NAME: &str = "brewlog.toml";

/// Prefix for environment variable overrides, e.g. `BREW__WEB__PORT=9090`.
pub const ENV_PREFIX: &str = "BREW";

pub const LOG_DIR: &str = "./logs";
pub const LOG_FILE_NAME: &str = "brewlog.log";

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const MAX_PAGE_SIZE: u32 = 100;
