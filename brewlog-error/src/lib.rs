pub mod storage;
pub mod symbolic;
pub mod web;

use anyhow::Error as AnyhowError;
use config::ConfigError;
use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;
use storage::StorageError;
use symbolic::SymbolicError;
use thiserror::Error;
use web::WebError;

pub type BrewResult<T, E = BrewError> = anyhow::Result<T, E>;
pub type WebResult<T, E = WebError> = anyhow::Result<T, E>;
pub type StorageResult<T, E = StorageError> = Result<T, E>;

#[derive(Error, Debug)]
pub enum BrewError {
    #[error("{0}")]
    Msg(String),
    #[error("{0}")]
    IoError(#[from] IoError),
    #[error("{0}")]
    Anyhow(#[from] AnyhowError),
    #[error("{0}")]
    Json(#[from] SerdeJsonError),
    #[error("{0}")]
    ConfigError(#[from] ConfigError),
    #[error("{0}")]
    StorageError(#[from] StorageError),
    #[error("{0}")]
    SymbolicError(#[from] SymbolicError),
    #[error("{0}")]
    WebError(#[from] WebError),
    #[error("Initialization error: {0}")]
    InitializationError(String),
}

impl From<String> for BrewError {
    #[inline]
    fn from(e: String) -> Self {
        BrewError::Msg(e)
    }
}

impl From<&str> for BrewError {
    #[inline]
    fn from(e: &str) -> Self {
        BrewError::Msg(e.to_string())
    }
}
