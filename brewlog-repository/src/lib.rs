//! In-memory storage for BrewLog records.
//!
//! Rows keep symbolic columns as ordinals; repositories resolve them into
//! domain types and enforce references between records.

pub mod bean;
pub mod brew_session;
pub mod equipment;
pub mod grind_setting;
mod table;

pub use bean::BeanRepository;
pub use brew_session::BrewSessionRepository;
pub use equipment::EquipmentRepository;
pub use grind_setting::GrindSettingRepository;
pub use table::Table;

use brewlog_models::entities::prelude::{
    BeanModel, BrewSessionModel, EquipmentModel, GrindSettingModel,
};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Default)]
pub struct Tables {
    pub beans: Table<BeanModel>,
    pub equipment: Table<EquipmentModel>,
    pub grind_settings: Table<GrindSettingModel>,
    pub brew_sessions: Table<BrewSessionModel>,
    /// Writers that add references hold it shared, deletes hold it exclusively
    integrity: RwLock<()>,
}

/// Cheaply cloneable handle to every table
#[derive(Debug, Clone, Default)]
pub struct Database(Arc<Tables>);

impl Database {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn tables(&self) -> &Tables {
        &self.0
    }

    pub(crate) fn reference_guard(&self) -> RwLockReadGuard<'_, ()> {
        self.0
            .integrity
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn delete_guard(&self) -> RwLockWriteGuard<'_, ()> {
        self.0
            .integrity
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
