pub mod brewing;
pub mod coffee;

use brewing::{BrewMethod, EquipmentType, GrindSize};
use brewlog_codec::SymbolicRegistry;
use coffee::{ProcessingMethod, RoastLevel};
use once_cell::sync::Lazy;

/// Global registry of every symbolic type exposed over the API
pub static SYMBOLIC_TYPES: Lazy<SymbolicRegistry> = Lazy::new(|| {
    let mut registry = SymbolicRegistry::new();
    registry
        .register::<RoastLevel>()
        .register::<ProcessingMethod>()
        .register::<GrindSize>()
        .register::<BrewMethod>()
        .register::<EquipmentType>();
    registry
});
