mod bean;
mod common;
mod equipment;
mod grind;
pub mod prelude;
mod session;
