pub mod bean;
pub mod brew_session;
pub mod equipment;
pub mod grind_setting;
pub mod prelude;
