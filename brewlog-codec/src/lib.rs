//! Symbolic value codec for the BrewLog API
//!
//! Every enum exposed by the API follows one contract:
//!
//! - **wire**: written as its canonical name, read from a name in any ASCII
//!   casing or from a legacy integer ordinal ([`wire`], [`decode`], [`encode`])
//! - **documentation**: a string schema with the names in declaration order and
//!   a "Possible values" clause ([`schema`])
//! - **validation**: an out-of-range ordinal fails with a message listing the
//!   accepted values ([`validate`])
//!
//! Types opt in with `#[derive(Symbolic)]`, which generates a static variant
//! table; no runtime reflection is involved.
extern crate self as brewlog_codec;

mod codec;
pub mod registry;
pub mod schema;
mod symbolic;
pub mod validate;
pub mod wire;

pub use brewlog_error::symbolic::SymbolicError;
pub use brewlog_macros::Symbolic;
pub use codec::{decode, decode_name, decode_ordinal, encode, parse, DecodeInput};
pub use registry::{SymbolicEntry, SymbolicRegistry};
pub use schema::{describe, SchemaDescriptor};
pub use symbolic::{canonical_names, display_names, Symbolic, VariantDef};
pub use validate::{
    validate_optional, validate_symbolic, validate_with_details, RawOrdinal, SymbolicValue,
};

#[doc(hidden)]
pub mod __private {
    pub use serde;
}
