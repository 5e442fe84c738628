mod symbolic;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives `brewlog_codec::Symbolic` for fieldless enums
///
/// Generates the static variant table (ordinal, canonical name, optional
/// display label) together with `Serialize`, `Deserialize`, `Display` and
/// `FromStr` implementations that go through the codec. The canonical name is
/// the variant identifier and the ordinal is its discriminant.
///
/// A display label used in validation messages can be attached per variant:
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Symbolic)]
/// pub enum BrewMethod {
///     #[symbolic(label = "Pour Over")]
///     PourOver = 0,
///     Espresso = 1,
/// }
/// ```
#[proc_macro_derive(Symbolic, attributes(symbolic))]
pub fn derive_symbolic(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match symbolic::expand_derive_symbolic(input) {
        Ok(ts) => ts.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
