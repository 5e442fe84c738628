use serde::Serialize;

/// One row of a symbolic type's static variant table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantDef {
    /// Legacy integer representation, accepted on input only
    pub ordinal: i64,
    /// Canonical name used on the wire and in documentation
    pub name: &'static str,
    /// Optional human friendly override used in validation messages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'static str>,
}

impl VariantDef {
    pub const fn new(ordinal: i64, name: &'static str, label: Option<&'static str>) -> Self {
        Self {
            ordinal,
            name,
            label,
        }
    }

    /// Label when one is attached, otherwise the canonical name.
    #[inline]
    pub fn display_name(&self) -> &'static str {
        self.label.unwrap_or(self.name)
    }
}

/// A closed set of named constants with stable ordinals.
///
/// Implemented through `#[derive(Symbolic)]`, which guarantees that names are
/// unique ignoring ASCII case and that `VARIANTS` is in declaration order.
pub trait Symbolic: Copy + Eq + Send + Sync + 'static {
    const TYPE_NAME: &'static str;
    const VARIANTS: &'static [VariantDef];

    fn ordinal(self) -> i64;

    fn from_ordinal(ordinal: i64) -> Option<Self>;

    /// Canonical name of this variant.
    fn name(self) -> &'static str;
}

/// Canonical names in declaration order.
pub fn canonical_names(variants: &[VariantDef]) -> Vec<&'static str> {
    variants.iter().map(|v| v.name).collect()
}

/// Display names (label or canonical name) in declaration order.
pub fn display_names(variants: &[VariantDef]) -> Vec<&'static str> {
    variants.iter().map(VariantDef::display_name).collect()
}
