use crate::{
    schema::{describe_variants, SchemaDescriptor},
    symbolic::{Symbolic, VariantDef},
};
use serde::Serialize;

/// Type-erased view of one symbolic type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolicEntry {
    pub type_name: &'static str,
    pub variants: &'static [VariantDef],
}

impl SymbolicEntry {
    pub fn of<T: Symbolic>() -> Self {
        Self {
            type_name: T::TYPE_NAME,
            variants: T::VARIANTS,
        }
    }

    #[inline]
    pub fn describe(&self, original: Option<&str>) -> SchemaDescriptor {
        describe_variants(self.variants, original)
    }
}

/// Every symbolic type exposed by the API, in registration order.
///
/// Built once at startup and only read afterwards.
#[derive(Debug, Clone, Default)]
pub struct SymbolicRegistry {
    entries: Vec<SymbolicEntry>,
}

impl SymbolicRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `T`; registering the same type twice is a no-op.
    pub fn register<T: Symbolic>(&mut self) -> &mut Self {
        if self.get(T::TYPE_NAME).is_none() {
            self.entries.push(SymbolicEntry::of::<T>());
        }
        self
    }

    /// Looks up a type by name, ignoring ASCII case.
    pub fn get(&self, type_name: &str) -> Option<&SymbolicEntry> {
        self.entries
            .iter()
            .find(|e| e.type_name.eq_ignore_ascii_case(type_name))
    }

    pub fn entries(&self) -> &[SymbolicEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Symbolic;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Symbolic)]
    enum Bloom {
        Short = 0,
        Long = 1,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Symbolic)]
    enum Stir {
        Still = 0,
        Spin = 1,
    }

    #[test]
    fn test_register_keeps_order_and_dedupes() {
        let mut registry = SymbolicRegistry::new();
        registry
            .register::<Bloom>()
            .register::<Stir>()
            .register::<Bloom>();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.entries()[0].type_name, "Bloom");
        assert_eq!(registry.entries()[1].type_name, "Stir");
        assert_eq!(registry.get("stir"), Some(&SymbolicEntry::of::<Stir>()));
        assert!(registry.get("Grind").is_none());
    }

    #[test]
    fn test_entry_serializes_variants() {
        let value = serde_json::to_value(SymbolicEntry::of::<Bloom>()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "typeName": "Bloom",
                "variants": [
                    {"ordinal": 0, "name": "Short"},
                    {"ordinal": 1, "name": "Long"}
                ]
            })
        );
    }
}
