use crate::symbolic::{canonical_names, Symbolic, VariantDef};
use serde::Serialize;
use serde_json::{json, Map, Value};

/// Documentation shape of a symbolic type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaDescriptor {
    #[serde(rename = "type")]
    pub schema_type: &'static str,
    #[serde(rename = "enum")]
    pub values: Vec<&'static str>,
    pub example: &'static str,
    pub description: String,
}

/// Describes `T`, keeping `original` in front of the value list when given.
pub fn describe<T: Symbolic>(original: Option<&str>) -> SchemaDescriptor {
    describe_variants(T::VARIANTS, original)
}

/// Describes a variant table; values and example follow declaration order.
pub fn describe_variants(variants: &[VariantDef], original: Option<&str>) -> SchemaDescriptor {
    let values = canonical_names(variants);
    let listed = values
        .iter()
        .map(|name| format!("'{name}'"))
        .collect::<Vec<_>>()
        .join(", ");

    let description = match original.filter(|d| !d.is_empty()) {
        Some(original) => format!("{original}. Possible values: {listed}"),
        None => format!("Possible values: {listed}"),
    };

    SchemaDescriptor {
        schema_type: "string",
        example: values.first().copied().unwrap_or_default(),
        values,
        description,
    }
}

/// Rewrites an OpenAPI schema object (component or property) in place.
///
/// An existing `description` is kept and extended.
pub fn describe_schema(schema: &mut Map<String, Value>, variants: &[VariantDef]) {
    let descriptor = describe_variants(variants, existing_description(schema).as_deref());
    schema.remove("format");
    schema.insert("type".into(), json!(descriptor.schema_type));
    schema.insert("enum".into(), json!(descriptor.values));
    schema.insert("example".into(), json!(descriptor.example));
    schema.insert("description".into(), json!(descriptor.description));
}

/// Rewrites an OpenAPI parameter object in place.
///
/// Produces the same type, value list, example and description as
/// [`describe_schema`]; only the placement differs.
pub fn describe_parameter(parameter: &mut Map<String, Value>, variants: &[VariantDef]) {
    let descriptor = describe_variants(variants, existing_description(parameter).as_deref());
    parameter.insert(
        "schema".into(),
        json!({
            "type": descriptor.schema_type,
            "enum": descriptor.values,
            "example": descriptor.example,
        }),
    );
    parameter.insert("example".into(), json!(descriptor.example));
    parameter.insert("description".into(), json!(descriptor.description));
}

fn existing_description(object: &Map<String, Value>) -> Option<String> {
    object
        .get("description")
        .and_then(Value::as_str)
        .map(str::to_string)
}
