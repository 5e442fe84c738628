use actix_web::web::{self, ServiceConfig};
use brewlog_codec::{SchemaDescriptor, SymbolicEntry, VariantDef};
use brewlog_error::{web::WebError, WebResult};
use brewlog_models::{enums::SYMBOLIC_TYPES, web::WebResponse};
use serde::Serialize;

pub(super) const ROUTER_PREFIX: &str = "/enums";

/// Configure symbolic type routes
///
/// # Routes
/// - GET ``: Every symbolic type the API accepts
/// - GET `/{type}`: One type, looked up ignoring case
pub(crate) fn configure_routes(cfg: &mut ServiceConfig) {
    cfg.route("", web::get().to(list))
        .route("/{type}", web::get().to(get_by_name));
}

/// A symbolic type with its variants and schema
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolicTypeInfo {
    pub type_name: &'static str,
    pub variants: &'static [VariantDef],
    pub schema: SchemaDescriptor,
}

impl From<&SymbolicEntry> for SymbolicTypeInfo {
    fn from(entry: &SymbolicEntry) -> Self {
        Self {
            type_name: entry.type_name,
            variants: entry.variants,
            schema: entry.describe(None),
        }
    }
}

pub async fn list() -> WebResult<WebResponse<Vec<SymbolicTypeInfo>>> {
    let types = SYMBOLIC_TYPES
        .entries()
        .iter()
        .map(SymbolicTypeInfo::from)
        .collect();
    Ok(WebResponse::ok(types))
}

pub async fn get_by_name(
    type_name: web::Path<String>,
) -> WebResult<WebResponse<SymbolicTypeInfo>> {
    SYMBOLIC_TYPES
        .get(&type_name)
        .map(|entry| WebResponse::ok(SymbolicTypeInfo::from(entry)))
        .ok_or_else(|| WebError::NotFound(format!("symbolic type {type_name}")))
}
