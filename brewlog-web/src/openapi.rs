//! OpenAPI 3.0 document served at `/docs/openapi.json`.
//!
//! Symbolic types are written by the codec's schema functions, so a
//! component, a record property and a query parameter of the same type always
//! agree on type, value list and example.

use brewlog_codec::{
    schema::{describe_parameter, describe_schema},
    Symbolic,
};
use brewlog_models::enums::{
    brewing::{BrewMethod, EquipmentType, GrindSize},
    coffee::{ProcessingMethod, RoastLevel},
    SYMBOLIC_TYPES,
};
use serde_json::{json, Map, Value};

const TYPE_DOCS: &[(&str, &str)] = &[
    ("RoastLevel", "How dark a batch of beans was roasted"),
    ("ProcessingMethod", "Post-harvest processing of the coffee cherry"),
    ("GrindSize", "Coarseness of the grind"),
    ("BrewMethod", "Brewing technique"),
];

pub(crate) fn build(router_prefix: &str) -> Value {
    let mut doc = OpenApi::new(router_prefix);

    for entry in SYMBOLIC_TYPES.entries() {
        let mut schema = Map::new();
        if let Some((_, type_doc)) = TYPE_DOCS.iter().find(|(name, _)| *name == entry.type_name)
        {
            schema.insert("description".into(), json!(type_doc));
        }
        describe_schema(&mut schema, entry.variants);
        doc.schema(entry.type_name, Value::Object(schema));
    }

    doc.schema(
        "CoffeeBean",
        object(
            &["id", "name", "roaster", "roastLevel", "createdAt", "updatedAt"],
            vec![
                ("id", integer("Bean id")),
                ("name", string("Name of the coffee")),
                ("roaster", string("Roastery")),
                ("origin", string("Country or farm of origin")),
                ("roastLevel", symbolic::<RoastLevel>("Roast level of the beans")),
                ("processingMethod", symbolic::<ProcessingMethod>("Processing method")),
                ("roastDate", date("Roast date")),
                ("notes", string("Free form notes")),
                ("createdAt", date_time("Creation time")),
                ("updatedAt", date_time("Last update time")),
            ],
        ),
    );
    doc.schema(
        "CoffeeBeanPayload",
        object(
            &["name", "roaster", "roastLevel"],
            vec![
                ("name", string("Name of the coffee, 1-100 characters")),
                ("roaster", string("Roastery, 1-100 characters")),
                ("origin", string("Country or farm of origin")),
                ("roastLevel", symbolic::<RoastLevel>("Roast level of the beans")),
                ("processingMethod", symbolic::<ProcessingMethod>("Processing method")),
                ("roastDate", date("Roast date")),
                ("notes", string("Free form notes")),
            ],
        ),
    );
    doc.schema(
        "Equipment",
        object(
            &["id", "name", "type", "createdAt", "updatedAt"],
            vec![
                ("id", integer("Equipment id")),
                ("name", string("Name of the equipment")),
                ("type", symbolic::<EquipmentType>("Kind of equipment")),
                ("brand", string("Manufacturer")),
                ("notes", string("Free form notes")),
                ("createdAt", date_time("Creation time")),
                ("updatedAt", date_time("Last update time")),
            ],
        ),
    );
    doc.schema(
        "EquipmentPayload",
        object(
            &["name", "type"],
            vec![
                ("name", string("Name of the equipment, 1-100 characters")),
                ("type", symbolic::<EquipmentType>("Kind of equipment")),
                ("brand", string("Manufacturer")),
                ("notes", string("Free form notes")),
            ],
        ),
    );
    doc.schema(
        "GrindSetting",
        object(
            &["id", "setting", "size", "createdAt", "updatedAt"],
            vec![
                ("id", integer("Grind setting id")),
                ("grinderId", integer("Equipment id of the grinder")),
                ("setting", string("Grinder specific setting, e.g. 18 clicks")),
                ("size", symbolic::<GrindSize>("Resulting grind size")),
                ("notes", string("Free form notes")),
                ("createdAt", date_time("Creation time")),
                ("updatedAt", date_time("Last update time")),
            ],
        ),
    );
    doc.schema(
        "GrindSettingPayload",
        object(
            &["setting", "size"],
            vec![
                ("grinderId", integer("Equipment id of a grinder")),
                ("setting", string("Grinder specific setting, 1-50 characters")),
                ("size", symbolic::<GrindSize>("Resulting grind size")),
                ("notes", string("Free form notes")),
            ],
        ),
    );
    doc.schema(
        "BrewSession",
        object(
            &[
                "id",
                "beanId",
                "brewMethod",
                "equipmentIds",
                "doseGrams",
                "waterGrams",
                "ratio",
                "brewedAt",
                "createdAt",
                "updatedAt",
            ],
            vec![
                ("id", integer("Brew session id")),
                ("beanId", integer("Coffee bean used")),
                ("brewMethod", symbolic::<BrewMethod>("Brewing technique used")),
                ("grindSettingId", integer("Grind setting used")),
                ("equipmentIds", integer_array("Equipment used")),
                ("doseGrams", number("Coffee dose in grams")),
                ("waterGrams", number("Water in grams")),
                ("ratio", number("Grams of water per gram of coffee")),
                ("waterTemperatureC", number("Water temperature in Celsius")),
                ("brewTimeSeconds", integer("Total brew time")),
                ("rating", integer("Rating from 1 to 10")),
                ("tastingNotes", string("Tasting notes")),
                ("brewedAt", date_time("When the coffee was brewed")),
                ("createdAt", date_time("Creation time")),
                ("updatedAt", date_time("Last update time")),
            ],
        ),
    );
    doc.schema(
        "BrewSessionPayload",
        object(
            &["beanId", "brewMethod", "doseGrams", "waterGrams"],
            vec![
                ("beanId", integer("Coffee bean used")),
                ("brewMethod", symbolic::<BrewMethod>("Brewing technique used")),
                ("grindSettingId", integer("Grind setting used")),
                ("equipmentIds", integer_array("Equipment used, at most 10")),
                ("doseGrams", number("Coffee dose in grams, 1-100")),
                ("waterGrams", number("Water in grams, 1-2000")),
                ("waterTemperatureC", number("Water temperature in Celsius, 0-100")),
                ("brewTimeSeconds", integer("Total brew time")),
                ("rating", integer("Rating from 1 to 10")),
                ("tastingNotes", string("Tasting notes")),
                ("brewedAt", date_time("When the coffee was brewed, defaults to now")),
            ],
        ),
    );

    doc.crud(
        "/beans",
        "Coffee beans",
        "CoffeeBean",
        vec![
            query("name", "Case-insensitive substring of the name", "string"),
            symbolic_query::<RoastLevel>("roastLevel", "Only beans of this roast level"),
            symbolic_query::<ProcessingMethod>(
                "processingMethod",
                "Only beans processed this way",
            ),
        ],
    );
    doc.crud(
        "/equipment",
        "Equipment",
        "Equipment",
        vec![symbolic_query::<EquipmentType>("type", "Only equipment of this kind")],
    );
    doc.crud(
        "/grind-settings",
        "Grind settings",
        "GrindSetting",
        vec![
            symbolic_query::<GrindSize>("size", "Only settings producing this size"),
            query("grinderId", "Only settings of this grinder", "integer"),
        ],
    );
    doc.crud(
        "/brew-sessions",
        "Brew sessions",
        "BrewSession",
        vec![
            query("beanId", "Only sessions brewed with this bean", "integer"),
            symbolic_query::<BrewMethod>(
                "brewMethod",
                "Only sessions brewed with one of these comma separated methods",
            ),
        ],
    );

    doc.get(
        "/enums",
        "Symbolic types",
        "Every symbolic type with its variants",
        vec![],
    );
    doc.get(
        "/enums/{type}",
        "Symbolic types",
        "One symbolic type, looked up ignoring case",
        vec![json!({
            "name": "type",
            "in": "path",
            "required": true,
            "schema": { "type": "string" },
            "example": RoastLevel::TYPE_NAME,
        })],
    );

    doc.finish()
}

struct OpenApi {
    prefix: String,
    paths: Map<String, Value>,
    schemas: Map<String, Value>,
}

impl OpenApi {
    fn new(router_prefix: &str) -> Self {
        Self {
            prefix: router_prefix.trim_end_matches('/').to_string(),
            paths: Map::new(),
            schemas: Map::new(),
        }
    }

    fn schema(&mut self, name: &str, schema: Value) {
        self.schemas.insert(name.to_string(), schema);
    }

    fn operation(&mut self, path: &str, method: &str, operation: Value) {
        let entry = self
            .paths
            .entry(format!("{}{path}", self.prefix))
            .or_insert_with(|| json!({}));
        entry[method] = operation;
    }

    fn get(&mut self, path: &str, tag: &str, summary: &str, parameters: Vec<Value>) {
        self.operation(
            path,
            "get",
            json!({
                "tags": [tag],
                "summary": summary,
                "parameters": parameters,
                "responses": { "200": { "description": "OK" } },
            }),
        );
    }

    /// List, detail, create, update and delete of one record type.
    fn crud(&mut self, path: &str, tag: &str, record: &str, mut filters: Vec<Value>) {
        let record_ref = json!({ "$ref": format!("#/components/schemas/{record}") });
        let payload_ref = json!({ "$ref": format!("#/components/schemas/{record}Payload") });
        let item_path = format!("{path}/{{id}}");
        let id = json!({
            "name": "id",
            "in": "path",
            "required": true,
            "schema": { "type": "integer", "minimum": 1 },
        });
        filters.push(query("page", "Page number, starting at 1", "integer"));
        filters.push(query("pageSize", "Records per page, 1-100", "integer"));

        self.operation(
            path,
            "get",
            json!({
                "tags": [tag],
                "summary": format!("List {}", tag.to_lowercase()),
                "parameters": filters,
                "responses": ok(json!({
                    "type": "object",
                    "properties": {
                        "records": { "type": "array", "items": record_ref },
                        "total": { "type": "integer" },
                        "pages": { "type": "integer" },
                        "page": { "type": "integer" },
                        "pageSize": { "type": "integer" },
                    },
                })),
            }),
        );
        self.operation(
            path,
            "post",
            json!({
                "tags": [tag],
                "summary": format!("Create {record}"),
                "requestBody": body(&payload_ref),
                "responses": ok(record_ref.clone()),
            }),
        );
        self.operation(
            &item_path,
            "get",
            json!({
                "tags": [tag],
                "summary": format!("Get {record}"),
                "parameters": [id],
                "responses": ok(record_ref.clone()),
            }),
        );
        self.operation(
            &item_path,
            "put",
            json!({
                "tags": [tag],
                "summary": format!("Update {record}"),
                "parameters": [id],
                "requestBody": body(&payload_ref),
                "responses": ok(record_ref),
            }),
        );
        self.operation(
            &item_path,
            "delete",
            json!({
                "tags": [tag],
                "summary": format!("Delete {record}"),
                "parameters": [id],
                "responses": ok(json!({ "type": "boolean" })),
            }),
        );
    }

    fn finish(self) -> Value {
        json!({
            "openapi": "3.0.3",
            "info": {
                "title": "BrewLog API",
                "version": env!("CARGO_PKG_VERSION"),
            },
            "paths": self.paths,
            "components": { "schemas": self.schemas },
        })
    }
}

fn ok(data: Value) -> Value {
    json!({
        "200": {
            "description": "OK",
            "content": { "application/json": { "schema": {
                "type": "object",
                "properties": {
                    "code": { "type": "integer" },
                    "message": { "type": "string" },
                    "data": data,
                },
            }}},
        },
        "400": { "description": "Malformed request or validation failure" },
    })
}

fn body(schema: &Value) -> Value {
    json!({
        "required": true,
        "content": { "application/json": { "schema": schema } },
    })
}

fn object(required: &[&str], properties: Vec<(&str, Value)>) -> Value {
    let properties: Map<String, Value> = properties
        .into_iter()
        .map(|(name, schema)| (name.to_string(), schema))
        .collect();
    json!({
        "type": "object",
        "required": required,
        "properties": properties,
    })
}

fn typed(schema_type: &str, format: Option<&str>, description: &str) -> Value {
    let mut schema = json!({ "type": schema_type, "description": description });
    if let Some(format) = format {
        schema["format"] = json!(format);
    }
    schema
}

fn string(description: &str) -> Value {
    typed("string", None, description)
}

fn integer(description: &str) -> Value {
    typed("integer", Some("int64"), description)
}

fn number(description: &str) -> Value {
    typed("number", Some("double"), description)
}

fn date(description: &str) -> Value {
    typed("string", Some("date"), description)
}

fn date_time(description: &str) -> Value {
    typed("string", Some("date-time"), description)
}

fn integer_array(description: &str) -> Value {
    json!({
        "type": "array",
        "items": { "type": "integer", "format": "int64" },
        "description": description,
    })
}

/// A record property of a symbolic type; starts out as the ordinal integer
/// the type is stored as and is rewritten into its string form.
fn symbolic<T: Symbolic>(description: &str) -> Value {
    let mut schema = Map::new();
    schema.insert("type".into(), json!("integer"));
    schema.insert("format".into(), json!("int64"));
    schema.insert("description".into(), json!(description));
    describe_schema(&mut schema, T::VARIANTS);
    Value::Object(schema)
}

fn query(name: &str, description: &str, schema_type: &str) -> Value {
    json!({
        "name": name,
        "in": "query",
        "required": false,
        "description": description,
        "schema": { "type": schema_type },
    })
}

/// Query strings are matched by name only.
const QUERY_NAMES_ONLY: &str =
    "Query values must be names; ordinals are only accepted in JSON bodies.";

fn symbolic_query<T: Symbolic>(name: &str, description: &str) -> Value {
    let mut parameter = Map::new();
    parameter.insert("name".into(), json!(name));
    parameter.insert("in".into(), json!("query"));
    parameter.insert("required".into(), json!(false));
    parameter.insert("description".into(), json!(description));
    describe_parameter(&mut parameter, T::VARIANTS);
    if let Some(Value::String(text)) = parameter.get_mut("description") {
        text.push_str(". ");
        text.push_str(QUERY_NAMES_ONLY);
    }
    Value::Object(parameter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_property_and_parameter_agree() {
        let doc = build("/api");
        let component = &doc["components"]["schemas"]["RoastLevel"];
        let property = &doc["components"]["schemas"]["CoffeeBean"]["properties"]["roastLevel"];
        let parameter = doc["paths"]["/api/beans"]["get"]["parameters"]
            .as_array()
            .unwrap()
            .iter()
            .find(|p| p["name"] == "roastLevel")
            .unwrap();

        let names = json!(["Light", "MediumLight", "Medium", "MediumDark", "Dark"]);
        assert_eq!(component["type"], "string");
        assert_eq!(component["enum"], names);
        assert_eq!(property["enum"], names);
        assert_eq!(parameter["schema"]["enum"], names);
        assert_eq!(property["example"], "Light");
        assert_eq!(parameter["example"], "Light");
        assert!(property.get("format").is_none());
        assert_eq!(
            property["description"],
            "Roast level of the beans. Possible values: 'Light', 'MediumLight', 'Medium', 'MediumDark', 'Dark'"
        );
        assert_eq!(
            component["description"],
            "How dark a batch of beans was roasted. Possible values: 'Light', 'MediumLight', 'Medium', 'MediumDark', 'Dark'"
        );
        assert_eq!(
            parameter["description"],
            "Only beans of this roast level. Possible values: 'Light', 'MediumLight', 'Medium', 'MediumDark', 'Dark'. \
             Query values must be names; ordinals are only accepted in JSON bodies."
        );
        assert!(!property["description"]
            .as_str()
            .unwrap()
            .contains(QUERY_NAMES_ONLY));
    }

    #[test]
    fn test_type_without_doc_gets_bare_description() {
        let doc = build("/api/");
        let equipment = &doc["components"]["schemas"]["EquipmentType"];
        assert!(equipment["description"]
            .as_str()
            .unwrap()
            .starts_with("Possible values: 'Grinder', 'Brewer'"));
        assert!(doc["paths"].get("/api/equipment/{id}").is_some());
    }
}
