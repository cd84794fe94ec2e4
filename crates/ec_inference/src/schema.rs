//! JSON schema sent to the provider as the required response shape.

use ec_core::{EarningsCallSummary, Result};
use schemars::gen::SchemaSettings;
use serde_json::{json, Value};

pub const SCHEMA_NAME: &str = "EarningsCallSummary";

/// Schema for [`EarningsCallSummary`] with every subschema inlined, since
/// providers differ in how well they resolve `$ref`.
pub fn response_schema() -> Result<Value> {
    let generator = SchemaSettings::draft07()
        .with(|s| {
            s.inline_subschemas = true;
            s.meta_schema = None;
        })
        .into_generator();
    let root = generator.into_root_schema_for::<EarningsCallSummary>();

    let mut schema = serde_json::to_value(root)?;
    if let Some(object) = schema.as_object_mut() {
        object.remove("title");
        object.remove("definitions");
    }
    Ok(schema)
}

/// The `response_format` block of a chat completions request.
pub fn response_format() -> Result<Value> {
    Ok(json!({
        "type": "json_schema",
        "json_schema": {
            "name": SCHEMA_NAME,
            "strict": true,
            "schema": response_schema()?,
        }
    }))
}
