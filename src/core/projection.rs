//! Projection of a compose document onto its service catalog.
//!
//! YAML values are converted to JSON values structurally. Mapping keys are
//! stringified because JSON object keys must be strings; tags are dropped and
//! non-finite floats become `null`.

use crate::domain::model::{ComposeDocument, ServiceCatalog, ServiceRecord};
use crate::utils::error::{EtlError, Result};
use serde_json::Value as JsonValue;
use serde_yaml::Value as YamlValue;

const SERVICES_KEY: &str = "services";
const LABELS_KEY: &str = "labels";
const PORTS_KEY: &str = "ports";

/// Builds the service catalog for `document`.
///
/// A missing root, a missing `services` key and `services: null` all yield an
/// empty catalog. A `services` value that is not a mapping is rejected.
pub fn project_services(document: &ComposeDocument) -> Result<ServiceCatalog> {
    let mut catalog = ServiceCatalog::new();

    let services = match untagged(&document.root).get(SERVICES_KEY).map(untagged) {
        None | Some(YamlValue::Null) => {
            tracing::debug!("No services found in {}", document.source);
            return Ok(catalog);
        }
        Some(YamlValue::Mapping(services)) => services,
        Some(other) => {
            return Err(EtlError::ProcessingError {
                message: format!(
                    "'{}' in {} must be a mapping, found {}",
                    SERVICES_KEY,
                    document.source,
                    kind_name(other)
                ),
            });
        }
    };

    for (name, definition) in services {
        let name = mapping_key(name);
        let record = ServiceRecord {
            labels: field_or(definition, LABELS_KEY, || {
                JsonValue::Object(serde_json::Map::new())
            }),
            ports: field_or(definition, PORTS_KEY, || JsonValue::Array(Vec::new())),
        };

        tracing::debug!("Projected service '{}'", name);
        catalog.insert(name, record);
    }

    Ok(catalog)
}

/// Converts a YAML tree into the equivalent JSON tree.
pub fn yaml_to_json(value: &YamlValue) -> JsonValue {
    match value {
        YamlValue::Null => JsonValue::Null,
        YamlValue::Bool(b) => JsonValue::Bool(*b),
        YamlValue::Number(n) => number_to_json(n),
        YamlValue::String(s) => JsonValue::String(s.clone()),
        YamlValue::Sequence(items) => JsonValue::Array(items.iter().map(yaml_to_json).collect()),
        YamlValue::Mapping(mapping) => JsonValue::Object(
            mapping
                .iter()
                .map(|(k, v)| (mapping_key(k), yaml_to_json(v)))
                .collect(),
        ),
        YamlValue::Tagged(tagged) => yaml_to_json(&tagged.value),
    }
}

fn field_or(definition: &YamlValue, key: &str, default: impl FnOnce() -> JsonValue) -> JsonValue {
    match untagged(definition).get(key).map(untagged) {
        None | Some(YamlValue::Null) => default(),
        Some(value) => yaml_to_json(value),
    }
}

fn number_to_json(n: &serde_yaml::Number) -> JsonValue {
    if let Some(i) = n.as_i64() {
        return JsonValue::from(i);
    }
    if let Some(u) = n.as_u64() {
        return JsonValue::from(u);
    }
    n.as_f64()
        .and_then(serde_json::Number::from_f64)
        .map(JsonValue::Number)
        .unwrap_or(JsonValue::Null)
}

fn mapping_key(key: &YamlValue) -> String {
    match key {
        YamlValue::String(s) => s.clone(),
        YamlValue::Null => "null".to_string(),
        YamlValue::Bool(b) => b.to_string(),
        YamlValue::Number(n) => number_key(n),
        YamlValue::Tagged(tagged) => mapping_key(&tagged.value),
        compound => yaml_to_json(compound).to_string(),
    }
}

/// Integral floats lose their fraction (`1.0` becomes `"1"`) and infinities
/// are spelled out, matching JavaScript number-to-string conversion.
fn number_key(n: &serde_yaml::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() => {
            if f.is_nan() {
                "NaN".to_string()
            } else if f.is_infinite() {
                if f > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
            } else {
                f.to_string()
            }
        }
        _ => n.to_string(),
    }
}

fn untagged(value: &YamlValue) -> &YamlValue {
    match value {
        YamlValue::Tagged(tagged) => untagged(&tagged.value),
        other => other,
    }
}

fn kind_name(value: &YamlValue) -> &'static str {
    match value {
        YamlValue::Null => "null",
        YamlValue::Bool(_) => "a boolean",
        YamlValue::Number(_) => "a number",
        YamlValue::String(_) => "a string",
        YamlValue::Sequence(_) => "a sequence",
        YamlValue::Mapping(_) => "a mapping",
        YamlValue::Tagged(_) => "a tagged value",
    }
}
