use std::collections::BTreeMap;
use std::iter::FromIterator;

use marquee_core::{ErrorInfo, MarqueeError};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

fn serde_error(code: &str, err: impl ToString) -> MarqueeError {
    MarqueeError::Serde(ErrorInfo::new(code, err.to_string()))
}

fn canonicalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let ordered = map
                .into_iter()
                .map(|(key, value)| (key, canonicalize(value)))
                .collect::<BTreeMap<_, _>>();
            Value::Object(Map::from_iter(ordered))
        }
        Value::Array(values) => Value::Array(values.into_iter().map(canonicalize).collect()),
        other => other,
    }
}

/// Serializes a value into canonical JSON bytes with deterministic key order.
pub fn to_canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, MarqueeError> {
    let value = serde_json::to_value(value).map_err(|err| serde_error("marquee.json.encode", err))?;
    let canonical = canonicalize(value);
    let mut bytes = Vec::new();
    serde_json::to_writer(&mut bytes, &canonical)
        .map_err(|err| serde_error("marquee.json.write", err))?;
    Ok(bytes)
}

/// Deserializes a value from JSON bytes.
pub fn from_json_slice<T: DeserializeOwned>(data: &[u8]) -> Result<T, MarqueeError> {
    serde_json::from_slice(data).map_err(|err| serde_error("marquee.json.decode", err))
}

/// Serializes a value into YAML.
pub fn to_yaml_string<T: Serialize>(value: &T) -> Result<String, MarqueeError> {
    serde_yaml::to_string(value).map_err(|err| serde_error("marquee.yaml.encode", err))
}

/// Deserializes configuration YAML.
pub fn from_yaml_slice<T: DeserializeOwned>(data: &[u8]) -> Result<T, MarqueeError> {
    serde_yaml::from_slice(data).map_err(|err| {
        MarqueeError::Config(
            ErrorInfo::new("marquee.yaml.decode", err.to_string())
                .with_hint("check the config file against the documented keys"),
        )
    })
}
