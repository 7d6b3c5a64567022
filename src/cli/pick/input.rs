//! Input documents for the pick command.

use std::fs;
use std::io::Read;
use std::path::Path;

use serde_json::{Map, Number, Value as JsonValue};
use toml::Value as TomlValue;

use super::error::PickError;
use crate::config::InputFormat;
use crate::node::pick_many;

/// A parsed input document.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    Json(JsonValue),
    Toml(TomlValue),
}

impl Document {
    /// Parse `content`. `Auto` is treated as JSON.
    pub fn parse(content: &str, format: InputFormat) -> Result<Self, PickError> {
        match format {
            InputFormat::Toml => Ok(Self::Toml(toml::from_str(content)?)),
            InputFormat::Json | InputFormat::Auto => Ok(Self::Json(serde_json::from_str(content)?)),
        }
    }

    /// Read from a file, or stdin when `path` is `None`.
    pub fn read(path: Option<&Path>, format: InputFormat) -> Result<Self, PickError> {
        let content = match path {
            Some(path) => {
                fs::read_to_string(path).map_err(|err| PickError::Io(path.to_path_buf(), err))?
            }
            None => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .map_err(PickError::Stdin)?;
                buf
            }
        };
        Self::parse(&content, format)
    }

    /// Resolve every path, converting found values to JSON.
    pub fn pick_all<'p>(&self, paths: &'p [String]) -> Vec<(&'p str, Option<JsonValue>)> {
        let paths = paths.iter().map(String::as_str);
        match self {
            Self::Json(root) => pick_many(paths, root)
                .into_iter()
                .map(|(path, value)| (path, value.cloned()))
                .collect(),
            Self::Toml(root) => pick_many(paths, root)
                .into_iter()
                .map(|(path, value)| (path, value.map(toml_to_json)))
                .collect(),
        }
    }
}

/// Convert a TOML value to JSON. Datetimes become strings; non-finite
/// floats become `null`.
pub fn toml_to_json(value: &TomlValue) -> JsonValue {
    match value {
        TomlValue::String(s) => JsonValue::String(s.clone()),
        TomlValue::Integer(i) => JsonValue::Number((*i).into()),
        TomlValue::Float(f) => Number::from_f64(*f).map_or(JsonValue::Null, JsonValue::Number),
        TomlValue::Boolean(b) => JsonValue::Bool(*b),
        TomlValue::Datetime(dt) => JsonValue::String(dt.to_string()),
        TomlValue::Array(items) => JsonValue::Array(items.iter().map(toml_to_json).collect()),
        TomlValue::Table(table) => JsonValue::Object(
            table
                .iter()
                .map(|(k, v)| (k.clone(), toml_to_json(v)))
                .collect::<Map<_, _>>(),
        ),
    }
}
