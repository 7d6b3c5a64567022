use anyhow::Result;
use serde_json::{Map, Value as JsonValue};

/// Render picked values for stdout.
///
/// A single path prints its value alone, or nothing when absent. Several
/// paths print one object keyed by path, in input order, with absent
/// values as `null` unless `filter_absent` drops them.
pub(super) fn render(
    picked: &[(&str, Option<JsonValue>)],
    filter_absent: bool,
    pretty: bool,
) -> Result<Option<String>> {
    let output = match picked {
        [(_, value)] => match value {
            Some(value) => value.clone(),
            None => return Ok(None),
        },
        _ => collect_fields(picked, filter_absent),
    };

    let formatted = if pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    Ok(Some(formatted))
}

fn collect_fields(picked: &[(&str, Option<JsonValue>)], filter_absent: bool) -> JsonValue {
    let mut obj = Map::new();
    for (path, value) in picked {
        match value {
            Some(value) => {
                obj.insert((*path).to_string(), value.clone());
            }
            // Path explicitly requested but absent - show null when not filtering
            None if !filter_absent => {
                obj.insert((*path).to_string(), JsonValue::Null);
            }
            None => {}
        }
    }
    JsonValue::Object(obj)
}
