//! JSON formatting

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value as JsonValue;

/// JSON formatting options
#[derive(Debug, Clone)]
pub struct JsonFormatterOptions {
    /// Indentation in spaces (default: 4)
    pub indent: usize,
    /// Sort keys alphabetically instead of keeping response order
    pub sort_keys: bool,
}

impl Default for JsonFormatterOptions {
    fn default() -> Self {
        Self {
            indent: 4,
            sort_keys: false,
        }
    }
}

/// Maximum recursion depth for key sorting
const MAX_JSON_DEPTH: usize = 128;

/// Pretty-print a JSON value.
///
/// One member per line, `": "` between key and value. Key order is the order
/// the server sent unless `sort_keys` is set.
pub fn format_json(value: &JsonValue, options: &JsonFormatterOptions) -> Result<String, serde_json::Error> {
    if options.sort_keys {
        write_pretty(&sort_json_keys(value, 0), options.indent)
    } else {
        write_pretty(value, options.indent)
    }
}

fn write_pretty(value: &JsonValue, indent: usize) -> Result<String, serde_json::Error> {
    let indent = vec![b' '; indent];
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(&indent));
    value.serialize(&mut serializer)?;

    // serde_json only ever writes valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn sort_json_keys(value: &JsonValue, depth: usize) -> JsonValue {
    if depth >= MAX_JSON_DEPTH {
        return value.clone();
    }

    match value {
        JsonValue::Object(map) => {
            let mut entries: Vec<_> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));

            JsonValue::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.clone(), sort_json_keys(v, depth + 1)))
                    .collect(),
            )
        }
        JsonValue::Array(items) => {
            JsonValue::Array(items.iter().map(|v| sort_json_keys(v, depth + 1)).collect())
        }
        _ => value.clone(),
    }
}
