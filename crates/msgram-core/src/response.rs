//! Rendering of the scoring service's reply to a metrics upload

use serde_json::{Map, Value};

/// Status returned when imported metrics were stored
pub const STATUS_CREATED: u16 = 201;

/// Body key the service uses for errors not tied to one field
pub const ALL_FIELDS_KEY: &str = "__all__";

/// Label shown in place of [`ALL_FIELDS_KEY`]
pub const ALL_FIELDS_LABEL: &str = "General";

const SAVED_MESSAGE: &str = "The imported metrics were saved for the pre-configuration";
const ERROR_HEADER: &str = "There was a ERROR while saving your Metrics:";

/// Lines to show the operator for a metrics upload reply.
///
/// A 201 produces a single confirmation line. Any other status produces a
/// header followed by one `field => message` line per body entry.
pub fn render_metrics_post(status: u16, body: &Map<String, Value>) -> Vec<String> {
    if status == STATUS_CREATED {
        return vec![SAVED_MESSAGE.to_string()];
    }

    let mut lines = Vec::with_capacity(body.len() + 1);
    lines.push(ERROR_HEADER.to_string());
    lines.extend(body.iter().map(|(key, value)| {
        let field = if key == ALL_FIELDS_KEY {
            ALL_FIELDS_LABEL
        } else {
            key.as_str()
        };
        format!("{field} => {}", message_text(value))
    }));
    lines
}

fn message_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(message_text)
            .collect::<Vec<_>>()
            .join("; "),
        other => other.to_string(),
    }
}
