//! Design Tokens Community Group (DTCG) JSON exporter.
//!
//! Every token is `{ "$type": "color", "$value": "oklch(...)" }`, scales
//! nest by step, and an optional `dark` object carries the dark-mode
//! counterpart set.

use serde_json::{json, Map, Value};

use crate::types::{ColourScale, SemanticTokens};

fn scale_value(scale: &ColourScale) -> Value {
    let mut steps = Map::new();
    for (step, colour) in scale.iter() {
        steps.insert(
            step.as_str().to_string(),
            json!({
                "$type": "color",
                "$value": colour.to_string(),
            }),
        );
    }
    Value::Object(steps)
}

fn tokens_value(tokens: &SemanticTokens) -> Map<String, Value> {
    let mut roles = Map::new();
    for (role, scale) in tokens.iter() {
        roles.insert(role.to_string(), scale_value(scale));
    }
    roles
}

/// Export a token set (plus optional dark counterpart) as DTCG JSON.
pub fn export_to_dtcg(light: &SemanticTokens, dark: Option<&SemanticTokens>) -> String {
    let mut root = tokens_value(light);
    if let Some(dark) = dark {
        root.insert("dark".to_string(), Value::Object(tokens_value(dark)));
    }

    // Map insertion order is preserved, so output order is the declared
    // role order and serialization stays byte-stable.
    serde_json::to_string_pretty(&Value::Object(root)).expect("token JSON never fails")
}
