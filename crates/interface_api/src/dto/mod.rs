//! Request and response bodies

pub mod products;
pub mod billing;

use serde::Deserialize;

/// A form field that may arrive as a JSON number or as typed text
///
/// The display surface forwards text inputs verbatim, so both `3` and `"3"`
/// are accepted and validated by the same rules.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(serde_json::Number),
    Text(String),
}

impl FieldValue {
    pub fn as_text(&self) -> String {
        match self {
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Text(s) => s.clone(),
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}
