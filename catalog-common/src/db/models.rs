//! Database models

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A catalog entry as returned to clients.
///
/// `id` is the store-assigned identifier in string form. `actors` is
/// always a materialized list, never a bare scalar, regardless of how
/// the row is stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub actors: Vec<String>,
    pub year: i64,
}

/// Decode the `actors` column into a list.
///
/// The column normally holds a JSON array of strings. Legacy rows may
/// hold a JSON string or raw unencoded text; both are wrapped into a
/// single-element list so clients always see a sequence.
pub(crate) fn decode_actors(raw: &str) -> Vec<String> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(items)) => items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => s,
                other => other.to_string(),
            })
            .collect(),
        Ok(Value::String(s)) => vec![s],
        _ => vec![raw.to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_json_array() {
        assert_eq!(
            decode_actors(r#"["Alice","Bob"]"#),
            vec!["Alice".to_string(), "Bob".to_string()]
        );
    }

    #[test]
    fn wraps_json_string_scalar() {
        assert_eq!(decode_actors(r#""Alice""#), vec!["Alice".to_string()]);
    }

    #[test]
    fn wraps_raw_text() {
        assert_eq!(
            decode_actors("Single Actor"),
            vec!["Single Actor".to_string()]
        );
    }

    #[test]
    fn empty_array_stays_empty() {
        assert_eq!(decode_actors("[]"), Vec::<String>::new());
    }
}
