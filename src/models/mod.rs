pub mod invite;
pub mod round;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub use invite::{
    truncate_chars, Delivery, InviteFields, InviteRecord, InviteUpdate, MailStatus,
    MAX_ERROR_CHARS, MISSING_FIELDS_ERROR,
};
pub use round::{RawImportFields, RoundFields};

/// A row as Airtable's REST API returns it
#[derive(Debug, Clone, Deserialize)]
pub struct AirtableRecord<F> {
    pub id: String,
    pub fields: F,
}

/// One page of a list request; `offset` is present while more pages remain
#[derive(Debug, Clone, Deserialize)]
pub struct RecordPage<F> {
    #[serde(default = "Vec::new")]
    pub records: Vec<AirtableRecord<F>>,
    #[serde(default)]
    pub offset: Option<String>,
}

/// Body of a `PATCH` or create entry
#[derive(Debug, Clone, Serialize)]
pub struct FieldsBody<F> {
    pub fields: F,
}

/// Text Airtable would display for a cell of any type: linked records and
/// lookups join with `", "`, collaborators and attachments use their name.
pub fn cell_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items
            .iter()
            .map(cell_to_string)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(map) => ["name", "email", "filename", "url", "id"]
            .iter()
            .find_map(|key| map.get(*key).map(cell_to_string))
            .unwrap_or_default(),
    }
}

/// `deserialize_with` adapter reading any cell as optional text
pub(crate) fn cell_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.map(|v| cell_to_string(&v)))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_cell_to_string() {
        assert_eq!(cell_to_string(&json!("Acme")), "Acme");
        assert_eq!(cell_to_string(&json!(null)), "");
        assert_eq!(cell_to_string(&json!(42)), "42");
        assert_eq!(cell_to_string(&json!(true)), "true");
        assert_eq!(cell_to_string(&json!(["recA", "recB"])), "recA, recB");
        assert_eq!(
            cell_to_string(&json!({ "id": "usr1", "email": "g@acme.io", "name": "Grace" })),
            "Grace"
        );
        assert_eq!(
            cell_to_string(&json!([{ "id": "usr1", "email": "g@acme.io" }, null])),
            "g@acme.io"
        );
    }
}
