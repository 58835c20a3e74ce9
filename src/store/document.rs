use serde::Serialize;
use serde_json::{Map, Value};

/// A raw store document: the store-assigned identifier plus the schema-free
/// field bag, exactly as the backend holds it. No validation or typing is
/// applied here; the field shape is the store's responsibility.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub fields: Map<String, Value>,
}

impl Document {
    pub fn new(id: impl Into<String>, fields: Map<String, Value>) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    /// Denormalize into a [`Record`], merging the identifier into the field
    /// bag. The store-assigned id always wins over a stored field that
    /// happens to be named `id`.
    pub fn into_record(self) -> Record {
        let mut fields = self.fields;
        fields.insert("id".to_string(), Value::String(self.id));
        Record { fields }
    }
}

/// A denormalized record as handed to callers: an `id` field holding the
/// store-assigned identifier, and every other field verbatim from the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    pub fn id(&self) -> &str {
        self.fields
            .get("id")
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn merges_id_into_field_bag() {
        let doc = Document::new("m1", fields(json!({ "name": "aspirin", "stock": 12 })));
        let record = doc.into_record();
        assert_eq!(record.id(), "m1");
        assert_eq!(record.get("name"), Some(&json!("aspirin")));
        assert_eq!(record.get("stock"), Some(&json!(12)));
        assert_eq!(record.fields().len(), 3);
    }

    #[test]
    fn store_assigned_id_wins_over_id_field() {
        let doc = Document::new("m1", fields(json!({ "id": "bogus", "name": "aspirin" })));
        let record = doc.into_record();
        assert_eq!(record.id(), "m1");
    }
}
