use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use serde_json::Value;

use crate::models::enums::SortDirection;

/// One `{"field": "asc"|"desc"}` entry of the `sort` list.
#[derive(Clone, Debug, PartialEq)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self { field: field.into(), direction }
    }
}

impl Serialize for SortSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.field, self.direction.as_str())?;
        map.end()
    }
}

/// The document query emitted for one SELECT.
///
/// Keys serialize in the order `selector`, `sort`, `skip`, `limit`; absent keys are omitted.
/// `skip` and `limit` serialize as decimal strings.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct QueryDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<Vec<SortSpec>>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "decimal_string")]
    pub skip: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "decimal_string")]
    pub limit: Option<u64>,
}

fn decimal_string<S: Serializer>(value: &Option<u64>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(n) => serializer.serialize_str(&n.to_string()),
        None => serializer.serialize_none(),
    }
}

impl QueryDocument {
    /// Compact JSON text with the fixed key order.
    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Build a `bson::Document` to hand to a document-store driver.
    /// Goes through the same `Serialize` impl as the JSON output.
    #[cfg(feature = "bson")]
    pub fn to_bson(&self) -> bson::error::Result<bson::Document> {
        bson::serialize_to_document(self)
    }
}

/// Result of translating one statement.
#[derive(Clone, Debug, PartialEq)]
pub struct Translation {
    pub document: QueryDocument,
    pub collection: String,
}
