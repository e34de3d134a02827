//! Search-response document returned by the upstream index.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::product::ProductCard;

/// Top-level `_search` response. Only the parts the storefront reads are typed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchResponse {
    #[serde(default)]
    pub hits: HitsEnvelope,
    #[serde(rename = "_scroll_id", default, skip_serializing_if = "Option::is_none")]
    pub scroll_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub took: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HitsEnvelope {
    /// Either a bare number or `{ "value": n, "relation": "eq" }`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<Value>,
    #[serde(default)]
    pub hits: Vec<Hit>,
}

/// One result record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Hit {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(rename = "_score", default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    /// Product document; kept loose because field shapes vary between records
    #[serde(rename = "_source", default)]
    pub source: Value,
}

impl SearchResponse {
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    pub fn is_empty(&self) -> bool {
        self.hits.hits.is_empty()
    }

    /// Total hit count reported by the engine, if any.
    pub fn total_hits(&self) -> Option<u64> {
        match self.hits.total.as_ref()? {
            Value::Number(n) => n.as_u64(),
            Value::Object(obj) => obj.get("value").and_then(Value::as_u64),
            _ => None,
        }
    }

    /// Listing cards for every hit, in engine order.
    pub fn cards(&self) -> Vec<ProductCard> {
        self.hits.hits.iter().map(ProductCard::from_hit).collect()
    }
}
