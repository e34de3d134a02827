//! Search request documents.

use serde::{Serialize, Serializer};
use serde_json::{json, Value};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Brand filter entry meaning "no brand filter".
pub const ALL_BRANDS: &str = "All Mobile Brands";

const TITLE_FIELDS: [&str; 2] = ["title.en", "title.th"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    Popularity,
    Latest,
    PriceLowToHigh,
    PriceHighToLow,
}

impl SortBy {
    fn clause(self) -> Value {
        match self {
            Self::Popularity => {
                json!({ "total_order_last_week": { "order": "desc", "missing": "_last" } })
            },
            Self::Latest => json!({ "created_at": { "order": "desc", "unmapped_type": "date" } }),
            Self::PriceLowToHigh => json!({ "price_min": { "order": "asc", "missing": "_last" } }),
            Self::PriceHighToLow => json!({ "price_min": { "order": "desc", "missing": "_last" } }),
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Popularity => "popularity",
            Self::Latest => "latest",
            Self::PriceLowToHigh => "price_asc",
            Self::PriceHighToLow => "price_desc",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "popularity" | "popular" => Ok(Self::Popularity),
            "latest" | "newest" => Ok(Self::Latest),
            "price" | "price_asc" => Ok(Self::PriceLowToHigh),
            "price_desc" => Ok(Self::PriceHighToLow),
            other => Err(format!("unknown sort '{}'", other)),
        }
    }
}

/// JSON body posted to `_search`.
///
/// ```
/// use storefront_core::{QueryDocument, SortBy};
///
/// let doc = QueryDocument::new("iphone 15").with_sort(SortBy::PriceLowToHigh);
/// assert_eq!(doc.to_json()["sort"][0]["price_min"]["order"], "asc");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryDocument {
    pub query: String,
    pub size: usize,
    pub from: usize,
    pub brand: Option<String>,
    pub sort: SortBy,
}

impl QueryDocument {
    /// Document for an already normalized query. An empty query matches everything.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            size: DEFAULT_PAGE_SIZE,
            from: 0,
            brand: None,
            sort: SortBy::default(),
        }
    }

    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn with_from(mut self, from: usize) -> Self {
        self.from = from;
        self
    }

    /// Restrict to one brand; blank values and [`ALL_BRANDS`] clear the filter.
    pub fn with_brand(mut self, brand: Option<&str>) -> Self {
        self.brand = brand
            .map(str::trim)
            .filter(|b| !b.is_empty() && *b != ALL_BRANDS)
            .map(str::to_string);
        self
    }

    pub fn with_sort(mut self, sort: SortBy) -> Self {
        self.sort = sort;
        self
    }

    pub fn to_json(&self) -> Value {
        let text = self.query.trim();
        let must = if text.is_empty() {
            json!({ "match_all": {} })
        } else {
            json!({
                "multi_match": {
                    "query": text,
                    "fields": TITLE_FIELDS,
                    "operator": "and",
                    "fuzziness": "AUTO"
                }
            })
        };

        let filter: Vec<Value> = self
            .brand
            .iter()
            .map(|brand| json!({ "match": { "brand": { "query": brand, "operator": "and" } } }))
            .collect();

        json!({
            "size": self.size,
            "from": self.from,
            "query": { "bool": { "must": [must], "filter": filter } },
            "sort": [self.sort.clause()],
        })
    }
}

impl Serialize for QueryDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_query_uses_multi_match() {
        let doc = QueryDocument::new("iphone 15").to_json();
        let must = &doc["query"]["bool"]["must"][0]["multi_match"];

        assert_eq!(must["query"], "iphone 15");
        assert_eq!(must["fields"], json!(["title.en", "title.th"]));
        assert_eq!(doc["size"], 20);
        assert_eq!(doc["from"], 0);
    }

    #[test]
    fn test_blank_query_matches_all() {
        let doc = QueryDocument::new("   ").to_json();
        assert_eq!(doc["query"]["bool"]["must"][0], json!({ "match_all": {} }));
    }

    #[test]
    fn test_brand_filter() {
        let doc = QueryDocument::new("").with_brand(Some("Samsung")).to_json();
        assert_eq!(doc["query"]["bool"]["filter"][0]["match"]["brand"]["query"], "Samsung");

        let all = QueryDocument::new("").with_brand(Some(ALL_BRANDS));
        assert_eq!(all.brand, None);
        assert_eq!(all.to_json()["query"]["bool"]["filter"], json!([]));
    }

    #[test]
    fn test_sort_clauses() {
        let popular = QueryDocument::new("x").to_json();
        assert_eq!(popular["sort"][0]["total_order_last_week"]["order"], "desc");

        let cheap = QueryDocument::new("x").with_sort(SortBy::PriceLowToHigh).to_json();
        assert_eq!(cheap["sort"][0]["price_min"]["order"], "asc");

        let pricey = QueryDocument::new("x").with_sort(SortBy::PriceHighToLow).to_json();
        assert_eq!(pricey["sort"][0]["price_min"]["order"], "desc");
    }

    #[test]
    fn test_sort_parsing() {
        assert_eq!("Popularity".parse::<SortBy>(), Ok(SortBy::Popularity));
        assert_eq!("newest".parse::<SortBy>(), Ok(SortBy::Latest));
        assert_eq!("Price".parse::<SortBy>(), Ok(SortBy::PriceLowToHigh));
        assert!("cheapest".parse::<SortBy>().is_err());
    }

    #[test]
    fn test_serializes_as_document() {
        let doc = QueryDocument::new("pixel 8").with_size(5).with_from(10);
        let value = serde_json::to_value(&doc).unwrap();

        assert_eq!(value, doc.to_json());
        assert_eq!(value["size"], 5);
        assert_eq!(value["from"], 10);
    }
}
