//! Display-ready projections of a search hit.
//!
//! Product documents in the index are not uniform: titles are either a plain
//! string or a localized `{th, en}` object (with `en` sometimes an array),
//! prices come under several field names and may be numbers or strings.
//! These projections resolve those shapes once so renderers don't have to.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::search::Hit;

/// Listing-grid card.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProductCard {
    pub id: String,
    pub title: String,
    pub image_url: String,
    pub price_min: Option<f64>,
    /// `12,900.-` style label, or the raw `price` when no minimum is known
    pub price_label: String,
    pub discount_percent: Option<f64>,
}

/// Product detail page view.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProductView {
    pub id: String,
    pub title: String,
    pub image_url: String,
    pub price_display: Option<String>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub description: String,
    pub variants: Vec<String>,
    pub total_orders_last_week: Option<u64>,
}

impl ProductCard {
    pub fn from_hit(hit: &Hit) -> Self {
        let src = &hit.source;
        let price_min = present(src, &["price_min"]).and_then(as_number);

        let price_label = match price_min {
            Some(n) => format!("{}.-", format_thousands(n)),
            None => src.get("price").filter(|v| is_truthy(v)).map(display_value).unwrap_or_default(),
        };

        Self {
            id: hit.id.clone(),
            title: card_title(src),
            image_url: first_image(src, &["url", "file_name"]).unwrap_or_default(),
            price_min,
            price_label,
            discount_percent: present(src, &["discount_percent"]).and_then(as_number),
        }
    }

    /// `-15%` badge text, when the product carries a discount.
    pub fn discount_label(&self) -> Option<String> {
        self.discount_percent.map(|d| format!("-{}%", format_number(d)))
    }
}

impl ProductView {
    pub fn from_hit(hit: &Hit) -> Self {
        let src = &hit.source;
        let price_min = present(src, &["price_min", "min_price"]).and_then(as_number);

        Self {
            id: hit.id.clone(),
            title: view_title(src, &hit.id),
            image_url: first_image(src, &["url"])
                .or_else(|| truthy_str(src, "image"))
                .or_else(|| truthy_str(src, "image_url"))
                .unwrap_or_default(),
            price_display: price_display(src, price_min),
            price_min,
            price_max: present(src, &["price_max", "max_price"]).and_then(as_number),
            description: truthy_str(src, "description").unwrap_or_default(),
            variants: variants(src),
            total_orders_last_week: present(
                src,
                &["total_order_last_week", "total_orders_last_week", "total_orders_last_7_days"],
            )
            .and_then(as_count),
        }
    }
}

// Card titles prefer English, detail titles prefer Thai.
fn card_title(src: &Value) -> String {
    let title = src.get("title");
    if let Some(Value::String(s)) = title {
        if !s.trim().is_empty() {
            return s.trim().to_string();
        }
    }

    let en = title.and_then(|t| t.get("en")).and_then(|en| match en {
        Value::Array(items) => items.iter().filter_map(Value::as_str).find(|s| !s.trim().is_empty()),
        Value::String(s) if !s.trim().is_empty() => Some(s.as_str()),
        _ => None,
    });

    en.map(|s| s.trim().to_string())
        .or_else(|| title.and_then(|t| t.get("th")).filter(|v| is_truthy(v)).map(display_value))
        .or_else(|| truthy_str(src, "product_slug"))
        .unwrap_or_default()
}

fn view_title(src: &Value, hit_id: &str) -> String {
    let fallback = |keys: &[&str]| {
        keys.iter()
            .find_map(|k| src.get(*k).filter(|v| is_truthy(v)).map(display_value))
            .unwrap_or_else(|| hit_id.to_string())
    };

    let title = match src.get("title") {
        Some(t) if is_truthy(t) => t,
        _ => return fallback(&["name", "product_slug", "id"]),
    };

    match title {
        Value::String(s) => s.clone(),
        Value::Object(obj) => {
            if let Some(th) = obj.get("th").filter(|v| is_truthy(v)) {
                return display_value(th);
            }
            if let Some(first) = obj.get("en").and_then(Value::as_array).and_then(|a| a.first()) {
                return display_value(first);
            }
            for value in obj.values() {
                match value {
                    Value::String(s) if !s.is_empty() => return s.clone(),
                    Value::Array(items) if !items.is_empty() => return display_value(&items[0]),
                    _ => {},
                }
            }
            fallback(&["name", "id"])
        },
        _ => fallback(&["name", "id"]),
    }
}

fn price_display(src: &Value, price_min: Option<f64>) -> Option<String> {
    if let Some(Value::Number(n)) = src.get("price") {
        return n.as_f64().map(|p| format!("${}", format_number(p)));
    }
    if let Some(bundle) = src
        .get("price_with_max_discount_device_bundle_new_customer")
        .filter(|v| is_truthy(v))
    {
        return Some(format!("${}", display_value(bundle)));
    }
    if let Some(price) = src.get("price").filter(|v| is_truthy(v)) {
        return Some(display_value(price));
    }
    price_min.filter(|p| *p != 0.0).map(|p| format!("${}", format_number(p)))
}

fn variants(src: &Value) -> Vec<String> {
    let Some(item_variant) = src.get("item_variant") else {
        return Vec::new();
    };
    let raw = item_variant
        .get("th")
        .filter(|v| is_truthy(v))
        .or_else(|| item_variant.get("en"))
        .and_then(Value::as_str)
        .unwrap_or_default();

    raw.split('|').map(str::trim).filter(|s| !s.is_empty()).map(str::to_string).collect()
}

fn first_image(src: &Value, keys: &[&str]) -> Option<String> {
    let first = src.get("images")?.as_array()?.first()?;
    keys.iter().find_map(|k| first.get(*k).filter(|v| is_truthy(v)).map(display_value))
}

/// First field among `keys` that is present and not null.
fn present<'a>(src: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|k| src.get(*k).filter(|v| !v.is_null()))
}

fn truthy_str(src: &Value, key: &str) -> Option<String> {
    src.get(key).filter(|v| is_truthy(v)).map(display_value)
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn as_number(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().replace(',', "").parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|f| f.is_finite())
}

fn as_count(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64().or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.as_f64().map(format_number).unwrap_or_else(|| n.to_string()),
        other => other.to_string(),
    }
}

/// Integral values print without a fractional part (`199`, not `199.0`).
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// Thousands-separated with at most three fraction digits: `12900` → `12,900`.
fn format_thousands(n: f64) -> String {
    let fixed = format!("{:.3}", n.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if n < 0.0 && (int_part != "0" || !frac_part.is_empty()) { "-" } else { "" };
    if frac_part.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, frac_part)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn hit(id: &str, source: Value) -> Hit {
        Hit { id: id.to_string(), score: None, source }
    }

    #[test]
    fn test_card_prefers_first_non_blank_english_title() {
        let h = hit(
            "a1",
            json!({
                "title": {"th": "ไอโฟน 15", "en": ["  ", "iPhone 15 Pro "]},
                "images": [{"url": "https://cdn/x.jpg"}],
                "price_min": 41900,
                "discount_percent": 10
            }),
        );

        let card = ProductCard::from_hit(&h);
        assert_eq!(card.title, "iPhone 15 Pro");
        assert_eq!(card.image_url, "https://cdn/x.jpg");
        assert_eq!(card.price_label, "41,900.-");
        assert_eq!(card.discount_label().as_deref(), Some("-10%"));
    }

    #[test]
    fn test_card_falls_back_to_thai_then_slug() {
        let thai = ProductCard::from_hit(&hit("b", json!({"title": {"th": "กาแล็กซี่ S24", "en": []}})));
        assert_eq!(thai.title, "กาแล็กซี่ S24");

        let slug = ProductCard::from_hit(&hit("c", json!({"product_slug": "galaxy-s24"})));
        assert_eq!(slug.title, "galaxy-s24");
        assert_eq!(slug.price_label, "");
        assert_eq!(slug.discount_label(), None);
    }

    #[test]
    fn test_card_uses_file_name_and_raw_price_without_minimum() {
        let card = ProductCard::from_hit(&hit(
            "d",
            json!({"images": [{"file_name": "x.png"}], "price": "Call for price"}),
        ));
        assert_eq!(card.image_url, "x.png");
        assert_eq!(card.price_label, "Call for price");
    }

    #[test]
    fn test_view_title_resolution_order() {
        let th = ProductView::from_hit(&hit("1", json!({"title": {"th": "ไทย", "en": ["English"]}})));
        assert_eq!(th.title, "ไทย");

        let en = ProductView::from_hit(&hit("2", json!({"title": {"en": ["English"]}})));
        assert_eq!(en.title, "English");

        let other = ProductView::from_hit(&hit("3", json!({"title": {"zh": "中文"}})));
        assert_eq!(other.title, "中文");

        let plain = ProductView::from_hit(&hit("4", json!({"title": "Pixel 8"})));
        assert_eq!(plain.title, "Pixel 8");

        let named = ProductView::from_hit(&hit("5", json!({"name": "Redmi Note 13"})));
        assert_eq!(named.title, "Redmi Note 13");

        let bare = ProductView::from_hit(&hit("6", json!({})));
        assert_eq!(bare.title, "6");
    }

    #[test]
    fn test_view_price_display_precedence() {
        let numeric = ProductView::from_hit(&hit("1", json!({"price": 199})));
        assert_eq!(numeric.price_display.as_deref(), Some("$199"));

        let bundle = ProductView::from_hit(&hit(
            "2",
            json!({"price_with_max_discount_device_bundle_new_customer": 15900, "price": "ignored"}),
        ));
        assert_eq!(bundle.price_display.as_deref(), Some("$15900"));

        let min_only = ProductView::from_hit(&hit("3", json!({"min_price": "9990", "max_price": 12990})));
        assert_eq!(min_only.price_display.as_deref(), Some("$9990"));
        assert_eq!(min_only.price_min, Some(9990.0));
        assert_eq!(min_only.price_max, Some(12990.0));

        let nothing = ProductView::from_hit(&hit("4", json!({})));
        assert_eq!(nothing.price_display, None);
    }

    #[test]
    fn test_view_variants_and_orders() {
        let view = ProductView::from_hit(&hit(
            "v",
            json!({
                "item_variant": {"th": " 128GB | 256GB || 512GB "},
                "total_orders_last_7_days": 42,
                "description": "Flagship",
                "image": "https://cdn/fallback.jpg"
            }),
        ));

        assert_eq!(view.variants, vec!["128GB", "256GB", "512GB"]);
        assert_eq!(view.total_orders_last_week, Some(42));
        assert_eq!(view.description, "Flagship");
        assert_eq!(view.image_url, "https://cdn/fallback.jpg");
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(12900.0), "12,900");
        assert_eq!(format_thousands(999.0), "999");
        assert_eq!(format_thousands(1234567.5), "1,234,567.5");
        assert_eq!(format_thousands(0.0), "0");
    }
}
