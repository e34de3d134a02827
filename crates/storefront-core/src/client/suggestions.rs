/// Suggestions shown under the search box before anything is typed.
pub const SEARCH_SUGGESTIONS: [&str; 15] = [
    "iPhone 15 Pro",
    "Samsung Galaxy S24",
    "Xiaomi 14",
    "OPPO Reno 11",
    "vivo V30",
    "realme 11 Pro",
    "Google Pixel 8",
    "OnePlus 12",
    "HONOR Magic 6",
    "Sony Xperia 1 VI",
    "Apple iPhone 14",
    "Samsung Galaxy Z Flip",
    "Wireless Earbuds",
    "Smart Watch",
    "Tablet",
];

/// Case-insensitive suggestion lookup.
///
/// Spaces are ignored when matching, so `iphone15` finds `iPhone 15 Pro`.
pub fn suggest(prefix: &str, limit: usize) -> Vec<&'static str> {
    let needle = compact(prefix);
    SEARCH_SUGGESTIONS
        .iter()
        .copied()
        .filter(|name| needle.is_empty() || compact(name).contains(&needle))
        .take(limit)
        .collect()
}

fn compact(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).flat_map(char::to_lowercase).collect()
}
