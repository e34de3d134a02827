use super::*;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Segmenter returning a canned answer and counting calls.
struct ScriptedSegmenter {
    answer: Result<Vec<String>, SegmentError>,
    calls: AtomicUsize,
}

impl ScriptedSegmenter {
    fn new(answer: Result<Vec<&str>, SegmentError>) -> Arc<Self> {
        Arc::new(Self {
            answer: answer.map(|p| p.into_iter().map(str::to_string).collect()),
            calls: AtomicUsize::new(0),
        })
    }
}

impl Segmenter for ScriptedSegmenter {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn segment(&self, _token: &str) -> Result<Vec<String>, SegmentError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answer.clone()
    }
}

const SAMPLES: &[&str] = &[
    "",
    "iphone13",
    "Android15",
    "iPhoneAir",
    "13pro",
    "samsunggalaxy",
    "  Samsung   Galaxy S24 Ultra ",
    "qzxw",
    "iphone15promax",
    "GalaxyNote20Ultra",
    "ไอโฟน 15",
    "pixel8a",
    "xiaomiredminote13",
    "iPad Air 5",
    "wirelessearbuds",
    "\u{212A}1",
    "9\u{212A}",
    "\u{130}1",
    "Galaxy\u{212A}20",
    "\u{130}PHONE15",
];

#[test]
fn test_spec_examples() {
    assert_eq!(normalize("iphone13"), "iphone 13");
    assert_eq!(normalize("Android15"), "android 15");
    assert_eq!(normalize("iPhoneAir"), "iphone air");
    assert_eq!(normalize("13pro"), "13 pro");
}

#[test]
fn test_empty_input_is_returned_unchanged() {
    assert_eq!(normalize(""), "");
}

#[test]
fn test_non_string_values_are_returned_unchanged() {
    assert_eq!(normalize_value(&Value::Null), Value::Null);
    assert_eq!(normalize_value(&json!(42)), json!(42));
    assert_eq!(normalize_value(&json!({"q": "iphone13"})), json!({"q": "iphone13"}));
    assert_eq!(normalize_value(&json!("iphone13")), json!("iphone 13"));
}

#[test]
fn test_dictionary_fallback_splits_known_words() {
    assert_eq!(normalize("samsunggalaxy"), "samsung galaxy");
    assert_eq!(normalize("iphone15promax"), "iphone 15 pro max");
    assert_eq!(normalize("xiaomiredminote13"), "xiaomi redmi note 13");
}

#[test]
fn test_unknown_token_is_left_unchanged() {
    assert_eq!(normalize("qzxw"), "qzxw");
    assert_eq!(normalize("buy qzxw now"), "buy qzxw now");
}

#[test]
fn test_whitespace_is_collapsed() {
    assert_eq!(normalize("  Samsung   Galaxy S24 Ultra "), "samsung galaxy s 24 ultra");
    assert_eq!(normalize("   "), "");
}

#[test]
fn test_normalization_is_idempotent() {
    for sample in SAMPLES {
        let once = normalize(sample);
        assert_eq!(normalize(&once), once, "not idempotent for {:?}", sample);
    }
}

#[test]
fn test_short_tokens_skip_segmentation() {
    let seg = ScriptedSegmenter::new(Ok(vec!["a", "ir"]));
    let normalizer = QueryNormalizer::new().with_segmenter(seg.clone());

    assert_eq!(normalizer.normalize("air"), "air");
    assert_eq!(normalizer.normalize("pro 13"), "pro 13");
    assert_eq!(seg.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_external_segmenter_output_is_used_when_valid() {
    let seg = ScriptedSegmenter::new(Ok(vec!["smart", "watch"]));
    let normalizer = QueryNormalizer::new().with_segmenter(seg.clone());

    assert_eq!(normalizer.normalize("smartwatch"), "smart watch");
    assert_eq!(seg.calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_single_piece_output_falls_back_to_dictionary() {
    let seg = ScriptedSegmenter::new(Ok(vec!["samsunggalaxy"]));
    let normalizer = QueryNormalizer::new().with_segmenter(seg);

    assert_eq!(normalizer.normalize("samsunggalaxy"), "samsung galaxy");
}

#[test]
fn test_single_letter_pieces_are_rejected() {
    let seg = ScriptedSegmenter::new(Ok(vec!["q", "z", "x", "w"]));
    let normalizer = QueryNormalizer::new().with_segmenter(seg);

    assert_eq!(normalizer.normalize("qzxw"), "qzxw");
}

#[test]
fn test_failing_segmenter_is_swallowed() {
    let seg = ScriptedSegmenter::new(Err(SegmentError::Unavailable {
        message: "dictionary not loaded".to_string(),
    }));
    let normalizer = QueryNormalizer::new().with_segmenter(seg);

    assert_eq!(normalizer.normalize("iPhoneAir13"), "iphone air 13");
    assert_eq!(normalizer.normalize("opporeno"), "oppo reno");
}

#[test]
fn test_tokens_with_digits_or_uppercase_never_reach_word_break() {
    let seg = ScriptedSegmenter::new(Ok(vec!["x", "yz"]));
    let normalizer = QueryNormalizer::new().with_segmenter(seg.clone());

    // Digits are split off first; remaining letter runs are short.
    assert_eq!(normalizer.normalize("abc123"), "abc 123");
    assert_eq!(seg.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_frequency_segmenter_plugs_in() {
    let seg = Arc::new(FrequencySegmenter::from_ranked_words(["the", "case", "phone", "cover"]));
    let normalizer = QueryNormalizer::new().with_segmenter(seg);

    assert_eq!(normalizer.segmenter_name(), Some("frequency"));
    assert_eq!(normalizer.normalize("phonecase"), "phone case");
    // Not in the word list: dictionary fallback takes over.
    assert_eq!(normalizer.normalize("pixelpro"), "pixel pro");
}

#[test]
fn test_segmenter_pieces_are_lowercased() {
    let seg = ScriptedSegmenter::new(Ok(vec!["Smart", " Watch "]));
    let normalizer = QueryNormalizer::new().with_segmenter(seg);

    assert_eq!(normalizer.normalize("smartwatch"), "smart watch");
}

#[test]
fn test_pieces_not_rebuilding_token_fall_back_to_dictionary() {
    let seg = ScriptedSegmenter::new(Ok(vec!["galaxy", "samsung"]));
    let normalizer = QueryNormalizer::new().with_segmenter(seg.clone());

    assert_eq!(normalizer.normalize("samsunggalaxy"), "samsung galaxy");
    assert_eq!(seg.calls.load(Ordering::SeqCst), 1);
}
