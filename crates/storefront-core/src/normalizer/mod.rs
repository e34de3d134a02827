//! Query normalization.
//!
//! Turns whatever the user typed into the query string sent to the search
//! engine:
//!
//! 1. space out letter/digit boundaries (`iphone13` → `iphone 13`)
//! 2. space out camel-case boundaries (`iPhoneAir` → `iPhone Air`)
//! 3. collapse whitespace and lowercase
//! 4. split long all-lowercase tokens into known words (`samsunggalaxy` →
//!    `samsung galaxy`), first through an optional [`Segmenter`], then
//!    through the dictionary fallback
//!
//! Normalization never fails. Segmentation problems are logged and the
//! token is kept as produced by steps 1-3.

mod dictionary;
mod frequency;
mod patterns;

#[cfg(test)]
mod tests;

pub use dictionary::{DictionarySegmenter, BRAND_VOCABULARY};
pub use frequency::FrequencySegmenter;

use serde_json::Value;
use std::sync::{Arc, OnceLock};
use thiserror::Error;

/// Tokens this short are never segmented.
const MIN_SEGMENT_LEN: usize = 4;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SegmentError {
    #[error("no segmentation found for '{token}'")]
    NoSegmentation { token: String },

    #[error("segmentation of '{token}' rejected: {pieces:?}")]
    Rejected { token: String, pieces: Vec<String> },

    #[error("segmenter unavailable: {message}")]
    Unavailable { message: String },
}

/// Word segmentation capability.
///
/// Implementations split a run of lowercase letters into words. The
/// normalizer does not trust optional implementations blindly; see
/// [`QueryNormalizer::with_segmenter`].
pub trait Segmenter: Send + Sync {
    fn name(&self) -> &'static str;

    fn segment(&self, token: &str) -> Result<Vec<String>, SegmentError>;
}

pub struct QueryNormalizer {
    external: Option<Arc<dyn Segmenter>>,
    fallback: DictionarySegmenter,
}

impl QueryNormalizer {
    /// Normalizer with only the brand dictionary fallback.
    pub fn new() -> Self {
        Self { external: None, fallback: DictionarySegmenter::brand_vocabulary() }
    }

    /// Install an optional segmenter consulted before the dictionary.
    ///
    /// Its output is lowercased and accepted only when it has more than one
    /// non-empty piece, at least one piece longer than a single character,
    /// and the pieces join back into the token.
    pub fn with_segmenter(mut self, segmenter: Arc<dyn Segmenter>) -> Self {
        self.external = Some(segmenter);
        self
    }

    pub fn with_fallback(mut self, fallback: DictionarySegmenter) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn segmenter_name(&self) -> Option<&'static str> {
        self.external.as_ref().map(|s| s.name())
    }

    pub fn normalize(&self, raw: &str) -> String {
        if raw.is_empty() {
            return String::new();
        }

        let base = patterns::split_boundaries(raw);
        let tokens: Vec<String> = base
            .split(' ')
            .map(|token| match self.split_token(token) {
                Some(pieces) => pieces.join(" "),
                None => token.to_string(),
            })
            .collect();

        patterns::collapse_whitespace(&tokens.join(" "))
    }

    /// JSON-level entry point: strings are normalized, anything else is
    /// returned unchanged.
    pub fn normalize_value(&self, raw: &Value) -> Value {
        match raw {
            Value::String(s) => Value::String(self.normalize(s)),
            other => other.clone(),
        }
    }

    fn split_token(&self, token: &str) -> Option<Vec<String>> {
        if token.len() < MIN_SEGMENT_LEN || !token.bytes().all(|b| b.is_ascii_lowercase()) {
            return None;
        }

        if let Some(external) = &self.external {
            match external.segment(token).and_then(|pieces| validate_pieces(token, pieces)) {
                Ok(pieces) => return Some(pieces),
                Err(e) => {
                    tracing::debug!("[normalize] {} segmenter fell through: {}", external.name(), e);
                },
            }
        }

        match self.fallback.segment(token) {
            Ok(pieces) => Some(pieces),
            Err(e) => {
                tracing::trace!("[normalize] dictionary kept token as-is: {}", e);
                None
            },
        }
    }
}

impl Default for QueryNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for QueryNormalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryNormalizer")
            .field("external", &self.segmenter_name())
            .field("fallback_words", &self.fallback.len())
            .finish()
    }
}

fn validate_pieces(token: &str, pieces: Vec<String>) -> Result<Vec<String>, SegmentError> {
    let pieces: Vec<String> = pieces
        .into_iter()
        .map(|p| p.trim().to_lowercase())
        .filter(|p| !p.is_empty())
        .collect();

    let accepted = pieces.len() > 1
        && pieces.iter().any(|p| p.chars().count() > 1)
        && pieces.concat() == token;
    if accepted {
        Ok(pieces)
    } else {
        Err(SegmentError::Rejected { token: token.to_string(), pieces })
    }
}

static DEFAULT_NORMALIZER: OnceLock<QueryNormalizer> = OnceLock::new();

fn default_normalizer() -> &'static QueryNormalizer {
    DEFAULT_NORMALIZER.get_or_init(QueryNormalizer::new)
}

/// Normalize with the dictionary fallback only.
pub fn normalize(raw: &str) -> String {
    default_normalizer().normalize(raw)
}

/// [`normalize`] for loosely typed input; non-strings come back unchanged.
pub fn normalize_value(raw: &Value) -> Value {
    default_normalizer().normalize_value(raw)
}
