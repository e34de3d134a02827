use std::collections::HashSet;

use super::{SegmentError, Segmenter};

/// Brand and device vocabulary used by the word-break fallback.
pub const BRAND_VOCABULARY: &[&str] = &[
    "iphone", "ipad", "air", "pro", "max", "mini", "plus", "ultra", "s", "note", "galaxy",
    "pixel", "one", "realme", "nokia", "huawei", "sony", "motorola", "asus", "google", "honor",
    "lenovo", "infinix", "tecno", "vivo", "oppo", "xiaomi", "redmi", "samsung", "apple", "reno",
    "xperia", "magic", "flip", "fold", "watch", "smart", "tablet", "wireless", "earbuds",
];

/// Deterministic word-break over a fixed vocabulary.
///
/// Dynamic programming over the token; among all full segmentations the one
/// with the fewest pieces wins, so a vocabulary word is never split further.
#[derive(Debug, Clone)]
pub struct DictionarySegmenter {
    words: HashSet<String>,
    max_word_len: usize,
}

impl DictionarySegmenter {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: HashSet<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        let max_word_len = words.iter().map(|w| w.chars().count()).max().unwrap_or(0);
        Self { words, max_word_len }
    }

    pub fn brand_vocabulary() -> Self {
        Self::new(BRAND_VOCABULARY)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for DictionarySegmenter {
    fn default() -> Self {
        Self::brand_vocabulary()
    }
}

impl Segmenter for DictionarySegmenter {
    fn name(&self) -> &'static str {
        "dictionary"
    }

    fn segment(&self, token: &str) -> Result<Vec<String>, SegmentError> {
        // Byte offsets of every char boundary, including the end.
        let bounds: Vec<usize> =
            token.char_indices().map(|(i, _)| i).chain(std::iter::once(token.len())).collect();
        let n = bounds.len() - 1;
        if n == 0 {
            return Err(SegmentError::NoSegmentation { token: token.to_string() });
        }

        // best[i] = (piece count, start of last piece) for the prefix ending at char i
        let mut best: Vec<Option<(usize, usize)>> = vec![None; n + 1];
        best[0] = Some((0, 0));

        for end in 1..=n {
            let start_min = end.saturating_sub(self.max_word_len);
            for start in start_min..end {
                let Some((count, _)) = best[start] else {
                    continue;
                };
                if !self.words.contains(&token[bounds[start]..bounds[end]]) {
                    continue;
                }
                let candidate = count + 1;
                if best[end].map_or(true, |(current, _)| candidate < current) {
                    best[end] = Some((candidate, start));
                }
            }
        }

        if best[n].is_none() {
            return Err(SegmentError::NoSegmentation { token: token.to_string() });
        }

        let mut pieces = Vec::new();
        let mut end = n;
        while end > 0 {
            let Some((_, start)) = best[end] else {
                return Err(SegmentError::NoSegmentation { token: token.to_string() });
            };
            pieces.push(token[bounds[start]..bounds[end]].to_string());
            end = start;
        }
        pieces.reverse();
        Ok(pieces)
    }
}
