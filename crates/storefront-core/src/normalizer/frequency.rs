use std::collections::HashMap;
use std::path::Path;

use super::{SegmentError, Segmenter};

/// Zipf-cost segmenter built from a frequency-ranked word list.
///
/// A word at rank `r` (0-based) in a list of `n` words costs
/// `ln((r + 1) * ln(n))`; the segmentation with the lowest total cost wins.
/// Unknown substrings have infinite cost, so a token without a full
/// segmentation is reported as [`SegmentError::NoSegmentation`].
#[derive(Debug, Clone, Default)]
pub struct FrequencySegmenter {
    costs: HashMap<String, f64>,
    max_word_len: usize,
}

impl FrequencySegmenter {
    /// Build from words ordered most-frequent first. Duplicates keep their best rank.
    pub fn from_ranked_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ranked: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        let ln_n = (ranked.len().max(2) as f64).ln();
        let mut costs = HashMap::with_capacity(ranked.len());
        let mut max_word_len = 0;
        for (rank, word) in ranked.into_iter().enumerate() {
            max_word_len = max_word_len.max(word.chars().count());
            let cost = ((rank as f64 + 1.0) * ln_n).ln();
            costs.entry(word).or_insert(cost);
        }

        Self { costs, max_word_len }
    }

    /// Load a newline-separated word list. Blank lines and `#` comments are skipped.
    pub fn from_file(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_ranked_words(
            content.lines().map(str::trim).filter(|l| !l.is_empty() && !l.starts_with('#')),
        ))
    }

    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }
}

impl Segmenter for FrequencySegmenter {
    fn name(&self) -> &'static str {
        "frequency"
    }

    fn segment(&self, token: &str) -> Result<Vec<String>, SegmentError> {
        if self.costs.is_empty() {
            return Err(SegmentError::Unavailable { message: "word list is empty".to_string() });
        }

        let bounds: Vec<usize> =
            token.char_indices().map(|(i, _)| i).chain(std::iter::once(token.len())).collect();
        let n = bounds.len() - 1;

        // cost[i] = cheapest segmentation of the first i chars, back[i] = start of its last word
        let mut cost = vec![f64::INFINITY; n + 1];
        let mut back = vec![0usize; n + 1];
        cost[0] = 0.0;

        for end in 1..=n {
            for start in end.saturating_sub(self.max_word_len)..end {
                if !cost[start].is_finite() {
                    continue;
                }
                let Some(word_cost) = self.costs.get(&token[bounds[start]..bounds[end]]) else {
                    continue;
                };
                let candidate = cost[start] + word_cost;
                if candidate < cost[end] {
                    cost[end] = candidate;
                    back[end] = start;
                }
            }
        }

        if n == 0 || !cost[n].is_finite() {
            return Err(SegmentError::NoSegmentation { token: token.to_string() });
        }

        let mut pieces = Vec::new();
        let mut end = n;
        while end > 0 {
            let start = back[end];
            pieces.push(token[bounds[start]..bounds[end]].to_string());
            end = start;
        }
        pieces.reverse();
        Ok(pieces)
    }
}
