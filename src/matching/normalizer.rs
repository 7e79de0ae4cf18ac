//! Deterministic text cleaning and tokenization

use crate::matching::lexicon::{INFLECTIONS, STOP_WORDS};
use regex::Regex;
use std::collections::{HashMap, HashSet};

/// Normalizes raw text into a cleaned, space-joined token string.
///
/// The pipeline is fixed: noise stripping, punctuation removal, whitespace
/// collapse + lowercasing, word tokenization, stop-word removal, inflection
/// mapping. It is a total function: any input, including the empty string,
/// yields a (possibly empty) string and never an error.
pub struct TextNormalizer {
    noise_regex: Regex,
    punct_regex: Regex,
    whitespace_regex: Regex,
    word_regex: Regex,
    stop_words: HashSet<&'static str>,
    inflections: HashMap<&'static str, &'static str>,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextNormalizer {
    pub fn new() -> Self {
        // URLs, standalone RT/cc markers, hashtags, mentions, non-ASCII bytes
        let noise_regex = Regex::new(r"http\S+|\bRT\b|\bcc\b|#\S+|@\S+|[^\x00-\x7f]")
            .expect("Invalid noise regex");

        let punct_regex = Regex::new(r##"[!"#$%&'()*+,\-./:;<=>?@\[\\\]^_`{|}~]"##)
            .expect("Invalid punctuation regex");

        let whitespace_regex = Regex::new(r"\s+").expect("Invalid whitespace regex");

        let word_regex = Regex::new(r"[A-Za-z0-9_]+").expect("Invalid word regex");

        Self {
            noise_regex,
            punct_regex,
            whitespace_regex,
            word_regex,
            stop_words: STOP_WORDS.iter().copied().collect(),
            inflections: INFLECTIONS.iter().copied().collect(),
        }
    }

    /// Normalize raw text into a space-joined token string.
    pub fn normalize(&self, raw: &str) -> String {
        self.tokenize(raw).join(" ")
    }

    /// Normalize raw text into the surviving token sequence.
    pub fn tokenize(&self, raw: &str) -> Vec<String> {
        let cleaned = self.clean_text(raw);

        self.word_regex
            .find_iter(&cleaned)
            .map(|m| m.as_str())
            .filter(|token| !self.stop_words.contains(token))
            .map(|token| self.inflections.get(token).copied().unwrap_or(token))
            .map(str::to_string)
            .collect()
    }

    /// Character-level cleanup: noise and punctuation to spaces, whitespace
    /// collapsed, lowercased. Token filtering happens in `tokenize`.
    fn clean_text(&self, raw: &str) -> String {
        let cleaned = self.noise_regex.replace_all(raw, " ");
        let cleaned = self.punct_regex.replace_all(&cleaned, " ");
        self.whitespace_regex
            .replace_all(&cleaned, " ")
            .trim()
            .to_lowercase()
    }
}
