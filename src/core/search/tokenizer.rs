//! Query tokenizer.
//!
//! Lowercases and splits on whitespace. No stemming and no stop words:
//! tokens are matched as substrings downstream, so normalization stays
//! minimal.

/// Whitespace tokenizer with an optional minimum token length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tokenizer {
    min_token_chars: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self { min_token_chars: 1 }
    }
}

impl Tokenizer {
    /// Create a tokenizer that drops tokens shorter than `min_token_chars`
    /// characters. A minimum of 0 is treated as 1.
    pub fn new(min_token_chars: usize) -> Self {
        Self {
            min_token_chars: min_token_chars.max(1),
        }
    }

    pub fn min_token_chars(&self) -> usize {
        self.min_token_chars
    }

    /// Split `text` into lowercase, non-empty tokens.
    ///
    /// Empty or whitespace-only input yields no tokens.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace()
            .filter(|word| word.chars().count() >= self.min_token_chars)
            .map(str::to_lowercase)
            .collect()
    }
}

/// Tokenize with the default tokenizer (every non-empty word is kept)
pub fn tokenize(query: &str) -> Vec<String> {
    Tokenizer::default().tokenize(query)
}
