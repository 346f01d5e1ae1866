use crate::reading::{join_tokens, tokenize_text, Token};
use tracing::warn;

/// One generated stream, immutable once the animation starts.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStream {
    title: String,
    tokens: Vec<Token>,
    total_elapsed: f64,
}

impl TextStream {
    pub fn new(title: impl Into<String>, text: &str, total_elapsed: f64) -> Self {
        Self::from_tokens(title, tokenize_text(text), total_elapsed)
    }

    pub fn from_tokens(title: impl Into<String>, tokens: Vec<Token>, total_elapsed: f64) -> Self {
        let title = title.into();
        let total_elapsed = if total_elapsed.is_finite() && total_elapsed >= 0.0 {
            total_elapsed
        } else {
            warn!(%title, total_elapsed, "unusable elapsed time, revealing immediately");
            0.0
        };

        Self {
            title,
            tokens,
            total_elapsed,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Seconds the generator took for the whole stream.
    pub fn total_elapsed(&self) -> f64 {
        self.total_elapsed
    }

    /// Simulated seconds between consecutive tokens; `None` for an empty stream.
    pub fn per_token_time(&self) -> Option<f64> {
        if self.tokens.is_empty() {
            None
        } else {
            Some(self.total_elapsed / self.tokens.len() as f64)
        }
    }

    /// Simulated time at which token `index` becomes visible.
    pub fn due_time(&self, index: usize) -> Option<f64> {
        if index >= self.tokens.len() {
            return None;
        }
        self.per_token_time().map(|per_token| index as f64 * per_token)
    }

    /// Simulated time at which the last token becomes visible.
    pub fn full_reveal_time(&self) -> f64 {
        self.tokens
            .len()
            .checked_sub(1)
            .and_then(|last| self.due_time(last))
            .unwrap_or(0.0)
    }

    pub fn text(&self) -> String {
        join_tokens(&self.tokens)
    }

    pub fn char_count(&self) -> usize {
        self.tokens.iter().map(|t| t.text.chars().count()).sum()
    }
}
