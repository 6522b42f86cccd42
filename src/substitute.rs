//! Literal placeholder substitution engines.
//! Replacement is plain substring replacement, never expression evaluation:
//! a token like `{ServiceUrl}` is matched byte-for-byte and swapped for its
//! supplied value.

use crate::config::SubstitutionMode;
use crate::error::{ConfitError, ConfitResult};
use crate::placeholders::PlaceholderMap;
use regex::Regex;
use std::cmp::Reverse;

/// Trait for placeholder substitution engines.
pub trait Substituter {
    /// Replaces every placeholder occurrence in `text`.
    ///
    /// # Arguments
    /// * `text` - Destination file content to rewrite
    /// * `placeholders` - Token to value map, in application order
    ///
    /// # Returns
    /// * `ConfitResult<String>` - Rewritten content
    fn substitute(&self, text: &str, placeholders: &PlaceholderMap) -> ConfitResult<String>;
}

/// Chained substitution: one `replace` per token, applied in map order.
///
/// This is the historical scripts' observable behavior. Occurrences of a
/// later token introduced by an earlier value are replaced again when that
/// later token's turn comes.
pub struct SequentialSubstituter;

impl SequentialSubstituter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SequentialSubstituter {
    fn default() -> Self {
        SequentialSubstituter::new()
    }
}

impl Substituter for SequentialSubstituter {
    fn substitute(&self, text: &str, placeholders: &PlaceholderMap) -> ConfitResult<String> {
        let mut result = text.to_string();
        for (token, value) in placeholders {
            result = result.replace(token.as_str(), value);
        }
        Ok(result)
    }
}

/// Single-pass substitution: one left-to-right scan matching any token, with
/// the longest token preferred where tokens overlap. Emitted values are
/// never rescanned, so a value containing another token's literal text
/// passes through untouched.
pub struct SimultaneousSubstituter;

impl SimultaneousSubstituter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SimultaneousSubstituter {
    fn default() -> Self {
        SimultaneousSubstituter::new()
    }
}

impl Substituter for SimultaneousSubstituter {
    fn substitute(&self, text: &str, placeholders: &PlaceholderMap) -> ConfitResult<String> {
        if placeholders.is_empty() {
            return Ok(text.to_string());
        }

        let mut tokens: Vec<&str> = placeholders.keys().map(String::as_str).collect();
        tokens.sort_by_key(|token| Reverse(token.len()));

        let pattern =
            tokens.iter().map(|token| regex::escape(token)).collect::<Vec<_>>().join("|");
        let matcher = Regex::new(&pattern)
            .map_err(|e| ConfitError::ConfigError(format!("substitution pattern: {}", e)))?;

        let replaced = matcher.replace_all(text, |caps: &regex::Captures| {
            let token = caps.get(0).map_or("", |m| m.as_str());
            placeholders.get(token).cloned().unwrap_or_else(|| token.to_string())
        });

        Ok(replaced.into_owned())
    }
}

/// Returns the substitution engine for a template set's configured mode.
pub fn substituter_for(mode: SubstitutionMode) -> Box<dyn Substituter> {
    match mode {
        SubstitutionMode::Sequential => Box::new(SequentialSubstituter::new()),
        SubstitutionMode::Simultaneous => Box::new(SimultaneousSubstituter::new()),
    }
}
