//! Search term validation.
//!
//! A term is one or more words made of `[A-Za-z0-9_]`, separated by
//! whitespace. Nothing else reaches the network.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use thiserror::Error;

static TERM_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_]+(?:\s+[A-Za-z0-9_]+)*$").expect("term pattern is a valid regex")
});

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidTermError {
    #[error("Search term is empty")]
    Empty,

    #[error("Search term contains illegal characters: {0}")]
    IllegalCharacters(String),
}

/// A term that passed [`validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidTerm(String);

impl ValidTerm {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ValidTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn validate(term: &str) -> Result<ValidTerm, InvalidTermError> {
    if term.trim().is_empty() {
        return Err(InvalidTermError::Empty);
    }
    if !TERM_PATTERN.is_match(term) {
        return Err(InvalidTermError::IllegalCharacters(term.to_string()));
    }
    Ok(ValidTerm(term.to_string()))
}
