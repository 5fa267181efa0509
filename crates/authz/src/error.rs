//! Error taxonomy.
//!
//! Every failure here is configuration-time: rule construction and policy
//! document loading. Evaluation itself is total and never errors.

use thiserror::Error;

/// Result type for rule construction.
pub type RuleResult<T> = Result<T, RuleError>;

/// A textual rule specification that cannot become a [`crate::Rule`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// Action token is neither `allow` nor `deny`. Carries the raw value.
    #[error("invalid rule action: {0:?} (expected \"allow\" or \"deny\")")]
    InvalidAction(String),

    /// Verb token is not empty, `get`, or `post`. Carries the raw value.
    #[error("invalid rule verb: {0:?} (expected \"\", \"get\", or \"post\")")]
    InvalidVerb(String),
}

/// A policy document that cannot become a [`crate::RuleSet`].
#[derive(Debug, Error)]
pub enum PolicyError {
    /// The document is not well-formed (wrong shape, non-object rule entry).
    #[error("malformed policy document: {0}")]
    Parse(#[from] serde_json::Error),

    /// An entry parsed as data but its tokens are not a valid rule.
    #[error("invalid rule in policy document: {0}")]
    Rule(#[from] RuleError),
}
