//! Error types for the CCNL earnings engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The calculation core never fails on malformed *data* — malformed times,
//! intervention lists and policy selections all degrade to documented
//! defaults. Errors exist only at the decode boundary.

use thiserror::Error;

/// The main error type for the earnings engine.
///
/// # Example
///
/// ```
/// use ccnl_engine::error::EngineError;
///
/// let error = EngineError::MissingDate { index: 3 };
/// assert_eq!(
///     error.to_string(),
///     "work record at position 3 has no date and cannot be placed in a period"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A decoded work record carried no date. Aggregation cannot place a
    /// dateless record in a period, so this is the one data condition
    /// surfaced as a hard failure.
    #[error("work record at position {index} has no date and cannot be placed in a period")]
    MissingDate {
        /// Position of the offending record in the decoded list.
        index: usize,
    },

    /// A configuration document could not be parsed at all.
    ///
    /// Individual missing fields never produce this error — they take
    /// their documented defaults. Only a structurally unreadable document
    /// does.
    #[error("failed to parse configuration document: {message}")]
    ConfigParse {
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return [`EngineError`].
pub type EngineResult<T> = Result<T, EngineError>;
