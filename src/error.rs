//! Error types for loading and reading a simulation run
//!
//! Parse errors are fatal for the whole load: a misaligned row would shift
//! every coordinate behind it, so no partially-filled store is ever handed
//! to the viewer. Store read errors are reported to the caller and left
//! for the frame driver to clamp or skip.

use thiserror::Error;

/// Errors raised while parsing a run file.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("line {line}: data in section '{section}' before the *P header fixed the array shapes")]
    HeaderMissing { line: usize, section: char },

    #[error("line {line}: bad header: {reason}")]
    BadHeader { line: usize, reason: String },

    #[error("line {line}: expected {expected} values in section '{section}', found {found}")]
    TokenCount {
        line: usize,
        section: char,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: section '{section}' already holds n_days = {n_days} rows")]
    ShapeOverflow {
        line: usize,
        section: char,
        n_days: usize,
    },

    #[error("line {line}: bad numeric token '{token}'")]
    Number { line: usize, token: String },

    #[error("no *P section found")]
    NoHeader,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by reads against the trajectory store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{what} index {index} out of range (len {len})")]
    IndexOutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },
}
