//! Forward-only extractors over a string cursor.
//!
//! An extractor is any `Fn(&'a str) -> ExtractResult<'a, T>`. It never mutates
//! shared state: the unconsumed input is always handed back in `rest`, so
//! extractors compose by threading `rest` into the next call.

pub mod combinator;
pub mod primitive;

pub use combinator::{extract_first, extract_until, extract_while};
pub use primitive::{extract_number, extract_token};

/// The outcome of a single extraction attempt.
///
/// `rest` is always a suffix of the input the extractor was given. What it
/// holds on failure depends on the extractor; see each function's docs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractResult<'a, T> {
    pub parsed: Option<T>,
    pub rest: &'a str,
}

impl<'a, T> ExtractResult<'a, T> {
    pub fn ok(parsed: T, rest: &'a str) -> Self {
        ExtractResult {
            parsed: Some(parsed),
            rest,
        }
    }

    pub fn fail(rest: &'a str) -> Self {
        ExtractResult { parsed: None, rest }
    }

    pub fn is_ok(&self) -> bool {
        self.parsed.is_some()
    }

    /// Transform the parsed value, keeping `rest` as is.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ExtractResult<'a, U> {
        ExtractResult {
            parsed: self.parsed.map(f),
            rest: self.rest,
        }
    }
}
