use std::fmt;
use std::ops::Range;

use scan::instruction::Instruction;

#[derive(Debug)]
pub enum RuntimeError {
    /// `a * b`, or adding it to the accumulator, does not fit in a `u64`.
    Overflow { instruction: Instruction, accumulator: u64 },
    IoError(String),
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeError::Overflow {
                instruction,
                accumulator,
            } => write!(
                f,
                "arithmetic overflow: {} with accumulator {}",
                instruction, accumulator
            ),
            RuntimeError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for RuntimeError {}

/// A runtime error enriched with source location information.
#[derive(Debug)]
pub struct DiagnosticError {
    pub error: RuntimeError,
    pub span: Option<Range<usize>>,
    pub source_id: usize,
}

impl DiagnosticError {
    pub fn at(error: RuntimeError, span: Range<usize>, source_id: usize) -> Self {
        DiagnosticError {
            error,
            span: Some(span),
            source_id,
        }
    }
}

impl From<RuntimeError> for DiagnosticError {
    fn from(error: RuntimeError) -> Self {
        DiagnosticError {
            error,
            span: None,
            source_id: 0,
        }
    }
}

impl fmt::Display for DiagnosticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.error.fmt(f)
    }
}

impl std::error::Error for DiagnosticError {}
