pub mod extract;
pub mod instruction;
pub mod parser;

use crate::instruction::Located;

/// A scanned instruction stream.
#[derive(Debug, Clone)]
pub struct Program {
    /// Instructions in order of appearance in the source text.
    pub instructions: Vec<Located>,
    /// The source file ID (for error reporting with codespan-reporting).
    pub source_id: usize,
}

impl Program {
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}
