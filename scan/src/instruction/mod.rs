use std::fmt;
use std::ops::Range;

/// A single instruction recognised in scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// `do()`: enable subsequent multiplications.
    Do,
    /// `don't()`: disable subsequent multiplications.
    Dont,
    /// `mul(a,b)`
    Mul { a: u64, b: u64 },
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Do => write!(f, "do()"),
            Instruction::Dont => write!(f, "don't()"),
            Instruction::Mul { a, b } => write!(f, "mul({},{})", a, b),
        }
    }
}

/// An instruction together with the byte span it was matched at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Located {
    pub instruction: Instruction,
    pub span: Range<usize>,
}
