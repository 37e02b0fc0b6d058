use scan::instruction::Instruction;

use crate::error::RuntimeError;

/// Interpreter state: the enable flag and the running sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Machine {
    pub enabled: bool,
    pub accumulator: u64,
}

impl Default for Machine {
    fn default() -> Self {
        Machine {
            enabled: true,
            accumulator: 0,
        }
    }
}

impl Machine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a single instruction.
    pub fn step(&mut self, instruction: &Instruction) -> Result<(), RuntimeError> {
        match *instruction {
            Instruction::Do => self.enabled = true,
            Instruction::Dont => self.enabled = false,
            Instruction::Mul { a, b } => {
                if self.enabled {
                    self.accumulator = a
                        .checked_mul(b)
                        .and_then(|product| self.accumulator.checked_add(product))
                        .ok_or(RuntimeError::Overflow {
                            instruction: *instruction,
                            accumulator: self.accumulator,
                        })?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_enabled_and_empty() {
        let machine = Machine::new();
        assert!(machine.enabled);
        assert_eq!(machine.accumulator, 0);
    }

    #[test]
    fn toggles_gate_multiplication() {
        let mut machine = Machine::new();
        machine.step(&Instruction::Mul { a: 2, b: 4 }).unwrap();
        machine.step(&Instruction::Dont).unwrap();
        machine.step(&Instruction::Mul { a: 5, b: 5 }).unwrap();
        assert!(!machine.enabled);
        assert_eq!(machine.accumulator, 8);
        machine.step(&Instruction::Do).unwrap();
        machine.step(&Instruction::Mul { a: 8, b: 5 }).unwrap();
        assert_eq!(machine.accumulator, 48);
    }

    #[test]
    fn repeated_toggles_are_idempotent() {
        let mut machine = Machine::new();
        machine.step(&Instruction::Do).unwrap();
        machine.step(&Instruction::Do).unwrap();
        assert!(machine.enabled);
        machine.step(&Instruction::Dont).unwrap();
        machine.step(&Instruction::Dont).unwrap();
        assert!(!machine.enabled);
    }

    #[test]
    fn product_overflow_is_an_error() {
        let mut machine = Machine::new();
        let err = machine
            .step(&Instruction::Mul { a: u64::MAX, b: 2 })
            .unwrap_err();
        assert!(matches!(err, RuntimeError::Overflow { accumulator: 0, .. }));
        assert_eq!(machine.accumulator, 0);
    }

    #[test]
    fn accumulator_overflow_is_an_error() {
        let mut machine = Machine {
            enabled: true,
            accumulator: u64::MAX,
        };
        assert!(machine.step(&Instruction::Mul { a: 1, b: 1 }).is_err());
    }

    #[test]
    fn disabled_overflow_is_ignored() {
        let mut machine = Machine {
            enabled: false,
            accumulator: u64::MAX,
        };
        machine.step(&Instruction::Mul { a: u64::MAX, b: u64::MAX }).unwrap();
        assert_eq!(machine.accumulator, u64::MAX);
    }
}
