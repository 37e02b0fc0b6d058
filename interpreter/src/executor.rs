use std::io::Write;

use scan::Program;
use scan::instruction::Located;

use crate::error::{DiagnosticError, RuntimeError};
use crate::machine::Machine;

/// Fold a program's instruction stream into its final accumulator.
pub fn execute_program(program: &Program) -> Result<u64, DiagnosticError> {
    run(program, None)
}

/// Like [`execute_program`], but writes one line per step to `output`.
pub fn execute_program_traced(
    program: &Program,
    output: &mut dyn Write,
) -> Result<u64, DiagnosticError> {
    run(program, Some(output))
}

fn run(program: &Program, mut output: Option<&mut dyn Write>) -> Result<u64, DiagnosticError> {
    let mut machine = Machine::new();

    for located in &program.instructions {
        execute_instruction(&mut machine, located, program.source_id)?;

        tracing::debug!(
            instruction = %located.instruction,
            enabled = machine.enabled,
            accumulator = machine.accumulator,
            "step"
        );

        if let Some(out) = output.as_deref_mut() {
            writeln!(
                out,
                "{:>6}..{:<6} {:<20} enabled={:<5} acc={}",
                located.span.start,
                located.span.end,
                located.instruction.to_string(),
                machine.enabled,
                machine.accumulator
            )
            .map_err(|e| DiagnosticError::from(RuntimeError::IoError(e.to_string())))?;
        }
    }

    Ok(machine.accumulator)
}

fn execute_instruction(
    machine: &mut Machine,
    located: &Located,
    source_id: usize,
) -> Result<(), DiagnosticError> {
    // Attach the instruction span so the error can point into the input
    machine
        .step(&located.instruction)
        .map_err(|e| DiagnosticError::at(e, located.span.clone(), source_id))
}
