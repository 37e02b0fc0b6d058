use std::io::Write;

use scan::Program;
use scan::parser::{Grammar, Parser};

use crate::puzzles::PuzzleError;

/// Part 1 predates the `do()`/`don't()` toggles.
pub fn default_grammar(part: u8) -> Grammar {
    if part == 1 {
        Grammar::MulOnly
    } else {
        Grammar::Conditional
    }
}

pub fn parse(input: &str, file_id: usize, grammar: Grammar) -> Result<Program, PuzzleError> {
    Ok(Parser::new(input.to_string(), file_id)
        .with_grammar(grammar)
        .parse()?)
}

pub fn solve(
    input: &str,
    file_id: usize,
    grammar: Grammar,
    trace: Option<&mut dyn Write>,
) -> Result<u64, PuzzleError> {
    let program = parse(input, file_id, grammar)?;
    let result = match trace {
        Some(output) => interpreter::execute_program_traced(&program, output)?,
        None => interpreter::execute_program(&program)?,
    };
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzles::{Day, SolveOptions};

    const EXAMPLE: &str =
        "xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))";

    #[test]
    fn parts_pick_their_grammar() {
        assert_eq!(Day::Day3.solve(EXAMPLE, 0, SolveOptions::part(1)).unwrap(), 161);
        assert_eq!(Day::Day3.solve(EXAMPLE, 0, SolveOptions::part(2)).unwrap(), 48);
    }

    #[test]
    fn grammar_override() {
        let options = SolveOptions {
            part: 2,
            grammar: Some(Grammar::MulOnly),
            trace: None,
        };
        assert_eq!(Day::Day3.solve(EXAMPLE, 0, options).unwrap(), 161);
    }

    #[test]
    fn trace_is_written() {
        let mut trace = Vec::new();
        let answer = solve(EXAMPLE, 0, Grammar::Conditional, Some(&mut trace)).unwrap();
        assert_eq!(answer, 48);
        assert_eq!(String::from_utf8(trace).unwrap().lines().count(), 6);
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(matches!(
            solve("", 0, Grammar::Conditional, None),
            Err(PuzzleError::Parse(_))
        ));
    }
}
