pub mod error;
pub mod grammar;

pub use error::ParseError;
pub use grammar::Grammar;

use crate::Program;

/// Parser entry point.
pub struct Parser {
    source: String,
    file_id: usize,
    grammar: Grammar,
}

impl Parser {
    pub fn new(source: String, file_id: usize) -> Self {
        Parser {
            source,
            file_id,
            grammar: Grammar::default(),
        }
    }

    pub fn with_grammar(mut self, grammar: Grammar) -> Self {
        self.grammar = grammar;
        self
    }

    /// Scan the whole source into a Program.
    ///
    /// Finding no instruction at all is an error, not an empty program.
    pub fn parse(&self) -> Result<Program, ParseError> {
        let instructions = grammar::scan_instructions(&self.source, self.grammar);

        if instructions.is_empty() {
            return Err(ParseError::error(
                "no recognizable instructions in input",
                0..self.source.len(),
                self.file_id,
            )
            .with_note(format!(
                "scanned {} bytes with the {} grammar",
                self.source.len(),
                self.grammar
            )));
        }

        tracing::debug!(
            count = instructions.len(),
            grammar = %self.grammar,
            "scanned instruction stream"
        );

        Ok(Program {
            instructions,
            source_id: self.file_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruction::Instruction;

    #[test]
    fn parse_defaults_to_conditional_grammar() {
        let program = Parser::new("do()mul(1,1)".to_string(), 3).parse().unwrap();
        assert_eq!(program.source_id, 3);
        assert_eq!(program.instructions[0].instruction, Instruction::Do);
        assert_eq!(program.len(), 2);
    }

    #[test]
    fn parse_with_mul_only_grammar() {
        let program = Parser::new("do()mul(1,1)".to_string(), 0)
            .with_grammar(Grammar::MulOnly)
            .parse()
            .unwrap();
        assert_eq!(program.len(), 1);
    }

    #[test]
    fn empty_input_is_exhaustion_error() {
        let err = Parser::new(String::new(), 0).parse().unwrap_err();
        assert_eq!(err.message, "no recognizable instructions in input");
        assert_eq!(err.span, 0..0);
    }

    #[test]
    fn noise_only_is_exhaustion_error() {
        let err = Parser::new("mul(1,2".to_string(), 7).parse().unwrap_err();
        assert_eq!(err.span, 0..7);
        assert_eq!(err.file_id, 7);
        assert!(err.notes[0].contains("conditional"));
    }

    #[test]
    fn toggles_alone_fail_under_mul_only() {
        let err = Parser::new("do()don't()".to_string(), 0)
            .with_grammar(Grammar::MulOnly)
            .parse()
            .unwrap_err();
        assert!(err.notes[0].contains("mul-only"));
    }
}
