pub mod day1;
pub mod day2;
pub mod day3;

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use scan::extract::{ExtractResult, extract_number};
use scan::parser::{Grammar, ParseError};

use interpreter::DiagnosticError;

/// A puzzle the runner knows how to solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Day {
    Day1,
    Day2,
    Day3,
}

impl Day {
    pub const ALL: [Day; 3] = [Day::Day1, Day::Day2, Day::Day3];

    /// Directory name under the input root, e.g. `day-3`.
    pub fn name(&self) -> &'static str {
        match self {
            Day::Day1 => "day-1",
            Day::Day2 => "day-2",
            Day::Day3 => "day-3",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Day::Day1 => "distance and similarity between two location lists",
            Day::Day2 => "safe reactor reports, with and without the dampener",
            Day::Day3 => "multiplications scanned out of corrupted memory",
        }
    }

    pub fn solve(
        &self,
        input: &str,
        file_id: usize,
        options: SolveOptions<'_>,
    ) -> Result<u64, PuzzleError> {
        match (self, options.part) {
            (Day::Day1, 1) => day1::total_distance(input, file_id),
            (Day::Day1, 2) => day1::similarity_score(input, file_id),
            (Day::Day2, 1) => day2::count_safe(input, file_id, false),
            (Day::Day2, 2) => day2::count_safe(input, file_id, true),
            (Day::Day3, part @ (1 | 2)) => {
                let grammar = options.grammar.unwrap_or(day3::default_grammar(part));
                day3::solve(input, file_id, grammar, options.trace)
            }
            (day, part) => Err(PuzzleError::UnsupportedPart { day: *day, part }),
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Day {
    type Err = String;

    /// Accepts `day-3` or a bare `3`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number = s.strip_prefix("day-").unwrap_or(s);
        Day::ALL
            .into_iter()
            .find(|day| day.name().strip_prefix("day-") == Some(number))
            .ok_or_else(|| {
                let available: Vec<&str> = Day::ALL.iter().map(Day::name).collect();
                format!(
                    "unknown day '{}' (available days: {})",
                    s,
                    available.join(", ")
                )
            })
    }
}

/// Per-run knobs passed down to a puzzle.
pub struct SolveOptions<'w> {
    pub part: u8,
    /// Overrides the grammar a part would normally use (day-3 only).
    pub grammar: Option<Grammar>,
    /// Step trace sink (day-3 only).
    pub trace: Option<&'w mut dyn Write>,
}

impl SolveOptions<'_> {
    pub fn part(part: u8) -> Self {
        SolveOptions {
            part,
            grammar: None,
            trace: None,
        }
    }
}

#[derive(Debug)]
pub enum PuzzleError {
    Parse(ParseError),
    Runtime(DiagnosticError),
    UnsupportedPart { day: Day, part: u8 },
    /// The answer does not fit in a `u64`.
    Overflow { day: Day },
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PuzzleError::Parse(err) => write!(f, "{}", err),
            PuzzleError::Runtime(err) => write!(f, "{}", err),
            PuzzleError::UnsupportedPart { day, part } => {
                write!(f, "{} has no part {}", day, part)
            }
            PuzzleError::Overflow { day } => write!(f, "{} answer does not fit in a u64", day),
        }
    }
}

impl std::error::Error for PuzzleError {}

impl From<ParseError> for PuzzleError {
    fn from(err: ParseError) -> Self {
        PuzzleError::Parse(err)
    }
}

impl From<DiagnosticError> for PuzzleError {
    fn from(err: DiagnosticError) -> Self {
        PuzzleError::Runtime(err)
    }
}

/// Split `input` into lines of whitespace-separated unsigned integers.
///
/// Every line yields a row, blank lines included. A token that is not a
/// plain digit run is reported with its byte span.
pub fn parse_number_rows(input: &str, file_id: usize) -> Result<Vec<Vec<u64>>, ParseError> {
    let mut rows = Vec::new();
    let mut offset = 0;

    for line in input.split_inclusive('\n') {
        let mut row = Vec::new();
        let mut rest = line.trim_start();

        while !rest.is_empty() {
            let start = offset + (line.len() - rest.len());
            let ExtractResult { parsed, rest: after } = extract_number(rest);
            match parsed {
                Some(value) if after.is_empty() || after.starts_with(char::is_whitespace) => {
                    row.push(value);
                    rest = after.trim_start();
                }
                _ => {
                    let len = rest.find(char::is_whitespace).unwrap_or(rest.len());
                    return Err(ParseError::error(
                        format!("expected a number, found '{}'", &rest[..len]),
                        start..start + len,
                        file_id,
                    ));
                }
            }
        }

        rows.push(row);
        offset += line.len();
    }

    Ok(rows)
}
