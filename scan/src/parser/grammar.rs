use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::extract::{
    ExtractResult, extract_first, extract_number, extract_token, extract_until, extract_while,
};
use crate::instruction::{Instruction, Located};

/// Which instruction forms are recognised while scanning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Grammar {
    /// Only `mul(a,b)`. Every multiplication counts.
    MulOnly,
    /// `do()`, `don't()` and `mul(a,b)`.
    #[default]
    Conditional,
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grammar::MulOnly => write!(f, "mul-only"),
            Grammar::Conditional => write!(f, "conditional"),
        }
    }
}

impl FromStr for Grammar {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mul-only" => Ok(Grammar::MulOnly),
            "conditional" => Ok(Grammar::Conditional),
            other => Err(format!(
                "unknown grammar '{}' (expected 'mul-only' or 'conditional')",
                other
            )),
        }
    }
}

/// Scan `source` for every instruction `grammar` recognises, skipping noise.
pub fn scan_instructions<'a>(source: &'a str, grammar: Grammar) -> Vec<Located> {
    let locate = |input: &'a str| {
        let start = source.len() - input.len();
        let result = extract_instruction(input, grammar);
        let end = source.len() - result.rest.len();
        result.map(|instruction| Located {
            instruction,
            span: start..end,
        })
    };

    let ExtractResult { parsed, .. } = extract_while(source, |input| {
        let result = extract_until(input, &locate);
        if let Some(located) = &result.parsed {
            tracing::trace!(
                instruction = %located.instruction,
                start = located.span.start,
                end = located.span.end,
                "recognised instruction"
            );
        }
        result
    });

    parsed.unwrap_or_default()
}

/// Extract one instruction at the very start of `input`.
pub fn extract_instruction<'a>(input: &'a str, grammar: Grammar) -> ExtractResult<'a, Instruction> {
    match grammar {
        Grammar::MulOnly => extract_mul(input),
        Grammar::Conditional => {
            let leaves: [&dyn Fn(&'a str) -> ExtractResult<'a, Instruction>; 3] =
                [&extract_do, &extract_dont, &extract_mul];
            extract_first(input, &leaves)
        }
    }
}

fn extract_do(input: &str) -> ExtractResult<'_, Instruction> {
    extract_call(input, "do", Instruction::Do)
}

fn extract_dont(input: &str) -> ExtractResult<'_, Instruction> {
    extract_call(input, "don't", Instruction::Dont)
}

/// `keyword()`. Any partial match rewinds to `input`.
fn extract_call<'a>(
    input: &'a str,
    keyword: &str,
    instruction: Instruction,
) -> ExtractResult<'a, Instruction> {
    let ExtractResult { parsed: Some(_), rest } = extract_token(input, keyword) else {
        return ExtractResult::fail(input);
    };
    let ExtractResult { parsed: Some(_), rest } = extract_token(rest, "()") else {
        return ExtractResult::fail(input);
    };
    ExtractResult::ok(instruction, rest)
}

/// `mul(A,B)`. Any partial match rewinds to `input`.
fn extract_mul(input: &str) -> ExtractResult<'_, Instruction> {
    let ExtractResult { parsed: Some(_), rest } = extract_token(input, "mul") else {
        return ExtractResult::fail(input);
    };
    let ExtractResult { parsed: Some(_), rest } = extract_token(rest, "(") else {
        return ExtractResult::fail(input);
    };
    let ExtractResult { parsed: Some(a), rest } = extract_number(rest) else {
        return ExtractResult::fail(input);
    };
    let ExtractResult { parsed: Some(_), rest } = extract_token(rest, ",") else {
        return ExtractResult::fail(input);
    };
    let ExtractResult { parsed: Some(b), rest } = extract_number(rest) else {
        return ExtractResult::fail(input);
    };
    let ExtractResult { parsed: Some(_), rest } = extract_token(rest, ")") else {
        return ExtractResult::fail(input);
    };
    ExtractResult::ok(Instruction::Mul { a, b }, rest)
}
