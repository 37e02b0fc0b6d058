use crate::extract::ExtractResult;

/// Try each extractor against the same `input`, in order, and return the
/// first success verbatim.
///
/// List order is the only tie-break. If every extractor fails, `rest` is
/// `input` unchanged.
pub fn extract_first<'a, T>(
    input: &'a str,
    extractors: &[&dyn Fn(&'a str) -> ExtractResult<'a, T>],
) -> ExtractResult<'a, T> {
    extractors
        .iter()
        .map(|extractor| extractor(input))
        .find(ExtractResult::is_ok)
        .unwrap_or_else(|| ExtractResult::fail(input))
}

/// Apply `extractor` repeatedly, collecting successes until the first
/// failure.
///
/// Always succeeds, possibly with an empty vector. `rest` is the remainder
/// reported by the failing call, not the last success. Every success must
/// consume input, otherwise this never terminates.
pub fn extract_while<'a, T, F>(input: &'a str, extractor: F) -> ExtractResult<'a, Vec<T>>
where
    F: Fn(&'a str) -> ExtractResult<'a, T>,
{
    let mut parsed = Vec::new();
    let mut position = input;
    let mut result = extractor(position);

    while let Some(value) = result.parsed {
        debug_assert!(
            result.rest.len() < position.len(),
            "extract_while: extractor succeeded without consuming input"
        );
        parsed.push(value);
        position = result.rest;
        result = extractor(position);
    }

    ExtractResult::ok(parsed, result.rest)
}

/// Scan forward one character at a time until `extractor` succeeds.
///
/// Skipped characters are discarded. When the end of input is reached
/// without a match the result fails with an empty `rest`.
pub fn extract_until<'a, T, F>(input: &'a str, extractor: F) -> ExtractResult<'a, T>
where
    F: Fn(&'a str) -> ExtractResult<'a, T>,
{
    let mut position = input;
    loop {
        let result = extractor(position);
        if result.is_ok() {
            return result;
        }

        let mut chars = position.chars();
        if chars.next().is_none() {
            return ExtractResult::fail(position);
        }
        position = chars.as_str();
    }
}
