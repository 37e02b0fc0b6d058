use crate::extract::ExtractResult;
use crate::extract::combinator::extract_while;

/// Match `token` as an exact, case-sensitive prefix of `input`.
///
/// On success the parsed value is the matched slice. On failure `rest` is
/// `input` unchanged.
pub fn extract_token<'a>(input: &'a str, token: &str) -> ExtractResult<'a, &'a str> {
    match input.strip_prefix(token) {
        Some(rest) => ExtractResult::ok(&input[..token.len()], rest),
        None => ExtractResult::fail(input),
    }
}

/// Consume the maximal run of ASCII digits at the start of `input`.
///
/// Fails when the run is empty or does not fit in a `u64`. In both cases
/// `rest` is `input` unchanged.
pub fn extract_number(input: &str) -> ExtractResult<'_, u64> {
    let ExtractResult { parsed, rest } = extract_while(input, extract_digit);
    let digits = parsed.unwrap_or_default();
    if digits.is_empty() {
        return ExtractResult::fail(input);
    }

    let value = digits
        .iter()
        .try_fold(0u64, |acc, &digit| acc.checked_mul(10)?.checked_add(digit));

    match value {
        Some(value) => ExtractResult::ok(value, rest),
        None => ExtractResult::fail(input),
    }
}

fn extract_digit(input: &str) -> ExtractResult<'_, u64> {
    match input.as_bytes().first().copied() {
        Some(byte @ b'0'..=b'9') => ExtractResult::ok(u64::from(byte - b'0'), &input[1..]),
        _ => ExtractResult::fail(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_matches_prefix() {
        let result = extract_token("mul(2,4)", "mul");
        assert_eq!(result.parsed, Some("mul"));
        assert_eq!(result.rest, "(2,4)");
    }

    #[test]
    fn token_whole_input() {
        let result = extract_token("do()", "do()");
        assert_eq!(result.parsed, Some("do()"));
        assert_eq!(result.rest, "");
    }

    #[test]
    fn token_is_case_sensitive() {
        let result = extract_token("MUL(2,4)", "mul");
        assert_eq!(result.parsed, None);
        assert_eq!(result.rest, "MUL(2,4)");
    }

    #[test]
    fn token_does_not_skip_whitespace() {
        let result = extract_token(" mul", "mul");
        assert!(!result.is_ok());
        assert_eq!(result.rest, " mul");
    }

    #[test]
    fn token_longer_than_input() {
        let result = extract_token("do", "don't");
        assert!(!result.is_ok());
        assert_eq!(result.rest, "do");
    }

    #[test]
    fn number_reads_digit_run() {
        let result = extract_number("123,4");
        assert_eq!(result.parsed, Some(123));
        assert_eq!(result.rest, ",4");
    }

    #[test]
    fn number_at_end_of_input() {
        let result = extract_number("42");
        assert_eq!(result.parsed, Some(42));
        assert_eq!(result.rest, "");
    }

    #[test]
    fn number_zero_is_a_success() {
        let result = extract_number("0)");
        assert_eq!(result.parsed, Some(0));
        assert_eq!(result.rest, ")");
    }

    #[test]
    fn number_keeps_leading_zeros_value() {
        assert_eq!(extract_number("007x").parsed, Some(7));
    }

    #[test]
    fn number_without_digits_fails() {
        let result = extract_number("-5");
        assert_eq!(result.parsed, None);
        assert_eq!(result.rest, "-5");

        let result = extract_number("");
        assert_eq!(result.parsed, None);
        assert_eq!(result.rest, "");
    }

    #[test]
    fn number_ignores_non_ascii_digits() {
        // U+0663 ARABIC-INDIC DIGIT THREE
        let result = extract_number("\u{663}1");
        assert!(!result.is_ok());
        assert_eq!(result.rest, "\u{663}1");
    }

    #[test]
    fn number_overflow_fails_without_consuming() {
        let input = "18446744073709551616)";
        let result = extract_number(input);
        assert_eq!(result.parsed, None);
        assert_eq!(result.rest, input);

        assert_eq!(extract_number("18446744073709551615").parsed, Some(u64::MAX));
    }
}
