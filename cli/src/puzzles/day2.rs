use crate::puzzles::{PuzzleError, parse_number_rows};

const MAX_LEVEL_STEP: u64 = 3;

/// Count safe reports, one report per line.
///
/// With `dampened`, a report also counts when dropping any single level
/// makes it safe.
pub fn count_safe(input: &str, file_id: usize, dampened: bool) -> Result<u64, PuzzleError> {
    let reports = parse_number_rows(input.trim_end(), file_id)?;
    let safe = reports
        .iter()
        .filter(|report| {
            if dampened {
                is_safe_dampened(report)
            } else {
                is_safe(report)
            }
        })
        .count();
    Ok(safe as u64)
}

/// Strictly monotonic, with every step between 1 and 3.
pub fn is_safe(report: &[u64]) -> bool {
    match report {
        [] => false,
        [_] => true,
        [first, second, ..] => {
            let direction = second.cmp(first);
            if direction.is_eq() {
                return false;
            }
            report.windows(2).all(|pair| {
                pair[1].cmp(&pair[0]) == direction && pair[0].abs_diff(pair[1]) <= MAX_LEVEL_STEP
            })
        }
    }
}

/// Safe as is, or after removing exactly one level.
pub fn is_safe_dampened(report: &[u64]) -> bool {
    is_safe(report)
        || (0..report.len()).any(|skip| {
            let reduced: Vec<u64> = report
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != skip)
                .map(|(_, level)| *level)
                .collect();
            is_safe(&reduced)
        })
}
