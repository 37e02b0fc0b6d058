use std::collections::HashMap;

use crate::puzzles::{Day, PuzzleError, parse_number_rows};

/// The two location lists. Lines without exactly two numbers are skipped.
fn location_lists(input: &str, file_id: usize) -> Result<(Vec<u64>, Vec<u64>), PuzzleError> {
    let (left, right) = parse_number_rows(input, file_id)?
        .into_iter()
        .filter_map(|row| match row[..] {
            [a, b] => Some((a, b)),
            _ => None,
        })
        .unzip();
    Ok((left, right))
}

/// Pair both lists smallest-to-smallest and sum the distances.
pub fn total_distance(input: &str, file_id: usize) -> Result<u64, PuzzleError> {
    let (mut left, mut right) = location_lists(input, file_id)?;
    left.sort_unstable();
    right.sort_unstable();

    left.iter()
        .zip(&right)
        .try_fold(0u64, |total, (a, b)| total.checked_add(a.abs_diff(*b)))
        .ok_or(PuzzleError::Overflow { day: Day::Day1 })
}

/// Sum of each left value times how often it appears on the right.
pub fn similarity_score(input: &str, file_id: usize) -> Result<u64, PuzzleError> {
    let (left, right) = location_lists(input, file_id)?;

    let mut counts: HashMap<u64, u64> = HashMap::new();
    for value in right {
        *counts.entry(value).or_default() += 1;
    }

    left.iter()
        .try_fold(0u64, |total, value| {
            let count = counts.get(value).copied().unwrap_or(0);
            total.checked_add(value.checked_mul(count)?)
        })
        .ok_or(PuzzleError::Overflow { day: Day::Day1 })
}
