use std::path::{Path, PathBuf};

use serde::Deserialize;

use scan::parser::Grammar;

use crate::puzzles::{Day, SolveOptions};

const FIXTURE_SUFFIX: &str = ".test.txt";

#[derive(Debug, Deserialize)]
pub struct FixtureConfig {
    /// Human-readable fixture description.
    #[serde(default)]
    pub description: Option<String>,

    /// Day to solve, e.g. "day-3" or "3".
    pub day: String,

    /// Puzzle part. Defaults to 1.
    #[serde(default = "default_part")]
    pub part: u8,

    /// Grammar override (day-3 only).
    #[serde(default)]
    pub grammar: Option<Grammar>,

    /// Expected answer.
    #[serde(default)]
    pub expect_answer: Option<u64>,

    /// Expected failure: the error's Display string must contain this substring.
    #[serde(default)]
    pub expect_error: Option<String>,
}

fn default_part() -> u8 {
    1
}

/// Split a `.test.txt` file into its TOML config and the puzzle input.
fn parse_fixture_file(content: &str) -> Result<(FixtureConfig, &str), String> {
    let content = content.trim_start_matches('\u{feff}'); // strip BOM

    if !content.starts_with("---") {
        return Err("missing opening --- frontmatter delimiter".into());
    }

    let after_open = &content[3..];
    let after_open = after_open
        .strip_prefix('\n')
        .or_else(|| after_open.strip_prefix("\r\n"))
        .unwrap_or(after_open);

    let close_pos = after_open
        .find("\n---")
        .ok_or("missing closing --- frontmatter delimiter")?;

    let toml_str = after_open[..close_pos].trim_end_matches('\r');
    let rest_start = close_pos + 4; // skip \n---
    let input = after_open[rest_start..]
        .strip_prefix("\r\n")
        .or_else(|| after_open[rest_start..].strip_prefix('\n'))
        .unwrap_or(&after_open[rest_start..]);

    let config: FixtureConfig =
        toml::from_str(toml_str).map_err(|e| format!("TOML parse error: {}", e))?;

    Ok((config, input))
}

pub enum TestOutcome {
    Pass,
    Fail(String),
    /// Filtered out by `--day`.
    Skipped,
}

pub struct TestResult {
    pub path: PathBuf,
    pub description: Option<String>,
    pub outcome: TestOutcome,
}

fn run_single_test(path: &Path, days: &[Day]) -> TestResult {
    let fail = |description: Option<String>, reason: String| TestResult {
        path: path.to_path_buf(),
        description,
        outcome: TestOutcome::Fail(reason),
    };

    // 1. Read file
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => return fail(None, format!("cannot read file: {}", e)),
    };

    // 2. Parse frontmatter
    let (config, input) = match parse_fixture_file(&content) {
        Ok(pair) => pair,
        Err(e) => return fail(None, format!("frontmatter error: {}", e)),
    };

    let description = config.description.clone();

    let day = match config.day.parse::<Day>() {
        Ok(day) => day,
        Err(e) => return fail(description, e),
    };

    if !days.is_empty() && !days.contains(&day) {
        return TestResult {
            path: path.to_path_buf(),
            description,
            outcome: TestOutcome::Skipped,
        };
    }

    // 3. Solve
    let options = SolveOptions {
        part: config.part,
        grammar: config.grammar,
        trace: None,
    };
    let result = day.solve(input, 0, options);

    // 4. Check expectations
    let reason = match (&config.expect_error, config.expect_answer, result) {
        (Some(expected_err), _, Err(err)) => {
            let err_str = err.to_string();
            if err_str.contains(expected_err.as_str()) {
                None
            } else {
                Some(format!(
                    "expected error containing \"{}\", got: {}",
                    expected_err, err_str
                ))
            }
        }
        (Some(expected_err), _, Ok(answer)) => Some(format!(
            "expected error containing \"{}\", but got answer {}",
            expected_err, answer
        )),
        (None, _, Err(err)) => Some(format!("unexpected error: {}", err)),
        (None, Some(expected), Ok(answer)) => {
            if answer == expected {
                None
            } else {
                Some(format!(
                    "answer mismatch\n  expected: {}\n  actual:   {}",
                    expected, answer
                ))
            }
        }
        (None, None, Ok(_)) => None,
    };

    match reason {
        Some(reason) => fail(description, reason),
        None => TestResult {
            path: path.to_path_buf(),
            description,
            outcome: TestOutcome::Pass,
        },
    }
}

/// Discover fixture files under `root`, sorted by path.
fn discover(root: &Path) -> Vec<PathBuf> {
    let mut found = Vec::new();
    collect_fixtures(root, &mut found);
    found.sort();
    found
}

fn collect_fixtures(dir: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_fixtures(&path, out);
        } else if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if name.ends_with(FIXTURE_SUFFIX) {
                out.push(path);
            }
        }
    }
}

fn pass_label(no_color: bool) -> &'static str {
    if no_color { "PASS" } else { "\x1b[32mPASS\x1b[0m" }
}

fn fail_label(no_color: bool) -> &'static str {
    if no_color { "FAIL" } else { "\x1b[31mFAIL\x1b[0m" }
}

/// Run all fixture files under `path` (or a single file).
/// If `days` is non-empty, fixtures for other days are skipped.
/// Returns exit code: 0 = all pass, 1 = any failure or nothing ran.
pub fn run_tests(path: &Path, no_color: bool, days: &[Day]) -> i32 {
    let files = if path.is_file() {
        vec![path.to_path_buf()]
    } else {
        discover(path)
    };

    if files.is_empty() {
        eprintln!("no {} files found in {}", FIXTURE_SUFFIX, path.display());
        return 1;
    }

    let mut passed = 0usize;
    let mut failures: Vec<TestResult> = Vec::new();

    for file in &files {
        let result = run_single_test(file, days);
        let label = result.description.as_deref().unwrap_or_else(|| {
            file.file_name()
                .and_then(|s| s.to_str())
                .and_then(|s| s.strip_suffix(FIXTURE_SUFFIX))
                .unwrap_or("?")
        });

        match &result.outcome {
            TestOutcome::Pass => {
                passed += 1;
                eprintln!("  {}  {}", pass_label(no_color), label);
            }
            TestOutcome::Fail(_) => {
                eprintln!("  {}  {}", fail_label(no_color), label);
                failures.push(result);
            }
            TestOutcome::Skipped => {}
        }
    }

    // Print failure details
    if !failures.is_empty() {
        eprintln!();
        eprintln!("failures:");
        for f in &failures {
            eprintln!();
            eprintln!("  --- {} ---", f.path.display());
            if let TestOutcome::Fail(reason) = &f.outcome {
                for line in reason.lines() {
                    eprintln!("  {}", line);
                }
            }
        }
    }

    // Summary
    let failed = failures.len();
    eprintln!();
    if failed == 0 && passed > 0 {
        if no_color {
            eprintln!("test result: ok. {} passed, 0 failed", passed);
        } else {
            eprintln!("test result: \x1b[32mok\x1b[0m. {} passed, 0 failed", passed);
        }
        0
    } else if failed == 0 {
        eprintln!("no fixtures matched the requested days");
        1
    } else {
        let total = passed + failed;
        if no_color {
            eprintln!(
                "test result: FAILED. {} passed, {} failed (of {})",
                passed, failed, total
            );
        } else {
            eprintln!(
                "test result: \x1b[31mFAILED\x1b[0m. {} passed, {} failed (of {})",
                passed, failed, total
            );
        }
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_fixture(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn splits_frontmatter_and_input() {
        let (config, input) =
            parse_fixture_file("---\nday = \"day-3\"\npart = 2\n---\nmul(2,3)\n").unwrap();
        assert_eq!(config.day, "day-3");
        assert_eq!(config.part, 2);
        assert_eq!(config.grammar, None);
        assert_eq!(input, "mul(2,3)\n");
    }

    #[test]
    fn parses_grammar_override() {
        let (config, _) =
            parse_fixture_file("---\nday = \"3\"\ngrammar = \"mul-only\"\n---\n").unwrap();
        assert_eq!(config.grammar, Some(Grammar::MulOnly));
        assert_eq!(config.part, 1);
    }

    #[test]
    fn rejects_missing_delimiters() {
        assert!(parse_fixture_file("day = \"day-1\"").is_err());
        assert!(parse_fixture_file("---\nday = \"day-1\"\n").is_err());
    }

    #[test]
    fn passing_and_failing_fixtures() {
        let dir = tempfile::tempdir().unwrap();
        let good = write_fixture(
            dir.path(),
            "good.test.txt",
            "---\nday = \"day-3\"\nexpect_answer = 6\n---\nmul(2,3)",
        );
        let bad = write_fixture(
            dir.path(),
            "bad.test.txt",
            "---\nday = \"day-3\"\nexpect_answer = 7\n---\nmul(2,3)",
        );
        let error = write_fixture(
            dir.path(),
            "error.test.txt",
            "---\nday = \"day-3\"\nexpect_error = \"no recognizable instructions\"\n---\nnoise",
        );

        assert!(matches!(run_single_test(&good, &[]).outcome, TestOutcome::Pass));
        assert!(matches!(run_single_test(&bad, &[]).outcome, TestOutcome::Fail(_)));
        assert!(matches!(run_single_test(&error, &[]).outcome, TestOutcome::Pass));
        assert!(matches!(
            run_single_test(&good, &[Day::Day1]).outcome,
            TestOutcome::Skipped
        ));

        assert_eq!(run_tests(dir.path(), true, &[]), 1);
        std::fs::remove_file(bad).unwrap();
        assert_eq!(run_tests(dir.path(), true, &[]), 0);
        assert_eq!(run_tests(dir.path(), true, &[Day::Day2]), 1);
    }

    #[test]
    fn bundled_fixtures_pass() {
        let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("../fixtures");
        assert_eq!(run_tests(&fixtures, true, &[]), 0);
    }
}
