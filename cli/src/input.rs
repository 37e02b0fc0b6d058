use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use crate::puzzles::Day;

pub const INPUT_FILE: &str = "input.txt";
pub const DEV_INPUT_FILE: &str = "dev-input.txt";

/// Resolve `<root>/<day>/input.txt`, or `dev-input.txt` when `dev` is set.
pub fn locate(root: &Path, day: Day, dev: bool) -> Result<PathBuf> {
    let dir = root.join(day.name());
    if !dir.is_dir() {
        bail!("{} directory does not exist: {}", day, dir.display());
    }

    let file_name = if dev { DEV_INPUT_FILE } else { INPUT_FILE };
    Ok(dir.join(file_name))
}

pub fn read_input(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("cannot read '{}'", path.display()))
}
