//! Package list loading.
//!
//! The package list is a plain UTF-8 text file with one package identifier
//! per line. Blank lines are skipped; surrounding whitespace is trimmed.
//! Identifiers are otherwise passed through untouched (no case folding, no
//! comment syntax).

use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Load package identifiers from the list file, preserving order.
pub fn load_packages(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read package list `{}`", path.display()))?;
    Ok(parse_packages(&content))
}

fn parse_packages(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
