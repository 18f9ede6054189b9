use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dicom::object::open_file;

use crate::dump;
use crate::error::ManagerError;

/// Load a single file and print its full dataset dump to stdout.
pub fn print_file(path: &Path) -> Result<()> {
    let obj = open_file(path)
        .with_context(|| format!("failed to load DICOM file {}", path.display()))?;

    println!("{}", "=".repeat(80));
    println!("Dataset: {}", path.display());
    println!();
    print!("{}", dump::render_dataset(&obj));
    Ok(())
}

/// Resolve a 1-based menu choice against the listed options. Non-numeric,
/// zero, or out-of-range input is an `InvalidSelection`; reading the input
/// itself stays in the CLI layer.
pub fn select<'a>(options: &'a [PathBuf], input: &str) -> Result<&'a Path, ManagerError> {
    let trimmed = input.trim();
    let invalid = || ManagerError::InvalidSelection {
        input: trimmed.to_string(),
        max: options.len(),
    };

    let choice: usize = trimmed.parse().map_err(|_| invalid())?;
    if choice == 0 || choice > options.len() {
        return Err(invalid());
    }
    Ok(&options[choice - 1])
}
