use std::path::Path;
use std::process::Command;

use anyhow::{bail, Context, Result};
use tracing::debug;

use crate::locate;

/// External index generator from DCMTK, run with the target directory as its
/// working directory.
const DCMMKDIR: &str = "dcmmkdir";

/// What happened to the index, so the CLI can report it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexOutcome {
    Created,
    Declined,
}

/// Regenerate the DICOMDIR under `root`. When an index already exists,
/// `confirm_overwrite` is consulted first; on decline nothing is spawned.
/// The confirmation closure keeps prompting at the CLI boundary.
pub fn create_dicomdir(
    root: &Path,
    confirm_overwrite: impl FnOnce() -> bool,
) -> Result<IndexOutcome> {
    if locate::find_dicomdir(root).is_some() && !confirm_overwrite() {
        return Ok(IndexOutcome::Declined);
    }

    debug!("running {} +r in {}", DCMMKDIR, root.display());
    let status = Command::new(DCMMKDIR)
        .arg("+r")
        .current_dir(root)
        .status()
        .with_context(|| format!("failed to launch {DCMMKDIR} (is DCMTK installed?)"))?;

    if !status.success() {
        bail!("{DCMMKDIR} exited with {status} in {}", root.display());
    }
    Ok(IndexOutcome::Created)
}
