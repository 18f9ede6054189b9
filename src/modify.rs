use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dicom::core::Tag;
use dicom::object::open_file;
use tracing::debug;

use crate::rewrite;

/// Apply a modification map to every file in `files`, mirroring each path
/// relative to `root` under `output_root`.
///
/// The batch aborts on the first load or write failure; the error names the
/// offending file so a partial output tree can be diagnosed.
pub fn modify_all(
    root: &Path,
    files: &[PathBuf],
    modifications: &[(Tag, &str)],
    output_root: &Path,
) -> Result<()> {
    for path in files {
        let mut obj = open_file(path)
            .with_context(|| format!("failed to load DICOM file {}", path.display()))?;

        for (tag, value) in modifications {
            rewrite::rewrite_tag(&mut obj, *tag, value);
        }

        let relative = path
            .strip_prefix(root)
            .with_context(|| format!("{} is not under {}", path.display(), root.display()))?;
        let target = output_root.join(relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        obj.write_to_file(&target)
            .with_context(|| format!("failed to write {}", target.display()))?;
        debug!("wrote {}", target.display());
    }

    Ok(())
}
