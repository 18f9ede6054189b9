use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dicom::core::Tag;
use tracing::debug;

use crate::error::ManagerError;
use crate::locate;
use crate::models::AnonymizeReport;
use crate::modify;

/// Identifying tags and their fixed replacement values.
pub fn default_modifications() -> Vec<(Tag, &'static str)> {
    vec![
        (Tag(0x0010, 0x0010), "ANONYMOUS"), // PatientName
        (Tag(0x0010, 0x0020), "ANON_ID"),   // PatientID
        (Tag(0x0010, 0x0030), "19990101"),  // PatientBirthDate
        (Tag(0x0008, 0x0050), "ANON_ACC"),  // AccessionNumber
        (Tag(0x0020, 0x0010), "ANON_ACC"),  // StudyID
        (Tag(0x0040, 0x0009), "ANON_ACC"),  // ScheduledProcedureStepID
        (Tag(0x0040, 0x1001), "ANON_ACC"),  // RequestedProcedureID
    ]
}

/// Output tree for an anonymization run: the input directory name with a
/// `_MODIFIED` suffix, as a sibling of the input.
pub fn output_root_for(root: &Path) -> PathBuf {
    let mut name = root.as_os_str().to_os_string();
    name.push("_MODIFIED");
    PathBuf::from(name)
}

/// Anonymize every DICOM file under `root` into a fresh `<root>_MODIFIED`
/// tree, preserving relative paths. Any pre-existing output tree is deleted
/// first so stale files never survive a re-run.
pub fn anonymize_directory(root: &Path) -> Result<AnonymizeReport> {
    let files = locate::find_dicom_files(root)
        .ok_or_else(|| ManagerError::NoDicomFiles(root.to_path_buf()))?;

    let output_root = output_root_for(root);
    if output_root.is_dir() {
        debug!("removing stale output tree {}", output_root.display());
        fs::remove_dir_all(&output_root)
            .with_context(|| format!("failed to remove {}", output_root.display()))?;
    }
    fs::create_dir_all(&output_root)
        .with_context(|| format!("failed to create {}", output_root.display()))?;

    modify::modify_all(root, &files, &default_modifications(), &output_root)?;

    Ok(AnonymizeReport {
        output_root,
        files_written: files.len(),
    })
}
