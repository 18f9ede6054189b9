//
// models.rs
// dicom-manager
//
// Defines serializable result structures returned by the scan and anonymization operations.
//

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Everything a directory scan turned up: the index file (if any) plus the data files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    pub dicomdir: Option<PathBuf>,
    pub dicom_files: Vec<PathBuf>,
}

impl ScanReport {
    /// Menu entries for interactive selection: the DICOMDIR is always listed first.
    pub fn selection_options(&self) -> Vec<PathBuf> {
        let mut options = Vec::with_capacity(self.dicom_files.len() + 1);
        if let Some(dicomdir) = &self.dicomdir {
            options.push(dicomdir.clone());
        }
        options.extend(self.dicom_files.iter().cloned());
        options
    }

    pub fn is_empty(&self) -> bool {
        self.dicomdir.is_none() && self.dicom_files.is_empty()
    }
}

/// Outcome of a whole-tree anonymization run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnonymizeReport {
    pub output_root: PathBuf,
    pub files_written: usize,
}
