use std::path::PathBuf;

use thiserror::Error;

/// User-facing failure kinds; the CLI layer decides how to present them.
#[derive(Debug, Error)]
pub enum ManagerError {
    #[error("no DICOMDIR found under {}", .0.display())]
    DicomdirNotFound(PathBuf),

    #[error("no DICOM files found under {}", .0.display())]
    NoDicomFiles(PathBuf),

    #[error("invalid selection {input:?}: expected a number between 1 and {max}")]
    InvalidSelection { input: String, max: usize },

    #[error("{} is not a directory", .0.display())]
    InvalidDirectory(PathBuf),
}
