use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::models::ScanReport;

/// Reserved name of the media storage directory index.
pub const DICOMDIR_NAME: &str = "DICOMDIR";

// Content sniffing looks at the same window libmagic uses for
// application/dicom: the "DICM" marker right after the 128-byte preamble.
const SNIFF_LEN: usize = 2048;
const MAGIC_OFFSET: usize = 128;
const MAGIC: &[u8; 4] = b"DICM";

/// Walk the tree under `root` and return the first file named exactly `DICOMDIR`.
pub fn find_dicomdir(root: &Path) -> Option<PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .find(|entry| entry.file_type().is_file() && entry.file_name() == DICOMDIR_NAME)
        .map(|entry| entry.into_path())
}

/// Walk the tree under `root` and return every file whose content sniffs as
/// DICOM, excluding the DICOMDIR itself. Returns `None` when nothing matches.
pub fn find_dicom_files(root: &Path) -> Option<Vec<PathBuf>> {
    let files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file() && entry.file_name() != DICOMDIR_NAME)
        .map(|entry| entry.into_path())
        .filter(|path| is_dicom(path))
        .collect();

    if files.is_empty() {
        None
    } else {
        Some(files)
    }
}

/// Combined scan used by the interactive selection menu.
pub fn scan(root: &Path) -> ScanReport {
    ScanReport {
        dicomdir: find_dicomdir(root),
        dicom_files: find_dicom_files(root).unwrap_or_default(),
    }
}

/// Sniff a file's content type by extension-independent inspection of its
/// leading bytes. Unreadable files are skipped, not surfaced.
fn is_dicom(path: &Path) -> bool {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(err) => {
            debug!("skipping unreadable file {}: {}", path.display(), err);
            return false;
        }
    };

    let mut buf = [0u8; SNIFF_LEN];
    let mut filled = 0;
    // Short reads are possible on any reader; keep pulling until EOF or the
    // window is full. The handle is scoped to this function on every path.
    loop {
        match file.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => {
                filled += n;
                if filled == SNIFF_LEN {
                    break;
                }
            }
            Err(err) => {
                debug!("skipping unreadable file {}: {}", path.display(), err);
                return false;
            }
        }
    }

    filled >= MAGIC_OFFSET + MAGIC.len()
        && &buf[MAGIC_OFFSET..MAGIC_OFFSET + MAGIC.len()] == MAGIC
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn sniff_rejects_short_and_textual_files() {
        let dir = tempdir().expect("tempdir");

        let short = dir.path().join("short.dcm");
        fs::write(&short, b"DICM").expect("write short file");
        assert!(!is_dicom(&short));

        let text = dir.path().join("notes.txt");
        fs::write(&text, vec![b'x'; 4096]).expect("write text file");
        assert!(!is_dicom(&text));
    }

    #[test]
    fn sniff_accepts_magic_after_preamble() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("image001");

        let mut bytes = vec![0u8; MAGIC_OFFSET];
        bytes.extend_from_slice(MAGIC);
        fs::write(&path, bytes).expect("write dicom-like file");

        assert!(is_dicom(&path));
    }

    #[test]
    fn missing_file_is_skipped() {
        assert!(!is_dicom(Path::new("/nonexistent/file.dcm")));
    }
}
