// External crates
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// Outcome of sizing one directory tree.
///
/// `errors` counts entries the walk could not read (permission denied,
/// vanished files, broken entries). A non-zero count means `bytes` is a
/// partial sum, not a complete one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanResult {
    /// Sum of the sizes of every non-directory entry reached.
    pub bytes: u64,
    /// Number of entries skipped because they could not be read.
    pub errors: usize,
}

/// Sum the byte size of every non-directory entry under `path`.
///
/// The walk is a blocking depth-first traversal on the calling thread.
/// Symbolic links are not followed. Unreadable entries are logged at debug
/// level and skipped; the sum accumulated so far is kept, never discarded.
pub fn folder_size<P: AsRef<Path>>(path: P) -> ScanResult {
    let path = path.as_ref();
    let mut bytes: u64 = 0;
    let mut errors: usize = 0;

    for entry in WalkDir::new(path).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!(error = %e, "Skipping unreadable directory entry");
                errors += 1;
                continue;
            }
        };

        if entry.file_type().is_dir() {
            continue;
        }

        match entry.metadata() {
            Ok(meta) => bytes += meta.len(),
            Err(e) => {
                debug!(
                    file = %entry.path().display(),
                    error = %e,
                    "Skipping entry without readable metadata"
                );
                errors += 1;
            }
        }
    }

    debug!(
        path = %path.display(),
        bytes,
        errors,
        "Folder size computed"
    );

    ScanResult { bytes, errors }
}
