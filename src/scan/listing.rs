use super::types::InputFile;
use crate::error::{ScanError, ScanResult};
use std::path::Path;
use walkdir::WalkDir;

/// List the regular files directly inside `directory` whose name ends with
/// `.{extension}`, sorted by file name. A file named just `.txt` counts.
///
/// Subdirectories are not descended into. Symlinks are listed without being
/// resolved, so a broken link surfaces later as a failure of that one file
/// rather than aborting the listing.
pub fn list_input_files(directory: &Path, extension: &str) -> ScanResult<Vec<InputFile>> {
    let extension = extension.trim_start_matches('.');
    let suffix = format!(".{extension}");
    let mut files = Vec::new();

    let walker = WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry.map_err(|source| ScanError::InputDirectory {
            directory: directory.to_path_buf(),
            source,
        })?;

        if !entry.file_type().is_file() && !entry.path_is_symlink() {
            continue;
        }

        if entry.file_name().to_string_lossy().ends_with(&suffix) {
            files.push(InputFile::new(entry.path()));
        }
    }

    files.sort();
    tracing::debug!(
        "Found {} .{} files in {}",
        files.len(),
        extension,
        directory.display()
    );

    Ok(files)
}
