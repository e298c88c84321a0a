use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::CrawlError;

/// Writes `contents` next to `path` first and renames it into place, so a
/// reader never observes a half-written file.
pub fn write_atomically(path: &Path, contents: &[u8]) -> Result<(), CrawlError> {
    let temp_path = temp_path_for(path);

    if let Err(err) = fs::write(&temp_path, contents) {
        discard(&temp_path);
        return Err(CrawlError::filesystem(&temp_path, err));
    }

    if let Err(err) = fs::rename(&temp_path, path) {
        discard(&temp_path);
        return Err(CrawlError::filesystem(path, err));
    }

    Ok(())
}

fn discard(temp_path: &Path) {
    if temp_path.is_file() {
        let _ = fs::remove_file(temp_path);
    }
}

pub fn ensure_directory(dir: &Path) -> Result<(), CrawlError> {
    fs::create_dir_all(dir).map_err(|err| CrawlError::filesystem(dir, err))
}

fn temp_path_for(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default();

    path.with_file_name(format!(".{}.tmp", file_name))
}
