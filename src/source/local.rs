use std::path::Path;

use crate::error::SourceError;

/// Reads a log file from disk.
///
/// # Errors
///
/// Returns [`SourceError::ReadFile`] when the file cannot be read.
pub async fn read_local(path: &Path) -> Result<Vec<u8>, SourceError> {
    tokio::fs::read(path)
        .await
        .map_err(|err| SourceError::ReadFile {
            path: path.to_path_buf(),
            source: err,
        })
}
