use std::io::Read;

use flate2::read::MultiGzDecoder;

use crate::error::SourceError;

pub const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

#[must_use]
pub fn is_gzip(bytes: &[u8]) -> bool {
    bytes.starts_with(&GZIP_MAGIC)
}

/// Decompresses gzip content when present and decodes the result as UTF-8,
/// replacing invalid sequences. Concatenated gzip members are all read.
///
/// # Errors
///
/// Returns [`SourceError::Decompress`] when gzip content is corrupt.
pub fn decode_text(bytes: &[u8], name: &str) -> Result<String, SourceError> {
    if !is_gzip(bytes) {
        return Ok(String::from_utf8_lossy(bytes).into_owned());
    }
    let mut decoded = Vec::new();
    MultiGzDecoder::new(bytes)
        .read_to_end(&mut decoded)
        .map_err(|err| SourceError::Decompress {
            name: name.to_owned(),
            source: err,
        })?;
    Ok(String::from_utf8_lossy(&decoded).into_owned())
}
