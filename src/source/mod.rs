//! Where log objects come from and how their bytes become text.
mod decode;
mod event;
mod local;
mod object;
mod s3;


pub use decode::{GZIP_MAGIC, decode_text, is_gzip};
pub use event::{expand_s3_event, parse_s3_event};
pub use local::read_local;
pub use object::ObjectRef;
pub use s3::S3Reader;

use tracing::debug;

use crate::error::SourceError;

/// Reads objects of either kind. S3 access is only configured when an
/// S3 object is part of the run.
#[derive(Debug, Clone, Default)]
pub struct ObjectReader {
    s3: Option<S3Reader>,
}

impl ObjectReader {
    #[must_use]
    pub const fn local_only() -> Self {
        Self { s3: None }
    }

    #[must_use]
    pub const fn with_s3(s3: S3Reader) -> Self {
        Self { s3: Some(s3) }
    }

    /// Fetches the object and returns its decompressed text.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] when the object cannot be read or
    /// decompressed, or when an S3 object is requested without S3 access.
    pub async fn read_text(&self, object: &ObjectRef) -> Result<String, SourceError> {
        let bytes = match object {
            ObjectRef::Local(path) => read_local(path).await?,
            ObjectRef::S3 { bucket, key } => {
                let s3 = self.s3.as_ref().ok_or_else(|| SourceError::S3NotConfigured {
                    object: object.to_string(),
                })?;
                s3.get_object(bucket, key).await?
            }
        };
        debug!(object = %object, bytes = bytes.len(), gzip = is_gzip(&bytes), "Read log object");
        decode_text(&bytes, &object.to_string())
    }
}
