use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::SourceError;

const S3_SCHEME: &str = "s3://";

/// A log object named on the command line or by an S3 event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectRef {
    Local(PathBuf),
    S3 { bucket: String, key: String },
}

impl ObjectRef {
    /// Parses `s3://bucket/key`; anything else is a local path.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::InvalidS3Uri`] when an `s3://` value lacks a
    /// bucket or key.
    pub fn parse(value: &str) -> Result<Self, SourceError> {
        let Some(rest) = value.strip_prefix(S3_SCHEME) else {
            return Ok(Self::Local(PathBuf::from(value)));
        };
        match rest.split_once('/') {
            Some((bucket, key)) if !bucket.is_empty() && !key.is_empty() => Ok(Self::S3 {
                bucket: bucket.to_owned(),
                key: key.to_owned(),
            }),
            Some(_) | None => Err(SourceError::InvalidS3Uri {
                value: value.to_owned(),
            }),
        }
    }

    #[must_use]
    pub const fn is_s3(&self) -> bool {
        matches!(self, Self::S3 { .. })
    }
}

impl FromStr for ObjectRef {
    type Err = SourceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local(path) => write!(f, "{}", path.display()),
            Self::S3 { bucket, key } => write!(f, "{}{}/{}", S3_SCHEME, bucket, key),
        }
    }
}
