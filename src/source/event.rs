use std::path::Path;

use serde::Deserialize;
use url::form_urlencoded;

use super::object::ObjectRef;
use crate::error::SourceError;

#[derive(Debug, Default, Deserialize)]
struct S3Event {
    #[serde(rename = "Records", default)]
    records: Vec<S3EventRecord>,
}

#[derive(Debug, Default, Deserialize)]
struct S3EventRecord {
    #[serde(default)]
    s3: S3Entity,
}

#[derive(Debug, Default, Deserialize)]
struct S3Entity {
    #[serde(default)]
    bucket: S3Bucket,
    #[serde(default)]
    object: S3Object,
}

#[derive(Debug, Default, Deserialize)]
struct S3Bucket {
    #[serde(default)]
    name: String,
}

#[derive(Debug, Default, Deserialize)]
struct S3Object {
    #[serde(default)]
    key: String,
}

/// Reads an S3 event notification file and returns its objects in order.
///
/// # Errors
///
/// Returns an error when the file cannot be read or parsed, or a record
/// has no bucket name or key.
pub async fn expand_s3_event(path: &Path) -> Result<Vec<ObjectRef>, SourceError> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|err| SourceError::ReadEvent {
            path: path.to_path_buf(),
            source: err,
        })?;
    parse_s3_event(&text, path)
}

/// Parses S3 event JSON. Object keys arrive form-encoded and are decoded.
///
/// # Errors
///
/// Returns an error when the JSON is invalid or a record has no bucket
/// name, no key, or a key with a malformed `%` escape. `origin` only labels
/// the error.
pub fn parse_s3_event(text: &str, origin: &Path) -> Result<Vec<ObjectRef>, SourceError> {
    let event: S3Event = serde_json::from_str(text).map_err(|err| SourceError::ParseEvent {
        path: origin.to_path_buf(),
        source: err,
    })?;
    event
        .records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            if record.s3.bucket.name.is_empty() {
                return Err(SourceError::MissingBucket { index });
            }
            let raw = &record.s3.object.key;
            if !has_valid_escapes(raw) {
                return Err(SourceError::InvalidEventKey {
                    index,
                    key: raw.clone(),
                });
            }
            let key = decode_key(raw);
            if key.is_empty() {
                return Err(SourceError::MissingKey { index });
            }
            Ok(ObjectRef::S3 {
                bucket: record.s3.bucket.name,
                key,
            })
        })
        .collect()
}

/// Every `%` must start a two-digit hex escape.
fn has_valid_escapes(raw: &str) -> bool {
    let mut bytes = raw.bytes();
    while let Some(byte) = bytes.next() {
        if byte == b'%' {
            let escape = (bytes.next(), bytes.next());
            let (Some(high), Some(low)) = escape else {
                return false;
            };
            if !high.is_ascii_hexdigit() || !low.is_ascii_hexdigit() {
                return false;
            }
        }
    }
    true
}

fn decode_key(raw: &str) -> String {
    let query = format!("key={}", raw.replace('&', "%26"));
    form_urlencoded::parse(query.as_bytes())
        .next()
        .map_or_else(|| raw.to_owned(), |(_, value)| value.into_owned())
}
