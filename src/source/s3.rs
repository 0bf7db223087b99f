use reqwest::{Client, Url};
use tracing::debug;

use crate::aws::{AwsCredentials, Signer};
use crate::error::SourceError;

const SERVICE: &str = "s3";

/// Fetches objects with signed S3 `GetObject` requests.
///
/// Without an endpoint override objects are addressed virtual-host style
/// (`https://<bucket>.s3.<region>.amazonaws.com/<key>`); with one they are
/// addressed path style (`<endpoint>/<bucket>/<key>`).
#[derive(Debug, Clone)]
pub struct S3Reader {
    client: Client,
    signer: Signer,
    endpoint: Option<Url>,
}

impl S3Reader {
    /// # Errors
    ///
    /// Returns an error when the endpoint is not a valid URL or the HTTP
    /// client cannot be built.
    pub fn new(
        credentials: &AwsCredentials,
        region: &str,
        endpoint: Option<&str>,
    ) -> Result<Self, SourceError> {
        let endpoint = endpoint
            .map(|value| {
                Url::parse(value).map_err(|err| SourceError::InvalidEndpoint {
                    url: value.to_owned(),
                    source: err,
                })
            })
            .transpose()?;
        let client = Client::builder()
            .build()
            .map_err(|err| SourceError::BuildClient { source: err })?;
        Ok(Self {
            client,
            signer: Signer::new(credentials, region, SERVICE).for_s3(),
            endpoint,
        })
    }

    /// URL of `key` in `bucket`, with each key segment percent-encoded.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::InvalidObjectUrl`] when no valid URL can be
    /// built for the bucket.
    pub fn object_url(&self, bucket: &str, key: &str) -> Result<Url, SourceError> {
        let mut url = match &self.endpoint {
            Some(endpoint) => {
                let mut url = endpoint.clone();
                if let Ok(mut segments) = url.path_segments_mut() {
                    segments.pop_if_empty().push(bucket);
                }
                url
            }
            None => {
                let base = format!(
                    "https://{}.{}.{}.amazonaws.com/",
                    bucket,
                    SERVICE,
                    self.signer.region()
                );
                Url::parse(&base).map_err(|err| SourceError::InvalidObjectUrl {
                    bucket: bucket.to_owned(),
                    key: key.to_owned(),
                    source: err,
                })?
            }
        };
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(key.split('/'));
        }
        Ok(url)
    }

    /// Downloads the raw bytes of an object.
    ///
    /// # Errors
    ///
    /// Returns an error when signing or the request fails, or S3 answers
    /// with a non-success status.
    pub async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>, SourceError> {
        let url = self.object_url(bucket, key)?;
        let headers = self.signer.sign("GET", url.as_str(), &[], b"")?;
        debug!(bucket, key, url = %url, "Fetching S3 object");

        let fetch_error = |err| SourceError::Fetch {
            bucket: bucket.to_owned(),
            key: key.to_owned(),
            source: err,
        };
        let response = self
            .client
            .get(url)
            .headers(headers)
            .send()
            .await
            .map_err(fetch_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SourceError::FetchStatus {
                bucket: bucket.to_owned(),
                key: key.to_owned(),
                status: status.as_u16(),
                body,
            });
        }
        let bytes = response.bytes().await.map_err(fetch_error)?;
        Ok(bytes.to_vec())
    }
}
