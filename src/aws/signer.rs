use std::time::SystemTime;

use aws_credential_types::Credentials;
use aws_sigv4::http_request::{
    PayloadChecksumKind, PercentEncodingMode, SignableBody, SignableRequest, SigningSettings,
    UriPathNormalizationMode, sign,
};
use aws_sigv4::sign::v4;
use aws_smithy_runtime_api::client::identity::Identity;
use http::HeaderMap;

use super::credentials::AwsCredentials;
use crate::error::SigningError;

/// Signs requests for one service in one region.
#[derive(Debug, Clone)]
pub struct Signer {
    identity: Identity,
    region: String,
    service: &'static str,
    s3_mode: bool,
}

impl Signer {
    #[must_use]
    pub fn new(credentials: &AwsCredentials, region: &str, service: &'static str) -> Self {
        let identity: Identity = Credentials::new(
            credentials.access_key_id(),
            credentials.secret_access_key(),
            credentials.session_token().map(str::to_owned),
            None,
            "alb-path-metrics",
        )
        .into();
        Self {
            identity,
            region: region.to_owned(),
            service,
            s3_mode: false,
        }
    }

    /// Switches to S3 rules: the path is encoded once and left
    /// unnormalized, and `x-amz-content-sha256` is added.
    #[must_use]
    pub const fn for_s3(mut self) -> Self {
        self.s3_mode = true;
        self
    }

    #[must_use]
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Returns `headers` plus the signing headers for the request.
    ///
    /// # Errors
    ///
    /// Returns [`SigningError`] when the request cannot be signed.
    pub fn sign(
        &self,
        method: &str,
        url: &str,
        headers: &[(&str, &str)],
        body: &[u8],
    ) -> Result<HeaderMap, SigningError> {
        self.sign_at(method, url, headers, body, SystemTime::now())
    }

    pub(crate) fn sign_at(
        &self,
        method: &str,
        url: &str,
        headers: &[(&str, &str)],
        body: &[u8],
        time: SystemTime,
    ) -> Result<HeaderMap, SigningError> {
        let mut settings = SigningSettings::default();
        if self.s3_mode {
            settings.payload_checksum_kind = PayloadChecksumKind::XAmzSha256;
            settings.percent_encoding_mode = PercentEncodingMode::Single;
            settings.uri_path_normalization_mode = UriPathNormalizationMode::Disabled;
        }
        let params = v4::SigningParams::builder()
            .identity(&self.identity)
            .region(&self.region)
            .name(self.service)
            .time(time)
            .settings(settings)
            .build()
            .map_err(|err| SigningError::Params {
                source: Box::new(err),
            })?
            .into();

        let signable = SignableRequest::new(
            method,
            url,
            headers.iter().copied(),
            SignableBody::Bytes(body),
        )
        .map_err(|err| SigningError::Request {
            source: Box::new(err),
        })?;

        let (instructions, _signature) = sign(signable, &params)
            .map_err(|err| SigningError::Sign {
                source: Box::new(err),
            })?
            .into_parts();

        let mut request = http::Request::builder().method(method).uri(url);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }
        let mut request = request.body(()).map_err(|err| SigningError::BuildRequest {
            source: Box::new(err),
        })?;
        instructions.apply_to_request_http1x(&mut request);

        Ok(request.headers().clone())
    }
}
