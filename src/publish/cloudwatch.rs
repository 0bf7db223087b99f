use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::debug;

use super::form::encode_put_metric_data;
use super::namespace::Namespace;
use super::Publisher;
use crate::aws::{AwsCredentials, Signer};
use crate::error::PublishError;
use crate::metrics::MetricPoint;

const SERVICE: &str = "monitoring";
const CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=utf-8";

#[must_use]
pub fn default_endpoint(region: &str) -> String {
    format!("https://{}.{}.amazonaws.com/", SERVICE, region)
}

/// Publishes batches with signed `PutMetricData` Query requests.
#[derive(Debug, Clone)]
pub struct CloudWatchPublisher {
    client: Client,
    endpoint: Url,
    signer: Signer,
}

impl CloudWatchPublisher {
    /// # Errors
    ///
    /// Returns an error when the endpoint is not a valid URL or the HTTP
    /// client cannot be built.
    pub fn new(
        credentials: &AwsCredentials,
        region: &str,
        endpoint: Option<&str>,
    ) -> Result<Self, PublishError> {
        let endpoint = endpoint.map_or_else(|| default_endpoint(region), str::to_owned);
        let endpoint = Url::parse(&endpoint).map_err(|err| PublishError::InvalidEndpoint {
            url: endpoint.clone(),
            source: err,
        })?;
        let client = Client::builder()
            .build()
            .map_err(|err| PublishError::BuildClient { source: err })?;
        Ok(Self {
            client,
            endpoint,
            signer: Signer::new(credentials, region, SERVICE),
        })
    }

    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl Publisher for CloudWatchPublisher {
    async fn publish(
        &self,
        namespace: &Namespace,
        index: usize,
        batch: &[MetricPoint],
    ) -> Result<(), PublishError> {
        let body = encode_put_metric_data(namespace, batch);
        let headers = self.signer.sign(
            "POST",
            self.endpoint.as_str(),
            &[("content-type", CONTENT_TYPE)],
            body.as_bytes(),
        )?;

        debug!(batch = index, points = batch.len(), endpoint = %self.endpoint, "Sending PutMetricData");
        let response = self
            .client
            .post(self.endpoint.clone())
            .headers(headers)
            .body(body)
            .send()
            .await
            .map_err(|err| PublishError::Request { source: err })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PublishError::Rejected {
                batch: index,
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }
}
