use std::sync::Mutex;

use async_trait::async_trait;

use super::{
    CloudWatchPublisher, DEFAULT_NAMESPACE, DryRunPublisher, Namespace, Publisher,
    default_endpoint, encode_put_metric_data, publish_all,
};
use crate::alblog::test_support::at;
use crate::aws::AwsCredentials;
use crate::error::{PublishError, ValidationError};
use crate::metrics::{Dimension, MetricPoint, REQUEST_COUNT, TARGET_RESPONSE_TIME};
use crate::test_http::serve_once;

fn points() -> Vec<MetricPoint> {
    let dimensions = vec![
        Dimension::new("Method", "GET"),
        Dimension::new("Host", "example.com"),
        Dimension::new("Path", "/users/:id"),
    ];
    vec![
        MetricPoint::distribution(
            TARGET_RESPONSE_TIME,
            dimensions.clone(),
            at(10, 0, 0),
            vec![0.42, 0.58],
            vec![3, 1],
        ),
        MetricPoint::scalar(REQUEST_COUNT, dimensions, at(10, 0, 0), 4),
    ]
}

#[test]
fn namespace_validation_boundaries() -> Result<(), String> {
    if Namespace::default().as_str() != DEFAULT_NAMESPACE {
        return Err("Unexpected default namespace".to_owned());
    }
    let longest = "a".repeat(255);
    Namespace::new(&longest).map_err(|err| format!("255 chars should pass: {}", err))?;

    let cases: [(String, fn(&ValidationError) -> bool); 5] = [
        (String::new(), |err| matches!(err, ValidationError::NamespaceEmpty)),
        ("a".repeat(256), |err| {
            matches!(err, ValidationError::NamespaceTooLong { length: 256, max: 255 })
        }),
        ("AWS/ELB".to_owned(), |err| {
            matches!(err, ValidationError::NamespaceReserved { .. })
        }),
        ("bad\tname".to_owned(), |err| {
            matches!(err, ValidationError::NamespaceNotPrintable)
        }),
        ("caf\u{e9}".to_owned(), |err| {
            matches!(err, ValidationError::NamespaceNotPrintable)
        }),
    ];
    for (value, expected) in cases {
        match value.parse::<Namespace>() {
            Err(err) if expected(&err) => {}
            other => return Err(format!("Unexpected result for {:?}: {:?}", value, other)),
        }
    }

    Namespace::new("Custom/AWS/Thing").map_err(|err| format!("inner AWS/ is fine: {}", err))?;
    Ok(())
}

#[test]
fn form_body_uses_query_member_layout() -> Result<(), String> {
    let body = encode_put_metric_data(&Namespace::default(), &points());
    let expected = [
        "Action=PutMetricData",
        "Version=2010-08-01",
        "Namespace=ALBAccessLog",
        "MetricData.member.1.MetricName=TargetResponseTime",
        "MetricData.member.1.Dimensions.member.3.Name=Path",
        "MetricData.member.1.Dimensions.member.3.Value=%2Fusers%2F%3Aid",
        "MetricData.member.1.Timestamp=2024-01-15T10%3A00%3A00.000Z",
        "MetricData.member.1.Values.member.1=0.42",
        "MetricData.member.1.Values.member.2=0.58",
        "MetricData.member.1.Counts.member.1=3",
        "MetricData.member.1.Counts.member.2=1",
        "MetricData.member.1.Unit=Seconds",
        "MetricData.member.2.MetricName=RequestCount",
        "MetricData.member.2.Value=4",
        "MetricData.member.2.Unit=Count",
    ];
    let pairs: Vec<&str> = body.split('&').collect();
    for pair in expected {
        if !pairs.contains(&pair) {
            return Err(format!("Missing '{}' in {}", pair, body));
        }
    }
    Ok(())
}

#[derive(Default)]
struct RecordingPublisher {
    fail_at: Option<usize>,
    seen: Mutex<Vec<usize>>,
}

#[async_trait]
impl Publisher for RecordingPublisher {
    async fn publish(
        &self,
        _namespace: &Namespace,
        index: usize,
        batch: &[MetricPoint],
    ) -> Result<(), PublishError> {
        if let Ok(mut seen) = self.seen.lock() {
            seen.push(index);
        }
        if self.fail_at == Some(index) {
            return Err(PublishError::Rejected {
                batch: index,
                status: 400,
                body: format!("{} points", batch.len()),
            });
        }
        Ok(())
    }
}

#[tokio::test(flavor = "current_thread")]
async fn publish_all_stops_at_first_failure() -> Result<(), String> {
    let batches = vec![points(), points(), points()];
    let publisher = RecordingPublisher {
        fail_at: Some(1),
        ..RecordingPublisher::default()
    };
    match publish_all(&publisher, &Namespace::default(), &batches).await {
        Err(PublishError::Rejected { batch: 1, .. }) => {}
        other => return Err(format!("Expected rejection of batch 1, got {:?}", other)),
    }
    let seen = publisher
        .seen
        .lock()
        .map_err(|_err| "poisoned".to_owned())?
        .clone();
    if seen != [0, 1] {
        return Err(format!("Unexpected batches attempted: {:?}", seen));
    }
    Ok(())
}

#[tokio::test(flavor = "current_thread")]
async fn dry_run_publishes_everything() -> Result<(), String> {
    let batches = vec![points(), points()];
    let summary = publish_all(&DryRunPublisher, &Namespace::default(), &batches)
        .await
        .map_err(|err| err.to_string())?;
    if summary.batches != 2 || summary.points != 4 {
        return Err(format!("Unexpected summary: {:?}", summary));
    }
    Ok(())
}

#[tokio::test(flavor = "current_thread")]
async fn cloudwatch_publisher_posts_signed_form() -> Result<(), String> {
    let (endpoint, server) = serve_once("200 OK", b"").await?;
    let credentials = AwsCredentials::new("AKIDEXAMPLE", "secret", None);
    let publisher = CloudWatchPublisher::new(&credentials, "us-east-1", Some(&endpoint))
        .map_err(|err| err.to_string())?;

    publisher
        .publish(&Namespace::default(), 0, &points())
        .await
        .map_err(|err| err.to_string())?;

    let request = server.await.map_err(|err| err.to_string())?;
    if !request.starts_with("POST / HTTP/1.1") {
        return Err(format!("Unexpected request line: {}", request));
    }
    let lower = request.to_ascii_lowercase();
    if !lower.contains("authorization: aws4-hmac-sha256 credential=akidexample/") {
        return Err(format!("Missing signature: {}", request));
    }
    if !request.contains("Action=PutMetricData") {
        return Err(format!("Missing form body: {}", request));
    }
    Ok(())
}

#[tokio::test(flavor = "current_thread")]
async fn cloudwatch_rejection_carries_status_and_body() -> Result<(), String> {
    let (endpoint, server) = serve_once("400 Bad Request", b"nope!!").await?;
    let credentials = AwsCredentials::new("AKIDEXAMPLE", "secret", None);
    let publisher = CloudWatchPublisher::new(&credentials, "us-east-1", Some(&endpoint))
        .map_err(|err| err.to_string())?;

    let result = publisher.publish(&Namespace::default(), 3, &points()).await;
    drop(server.await);
    match result {
        Err(PublishError::Rejected {
            batch: 3,
            status: 400,
            body,
        }) if body == "nope!!" => Ok(()),
        other => Err(format!("Expected rejection, got {:?}", other)),
    }
}

#[test]
fn default_endpoint_is_regional() -> Result<(), String> {
    if default_endpoint("eu-central-1") != "https://monitoring.eu-central-1.amazonaws.com/" {
        return Err("Unexpected endpoint".to_owned());
    }
    let credentials = AwsCredentials::new("AKIDEXAMPLE", "secret", None);
    let regional = CloudWatchPublisher::new(&credentials, "eu-central-1", None)
        .map_err(|err| err.to_string())?;
    if regional.endpoint().as_str() != "https://monitoring.eu-central-1.amazonaws.com/" {
        return Err(format!("Unexpected default endpoint: {}", regional.endpoint()));
    }
    let overridden =
        CloudWatchPublisher::new(&credentials, "eu-central-1", Some("http://127.0.0.1:4566/"))
            .map_err(|err| err.to_string())?;
    if overridden.endpoint().as_str() != "http://127.0.0.1:4566/" {
        return Err(format!("Unexpected override endpoint: {}", overridden.endpoint()));
    }
    match CloudWatchPublisher::new(&credentials, "us-east-1", Some("not a url")) {
        Err(PublishError::InvalidEndpoint { .. }) => Ok(()),
        other => Err(format!("Expected InvalidEndpoint, got {:?}", other.map(|_| ()))),
    }
}
