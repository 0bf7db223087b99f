use chrono::SecondsFormat;
use url::form_urlencoded::Serializer;

use super::namespace::Namespace;
use crate::metrics::{MetricPoint, MetricValue};

const ACTION: &str = "PutMetricData";
const API_VERSION: &str = "2010-08-01";

/// Encodes a batch as a Query-protocol `PutMetricData` form body.
#[must_use]
pub fn encode_put_metric_data(namespace: &Namespace, batch: &[MetricPoint]) -> String {
    let mut form = Serializer::new(String::new());
    form.append_pair("Action", ACTION)
        .append_pair("Version", API_VERSION)
        .append_pair("Namespace", namespace.as_str());

    for (point_index, point) in members(batch) {
        let prefix = format!("MetricData.member.{}", point_index);
        form.append_pair(&format!("{}.MetricName", prefix), &point.name);
        for (dimension_index, dimension) in members(&point.dimensions) {
            let dimension_prefix = format!("{}.Dimensions.member.{}", prefix, dimension_index);
            form.append_pair(&format!("{}.Name", dimension_prefix), &dimension.name)
                .append_pair(&format!("{}.Value", dimension_prefix), &dimension.value);
        }
        form.append_pair(
            &format!("{}.Timestamp", prefix),
            &point.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
        );
        match &point.value {
            MetricValue::Scalar { value, unit } => {
                form.append_pair(&format!("{}.Value", prefix), &value.to_string())
                    .append_pair(&format!("{}.Unit", prefix), unit.as_str());
            }
            MetricValue::Distribution {
                values,
                counts,
                unit,
            } => {
                for (value_index, value) in members(values) {
                    form.append_pair(
                        &format!("{}.Values.member.{}", prefix, value_index),
                        &value.to_string(),
                    );
                }
                for (count_index, count) in members(counts) {
                    form.append_pair(
                        &format!("{}.Counts.member.{}", prefix, count_index),
                        &count.to_string(),
                    );
                }
                form.append_pair(&format!("{}.Unit", prefix), unit.as_str());
            }
        }
    }

    form.finish()
}

/// Pairs items with their one-based Query-protocol member index.
fn members<T>(items: &[T]) -> impl Iterator<Item = (usize, &T)> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| (index.saturating_add(1), item))
}
