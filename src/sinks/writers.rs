use std::path::Path;

use serde::Serialize;
use tokio::io::{AsyncWriteExt, BufWriter};

use crate::app::ScanStats;
use crate::error::SinkError;
use crate::metrics::MetricPoint;
use crate::publish::Namespace;

#[derive(Serialize)]
struct JsonExport<'data> {
    namespace: &'data str,
    summary: &'data ScanStats,
    points: &'data [MetricPoint],
}

/// Writes the run summary and all points as one pretty-printed JSON
/// document.
///
/// # Errors
///
/// Returns an error if serialization or the file write fails.
pub async fn export_json(
    path: &str,
    namespace: &Namespace,
    summary: &ScanStats,
    points: &[MetricPoint],
) -> Result<(), SinkError> {
    let payload = JsonExport {
        namespace: namespace.as_str(),
        summary,
        points,
    };
    let json =
        serde_json::to_vec_pretty(&payload).map_err(|err| SinkError::Serialize { source: err })?;
    write_file(path, &json).await
}

/// Writes one JSON object per metric point per line.
///
/// # Errors
///
/// Returns an error if serialization or the file write fails.
pub async fn export_jsonl(path: &str, points: &[MetricPoint]) -> Result<(), SinkError> {
    let mut output = Vec::new();
    for point in points {
        serde_json::to_writer(&mut output, point)
            .map_err(|err| SinkError::Serialize { source: err })?;
        output.push(b'\n');
    }
    write_file(path, &output).await
}

async fn write_file(path: &str, bytes: &[u8]) -> Result<(), SinkError> {
    let write_error = |err| SinkError::Write {
        path: Path::new(path).to_path_buf(),
        source: err,
    };
    let file = tokio::fs::File::create(path).await.map_err(write_error)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(bytes).await.map_err(write_error)?;
    writer.flush().await.map_err(write_error)?;
    Ok(())
}
