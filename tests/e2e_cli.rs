mod support;

use std::ffi::OsStr;
use std::fs;
use std::time::Duration;

use tempfile::tempdir;

use support::{SAMPLE_RULES, describe, run_cli, spawn_recording_server, write_gzip_log};

fn os(value: &str) -> &OsStr {
    OsStr::new(value)
}

#[test]
fn e2e_dry_run_exports_points() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let log = dir.path().join("access.log.gz");
    write_gzip_log(&log)?;
    let export = dir.path().join("points.json");

    let output = run_cli(
        dir.path(),
        [
            os("--dry-run"),
            os("--rules"),
            os(SAMPLE_RULES),
            os("--export-json"),
            export.as_os_str(),
            log.as_os_str(),
        ],
        &[],
    )?;
    if !output.status.success() {
        return Err(describe(&output));
    }

    let text = fs::read_to_string(&export).map_err(|err| format!("read export failed: {}", err))?;
    let json: serde_json::Value =
        serde_json::from_str(&text).map_err(|err| format!("parse export failed: {}", err))?;
    let points = json
        .get("points")
        .and_then(serde_json::Value::as_array)
        .ok_or_else(|| "Missing points array".to_owned())?;
    // GET /users/{id}: count, failed, latency. POST /orders: count, failed.
    if points.len() != 5 {
        return Err(format!("Expected 5 points, got {}", points.len()));
    }
    let recorded = json
        .get("summary")
        .and_then(|summary| summary.get("recorded"))
        .and_then(serde_json::Value::as_u64);
    if recorded != Some(3) {
        return Err(format!("Expected 3 recorded lines, got {:?}", recorded));
    }
    if json.get("namespace").and_then(serde_json::Value::as_str) != Some("ALBAccessLog") {
        return Err("Expected default namespace".to_owned());
    }
    Ok(())
}

#[test]
fn e2e_publishes_to_cloudwatch_endpoint() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let log = dir.path().join("access.log.gz");
    write_gzip_log(&log)?;
    let (url, bodies) = spawn_recording_server()?;

    let output = run_cli(
        dir.path(),
        [
            os("--rules"),
            os(SAMPLE_RULES),
            os("--endpoint-url"),
            os(&url),
            os("--max-batch-size"),
            os("2"),
            os("--namespace"),
            os("Edge/Routes"),
            log.as_os_str(),
        ],
        &[
            ("AWS_ACCESS_KEY_ID", "AKIDEXAMPLE"),
            ("AWS_SECRET_ACCESS_KEY", "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY"),
            ("AWS_REGION", "eu-west-1"),
        ],
    )?;
    if !output.status.success() {
        return Err(describe(&output));
    }

    let mut received = Vec::new();
    while let Ok(body) = bodies.recv_timeout(Duration::from_millis(500)) {
        received.push(body);
    }
    if received.len() != 3 {
        return Err(format!("Expected 3 batches, got {}", received.len()));
    }
    for body in &received {
        if !body.contains("Action=PutMetricData") || !body.contains("Namespace=Edge%2FRoutes") {
            return Err(format!("Unexpected request body: {}", body));
        }
    }
    Ok(())
}

#[test]
fn e2e_without_rules_publishes_nothing() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let log = dir.path().join("access.log.gz");
    write_gzip_log(&log)?;
    let export = dir.path().join("points.jsonl");

    let output = run_cli(
        dir.path(),
        [
            os("--export-jsonl"),
            export.as_os_str(),
            log.as_os_str(),
        ],
        &[],
    )?;
    if !output.status.success() {
        return Err(describe(&output));
    }
    let text = fs::read_to_string(&export).map_err(|err| format!("read export failed: {}", err))?;
    if !text.is_empty() {
        return Err(format!("Expected empty export, got {}", text));
    }
    Ok(())
}

#[test]
fn e2e_invalid_rules_fail() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let log = dir.path().join("access.log.gz");
    write_gzip_log(&log)?;

    let output = run_cli(
        dir.path(),
        [
            os("--dry-run"),
            log.as_os_str(),
        ],
        &[("INCLUDE_PATH_RULES", r#"[{"host": "example.com", "path": "(", "route": "x"}]"#)],
    )?;
    if output.status.success() {
        return Err(format!("Expected failure\n{}", describe(&output)));
    }
    Ok(())
}

#[test]
fn e2e_missing_input_fails() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let output = run_cli(dir.path(), ["--dry-run"], &[("INCLUDE_PATH_RULES", SAMPLE_RULES)])?;
    if output.status.success() {
        return Err(format!("Expected failure\n{}", describe(&output)));
    }
    Ok(())
}
