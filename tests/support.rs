use std::ffi::OsStr;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::{Shutdown, TcpListener};
use std::path::Path;
use std::process::{Command, Output};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// One log line per entry, in load-balancer access-log layout.
pub const SAMPLE_LINES: [&str; 4] = [
    r#"https 2024-01-15T10:00:01.000000Z app/lb/1 10.0.0.1:1234 10.0.1.1:80 0.001 0.420 0.000 200 200 100 200 "GET https://example.com:443/users/42 HTTP/1.1" "curl/8" - -"#,
    r#"https 2024-01-15T10:00:02.000000Z app/lb/1 10.0.0.1:1234 10.0.1.1:80 0.000 0.580 0.000 503 503 100 200 "GET https://example.com:443/users/7 HTTP/1.1" "curl/8" - -"#,
    r#"https 2024-01-15T10:00:03.000000Z app/lb/1 10.0.0.1:1234 - -1 -1 -1 504 - 100 200 "POST https://example.com:443/orders HTTP/1.1" "curl/8" - -"#,
    r#"https 2024-01-15T10:00:04.000000Z app/lb/1 10.0.0.1:1234 10.0.1.1:80 0.000 0.100 0.000 200 200 100 200 "GET https://other.com:443/users/1 HTTP/1.1" "curl/8" - -"#,
];

pub const SAMPLE_RULES: &str = r#"[
    {"host": "example.com", "path": "^/users/", "route": "/users/{id}"},
    {"host": "example.com", "path": "^/orders$", "route": "/orders", "method": "POST"}
]"#;

/// Writes the sample lines gzip-compressed to `path`.
///
/// # Errors
///
/// Returns an error if compression or the write fails.
pub fn write_gzip_log(path: &Path) -> Result<(), String> {
    let file =
        std::fs::File::create(path).map_err(|err| format!("create log failed: {}", err))?;
    let mut encoder = flate2::write::GzEncoder::new(file, flate2::Compression::default());
    for line in SAMPLE_LINES {
        encoder
            .write_all(line.as_bytes())
            .and_then(|()| encoder.write_all(b"\n"))
            .map_err(|err| format!("write log failed: {}", err))?;
    }
    encoder
        .finish()
        .map_err(|err| format!("finish gzip failed: {}", err))?;
    Ok(())
}

/// Run the `alb-path-metrics` binary in `cwd` and capture output.
///
/// # Errors
///
/// Returns an error if the binary cannot be executed.
pub fn run_cli<I, S>(cwd: &Path, args: I, envs: &[(&str, &str)]) -> Result<Output, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = cli_bin()?;
    let mut command = Command::new(bin);
    command
        .current_dir(cwd)
        .args(args)
        .env("RUST_LOG", "error")
        .env_remove("ALB_PATH_METRICS_LOG")
        .env_remove("INCLUDE_PATH_RULES")
        .env_remove("DRY_RUN")
        .env_remove("DEBUG")
        .env_remove("AWS_ACCESS_KEY_ID")
        .env_remove("AWS_SECRET_ACCESS_KEY")
        .env_remove("AWS_SESSION_TOKEN");
    for (key, value) in envs {
        command.env(key, value);
    }
    command
        .output()
        .map_err(|err| format!("run alb-path-metrics failed: {}", err))
}

fn cli_bin() -> Result<String, String> {
    option_env!("CARGO_BIN_EXE_alb-path-metrics").map_or_else(
        || Err("CARGO_BIN_EXE_alb-path-metrics missing at compile time.".to_owned()),
        |path| Ok(path.to_owned()),
    )
}

/// Formats process output for a failed assertion.
#[must_use]
pub fn describe(output: &Output) -> String {
    format!(
        "status: {}\nstdout: {}\nstderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    )
}

/// Spawn an HTTP server that answers every request with `200 OK` and
/// forwards each request body to the returned channel.
///
/// # Errors
///
/// Returns an error if the listener cannot be created.
pub fn spawn_recording_server() -> Result<(String, mpsc::Receiver<String>), String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("bind test server failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("server addr failed: {}", err))?;
    let (body_tx, body_rx) = mpsc::channel();

    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else {
                break;
            };
            drop(stream.set_read_timeout(Some(Duration::from_secs(5))));
            let Ok(reader_stream) = stream.try_clone() else {
                break;
            };
            let mut reader = BufReader::new(reader_stream);
            let mut content_length = 0usize;
            loop {
                let mut line = String::new();
                match reader.read_line(&mut line) {
                    Ok(0) | Err(_) => break,
                    Ok(_) => {}
                }
                let line = line.trim_end();
                if line.is_empty() {
                    break;
                }
                if let Some((name, value)) = line.split_once(':')
                    && name.eq_ignore_ascii_case("content-length")
                {
                    content_length = value.trim().parse().unwrap_or(0);
                }
            }
            let mut body = vec![0u8; content_length];
            if reader.read_exact(&mut body).is_err() {
                continue;
            }
            let response = "HTTP/1.1 200 OK\r\nContent-Type: text/xml\r\nContent-Length: 0\r\nConnection: close\r\n\r\n";
            if stream.write_all(response.as_bytes()).is_err() {
                continue;
            }
            drop(stream.flush());
            drop(stream.shutdown(Shutdown::Both));
            if body_tx.send(String::from_utf8_lossy(&body).into_owned()).is_err() {
                break;
            }
        }
    });

    Ok((format!("http://{}/", addr), body_rx))
}
