use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Accepts one connection, answers with `status_line` and `body`, and
/// resolves to the raw request text.
pub(crate) async fn serve_once(
    status_line: &'static str,
    body: &'static [u8],
) -> Result<(String, JoinHandle<String>), String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .map_err(|err| format!("bind failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("addr failed: {}", err))?;
    let handle = tokio::spawn(async move {
        let Ok((mut stream, _)) = listener.accept().await else {
            return String::new();
        };
        let mut request = Vec::new();
        let mut buffer = [0_u8; 4096];
        loop {
            let Ok(read) = stream.read(&mut buffer).await else {
                break;
            };
            if read == 0 {
                break;
            }
            request.extend_from_slice(buffer.get(..read).unwrap_or_default());
            if request_complete(&request) {
                break;
            }
        }
        let head = format!(
            "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            status_line,
            body.len()
        );
        drop(stream.write_all(head.as_bytes()).await);
        drop(stream.write_all(body).await);
        drop(stream.shutdown().await);
        String::from_utf8_lossy(&request).into_owned()
    });
    Ok((format!("http://{}/", addr), handle))
}

fn request_complete(request: &[u8]) -> bool {
    let text = String::from_utf8_lossy(request);
    let Some((head, body)) = text.split_once("\r\n\r\n") else {
        return false;
    };
    let length = head
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);
    body.len() >= length
}
