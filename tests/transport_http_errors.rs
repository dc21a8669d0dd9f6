// HTTP-level failures (4xx/5xx) resolve to failure records carrying the
// status code and response body, never an error or panic.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use posprint::{LabelBuilder, LabelClient, ReceiptClient};

/// Serve every incoming request with a canned error response.
async fn spawn_error_server(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            let Ok((mut stream, _)) = listener.accept().await else {
                break;
            };
            tokio::spawn(async move {
                // Drain the full request before answering so the
                // client's write side is not reset mid-body.
                let mut buf = Vec::new();
                let mut chunk = [0u8; 1024];
                loop {
                    match stream.read(&mut chunk).await {
                        Ok(0) => break,
                        Ok(n) => {
                            buf.extend_from_slice(&chunk[..n]);
                            if request_complete(&buf) {
                                break;
                            }
                        }
                        Err(_) => return,
                    }
                }

                let response = format!(
                    "HTTP/1.1 {status_line}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            });
        }
    });

    format!("http://{addr}")
}

fn request_complete(buf: &[u8]) -> bool {
    let Some(header_end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
        return false;
    };
    let headers = String::from_utf8_lossy(&buf[..header_end]);
    let content_length = headers
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse::<usize>().ok())?
        })
        .unwrap_or(0);
    buf.len() >= header_end + 4 + content_length
}

#[tokio::test]
async fn receipt_calls_surface_server_errors() {
    let base = spawn_error_server("500 Internal Server Error", "printer jammed").await;
    let client = ReceiptClient::new(&base);

    let outcome = client.print_commands(&[]).await;
    assert!(!outcome.success);
    assert!(outcome.message.contains("500"));
    assert!(outcome.message.contains("printer jammed"));

    let mut builder = posprint::ReceiptBuilder::new();
    builder.text("rejected");
    let outcome = client.print(builder).await;
    assert!(!outcome.success);
    assert!(outcome.message.contains("500"));

    let selected = client.select_printer("EPSON TM-T20").await;
    assert!(!selected.success);
    assert!(selected.message.contains("500"));
    assert!(selected.printer.is_none());

    let current = client.selected_printer().await;
    assert!(!current.success);
    assert!(current.message.contains("500"));

    let list = client.printers().await;
    assert!(!list.success);
    assert!(list.printers.is_empty());
}

#[tokio::test]
async fn label_calls_surface_server_errors() {
    let base = spawn_error_server("503 Service Unavailable", "spooler offline").await;
    let client = LabelClient::new(&base);

    let outcome = client.print(LabelBuilder::default()).await;
    assert!(!outcome.success);
    assert!(outcome.message.contains("503"));
    assert!(outcome.message.contains("spooler offline"));

    let outcome = client.print_zpl("^XA^XZ", None, 1).await;
    assert!(!outcome.success);
    assert!(outcome.message.contains("503"));

    let outcome = client.print_raw("AAAA", Some("Zebra"), 2).await;
    assert!(!outcome.success);
    assert!(outcome.message.contains("503"));

    let selected = client.select_printer("Zebra").await;
    assert!(!selected.success);
    assert!(selected.message.contains("503"));
    assert!(selected.printer.is_none());

    let current = client.selected_printer().await;
    assert!(!current.success);
    assert!(current.message.contains("503"));

    let list = client.printers().await;
    assert!(!list.success);
    assert!(list.printers.is_empty());
}

#[tokio::test]
async fn client_errors_carry_the_4xx_status() {
    let base = spawn_error_server("404 Not Found", "no such printer").await;
    let client = LabelClient::new(&base);

    let outcome = client.print_job(&LabelBuilder::default().build().await.unwrap()).await;
    assert!(!outcome.success);
    assert!(outcome.message.contains("404"));
    assert!(outcome.message.contains("no such printer"));
}
