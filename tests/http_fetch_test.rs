mod common;

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread;

use common::{BoardTest, fixture_path};
use ticketboard::{Config, HttpSource, TicketSource};

/// Serve `count` requests with a fixed status and body, then stop.
/// Returns the endpoint URL.
fn serve(status: &'static str, body: String, count: usize) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind test server");
    let addr = listener.local_addr().unwrap();

    thread::spawn(move || {
        for stream in listener.incoming().take(count) {
            let Ok(mut stream) = stream else { continue };

            // Drain the request head
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut line = String::new();
            while reader.read_line(&mut line).is_ok_and(|n| n > 0) {
                if line == "\r\n" {
                    break;
                }
                line.clear();
            }

            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });

    format!("http://{addr}/api/tickets")
}

fn fixture_body() -> String {
    std::fs::read_to_string(fixture_path()).unwrap()
}

fn quick_config() -> Config {
    Config {
        timeout: 5,
        connect_timeout: 2,
        ..Default::default()
    }
}

#[tokio::test]
async fn test_http_source_fetches_dataset() {
    let endpoint = serve("200 OK", fixture_body(), 1);
    let source = HttpSource::new(&endpoint, &quick_config()).unwrap();

    let dataset = source.fetch().await.unwrap();
    assert_eq!(dataset.tickets.len(), 5);
    assert_eq!(dataset.users.len(), 2);
    assert_eq!(dataset.tickets[0].user_id, "usr-1");
}

#[tokio::test]
async fn test_http_source_error_status_is_fetch_failure() {
    let endpoint = serve("503 Service Unavailable", "{}".to_string(), 1);
    let source = HttpSource::new(&endpoint, &quick_config()).unwrap();

    let err = source.fetch().await.unwrap_err();
    assert!(err.is_fetch_failure());
    assert!(err.to_string().contains("503"));
}

#[tokio::test]
async fn test_http_source_malformed_payload_is_fetch_failure() {
    let endpoint = serve("200 OK", r#"{"tickets": "nope"}"#.to_string(), 1);
    let source = HttpSource::new(&endpoint, &quick_config()).unwrap();

    let err = source.fetch().await.unwrap_err();
    assert!(err.is_fetch_failure());
    assert!(err.to_string().contains("malformed payload"));
}

#[test]
fn test_grid_reads_configured_endpoint() {
    let board = BoardTest::new();
    let endpoint = serve("200 OK", fixture_body(), 1);

    board.run_success(&["config", "set", "endpoint", &endpoint]);
    let value = board.run_json(&["grid", "-g", "user"]);
    assert_eq!(value["grouping"], "user");
    assert_eq!(value["columns"].as_array().unwrap().len(), 3);
}

#[test]
fn test_grid_reads_endpoint_from_env() {
    let board = BoardTest::new();
    let endpoint = serve("200 OK", fixture_body(), 1);

    let output = board
        .command()
        .env("TICKETBOARD_ENDPOINT", &endpoint)
        .args(["users", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 2);
}
