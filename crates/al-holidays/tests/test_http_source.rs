//! `HttpHolidaySource` against a local one-shot HTTP server.

use std::sync::Arc;
use std::time::{Duration, Instant};

use al_core::errors::Error;
use al_holidays::{parse_year_payload, HolidayService, HolidaySource, HolidayType, HttpHolidaySource};
use al_time::Date;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

const BODY_2025: &str = r#"{
    "2025-01-01": {"date": "2025-01-01", "name": "元旦", "isOffDay": true},
    "2025-01-26": {"date": "2025-01-26", "name": "春节", "isOffDay": false}
}"#;

/// Canned reply of the local server.
struct Reply {
    status: &'static str,
    body: &'static str,
    stall: Option<Duration>,
}

impl Reply {
    fn ok(body: &'static str) -> Self {
        Self {
            status: "200 OK",
            body,
            stall: None,
        }
    }

    fn status(status: &'static str) -> Self {
        Self {
            status,
            body: "",
            stall: None,
        }
    }

    fn stalled(stall: Duration) -> Self {
        Self {
            stall: Some(stall),
            ..Self::ok(BODY_2025)
        }
    }
}

/// Serve `reply` to every connection until the test ends; returns the base URL.
///
/// Requests for anything but `/v1/holidays/2025` get a 404.
async fn serve(reply: Reply) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let reply = Arc::new(reply);

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };
            let reply = Arc::clone(&reply);
            tokio::spawn(async move {
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut buf).await {
                        Ok(0) | Err(_) => return,
                        Ok(n) => request.extend_from_slice(&buf[..n]),
                    }
                }
                if let Some(stall) = reply.stall {
                    tokio::time::sleep(stall).await;
                }

                let (status, body) = if request.starts_with(b"GET /v1/holidays/2025 ") {
                    (reply.status, reply.body)
                } else {
                    ("404 Not Found", "")
                };
                let response = format!(
                    "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    format!("http://{addr}")
}

fn http_service(base_url: &str, timeout: Duration) -> HolidayService {
    let source = HttpHolidaySource::new(base_url, timeout).unwrap();
    HolidayService::new(Arc::new(source))
}

#[tokio::test]
async fn successful_response_installs_the_year() {
    let base_url = serve(Reply::ok(BODY_2025)).await;
    let service = http_service(&base_url, Duration::from_secs(5));

    assert!(service.fetch_year(2025).await);
    assert!(service.is_year_cached(2025));
    assert_eq!(service.cached_record_count(2025), Some(2));
    assert_eq!(
        service.classify(date(2025, 1, 1)),
        (HolidayType::Holiday, "元旦".to_string())
    );
    // Sunday makeup workday.
    assert_eq!(service.classify(date(2025, 1, 26)).0, HolidayType::WorkDay);
}

#[tokio::test]
async fn server_error_keeps_the_previous_dataset() {
    let base_url = serve(Reply::status("500 Internal Server Error")).await;
    let service = http_service(&base_url, Duration::from_secs(5));
    let earlier = parse_year_payload(
        2025,
        r#"{"2025-05-01": {"name": "劳动节", "isOffDay": true}}"#,
    )
    .unwrap();
    service.install_year(2025, earlier);

    assert!(!service.fetch_year(2025).await);
    assert_eq!(service.cached_record_count(2025), Some(1));
    assert_eq!(
        service.classify(date(2025, 5, 1)),
        (HolidayType::Holiday, "劳动节".to_string())
    );

    match service.try_fetch_year(2025).await {
        Err(Error::Fetch { year, reason }) => {
            assert_eq!(year, 2025);
            assert!(reason.contains("500"), "{reason}");
        }
        other => panic!("expected a fetch error, got {other:?}"),
    }
    assert_eq!(service.cached_record_count(2025), Some(1));
}

#[tokio::test]
async fn missing_year_is_a_fetch_error() {
    let base_url = serve(Reply::ok(BODY_2025)).await;
    let source = HttpHolidaySource::new(&base_url, Duration::from_secs(5)).unwrap();

    match source.fetch_year(2031).await {
        Err(Error::Fetch { year, reason }) => {
            assert_eq!(year, 2031);
            assert!(reason.contains("404"), "{reason}");
        }
        other => panic!("expected a fetch error, got {other:?}"),
    }
}

#[tokio::test]
async fn stalled_server_hits_the_client_timeout() {
    let base_url = serve(Reply::stalled(Duration::from_secs(5))).await;
    let service = http_service(&base_url, Duration::from_secs(1));

    let started = Instant::now();
    let result = service.try_fetch_year(2025).await;
    let elapsed = started.elapsed();

    assert!(
        matches!(result, Err(Error::Fetch { year: 2025, .. })),
        "{result:?}"
    );
    assert!(elapsed < Duration::from_secs(4), "took {elapsed:?}");
    assert!(!service.is_year_cached(2025));
}
