//! Where holiday payloads come from.
//!
//! [`HolidaySource`] returns the raw response body for one year; parsing and
//! caching live in the service.  [`HttpHolidaySource`] talks to the public
//! holiday API, [`StaticHolidaySource`] serves canned bodies for offline use
//! and tests.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use al_core::errors::{Error, Result};
use al_core::settings::HolidayApiSettings;

/// Fetches the raw holiday payload of one year.
#[async_trait::async_trait]
pub trait HolidaySource: Send + Sync {
    /// Return the response body for `year`.
    ///
    /// # Errors
    /// [`Error::Fetch`] when the source is unreachable, times out, or
    /// answers with a non-success status.
    async fn fetch_year(&self, year: u16) -> Result<String>;

    /// Name used in logs.
    fn name(&self) -> &str {
        "HolidaySource"
    }
}

// ── HTTP ──────────────────────────────────────────────────────────────────────

/// Holiday API client: `GET {base_url}/v1/holidays/{year}`.
#[derive(Debug, Clone)]
pub struct HttpHolidaySource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpHolidaySource {
    /// Build a client with a per-request `timeout`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Config(format!("cannot build HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Build from the `holidays` settings section.
    pub fn from_settings(settings: &HolidayApiSettings) -> Result<Self> {
        Self::new(
            settings.base_url.clone(),
            Duration::from_secs(settings.timeout_secs),
        )
    }

    /// Endpoint for `year`.
    pub fn url(&self, year: u16) -> String {
        format!("{}/v1/holidays/{year}", self.base_url)
    }
}

#[async_trait::async_trait]
impl HolidaySource for HttpHolidaySource {
    async fn fetch_year(&self, year: u16) -> Result<String> {
        let fetch_error = |reason: String| Error::Fetch { year, reason };
        let url = self.url(year);
        tracing::debug!(%url, "requesting holiday data");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| fetch_error(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(fetch_error(format!("HTTP {}", status.as_u16())));
        }

        response.text().await.map_err(|e| fetch_error(e.to_string()))
    }

    fn name(&self) -> &str {
        "HttpHolidaySource"
    }
}

// ── Static ────────────────────────────────────────────────────────────────────

/// In-memory source with canned per-year bodies.
///
/// Years without a body answer like a missing resource (`HTTP 404`).
#[derive(Debug, Default)]
pub struct StaticHolidaySource {
    bodies: HashMap<u16, String>,
    failing: HashSet<u16>,
    delay: Option<Duration>,
    requests: AtomicUsize,
}

impl StaticHolidaySource {
    /// An empty source; every year is missing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` verbatim for `year`.
    pub fn with_body(mut self, year: u16, body: impl Into<String>) -> Self {
        self.bodies.insert(year, body.into());
        self
    }

    /// Serve a well-formed payload built from `(date, name, is_off_day)`
    /// triples for `year`.
    pub fn with_records(self, year: u16, records: &[(&str, &str, bool)]) -> Self {
        let payload: serde_json::Map<String, serde_json::Value> = records
            .iter()
            .map(|&(date, name, off)| {
                (
                    date.to_string(),
                    serde_json::json!({ "date": date, "name": name, "isOffDay": off }),
                )
            })
            .collect();
        self.with_body(year, serde_json::Value::Object(payload).to_string())
    }

    /// Fail every request for `year` with [`Error::Fetch`].
    pub fn failing_year(mut self, year: u16) -> Self {
        self.failing.insert(year);
        self
    }

    /// Sleep for `delay` before answering each request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of requests served so far, failures included.
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl HolidaySource for StaticHolidaySource {
    async fn fetch_year(&self, year: u16) -> Result<String> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.failing.contains(&year) {
            return Err(Error::Fetch {
                year,
                reason: "source unavailable".into(),
            });
        }
        self.bodies.get(&year).cloned().ok_or_else(|| Error::Fetch {
            year,
            reason: "HTTP 404".into(),
        })
    }

    fn name(&self) -> &str {
        "StaticHolidaySource"
    }
}
