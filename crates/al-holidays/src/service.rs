//! Holiday classification backed by the year cache.

use std::sync::Arc;

use al_core::errors::Result;
use al_core::settings::HolidayApiSettings;
use al_time::Date;
use futures::future::join_all;

use crate::cache::YearHolidayCache;
use crate::record::{parse_year_payload, HolidayType, YearRecords};
use crate::source::{HolidaySource, HttpHolidaySource};

/// Classifies dates against the official schedule, fetching it year by year.
///
/// Safe to share behind an `Arc`: fetches for any years, the same year
/// included, may run concurrently with each other and with `classify`.
pub struct HolidayService {
    source: Arc<dyn HolidaySource>,
    cache: YearHolidayCache,
}

impl std::fmt::Debug for HolidayService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HolidayService")
            .field("source", &self.source.name())
            .field("cached_years", &self.cache.years())
            .finish()
    }
}

impl HolidayService {
    /// A service with an empty cache reading from `source`.
    pub fn new(source: Arc<dyn HolidaySource>) -> Self {
        Self {
            source,
            cache: YearHolidayCache::new(),
        }
    }

    /// A service reading from the configured HTTP endpoint.
    pub fn from_settings(settings: &HolidayApiSettings) -> Result<Self> {
        Ok(Self::new(Arc::new(HttpHolidaySource::from_settings(
            settings,
        )?)))
    }

    // ── Fetching ──────────────────────────────────────────────────────────────

    /// Fetch, parse, and install `year`, returning the record count.
    ///
    /// On error the cache is left exactly as it was.
    pub async fn try_fetch_year(&self, year: u16) -> Result<usize> {
        let body = self.source.fetch_year(year).await?;
        let records = parse_year_payload(year, &body)?;
        Ok(self.install_year(year, records))
    }

    /// Fetch and install `year`.  Failures are logged and reported as
    /// `false`; classification of that year keeps using whatever was cached
    /// before, or the weekend rule.
    pub async fn fetch_year(&self, year: u16) -> bool {
        match self.try_fetch_year(year).await {
            Ok(records) => {
                tracing::info!(year, records, source = self.source.name(), "holiday data installed");
                true
            }
            Err(e) => {
                tracing::warn!(year, source = self.source.name(), error = %e, "holiday data unavailable");
                false
            }
        }
    }

    /// Fetch every year in `years` concurrently and wait for all of them.
    /// Returns the number of successful fetches.
    pub async fn preload(&self, years: &[u16]) -> usize {
        let results = join_all(years.iter().map(|&year| self.fetch_year(year))).await;
        let installed = results.into_iter().filter(|ok| *ok).count();
        tracing::debug!(?years, installed, "preload finished");
        installed
    }

    // ── Classification ────────────────────────────────────────────────────────

    /// Classify `date`, returning its type and holiday name.
    ///
    /// A cached record decides: a day off is a [`HolidayType::Holiday`]
    /// unless it is an unnamed weekend, which stays a
    /// [`HolidayType::RestDay`]; a working record is a
    /// [`HolidayType::WorkDay`].  Without a record, weekends are rest days and
    /// everything else is [`HolidayType::None`].
    pub fn classify(&self, date: Date) -> (HolidayType, String) {
        let record = self
            .cache
            .get(date.year())
            .and_then(|records| records.get(&date).cloned());

        match record {
            Some(r) if r.is_off_day => {
                if date.is_weekend() && r.name.is_empty() {
                    (HolidayType::RestDay, String::new())
                } else {
                    (HolidayType::Holiday, r.name)
                }
            }
            Some(r) => (HolidayType::WorkDay, r.name),
            None if date.is_weekend() => (HolidayType::RestDay, String::new()),
            None => (HolidayType::None, String::new()),
        }
    }

    /// Return `true` if `date` is a holiday or a rest day.
    pub fn is_rest_day(&self, date: Date) -> bool {
        self.classify(date).0.is_day_off()
    }

    // ── Cache inspection ──────────────────────────────────────────────────────

    /// Return `true` if `year` has a dataset.  Never touches the network.
    pub fn is_year_cached(&self, year: u16) -> bool {
        self.cache.contains(year)
    }

    /// Number of records cached for `year`.
    pub fn cached_record_count(&self, year: u16) -> Option<usize> {
        self.cache.get(year).map(|records| records.len())
    }

    /// Cached years in ascending order.
    pub fn cached_years(&self) -> Vec<u16> {
        self.cache.years()
    }

    /// Install an already parsed dataset for `year`, replacing any earlier
    /// one.  Returns the record count.
    pub fn install_year(&self, year: u16, records: YearRecords) -> usize {
        let count = records.len();
        self.cache.install(year, records);
        count
    }

    /// Drop every cached year.
    pub fn clear_cache(&self) {
        self.cache.clear();
        tracing::info!("holiday cache cleared");
    }
}
