//! Month-by-month navigation with on-demand holiday fetching.

use al_core::errors::Result;
use al_time::{Date, YearMonth};

use crate::generator::{CalendarGridGenerator, MonthView};

/// Tracks the displayed month and regenerates it on every move.
///
/// Moving into a year without cached holiday data fetches that year first,
/// so the new grid already reflects it.  A failed fetch is logged by the
/// service and the grid falls back to the weekend rule.
#[derive(Debug, Clone)]
pub struct MonthNavigator {
    generator: CalendarGridGenerator,
    current: YearMonth,
    today: Date,
    preload_years_ahead: u16,
}

impl MonthNavigator {
    /// Start on the month containing `today`.
    pub fn new(generator: CalendarGridGenerator, today: Date) -> Self {
        Self {
            generator,
            current: YearMonth::of(today),
            today,
            preload_years_ahead: 1,
        }
    }

    /// Set how many years after today's are fetched by
    /// [`preload_around_today`](Self::preload_around_today).
    pub fn with_preload_years_ahead(mut self, years: u16) -> Self {
        self.preload_years_ahead = years;
        self
    }

    /// Displayed month.
    pub fn current_month(&self) -> YearMonth {
        self.current
    }

    /// Reference day used for the today flag.
    pub fn today(&self) -> Date {
        self.today
    }

    /// The generator in use.
    pub fn generator(&self) -> &CalendarGridGenerator {
        &self.generator
    }

    /// Update the reference day, e.g. after midnight.  The displayed month
    /// is unchanged.
    pub fn set_today(&mut self, today: Date) {
        self.today = today;
    }

    /// The displayed month, regenerated from the current cache.
    pub fn current_view(&self) -> Result<MonthView> {
        self.generator.view(self.current, self.today)
    }

    /// Move one month back.
    pub async fn previous_month(&mut self) -> Result<MonthView> {
        let target = self.current.previous()?;
        self.show(target).await
    }

    /// Move one month forward.
    pub async fn next_month(&mut self) -> Result<MonthView> {
        let target = self.current.next()?;
        self.show(target).await
    }

    /// Mouse-wheel navigation: a positive `delta` moves back, a negative one
    /// forward, zero stays put.
    pub async fn scroll(&mut self, delta: i32) -> Result<MonthView> {
        match delta.signum() {
            1 => self.previous_month().await,
            -1 => self.next_month().await,
            _ => self.current_view(),
        }
    }

    /// Jump back to the month containing today.
    pub async fn go_to_today(&mut self) -> Result<MonthView> {
        self.show(YearMonth::of(self.today)).await
    }

    /// Fetch today's year and the configured number of following years.
    /// Returns how many fetches succeeded.
    pub async fn preload_around_today(&self) -> usize {
        let first = self.today.year();
        let last = first
            .saturating_add(self.preload_years_ahead)
            .min(YearMonth::MAX_YEAR);
        let years: Vec<u16> = (first..=last).collect();
        self.generator.holidays().preload(&years).await
    }

    async fn show(&mut self, target: YearMonth) -> Result<MonthView> {
        let holidays = self.generator.holidays();
        if !holidays.is_year_cached(target.year()) {
            tracing::debug!(month = %target, "holiday year not cached; fetching before regeneration");
            holidays.fetch_year(target.year()).await;
        }
        let view = self.generator.view(target, self.today)?;
        self.current = target;
        Ok(view)
    }
}
