//! Process-level wiring.

use std::sync::Arc;

use al_core::errors::Result;
use al_core::logging::init_tracing;
use al_core::settings::Settings;
use al_grid::{CalendarGridGenerator, MonthNavigator, MonthView};
use al_holidays::{HolidayService, HolidaySource, HttpHolidaySource};
use al_time::Date;

/// One holiday service and one navigator, built from [`Settings`].
///
/// The service is created here and handed to the grid explicitly; nothing
/// is kept in global state.
#[derive(Debug)]
pub struct Almanac {
    settings: Settings,
    holidays: Arc<HolidayService>,
    navigator: MonthNavigator,
}

impl Almanac {
    /// Load settings from files and the environment, install the log
    /// subscriber, and build against the configured holiday API.
    pub fn bootstrap() -> Result<Self> {
        let settings = Settings::load()?;
        init_tracing(&settings.logging.filter);
        Self::from_settings(settings)
    }

    /// Build against the configured holiday API, starting on the host's
    /// current month.
    pub fn from_settings(settings: Settings) -> Result<Self> {
        settings.validate()?;
        let source = HttpHolidaySource::from_settings(&settings.holidays)?;
        Self::with_source(settings, Arc::new(source), Date::today()?)
    }

    /// Build against any holiday source, starting on the month of `today`.
    pub fn with_source(
        settings: Settings,
        source: Arc<dyn HolidaySource>,
        today: Date,
    ) -> Result<Self> {
        settings.validate()?;
        tracing::debug!(source = source.name(), mode = ?settings.display.mode, %today, "building almanac");
        let holidays = Arc::new(HolidayService::new(source));
        let generator = CalendarGridGenerator::with_mode(holidays.clone(), settings.display.mode);
        let navigator = MonthNavigator::new(generator, today)
            .with_preload_years_ahead(settings.holidays.preload_years_ahead);
        Ok(Self {
            settings,
            holidays,
            navigator,
        })
    }

    /// Preload today's year and the configured following years, then return
    /// the first view.
    pub async fn start(&mut self) -> Result<MonthView> {
        let installed = self.navigator.preload_around_today().await;
        tracing::info!(installed, cached = ?self.holidays.cached_years(), "almanac started");
        self.navigator.current_view()
    }

    /// Settings in effect.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The shared holiday service.
    pub fn holidays(&self) -> &Arc<HolidayService> {
        &self.holidays
    }

    /// Month navigation.
    pub fn navigator(&self) -> &MonthNavigator {
        &self.navigator
    }

    /// Month navigation, mutably.
    pub fn navigator_mut(&mut self) -> &mut MonthNavigator {
        &mut self.navigator
    }
}
