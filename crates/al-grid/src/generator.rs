//! Month grid generation.
//!
//! A grid always shows six Monday-first weeks: the tail of the previous
//! month, every day of the requested month, then the head of the next month,
//! 42 cells in all.

use std::sync::Arc;

use al_core::errors::Result;
use al_core::settings::DisplayMode;
use al_holidays::HolidayService;
use al_lunar::annotate;
use al_time::{Date, YearMonth};

use crate::day::CalendarDay;
use crate::labels::month_title;

/// Cells in every grid.
pub const GRID_CELLS: usize = 42;

/// A month as handed to the view layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthView {
    /// Displayed month.
    pub month: YearMonth,
    /// Header text, e.g. `2024年10月`.
    pub title: String,
    /// The 42 cells, or `None` when the display mode hides the grid.
    pub grid: Option<Vec<CalendarDay>>,
}

/// Builds month grids from the holiday service and the lunisolar annotator.
#[derive(Debug, Clone)]
pub struct CalendarGridGenerator {
    holidays: Arc<HolidayService>,
    mode: DisplayMode,
}

impl CalendarGridGenerator {
    /// A full-grid generator.
    pub fn new(holidays: Arc<HolidayService>) -> Self {
        Self::with_mode(holidays, DisplayMode::FullGrid)
    }

    /// A generator for the given display mode.
    pub fn with_mode(holidays: Arc<HolidayService>, mode: DisplayMode) -> Self {
        Self { holidays, mode }
    }

    /// The shared holiday service.
    pub fn holidays(&self) -> &Arc<HolidayService> {
        &self.holidays
    }

    /// Display mode used by [`view`](Self::view).
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// The 42 cells for `year`-`month`, in date order, flagged against
    /// `today`.
    ///
    /// Any month [`YearMonth`] can represent produces a full grid; dates
    /// outside the lunisolar table just get an empty lunar text.
    ///
    /// # Errors
    /// [`Error::Date`](al_core::Error::Date) if `year`/`month` is not a valid
    /// [`YearMonth`].
    pub fn generate_month(&self, year: u16, month: u8, today: Date) -> Result<Vec<CalendarDay>> {
        self.generate(YearMonth::new(year, month)?, today)
    }

    /// As [`generate_month`](Self::generate_month), for a [`YearMonth`].
    pub fn generate(&self, month: YearMonth, today: Date) -> Result<Vec<CalendarDay>> {
        let first = month.first_day();
        let leading = (first.weekday().ordinal() - 1) as i32;
        let start = first.add_days(-leading)?;
        let mut cells = Vec::with_capacity(GRID_CELLS);
        for offset in 0..GRID_CELLS as i32 {
            let date = start.add_days(offset)?;
            cells.push(self.cell(date, month, today));
        }
        Ok(cells)
    }

    /// The month as a [`MonthView`]; the grid is left out in
    /// [`DisplayMode::ClockOnly`].
    pub fn view(&self, month: YearMonth, today: Date) -> Result<MonthView> {
        let grid = if self.mode.shows_grid() {
            Some(self.generate(month, today)?)
        } else {
            None
        };
        Ok(MonthView {
            month,
            title: month_title(month),
            grid,
        })
    }

    fn cell(&self, date: Date, month: YearMonth, today: Date) -> CalendarDay {
        let (holiday_type, holiday_name) = self.holidays.classify(date);
        CalendarDay {
            day: date.day_of_month(),
            date,
            is_current_month: YearMonth::of(date) == month,
            is_today: date == today,
            is_weekend: date.is_weekend(),
            lunar_text: annotate(date),
            holiday_type,
            holiday_name,
        }
    }
}
