//! Year-keyed holiday cache.
//!
//! Each year's records sit behind an `Arc` and are never mutated after
//! installation; replacing a year swaps the `Arc`.  Readers therefore see
//! either the whole previous dataset or the whole new one.  The lock is held
//! only long enough to clone or swap a pointer.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::record::YearRecords;

/// Shared map from year to that year's records.
#[derive(Debug, Default)]
pub struct YearHolidayCache {
    years: RwLock<HashMap<u16, Arc<YearRecords>>>,
}

impl YearHolidayCache {
    /// An empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of `year`'s records, if cached.
    pub fn get(&self, year: u16) -> Option<Arc<YearRecords>> {
        self.years.read().get(&year).cloned()
    }

    /// Install `records` for `year`, replacing any earlier dataset.
    pub fn install(&self, year: u16, records: YearRecords) {
        let records = Arc::new(records);
        let previous = self.years.write().insert(year, records);
        // Drop the old dataset after releasing the lock.
        drop(previous);
    }

    /// Return `true` if `year` has a dataset.
    pub fn contains(&self, year: u16) -> bool {
        self.years.read().contains_key(&year)
    }

    /// Drop every year.
    pub fn clear(&self) {
        let old = std::mem::take(&mut *self.years.write());
        drop(old);
    }

    /// Cached years in ascending order.
    pub fn years(&self) -> Vec<u16> {
        let mut years: Vec<u16> = self.years.read().keys().copied().collect();
        years.sort_unstable();
        years
    }
}
