use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};

use super::{StoreError, WorkHoursStore};
use crate::utils::logging::log_store_operation;

/// Process-local backend: one accumulated total per date, ordered by date so
/// month and range sums walk a contiguous slice of the map. Not persisted
/// across restarts. A single lock serializes all access.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<NaiveDate, i64>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_entries<R>(&self, f: impl FnOnce(&mut BTreeMap<NaiveDate, i64>) -> R) -> R {
        let mut map = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut map)
    }
}

#[async_trait]
impl WorkHoursStore for MemoryStore {
    async fn insert(&self, date: NaiveDate, hours: i64) -> Result<(), StoreError> {
        log_store_operation("insert", None);
        // Saturate rather than overflow; totals this large are already
        // nonsense and must not panic the handler.
        self.with_entries(|map| {
            let total = map.entry(date).or_insert(0);
            *total = total.saturating_add(hours);
        });
        Ok(())
    }

    async fn sum_by_date(&self, date: NaiveDate) -> Result<i64, StoreError> {
        log_store_operation("sum_by_date", None);
        Ok(self.with_entries(|map| map.get(&date).copied().unwrap_or(0)))
    }

    async fn sum_by_month(&self, year: i32, month: u32) -> Result<i64, StoreError> {
        log_store_operation("sum_by_month", None);
        let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
            return Ok(0);
        };
        let total = self.with_entries(|map| {
            map.range(first..)
                .take_while(|(d, _)| d.year() == year && d.month() == month)
                .map(|(_, h)| h)
                .sum()
        });
        Ok(total)
    }

    async fn sum_by_range(&self, start: NaiveDate, end: NaiveDate) -> Result<i64, StoreError> {
        log_store_operation("sum_by_range", None);
        // BTreeMap::range panics on an inverted range; the contract says it
        // sums to zero instead.
        if start > end {
            return Ok(0);
        }
        Ok(self.with_entries(|map| map.range(start..=end).map(|(_, h)| h).sum()))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
