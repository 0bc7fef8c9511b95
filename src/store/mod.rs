//! The work-hours store: an append-only log of (date, hours) entries with
//! three summation queries.
//!
//! Two interchangeable backends satisfy the same contract: [`SqliteStore`]
//! persists rows in SQLite and aggregates per query, [`MemoryStore`] keeps a
//! running total per date for the process lifetime. Given the same operation
//! sequence both return identical answers.

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Backend failure surfaced to the user as `Error: <details>`.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage failure: {0}")]
    Database(#[from] sqlx::Error),
}

/// Contract every backend must honor.
///
/// `insert` never fails for a valid date and non-negative hours on a healthy
/// backend; the three sum queries return 0 for dates, months, and ranges with
/// no entries, never an error. `sum_by_range` is inclusive on both ends and
/// returns 0 when `start > end`.
#[async_trait]
pub trait WorkHoursStore: Send + Sync {
    async fn insert(&self, date: NaiveDate, hours: i64) -> Result<(), StoreError>;

    async fn sum_by_date(&self, date: NaiveDate) -> Result<i64, StoreError>;

    async fn sum_by_month(&self, year: i32, month: u32) -> Result<i64, StoreError>;

    async fn sum_by_range(&self, start: NaiveDate, end: NaiveDate) -> Result<i64, StoreError>;

    /// Cheap connectivity probe for the health endpoint.
    async fn ping(&self) -> Result<(), StoreError>;

    /// Short backend name reported by the health endpoint.
    fn backend_name(&self) -> &'static str;
}

/// Encodes a date the way every backend keys it.
pub(crate) fn encode_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
