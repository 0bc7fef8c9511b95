use async_trait::async_trait;
use chrono::NaiveDate;

use super::{encode_date, StoreError, WorkHoursStore};
use crate::database::connection::DatabaseManager;
use crate::database::models::WorkEntry;

/// Append-only SQLite backend. Every insert adds a row; aggregation happens
/// per query with `SUM(hours)`.
#[derive(Clone)]
pub struct SqliteStore {
    db: DatabaseManager,
}

impl SqliteStore {
    pub fn new(db: DatabaseManager) -> Self {
        Self { db }
    }
}

#[async_trait]
impl WorkHoursStore for SqliteStore {
    async fn insert(&self, date: NaiveDate, hours: i64) -> Result<(), StoreError> {
        WorkEntry::insert(&self.db.pool, &encode_date(date), hours).await?;
        Ok(())
    }

    async fn sum_by_date(&self, date: NaiveDate) -> Result<i64, StoreError> {
        Ok(WorkEntry::sum_by_date(&self.db.pool, &encode_date(date)).await?)
    }

    async fn sum_by_month(&self, year: i32, month: u32) -> Result<i64, StoreError> {
        Ok(WorkEntry::sum_by_month(&self.db.pool, year, month).await?)
    }

    async fn sum_by_range(&self, start: NaiveDate, end: NaiveDate) -> Result<i64, StoreError> {
        // BETWEEN over ISO strings already yields an empty set for an
        // inverted range; the guard keeps the contract explicit.
        if start > end {
            return Ok(0);
        }
        Ok(WorkEntry::sum_by_range(&self.db.pool, &encode_date(start), &encode_date(end)).await?)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").fetch_one(&self.db.pool).await?;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "sqlite"
    }
}
