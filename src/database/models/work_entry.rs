use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::utils::logging::log_store_operation;

/// One recorded (date, hours) fact. Rows are append-only; entries sharing a
/// date are summed at query time, never merged on write.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct WorkEntry {
    pub id: i64,
    /// ISO `YYYY-MM-DD` string
    pub date: String,
    pub hours: i64,
}

impl WorkEntry {
    pub async fn insert(
        pool: &sqlx::SqlitePool,
        date: &str,
        hours: i64,
    ) -> Result<(), sqlx::Error> {
        log_store_operation("insert", Some(date));
        sqlx::query("INSERT INTO work_hours (date, hours) VALUES (?, ?)")
            .bind(date)
            .bind(hours)
            .execute(pool)
            .await?;
        Ok(())
    }

    pub async fn find_by_date(
        pool: &sqlx::SqlitePool,
        date: &str,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, WorkEntry>(
            "SELECT id, date, hours FROM work_hours WHERE date = ? ORDER BY id",
        )
        .bind(date)
        .fetch_all(pool)
        .await
    }

    /// Total hours recorded for one exact date; 0 when no rows match.
    pub async fn sum_by_date(pool: &sqlx::SqlitePool, date: &str) -> Result<i64, sqlx::Error> {
        log_store_operation("sum_by_date", Some(date));
        let total: Option<i64> =
            sqlx::query_scalar("SELECT SUM(hours) FROM work_hours WHERE date = ?")
                .bind(date)
                .fetch_one(pool)
                .await?;
        Ok(total.unwrap_or(0))
    }

    /// Total hours for all rows whose date falls in the given calendar month.
    pub async fn sum_by_month(
        pool: &sqlx::SqlitePool,
        year: i32,
        month: u32,
    ) -> Result<i64, sqlx::Error> {
        log_store_operation("sum_by_month", None);
        let total: Option<i64> = sqlx::query_scalar(
            "SELECT SUM(hours) FROM work_hours WHERE strftime('%Y', date) = ? AND strftime('%m', date) = ?",
        )
        .bind(format!("{year:04}"))
        .bind(format!("{month:02}"))
        .fetch_one(pool)
        .await?;
        Ok(total.unwrap_or(0))
    }

    /// Total hours for rows with `start <= date <= end`. ISO strings order
    /// the same way the dates do, so BETWEEN over the text column is exact.
    pub async fn sum_by_range(
        pool: &sqlx::SqlitePool,
        start: &str,
        end: &str,
    ) -> Result<i64, sqlx::Error> {
        log_store_operation("sum_by_range", None);
        let total: Option<i64> =
            sqlx::query_scalar("SELECT SUM(hours) FROM work_hours WHERE date BETWEEN ? AND ?")
                .bind(start)
                .bind(end)
                .fetch_one(pool)
                .await?;
        Ok(total.unwrap_or(0))
    }
}
