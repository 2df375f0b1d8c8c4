//! Date-keyed persistence of "today's start time".
//!
//! The stored value is only valid on the calendar date it was recorded:
//! reading it on any later date deletes the stale row and reports nothing.
//! The core never sees this module; handlers read the value and pass it on
//! as a plain argument.

use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::time::parse_time;
use chrono::{Local, NaiveDate, NaiveTime};
use rusqlite::{OptionalExtension, params};

/// Return the start time recorded for `today`, if any.
/// Rows recorded on a different date are purged on the way.
pub fn today_start(pool: &mut DbPool, today: NaiveDate) -> AppResult<Option<NaiveTime>> {
    let today_str = today.format("%Y-%m-%d").to_string();

    pool.conn.execute(
        "DELETE FROM day_state WHERE date <> ?1",
        params![today_str],
    )?;

    let mut stmt = pool
        .conn
        .prepare_cached("SELECT start_time FROM day_state WHERE date = ?1")?;

    let raw: Option<String> = stmt
        .query_row(params![today_str], |row| row.get(0))
        .optional()?;

    // A row that does not parse back is treated as absent, not as a crash.
    Ok(raw.as_deref().and_then(parse_time))
}

/// Record `start` as today's start time, replacing any previous value
/// (for today or any stale date).
pub fn set_today_start(pool: &mut DbPool, today: NaiveDate, start: NaiveTime) -> AppResult<()> {
    let today_str = today.format("%Y-%m-%d").to_string();

    let tx = pool.conn.transaction()?;
    tx.execute("DELETE FROM day_state", [])?;
    tx.execute(
        "INSERT INTO day_state (date, start_time, created_at) VALUES (?1, ?2, ?3)",
        params![
            today_str,
            start.format("%H:%M").to_string(),
            Local::now().to_rfc3339()
        ],
    )?;
    tx.commit()?;

    Ok(())
}

/// Forget today's start time (and anything stale).
pub fn clear_today_start(pool: &mut DbPool) -> AppResult<()> {
    pool.conn.execute("DELETE FROM day_state", [])?;
    Ok(())
}
