use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the state database.
///
/// `day_state` holds today's recorded start time, keyed by calendar date;
/// rows for any other date are stale and purged on read. `log` is the
/// internal operations audit table.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS day_state (
            date       TEXT PRIMARY KEY,
            start_time TEXT NOT NULL,
            created_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}
