use chrono::{NaiveDate, NaiveDateTime};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Current wall-clock instant, without timezone (all arithmetic in this
/// crate is naive local time).
pub fn now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

