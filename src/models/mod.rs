pub mod leave_status;
pub mod start_option;

/// Serialize `NaiveTime` fields as canonical `HH:MM` strings
/// (the wire/JSON form used across the CLI).
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::Serializer;

    pub fn serialize<S>(t: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&t.format("%H:%M").to_string())
    }
}
