/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Calendar date without a time component (publish dates).
pub type Date = chrono::NaiveDate;

/// Wire format for dates in query strings, form bodies and form inputs.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Option<Date> {
    Date::parse_from_str(value.trim(), DATE_FORMAT).ok()
}
