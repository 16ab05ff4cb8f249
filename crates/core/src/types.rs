/// Project identifiers are the decimal rendering of the store's counter.
pub type ProjectId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Calendar dates carry no time-of-day and no timezone.
pub type CalendarDate = chrono::NaiveDate;
