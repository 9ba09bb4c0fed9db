use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("Invalid date format: {0:?} (expected YYYY-MM-DD)")]
    InvalidDateFormat(String),

    #[error("Invalid month {month} for year {year}")]
    InvalidMonth { year: i32, month: u32 },

    #[error("Date out of supported range: {0}")]
    OutOfRange(String),
}

/// A string that names none of an enum's variants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {field} value {value:?}")]
pub struct UnknownVariant {
    pub field: &'static str,
    pub value: String,
}

/// A record from the event source that does not satisfy the event contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("Record {id}: invalid date: {source}")]
    InvalidDate {
        id: String,
        #[source]
        source: DateError,
    },

    #[error("Record {id}: unknown {field} value {value:?}")]
    UnknownVariant {
        id: String,
        field: &'static str,
        value: String,
    },

    #[error("Record {id}: field {field} is empty")]
    EmptyField { id: String, field: &'static str },

    #[error("Undecodable response: {0}")]
    Undecodable(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    #[error("Event source unavailable: {0}")]
    Unavailable(String),

    #[error("Event source timed out after {0:?}")]
    Timeout(Duration),

    #[error("Malformed record: {0}")]
    Malformed(#[from] RecordError),
}
