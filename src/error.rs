//! Error taxonomy for schedule retrieval and scanning.

/// Errors that can occur while validating, fetching, or scanning
/// published schedule pages.
///
/// The first three variants are validation errors and always terminal
/// for the call that raised them. `PageNotFound` and `Unreachable` are
/// tolerated per term inside a frequency scan and fatal everywhere else.
#[derive(thiserror::Error, Debug)]
pub enum ScheduleError {
    #[error("Quarter must be WIN, SPR, SUM, or AUT")]
    InvalidQuarter,

    #[error("Year must be a number.")]
    InvalidYear,

    #[error("Year must be between {earliest} and {latest}")]
    YearOutOfRange { earliest: i32, latest: i32 },

    #[error("no schedule page at {url}")]
    PageNotFound { url: String },

    #[error("failed to reach {url}: {source}")]
    Unreachable {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ScheduleError {
    /// Whether a frequency scan may swallow this error and move on to
    /// the next term. Validation errors never qualify.
    pub fn is_per_term(&self) -> bool {
        matches!(
            self,
            ScheduleError::PageNotFound { .. } | ScheduleError::Unreachable { .. }
        )
    }
}

/// Convenience result type.
pub type ScheduleResult<T> = Result<T, ScheduleError>;
