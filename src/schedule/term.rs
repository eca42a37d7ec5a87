//! Quarter symbols and validated term requests.

use crate::error::{ScheduleError, ScheduleResult};

/// Root URL of the published time-schedule pages.
///
/// Document layout under this root is `{QUARTER}{YEAR}/{department}.html`
/// and is owned by the publishing site, not by us.
pub const SCHEDULE_ROOT: &str = "https://www.washington.edu/students/timeschd/";

/// Earliest year with a published time schedule.
pub const EARLIEST_RECORDED_YEAR: i32 = 2003;

/// Academic quarter symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quarter {
    Win,
    Spr,
    Sum,
    Aut,
}

impl Quarter {
    /// All quarters in canonical scan order (calendar order within a year).
    pub const ALL: [Quarter; 4] = [Quarter::Win, Quarter::Spr, Quarter::Sum, Quarter::Aut];

    /// Upper-case symbol as it appears in schedule URLs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Quarter::Win => "WIN",
            Quarter::Spr => "SPR",
            Quarter::Sum => "SUM",
            Quarter::Aut => "AUT",
        }
    }

    /// Parse a quarter symbol, case-insensitive.
    pub fn parse(raw: &str) -> ScheduleResult<Quarter> {
        match raw.to_ascii_uppercase().as_str() {
            "WIN" => Ok(Quarter::Win),
            "SPR" => Ok(Quarter::Spr),
            "SUM" => Ok(Quarter::Sum),
            "AUT" => Ok(Quarter::Aut),
            _ => Err(ScheduleError::InvalidQuarter),
        }
    }
}

impl std::fmt::Display for Quarter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated (department, quarter, year) request for one schedule page.
///
/// Validation happens at construction against an explicit `as_of_year`
/// snapshot, so a multi-term scan that straddles New Year's Eve checks
/// every term against the same clock reading.
#[derive(Debug, Clone)]
pub struct ScheduleRequest {
    department: String,
    quarter: Quarter,
    year: i32,
}

impl ScheduleRequest {
    /// Validate raw user input and build a request.
    ///
    /// Checks run in order and the first violation wins: quarter symbol,
    /// year parseability, year range.
    pub fn new(
        department: &str,
        quarter: &str,
        year: &str,
        as_of_year: i32,
    ) -> ScheduleResult<Self> {
        let quarter = Quarter::parse(quarter)?;
        let year: i32 = year
            .trim()
            .parse()
            .map_err(|_| ScheduleError::InvalidYear)?;
        Self::from_parts(department, quarter, year, as_of_year)
    }

    /// Build a request from already-typed parts, validating only the
    /// year range.
    pub fn from_parts(
        department: &str,
        quarter: Quarter,
        year: i32,
        as_of_year: i32,
    ) -> ScheduleResult<Self> {
        if year < EARLIEST_RECORDED_YEAR || year > as_of_year {
            return Err(ScheduleError::YearOutOfRange {
                earliest: EARLIEST_RECORDED_YEAR,
                latest: as_of_year,
            });
        }
        Ok(Self {
            department: department.to_ascii_lowercase(),
            quarter,
            year,
        })
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn quarter(&self) -> Quarter {
        self.quarter
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Document path relative to the schedule root.
    pub fn document_path(&self) -> String {
        format!("{}{}/{}.html", self.quarter.as_str(), self.year, self.department)
    }

    /// Full document URL under the given root.
    pub fn url(&self, root: &str) -> String {
        format!("{root}{}", self.document_path())
    }
}
