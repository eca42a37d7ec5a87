//! Course offering-frequency scanning.
//!
//! Walks a bounded historical window of (year, quarter) terms, fetches
//! each published schedule page once, and folds the outcomes into a
//! [`FrequencyReport`]. One missing or unreachable term never aborts
//! the scan; validation errors do.

pub mod course;
pub mod report;

pub use course::CourseCode;
pub use report::{FrequencyReport, TermOutcome, TermScan};

use tracing::{debug, warn};

use crate::error::ScheduleResult;
use crate::schedule::{Quarter, ScheduleRequest, ScheduleSource, EARLIEST_RECORDED_YEAR};

/// Default number of years a frequency scan covers.
pub const DEFAULT_CHECK_YEARS: u32 = 5;

/// Scan the historical window for offerings of `course_code`.
///
/// Years run from `as_of_year` backwards, at most `check_years` of them
/// and never before the earliest published year; within each year the
/// quarters run in canonical order. Fetches happen strictly one after
/// another.
pub async fn scan<S: ScheduleSource>(
    source: &S,
    course_code: &CourseCode,
    check_years: u32,
    as_of_year: i32,
) -> ScheduleResult<FrequencyReport> {
    let needle = course_code.canonical();
    let earliest = (as_of_year - check_years as i32 + 1).max(EARLIEST_RECORDED_YEAR);

    let mut scans = Vec::new();
    for year in (earliest..=as_of_year).rev() {
        for quarter in Quarter::ALL {
            let request =
                ScheduleRequest::from_parts(course_code.department(), quarter, year, as_of_year)?;

            let outcome = match source.fetch(&request).await {
                Ok(document) => {
                    if document.contains(&needle) {
                        debug!("{needle} offered {quarter} {year}");
                        TermOutcome::Offered
                    } else {
                        TermOutcome::NotOffered
                    }
                }
                Err(err) if err.is_per_term() => {
                    warn!(
                        "error fetching schedule for {} {quarter} {year}: {err}",
                        course_code.department()
                    );
                    TermOutcome::Failed(err)
                }
                Err(err) => return Err(err),
            };

            scans.push(TermScan {
                quarter,
                year,
                outcome,
            });
        }
    }

    Ok(FrequencyReport::from_scans(
        course_code.clone(),
        check_years,
        scans,
    ))
}
