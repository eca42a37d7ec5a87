//! Offering-frequency report built from per-term scan outcomes.

use std::collections::HashMap;

use crate::error::ScheduleError;
use crate::schedule::Quarter;

use super::course::CourseCode;

/// What happened for one scanned (year, quarter) pair.
#[derive(Debug)]
pub enum TermOutcome {
    /// Document fetched and the course code appears in it.
    Offered,
    /// Document fetched, course code absent.
    NotOffered,
    /// Fetch failed. The term still counts toward the denominator.
    Failed(ScheduleError),
}

/// One scanned term.
#[derive(Debug)]
pub struct TermScan {
    pub quarter: Quarter,
    pub year: i32,
    pub outcome: TermOutcome,
}

impl TermScan {
    /// `"{QUARTER} {year}"` label used in report listings.
    pub fn label(&self) -> String {
        format!("{} {}", self.quarter, self.year)
    }
}

/// Aggregated offering frequency for one course over a scan window.
#[derive(Debug)]
pub struct FrequencyReport {
    course_code: CourseCode,
    check_years: u32,
    total_quarters_checked: u32,
    offerings: Vec<String>,
    by_quarter: HashMap<Quarter, u32>,
    failures: Vec<(String, ScheduleError)>,
}

impl FrequencyReport {
    /// Fold per-term outcomes into a report.
    ///
    /// Every scanned term counts toward the denominator, failed fetches
    /// included: the total reflects terms examined, not terms reached.
    pub fn from_scans(course_code: CourseCode, check_years: u32, scans: Vec<TermScan>) -> Self {
        let total_quarters_checked = scans.len() as u32;
        let mut offerings = Vec::new();
        let mut by_quarter: HashMap<Quarter, u32> = HashMap::new();
        let mut failures = Vec::new();

        for scan in scans {
            let label = scan.label();
            match scan.outcome {
                TermOutcome::Offered => {
                    *by_quarter.entry(scan.quarter).or_insert(0) += 1;
                    offerings.push(label);
                }
                TermOutcome::NotOffered => {}
                TermOutcome::Failed(err) => failures.push((label, err)),
            }
        }

        Self {
            course_code,
            check_years,
            total_quarters_checked,
            offerings,
            by_quarter,
            failures,
        }
    }

    pub fn course_code(&self) -> &CourseCode {
        &self.course_code
    }

    pub fn total_quarters_checked(&self) -> u32 {
        self.total_quarters_checked
    }

    /// Offering labels in scan order (most recent year first).
    pub fn offerings(&self) -> &[String] {
        &self.offerings
    }

    pub fn by_quarter(&self) -> &HashMap<Quarter, u32> {
        &self.by_quarter
    }

    /// Terms whose fetch failed, with the error that killed each one.
    pub fn failures(&self) -> &[(String, ScheduleError)] {
        &self.failures
    }

    /// Render the report text.
    ///
    /// Both listings sort lexicographically by label, so AUT precedes
    /// WIN and years compare as strings. Downstream consumers diff this
    /// output; the ordering is part of the contract.
    pub fn render(&self) -> String {
        let mut lines = vec![format!(
            "Course {}:",
            self.course_code.canonical().to_uppercase()
        )];

        if self.offerings.is_empty() {
            lines.push("No offerings found for course in the time range.".to_string());
            return lines.join("\n");
        }

        lines.push(format!(
            "Offered {} times for {} quarters in the last {} years.",
            self.offerings.len(),
            self.total_quarters_checked,
            self.check_years
        ));

        lines.push("\nFrequency by quarter:".to_string());
        let mut quarters: Vec<(&Quarter, &u32)> = self.by_quarter.iter().collect();
        quarters.sort_by_key(|(quarter, _)| quarter.as_str());
        for (quarter, count) in quarters {
            lines.push(format!("- {quarter}: {count} times"));
        }

        lines.push("\nQuarters offered:".to_string());
        let mut offered = self.offerings.clone();
        offered.sort();
        for label in offered {
            lines.push(format!("- {label}"));
        }

        lines.join("\n")
    }
}
