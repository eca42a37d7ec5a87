//! `quartermap frequency <course_code>` — offering-frequency report.

use anyhow::Result;
use chrono::Datelike;

use crate::frequency::{self, CourseCode};
use crate::schedule::{ScheduleClient, DEFAULT_TIMEOUT_MS};

/// Run the frequency command.
pub async fn run(course_code: &str, years: u32) -> Result<()> {
    let as_of = chrono::Utc::now().year();
    let code = CourseCode::normalize(course_code);

    let client = ScheduleClient::new(DEFAULT_TIMEOUT_MS);
    let report = frequency::scan(&client, &code, years, as_of).await?;

    println!("{}", report.render());
    Ok(())
}
