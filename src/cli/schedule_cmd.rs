//! `quartermap schedule <department> <quarter> <year>` — print a raw
//! schedule page.

use anyhow::Result;
use chrono::Datelike;

use crate::schedule::{ScheduleClient, ScheduleRequest, DEFAULT_TIMEOUT_MS};

/// Run the schedule command.
pub async fn run(department: &str, quarter: &str, year: &str) -> Result<()> {
    let as_of = chrono::Utc::now().year();
    let request = ScheduleRequest::new(department, quarter, year, as_of)?;

    let client = ScheduleClient::new(DEFAULT_TIMEOUT_MS);
    let document = client.fetch(&request).await?;

    println!("{document}");
    Ok(())
}
