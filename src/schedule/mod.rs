//! Published time-schedule retrieval.
//!
//! A [`ScheduleRequest`] validates a (department, quarter, year) triple
//! and knows its document URL; a [`ScheduleClient`] fetches the raw
//! page text. The [`ScheduleSource`] trait is the seam the frequency
//! scanner works against.

pub mod client;
pub mod term;

pub use client::{ScheduleClient, DEFAULT_TIMEOUT_MS};
pub use term::{Quarter, ScheduleRequest, EARLIEST_RECORDED_YEAR, SCHEDULE_ROOT};

use async_trait::async_trait;

use crate::error::ScheduleResult;

/// Source of schedule documents.
///
/// `ScheduleClient` is the real implementation; tests substitute canned
/// sources.
#[async_trait]
pub trait ScheduleSource {
    /// Fetch the raw document for a validated request.
    async fn fetch(&self, request: &ScheduleRequest) -> ScheduleResult<String>;
}

#[async_trait]
impl ScheduleSource for ScheduleClient {
    async fn fetch(&self, request: &ScheduleRequest) -> ScheduleResult<String> {
        ScheduleClient::fetch(self, request).await
    }
}
