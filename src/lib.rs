//! quartermap library — UW time-schedule retrieval and course
//! offering-frequency analysis.
//!
//! Exposes the core modules for integration testing.

pub mod cli;
pub mod dawgpath;
pub mod error;
pub mod frequency;
pub mod schedule;
pub mod serve;
