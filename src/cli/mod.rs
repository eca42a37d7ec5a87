//! CLI subcommand implementations for the quartermap binary.

pub mod frequency_cmd;
pub mod login_cmd;
pub mod schedule_cmd;
pub mod search_cmd;
pub mod serve_cmd;
