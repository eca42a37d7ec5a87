//! Response shapes for the DawgPath API.
//!
//! The API omits keys freely, so every field defaults when absent.

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;

/// A major hit from the search endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MajorMatch {
    pub abbr: String,
    pub campus: String,
    pub description: String,
    pub id: String,
    pub is_major: bool,
    pub score: f64,
    pub title: String,
    pub url: String,
}

/// A free-text hit from the search endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TextMatch {
    pub campus: String,
    pub description: String,
    pub id: String,
    pub score: f64,
    pub title: String,
    pub url: String,
    pub is_course: Option<bool>,
    pub is_major: Option<bool>,
}

/// Parsed search response.
///
/// Course matches are passed through raw; their shape varies too much
/// across campuses to pin down.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchResult {
    pub course_matches: Vec<Value>,
    pub major_matches: Vec<MajorMatch>,
    pub text_matches: Vec<TextMatch>,
}

/// Parse a search API response body.
pub fn parse_search(json: &Value) -> Result<SearchResult> {
    serde_json::from_value(json.clone()).context("malformed search response")
}

/// Prerequisite info for one course, references flattened to course ids.
#[derive(Debug, Clone, Default)]
pub struct CoursePrereqs {
    pub course_id: String,
    pub course_title: String,
    pub prereqs: Vec<String>,
    pub postreqs: Vec<String>,
}

/// Parsed course-prerequisites response.
#[derive(Debug, Clone, Default)]
pub struct CoursePrereqsResult {
    pub course_data: Vec<CoursePrereqs>,
    /// Raw prerequisite graph, passed through unprocessed.
    pub prereq_graph: Value,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawCoursePrereqs {
    course_id: String,
    course_title: String,
    prereqs: Vec<CourseRef>,
    postreqs: Vec<CourseRef>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CourseRef {
    course_id: String,
}

/// Parse a course-prerequisites API response body.
pub fn parse_course_prereqs(json: &Value) -> Result<CoursePrereqsResult> {
    #[derive(Default, Deserialize)]
    #[serde(default)]
    struct Raw {
        course_data: Vec<RawCoursePrereqs>,
        prereq_graph: Value,
    }

    let raw: Raw = serde_json::from_value(json.clone()).context("malformed prereq response")?;

    Ok(CoursePrereqsResult {
        course_data: raw
            .course_data
            .into_iter()
            .map(|course| CoursePrereqs {
                course_id: course.course_id,
                course_title: course.course_title,
                prereqs: course.prereqs.into_iter().map(|r| r.course_id).collect(),
                postreqs: course.postreqs.into_iter().map(|r| r.course_id).collect(),
            })
            .collect(),
        prereq_graph: raw.prereq_graph,
    })
}
