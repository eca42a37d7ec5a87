//! Frequency scanner integration tests: canned sources for the scan
//! policy, a wiremock server for the full client-to-report path.

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use quartermap::error::{ScheduleError, ScheduleResult};
use quartermap::frequency::{self, CourseCode};
use quartermap::schedule::{Quarter, ScheduleClient, ScheduleRequest, ScheduleSource};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const AS_OF: i32 = 2024;

/// Canned source: returns a document containing "cse143" for the listed
/// terms, a filler document otherwise, and records every term fetched.
struct StubSource {
    offered: HashSet<(Quarter, i32)>,
    fetched: Mutex<Vec<(Quarter, i32)>>,
}

impl StubSource {
    fn offering(terms: &[(Quarter, i32)]) -> Self {
        Self {
            offered: terms.iter().copied().collect(),
            fetched: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ScheduleSource for StubSource {
    async fn fetch(&self, request: &ScheduleRequest) -> ScheduleResult<String> {
        let term = (request.quarter(), request.year());
        self.fetched.lock().unwrap().push(term);

        if self.offered.contains(&term) {
            Ok("<pre>CSE 143 cse143 Computer Programming II</pre>".to_string())
        } else {
            Ok("<pre>no such course this term</pre>".to_string())
        }
    }
}

/// Canned source where every fetch dies.
struct DeadSource;

#[async_trait]
impl ScheduleSource for DeadSource {
    async fn fetch(&self, request: &ScheduleRequest) -> ScheduleResult<String> {
        Err(ScheduleError::PageNotFound {
            url: request.url("https://stub/"),
        })
    }
}

#[tokio::test]
async fn test_scan_reports_exact_offerings() {
    let source = StubSource::offering(&[(Quarter::Win, 2021), (Quarter::Aut, 2020)]);
    let code = CourseCode::normalize("CSE143");

    let report = frequency::scan(&source, &code, 5, AS_OF).await.unwrap();

    assert_eq!(report.total_quarters_checked(), 20);
    assert_eq!(report.offerings(), ["WIN 2021", "AUT 2020"]);
    assert_eq!(report.by_quarter().len(), 2);
    assert_eq!(report.by_quarter()[&Quarter::Aut], 1);
    assert_eq!(report.by_quarter()[&Quarter::Win], 1);

    let expected = "Course CSE143:\n\
                    Offered 2 times for 20 quarters in the last 5 years.\n\
                    \n\
                    Frequency by quarter:\n\
                    - AUT: 1 times\n\
                    - WIN: 1 times\n\
                    \n\
                    Quarters offered:\n\
                    - AUT 2020\n\
                    - WIN 2021";
    assert_eq!(report.render(), expected);
}

#[tokio::test]
async fn test_scan_walks_window_newest_first() {
    let source = StubSource::offering(&[]);
    let code = CourseCode::normalize("cse143");

    frequency::scan(&source, &code, 3, AS_OF).await.unwrap();

    let fetched = source.fetched.lock().unwrap();
    assert_eq!(fetched.len(), 12);
    assert_eq!(fetched[0], (Quarter::Win, 2024));
    assert_eq!(fetched[3], (Quarter::Aut, 2024));
    assert_eq!(fetched[4], (Quarter::Win, 2023));
    assert_eq!(fetched[11], (Quarter::Aut, 2022));
}

#[tokio::test]
async fn test_scan_window_clamps_to_earliest_recorded_year() {
    let source = StubSource::offering(&[]);
    let code = CourseCode::normalize("cse143");

    // 2024 back through 2003 is 22 years, no matter how many were asked.
    let report = frequency::scan(&source, &code, 30, AS_OF).await.unwrap();
    assert_eq!(report.total_quarters_checked(), 4 * 22);

    let fetched = source.fetched.lock().unwrap();
    assert_eq!(*fetched.last().unwrap(), (Quarter::Aut, 2003));
}

#[tokio::test]
async fn test_scan_survives_every_fetch_failing() {
    let code = CourseCode::normalize("cse143");
    let report = frequency::scan(&DeadSource, &code, 5, AS_OF).await.unwrap();

    assert_eq!(report.total_quarters_checked(), 20);
    assert!(report.offerings().is_empty());
    assert_eq!(report.failures().len(), 20);
    assert_eq!(
        report.render(),
        "Course CSE143:\nNo offerings found for course in the time range."
    );
}

#[tokio::test]
async fn test_by_quarter_counts_match_offerings() {
    let source = StubSource::offering(&[
        (Quarter::Win, 2024),
        (Quarter::Win, 2023),
        (Quarter::Spr, 2023),
        (Quarter::Aut, 2021),
    ]);
    let code = CourseCode::normalize("cse143");

    let report = frequency::scan(&source, &code, 5, AS_OF).await.unwrap();

    let total: u32 = report.by_quarter().values().sum();
    assert_eq!(total, report.offerings().len() as u32);
    assert_eq!(report.by_quarter()[&Quarter::Win], 2);
    assert_eq!(report.by_quarter()[&Quarter::Spr], 1);
    assert_eq!(report.by_quarter()[&Quarter::Aut], 1);
}

#[tokio::test]
async fn test_scan_against_http_client_mixes_hits_and_missing_terms() {
    let server = MockServer::start().await;

    // Two published pages contain the course; every other term 404s.
    for term_path in ["/WIN2021/cse.html", "/AUT2020/cse.html"] {
        Mock::given(method("GET"))
            .and(path(term_path))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("<pre>cse142 cse143 cse154</pre>"),
            )
            .mount(&server)
            .await;
    }

    let client = ScheduleClient::with_root(&format!("{}/", server.uri()), 5_000);
    let code = CourseCode::normalize("cse 143");
    let report = frequency::scan(&client, &code, 5, AS_OF).await.unwrap();

    assert_eq!(report.total_quarters_checked(), 20);
    assert_eq!(report.offerings(), ["WIN 2021", "AUT 2020"]);
    assert_eq!(report.failures().len(), 18);
}
