//! Activity client tests against a wiremock server.

use activity_journal::client::{ActivityClient, ActivityFeed};
use activity_journal::errors::ClientError;
use activity_journal::heatmap::{Heatmap, IntensityTier};
use activity_journal::models::ActivityRange;
use activity_journal::provider::ActivityProvider;
use chrono::NaiveDate;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FIXTURE: &str = r#"{
  "range": "1y",
  "days": [
    { "date": "2025-02-07", "total": 0, "leetcode": 0, "github": 0 },
    { "date": "2025-02-08", "total": 2, "leetcode": 2 },
    { "date": "2025-02-09", "total": 5, "leetcode": 1, "github": 4 }
  ]
}"#;

fn test_client(server: &MockServer) -> ActivityClient {
    ActivityClient::new(server.uri()).expect("client builds")
}

#[tokio::test]
async fn fetch_activity_decodes_days() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/activity"))
        .and(query_param("range", "1y"))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(FIXTURE))
        .mount(&server)
        .await;

    let response = test_client(&server)
        .fetch_activity(ActivityRange::OneYear)
        .await
        .expect("activity fetch");

    assert_eq!(response.range, ActivityRange::OneYear);
    assert_eq!(response.days.len(), 3);
    assert_eq!(response.days[1].github, None);
    assert_eq!(response.days[2].total, 5);
}

#[tokio::test]
async fn fetch_activity_passes_range() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/activity"))
        .and(query_param("range", "30d"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{ "range": "30d", "days": [] }"#),
        )
        .expect(1)
        .mount(&server)
        .await;

    let response = test_client(&server)
        .fetch_activity(ActivityRange::ThirtyDays)
        .await
        .expect("activity fetch");
    assert_eq!(response.range, ActivityRange::ThirtyDays);
    assert!(response.days.is_empty());
}

#[tokio::test]
async fn non_success_status_carries_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/activity"))
        .respond_with(ResponseTemplate::new(502).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .fetch_activity(ActivityRange::NinetyDays)
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(502));
    assert!(matches!(err, ClientError::Status { ref body, .. } if body == "upstream down"));
    assert_eq!(
        err.to_string(),
        "GET /api/activity?range=90d failed (502): upstream down"
    );
}

#[tokio::test]
async fn invalid_json_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/activity"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .fetch_activity(ActivityRange::OneYear)
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Decode { .. }));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn fetched_days_feed_the_heatmap() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/activity"))
        .respond_with(ResponseTemplate::new(200).set_body_string(FIXTURE))
        .mount(&server)
        .await;

    let today = NaiveDate::from_ymd_opt(2025, 2, 9).unwrap();
    let response = test_client(&server)
        .fetch_activity(ActivityRange::OneYear)
        .await
        .expect("activity fetch");
    let heatmap = Heatmap::build(today, &response.records(today));

    let cell = heatmap.cell(today);
    assert_eq!(cell.tier, IntensityTier::High);
    assert_eq!(cell.count_label(), "5 activities");

    let yesterday = heatmap.cell(NaiveDate::from_ymd_opt(2025, 2, 8).unwrap());
    assert_eq!(yesterday.tier, IntensityTier::Low);

    let rest = heatmap
        .cells()
        .filter(|cell| cell.date < NaiveDate::from_ymd_opt(2025, 2, 8).unwrap());
    assert!(rest.into_iter().all(|cell| cell.tier == IntensityTier::Empty));
}

#[tokio::test]
async fn trailing_slash_in_base_url_is_ignored() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/activity"))
        .respond_with(ResponseTemplate::new(200).set_body_string(FIXTURE))
        .expect(1)
        .mount(&server)
        .await;

    let client = ActivityClient::new(format!("{}/", server.uri())).unwrap();
    assert!(!client.base_url().ends_with('/'));
    client.fetch_activity(ActivityRange::OneYear).await.unwrap();
}

#[tokio::test]
async fn days_without_dates_are_skipped_not_fatal() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/activity"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"range":"1y","days":[{"date":"2025-02-09","total":5},{"total":3},{"date":null,"total":2}]}"#,
        ))
        .mount(&server)
        .await;

    let today = NaiveDate::from_ymd_opt(2025, 2, 9).unwrap();
    let response = test_client(&server)
        .fetch_activity(ActivityRange::OneYear)
        .await
        .expect("partially malformed days still decode");
    assert_eq!(response.days.len(), 3);

    let heatmap = Heatmap::build(today, &response.records(today));
    assert_eq!(heatmap.lookup.len(), 1);
    assert_eq!(heatmap.cell(today).count, 5);
    assert_eq!(heatmap.cell(today).tier, IntensityTier::High);
}

#[tokio::test]
async fn feed_reuses_fresh_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/activity"))
        .respond_with(ResponseTemplate::new(200).set_body_string(FIXTURE))
        .expect(1)
        .mount(&server)
        .await;

    let feed = ActivityFeed::new(test_client(&server), Duration::from_secs(600));
    let first = feed.activity(ActivityRange::OneYear).await.unwrap();
    let second = feed.activity(ActivityRange::OneYear).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn feed_refetches_once_stale() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/activity"))
        .respond_with(ResponseTemplate::new(200).set_body_string(FIXTURE))
        .expect(2)
        .mount(&server)
        .await;

    let feed = ActivityFeed::new(test_client(&server), Duration::ZERO);
    feed.activity(ActivityRange::OneYear).await.unwrap();
    feed.activity(ActivityRange::OneYear).await.unwrap();
}

#[tokio::test]
async fn feed_retries_once_then_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/activity"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(2)
        .mount(&server)
        .await;

    let feed = ActivityFeed::new(test_client(&server), Duration::from_secs(600));
    let err = feed.activity(ActivityRange::OneYear).await.unwrap_err();
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn feed_serves_previous_response_when_refresh_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/activity"))
        .respond_with(ResponseTemplate::new(200).set_body_string(FIXTURE))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/activity"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let feed = ActivityFeed::new(test_client(&server), Duration::ZERO);
    let fresh = feed.activity(ActivityRange::OneYear).await.unwrap();
    let stale = feed.activity(ActivityRange::OneYear).await.unwrap();
    assert_eq!(fresh, stale);
}
