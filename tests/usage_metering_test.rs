//! Mock tests for the usage metering endpoints

use chrono::{TimeZone, Utc};
use datadog_ergonomic::{DatadogClient, Error, ErrorKind};
use mockito::{Matcher, Server};
use pretty_assertions::assert_eq;
use serde_json::json;

fn create_mock_client(mock_server: &Server) -> DatadogClient {
    DatadogClient::builder()
        .api_key("test-api-key")
        .app_key("test-app-key")
        .base_url(mock_server.url())
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_usage_summary() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/api/v1/usage/summary")
        .match_header("accept", "application/json;datetime-format=rfc3339")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("start_month".into(), "2024-01-01T00:00:00Z".into()),
            Matcher::UrlEncoded("end_month".into(), "2024-03-01T00:00:00Z".into()),
            Matcher::UrlEncoded("include_org_details".into(), "true".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "start_date": "2024-01-01T00:00:00+00:00",
                "end_date": "2024-03-01T00:00:00+00:00",
                "infra_host_top99p_sum": 120,
                "synthetics_check_calls_count_sum": 9000,
                "usage": [
                    {"date": "2024-01-01T00:00:00+00:00", "infra_host_top99p": 60},
                    {"date": "2024-02-01T00:00:00+00:00", "infra_host_top99p": 60}
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = create_mock_client(&server);

    let response = client
        .usage_metering()
        .get_usage_summary()
        .start_month(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
        .end_month(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap())
        .include_org_details(true)
        .call()
        .await
        .unwrap();

    mock.assert_async().await;
    let summary = response.typed().unwrap();
    assert_eq!(summary.infra_host_top99p_sum, Some(120));
    assert_eq!(summary.usage.as_ref().unwrap().len(), 2);
    assert_eq!(
        summary.additional_properties["synthetics_check_calls_count_sum"],
        json!(9000)
    );
}

#[tokio::test]
async fn test_usage_summary_range_checked_locally() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = create_mock_client(&server);

    let err = client
        .usage_metering()
        .get_usage_summary()
        .start_month(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap())
        .end_month(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
        .call()
        .await
        .unwrap_err();

    mock.assert_async().await;
    assert!(matches!(err, Error::Validation(_)));
}

#[tokio::test]
async fn test_cspm_usage() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/api/v1/usage/cspm")
        .match_query(Matcher::UrlEncoded(
            "start_hr".into(),
            "2024-01-01T05:30:00.500Z".into(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "usage": [{
                    "hour": "2024-01-01T06:00:00+00:00",
                    "host_count": 12.0,
                    "aws_host_count": null,
                    "org_name": "main"
                }]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = create_mock_client(&server);

    let start = Utc.with_ymd_and_hms(2024, 1, 1, 5, 30, 0).unwrap()
        + chrono::Duration::milliseconds(500);
    let response = client
        .usage_metering()
        .get_usage_cloud_security_posture_management()
        .start_hr(start)
        .call()
        .await
        .unwrap();

    mock.assert_async().await;
    let usage = response.typed().unwrap().usage.as_ref().unwrap();
    let hour = usage[0].typed().unwrap();
    assert_eq!(hour.host_count, Some(Some(12.0)));
    assert_eq!(hour.aws_host_count, Some(None));
    assert_eq!(hour.org_name.as_deref(), Some("main"));
}

#[tokio::test]
async fn test_usage_forbidden() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/api/v1/usage/cspm")
        .match_query(Matcher::Any)
        .with_status(403)
        .with_header("content-type", "application/json")
        .with_body(r#"{"errors": ["Forbidden"]}"#)
        .create_async()
        .await;

    let client = create_mock_client(&server);

    let err = client
        .usage_metering()
        .get_usage_cloud_security_posture_management()
        .start_hr(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
        .call()
        .await
        .unwrap_err();

    mock.assert_async().await;
    assert_eq!(err.kind(), Some(ErrorKind::Auth));
}
