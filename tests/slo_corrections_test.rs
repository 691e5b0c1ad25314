//! Mock tests for the SLO correction endpoints

use datadog_ergonomic::models::{
    SLOCorrectionCategory, SLOCorrectionCreateRequest, SLOCorrectionCreateRequestAttributes,
    SLOCorrectionUpdateRequest, SLOCorrectionUpdateRequestAttributes,
};
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

fn correction_json() -> serde_json::Value {
    json!({
        "data": {
            "id": "corr-1",
            "type": "correction",
            "attributes": {
                "slo_id": "abc123",
                "category": "Deployment",
                "start": 1_700_000_000,
                "end": 1_700_003_600,
                "rrule": null,
                "duration": null,
                "creator": {"handle": "ops@example.com", "name": null}
            }
        }
    })
}

#[tokio::test]
async fn test_create_correction() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("POST", "/api/v1/slo/correction")
        .match_body(Matcher::Json(json!({
            "data": {
                "type": "correction",
                "attributes": {
                    "slo_id": "abc123",
                    "category": "Deployment",
                    "start": 1_700_000_000,
                    "end": 1_700_003_600,
                    "timezone": "UTC"
                }
            }
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(correction_json().to_string())
        .create_async()
        .await;

    let client = create_mock_client(&server);

    let attributes = SLOCorrectionCreateRequestAttributes::builder()
        .slo_id("abc123")
        .category(SLOCorrectionCategory::Deployment)
        .start(1_700_000_000)
        .end(1_700_003_600)
        .timezone("UTC")
        .build();

    let response = client
        .slo_corrections()
        .create_slo_correction(SLOCorrectionCreateRequest::new(attributes))
        .await
        .unwrap();

    mock.assert_async().await;
    let correction = response.typed().unwrap().data.as_ref().unwrap();
    assert_eq!(correction.id.as_deref(), Some("corr-1"));
    let attributes = correction.attributes.as_ref().unwrap();
    assert_eq!(attributes.category, Some(SLOCorrectionCategory::Deployment));
    assert_eq!(attributes.rrule, Some(None));
    let creator = attributes.creator.clone().flatten().unwrap();
    assert_eq!(creator.name, Some(None));
}

#[tokio::test]
async fn test_create_correction_rejected_locally() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("POST", "/api/v1/slo/correction")
        .expect(0)
        .create_async()
        .await;

    let client = create_mock_client(&server);

    // A recurring correction without a duration
    let attributes = SLOCorrectionCreateRequestAttributes::builder()
        .slo_id("abc123")
        .category(SLOCorrectionCategory::ScheduledMaintenance)
        .start(1_700_000_000)
        .rrule("FREQ=WEEKLY;BYDAY=SU")
        .build();

    let err = client
        .slo_corrections()
        .create_slo_correction(SLOCorrectionCreateRequest::new(attributes))
        .await
        .unwrap_err();

    mock.assert_async().await;
    assert!(matches!(err, Error::Validation(_)));
}

#[tokio::test]
async fn test_delete_correction_no_content() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("DELETE", "/api/v1/slo/correction/corr-1")
        .match_header("accept", "*/*")
        .with_status(204)
        .create_async()
        .await;

    let client = create_mock_client(&server);

    client
        .slo_corrections()
        .delete_slo_correction("corr-1")
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_delete_correction_forbidden() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("DELETE", "/api/v1/slo/correction/corr-1")
        .with_status(403)
        .with_header("content-type", "application/json")
        .with_body(r#"{"errors": ["Forbidden"]}"#)
        .create_async()
        .await;

    let client = create_mock_client(&server);

    let err = client
        .slo_corrections()
        .delete_slo_correction("corr-1")
        .await
        .unwrap_err();

    mock.assert_async().await;
    assert_eq!(err.kind(), Some(ErrorKind::Auth));
    assert_eq!(err.model().unwrap().errors(), ["Forbidden".to_string()]);
}

#[tokio::test]
async fn test_get_correction() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/api/v1/slo/correction/corr-1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(correction_json().to_string())
        .create_async()
        .await;

    let client = create_mock_client(&server);

    let response = client
        .slo_corrections()
        .get_slo_correction("corr-1")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(serde_json::to_value(&response).unwrap(), correction_json());
}

#[tokio::test]
async fn test_list_corrections() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/api/v1/slo/correction")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("offset".into(), "25".into()),
            Matcher::UrlEncoded("limit".into(), "25".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "data": [correction_json()["data"]],
                "meta": {"page": {"total_count": 26, "total_filtered_count": 26}}
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = create_mock_client(&server);

    let response = client
        .slo_corrections()
        .list_slo_correction()
        .offset(25)
        .limit(25)
        .call()
        .await
        .unwrap();

    mock.assert_async().await;
    let list = response.typed().unwrap();
    assert_eq!(list.data.as_ref().unwrap().len(), 1);
    assert_eq!(
        list.meta
            .as_ref()
            .and_then(|m| m.page.as_ref())
            .and_then(|p| p.total_count),
        Some(26)
    );
}

#[tokio::test]
async fn test_update_correction() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("PATCH", "/api/v1/slo/correction/corr-1")
        .match_body(Matcher::Json(json!({
            "data": {
                "type": "correction",
                "attributes": {"description": "rollback window"}
            }
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(correction_json().to_string())
        .create_async()
        .await;

    let client = create_mock_client(&server);

    let body = SLOCorrectionUpdateRequest::new(
        SLOCorrectionUpdateRequestAttributes::builder()
            .description("rollback window")
            .build(),
    );

    let response = client
        .slo_corrections()
        .update_slo_correction("corr-1", body)
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(!response.is_unparsed());
}

#[tokio::test]
async fn test_update_correction_not_found() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("PATCH", "/api/v1/slo/correction/gone")
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(r#"{"errors": ["Correction not found"]}"#)
        .create_async()
        .await;

    let client = create_mock_client(&server);

    let err = client
        .slo_corrections()
        .update_slo_correction("gone", SLOCorrectionUpdateRequest::default())
        .await
        .unwrap_err();

    mock.assert_async().await;
    assert_eq!(err.kind(), Some(ErrorKind::NotFound));
}
