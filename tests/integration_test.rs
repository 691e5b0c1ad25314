//! Integration tests against a live Datadog organization

use chrono::{Duration, Utc};
use datadog_ergonomic::models::{
    SLOTimeframe, SLOType, ServiceLevelObjectiveQuery, ServiceLevelObjectiveRequest, SLOThreshold,
};
use datadog_ergonomic::{DatadogClient, Decoded, ErrorKind};

/// Helper to create a client from environment variables
fn create_test_client() -> DatadogClient {
    let _ = dotenvy::dotenv();
    DatadogClient::from_env().expect("Failed to create client from environment")
}

#[tokio::test]
#[ignore = "requires Datadog API credentials"]
async fn test_list_slos() {
    let client = create_test_client();

    let result = client
        .service_level_objectives()
        .list_slos()
        .limit(5)
        .call()
        .await;

    assert!(result.is_ok(), "Failed to list SLOs: {:?}", result.err());
}

#[tokio::test]
#[ignore = "requires Datadog API credentials"]
async fn test_slo_lifecycle() {
    let client = create_test_client();
    let slos = client.service_level_objectives();

    let request = ServiceLevelObjectiveRequest::builder()
        .name("datadog-ergonomic integration test")
        .type_(SLOType::Metric)
        .thresholds(vec![SLOThreshold::new(99.0, SLOTimeframe::SevenDays)])
        .query(ServiceLevelObjectiveQuery::new(
            "sum:trace.http.request.hits{*}.as_count()",
            "sum:trace.http.request.hits{*}.as_count()",
        ))
        .tags(vec!["env:integration-test".to_string()])
        .build();

    let created = slos.create_slo(request).await.expect("Failed to create SLO");
    let slo_id = created
        .typed()
        .and_then(|list| list.data.as_ref())
        .and_then(|data| data.first())
        .and_then(Decoded::typed)
        .and_then(|slo| slo.id.clone())
        .expect("Created SLO should have an ID");

    let fetched = slos
        .get_slo()
        .slo_id(&slo_id)
        .call()
        .await
        .expect("Failed to get SLO");
    assert!(!fetched.is_unparsed(), "SLO should decode: {fetched:?}");

    let now = Utc::now();
    let history = slos
        .get_slo_history()
        .slo_id(&slo_id)
        .from_ts((now - Duration::hours(1)).timestamp())
        .to_ts(now.timestamp())
        .call()
        .await;
    assert!(history.is_ok(), "Failed to get history: {:?}", history.err());

    let deleted = slos
        .delete_slo()
        .slo_id(&slo_id)
        .force(true)
        .call()
        .await
        .expect("Failed to delete SLO");
    let deleted_ids = deleted
        .typed()
        .and_then(|d| d.data.clone())
        .unwrap_or_default();
    assert_eq!(deleted_ids, vec![slo_id]);
}

#[tokio::test]
#[ignore = "requires Datadog API credentials"]
async fn test_get_missing_slo() {
    let client = create_test_client();

    let err = client
        .service_level_objectives()
        .get_slo()
        .slo_id("0000000000000000000000000000dead")
        .call()
        .await
        .unwrap_err();

    assert_eq!(err.kind(), Some(ErrorKind::NotFound));
}

#[tokio::test]
#[ignore = "requires Datadog API credentials"]
async fn test_list_slo_corrections() {
    let client = create_test_client();

    let result = client
        .slo_corrections()
        .list_slo_correction()
        .limit(10)
        .call()
        .await;

    assert!(
        result.is_ok(),
        "Failed to list SLO corrections: {:?}",
        result.err()
    );
}

#[tokio::test]
#[ignore = "requires Datadog API credentials"]
async fn test_usage_summary() {
    let client = create_test_client();

    let end = Utc::now();
    let result = client
        .usage_metering()
        .get_usage_summary()
        .start_month(end - Duration::days(60))
        .end_month(end)
        .call()
        .await;

    assert!(
        result.is_ok(),
        "Failed to get usage summary: {:?}",
        result.err()
    );
}

#[tokio::test]
#[ignore = "requires Datadog API credentials"]
async fn test_list_synthetics_tests() {
    let client = create_test_client();

    let result = client
        .synthetics()
        .list_tests()
        .page_size(10)
        .page_number(0)
        .call()
        .await;

    assert!(result.is_ok(), "Failed to list tests: {:?}", result.err());
}
