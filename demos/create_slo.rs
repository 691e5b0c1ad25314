//! Example creating a metric SLO, adding a correction window and cleaning up
//!
//! Run with: `cargo run --example create_slo`

use chrono::{Duration, Utc};
use datadog_ergonomic::models::{
    SLOCorrectionCategory, SLOCorrectionCreateRequest, SLOCorrectionCreateRequestAttributes,
    SLOThreshold, SLOTimeframe, SLOType, ServiceLevelObjectiveQuery, ServiceLevelObjectiveRequest,
};
use datadog_ergonomic::{DatadogClient, Decoded, Error};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    let _ = dotenvy::dotenv();

    let client = DatadogClient::from_env()?;
    let slos = client.service_level_objectives();

    let request = ServiceLevelObjectiveRequest::builder()
        .name("checkout availability (example)")
        .type_(SLOType::Metric)
        .thresholds(vec![
            SLOThreshold::builder()
                .target(99.9)
                .warning(99.95)
                .timeframe(SLOTimeframe::ThirtyDays)
                .build(),
            SLOThreshold::new(99.5, SLOTimeframe::SevenDays),
        ])
        .query(ServiceLevelObjectiveQuery::new(
            "sum:checkout.requests{status:ok}.as_count()",
            "sum:checkout.requests{*}.as_count()",
        ))
        .tags(vec!["team:payments".to_string(), "example".to_string()])
        .build();

    println!("1. Creating SLO...");
    let created = slos.create_slo(request).await?;
    let Some(slo_id) = created
        .typed()
        .and_then(|list| list.data.as_ref())
        .and_then(|data| data.first())
        .and_then(Decoded::typed)
        .and_then(|slo| slo.id.clone())
    else {
        println!("⚠️  Response did not carry an SLO id: {created:?}");
        return Ok(());
    };
    println!("✅ Created SLO {slo_id}");

    println!("\n2. Adding a deployment correction for the last hour...");
    let now = Utc::now();
    let attributes = SLOCorrectionCreateRequestAttributes::builder()
        .slo_id(slo_id.clone())
        .category(SLOCorrectionCategory::Deployment)
        .start((now - Duration::hours(1)).timestamp())
        .end(now.timestamp())
        .description("rollout of checkout v2")
        .build();
    let correction = client
        .slo_corrections()
        .create_slo_correction(SLOCorrectionCreateRequest::new(attributes))
        .await?;
    println!("{}", serde_json::to_string_pretty(&correction)?);

    println!("\n3. Deleting the SLO...");
    match slos.delete_slo().slo_id(&slo_id).call().await {
        Ok(_) => println!("✅ Deleted"),
        // Still referenced somewhere; the error body says where
        Err(Error::Response(e)) if e.status == 409 => {
            println!("⚠️  SLO is in use: {}", e.body);
            slos.delete_slo().slo_id(&slo_id).force(true).call().await?;
            println!("✅ Force deleted");
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
