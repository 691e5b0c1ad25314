//! Example listing and searching service level objectives
//!
//! Run with: `cargo run --example list_slos`

use datadog_ergonomic::{DatadogClient, Decoded};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    let _ = dotenvy::dotenv();

    // Reads DD_API_KEY, DD_APP_KEY and optionally DD_SITE
    let client = DatadogClient::from_env()?;
    let slos = client.service_level_objectives();

    println!("📋 Service Level Objectives");
    println!("===========================");

    let response = slos.list_slos().limit(10).call().await?;
    match &response {
        Decoded::Typed(list) => {
            for entry in list.data.iter().flatten() {
                // An SLO of a type this version does not know stays raw
                let Some(slo) = entry.typed() else {
                    println!("- (unrecognized) {}", serde_json::to_string(entry)?);
                    continue;
                };
                let targets: Vec<String> = slo
                    .thresholds
                    .iter()
                    .map(|t| format!("{}% over {}", t.target, t.timeframe))
                    .collect();
                println!(
                    "- {} [{}] {} ({})",
                    slo.id.as_deref().unwrap_or("?"),
                    slo.type_,
                    slo.name,
                    targets.join(", ")
                );
            }
        }
        // A record the client could not type is still available as raw JSON
        Decoded::Unparsed(raw) => {
            println!("⚠️  Unrecognized response: {}", raw.value);
        }
    }

    println!("\n🔍 Searching for SLOs tagged env:prod...");
    let found = slos
        .search_slo()
        .query("env:prod")
        .page_size(5)
        .page_number(0)
        .call()
        .await?;
    println!("{}", serde_json::to_string_pretty(&found)?);

    Ok(())
}
