//! Example reading the monthly usage summary
//!
//! Run with: `cargo run --example usage_summary`

use chrono::{Duration, Utc};
use datadog_ergonomic::{DatadogClient, Decoded};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    let _ = dotenvy::dotenv();

    let client = DatadogClient::from_env()?;

    let end = Utc::now();
    let summary = client
        .usage_metering()
        .get_usage_summary()
        .start_month(end - Duration::days(90))
        .end_month(end)
        .call()
        .await?;

    let Some(summary) = summary.typed() else {
        println!("⚠️  Could not decode the summary");
        return Ok(());
    };

    println!("📊 Usage from {:?} to {:?}", summary.start_date, summary.end_date);
    for month in summary.usage.iter().flatten().filter_map(Decoded::typed) {
        println!(
            "- {:?}: {} infra hosts, {} APM hosts",
            month.date,
            month.infra_host_top99p.unwrap_or_default(),
            month.apm_host_top99p.unwrap_or_default()
        );
    }

    // Counters without a typed field are kept as they came
    for (name, value) in &summary.additional_properties {
        println!("  {name} = {value}");
    }

    Ok(())
}
