//! HTTP middleware with retry support using reqwest-middleware.
//!
//! The client only ever issues one HTTP call per operation. Retrying
//! transient failures (network errors, 429, 5xx) is left to middleware
//! such as `reqwest-retry`, plugged in through `http_client`.
//!
//! Run with: `cargo run --example http_middleware_retry`

use datadog_ergonomic::{DatadogClient, Result};
use reqwest_middleware::ClientBuilder as MiddlewareClientBuilder;
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("datadog_ergonomic=debug")
        .init();
    let _ = dotenvy::dotenv();

    println!("=== HTTP Middleware with Retry Example ===\n");

    // Up to 3 retries with exponential delays between 100ms and 30s
    let retry_policy = ExponentialBackoff::builder()
        .retry_bounds(Duration::from_millis(100), Duration::from_secs(30))
        .build_with_max_retries(3);

    let http_client = MiddlewareClientBuilder::new(reqwest::Client::new())
        .with(RetryTransientMiddleware::new_with_policy(retry_policy))
        .build();

    let client = DatadogClient::builder()
        .api_key(std::env::var("DD_API_KEY").unwrap_or_default())
        .app_key(std::env::var("DD_APP_KEY").unwrap_or_default())
        .maybe_site(std::env::var("DD_SITE").ok())
        .http_client(http_client)
        .build()?;

    match client
        .service_level_objectives()
        .list_slos()
        .limit(1)
        .call()
        .await
    {
        Ok(slos) => println!("\n✅ Success: {}", serde_json::to_string(&slos)?),
        Err(e) if e.is_retryable() => {
            eprintln!("\n❌ Still failing after retries: {e}");
            if let Some(wait) = e.retry_after() {
                eprintln!("   server asks to wait {}s", wait.as_secs());
            }
        }
        Err(e) => eprintln!("\n❌ Error: {e}"),
    }

    Ok(())
}
