//! Main client for interacting with the Datadog API

use bon::bon;
use reqwest_middleware::ClientWithMiddleware;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

use crate::apis::{
    ServiceLevelObjectiveCorrectionsApi, ServiceLevelObjectivesApi, SyntheticsApi,
    UsageMeteringApi,
};
use crate::configuration::{server_url, AuthHeaders, Configuration, ConfigurationParts};
use crate::error::{Error, Result};
use crate::security::SecretString;

/// SDK version for User-Agent header
const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");
const SDK_NAME: &str = env!("CARGO_PKG_NAME");

/// Default timeout for API requests
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Default connection timeout
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Main client for interacting with the Datadog API
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct DatadogClient {
    configuration: Arc<Configuration>,
}

#[bon]
impl DatadogClient {
    /// Create a new Datadog client
    ///
    /// The server is picked by `server_index` (see
    /// [`SERVERS`](crate::configuration::SERVERS)) with `server_variables`
    /// substituted in, unless `base_url` is given. `site` and `subdomain`
    /// are shorthands for the variables of the same name and win over
    /// entries in `server_variables`. `http_client` replaces the
    /// default transport, e.g. with one carrying retry middleware; `timeout`
    /// and `connect_timeout` only apply to the default transport.
    #[builder]
    pub fn new(
        #[builder(into)] api_key: Option<SecretString>,
        #[builder(into)] app_key: Option<SecretString>,
        #[builder(into)] site: Option<String>,
        #[builder(into)] subdomain: Option<String>,
        #[builder(default)] server_index: usize,
        #[builder(default)] server_variables: BTreeMap<String, String>,
        #[builder(into)] base_url: Option<String>,
        timeout: Option<Duration>,
        connect_timeout: Option<Duration>,
        #[builder(into)] user_agent: Option<String>,
        http_client: Option<ClientWithMiddleware>,
        #[builder(default = true)] compress: bool,
        #[builder(default)] debug: bool,
        #[builder(default)] default_headers: BTreeMap<String, String>,
        #[builder(default)] auth_headers: AuthHeaders,
    ) -> Result<Self> {
        let base_url = match base_url {
            Some(base_url) => Url::parse(&base_url).map_err(|e| {
                Error::Configuration(format!("invalid base URL '{base_url}': {e}"))
            })?,
            None => {
                let mut variables = server_variables;
                variables.extend(
                    [("site", site), ("subdomain", subdomain)]
                        .into_iter()
                        .filter_map(|(name, value)| value.map(|v| (name.to_string(), v))),
                );
                server_url(server_index, &variables)?
            }
        };

        let http = match http_client {
            Some(http) => http,
            None => {
                // Build HTTP client with sensible defaults
                let mut client_builder = reqwest::Client::builder()
                    .timeout(timeout.unwrap_or(DEFAULT_TIMEOUT))
                    .connect_timeout(connect_timeout.unwrap_or(DEFAULT_CONNECT_TIMEOUT))
                    .pool_max_idle_per_host(10)
                    .pool_idle_timeout(Duration::from_secs(90));
                if !compress {
                    client_builder = client_builder.no_gzip().no_brotli().no_deflate();
                }
                let client = client_builder.build().map_err(|e| {
                    Error::Configuration(format!("failed to build HTTP client: {e}"))
                })?;
                reqwest_middleware::ClientBuilder::new(client).build()
            }
        };

        // Construct User-Agent with SDK info
        let user_agent = user_agent.unwrap_or_else(|| format!("{SDK_NAME}/{SDK_VERSION} (Rust)"));

        let configuration = Configuration::new(ConfigurationParts {
            base_url,
            api_key,
            app_key,
            auth_headers,
            user_agent,
            default_headers,
            compress,
            debug,
            http,
        })?;

        Ok(Self {
            configuration: Arc::new(configuration),
        })
    }

    /// Create a new Datadog client from environment variables
    ///
    /// Reads from:
    /// - `DD_API_KEY`: Required API key
    /// - `DD_APP_KEY`: Required application key
    /// - `DD_SITE`: Optional site (defaults to `datadoghq.com`)
    pub fn from_env() -> Result<Self> {
        use std::env;

        let api_key = env::var("DD_API_KEY").map_err(|_| {
            Error::Configuration("DD_API_KEY environment variable not set".to_string())
        })?;

        let app_key = env::var("DD_APP_KEY").map_err(|_| {
            Error::Configuration("DD_APP_KEY environment variable not set".to_string())
        })?;

        Self::builder()
            .api_key(api_key)
            .app_key(app_key)
            .maybe_site(env::var("DD_SITE").ok())
            .build()
    }

    /// Get the underlying API configuration
    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    pub fn service_level_objectives(&self) -> ServiceLevelObjectivesApi {
        ServiceLevelObjectivesApi::new(Arc::clone(&self.configuration))
    }

    pub fn slo_corrections(&self) -> ServiceLevelObjectiveCorrectionsApi {
        ServiceLevelObjectiveCorrectionsApi::new(Arc::clone(&self.configuration))
    }

    pub fn usage_metering(&self) -> UsageMeteringApi {
        UsageMeteringApi::new(Arc::clone(&self.configuration))
    }

    pub fn synthetics(&self) -> SyntheticsApi {
        SyntheticsApi::new(Arc::clone(&self.configuration))
    }
}
