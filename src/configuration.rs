//! Server selection and shared request settings

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT_ENCODING, USER_AGENT};
use reqwest_middleware::ClientWithMiddleware;
use std::collections::BTreeMap;
use std::fmt;
use url::Url;

use crate::error::{Error, Result};
use crate::security::{Redactor, SecretString};

/// Default header carrying the API key
pub const DEFAULT_API_KEY_HEADER: &str = "DD-API-KEY";
/// Default header carrying the application key
pub const DEFAULT_APP_KEY_HEADER: &str = "DD-APPLICATION-KEY";

/// A templated URL variable and the values it accepts
#[derive(Debug, Clone, Copy)]
pub struct ServerVariable {
    pub name: &'static str,
    pub default_value: &'static str,
    /// Allowed values; empty means any value is accepted
    pub enum_values: &'static [&'static str],
}

/// A server URL template such as `https://{subdomain}.{site}`
#[derive(Debug, Clone, Copy)]
pub struct ServerConfiguration {
    pub url: &'static str,
    pub description: &'static str,
    pub variables: &'static [ServerVariable],
}

/// Regional sites the platform runs in
pub const SITES: &[&str] = &[
    "datadoghq.com",
    "us3.datadoghq.com",
    "us5.datadoghq.com",
    "ap1.datadoghq.com",
    "datadoghq.eu",
    "ddog-gov.com",
];

const SUBDOMAIN: ServerVariable = ServerVariable {
    name: "subdomain",
    default_value: "api",
    enum_values: &[],
};

/// Known servers, by index
pub const SERVERS: &[ServerConfiguration] = &[
    ServerConfiguration {
        url: "https://{subdomain}.{site}",
        description: "No description provided",
        variables: &[
            ServerVariable {
                name: "site",
                default_value: "datadoghq.com",
                enum_values: SITES,
            },
            SUBDOMAIN,
        ],
    },
    ServerConfiguration {
        url: "{protocol}://{name}",
        description: "No description provided",
        variables: &[
            ServerVariable {
                name: "name",
                default_value: "api.datadoghq.com",
                enum_values: &[],
            },
            ServerVariable {
                name: "protocol",
                default_value: "https",
                enum_values: &[],
            },
        ],
    },
    ServerConfiguration {
        url: "https://{subdomain}.{site}",
        description: "No description provided",
        variables: &[
            ServerVariable {
                name: "site",
                default_value: "datadoghq.com",
                enum_values: &[],
            },
            SUBDOMAIN,
        ],
    },
];

impl ServerConfiguration {
    /// Substitute variables into the template, falling back to defaults
    pub fn url(&self, overrides: &BTreeMap<String, String>) -> Result<Url> {
        if let Some(unknown) = overrides
            .keys()
            .find(|key| !self.variables.iter().any(|v| v.name == key.as_str()))
        {
            return Err(Error::Configuration(format!(
                "unknown server variable '{unknown}' for {}",
                self.url
            )));
        }

        let mut url = self.url.to_string();
        for variable in self.variables {
            let value = overrides
                .get(variable.name)
                .map(String::as_str)
                .unwrap_or(variable.default_value);
            if !variable.enum_values.is_empty() && !variable.enum_values.contains(&value) {
                return Err(Error::Configuration(format!(
                    "the variable {} in the server URL has invalid value '{value}', must be one of: {}",
                    variable.name,
                    variable.enum_values.join(", ")
                )));
            }
            url = url.replace(&format!("{{{}}}", variable.name), value);
        }

        Url::parse(&url)
            .map_err(|e| Error::Configuration(format!("invalid server URL '{url}': {e}")))
    }
}

/// Resolve a server by index
pub fn server_url(index: usize, overrides: &BTreeMap<String, String>) -> Result<Url> {
    let server = SERVERS.get(index).ok_or_else(|| {
        Error::Configuration(format!(
            "server index {index} out of range, {} servers known",
            SERVERS.len()
        ))
    })?;
    server.url(overrides)
}

/// Header names the keys are sent under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthHeaders {
    pub api_key: String,
    pub app_key: String,
}

impl Default for AuthHeaders {
    fn default() -> Self {
        Self {
            api_key: DEFAULT_API_KEY_HEADER.to_string(),
            app_key: DEFAULT_APP_KEY_HEADER.to_string(),
        }
    }
}

/// Settings shared by every API group
#[derive(Clone)]
pub struct Configuration {
    pub(crate) base_url: Url,
    pub(crate) headers: HeaderMap,
    pub(crate) debug: bool,
    pub(crate) http: ClientWithMiddleware,
    pub(crate) redactor: Redactor,
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("base_url", &self.base_url.as_str())
            .field("debug", &self.debug)
            .finish_non_exhaustive()
    }
}

/// Inputs of [`Configuration::new`]
pub(crate) struct ConfigurationParts {
    pub base_url: Url,
    pub api_key: Option<SecretString>,
    pub app_key: Option<SecretString>,
    pub auth_headers: AuthHeaders,
    pub user_agent: String,
    pub default_headers: BTreeMap<String, String>,
    pub compress: bool,
    pub debug: bool,
    pub http: ClientWithMiddleware,
}

impl Configuration {
    pub(crate) fn new(parts: ConfigurationParts) -> Result<Self> {
        if parts.base_url.cannot_be_a_base() {
            return Err(Error::Configuration(format!(
                "base URL '{}' cannot carry a path",
                parts.base_url
            )));
        }

        let mut headers = HeaderMap::new();
        for (name, value) in &parts.default_headers {
            headers.insert(header_name(name)?, header_value(name, value)?);
        }
        headers.insert(USER_AGENT, header_value("User-Agent", &parts.user_agent)?);
        if !parts.compress {
            headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("identity"));
        }
        for (name, key) in [
            (&parts.auth_headers.api_key, &parts.api_key),
            (&parts.auth_headers.app_key, &parts.app_key),
        ] {
            if let Some(key) = key.as_ref().filter(|k| !k.is_empty()) {
                let mut value = header_value(name, key.expose_secret())?;
                value.set_sensitive(true);
                headers.insert(header_name(name)?, value);
            }
        }

        let redactor = Redactor::for_secrets(parts.api_key.iter().chain(parts.app_key.iter()))
            .with_header(&parts.auth_headers.api_key)
            .with_header(&parts.auth_headers.app_key);

        Ok(Self {
            base_url: parts.base_url,
            headers,
            debug: parts.debug,
            http: parts.http,
            redactor,
        })
    }

    /// Base URL every request path is appended to
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Whether full request/response dumps are logged
    pub fn debug(&self) -> bool {
        self.debug
    }
}

fn header_name(name: &str) -> Result<HeaderName> {
    HeaderName::from_bytes(name.as_bytes())
        .map_err(|e| Error::Configuration(format!("invalid header name '{name}': {e}")))
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|e| Error::Configuration(format!("invalid value for header '{name}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_default_server() {
        let url = server_url(0, &BTreeMap::new()).unwrap();
        assert_eq!(url.as_str(), "https://api.datadoghq.com/");
    }

    #[test]
    fn test_site_override() {
        let url = server_url(0, &vars(&[("site", "datadoghq.eu")])).unwrap();
        assert_eq!(url.host_str(), Some("api.datadoghq.eu"));

        let url = server_url(0, &vars(&[("site", "us5.datadoghq.com"), ("subdomain", "ip")]))
            .unwrap();
        assert_eq!(url.host_str(), Some("ip.us5.datadoghq.com"));
    }

    #[test]
    fn test_site_outside_allowed_set() {
        let err = server_url(0, &vars(&[("site", "example.com")])).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("invalid value 'example.com'"));
        assert!(message.contains("datadoghq.eu"));

        // The last server accepts any site
        let url = server_url(2, &vars(&[("site", "dd.internal.example")])).unwrap();
        assert_eq!(url.host_str(), Some("api.dd.internal.example"));
    }

    #[test]
    fn test_protocol_and_name() {
        let url = server_url(1, &vars(&[("protocol", "http"), ("name", "localhost:8126")])).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8126/");
    }

    #[test]
    fn test_unknown_variable_and_index() {
        assert!(server_url(0, &vars(&[("region", "eu")])).is_err());
        assert!(matches!(
            server_url(7, &BTreeMap::new()),
            Err(Error::Configuration(_))
        ));
    }
}
