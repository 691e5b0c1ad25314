//! Request assembly, sending and status routing shared by every operation

use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::header::{HeaderMap, ACCEPT, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::Serialize;
use std::fmt::Write as _;
use std::time::{Duration, Instant};
use url::Url;

use crate::configuration::Configuration;
use crate::error::{Error, ErrorKind, ErrorRoutes, ErrorShape, ResponseError, Result};
use crate::unparsed::{Decoded, Model};

pub(crate) const JSON: &str = "application/json";

/// Accept header of the usage endpoints, which asks for RFC 3339 timestamps
pub(crate) const JSON_RFC3339: &str = "application/json;datetime-format=rfc3339";

/// Accept header of operations with no response body
pub(crate) const ANY: &str = "*/*";

const REQUEST_ID_HEADERS: &[&str] = &["x-request-id", "dd-request-id"];

/// Conversion of a parameter value to its query-string form
pub(crate) trait ParamValue {
    fn to_param(&self) -> String;
}

impl ParamValue for str {
    fn to_param(&self) -> String {
        self.to_string()
    }
}

impl ParamValue for String {
    fn to_param(&self) -> String {
        self.clone()
    }
}

impl<T: ParamValue + ?Sized> ParamValue for &T {
    fn to_param(&self) -> String {
        (**self).to_param()
    }
}

macro_rules! display_param {
    ($($ty:ty),+) => {
        $(impl ParamValue for $ty {
            fn to_param(&self) -> String {
                self.to_string()
            }
        })+
    };
}

display_param!(bool, i32, i64, u32, u64, f64);

/// RFC 3339 in UTC; milliseconds only when the sub-second part is non-zero
impl ParamValue for DateTime<Utc> {
    fn to_param(&self) -> String {
        let format = if self.timestamp_subsec_nanos() == 0 {
            SecondsFormat::Secs
        } else {
            SecondsFormat::Millis
        };
        self.to_rfc3339_opts(format, true)
    }
}

/// Lists are sent comma separated
impl<T: ParamValue> ParamValue for [T] {
    fn to_param(&self) -> String {
        self.iter()
            .map(ParamValue::to_param)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl<T: ParamValue> ParamValue for Vec<T> {
    fn to_param(&self) -> String {
        self.as_slice().to_param()
    }
}

/// One HTTP call of one operation
pub(crate) struct ApiRequest<'a> {
    config: &'a Configuration,
    operation: &'static str,
    method: Method,
    url: Url,
    accept: &'static str,
    body: Option<Vec<u8>>,
    routes: ErrorRoutes,
}

impl<'a> ApiRequest<'a> {
    /// Start a request; each path segment is percent-escaped on its own
    pub(crate) fn new(
        config: &'a Configuration,
        operation: &'static str,
        method: Method,
        segments: &[&str],
    ) -> Result<Self> {
        let mut url = config.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                Error::Configuration(format!("base URL '{}' cannot carry a path", config.base_url))
            })?
            .pop_if_empty()
            .extend(segments);

        Ok(Self {
            config,
            operation,
            method,
            url,
            accept: JSON,
            body: None,
            routes: &[],
        })
    }

    pub(crate) fn query(mut self, name: &str, value: impl ParamValue) -> Self {
        self.url
            .query_pairs_mut()
            .append_pair(name, &value.to_param());
        self
    }

    pub(crate) fn query_opt<T: ParamValue>(self, name: &str, value: Option<T>) -> Self {
        match value {
            Some(value) => self.query(name, value),
            None => self,
        }
    }

    pub(crate) fn accept(mut self, accept: &'static str) -> Self {
        self.accept = accept;
        self
    }

    pub(crate) fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        self.body = Some(serde_json::to_vec(body)?);
        Ok(self)
    }

    /// Documented error statuses and the shape of their bodies
    pub(crate) fn errors(mut self, routes: ErrorRoutes) -> Self {
        self.routes = routes;
        self
    }

    /// Send and decode a 2xx body into `T`
    pub(crate) async fn send<T: Model>(self) -> Result<Decoded<T>> {
        let body = self.execute().await?;
        Decoded::from_body(&body).map_err(|e| Error::decode(e, &body))
    }

    /// Send an operation that has no response body
    pub(crate) async fn send_empty(self) -> Result<()> {
        self.execute().await.map(drop)
    }

    async fn execute(self) -> Result<Vec<u8>> {
        let ApiRequest {
            config,
            operation,
            method,
            url,
            accept,
            body,
            routes,
        } = self;

        let mut headers = config.headers.clone();
        headers.insert(ACCEPT, reqwest::header::HeaderValue::from_static(accept));
        if body.is_some() {
            headers.insert(CONTENT_TYPE, reqwest::header::HeaderValue::from_static(JSON));
        }

        tracing::debug!(operation, %method, url = %url, "sending request");
        if config.debug {
            let dump = dump_request(&method, &url, &headers, body.as_deref());
            tracing::debug!(operation, "request dump:\n{}", config.redactor.redact(&dump));
        }

        let mut request = config
            .http
            .request(method.clone(), url.clone())
            .headers(headers);
        if let Some(body) = body {
            request = request.body(body);
        }

        let started = Instant::now();
        let response = request.send().await?;
        let status = response.status();
        let response_headers = response.headers().clone();
        let bytes = response.bytes().await?.to_vec();
        let elapsed_ms = started.elapsed().as_millis() as u64;

        tracing::debug!(operation, status = status.as_u16(), elapsed_ms, "received response");
        if config.debug {
            let dump = dump_response(status, &response_headers, &bytes);
            tracing::debug!(operation, "response dump:\n{}", config.redactor.redact(&dump));
        }

        if status.as_u16() >= 300 {
            let error = response_error(status, &response_headers, &bytes, routes);
            tracing::warn!(
                operation,
                %method,
                url = %url,
                status = error.status,
                request_id = error.request_id.as_deref(),
                "request failed"
            );
            return Err(error.into());
        }

        Ok(bytes)
    }
}

fn response_error(
    status: StatusCode,
    headers: &HeaderMap,
    body: &[u8],
    routes: ErrorRoutes,
) -> ResponseError {
    let code = status.as_u16();
    ResponseError {
        kind: ErrorKind::from_status(code),
        status: code,
        message: status.to_string(),
        body: String::from_utf8_lossy(body).into_owned(),
        model: ErrorShape::route(routes, code).and_then(|shape| shape.decode(body)),
        request_id: REQUEST_ID_HEADERS
            .iter()
            .find_map(|name| header_str(headers, name))
            .map(str::to_string),
        retry_after: retry_after(headers),
    }
}

fn header_str<'h>(headers: &'h HeaderMap, name: &str) -> Option<&'h str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

/// Seconds until the rate limit resets, from `X-RateLimit-Reset` or `Retry-After`
fn retry_after(headers: &HeaderMap) -> Option<Duration> {
    ["x-ratelimit-reset", "retry-after"]
        .iter()
        .filter_map(|name| header_str(headers, name))
        .find_map(|value| value.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
}

fn dump_headers(out: &mut String, headers: &HeaderMap) {
    for (name, value) in headers {
        let _ = writeln!(out, "{}: {}", name, String::from_utf8_lossy(value.as_bytes()));
    }
}

fn dump_request(method: &Method, url: &Url, headers: &HeaderMap, body: Option<&[u8]>) -> String {
    let mut out = format!("{method} {url}\n");
    dump_headers(&mut out, headers);
    if let Some(body) = body {
        out.push('\n');
        out.push_str(&String::from_utf8_lossy(body));
    }
    out
}

fn dump_response(status: StatusCode, headers: &HeaderMap, body: &[u8]) -> String {
    let mut out = format!("{status}\n");
    dump_headers(&mut out, headers);
    out.push('\n');
    out.push_str(&String::from_utf8_lossy(body));
    out
}
