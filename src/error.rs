//! Error types for the ergonomic Datadog client

use std::fmt;
use std::time::Duration;
use thiserror::Error;

use crate::models::{APIErrorResponse, CheckCanDeleteSLOResponse, SLODeleteResponse};
use crate::unparsed::{DecodeError, Decoded};

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A request was rejected locally, before anything was sent
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A successful response whose body could not be decoded
    #[error("Decode error: {message}")]
    Decode { message: String, body: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Failure raised by caller-supplied middleware (retry, auth, ...)
    #[error("Middleware error: {0}")]
    Middleware(anyhow::Error),

    /// The API answered with a status code of 300 or above
    #[error(transparent)]
    Response(Box<ResponseError>),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<reqwest_middleware::Error> for Error {
    fn from(err: reqwest_middleware::Error) -> Self {
        match err {
            reqwest_middleware::Error::Reqwest(e) => Error::Network(e),
            reqwest_middleware::Error::Middleware(e) => Error::Middleware(e),
        }
    }
}

impl From<ResponseError> for Error {
    fn from(err: ResponseError) -> Self {
        Error::Response(Box::new(err))
    }
}

impl Error {
    pub(crate) fn decode(err: DecodeError, body: &[u8]) -> Self {
        Error::Decode {
            message: err.to_string(),
            body: String::from_utf8_lossy(body).into_owned(),
        }
    }

    /// The response error, if the API answered with an error status
    pub fn response(&self) -> Option<&ResponseError> {
        match self {
            Error::Response(r) => Some(r),
            _ => None,
        }
    }

    /// Classification of an error status, if any
    pub fn kind(&self) -> Option<ErrorKind> {
        self.response().map(|r| r.kind)
    }

    /// HTTP status code, if the API answered
    pub fn status(&self) -> Option<u16> {
        self.response().map(|r| r.status)
    }

    /// Typed error body, if the status is documented and the body decoded
    pub fn model(&self) -> Option<&ErrorModel> {
        self.response().and_then(|r| r.model.as_ref())
    }

    /// Check if the error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Network(_) => true,
            Error::Response(r) => r.kind == ErrorKind::RateLimited || r.status >= 500,
            Error::Middleware(_)
            | Error::Configuration(_)
            | Error::Validation(_)
            | Error::Serialization(_)
            | Error::Decode { .. } => false,
        }
    }

    /// Get the retry delay if applicable
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            Error::Response(r) => r.retry_after,
            _ => None,
        }
    }

    /// Get the request ID if available
    pub fn request_id(&self) -> Option<&str> {
        self.response().and_then(|r| r.request_id.as_deref())
    }
}

/// Classification of error statuses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// 400
    BadRequest,
    /// 401 and 403
    Auth,
    /// 404
    NotFound,
    /// 409
    Conflict,
    /// 429
    RateLimited,
    /// Any other status of 300 or above
    Other,
}

impl ErrorKind {
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => ErrorKind::BadRequest,
            401 | 403 => ErrorKind::Auth,
            404 => ErrorKind::NotFound,
            409 => ErrorKind::Conflict,
            429 => ErrorKind::RateLimited,
            _ => ErrorKind::Other,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ErrorKind::BadRequest => "Bad request",
            ErrorKind::Auth => "Authorization failed",
            ErrorKind::NotFound => "Not found",
            ErrorKind::Conflict => "Conflict",
            ErrorKind::RateLimited => "Rate limit exceeded",
            ErrorKind::Other => "API error",
        })
    }
}

/// An error status returned by the API
#[derive(Debug, Clone, Error)]
#[error("{kind} (status {status}): {message}")]
pub struct ResponseError {
    pub kind: ErrorKind,
    pub status: u16,
    /// Status line, e.g. `404 Not Found`
    pub message: String,
    /// Raw response body
    pub body: String,
    pub model: Option<ErrorModel>,
    /// Request ID for debugging
    pub request_id: Option<String>,
    /// How long to wait before retrying, from the rate-limit headers
    pub retry_after: Option<Duration>,
}

/// Typed bodies of documented error statuses
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorModel {
    Api(Decoded<APIErrorResponse>),
    CheckCanDeleteSlo(Decoded<CheckCanDeleteSLOResponse>),
    SloDelete(Decoded<SLODeleteResponse>),
}

impl ErrorModel {
    /// Messages of a generic API error body
    pub fn errors(&self) -> &[String] {
        match self {
            ErrorModel::Api(Decoded::Typed(api)) => &api.errors,
            _ => &[],
        }
    }
}

/// Shape an operation documents for one of its error statuses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorShape {
    Api,
    CheckCanDeleteSlo,
    SloDelete,
}

/// Documented error statuses of one operation
pub(crate) type ErrorRoutes = &'static [(u16, ErrorShape)];

impl ErrorShape {
    pub(crate) fn route(routes: ErrorRoutes, status: u16) -> Option<Self> {
        routes
            .iter()
            .find(|(code, _)| *code == status)
            .map(|(_, shape)| *shape)
    }

    /// Decode an error body. An empty body yields the shape's empty model.
    pub(crate) fn decode(self, body: &[u8]) -> Option<ErrorModel> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Some(match self {
                ErrorShape::Api => ErrorModel::Api(APIErrorResponse::default().into()),
                ErrorShape::CheckCanDeleteSlo => {
                    ErrorModel::CheckCanDeleteSlo(CheckCanDeleteSLOResponse::default().into())
                }
                ErrorShape::SloDelete => ErrorModel::SloDelete(SLODeleteResponse::default().into()),
            });
        }

        let model = match self {
            ErrorShape::Api => Decoded::from_slice(body).map(ErrorModel::Api),
            ErrorShape::CheckCanDeleteSlo => {
                Decoded::from_slice(body).map(ErrorModel::CheckCanDeleteSlo)
            }
            ErrorShape::SloDelete => Decoded::from_slice(body).map(ErrorModel::SloDelete),
        };
        match model {
            Ok(model) => Some(model),
            Err(err) => {
                tracing::debug!(shape = ?self, error = %err, "error body did not decode");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_error(status: u16) -> Error {
        ResponseError {
            kind: ErrorKind::from_status(status),
            status,
            message: format!("{status}"),
            body: String::new(),
            model: None,
            request_id: Some("req-1".to_string()),
            retry_after: None,
        }
        .into()
    }

    #[test]
    fn test_status_classification() {
        assert_eq!(ErrorKind::from_status(400), ErrorKind::BadRequest);
        assert_eq!(ErrorKind::from_status(401), ErrorKind::Auth);
        assert_eq!(ErrorKind::from_status(403), ErrorKind::Auth);
        assert_eq!(ErrorKind::from_status(404), ErrorKind::NotFound);
        assert_eq!(ErrorKind::from_status(409), ErrorKind::Conflict);
        assert_eq!(ErrorKind::from_status(429), ErrorKind::RateLimited);
        assert_eq!(ErrorKind::from_status(302), ErrorKind::Other);
        assert_eq!(ErrorKind::from_status(502), ErrorKind::Other);
    }

    #[test]
    fn test_retryable() {
        assert!(response_error(429).is_retryable());
        assert!(response_error(503).is_retryable());
        assert!(!response_error(404).is_retryable());
        assert!(!Error::Validation("nope".into()).is_retryable());
    }

    #[test]
    fn test_display_and_accessors() {
        let err = response_error(404);
        assert_eq!(err.to_string(), "Not found (status 404): 404");
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.request_id(), Some("req-1"));
        assert!(err.model().is_none());
    }

    #[test]
    fn test_route_lookup() {
        const ROUTES: ErrorRoutes = &[(403, ErrorShape::Api), (409, ErrorShape::SloDelete)];
        assert_eq!(ErrorShape::route(ROUTES, 409), Some(ErrorShape::SloDelete));
        assert_eq!(ErrorShape::route(ROUTES, 500), None);
    }

    #[test]
    fn test_error_body_decode() {
        let model = ErrorShape::Api
            .decode(br#"{"errors": ["Invalid thresholds"]}"#)
            .unwrap();
        assert_eq!(model.errors(), ["Invalid thresholds".to_string()]);

        assert!(ErrorShape::Api.decode(b"<html>oops</html>").is_none());
    }

    #[test]
    fn test_empty_error_body_keeps_model() {
        let model = ErrorShape::Api.decode(b"").unwrap();
        assert!(model.errors().is_empty());
        assert!(matches!(model, ErrorModel::Api(Decoded::Typed(_))));

        assert_eq!(
            ErrorShape::SloDelete.decode(b""),
            Some(ErrorModel::SloDelete(Decoded::Typed(
                SLODeleteResponse::default()
            )))
        );
    }
}
