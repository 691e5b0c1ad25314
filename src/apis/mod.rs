//! Endpoint groups
//!
//! Operations with optional parameters are builders finished with `.call()`;
//! the rest are plain async methods. Request bodies accept either a typed
//! model or a [`Decoded`](crate::Decoded) value, so a payload received as an
//! unparsed object can be sent back unchanged. Typed bodies are validated
//! before anything goes over the wire.

pub mod service_level_objective_corrections;
pub mod service_level_objectives;
pub mod synthetics;
pub mod usage_metering;

pub use service_level_objective_corrections::ServiceLevelObjectiveCorrectionsApi;
pub use service_level_objectives::ServiceLevelObjectivesApi;
pub use synthetics::SyntheticsApi;
pub use usage_metering::UsageMeteringApi;

use crate::error::{Error, ErrorShape, Result};

pub(crate) const FORBIDDEN: (u16, ErrorShape) = (403, ErrorShape::Api);
pub(crate) const BAD_REQUEST: (u16, ErrorShape) = (400, ErrorShape::Api);
pub(crate) const NOT_FOUND: (u16, ErrorShape) = (404, ErrorShape::Api);
pub(crate) const TOO_MANY_REQUESTS: (u16, ErrorShape) = (429, ErrorShape::Api);

/// Reject empty path parameters, which would silently address another endpoint
pub(crate) fn path_param<'p>(name: &str, value: &'p str) -> Result<&'p str> {
    if value.trim().is_empty() {
        return Err(Error::Validation(format!(
            "path parameter {name} must not be empty"
        )));
    }
    Ok(value)
}
