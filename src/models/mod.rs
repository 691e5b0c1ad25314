//! Request and response models
//!
//! Every record keeps unknown JSON keys in `additional_properties` so that a
//! decode/encode round trip is lossless. Nullable fields are
//! `Option<Option<T>>`: `None` is absent, `Some(None)` is an explicit `null`.

mod api_error;
mod slo;
mod slo_correction;
mod synthetics;
mod usage;

pub use api_error::APIErrorResponse;
pub use slo::*;
pub use slo_correction::*;
pub use synthetics::*;
pub use usage::*;

/// Unknown keys of a record, kept verbatim.
pub type AdditionalProperties = std::collections::BTreeMap<String, serde_json::Value>;
