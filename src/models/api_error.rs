use serde::{Deserialize, Serialize};

use super::AdditionalProperties;
use crate::unparsed::Model;

/// Error body returned by most endpoints on 4xx.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct APIErrorResponse {
    pub errors: Vec<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl Model for APIErrorResponse {
    const REQUIRED_FIELDS: &'static [&'static str] = &["errors"];
}
