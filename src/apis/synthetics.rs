//! Synthetic test endpoints

use bon::bon;
use reqwest::Method;
use std::sync::Arc;

use super::{path_param, BAD_REQUEST, FORBIDDEN, NOT_FOUND, TOO_MANY_REQUESTS};
use crate::configuration::Configuration;
use crate::error::{ErrorRoutes, Result};
use crate::models::{
    SyntheticsDeleteTestsPayload, SyntheticsDeleteTestsResponse, SyntheticsListTestsResponse,
    SyntheticsTestDetails,
};
use crate::request::ApiRequest;
use crate::unparsed::Decoded;

const GET_ERRORS: ErrorRoutes = &[FORBIDDEN, NOT_FOUND, TOO_MANY_REQUESTS];
const DELETE_ERRORS: ErrorRoutes = &[BAD_REQUEST, FORBIDDEN, NOT_FOUND, TOO_MANY_REQUESTS];

#[derive(Debug, Clone)]
pub struct SyntheticsApi {
    config: Arc<Configuration>,
}

#[bon]
impl SyntheticsApi {
    pub fn new(config: Arc<Configuration>) -> Self {
        Self { config }
    }

    /// Any synthetic test, API or browser.
    pub async fn get_test(&self, public_id: &str) -> Result<Decoded<SyntheticsTestDetails>> {
        ApiRequest::new(
            &self.config,
            "get_test",
            Method::GET,
            &[
                "api",
                "v1",
                "synthetics",
                "tests",
                path_param("public_id", public_id)?,
            ],
        )?
        .errors(GET_ERRORS)
        .send()
        .await
    }

    /// An API test; browser tests answer 404 here.
    pub async fn get_api_test(&self, public_id: &str) -> Result<Decoded<SyntheticsTestDetails>> {
        ApiRequest::new(
            &self.config,
            "get_api_test",
            Method::GET,
            &[
                "api",
                "v1",
                "synthetics",
                "tests",
                "api",
                path_param("public_id", public_id)?,
            ],
        )?
        .errors(GET_ERRORS)
        .send()
        .await
    }

    #[builder]
    pub async fn list_tests(
        &self,
        page_size: Option<i64>,
        page_number: Option<i64>,
    ) -> Result<Decoded<SyntheticsListTestsResponse>> {
        ApiRequest::new(
            &self.config,
            "list_tests",
            Method::GET,
            &["api", "v1", "synthetics", "tests"],
        )?
        .query_opt("page_size", page_size)
        .query_opt("page_number", page_number)
        .errors(GET_ERRORS)
        .send()
        .await
    }

    pub async fn delete_tests(
        &self,
        body: impl Into<Decoded<SyntheticsDeleteTestsPayload>>,
    ) -> Result<Decoded<SyntheticsDeleteTestsResponse>> {
        let body = body.into();
        if let Decoded::Typed(payload) = &body {
            payload.validate()?;
        }

        ApiRequest::new(
            &self.config,
            "delete_tests",
            Method::POST,
            &["api", "v1", "synthetics", "tests", "delete"],
        )?
        .json(&body)?
        .errors(DELETE_ERRORS)
        .send()
        .await
    }
}
