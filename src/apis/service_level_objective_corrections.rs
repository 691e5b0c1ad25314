//! SLO correction endpoints

use bon::bon;
use reqwest::Method;
use std::sync::Arc;

use super::{path_param, BAD_REQUEST, FORBIDDEN, NOT_FOUND, TOO_MANY_REQUESTS};
use crate::configuration::Configuration;
use crate::error::{ErrorRoutes, Result};
use crate::models::{
    SLOCorrectionCreateRequest, SLOCorrectionListResponse, SLOCorrectionResponse,
    SLOCorrectionUpdateRequest,
};
use crate::request::{ApiRequest, ANY};
use crate::unparsed::Decoded;

const CREATE_ERRORS: ErrorRoutes = &[BAD_REQUEST, FORBIDDEN, NOT_FOUND, TOO_MANY_REQUESTS];
const DELETE_ERRORS: ErrorRoutes = &[FORBIDDEN, NOT_FOUND, TOO_MANY_REQUESTS];
const GET_ERRORS: ErrorRoutes = &[BAD_REQUEST, FORBIDDEN, TOO_MANY_REQUESTS];
const LIST_ERRORS: ErrorRoutes = &[FORBIDDEN, TOO_MANY_REQUESTS];
const UPDATE_ERRORS: ErrorRoutes = &[BAD_REQUEST, FORBIDDEN, NOT_FOUND, TOO_MANY_REQUESTS];

/// Manage time windows excluded from SLO calculations
#[derive(Debug, Clone)]
pub struct ServiceLevelObjectiveCorrectionsApi {
    config: Arc<Configuration>,
}

#[bon]
impl ServiceLevelObjectiveCorrectionsApi {
    pub fn new(config: Arc<Configuration>) -> Self {
        Self { config }
    }

    pub async fn create_slo_correction(
        &self,
        body: impl Into<Decoded<SLOCorrectionCreateRequest>>,
    ) -> Result<Decoded<SLOCorrectionResponse>> {
        let body = body.into();
        if let Decoded::Typed(request) = &body {
            request.validate()?;
        }

        ApiRequest::new(
            &self.config,
            "create_slo_correction",
            Method::POST,
            &["api", "v1", "slo", "correction"],
        )?
        .json(&body)?
        .errors(CREATE_ERRORS)
        .send()
        .await
    }

    /// Delete a correction. The API answers 204 with no body.
    pub async fn delete_slo_correction(&self, slo_correction_id: &str) -> Result<()> {
        ApiRequest::new(
            &self.config,
            "delete_slo_correction",
            Method::DELETE,
            &[
                "api",
                "v1",
                "slo",
                "correction",
                path_param("slo_correction_id", slo_correction_id)?,
            ],
        )?
        .accept(ANY)
        .errors(DELETE_ERRORS)
        .send_empty()
        .await
    }

    pub async fn get_slo_correction(
        &self,
        slo_correction_id: &str,
    ) -> Result<Decoded<SLOCorrectionResponse>> {
        ApiRequest::new(
            &self.config,
            "get_slo_correction",
            Method::GET,
            &[
                "api",
                "v1",
                "slo",
                "correction",
                path_param("slo_correction_id", slo_correction_id)?,
            ],
        )?
        .errors(GET_ERRORS)
        .send()
        .await
    }

    #[builder]
    pub async fn list_slo_correction(
        &self,
        offset: Option<i64>,
        limit: Option<i64>,
    ) -> Result<Decoded<SLOCorrectionListResponse>> {
        ApiRequest::new(
            &self.config,
            "list_slo_correction",
            Method::GET,
            &["api", "v1", "slo", "correction"],
        )?
        .query_opt("offset", offset)
        .query_opt("limit", limit)
        .errors(LIST_ERRORS)
        .send()
        .await
    }

    pub async fn update_slo_correction(
        &self,
        slo_correction_id: &str,
        body: impl Into<Decoded<SLOCorrectionUpdateRequest>>,
    ) -> Result<Decoded<SLOCorrectionResponse>> {
        let body = body.into();
        if let Decoded::Typed(request) = &body {
            request.validate()?;
        }

        ApiRequest::new(
            &self.config,
            "update_slo_correction",
            Method::PATCH,
            &[
                "api",
                "v1",
                "slo",
                "correction",
                path_param("slo_correction_id", slo_correction_id)?,
            ],
        )?
        .json(&body)?
        .errors(UPDATE_ERRORS)
        .send()
        .await
    }
}
