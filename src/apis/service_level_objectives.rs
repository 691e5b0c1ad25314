//! Service level objective endpoints

use bon::bon;
use reqwest::Method;
use std::sync::Arc;

use super::{path_param, BAD_REQUEST, FORBIDDEN, NOT_FOUND, TOO_MANY_REQUESTS};
use crate::configuration::Configuration;
use crate::error::{Error, ErrorRoutes, ErrorShape, Result};
use crate::models::{
    CheckCanDeleteSLOResponse, SLOBulkDelete, SLOBulkDeleteResponse, SLOCorrectionListResponse,
    SLODeleteResponse, SLOHistoryResponse, SLOListResponse, SLOResponse, SearchSLOResponse,
    ServiceLevelObjective, ServiceLevelObjectiveRequest,
};
use crate::request::ApiRequest;
use crate::unparsed::Decoded;

const CHECK_CAN_DELETE_ERRORS: ErrorRoutes = &[
    BAD_REQUEST,
    FORBIDDEN,
    (409, ErrorShape::CheckCanDeleteSlo),
    TOO_MANY_REQUESTS,
];
const CREATE_ERRORS: ErrorRoutes = &[BAD_REQUEST, FORBIDDEN, TOO_MANY_REQUESTS];
const DELETE_ERRORS: ErrorRoutes = &[
    FORBIDDEN,
    NOT_FOUND,
    (409, ErrorShape::SloDelete),
    TOO_MANY_REQUESTS,
];
const BULK_DELETE_ERRORS: ErrorRoutes = &[BAD_REQUEST, FORBIDDEN, TOO_MANY_REQUESTS];
const GET_ERRORS: ErrorRoutes = &[FORBIDDEN, NOT_FOUND, TOO_MANY_REQUESTS];
const GET_CORRECTIONS_ERRORS: ErrorRoutes =
    &[BAD_REQUEST, FORBIDDEN, NOT_FOUND, TOO_MANY_REQUESTS];
const HISTORY_ERRORS: ErrorRoutes = &[BAD_REQUEST, FORBIDDEN, NOT_FOUND, TOO_MANY_REQUESTS];
const LIST_ERRORS: ErrorRoutes = &[BAD_REQUEST, FORBIDDEN, NOT_FOUND, TOO_MANY_REQUESTS];
const SEARCH_ERRORS: ErrorRoutes = &[BAD_REQUEST, FORBIDDEN, TOO_MANY_REQUESTS];
const UPDATE_ERRORS: ErrorRoutes = &[BAD_REQUEST, FORBIDDEN, NOT_FOUND, TOO_MANY_REQUESTS];

/// Create, inspect and delete SLOs
#[derive(Debug, Clone)]
pub struct ServiceLevelObjectivesApi {
    config: Arc<Configuration>,
}

#[bon]
impl ServiceLevelObjectivesApi {
    pub fn new(config: Arc<Configuration>) -> Self {
        Self { config }
    }

    /// Check whether SLOs can be deleted without breaking dashboards or monitors.
    ///
    /// A 409 carries a [`CheckCanDeleteSLOResponse`] naming the blockers.
    pub async fn check_can_delete_slo<S: AsRef<str>>(
        &self,
        ids: &[S],
    ) -> Result<Decoded<CheckCanDeleteSLOResponse>> {
        if ids.iter().all(|id| id.as_ref().trim().is_empty()) {
            return Err(Error::Validation(
                "at least one SLO id is required".to_string(),
            ));
        }
        let ids: Vec<&str> = ids.iter().map(AsRef::as_ref).collect();

        ApiRequest::new(
            &self.config,
            "check_can_delete_slo",
            Method::GET,
            &["api", "v1", "slo", "can_delete"],
        )?
        .query("ids", ids)
        .errors(CHECK_CAN_DELETE_ERRORS)
        .send()
        .await
    }

    /// Create an SLO. Returns a list holding the created SLO.
    pub async fn create_slo(
        &self,
        body: impl Into<Decoded<ServiceLevelObjectiveRequest>>,
    ) -> Result<Decoded<SLOListResponse>> {
        let body = body.into();
        if let Decoded::Typed(request) = &body {
            request.validate()?;
        }

        ApiRequest::new(
            &self.config,
            "create_slo",
            Method::POST,
            &["api", "v1", "slo"],
        )?
        .json(&body)?
        .errors(CREATE_ERRORS)
        .send()
        .await
    }

    /// Delete an SLO. A 409 carries an [`SLODeleteResponse`] unless `force` is set.
    #[builder]
    pub async fn delete_slo(
        &self,
        #[builder(into)] slo_id: String,
        force: Option<bool>,
    ) -> Result<Decoded<SLODeleteResponse>> {
        ApiRequest::new(
            &self.config,
            "delete_slo",
            Method::DELETE,
            &["api", "v1", "slo", path_param("slo_id", &slo_id)?],
        )?
        .query_opt("force", force)
        .errors(DELETE_ERRORS)
        .send()
        .await
    }

    /// Delete some timeframes of several SLOs at once.
    ///
    /// An SLO left with no timeframe is deleted entirely.
    pub async fn delete_slo_timeframe_in_bulk(
        &self,
        body: impl Into<Decoded<SLOBulkDelete>>,
    ) -> Result<Decoded<SLOBulkDeleteResponse>> {
        let body = body.into();
        if let Decoded::Typed(timeframes) = &body {
            if timeframes.is_empty() {
                return Err(Error::Validation(
                    "bulk delete requires at least one SLO".to_string(),
                ));
            }
            if let Some((id, _)) = timeframes.iter().find(|(_, t)| t.is_empty()) {
                return Err(Error::Validation(format!(
                    "bulk delete of SLO {id} lists no timeframe"
                )));
            }
        }

        ApiRequest::new(
            &self.config,
            "delete_slo_timeframe_in_bulk",
            Method::POST,
            &["api", "v1", "slo", "bulk_delete"],
        )?
        .json(&body)?
        .errors(BULK_DELETE_ERRORS)
        .send()
        .await
    }

    #[builder]
    pub async fn get_slo(
        &self,
        #[builder(into)] slo_id: String,
        with_configured_alert_ids: Option<bool>,
    ) -> Result<Decoded<SLOResponse>> {
        ApiRequest::new(
            &self.config,
            "get_slo",
            Method::GET,
            &["api", "v1", "slo", path_param("slo_id", &slo_id)?],
        )?
        .query_opt("with_configured_alert_ids", with_configured_alert_ids)
        .errors(GET_ERRORS)
        .send()
        .await
    }

    pub async fn get_slo_corrections(
        &self,
        slo_id: &str,
    ) -> Result<Decoded<SLOCorrectionListResponse>> {
        ApiRequest::new(
            &self.config,
            "get_slo_corrections",
            Method::GET,
            &["api", "v1", "slo", path_param("slo_id", slo_id)?, "corrections"],
        )?
        .errors(GET_CORRECTIONS_ERRORS)
        .send()
        .await
    }

    /// SLI history between two Unix timestamps (seconds).
    #[builder]
    pub async fn get_slo_history(
        &self,
        #[builder(into)] slo_id: String,
        from_ts: i64,
        to_ts: i64,
        target: Option<f64>,
        apply_correction: Option<bool>,
    ) -> Result<Decoded<SLOHistoryResponse>> {
        if to_ts <= from_ts {
            return Err(Error::Validation(format!(
                "history window is empty: from_ts {from_ts} is not before to_ts {to_ts}"
            )));
        }

        ApiRequest::new(
            &self.config,
            "get_slo_history",
            Method::GET,
            &["api", "v1", "slo", path_param("slo_id", &slo_id)?, "history"],
        )?
        .query("from_ts", from_ts)
        .query("to_ts", to_ts)
        .query_opt("target", target)
        .query_opt("apply_correction", apply_correction)
        .errors(HISTORY_ERRORS)
        .send()
        .await
    }

    #[builder]
    pub async fn list_slos(
        &self,
        ids: Option<Vec<String>>,
        #[builder(into)] query: Option<String>,
        #[builder(into)] tags_query: Option<String>,
        #[builder(into)] metrics_query: Option<String>,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Decoded<SLOListResponse>> {
        ApiRequest::new(
            &self.config,
            "list_slos",
            Method::GET,
            &["api", "v1", "slo"],
        )?
        .query_opt("ids", ids)
        .query_opt("query", query)
        .query_opt("tags_query", tags_query)
        .query_opt("metrics_query", metrics_query)
        .query_opt("limit", limit)
        .query_opt("offset", offset)
        .errors(LIST_ERRORS)
        .send()
        .await
    }

    #[builder]
    pub async fn search_slo(
        &self,
        #[builder(into)] query: Option<String>,
        page_size: Option<i64>,
        page_number: Option<i64>,
        include_facets: Option<bool>,
    ) -> Result<Decoded<SearchSLOResponse>> {
        ApiRequest::new(
            &self.config,
            "search_slo",
            Method::GET,
            &["api", "v1", "slo", "search"],
        )?
        .query_opt("query", query)
        .query_opt("page[size]", page_size)
        .query_opt("page[number]", page_number)
        .query_opt("include_facets", include_facets)
        .errors(SEARCH_ERRORS)
        .send()
        .await
    }

    /// Replace an SLO. Returns a list holding the updated SLO.
    pub async fn update_slo(
        &self,
        slo_id: &str,
        body: impl Into<Decoded<ServiceLevelObjective>>,
    ) -> Result<Decoded<SLOListResponse>> {
        let body = body.into();
        if let Decoded::Typed(slo) = &body {
            slo.validate()?;
        }

        ApiRequest::new(
            &self.config,
            "update_slo",
            Method::PUT,
            &["api", "v1", "slo", path_param("slo_id", slo_id)?],
        )?
        .json(&body)?
        .errors(UPDATE_ERRORS)
        .send()
        .await
    }
}
