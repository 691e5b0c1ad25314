//! Usage metering endpoints

use bon::bon;
use chrono::{DateTime, Utc};
use reqwest::Method;
use std::sync::Arc;

use super::{BAD_REQUEST, FORBIDDEN, TOO_MANY_REQUESTS};
use crate::configuration::Configuration;
use crate::error::{Error, ErrorRoutes, Result};
use crate::models::{UsageCloudSecurityPostureManagementResponse, UsageSummaryResponse};
use crate::request::{ApiRequest, JSON_RFC3339};
use crate::unparsed::Decoded;

const USAGE_ERRORS: ErrorRoutes = &[BAD_REQUEST, FORBIDDEN, TOO_MANY_REQUESTS];

/// Billable usage across products
#[derive(Debug, Clone)]
pub struct UsageMeteringApi {
    config: Arc<Configuration>,
}

fn check_range(start: DateTime<Utc>, end: Option<DateTime<Utc>>) -> Result<()> {
    match end {
        Some(end) if end <= start => Err(Error::Validation(format!(
            "usage range end {end} is not after start {start}"
        ))),
        _ => Ok(()),
    }
}

#[bon]
impl UsageMeteringApi {
    pub fn new(config: Arc<Configuration>) -> Self {
        Self { config }
    }

    /// Monthly usage summary, optionally broken down by child organization.
    ///
    /// Only the year and month of `start_month` and `end_month` are used.
    #[builder]
    pub async fn get_usage_summary(
        &self,
        start_month: DateTime<Utc>,
        end_month: Option<DateTime<Utc>>,
        include_org_details: Option<bool>,
    ) -> Result<Decoded<UsageSummaryResponse>> {
        check_range(start_month, end_month)?;

        ApiRequest::new(
            &self.config,
            "get_usage_summary",
            Method::GET,
            &["api", "v1", "usage", "summary"],
        )?
        .accept(JSON_RFC3339)
        .query("start_month", start_month)
        .query_opt("end_month", end_month)
        .query_opt("include_org_details", include_org_details)
        .errors(USAGE_ERRORS)
        .send()
        .await
    }

    /// Hourly Cloud Security Posture Management usage.
    #[builder]
    pub async fn get_usage_cloud_security_posture_management(
        &self,
        start_hr: DateTime<Utc>,
        end_hr: Option<DateTime<Utc>>,
    ) -> Result<Decoded<UsageCloudSecurityPostureManagementResponse>> {
        check_range(start_hr, end_hr)?;

        ApiRequest::new(
            &self.config,
            "get_usage_cloud_security_posture_management",
            Method::GET,
            &["api", "v1", "usage", "cspm"],
        )?
        .accept(JSON_RFC3339)
        .query("start_hr", start_hr)
        .query_opt("end_hr", end_hr)
        .errors(USAGE_ERRORS)
        .send()
        .await
    }
}
