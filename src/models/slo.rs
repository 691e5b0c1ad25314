//! Service level objective models

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::AdditionalProperties;
use crate::error::{Error, Result};
use crate::unparsed::{string_enum, Decoded, Model};

string_enum! {
    /// The SLO time window options.
    pub enum SLOTimeframe {
        SevenDays => "7d",
        ThirtyDays => "30d",
        NinetyDays => "90d",
        Custom => "custom",
    }
}

string_enum! {
    /// The type of the service level objective.
    pub enum SLOType {
        Metric => "metric",
        Monitor => "monitor",
        TimeSlice => "time_slice",
    }
}

string_enum! {
    /// State of the SLO over its timeframe.
    pub enum SLOState {
        Breached => "breached",
        Warning => "warning",
        Ok => "ok",
        NoData => "no_data",
    }
}

string_enum! {
    /// Timeframe an error of a bulk delete applies to.
    pub enum SLOErrorTimeframe {
        SevenDays => "7d",
        ThirtyDays => "30d",
        NinetyDays => "90d",
        All => "all",
    }
}

/// User who created or last touched a resource.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Creator {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub name: Option<Option<String>>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// A metric-based SLO: good events over total events.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, bon::Builder)]
#[builder(on(String, into))]
pub struct ServiceLevelObjectiveQuery {
    pub denominator: String,
    pub numerator: String,
    #[serde(flatten)]
    #[builder(default)]
    pub additional_properties: AdditionalProperties,
}

impl ServiceLevelObjectiveQuery {
    pub fn new(numerator: impl Into<String>, denominator: impl Into<String>) -> Self {
        Self {
            denominator: denominator.into(),
            numerator: numerator.into(),
            additional_properties: AdditionalProperties::new(),
        }
    }
}

/// Target for one timeframe of an SLO.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, bon::Builder)]
#[builder(on(String, into))]
pub struct SLOThreshold {
    pub target: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_display: Option<String>,
    pub timeframe: SLOTimeframe,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning_display: Option<String>,
    #[serde(flatten)]
    #[builder(default)]
    pub additional_properties: AdditionalProperties,
}

impl Model for SLOThreshold {
    const REQUIRED_FIELDS: &'static [&'static str] = &["target", "timeframe"];
}


impl SLOThreshold {
    pub fn new(target: f64, timeframe: SLOTimeframe) -> Self {
        Self {
            target,
            target_display: None,
            timeframe,
            warning: None,
            warning_display: None,
            additional_properties: AdditionalProperties::new(),
        }
    }

    fn validate(&self) -> Result<()> {
        if !(self.target > 0.0 && self.target < 100.0) {
            return Err(Error::Validation(format!(
                "threshold target for {} must be between 0 and 100, got {}",
                self.timeframe, self.target
            )));
        }
        if let Some(warning) = self.warning {
            if warning <= self.target {
                return Err(Error::Validation(format!(
                    "warning threshold for {} must be greater than the target",
                    self.timeframe
                )));
            }
        }
        Ok(())
    }
}

/// Checks shared by SLO creation and update bodies.
fn validate_slo(
    name: &str,
    thresholds: &[SLOThreshold],
    slo_type: SLOType,
    monitor_ids: Option<&[i64]>,
    groups: Option<&[String]>,
    query: Option<&ServiceLevelObjectiveQuery>,
) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::Validation("SLO name must not be empty".to_string()));
    }
    if thresholds.is_empty() {
        return Err(Error::Validation(
            "SLO requires at least one threshold".to_string(),
        ));
    }
    thresholds.iter().try_for_each(SLOThreshold::validate)?;

    match slo_type {
        SLOType::Monitor => {
            let monitors = monitor_ids.unwrap_or_default();
            if monitors.is_empty() {
                return Err(Error::Validation(
                    "monitor SLO requires monitor_ids".to_string(),
                ));
            }
            if groups.is_some_and(|g| !g.is_empty()) && monitors.len() != 1 {
                return Err(Error::Validation(
                    "groups may only be set on a monitor SLO with exactly one monitor".to_string(),
                ));
            }
        }
        SLOType::Metric if query.is_none() => {
            return Err(Error::Validation("metric SLO requires a query".to_string()));
        }
        _ => {}
    }
    Ok(())
}

/// Body of an SLO creation request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, bon::Builder)]
#[builder(on(String, into))]
pub struct ServiceLevelObjectiveRequest {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub description: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitor_ids: Option<Vec<i64>>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<ServiceLevelObjectiveQuery>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_threshold: Option<f64>,
    pub thresholds: Vec<SLOThreshold>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeframe: Option<SLOTimeframe>,
    #[serde(rename = "type")]
    pub type_: SLOType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning_threshold: Option<f64>,
    #[serde(flatten)]
    #[builder(default)]
    pub additional_properties: AdditionalProperties,
}

impl ServiceLevelObjectiveRequest {
    pub fn validate(&self) -> Result<()> {
        validate_slo(
            &self.name,
            &self.thresholds,
            self.type_,
            self.monitor_ids.as_deref(),
            self.groups.as_deref(),
            self.query.as_ref(),
        )
    }
}

impl Model for ServiceLevelObjectiveRequest {
    const REQUIRED_FIELDS: &'static [&'static str] = &["name", "thresholds", "type"];
}

/// A service level objective, as returned by the API and sent on update.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, bon::Builder)]
#[builder(on(String, into))]
pub struct ServiceLevelObjective {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<Creator>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub description: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitor_ids: Option<Vec<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitor_tags: Option<Vec<String>>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<ServiceLevelObjectiveQuery>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_threshold: Option<f64>,
    pub thresholds: Vec<SLOThreshold>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeframe: Option<SLOTimeframe>,
    #[serde(rename = "type")]
    pub type_: SLOType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning_threshold: Option<f64>,
    #[serde(flatten)]
    #[builder(default)]
    pub additional_properties: AdditionalProperties,
}

impl ServiceLevelObjective {
    pub fn validate(&self) -> Result<()> {
        validate_slo(
            &self.name,
            &self.thresholds,
            self.type_,
            self.monitor_ids.as_deref(),
            self.groups.as_deref(),
            self.query.as_ref(),
        )
    }
}

impl Model for ServiceLevelObjective {
    const REQUIRED_FIELDS: &'static [&'static str] = &["name", "thresholds", "type"];
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SLOListResponseMetadataPage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_filtered_count: Option<i64>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SLOListResponseMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<SLOListResponseMetadataPage>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// A list of service level objectives.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SLOListResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<Decoded<ServiceLevelObjective>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<SLOListResponseMetadata>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl Model for SLOListResponse {}

/// A single SLO as returned by `get_slo`; every field is optional here.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SLOResponseData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configured_alert_ids: Option<Vec<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<Creator>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub description: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitor_ids: Option<Vec<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitor_tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<ServiceLevelObjectiveQuery>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_threshold: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thresholds: Option<Vec<Decoded<SLOThreshold>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeframe: Option<SLOTimeframe>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<SLOType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning_threshold: Option<f64>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SLOResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<SLOResponseData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl Model for SLOResponse {}

/// Result of deleting an SLO; on 409 `errors` names the blocking resources.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SLODeleteResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, String>>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl Model for SLODeleteResponse {}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckCanDeleteSLOResponseData {
    /// SLOs that can be deleted without disrupting anything.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ok: Option<Vec<String>>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckCanDeleteSLOResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<CheckCanDeleteSLOResponseData>,
    /// SLO id to the reason it cannot be deleted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, String>>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl Model for CheckCanDeleteSLOResponse {}

/// Body of `delete_slo_timeframe_in_bulk`: SLO id to the timeframes to drop.
pub type SLOBulkDelete = BTreeMap<String, Vec<SLOTimeframe>>;

impl Model for SLOBulkDelete {}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SLOBulkDeleteResponseData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<Vec<String>>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SLOBulkDeleteError {
    pub id: String,
    pub message: String,
    pub timeframe: SLOErrorTimeframe,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl Model for SLOBulkDeleteError {
    const REQUIRED_FIELDS: &'static [&'static str] = &["id", "message", "timeframe"];
}


#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SLOBulkDeleteResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<SLOBulkDeleteResponseData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<Decoded<SLOBulkDeleteError>>>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl Model for SLOBulkDeleteResponse {}

/// SLI data of an SLO history, overall or per group.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SLOHistorySLIData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<BTreeMap<String, f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<bool>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub sli_value: Option<Option<f64>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub span_precision: Option<Option<f64>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub uptime: Option<Option<f64>>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SLOHistoryResponseData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_ts: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall: Option<SLOHistorySLIData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thresholds: Option<BTreeMap<String, SLOThreshold>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_ts: Option<i64>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<SLOType>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SLOHistoryResponseError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SLOHistoryResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<SLOHistoryResponseData>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub errors: Option<Option<Vec<SLOHistoryResponseError>>>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl Model for SLOHistoryResponse {}

/// Error budget expressed in the SLO's own unit.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SLORawErrorBudgetRemaining {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Current status of an SLO as indexed by search.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SLOStatus {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub calculation_error: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub error_budget_remaining: Option<Option<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indexed_at: Option<i64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub raw_error_budget_remaining: Option<Option<SLORawErrorBudgetRemaining>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub sli: Option<Option<f64>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub span_precision: Option<Option<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<SLOState>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Status of one timeframe of an SLO.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SLOOverallStatuses {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub error: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub error_budget_remaining: Option<Option<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indexed_at: Option<i64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub raw_error_budget_remaining: Option<Option<SLORawErrorBudgetRemaining>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub span_precision: Option<Option<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<SLOState>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub status: Option<Option<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeframe: Option<SLOTimeframe>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl Model for SLOOverallStatuses {}


#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchSLOQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub denominator: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub metrics: Option<Option<Vec<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numerator: Option<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchSLOThreshold {
    pub target: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_display: Option<String>,
    pub timeframe: SLOTimeframe,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub warning: Option<Option<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning_display: Option<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl Model for SearchSLOThreshold {
    const REQUIRED_FIELDS: &'static [&'static str] = &["target", "timeframe"];
}


#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchServiceLevelObjectiveAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all_tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub creator: Option<Option<Creator>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub description: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env_tags: Option<Vec<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub groups: Option<Option<Vec<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitor_ids: Option<Vec<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall_status: Option<Vec<Decoded<SLOOverallStatuses>>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub query: Option<Option<SearchSLOQuery>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slo_type: Option<SLOType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<SLOStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thresholds: Option<Vec<Decoded<SearchSLOThreshold>>>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchServiceLevelObjectiveData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<SearchServiceLevelObjectiveAttributes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchServiceLevelObjective {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<SearchServiceLevelObjectiveData>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl Model for SearchServiceLevelObjective {}


#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchSLOResponseDataAttributes {
    /// Facet counts; only present with `include_facets`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facets: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slos: Option<Vec<Decoded<SearchServiceLevelObjective>>>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchSLOResponseData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<SearchSLOResponseDataAttributes>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchSLOResponseLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub last: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub prev: Option<Option<String>>,
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_: Option<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchSLOResponseMetaPage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_number: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_number: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_number: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_number: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchSLOResponseMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<SearchSLOResponseMetaPage>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchSLOResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<SearchSLOResponseData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<SearchSLOResponseLinks>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<SearchSLOResponseMeta>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl Model for SearchSLOResponse {}
