//! Usage metering models
//!
//! The API reports hundreds of per-product counters. The commonly used ones
//! are typed here; the rest are kept in `additional_properties`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::AdditionalProperties;
use crate::unparsed::{Decoded, Model};

/// Usage of one organization for one month.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UsageSummaryDateOrg {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_host_top99p: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apm_host_top99p: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_avg: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_ts_avg: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub infra_host_top99p: Option<i64>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl Model for UsageSummaryDateOrg {}


/// Usage of all organizations for one month.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UsageSummaryDate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_host_top99p: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apm_host_top99p: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_avg: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_ts_avg: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub infra_host_top99p: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orgs: Option<Vec<Decoded<UsageSummaryDateOrg>>>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl Model for UsageSummaryDate {}


/// Response of `get_usage_summary`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UsageSummaryResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_host_top99p_sum: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apm_host_top99p_sum: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_avg_sum: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_ts_sum: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub infra_host_top99p_sum: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<Vec<Decoded<UsageSummaryDate>>>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl Model for UsageSummaryResponse {}

/// Cloud Security Posture Management usage for one hour.
///
/// Host counts are nullable: `Some(None)` means the hour had no data.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UsageCloudSecurityPostureManagementHour {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub aas_host_count: Option<Option<f64>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub aws_host_count: Option<Option<f64>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub azure_host_count: Option<Option<f64>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub compliance_host_count: Option<Option<f64>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub container_count: Option<Option<f64>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub gcp_host_count: Option<Option<f64>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub host_count: Option<Option<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hour: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_id: Option<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl Model for UsageCloudSecurityPostureManagementHour {}


/// Response of `get_usage_cloud_security_posture_management`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UsageCloudSecurityPostureManagementResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<Vec<Decoded<UsageCloudSecurityPostureManagementHour>>>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl Model for UsageCloudSecurityPostureManagementResponse {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unparsed::Decoded;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_summary_keeps_untyped_counters() {
        let raw = json!({
            "start_date": "2024-01-01T00:00:00+00:00",
            "end_date": "2024-02-01T00:00:00+00:00",
            "infra_host_top99p_sum": 42,
            "rum_units_sum": 7,
            "usage": [{
                "date": "2024-01-01T00:00:00+00:00",
                "infra_host_top99p": 42,
                "orgs": [{"name": "child", "public_id": "abc", "iot_device_sum": 3}]
            }]
        });
        let summary = Decoded::<UsageSummaryResponse>::from_value(raw)
            .unwrap()
            .into_typed()
            .unwrap();

        assert_eq!(
            summary.start_date,
            Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
        );
        assert_eq!(summary.infra_host_top99p_sum, Some(42));
        assert_eq!(summary.additional_properties["rum_units_sum"], json!(7));

        let day = summary.usage.as_ref().unwrap()[0].typed().unwrap();
        let org = day.orgs.as_ref().unwrap()[0].typed().unwrap();
        assert_eq!(org.public_id.as_deref(), Some("abc"));
        assert_eq!(org.additional_properties["iot_device_sum"], json!(3));
    }

    #[test]
    fn test_bad_timestamp_falls_back() {
        let raw = json!({"start_date": "last tuesday", "usage": []});
        let decoded = Decoded::<UsageSummaryResponse>::from_value(raw.clone()).unwrap();
        assert!(decoded.is_unparsed());
        assert_eq!(decoded.unparsed().unwrap().value, raw);
    }

    #[test]
    fn test_cspm_nullable_counts() {
        let decoded = Decoded::<UsageCloudSecurityPostureManagementResponse>::from_value(json!({
            "usage": [{
                "hour": "2024-01-01T05:00:00+00:00",
                "host_count": 12.0,
                "aws_host_count": null
            }]
        }))
        .unwrap();
        let hour = decoded.typed().unwrap().usage.as_ref().unwrap()[0]
            .typed()
            .unwrap();
        assert_eq!(hour.host_count, Some(Some(12.0)));
        assert_eq!(hour.aws_host_count, Some(None));
        assert_eq!(hour.gcp_host_count, None);

        let encoded = serde_json::to_value(hour).unwrap();
        assert_eq!(encoded["aws_host_count"], json!(null));
        assert!(encoded.get("gcp_host_count").is_none());
    }
}
