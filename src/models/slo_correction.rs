//! SLO correction models

use serde::{Deserialize, Serialize};

use super::{AdditionalProperties, Creator};
use crate::error::{Error, Result};
use crate::unparsed::{string_enum, Decoded, Model};

string_enum! {
    /// Category the corrected time window falls into.
    pub enum SLOCorrectionCategory {
        ScheduledMaintenance => "Scheduled Maintenance",
        OutsideBusinessHours => "Outside Business Hours",
        Deployment => "Deployment",
        Other => "Other",
    }
}

string_enum! {
    /// JSON:API resource type of a correction.
    pub enum SLOCorrectionType {
        Correction => "correction",
    }
}

/// Attributes of a new correction.
///
/// A recurring correction (`rrule` set) needs a `duration` in seconds; a
/// one-off correction needs an `end` after its `start`. Times are Unix seconds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, bon::Builder)]
#[builder(on(String, into))]
pub struct SLOCorrectionCreateRequestAttributes {
    pub category: SLOCorrectionCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rrule: Option<String>,
    pub slo_id: String,
    pub start: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(flatten)]
    #[builder(default)]
    pub additional_properties: AdditionalProperties,
}

impl SLOCorrectionCreateRequestAttributes {
    fn validate(&self) -> Result<()> {
        if self.slo_id.trim().is_empty() {
            return Err(Error::Validation(
                "correction slo_id must not be empty".to_string(),
            ));
        }
        validate_window(self.start, self.end, self.rrule.as_deref(), self.duration)
    }
}

fn validate_window(
    start: i64,
    end: Option<i64>,
    rrule: Option<&str>,
    duration: Option<i64>,
) -> Result<()> {
    match (rrule, end) {
        (Some(_), _) if duration.is_none_or(|d| d <= 0) => Err(Error::Validation(
            "recurring correction requires a positive duration".to_string(),
        )),
        (None, None) => Err(Error::Validation(
            "one-off correction requires an end time".to_string(),
        )),
        (_, Some(end)) if end <= start => Err(Error::Validation(format!(
            "correction end {end} must be after start {start}"
        ))),
        _ => Ok(()),
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SLOCorrectionCreateData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<SLOCorrectionCreateRequestAttributes>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<SLOCorrectionType>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Body of `create_slo_correction`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SLOCorrectionCreateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<SLOCorrectionCreateData>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl SLOCorrectionCreateRequest {
    pub fn new(attributes: SLOCorrectionCreateRequestAttributes) -> Self {
        Self {
            data: Some(SLOCorrectionCreateData {
                attributes: Some(attributes),
                type_: Some(SLOCorrectionType::Correction),
                additional_properties: AdditionalProperties::new(),
            }),
            additional_properties: AdditionalProperties::new(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self.data.as_ref().and_then(|d| d.attributes.as_ref()) {
            Some(attributes) => attributes.validate(),
            None => Err(Error::Validation(
                "correction create request has no attributes".to_string(),
            )),
        }
    }
}

impl Model for SLOCorrectionCreateRequest {}

/// Attributes of a correction update; only the fields set are changed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, bon::Builder)]
#[builder(on(String, into))]
pub struct SLOCorrectionUpdateRequestAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<SLOCorrectionCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rrule: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(flatten)]
    #[builder(default)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SLOCorrectionUpdateData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<SLOCorrectionUpdateRequestAttributes>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<SLOCorrectionType>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Body of `update_slo_correction`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SLOCorrectionUpdateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<SLOCorrectionUpdateData>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl SLOCorrectionUpdateRequest {
    pub fn new(attributes: SLOCorrectionUpdateRequestAttributes) -> Self {
        Self {
            data: Some(SLOCorrectionUpdateData {
                attributes: Some(attributes),
                type_: Some(SLOCorrectionType::Correction),
                additional_properties: AdditionalProperties::new(),
            }),
            additional_properties: AdditionalProperties::new(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let Some(attributes) = self.data.as_ref().and_then(|d| d.attributes.as_ref()) else {
            return Ok(());
        };
        if let (Some(start), Some(end)) = (attributes.start, attributes.end) {
            if end <= start {
                return Err(Error::Validation(format!(
                    "correction end {end} must be after start {start}"
                )));
            }
        }
        if attributes.duration.is_some_and(|d| d <= 0) {
            return Err(Error::Validation(
                "correction duration must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl Model for SLOCorrectionUpdateRequest {}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SLOCorrectionResponseAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<SLOCorrectionCategory>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub created_at: Option<Option<i64>>,
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
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub duration: Option<Option<i64>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub end: Option<Option<i64>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub modified_at: Option<Option<i64>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub modifier: Option<Option<Creator>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub rrule: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slo_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// A stored correction.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SLOCorrection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<SLOCorrectionResponseAttributes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<SLOCorrectionType>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl Model for SLOCorrection {}


#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SLOCorrectionResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<SLOCorrection>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl Model for SLOCorrectionResponse {}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseMetaAttributesPage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_filtered_count: Option<i64>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseMetaAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<ResponseMetaAttributesPage>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SLOCorrectionListResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<Decoded<SLOCorrection>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<ResponseMetaAttributes>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl Model for SLOCorrectionListResponse {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unparsed::Decoded;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn one_off() -> SLOCorrectionCreateRequestAttributes {
        SLOCorrectionCreateRequestAttributes::builder()
            .category(SLOCorrectionCategory::ScheduledMaintenance)
            .slo_id("abc123")
            .start(1_700_000_000)
            .end(1_700_003_600)
            .build()
    }

    #[test]
    fn test_create_request_wire_shape() {
        let request = SLOCorrectionCreateRequest::new(one_off());
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "data": {
                    "attributes": {
                        "category": "Scheduled Maintenance",
                        "end": 1_700_003_600,
                        "slo_id": "abc123",
                        "start": 1_700_000_000
                    },
                    "type": "correction"
                }
            })
        );
    }

    #[test]
    fn test_create_validation() {
        assert!(SLOCorrectionCreateRequest::new(one_off()).validate().is_ok());

        let mut attrs = one_off();
        attrs.end = Some(attrs.start);
        assert!(SLOCorrectionCreateRequest::new(attrs).validate().is_err());

        let mut attrs = one_off();
        attrs.end = None;
        assert!(SLOCorrectionCreateRequest::new(attrs).validate().is_err());

        let mut attrs = one_off();
        attrs.end = None;
        attrs.rrule = Some("FREQ=DAILY;INTERVAL=1".to_string());
        assert!(SLOCorrectionCreateRequest::new(attrs.clone()).validate().is_err());
        attrs.duration = Some(3600);
        assert!(SLOCorrectionCreateRequest::new(attrs).validate().is_ok());

        let mut attrs = one_off();
        attrs.slo_id = String::new();
        assert!(SLOCorrectionCreateRequest::new(attrs).validate().is_err());

        let empty = SLOCorrectionCreateRequest {
            data: None,
            additional_properties: AdditionalProperties::new(),
        };
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_update_validation() {
        let ok = SLOCorrectionUpdateRequest::new(
            SLOCorrectionUpdateRequestAttributes::builder()
                .description("moved window")
                .build(),
        );
        assert!(ok.validate().is_ok());

        let backwards = SLOCorrectionUpdateRequest::new(
            SLOCorrectionUpdateRequestAttributes::builder()
                .start(20)
                .end(10)
                .build(),
        );
        assert!(backwards.validate().is_err());
    }

    #[test]
    fn test_unknown_category_falls_back() {
        let raw = json!({
            "data": {
                "id": "c1",
                "type": "correction",
                "attributes": {"category": "Holiday", "slo_id": "abc123"}
            }
        });
        let decoded = Decoded::<SLOCorrectionResponse>::from_value(raw.clone()).unwrap();
        assert!(decoded.is_unparsed());
        assert_eq!(serde_json::to_value(&decoded).unwrap(), raw);
    }

    #[test]
    fn test_nullable_creator() {
        let decoded = Decoded::<SLOCorrectionResponse>::from_value(json!({
            "data": {"id": "c1", "attributes": {"creator": null, "rrule": null}}
        }))
        .unwrap();
        let attrs = decoded
            .typed()
            .and_then(|r| r.data.as_ref())
            .and_then(|d| d.attributes.as_ref())
            .unwrap();
        assert_eq!(attrs.creator, Some(None));
        assert_eq!(attrs.rrule, Some(None));
        assert_eq!(attrs.description, None);
    }
}
