//! Synthetic test models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::{AdditionalProperties, Creator};
use crate::error::{Error, Result};
use crate::unparsed::{string_enum, Decoded, Model, UnparsedObject};

string_enum! {
    /// Comparison an assertion applies.
    pub enum SyntheticsAssertionOperator {
        Contains => "contains",
        DoesNotContain => "doesNotContain",
        Is => "is",
        IsNot => "isNot",
        LessThan => "lessThan",
        LessThanOrEqual => "lessThanOrEqual",
        MoreThan => "moreThan",
        MoreThanOrEqual => "moreThanOrEqual",
        Matches => "matches",
        DoesNotMatch => "doesNotMatch",
        Validates => "validates",
        IsInMoreThan => "isInMoreThan",
        IsInLessThan => "isInLessThan",
        DoesNotExist => "doesNotExist",
        IsUndefined => "isUndefined",
        ValidatesJsonPath => "validatesJSONPath",
        ValidatesXPath => "validatesXPath",
    }
}

string_enum! {
    /// What part of the response an assertion inspects.
    pub enum SyntheticsAssertionType {
        Body => "body",
        Header => "header",
        StatusCode => "statusCode",
        Certificate => "certificate",
        ResponseTime => "responseTime",
        Property => "property",
        RecordEvery => "recordEvery",
        RecordSome => "recordSome",
        TlsVersion => "tlsVersion",
        MinTlsVersion => "minTlsVersion",
        Latency => "latency",
        PacketLossPercentage => "packetLossPercentage",
        PacketsReceived => "packetsReceived",
        NetworkHop => "networkHop",
        ReceivedMessage => "receivedMessage",
        GrpcHealthcheckStatus => "grpcHealthcheckStatus",
        GrpcMetadata => "grpcMetadata",
        GrpcProto => "grpcProto",
        Connection => "connection",
        BodyHash => "bodyHash",
        Javascript => "javascript",
    }
}

string_enum! {
    pub enum SyntheticsTestType {
        Api => "api",
        Browser => "browser",
        Mobile => "mobile",
    }
}

string_enum! {
    /// Whether a test is running.
    pub enum SyntheticsTestPauseStatus {
        Live => "live",
        Paused => "paused",
    }
}

/// A plain assertion: compare one aspect of the response to a target value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, bon::Builder)]
#[builder(on(String, into))]
pub struct SyntheticsAssertionTarget {
    pub operator: SyntheticsAssertionOperator,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,
    /// Number, string or structured value depending on the assertion type.
    #[builder(into)]
    pub target: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timings_scope: Option<String>,
    #[serde(rename = "type")]
    pub type_: SyntheticsAssertionType,
    #[serde(flatten)]
    #[builder(default)]
    pub additional_properties: AdditionalProperties,
}

/// One assertion of a test.
///
/// Assertions with an operator, a type and a target are typed, whatever the
/// target holds (a JSON path or XPath target is a structured value). Other
/// shapes, such as JavaScript assertions, and unknown operators or types are
/// kept raw without affecting the rest of the test.
#[derive(Clone, Debug, PartialEq)]
pub enum SyntheticsAssertion {
    Target(SyntheticsAssertionTarget),
    Unparsed(UnparsedObject),
}

impl SyntheticsAssertion {
    pub fn target(&self) -> Option<&SyntheticsAssertionTarget> {
        match self {
            SyntheticsAssertion::Target(t) => Some(t),
            SyntheticsAssertion::Unparsed(_) => None,
        }
    }
}

impl From<SyntheticsAssertionTarget> for SyntheticsAssertion {
    fn from(target: SyntheticsAssertionTarget) -> Self {
        SyntheticsAssertion::Target(target)
    }
}

impl Serialize for SyntheticsAssertion {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            SyntheticsAssertion::Target(t) => t.serialize(serializer),
            SyntheticsAssertion::Unparsed(raw) => raw.value.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for SyntheticsAssertion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        match SyntheticsAssertionTarget::deserialize(&value) {
            Ok(target) => Ok(SyntheticsAssertion::Target(target)),
            Err(_) => Ok(SyntheticsAssertion::Unparsed(UnparsedObject { value })),
        }
    }
}

/// Request, assertions and variables of a test.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SyntheticsTestConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assertions: Option<Vec<SyntheticsAssertion>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_variables: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variables: Option<Vec<Value>>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// A synthetic test as returned by the get and list endpoints.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SyntheticsTestDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<SyntheticsTestConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<Creator>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitor_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<SyntheticsTestPauseStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<SyntheticsTestType>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl Model for SyntheticsTestDetails {}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SyntheticsListTestsResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tests: Option<Vec<Decoded<SyntheticsTestDetails>>>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl Model for SyntheticsListTestsResponse {}

/// Body of `delete_tests`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, bon::Builder)]
pub struct SyntheticsDeleteTestsPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub force_delete_dependencies: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_ids: Option<Vec<String>>,
    #[serde(flatten)]
    #[builder(default)]
    pub additional_properties: AdditionalProperties,
}

impl SyntheticsDeleteTestsPayload {
    pub fn new<I, S>(public_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            public_ids: Some(public_ids.into_iter().map(Into::into).collect()),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self.public_ids.as_deref() {
            Some(ids) if !ids.is_empty() => {
                if ids.iter().any(|id| id.trim().is_empty()) {
                    return Err(Error::Validation(
                        "test public ids must not be empty".to_string(),
                    ));
                }
                Ok(())
            }
            _ => Err(Error::Validation(
                "at least one test public id is required".to_string(),
            )),
        }
    }
}

impl Model for SyntheticsDeleteTestsPayload {}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SyntheticsDeletedTest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_id: Option<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SyntheticsDeleteTestsResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_tests: Option<Vec<SyntheticsDeletedTest>>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl Model for SyntheticsDeleteTestsResponse {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unparsed::Decoded;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_assertion_shapes() {
        let raw = json!({
            "public_id": "abc-def-ghi",
            "type": "api",
            "status": "live",
            "config": {
                "assertions": [
                    {"operator": "is", "type": "statusCode", "target": 200},
                    {
                        "operator": "validatesJSONPath",
                        "type": "body",
                        "target": {"jsonPath": "$.ok", "operator": "is", "targetValue": true}
                    },
                    {"operator": "validatesJSONSchema", "type": "body", "target": {}},
                    {"type": "javascript", "code": "dd.expect(dd.response.statusCode).to.equal(200);"}
                ],
                "request": {"method": "GET", "url": "https://example.org"}
            }
        });
        let test = Decoded::<SyntheticsTestDetails>::from_value(raw.clone())
            .unwrap()
            .into_typed()
            .unwrap();

        let assertions = test.config.as_ref().unwrap().assertions.as_ref().unwrap();
        let status = assertions[0].target().unwrap();
        assert_eq!(status.operator, SyntheticsAssertionOperator::Is);
        assert_eq!(status.type_, SyntheticsAssertionType::StatusCode);
        assert_eq!(status.target, json!(200));

        let json_path = assertions[1].target().unwrap();
        assert_eq!(json_path.operator, SyntheticsAssertionOperator::ValidatesJsonPath);
        assert_eq!(json_path.target["jsonPath"], json!("$.ok"));
        assert!(matches!(assertions[2], SyntheticsAssertion::Unparsed(_)));
        assert!(matches!(assertions[3], SyntheticsAssertion::Unparsed(_)));

        assert_eq!(serde_json::to_value(&test).unwrap(), raw);
    }

    #[test]
    fn test_unknown_test_type_falls_back() {
        let raw = json!({"public_id": "abc-def-ghi", "type": "carrier-pigeon"});
        let decoded = Decoded::<SyntheticsTestDetails>::from_value(raw.clone()).unwrap();
        assert!(decoded.is_unparsed());
        assert_eq!(decoded.unparsed().unwrap().get("type"), Some(&json!("carrier-pigeon")));
    }

    #[test]
    fn test_assertion_builder() {
        let assertion: SyntheticsAssertion = SyntheticsAssertionTarget::builder()
            .operator(SyntheticsAssertionOperator::LessThan)
            .type_(SyntheticsAssertionType::ResponseTime)
            .target(1000)
            .build()
            .into();
        assert_eq!(
            serde_json::to_value(&assertion).unwrap(),
            json!({"operator": "lessThan", "type": "responseTime", "target": 1000})
        );
    }

    #[test]
    fn test_delete_payload_validation() {
        assert!(SyntheticsDeleteTestsPayload::new(["abc-def-ghi"]).validate().is_ok());
        assert!(SyntheticsDeleteTestsPayload::new(Vec::<String>::new())
            .validate()
            .is_err());
        assert!(SyntheticsDeleteTestsPayload::default().validate().is_err());
        assert!(SyntheticsDeleteTestsPayload::new([" "]).validate().is_err());
    }
}
