//! The `Sample` document and its request/response shapes.

use bson::oid::ObjectId;
use docserve_core::document::Document;
use serde::{Deserialize, Serialize};

/// A stored sample. The identifier is assigned by the store and never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sample {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_string: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_number: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_boolean: Option<bool>,
}

impl Document for Sample {
    fn collection_name() -> &'static str {
        "samples"
    }
}

/// Fields accepted on create and update.
///
/// Absent fields are skipped when serialized, so an update only sets the fields the
/// client sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_string: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_number: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_boolean: Option<bool>,
}

/// JSON view of a [`Sample`] with the identifier rendered as a hex string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleResponse {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_string: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_number: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_boolean: Option<bool>,
}

impl SampleResponse {
    /// The view of a freshly inserted sample, built without reading it back.
    pub fn new(id: String, input: SampleInput) -> Self {
        Self {
            id,
            sample_string: input.sample_string,
            sample_number: input.sample_number,
            sample_boolean: input.sample_boolean,
        }
    }
}

impl From<Sample> for SampleResponse {
    fn from(sample: Sample) -> Self {
        Self {
            id: sample.id.to_hex(),
            sample_string: sample.sample_string,
            sample_number: sample.sample_number,
            sample_boolean: sample.sample_boolean,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docserve_core::document::DocumentExt;
    use serde_json::json;

    #[test]
    fn stores_the_identifier_under_underscore_id() {
        let sample = Sample {
            id: ObjectId::new(),
            sample_string: Some("a".to_string()),
            sample_number: None,
            sample_boolean: Some(true),
        };

        let document = sample.to_document().unwrap();

        assert_eq!(document.get_object_id("_id").unwrap(), sample.id);
        assert_eq!(document.get_str("sampleString").unwrap(), "a");
        assert!(!document.contains_key("sampleNumber"));
        assert_eq!(Sample::from_document(document).unwrap(), sample);
    }

    #[test]
    fn new_response_carries_only_the_submitted_fields() {
        let response = SampleResponse::new(
            "abc".to_string(),
            SampleInput {
                sample_boolean: Some(false),
                ..Default::default()
            },
        );

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "id": "abc", "sampleBoolean": false })
        );
    }

    #[test]
    fn response_renders_hex_identifier() {
        let id = ObjectId::new();
        let response = SampleResponse::from(Sample {
            id,
            sample_string: None,
            sample_number: Some(1.0),
            sample_boolean: None,
        });

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "id": id.to_hex(), "sampleNumber": 1.0 })
        );
    }
}
