use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::utils::config::{LINK_LABEL, LINK_REL, LINK_TARGET};

/// Table headers, in the same order as [`AssessmentRecord::columns`]
pub const COLUMN_HEADERS: [&str; 5] = [
    "Name",
    "Duration",
    "Test Type",
    "Remote Testing Support",
    "Link",
];

/// The anchor in the last column of a result row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultLink<'a> {
    pub href: &'a str,
    pub label: &'static str,
    pub target: &'static str,
    pub rel: &'static str,
}

/// Body of a `POST /query` request
#[derive(Debug, Serialize)]
pub struct QueryRequest<'a> {
    pub query: &'a str,
}

/// One row of the result table, as returned by the API.
///
/// Every field is optional on the wire. Missing, `null` and boolean values
/// become empty strings; numbers and nested values keep their JSON text so
/// that a numeric length such as `30` still shows up in the table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    #[serde(rename = "Assessment Name", default, deserialize_with = "display_value")]
    pub name: String,
    #[serde(rename = "Assessment Length", default, deserialize_with = "display_value")]
    pub duration: String,
    #[serde(rename = "Test Type", default, deserialize_with = "display_value")]
    pub test_type: String,
    #[serde(rename = "Remote Testing", default, deserialize_with = "display_value")]
    pub remote_testing: String,
    #[serde(rename = "URL", default, deserialize_with = "display_value")]
    pub url: String,
}

impl AssessmentRecord {
    /// Build a record from any JSON value; anything that is not an object yields empty cells
    pub fn from_value(value: &Value) -> Self {
        value
            .as_object()
            .and_then(|_| AssessmentRecord::deserialize(value).ok())
            .unwrap_or_default()
    }

    /// Cell values in column order
    pub fn columns(&self) -> [&str; 5] {
        [
            self.name.as_str(),
            self.duration.as_str(),
            self.test_type.as_str(),
            self.remote_testing.as_str(),
            self.url.as_str(),
        ]
    }

    /// Opens the record's URL in a new browsing context with no opener or referrer
    pub fn link(&self) -> ResultLink<'_> {
        ResultLink {
            href: &self.url,
            label: LINK_LABEL,
            target: LINK_TARGET,
            rel: LINK_REL,
        }
    }
}

fn display_value<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null | Value::Bool(_) => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

/// Extract the result list from a successful response body.
///
/// Bodies that are not JSON, lack a `results` field, or carry something other
/// than an array there all decode to an empty list.
pub fn decode_results(body: &[u8]) -> Vec<AssessmentRecord> {
    let Ok(value) = serde_json::from_slice::<Value>(body) else {
        return Vec::new();
    };

    value
        .get("results")
        .and_then(Value::as_array)
        .map(|entries| entries.iter().map(AssessmentRecord::from_value).collect())
        .unwrap_or_default()
}

/// The `error` message of an API error body, if there is one
pub fn decode_error_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<Value>(body)
        .ok()?
        .get("error")?
        .as_str()
        .map(str::to_string)
}
