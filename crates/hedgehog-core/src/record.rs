//! The hedgehog record and its form-shaped input.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque record identifier assigned by the store.
///
/// New ids are UUID v4 values in their 32-character lowercase hex form.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Generate a fresh, unused identifier.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string())
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// The four content fields of a record, as submitted by a form.
///
/// Every field is optional so that a missing form key is distinguishable
/// from a present-but-invalid value; validation turns both into messages.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HedgehogFields {
    #[serde(rename = "commonName", default)]
    pub common_name: Option<String>,
    #[serde(rename = "binomialName", default)]
    pub binomial_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "imageURL", default)]
    pub image_url: Option<String>,
}

impl HedgehogFields {
    /// Build a fully populated set of fields.
    pub fn new(
        common_name: impl Into<String>,
        binomial_name: impl Into<String>,
        description: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            common_name: Some(common_name.into()),
            binomial_name: Some(binomial_name.into()),
            description: Some(description.into()),
            image_url: Some(image_url.into()),
        }
    }
}

/// A persisted hedgehog species entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HedgehogRecord {
    pub id: RecordId,
    #[serde(rename = "commonName")]
    pub common_name: String,
    #[serde(rename = "binomialName")]
    pub binomial_name: String,
    pub description: String,
    #[serde(rename = "imageURL")]
    pub image_url: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl HedgehogRecord {
    /// The record's content fields, e.g. to prefill an edit form.
    pub fn fields(&self) -> HedgehogFields {
        HedgehogFields::new(
            self.common_name.clone(),
            self.binomial_name.clone(),
            self.description.clone(),
            self.image_url.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_hex_and_distinct() {
        let a = RecordId::generate();
        let b = RecordId::generate();
        assert_eq!(a.as_str().len(), 32);
        assert!(a.as_str().chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, b);
    }

    #[test]
    fn fields_deserialize_from_form_keys() {
        let json = r#"{"commonName":"Four-toed hedgehog","binomialName":"Atelerix albiventris","imageURL":"https://example.com/h.jpg"}"#;
        let fields: HedgehogFields = serde_json::from_str(json).unwrap();
        assert_eq!(fields.common_name.as_deref(), Some("Four-toed hedgehog"));
        assert_eq!(fields.binomial_name.as_deref(), Some("Atelerix albiventris"));
        assert_eq!(fields.image_url.as_deref(), Some("https://example.com/h.jpg"));
        assert_eq!(fields.description, None);
    }

    #[test]
    fn record_fields_round_trip() {
        let now = Utc::now();
        let record = HedgehogRecord {
            id: RecordId::from("a1"),
            common_name: "Long-eared hedgehog".to_string(),
            binomial_name: "Hemiechinus auritus".to_string(),
            description: "Small, with very long ears.".to_string(),
            image_url: "https://example.com/le.jpg".to_string(),
            created_at: now,
            updated_at: now,
        };
        let fields = record.fields();
        assert_eq!(fields.common_name.as_deref(), Some("Long-eared hedgehog"));
        assert_eq!(fields.image_url.as_deref(), Some("https://example.com/le.jpg"));
    }
}
