//! Field validation rules.
//!
//! Every content field is required and length-bounded. Lengths count
//! characters, not bytes. A failing field yields exactly one message and all
//! failing fields are reported together.

use std::collections::BTreeMap;
use std::fmt;

use crate::record::HedgehogFields;

/// A validated content field of a hedgehog record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    CommonName,
    BinomialName,
    Description,
    ImageUrl,
}

impl Field {
    /// All fields in display order.
    pub const ALL: [Field; 4] = [
        Field::CommonName,
        Field::BinomialName,
        Field::Description,
        Field::ImageUrl,
    ];

    /// Human-readable label used at the start of messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::CommonName => "Common name",
            Self::BinomialName => "Binomial name",
            Self::Description => "Description",
            Self::ImageUrl => "Image URL",
        }
    }

    /// Name of the form input carrying this field.
    pub fn form_key(self) -> &'static str {
        match self {
            Self::CommonName => "commonName",
            Self::BinomialName => "binomialName",
            Self::Description => "description",
            Self::ImageUrl => "imageURL",
        }
    }

    /// Flash key under which this field's error message travels.
    pub fn flash_key(self) -> &'static str {
        match self {
            Self::CommonName => "commonNameError",
            Self::BinomialName => "binomialNameError",
            Self::Description => "descriptionError",
            Self::ImageUrl => "imageURLError",
        }
    }

    /// Inclusive (min, max) length in characters.
    pub fn bounds(self) -> (usize, usize) {
        match self {
            Self::CommonName | Self::BinomialName => (2, 100),
            Self::Description => (2, 1000),
            Self::ImageUrl => (2, 500),
        }
    }

    /// The submitted value for this field, if any.
    pub fn value(self, fields: &HedgehogFields) -> Option<&str> {
        match self {
            Self::CommonName => fields.common_name.as_deref(),
            Self::BinomialName => fields.binomial_name.as_deref(),
            Self::Description => fields.description.as_deref(),
            Self::ImageUrl => fields.image_url.as_deref(),
        }
    }

    /// Check a single value against this field's rules.
    pub fn check(self, value: Option<&str>) -> Result<(), String> {
        let Some(value) = value.filter(|v| !v.is_empty()) else {
            return Err(format!("{} is required.", self.label()));
        };
        let (min, max) = self.bounds();
        let len = value.chars().count();
        if len < min || len > max {
            return Err(format!(
                "{} must be between {min} and {max} characters.",
                self.label()
            ));
        }
        Ok(())
    }
}

/// Field-keyed validation messages, at most one per field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    messages: BTreeMap<Field, String>,
}

impl ValidationErrors {
    /// Message for a given field, if it failed.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.messages.get(&field).map(String::as_str)
    }

    /// Whether the given field failed.
    pub fn contains(&self, field: Field) -> bool {
        self.messages.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Iterate over failing fields and their messages in field order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.messages.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (_, message) in self.iter() {
            if !first {
                f.write_str(" ")?;
            }
            f.write_str(message)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Content fields that passed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidFields {
    pub common_name: String,
    pub binomial_name: String,
    pub description: String,
    pub image_url: String,
}

/// Validate a full set of content fields.
pub fn validate(fields: &HedgehogFields) -> Result<ValidFields, ValidationErrors> {
    let mut errors = ValidationErrors::default();
    for field in Field::ALL {
        if let Err(message) = field.check(field.value(fields)) {
            errors.messages.insert(field, message);
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    let owned = |v: &Option<String>| v.clone().unwrap_or_default();
    Ok(ValidFields {
        common_name: owned(&fields.common_name),
        binomial_name: owned(&fields.binomial_name),
        description: owned(&fields.description),
        image_url: owned(&fields.image_url),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> HedgehogFields {
        HedgehogFields::new(
            "Western European Hedgehog",
            "Erinaceus europaeus",
            "Found across western and northern Europe in gardens.",
            "http://example.com/a.jpg",
        )
    }

    #[test]
    fn valid_fields_pass() {
        let ok = validate(&valid()).unwrap();
        assert_eq!(ok.common_name, "Western European Hedgehog");
        assert_eq!(ok.image_url, "http://example.com/a.jpg");
    }

    #[test]
    fn missing_fields_are_required() {
        let errors = validate(&HedgehogFields::default()).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get(Field::CommonName), Some("Common name is required."));
        assert_eq!(errors.get(Field::BinomialName), Some("Binomial name is required."));
        assert_eq!(errors.get(Field::Description), Some("Description is required."));
        assert_eq!(errors.get(Field::ImageUrl), Some("Image URL is required."));
    }

    #[test]
    fn empty_string_is_required() {
        let mut fields = valid();
        fields.binomial_name = Some(String::new());
        let errors = validate(&fields).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::BinomialName), Some("Binomial name is required."));
    }

    #[test]
    fn short_common_name_rejected() {
        let mut fields = valid();
        fields.common_name = Some("H".to_string());
        let errors = validate(&fields).unwrap_err();
        assert_eq!(
            errors.get(Field::CommonName),
            Some("Common name must be between 2 and 100 characters.")
        );
        assert!(!errors.contains(Field::Description));
    }

    #[test]
    fn description_boundaries() {
        for (len, ok) in [(1, false), (2, true), (1000, true), (1001, false)] {
            let mut fields = valid();
            fields.description = Some("d".repeat(len));
            assert_eq!(validate(&fields).is_ok(), ok, "description length {len}");
        }
    }

    #[test]
    fn every_field_enforces_its_bounds() {
        let cases = [
            (Field::CommonName, 100),
            (Field::BinomialName, 100),
            (Field::Description, 1000),
            (Field::ImageUrl, 500),
        ];
        for (field, max) in cases {
            assert_eq!(field.bounds(), (2, max), "{field:?}");
            for (len, ok) in [(1, false), (2, true), (max, true), (max + 1, false)] {
                let mut fields = valid();
                let value = Some("a".repeat(len));
                match field {
                    Field::CommonName => fields.common_name = value,
                    Field::BinomialName => fields.binomial_name = value,
                    Field::Description => fields.description = value,
                    Field::ImageUrl => fields.image_url = value,
                }

                match validate(&fields) {
                    Ok(_) => assert!(ok, "{field:?} length {len} accepted"),
                    Err(errors) => {
                        assert!(!ok, "{field:?} length {len} rejected");
                        assert_eq!(errors.len(), 1);
                        assert_eq!(
                            errors.get(field),
                            Some(
                                format!(
                                    "{} must be between 2 and {max} characters.",
                                    field.label()
                                )
                                .as_str()
                            )
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn image_url_upper_bound() {
        let mut fields = valid();
        fields.image_url = Some(format!("http://{}", "a".repeat(493)));
        assert!(validate(&fields).is_ok());
        fields.image_url = Some(format!("http://{}", "a".repeat(494)));
        assert_eq!(
            validate(&fields).unwrap_err().get(Field::ImageUrl),
            Some("Image URL must be between 2 and 500 characters.")
        );
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let mut fields = valid();
        // 100 multibyte characters, 300 bytes
        fields.common_name = Some("é".repeat(100));
        assert!(validate(&fields).is_ok());
    }

    #[test]
    fn multiple_failures_reported_together() {
        let mut fields = valid();
        fields.common_name = Some("x".to_string());
        fields.description = Some("y".repeat(1001));
        let errors = validate(&fields).unwrap_err();
        let failed: Vec<Field> = errors.iter().map(|(f, _)| f).collect();
        assert_eq!(failed, vec![Field::CommonName, Field::Description]);
        assert_eq!(
            errors.to_string(),
            "Common name must be between 2 and 100 characters. \
             Description must be between 2 and 1000 characters."
        );
    }

    #[test]
    fn flash_keys_match_form_templates() {
        let keys: Vec<&str> = Field::ALL.iter().map(|f| f.flash_key()).collect();
        assert_eq!(
            keys,
            vec!["commonNameError", "binomialNameError", "descriptionError", "imageURLError"]
        );
    }
}
