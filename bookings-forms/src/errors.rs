// Field errors and form faults

use serde::Serialize;
use serde::ser::SerializeMap;
use std::fmt;
use thiserror::Error;

/// Per-field validation messages collected during one validation pass.
///
/// Fields are kept in the order their first error was recorded, and each
/// field keeps every message added for it. [`FieldErrors::get`] only ever
/// surfaces the first one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: Vec<(String, Vec<String>)>,
}

impl FieldErrors {
    /// Create an empty error collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` for `field`.
    ///
    /// Never fails. Adding the same message twice keeps both copies.
    pub fn add(&mut self, field: impl AsRef<str>, message: impl Into<String>) {
        let field = field.as_ref();
        let message = message.into();

        match self.entries.iter_mut().find(|(name, _)| name == field) {
            Some((_, messages)) => messages.push(message),
            None => self.entries.push((field.to_string(), vec![message])),
        }
    }

    /// First message recorded for `field`, or `""` when there is none
    pub fn get(&self, field: impl AsRef<str>) -> &str {
        self.all(field).first().map(String::as_str).unwrap_or("")
    }

    /// Every message recorded for `field`, oldest first
    pub fn all(&self, field: impl AsRef<str>) -> &[String] {
        let field = field.as_ref();
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, messages)| messages.as_slice())
            .unwrap_or(&[])
    }

    /// Check whether `field` has at least one error
    pub fn contains(&self, field: impl AsRef<str>) -> bool {
        !self.all(field).is_empty()
    }

    /// Check if there are any errors
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of fields with at least one error
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Names of the fields that failed, in first-failure order
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Each failed field with its messages, in first-failure order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, messages)| (name.as_str(), messages.as_slice()))
    }

    /// Convert to JSON representation
    ///
    /// Produces `{"errors": {"field": ["message", ...]}}`.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({ "errors": self })
    }
}

impl Serialize for FieldErrors {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (field, messages) in &self.entries {
            map.serialize_entry(field, messages)?;
        }
        map.end()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (field, messages) in &self.entries {
            for message in messages {
                writeln!(f, "{}: {}", field, message)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

/// Faults raised while decoding a submission or loading configuration.
///
/// Rule failures are never reported through this type; they land in
/// [`FieldErrors`].
#[derive(Error, Debug)]
pub enum FormError {
    /// Passthrough for `serde_urlencoded` errors. Decoding into string pairs
    /// is lossy (invalid UTF-8 becomes U+FFFD), so ordinary bodies never
    /// produce it.
    #[error("Failed to parse form data: {0}")]
    Decode(String),

    #[error("Form body of {size} bytes exceeds the {limit} byte limit")]
    BodyTooLarge { size: usize, limit: usize },

    #[error("Form has {count} fields, more than the limit of {limit}")]
    TooManyFields { count: usize, limit: usize },

    #[error("Invalid form configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, FormError>;
