// Typed field names

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Name of a submitted form field.
///
/// Field names stay free-form strings so dynamic forms keep working; the
/// wrapper exists so handlers can declare their field names once as
/// constants instead of repeating string literals at every rule call.
///
/// ```
/// use bookings_forms::{FieldName, FormData, Validator};
///
/// const EMAIL: FieldName = FieldName::from_static("email");
///
/// let mut data = FormData::new();
/// data.add("email", "me@here.com");
///
/// let mut form = Validator::new(&data);
/// form.is_email(&EMAIL);
/// assert!(form.valid());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldName(std::borrow::Cow<'static, str>);

impl FieldName {
    /// Create a field name from an owned or borrowed string
    pub fn new(name: impl Into<String>) -> Self {
        Self(std::borrow::Cow::Owned(name.into()))
    }

    /// Create a field name usable in `const` position
    pub const fn from_static(name: &'static str) -> Self {
        Self(std::borrow::Cow::Borrowed(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for FieldName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for FieldName {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&'static str> for FieldName {
    fn from(name: &'static str) -> Self {
        Self::from_static(name)
    }
}

impl From<String> for FieldName {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for FieldName {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for FieldName {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIRST_NAME: FieldName = FieldName::from_static("first_name");

    #[test]
    fn test_static_and_owned_compare_equal() {
        assert_eq!(FIRST_NAME, FieldName::new("first_name".to_string()));
        assert_eq!(FIRST_NAME, "first_name");
    }

    #[test]
    fn test_display_is_raw_name() {
        assert_eq!(FIRST_NAME.to_string(), "first_name");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&FIRST_NAME).unwrap();
        assert_eq!(json, "\"first_name\"");

        let parsed: FieldName = serde_json::from_str("\"phone\"").unwrap();
        assert_eq!(parsed, "phone");
    }
}
