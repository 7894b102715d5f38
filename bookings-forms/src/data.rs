//! Submitted form values.
//!
//! [`FormData`] maps each field name to every value submitted for it, in
//! submission order. Multi-select inputs and repeated keys produce more than
//! one value; single-value checks look at the first.

use crate::{FormConfig, FormError, Result};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tracing::{debug, warn};

/// Field name to submitted values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    values: HashMap<String, Vec<String>>,
}

impl FormData {
    /// Create an empty submission
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode an `application/x-www-form-urlencoded` body with default limits
    pub fn from_urlencoded(body: &[u8]) -> Result<Self> {
        Self::from_urlencoded_with(body, &FormConfig::default())
    }

    /// Decode an `application/x-www-form-urlencoded` body, enforcing `config`
    pub fn from_urlencoded_with(body: &[u8], config: &FormConfig) -> Result<Self> {
        if body.len() > config.max_body_bytes {
            warn!(
                size = body.len(),
                limit = config.max_body_bytes,
                "Rejected oversized form body"
            );
            return Err(FormError::BodyTooLarge {
                size: body.len(),
                limit: config.max_body_bytes,
            });
        }

        let pairs: Vec<(String, String)> =
            serde_urlencoded::from_bytes(body).map_err(|e| FormError::Decode(e.to_string()))?;

        let data: Self = pairs.into_iter().collect();

        if data.len() > config.max_fields {
            warn!(
                count = data.len(),
                limit = config.max_fields,
                "Rejected form with too many fields"
            );
            return Err(FormError::TooManyFields {
                count: data.len(),
                limit: config.max_fields,
            });
        }

        debug!(fields = data.len(), "Decoded form body");
        Ok(data)
    }

    /// Append a value for `field`, keeping any earlier ones
    pub fn add(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.values.entry(field.into()).or_default().push(value.into());
    }

    /// Replace every value of `field` with `value`
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.values.insert(field.into(), vec![value.into()]);
    }

    /// First value of `field`, or `""` when it was not submitted
    pub fn get(&self, field: impl AsRef<str>) -> &str {
        self.values(field).first().map(String::as_str).unwrap_or("")
    }

    /// Every value submitted for `field`
    pub fn values(&self, field: impl AsRef<str>) -> &[String] {
        self.values
            .get(field.as_ref())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains(&self, field: impl AsRef<str>) -> bool {
        self.values.contains_key(field.as_ref())
    }

    /// Number of distinct field names
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Submitted field names, in no particular order
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

impl From<HashMap<String, Vec<String>>> for FormData {
    fn from(values: HashMap<String, Vec<String>>) -> Self {
        Self { values }
    }
}

impl<K, V> FromIterator<(K, V)> for FormData
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values: HashMap<String, Vec<String>> = HashMap::new();
        for (field, value) in iter {
            match values.entry(field.into()) {
                Entry::Occupied(mut entry) => entry.get_mut().push(value.into()),
                Entry::Vacant(entry) => {
                    entry.insert(vec![value.into()]);
                }
            }
        }
        Self { values }
    }
}
