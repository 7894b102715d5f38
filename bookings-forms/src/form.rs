// Form validator

use crate::validators::{self, INVALID_EMAIL_MESSAGE, REQUIRED_MESSAGE};
use crate::{FieldErrors, FormData};
use tracing::debug;

/// Applies validation rules to one submission.
///
/// The validator borrows the submitted [`FormData`] and owns the
/// [`FieldErrors`] its rules record into. Build one per request; rules run
/// in whatever order they are called and none of them stops the others, so
/// every failing field is reported in a single pass.
///
/// ```
/// use bookings_forms::{FormData, Validator};
///
/// let data = FormData::from_urlencoded(b"first_name=Ada&email=not-an-email").unwrap();
///
/// let mut form = Validator::new(&data);
/// form.required(["first_name", "last_name", "email"])
///     .min_length("first_name", 3)
///     .is_email("email");
///
/// assert!(!form.valid());
/// assert_eq!(form.errors().get("last_name"), "This field cannot be blank");
/// assert_eq!(form.errors().get("email"), "Invalid email address");
/// assert_eq!(form.errors().get("first_name"), "");
/// ```
#[derive(Debug, Clone)]
pub struct Validator<'a> {
    data: &'a FormData,
    errors: FieldErrors,
}

impl<'a> Validator<'a> {
    /// Create a validator with no recorded errors
    pub fn new(data: &'a FormData) -> Self {
        Self {
            data,
            errors: FieldErrors::new(),
        }
    }

    /// True while no rule has recorded an error
    pub fn valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Check `field` was submitted with a non-blank first value.
    ///
    /// Records nothing.
    pub fn has(&self, field: impl AsRef<str>) -> bool {
        validators::is_present(self.data.get(field))
    }

    /// Record "This field cannot be blank" for each missing or blank field
    pub fn required<I>(&mut self, fields: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for field in fields {
            let field = field.as_ref();
            if !self.has(field) {
                debug!(field, rule = "required", "Form field failed validation");
                self.errors.add(field, REQUIRED_MESSAGE);
            }
        }
        self
    }

    /// Require at least `length` characters once surrounding whitespace is
    /// trimmed. A missing field counts as empty and fails for any
    /// `length > 0`.
    pub fn min_length(&mut self, field: impl AsRef<str>, length: usize) -> &mut Self {
        let field = field.as_ref();
        if !validators::meets_min_length(self.data.get(field), length) {
            debug!(
                field,
                rule = "min_length",
                min = length,
                "Form field failed validation"
            );
            self.errors.add(field, validators::min_length_message(length));
        }
        self
    }

    /// Require the raw first value of `field` to be an email address
    pub fn is_email(&mut self, field: impl AsRef<str>) -> &mut Self {
        let field = field.as_ref();
        if !validators::is_email(self.data.get(field)) {
            debug!(field, rule = "is_email", "Form field failed validation");
            self.errors.add(field, INVALID_EMAIL_MESSAGE);
        }
        self
    }

    /// Submitted values being validated
    pub fn data(&self) -> &'a FormData {
        self.data
    }

    /// First submitted value of `field`, for re-rendering the form
    pub fn get(&self, field: impl AsRef<str>) -> &'a str {
        self.data.get(field)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Consume the validator, keeping only its errors
    pub fn into_errors(self) -> FieldErrors {
        self.errors
    }

    /// Consume the validator, returning the errors if any rule failed
    pub fn finish(self) -> Result<(), FieldErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}
