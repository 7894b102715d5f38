//! Form validation for the bookings site
//!
//! Wraps the fields of a submitted form, applies named rules to them and
//! collects one list of messages per field. Handlers decode the request body,
//! run the rules they need, then either continue or re-render the form with
//! the recorded messages.
//!
//! # Examples
//!
//! ## Validating a reservation
//!
//! ```
//! use bookings_forms::{FormData, Validator};
//!
//! let body = b"first_name=Ada&last_name=Lovelace&email=ada%40example.com&phone=";
//! let data = FormData::from_urlencoded(body).unwrap();
//!
//! let mut form = Validator::new(&data);
//! form.required(["first_name", "last_name", "email"])
//!     .min_length("first_name", 3)
//!     .is_email("email");
//!
//! assert!(form.valid());
//! assert!(!form.has("phone"));
//! ```
//!
//! ## Reporting failures
//!
//! ```
//! use bookings_forms::{FormData, Validator};
//!
//! let data = FormData::new();
//!
//! let mut form = Validator::new(&data);
//! form.required(["first_name", "email"]);
//!
//! if let Err(errors) = form.finish() {
//!     // Handlers answer with 422 and this body, or re-render the form
//!     let body = errors.to_json();
//!     assert_eq!(body["errors"]["email"][0], "This field cannot be blank");
//! }
//! ```
//!
//! ## Decoding limits
//!
//! ```
//! use bookings_forms::{FormConfig, FormData, FormError};
//!
//! let config = FormConfig::new().with_max_fields(1);
//! let result = FormData::from_urlencoded_with(b"a=1&b=2", &config);
//! assert!(matches!(result, Err(FormError::TooManyFields { .. })));
//! ```

pub mod config;
mod data;
mod errors;
mod field;
mod form;
pub mod validators;

pub use config::FormConfig;
pub use data::*;
pub use errors::*;
pub use field::*;
pub use form::*;
