//! Form validation.
//!
//! A fluent API for checking form fields. Rules run in the order they are
//! added; each field reports its first failing rule.
//!
//! # Example
//!
//! ```ignore
//! use sitekit::validation::Validator;
//!
//! let result = Validator::new()
//!     .field(&name_input, "name")
//!         .required("Name is required")
//!     .field(&email_input, "email")
//!         .required("Email is required")
//!         .email("Please enter a valid email")
//!     .validate();
//!
//! if result.is_valid() {
//!     // Proceed with form submission
//! }
//! ```

mod result;
mod validatable;
mod validator;

pub use result::{FieldError, ValidationResult};
pub use validatable::Validatable;
pub use validator::{FieldBuilder, Validator, is_valid_email};
