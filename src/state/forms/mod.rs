//! Form domain layer
//!
//! Type-safe field values, the registration form, the validated record
//! and the per-field rules that produce it.

mod field;
mod form_state;
mod record;
mod validation;

pub use field::{FieldName, FieldValue, FormField};
pub use form_state::{Form, FormButton, RegistrationForm};
pub use record::{FormRecord, Gender, MilitaryStatus};
pub use validation::{validate, ErrorKind, FieldError, FieldErrors, Submission};
