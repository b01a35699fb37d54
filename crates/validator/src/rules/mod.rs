//! Built-in validation rules.
//!
//! Each rule is a pure function from a field name, a value, and
//! rule-specific parameters to an optional
//! [`ValidationError`](crate::foundation::ValidationError): `None` means no
//! violation. Rules never panic; malformed input degrades to a definite
//! pass or fail.
//!
//! Entities compose rules as data inside their
//! [`Validatable::validations`](crate::foundation::Validatable::validations)
//! implementation:
//!
//! ```rust
//! use fieldval::prelude::*;
//!
//! struct SignUp {
//!     email: String,
//!     password: String,
//! }
//!
//! impl Validatable for SignUp {
//!     fn validations(&self) -> Evaluations {
//!         vec![
//!             required("Email", self.email.as_str()),
//!             email("Email", &self.email),
//!             required("Password", self.password.as_str()),
//!             min_length("Password", &self.password, 8),
//!         ]
//!     }
//! }
//! ```

mod date;
mod numeric;
mod required;
mod string;

pub use date::{date_greater_than, date_less_than};
pub use numeric::between;
pub use required::required;
pub use string::{email, max_length, min_length};
