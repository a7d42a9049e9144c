//! Company Form Validation Core
//!
//! Pure validation predicates with no knowledge of the form they serve.
//! The schema in `company-form` pairs these with field names and messages.

pub mod numeric;
pub mod pattern;
pub mod string;

// Re-export all validators
pub use numeric::*;
pub use pattern::*;
pub use string::*;
