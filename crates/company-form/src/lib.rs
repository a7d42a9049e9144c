// Company Form - typed form state, validation schema and submission handling

pub mod config;
pub mod error;
pub mod field;
pub mod form;
pub mod form_context;
pub mod input;
pub mod options;
pub mod record;
pub mod schema;
pub mod sink;
pub mod validation;

pub use config::{FormConfig, OutputFormat, RevalidateMode};
pub use error::FormError;
pub use field::{Field, FieldAttrs, FieldKind, FieldName, FieldValue, Pattern};
pub use form::{Form, FormState};
pub use form_context::FormContext;
pub use input::FormInput;
pub use options::{CategoryOption, COMPANY_PURPOSE_OPTIONS, COMPANY_TYPE_OPTIONS, NO_SELECTION};
pub use record::FormRecord;
pub use schema::{schema, spec_for, validate_all, validate_field, FieldSpec};
pub use sink::{MemorySink, SubmissionSink, TracingSink};
pub use validation::{FieldErrors, FieldValidationError, Validate, ValidationResult};
