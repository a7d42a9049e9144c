pub mod check;
pub mod fields;
pub mod options;
pub mod submit;
