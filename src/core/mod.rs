//! Core types shared by both lifecycle components

pub mod error;
pub mod validation;

pub use error::{ApiError, ApiResult, ErrorBody};
pub use validation::{FieldError, Validated, ValidatedInput, ValidationRules};
