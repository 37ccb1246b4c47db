//! Reusable field validators
//!
//! Each validator is a closure over the field name and its raw JSON value,
//! returning the violation message on failure. Validators other than
//! [`required`] and [`non_blank`] treat a missing/null value as valid, so a
//! field with several rules reports only the applicable message.

use serde_json::Value;

/// Validator: value must be present (not null)
pub fn required(
    message: &'static str,
) -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    move |_: &str, value: &Value| {
        if value.is_null() {
            Err(message.to_string())
        } else {
            Ok(())
        }
    }
}

/// Validator: string must be present and contain at least one
/// non-whitespace character
pub fn non_blank(
    message: &'static str,
) -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    move |_: &str, value: &Value| match value {
        Value::Null => Err(message.to_string()),
        Value::String(s) if s.trim().is_empty() => Err(message.to_string()),
        _ => Ok(()),
    }
}

/// Validator: number must be strictly positive
pub fn positive(
    message: &'static str,
) -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    move |_: &str, value: &Value| {
        if let Some(num) = value.as_f64() {
            if num <= 0.0 {
                return Err(message.to_string());
            }
        }
        Ok(())
    }
}

/// Validator: integer must be at least `min`
pub fn min_int(
    min: i64,
    message: &'static str,
) -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    move |_: &str, value: &Value| {
        if value.is_null() {
            return Ok(());
        }
        if let Some(num) = value.as_i64() {
            if num < min {
                return Err(message.to_string());
            }
        }
        Ok(())
    }
}
