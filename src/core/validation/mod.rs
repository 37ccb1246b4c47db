//! Request validation
//!
//! Input payloads are validated against a per-entity [`ValidationRules`] set
//! before deserialization, so a single response carries every violated
//! constraint. Rules address fields by dotted path (`facility.loadingPoint`);
//! rules under an absent parent are skipped, leaving the parent's own
//! `required` rule to report it.

pub mod extractor;
pub mod validators;

pub use extractor::{Validated, ValidatedInput};

use serde::Serialize;
use serde_json::Value;

/// A single violated constraint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

type Validator = Box<dyn Fn(&str, &Value) -> Result<(), String> + Send + Sync>;

/// Ordered set of field rules for one input type
#[derive(Default)]
pub struct ValidationRules {
    rules: Vec<(&'static str, Validator)>,
}

impl ValidationRules {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Register a rule for a (possibly dotted) field path
    pub fn rule(
        mut self,
        field: &'static str,
        validator: impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + 'static,
    ) -> Self {
        self.rules.push((field, Box::new(validator)));
        self
    }

    /// Run every rule, collecting all violations in registration order
    pub fn validate(&self, payload: &Value) -> Result<(), Vec<FieldError>> {
        let mut violations = Vec::new();

        for (field, validator) in &self.rules {
            let Some(value) = lookup(payload, field) else {
                // parent sub-record absent; its own rule reports that
                continue;
            };
            if let Err(message) = validator(field, value) {
                violations.push(FieldError::new(*field, message));
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

static NULL: Value = Value::Null;

/// Resolve a dotted path. A missing leaf resolves to `Null` (so presence
/// rules fire); a missing or non-object ancestor resolves to `None` (nested
/// rules are skipped).
fn lookup<'a>(payload: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = payload;
    let mut parts = path.split('.').peekable();

    while let Some(part) = parts.next() {
        match current.get(part) {
            Some(value) => {
                if parts.peek().is_some() && !value.is_object() {
                    return None;
                }
                current = value;
            }
            None => {
                return if parts.peek().is_some() {
                    None
                } else {
                    Some(&NULL)
                };
            }
        }
    }

    Some(current)
}
