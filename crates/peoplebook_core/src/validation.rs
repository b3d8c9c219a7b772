//! Structural field validation for request models.
//!
//! # Responsibility
//! - Let request models declare per-field rules (`required`, `email`).
//! - Check every declared rule and aggregate all violations.
//!
//! # Invariants
//! - Validation never stops at the first failing field.
//! - A failed `Required` rule skips the remaining rules of that field.
//! - `EmailAddress` accepts absent values; pair it with `Required`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+$").expect("valid email regex"));

/// Rule kinds a request field can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldRule {
    /// Value must be present, non-blank, and not the nil id.
    Required,
    /// Text value must look like `local@domain`.
    EmailAddress,
}

/// Borrowed field value inspected by rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(Option<&'a str>),
    Id(Option<Uuid>),
}

/// Rules declared for one field of a model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRules<'a> {
    pub field: &'static str,
    pub value: FieldValue<'a>,
    pub rules: Vec<(FieldRule, &'static str)>,
}

impl<'a> FieldRules<'a> {
    pub fn text(field: &'static str, value: Option<&'a str>) -> Self {
        Self {
            field,
            value: FieldValue::Text(value),
            rules: Vec::new(),
        }
    }

    pub fn id(field: &'static str, value: Option<Uuid>) -> Self {
        Self {
            field,
            value: FieldValue::Id(value),
            rules: Vec::new(),
        }
    }

    /// Appends a rule with the message reported when it fails.
    pub fn rule(mut self, rule: FieldRule, message: &'static str) -> Self {
        self.rules.push((rule, message));
        self
    }
}

/// Implemented by request models that carry structural rules.
pub trait ModelRules {
    fn field_rules(&self) -> Vec<FieldRules<'_>>;
}

/// One failed rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleViolation {
    pub field: &'static str,
    pub rule: FieldRule,
    pub message: String,
}

/// Aggregated structural validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    violations: Vec<RuleViolation>,
}

impl ValidationErrors {
    pub fn violations(&self) -> &[RuleViolation] {
        &self.violations
    }

    /// Returns whether `field` has at least one violation.
    pub fn has_field(&self, field: &str) -> bool {
        self.violations.iter().any(|item| item.field == field)
    }

    pub fn messages(&self) -> Vec<&str> {
        self.violations
            .iter()
            .map(|item| item.message.as_str())
            .collect()
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.messages().join("; "))
    }
}

impl Error for ValidationErrors {}

/// Checks every declared rule of `model`.
///
/// # Errors
/// - Returns `ValidationErrors` listing all failed rules in declaration order.
pub fn validate_model<M: ModelRules + ?Sized>(model: &M) -> Result<(), ValidationErrors> {
    let mut violations = Vec::new();

    for field in model.field_rules() {
        for (rule, message) in &field.rules {
            if rule_passes(*rule, field.value) {
                continue;
            }
            violations.push(RuleViolation {
                field: field.field,
                rule: *rule,
                message: (*message).to_string(),
            });
            if *rule == FieldRule::Required {
                break;
            }
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors { violations })
    }
}

/// Returns whether `value` is a syntactically valid email address.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

fn rule_passes(rule: FieldRule, value: FieldValue<'_>) -> bool {
    match (rule, value) {
        (FieldRule::Required, FieldValue::Text(text)) => {
            text.is_some_and(|text| !text.trim().is_empty())
        }
        (FieldRule::Required, FieldValue::Id(id)) => id.is_some_and(|id| !id.is_nil()),
        (FieldRule::EmailAddress, FieldValue::Text(Some(text))) => is_valid_email(text),
        (FieldRule::EmailAddress, _) => true,
    }
}
