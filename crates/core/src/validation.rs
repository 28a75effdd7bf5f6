//! Declarative field validation.
//!
//! A representation describes its constraints as a static rule table
//! ([`FieldRule`]s) and exposes each field as a [`FieldValue`]. Evaluation
//! walks the whole table and collects **every** violation; nothing short-circuits.

use rust_decimal::Decimal;

/// A single constraint predicate attached to a field.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConstraintKind {
    /// The value must be absent.
    Null,
    /// The value must be present.
    NotNull,
    /// The value must be present and contain at least one non-whitespace character.
    NotBlank,
    /// Text length (in chars) must lie in `min..=max`. Absent values pass.
    Size { min: usize, max: usize },
    /// Numeric value must be strictly greater than zero. Absent values pass.
    Positive,
}

impl ConstraintKind {
    /// Returns `true` when `value` satisfies this constraint.
    pub fn is_satisfied_by(&self, value: &FieldValue<'_>) -> bool {
        match (self, value) {
            (ConstraintKind::Null, v) => v.is_absent(),
            (ConstraintKind::NotNull, v) => !v.is_absent(),
            (ConstraintKind::NotBlank, FieldValue::Absent) => false,
            (ConstraintKind::NotBlank, FieldValue::Text(s)) => !s.trim().is_empty(),
            (ConstraintKind::NotBlank, _) => true,
            (ConstraintKind::Size { min, max }, FieldValue::Text(s)) => {
                let len = s.chars().count();
                len >= *min && len <= *max
            }
            (ConstraintKind::Size { .. }, _) => true,
            (ConstraintKind::Positive, FieldValue::Integer(n)) => *n > 0,
            (ConstraintKind::Positive, FieldValue::Decimal(d)) => *d > Decimal::ZERO,
            (ConstraintKind::Positive, _) => true,
        }
    }

    /// Human-readable violation message.
    pub fn message(&self) -> String {
        match self {
            ConstraintKind::Null => "must be null".to_string(),
            ConstraintKind::NotNull => "must not be null".to_string(),
            ConstraintKind::NotBlank => "must not be blank".to_string(),
            ConstraintKind::Size { min, max } => format!("size must be between {min} and {max}"),
            ConstraintKind::Positive => "must be greater than 0".to_string(),
        }
    }
}

/// A field's value as seen by the validator.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    Absent,
    Text(&'a str),
    Integer(i64),
    Decimal(Decimal),
    /// Any other present value (identifiers, timestamps, enums), in display form.
    Present(String),
}

impl FieldValue<'_> {
    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Absent)
    }

    fn display(&self) -> Option<String> {
        match self {
            FieldValue::Absent => None,
            FieldValue::Text(s) => Some((*s).to_string()),
            FieldValue::Integer(n) => Some(n.to_string()),
            FieldValue::Decimal(d) => Some(d.to_string()),
            FieldValue::Present(s) => Some(s.clone()),
        }
    }
}

impl<'a> From<Option<&'a str>> for FieldValue<'a> {
    fn from(value: Option<&'a str>) -> Self {
        value.map_or(FieldValue::Absent, FieldValue::Text)
    }
}

impl From<Option<i64>> for FieldValue<'_> {
    fn from(value: Option<i64>) -> Self {
        value.map_or(FieldValue::Absent, FieldValue::Integer)
    }
}

impl From<Option<i32>> for FieldValue<'_> {
    fn from(value: Option<i32>) -> Self {
        value.map_or(FieldValue::Absent, |n| FieldValue::Integer(i64::from(n)))
    }
}

impl From<Option<Decimal>> for FieldValue<'_> {
    fn from(value: Option<Decimal>) -> Self {
        value.map_or(FieldValue::Absent, FieldValue::Decimal)
    }
}

/// Ordered constraints declared on one field.
#[derive(Debug, Copy, Clone)]
pub struct FieldRule {
    pub field: &'static str,
    pub constraints: &'static [ConstraintKind],
}

/// One failed constraint on one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintViolation {
    pub property_path: String,
    pub message: String,
    pub invalid_value: Option<String>,
}

impl core::fmt::Display for ConstraintViolation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.property_path, self.message)
    }
}

/// Types carrying a declarative rule table.
pub trait Validate {
    /// Rule table, in declaration order.
    fn rules() -> &'static [FieldRule];

    /// Current value of `field`; unknown fields read as [`FieldValue::Absent`].
    fn field_value(&self, field: &str) -> FieldValue<'_>;

    /// Evaluate every rule and collect all violations in rule-table order.
    fn violations(&self) -> Vec<ConstraintViolation> {
        let mut out = Vec::new();
        for rule in Self::rules() {
            let value = self.field_value(rule.field);
            for constraint in rule.constraints {
                if !constraint.is_satisfied_by(&value) {
                    out.push(ConstraintViolation {
                        property_path: rule.field.to_string(),
                        message: constraint.message(),
                        invalid_value: value.display(),
                    });
                }
            }
        }
        out
    }

    fn validate(&self) -> Result<(), Vec<ConstraintViolation>> {
        let violations = self.violations();
        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }
}
