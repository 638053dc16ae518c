//! Product validation.
//!
//! Each field has its own check. Checks run independently and every
//! violation is collected before returning, so a client sees all the
//! problems with a payload at once.

use std::{
    cmp::Ordering,
    error::Error,
    fmt::{Display, Formatter, Result as FmtResult},
    num::FpCategory,
};

use once_cell::sync::Lazy;
use regex::Regex;
use smallvec::SmallVec;

use crate::domain::products::records::ProductRecord;

/// Minimum length, in characters, of names and descriptions.
pub const MIN_TEXT_LENGTH: usize = 3;

/// Three lowercase words joined by hyphens, e.g. `abc-def-ghi`.
///
/// Not anchored: the pattern is searched for anywhere in the value.
#[expect(clippy::expect_used, reason = "the pattern is a constant")]
static SKU_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-z]+-[a-z]+-[a-z]+").expect("SKU pattern should be valid"));

/// A single failed rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// The field is empty or zero.
    Required,

    /// The field is shorter than the given number of characters.
    MinLength(usize),

    /// The field must be strictly greater than zero.
    Positive,

    /// The field must contain exactly one `word-word-word` run.
    SkuFormat,
}

impl Display for Rule {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Required => f.write_str("is required"),
            Self::MinLength(min) => write!(f, "must be at least {min} characters"),
            Self::Positive => f.write_str("must be greater than 0"),
            Self::SkuFormat => f.write_str("must match the pattern abc-def-ghi exactly once"),
        }
    }
}

/// A rule failed by one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub rule: Rule,
}

impl FieldViolation {
    const fn new(field: &'static str, rule: Rule) -> Self {
        Self { field, rule }
    }
}

impl Display for FieldViolation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} {}", self.field, self.rule)
    }
}

/// Every violation found in a product, in field order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors(SmallVec<[FieldViolation; 4]>);

impl ValidationErrors {
    pub fn iter(&self) -> impl Iterator<Item = &FieldViolation> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `field` failed any rule.
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|violation| violation.field == field)
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for (index, violation) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }

            Display::fmt(violation, f)?;
        }

        Ok(())
    }
}

impl Error for ValidationErrors {}

type Check = fn(&ProductRecord) -> Option<FieldViolation>;

const CHECKS: [Check; 4] = [
    |product: &ProductRecord| text("name", &product.name),
    |product: &ProductRecord| text("description", &product.description),
    |product: &ProductRecord| positive("price", product.price),
    |product: &ProductRecord| sku("sku", &product.sku),
];

/// Validate every field of `product`.
///
/// # Errors
///
/// Returns all field violations when at least one check fails.
pub fn validate(product: &ProductRecord) -> Result<(), ValidationErrors> {
    let violations: SmallVec<[FieldViolation; 4]> =
        CHECKS.iter().filter_map(|check| check(product)).collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(violations))
    }
}

fn text(field: &'static str, value: &str) -> Option<FieldViolation> {
    if value.is_empty() {
        return Some(FieldViolation::new(field, Rule::Required));
    }

    (value.chars().count() < MIN_TEXT_LENGTH)
        .then(|| FieldViolation::new(field, Rule::MinLength(MIN_TEXT_LENGTH)))
}

fn positive(field: &'static str, value: f64) -> Option<FieldViolation> {
    if value.classify() == FpCategory::Zero {
        return Some(FieldViolation::new(field, Rule::Required));
    }

    match value.partial_cmp(&0.0) {
        Some(Ordering::Greater) => None,
        _ => Some(FieldViolation::new(field, Rule::Positive)),
    }
}

fn sku(field: &'static str, value: &str) -> Option<FieldViolation> {
    if value.is_empty() {
        return Some(FieldViolation::new(field, Rule::Required));
    }

    (SKU_PATTERN.find_iter(value).count() != 1)
        .then(|| FieldViolation::new(field, Rule::SkuFormat))
}
