//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (non-empty gender labels, the fixed
//! set of age brackets) so that once a value reaches the dashboard model it
//! can be treated as trusted.
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided bounds do not match one of the fixed age brackets.
    #[error("unsupported age range {0}-{1}")]
    UnsupportedAgeRange(u32, u32),
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Gender label exactly as reported by the roster backend.
///
/// The value is kept verbatim so it matches the summary entry it came from;
/// only blank labels are rejected.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "String", into = "String")]
pub struct GenderName(String);

impl GenderName {
    /// Rejects empty and whitespace-only labels.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let value = value.into();
        if value.trim().is_empty() {
            Err(TypeConstraintError::EmptyString)
        } else {
            Ok(Self(value))
        }
    }

    /// Borrow the label as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the owned inner `String`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for GenderName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for GenderName {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for GenderName {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<GenderName> for String {
    fn from(value: GenderName) -> Self {
        value.0
    }
}

/// One of the fixed age brackets offered under every gender node.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq, Hash)]
pub struct AgeRange {
    low: u32,
    high: u32,
}

/// The brackets in display order.
pub const AGE_RANGES: [AgeRange; 3] = [
    AgeRange { low: 10, high: 30 },
    AgeRange { low: 30, high: 60 },
    AgeRange { low: 60, high: 90 },
];

impl AgeRange {
    /// Looks up the bracket with exactly these bounds.
    pub fn new(low: u32, high: u32) -> Result<Self, TypeConstraintError> {
        AGE_RANGES
            .iter()
            .copied()
            .find(|range| range.low == low && range.high == high)
            .ok_or(TypeConstraintError::UnsupportedAgeRange(low, high))
    }

    pub const fn low(self) -> u32 {
        self.low
    }

    pub const fn high(self) -> u32 {
        self.high
    }

    /// Short label such as `10-30`.
    pub fn label(self) -> String {
        format!("{}-{}", self.low, self.high)
    }
}

impl Display for AgeRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}
