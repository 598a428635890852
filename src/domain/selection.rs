use serde::Serialize;

use crate::domain::types::{AgeRange, GenderName, TypeConstraintError};

/// The user's current gender and age bracket filter.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Selection {
    pub gender: GenderName,
    pub range: AgeRange,
}

impl Selection {
    pub fn new(gender: GenderName, range: AgeRange) -> Self {
        Self { gender, range }
    }

    /// Validates raw leaf coordinates as posted by the filter tree.
    pub fn parse(gender: &str, low: u32, high: u32) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            gender: GenderName::new(gender)?,
            range: AgeRange::new(low, high)?,
        })
    }

    /// True when this selection points at the given leaf.
    pub fn matches(&self, gender: &str, range: AgeRange) -> bool {
        self.gender.as_str() == gender && self.range == range
    }
}
