use serde::{Deserialize, Serialize};

/// Number of roster entries recorded for one gender value.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenderSummary {
    pub gender: String,
    pub count: u64,
}

impl GenderSummary {
    pub fn new(gender: impl Into<String>, count: u64) -> Self {
        Self {
            gender: gender.into(),
            count,
        }
    }
}
