use serde::{Deserialize, Serialize};

/// A single roster entry as returned by `/getClientsForAge`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ClientRecord {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub ssn: String,
    pub age: u32,
    /// Some backends omit the gender on filtered queries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}

impl ClientRecord {
    /// Display name, first and last separated by a space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Key used when sorting by name: both parts concatenated and lowercased.
    pub fn name_key(&self) -> String {
        format!("{}{}", self.first_name, self.last_name).to_lowercase()
    }
}
