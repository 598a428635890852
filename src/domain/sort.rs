//! Client-side ordering of roster records.

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::client::ClientRecord;
use crate::domain::types::TypeConstraintError;

/// Columns the result viewer can be ordered by.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortColumn {
    #[default]
    Name,
    Phone,
    Ssn,
    Age,
}

/// Columns in header order.
pub const SORT_COLUMNS: [SortColumn; 4] = [
    SortColumn::Name,
    SortColumn::Phone,
    SortColumn::Ssn,
    SortColumn::Age,
];

impl SortColumn {
    pub fn as_str(self) -> &'static str {
        match self {
            SortColumn::Name => "name",
            SortColumn::Phone => "phone",
            SortColumn::Ssn => "ssn",
            SortColumn::Age => "age",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortColumn::Name => "Name",
            SortColumn::Phone => "Phone",
            SortColumn::Ssn => "SSN",
            SortColumn::Age => "Age",
        }
    }

    fn compare(self, a: &ClientRecord, b: &ClientRecord) -> Ordering {
        match self {
            SortColumn::Name => a.name_key().cmp(&b.name_key()),
            SortColumn::Phone => a.phone.to_lowercase().cmp(&b.phone.to_lowercase()),
            SortColumn::Ssn => a.ssn.to_lowercase().cmp(&b.ssn.to_lowercase()),
            SortColumn::Age => a.age.cmp(&b.age),
        }
    }
}

impl Display for SortColumn {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortColumn {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(SortColumn::Name),
            "phone" => Ok(SortColumn::Phone),
            "ssn" => Ok(SortColumn::Ssn),
            "age" => Ok(SortColumn::Age),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown sort column `{other}`"
            ))),
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Active sort column and direction.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SortSpec {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl SortSpec {
    pub const fn new(column: SortColumn, direction: SortDirection) -> Self {
        Self { column, direction }
    }

    /// Header click: the active column flips, any other column starts ascending.
    #[must_use]
    pub fn toggle(self, column: SortColumn) -> Self {
        if self.column == column {
            Self::new(column, self.direction.flipped())
        } else {
            Self::new(column, SortDirection::Asc)
        }
    }

    pub fn compare(self, a: &ClientRecord, b: &ClientRecord) -> Ordering {
        let ordering = self.column.compare(a, b);
        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// Returns a sorted copy of `clients`. Equal keys keep their input order.
pub fn sort_clients(clients: &[ClientRecord], spec: SortSpec) -> Vec<ClientRecord> {
    let mut sorted = clients.to_vec();
    sorted.sort_by(|a, b| spec.compare(a, b));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(first: &str, last: &str, phone: &str, ssn: &str, age: u32) -> ClientRecord {
        ClientRecord {
            first_name: first.into(),
            last_name: last.into(),
            phone: phone.into(),
            ssn: ssn.into(),
            age,
            gender: None,
        }
    }

    fn roster() -> Vec<ClientRecord> {
        vec![
            client("Ann", "Lee", "555", "111", 25),
            client("Bo", "Ng", "556", "112", 15),
            client("carl", "Diaz", "554", "A10", 71),
            client("Dana", "Abel", "553", "a09", 42),
        ]
    }

    fn first_names(clients: &[ClientRecord]) -> Vec<&str> {
        clients.iter().map(|c| c.first_name.as_str()).collect()
    }

    #[test]
    fn sorts_by_age_ascending() {
        let clients = vec![
            client("Ann", "Lee", "555", "111", 25),
            client("Bo", "Ng", "556", "112", 15),
        ];

        let sorted = sort_clients(&clients, SortSpec::new(SortColumn::Age, SortDirection::Asc));

        assert_eq!(first_names(&sorted), vec!["Bo", "Ann"]);
    }

    #[test]
    fn descending_is_exact_reverse_without_ties() {
        let clients = roster();
        for column in SORT_COLUMNS {
            let asc = sort_clients(&clients, SortSpec::new(column, SortDirection::Asc));
            let mut desc = sort_clients(&clients, SortSpec::new(column, SortDirection::Desc));
            desc.reverse();
            assert_eq!(asc, desc, "column {column}");
        }
    }

    #[test]
    fn name_sort_uses_lowercased_concatenation() {
        let clients = vec![
            client("Ann", "Zed", "1", "1", 1),
            client("anna", "Bee", "2", "2", 2),
            client("ANN", "Able", "3", "3", 3),
        ];

        let sorted = sort_clients(&clients, SortSpec::default());

        let mut expected = clients.clone();
        expected.sort_by_key(|c| format!("{}{}", c.first_name, c.last_name).to_lowercase());
        assert_eq!(sorted, expected);
        assert_eq!(first_names(&sorted), vec!["anna", "ANN", "Ann"]);
    }

    #[test]
    fn string_columns_ignore_case() {
        let sorted = sort_clients(&roster(), SortSpec::new(SortColumn::Ssn, SortDirection::Asc));

        assert_eq!(first_names(&sorted), vec!["Ann", "Bo", "Dana", "carl"]);
    }

    #[test]
    fn ties_keep_input_order_in_both_directions() {
        let clients = vec![
            client("Ann", "Lee", "1", "1", 30),
            client("Bo", "Ng", "2", "2", 30),
            client("Cy", "Oz", "3", "3", 20),
        ];

        let asc = sort_clients(&clients, SortSpec::new(SortColumn::Age, SortDirection::Asc));
        let desc = sort_clients(&clients, SortSpec::new(SortColumn::Age, SortDirection::Desc));

        assert_eq!(first_names(&asc), vec!["Cy", "Ann", "Bo"]);
        assert_eq!(first_names(&desc), vec!["Ann", "Bo", "Cy"]);
    }

    #[test]
    fn input_is_not_mutated() {
        let clients = roster();
        let before = clients.clone();

        let _ = sort_clients(&clients, SortSpec::new(SortColumn::Age, SortDirection::Desc));

        assert_eq!(clients, before);
    }

    #[test]
    fn toggle_flips_active_column_and_resets_new_one() {
        let spec = SortSpec::default();

        let flipped = spec.toggle(SortColumn::Name);
        assert_eq!(flipped, SortSpec::new(SortColumn::Name, SortDirection::Desc));

        let reset = flipped.toggle(SortColumn::Age);
        assert_eq!(reset, SortSpec::new(SortColumn::Age, SortDirection::Asc));

        assert_eq!(reset.toggle(SortColumn::Age).direction, SortDirection::Desc);
    }

    #[test]
    fn parses_column_names() {
        assert_eq!("AGE".parse::<SortColumn>(), Ok(SortColumn::Age));
        assert!("email".parse::<SortColumn>().is_err());
    }
}
