//! Result viewer: sorted roster in table or card layout.

use serde::Serialize;

use crate::domain::client::ClientRecord;
use crate::domain::selection::Selection;
use crate::domain::sort::{SORT_COLUMNS, SortColumn, SortDirection, SortSpec, sort_clients};
use crate::domain::view_mode::ViewMode;

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct ColumnHeader {
    pub column: SortColumn,
    pub label: &'static str,
    pub active: bool,
    /// Current direction for the active column, ascending otherwise.
    pub direction: SortDirection,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct ClientRow {
    pub full_name: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub ssn: String,
    pub age: u32,
}

impl From<ClientRecord> for ClientRow {
    fn from(record: ClientRecord) -> Self {
        Self {
            full_name: record.full_name(),
            first_name: record.first_name,
            last_name: record.last_name,
            phone: record.phone,
            ssn: record.ssn,
            age: record.age,
        }
    }
}

/// Frame shown once a filter is chosen, including the empty-list case.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct RosterFrame {
    pub gender: String,
    pub age_label: String,
    pub summary: String,
    pub total: usize,
    pub mode: ViewMode,
    pub columns: Vec<ColumnHeader>,
    pub rows: Vec<ClientRow>,
}

impl RosterFrame {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ResultView {
    NoFilter,
    Roster(RosterFrame),
}

pub fn column_headers(sort: SortSpec) -> Vec<ColumnHeader> {
    SORT_COLUMNS
        .iter()
        .map(|&column| {
            let active = sort.column == column;
            ColumnHeader {
                column,
                label: column.label(),
                active,
                direction: if active {
                    sort.direction
                } else {
                    SortDirection::Asc
                },
            }
        })
        .collect()
}

pub fn build_result_view(
    clients: &[ClientRecord],
    selection: Option<&Selection>,
    sort: SortSpec,
    mode: ViewMode,
) -> ResultView {
    let Some(selection) = selection else {
        return ResultView::NoFilter;
    };

    let rows: Vec<ClientRow> = sort_clients(clients, sort)
        .into_iter()
        .map(ClientRow::from)
        .collect();

    ResultView::Roster(RosterFrame {
        gender: selection.gender.to_string(),
        age_label: selection.range.label(),
        summary: format!(
            "Showing {} records for age group {}",
            rows.len(),
            selection.range.label()
        ),
        total: rows.len(),
        mode,
        columns: column_headers(sort),
        rows,
    })
}
