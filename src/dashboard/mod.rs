//! Dashboard view-model.
//!
//! [`DashboardModel`] holds every piece of UI state. It is never mutated in
//! place: [`DashboardModel::reduce`] consumes the current model together with
//! a [`DashboardEvent`] and returns the next one, and [`DashboardModel::render`]
//! derives the complete [`DashboardView`] from a model.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::domain::client::ClientRecord;
use crate::domain::gender::GenderSummary;
use crate::domain::selection::Selection;
use crate::domain::sort::{SortColumn, SortSpec};
use crate::domain::view_mode::ViewMode;

pub mod filter_tree;
pub mod store;
pub mod viewer;

use filter_tree::{GenderNode, build_filter_tree};
use viewer::{ResultView, build_result_view};

/// Sequence number of a client-list fetch within one session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestToken(u64);

impl RequestToken {
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DashboardEvent {
    /// The gender summary arrived; replaces the previous list wholesale.
    GendersLoaded(Vec<GenderSummary>),
    /// A gender node header was clicked. Ignored for genders not in the summary.
    ToggleGender(String),
    /// A client-list fetch was issued with this token.
    ClientsRequested(RequestToken),
    /// A client-list fetch succeeded.
    ClientsLoaded {
        token: RequestToken,
        selection: Selection,
        clients: Vec<ClientRecord>,
    },
    /// A column header was clicked.
    SortBy(SortColumn),
    SetViewMode(ViewMode),
    /// Full reload: everything back to defaults.
    Reload,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DashboardModel {
    genders: Vec<GenderSummary>,
    clients: Vec<ClientRecord>,
    selection: Option<Selection>,
    sort: SortSpec,
    view_mode: ViewMode,
    expanded: BTreeSet<String>,
    latest_request: RequestToken,
}

/// Everything a template or API consumer needs to draw the dashboard.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct DashboardView {
    pub filters: Vec<GenderNode>,
    pub result: ResultView,
    pub selection: Option<Selection>,
    pub sort: SortSpec,
    pub view_mode: ViewMode,
}

impl DashboardModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn genders(&self) -> &[GenderSummary] {
        &self.genders
    }

    pub fn clients(&self) -> &[ClientRecord] {
        &self.clients
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn sort(&self) -> SortSpec {
        self.sort
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn is_expanded(&self, gender: &str) -> bool {
        self.expanded.contains(gender)
    }

    pub fn latest_request(&self) -> RequestToken {
        self.latest_request
    }

    /// True when `token` belongs to the most recently issued fetch.
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.latest_request == token
    }

    #[must_use]
    pub fn reduce(self, event: DashboardEvent) -> Self {
        match event {
            DashboardEvent::GendersLoaded(genders) => Self { genders, ..self },
            // Genders missing from the current summary have no node to open.
            DashboardEvent::ToggleGender(gender) => {
                if self.genders.iter().any(|summary| summary.gender == gender) {
                    Self {
                        expanded: filter_tree::toggle(&self.expanded, &gender),
                        ..self
                    }
                } else {
                    self
                }
            }
            DashboardEvent::ClientsRequested(token) => Self {
                latest_request: self.latest_request.max(token),
                ..self
            },
            DashboardEvent::ClientsLoaded {
                token,
                selection,
                clients,
            } => {
                if self.is_current(token) {
                    Self {
                        selection: Some(selection),
                        clients,
                        ..self
                    }
                } else {
                    self
                }
            }
            DashboardEvent::SortBy(column) => Self {
                sort: self.sort.toggle(column),
                ..self
            },
            DashboardEvent::SetViewMode(view_mode) => Self { view_mode, ..self },
            // Tokens stay monotonic so fetches issued before the reload remain stale.
            DashboardEvent::Reload => Self {
                latest_request: self.latest_request,
                ..Self::default()
            },
        }
    }

    pub fn render(&self) -> DashboardView {
        DashboardView {
            filters: build_filter_tree(&self.genders, &self.expanded, self.selection.as_ref()),
            result: build_result_view(
                &self.clients,
                self.selection.as_ref(),
                self.sort,
                self.view_mode,
            ),
            selection: self.selection.clone(),
            sort: self.sort,
            view_mode: self.view_mode,
        }
    }
}
