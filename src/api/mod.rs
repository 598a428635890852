//! Access to the roster backend.
//!
//! [`RosterApi`] is the seam the dashboard services are generic over.
//! [`http::HttpRosterApi`] talks to the real REST endpoints, while
//! [`test::StubRosterApi`] replays scripted responses in tests.

use std::future::Future;

use thiserror::Error;

use crate::domain::client::ClientRecord;
use crate::domain::gender::GenderSummary;
use crate::domain::selection::Selection;

#[cfg(feature = "server")]
pub mod http;

/// Failures of a single backend call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("backend responded with status {0}")]
    Status(u16),

    #[error("invalid response body: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Read-only roster endpoints.
pub trait RosterApi {
    /// `GET /getGenderList`
    fn gender_list(&self) -> impl Future<Output = ApiResult<Vec<GenderSummary>>> + Send;

    /// `GET /getClientsForAge?lowAge=..&highAge=..&gender=..`
    fn clients_for_age(
        &self,
        selection: &Selection,
    ) -> impl Future<Output = ApiResult<Vec<ClientRecord>>> + Send;
}
