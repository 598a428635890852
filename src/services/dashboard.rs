//! Dashboard operations invoked by the routes.
//!
//! Every operation reads or replaces the session model through
//! [`DashboardStore`]; backend calls happen between two short critical
//! sections so a slow response never blocks other requests of the session.

use uuid::Uuid;

use crate::api::RosterApi;
use crate::dashboard::store::{DashboardStore, FetchOutcome};
use crate::dashboard::{DashboardEvent, DashboardView};
use crate::domain::selection::Selection;
use crate::domain::sort::SortColumn;
use crate::domain::view_mode::ViewMode;
use crate::forms::dashboard::{SelectAgeGroupForm, SortForm, ToggleGenderForm, ViewModeForm};
use crate::services::{ServiceError, ServiceResult};

/// Renders the current view of the session.
pub fn load_dashboard(store: &DashboardStore, session_id: &Uuid) -> ServiceResult<DashboardView> {
    store
        .snapshot(session_id)
        .map(|model| model.render())
        .ok_or(ServiceError::SessionNotFound)
}

/// Fetches the gender summary and replaces the list held by the session.
///
/// On failure the session keeps whatever list it had before.
pub async fn load_genders<R>(
    api: &R,
    store: &DashboardStore,
    session_id: &Uuid,
) -> ServiceResult<()>
where
    R: RosterApi,
{
    if !store.contains(session_id) {
        return Err(ServiceError::SessionNotFound);
    }

    let genders = api.gender_list().await.map_err(|err| {
        log::error!("Error fetching gender list: {err}");
        ServiceError::from(err)
    })?;

    log::debug!("Loaded {} gender groups", genders.len());
    store
        .dispatch(session_id, DashboardEvent::GendersLoaded(genders))
        .map(|_| ())
        .ok_or(ServiceError::SessionNotFound)
}

/// Expands or collapses one gender node.
pub fn toggle_gender(
    store: &DashboardStore,
    session_id: &Uuid,
    form: ToggleGenderForm,
) -> ServiceResult<()> {
    let gender = form.into_gender()?;
    store
        .dispatch(session_id, DashboardEvent::ToggleGender(gender))
        .map(|_| ())
        .ok_or(ServiceError::SessionNotFound)
}

/// Selects an age bracket and fetches the matching clients.
///
/// The selection is committed together with its client list. A failed fetch
/// leaves the previous selection and list in place; a response overtaken by
/// a newer selection is dropped.
pub async fn select_age_group<R>(
    api: &R,
    store: &DashboardStore,
    session_id: &Uuid,
    form: SelectAgeGroupForm,
) -> ServiceResult<FetchOutcome>
where
    R: RosterApi,
{
    let selection = Selection::try_from(form)?;

    let token = store
        .begin_client_fetch(session_id)
        .ok_or(ServiceError::SessionNotFound)?;

    let clients = api.clients_for_age(&selection).await.map_err(|err| {
        log::error!("Error fetching clients: {err}");
        ServiceError::from(err)
    })?;

    log::debug!(
        "Fetched {} clients for {} aged {}",
        clients.len(),
        selection.gender,
        selection.range
    );
    store
        .complete_client_fetch(session_id, token, selection, clients)
        .ok_or(ServiceError::SessionNotFound)
}

/// Applies a column header click.
pub fn sort_by(store: &DashboardStore, session_id: &Uuid, form: SortForm) -> ServiceResult<()> {
    let column = SortColumn::try_from(form)?;
    store
        .dispatch(session_id, DashboardEvent::SortBy(column))
        .map(|_| ())
        .ok_or(ServiceError::SessionNotFound)
}

/// Switches between table and card layouts.
pub fn set_view_mode(
    store: &DashboardStore,
    session_id: &Uuid,
    form: ViewModeForm,
) -> ServiceResult<()> {
    let mode = ViewMode::try_from(form)?;
    store
        .dispatch(session_id, DashboardEvent::SetViewMode(mode))
        .map(|_| ())
        .ok_or(ServiceError::SessionNotFound)
}

/// Resets the session to its initial state and fetches the genders again.
pub async fn reload<R>(api: &R, store: &DashboardStore, session_id: &Uuid) -> ServiceResult<()>
where
    R: RosterApi,
{
    store
        .dispatch(session_id, DashboardEvent::Reload)
        .ok_or(ServiceError::SessionNotFound)?;
    load_genders(api, store, session_id).await
}
