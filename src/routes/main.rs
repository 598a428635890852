use actix_session::Session;
use actix_web::{HttpResponse, Responder, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::{Context, Tera};

use crate::api::RosterApi;
use crate::dashboard::store::{DashboardStore, FetchOutcome};
use crate::forms::dashboard::{SelectAgeGroupForm, SortForm, ToggleGenderForm, ViewModeForm};
use crate::routes::{collect_alerts, current_session, ensure_session, redirect, render_template};
use crate::services::{ServiceError, dashboard as dashboard_service};

/// Dashboard page: filter tree on the left, result viewer on the right.
pub async fn show_index<R>(
    session: Session,
    api: web::Data<R>,
    store: web::Data<DashboardStore>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder
where
    R: RosterApi + 'static,
{
    let opened = match ensure_session(&session, api.get_ref(), &store).await {
        Ok(opened) => opened,
        Err(response) => return response,
    };

    let view = match dashboard_service::load_dashboard(&store, &opened.id) {
        Ok(view) => view,
        Err(err) => {
            log::error!("Failed to load dashboard: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut alerts = collect_alerts(&flash_messages);
    alerts.extend(opened.alert);

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("dashboard", &view);

    render_template(&tera, "main/index.html", &context)
}

pub async fn toggle_filter(
    session: Session,
    store: web::Data<DashboardStore>,
    web::Form(form): web::Form<ToggleGenderForm>,
) -> impl Responder {
    let Some(session_id) = current_session(&session, &store) else {
        return redirect("/");
    };

    if let Err(err) = dashboard_service::toggle_gender(&store, &session_id, form) {
        log::warn!("Failed to toggle gender node: {err}");
        FlashMessage::error("Unknown filter group.").send();
    }
    redirect("/")
}

pub async fn select_filter<R>(
    session: Session,
    api: web::Data<R>,
    store: web::Data<DashboardStore>,
    web::Form(form): web::Form<SelectAgeGroupForm>,
) -> impl Responder
where
    R: RosterApi + 'static,
{
    let Some(session_id) = current_session(&session, &store) else {
        return redirect("/");
    };

    match dashboard_service::select_age_group(api.get_ref(), &store, &session_id, form).await {
        Ok(FetchOutcome::Applied) => {}
        Ok(FetchOutcome::Superseded) => {
            log::info!("Selection in session {session_id} was superseded by a newer one");
        }
        Err(ServiceError::Api(_)) => {
            FlashMessage::error("Failed to load clients").send();
        }
        Err(ServiceError::Form(err)) => {
            log::warn!("Rejected age group selection: {err}");
            FlashMessage::error(format!("Invalid selection: {err}")).send();
        }
        Err(ServiceError::SessionNotFound) => {}
    }
    redirect("/")
}

pub async fn sort_clients(
    session: Session,
    store: web::Data<DashboardStore>,
    web::Form(form): web::Form<SortForm>,
) -> impl Responder {
    let Some(session_id) = current_session(&session, &store) else {
        return redirect("/");
    };

    if let Err(err) = dashboard_service::sort_by(&store, &session_id, form) {
        log::warn!("Rejected sort request: {err}");
        FlashMessage::error("Unknown sort column.").send();
    }
    redirect("/")
}

pub async fn set_view_mode(
    session: Session,
    store: web::Data<DashboardStore>,
    web::Form(form): web::Form<ViewModeForm>,
) -> impl Responder {
    let Some(session_id) = current_session(&session, &store) else {
        return redirect("/");
    };

    if let Err(err) = dashboard_service::set_view_mode(&store, &session_id, form) {
        log::warn!("Rejected view mode: {err}");
        FlashMessage::error("Unknown view mode.").send();
    }
    redirect("/")
}

pub async fn reload<R>(
    session: Session,
    api: web::Data<R>,
    store: web::Data<DashboardStore>,
) -> impl Responder
where
    R: RosterApi + 'static,
{
    let Some(session_id) = current_session(&session, &store) else {
        return redirect("/");
    };

    if let Err(ServiceError::Api(_)) =
        dashboard_service::reload(api.get_ref(), &store, &session_id).await
    {
        FlashMessage::error("Failed to load gender data").send();
    }
    redirect("/")
}
