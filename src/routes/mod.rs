//! HTTP surface of the dashboard.
//!
//! Handlers are generic over the [`RosterApi`] implementation so tests can
//! mount them on top of a scripted backend; [`configure`] wires them up.

use actix_session::Session;
use actix_web::{HttpResponse, http::header, web};
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use tera::{Context, Tera};
use uuid::Uuid;

use crate::api::RosterApi;
use crate::dashboard::store::DashboardStore;
use crate::services::dashboard as dashboard_service;

pub mod api;
pub mod main;

/// Session cookie key holding the dashboard session id.
pub const SESSION_KEY: &str = "dashboard_id";

/// Registers every dashboard route for the given backend type.
pub fn configure<R>(cfg: &mut web::ServiceConfig)
where
    R: RosterApi + 'static,
{
    cfg.route("/", web::get().to(main::show_index::<R>))
        .route("/filters/toggle", web::post().to(main::toggle_filter))
        .route("/filters/select", web::post().to(main::select_filter::<R>))
        .route("/clients/sort", web::post().to(main::sort_clients))
        .route("/clients/view", web::post().to(main::set_view_mode))
        .route("/reload", web::post().to(main::reload::<R>))
        .service(
            web::scope("/api").route("/v1/dashboard", web::get().to(api::api_v1_dashboard::<R>)),
        );
}

pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

pub fn collect_alerts(flash_messages: &IncomingFlashMessages) -> Vec<(String, &'static str)> {
    flash_messages
        .iter()
        .map(|f| (f.content().to_string(), alert_level_to_str(&f.level())))
        .collect()
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            log::error!("Failed to render template '{template}': {e:?}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Dashboard session bound to the cookie, if the store still knows it.
pub fn current_session(session: &Session, store: &DashboardStore) -> Option<Uuid> {
    session
        .get::<Uuid>(SESSION_KEY)
        .ok()
        .flatten()
        .filter(|id| store.contains(id))
}

/// A dashboard session resolved for the current request.
pub struct OpenedSession {
    pub id: Uuid,
    /// Alert to show right away, produced while opening a new session.
    pub alert: Option<(String, &'static str)>,
}

/// Returns the existing session or opens a new one and loads its genders.
pub async fn ensure_session<R>(
    session: &Session,
    api: &R,
    store: &DashboardStore,
) -> Result<OpenedSession, HttpResponse>
where
    R: RosterApi,
{
    if let Some(id) = current_session(session, store) {
        return Ok(OpenedSession { id, alert: None });
    }

    let id = store.create();
    if let Err(e) = session.insert(SESSION_KEY, id) {
        log::error!("Failed to store dashboard session id: {e}");
        return Err(HttpResponse::InternalServerError().finish());
    }
    log::info!("Opened dashboard session {id}");

    let alert = match dashboard_service::load_genders(api, store, &id).await {
        Ok(()) => None,
        Err(_) => Some(("Failed to load gender data".to_string(), "danger")),
    };

    Ok(OpenedSession { id, alert })
}
