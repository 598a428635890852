use actix_session::Session;
use actix_web::{HttpResponse, Responder, web};
use serde::Serialize;

use crate::api::RosterApi;
use crate::dashboard::DashboardView;
use crate::dashboard::store::DashboardStore;
use crate::routes::ensure_session;
use crate::services::dashboard as dashboard_service;

#[derive(Serialize)]
struct ApiAlert {
    message: String,
    level: &'static str,
}

#[derive(Serialize)]
struct DashboardPayload {
    #[serde(flatten)]
    view: DashboardView,
    /// Problems hit while serving this request, such as a failed gender load.
    alerts: Vec<ApiAlert>,
}

/// JSON rendering of the current dashboard view.
pub async fn api_v1_dashboard<R>(
    session: Session,
    api: web::Data<R>,
    store: web::Data<DashboardStore>,
) -> impl Responder
where
    R: RosterApi + 'static,
{
    let opened = match ensure_session(&session, api.get_ref(), &store).await {
        Ok(opened) => opened,
        Err(response) => return response,
    };

    let alerts: Vec<ApiAlert> = opened
        .alert
        .into_iter()
        .map(|(message, level)| {
            log::warn!("Dashboard session {} opened with alert: {message}", opened.id);
            ApiAlert { message, level }
        })
        .collect();

    match dashboard_service::load_dashboard(&store, &opened.id) {
        Ok(view) => HttpResponse::Ok().json(DashboardPayload { view, alerts }),
        Err(e) => {
            log::error!("Failed to load dashboard: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
