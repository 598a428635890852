#[cfg(feature = "data")]
pub mod api;
#[cfg(feature = "data")]
pub mod dashboard;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;

/// Minimum secret length accepted by `actix_web::cookie::Key::from`.
pub const MIN_SECRET_LEN: usize = 64;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: models::config::ServerConfig) -> std::io::Result<()> {
    use std::time::Duration;

    use actix_cors::Cors;
    use actix_files::Files;
    use actix_session::{SessionMiddleware, storage::CookieSessionStore};
    use actix_web::cookie::Key;
    use actix_web::{App, HttpServer, middleware, web};
    use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
    use tera::Tera;

    use crate::api::http::HttpRosterApi;
    use crate::dashboard::store::DashboardStore;

    if server_config.secret.len() < MIN_SECRET_LEN {
        return Err(std::io::Error::other(format!(
            "secret must be at least {MIN_SECRET_LEN} bytes long"
        )));
    }

    let roster_api = web::Data::new(HttpRosterApi::new(server_config.backend_url.as_str()));
    log::info!("Using roster backend at {}", roster_api.base_url());

    let store = web::Data::new(DashboardStore::new(Duration::from_secs(
        server_config.session_idle_secs,
    )));

    // Keys and stores for sessions and flash messages.
    let secret_key = Key::from(server_config.secret.as_bytes());

    let message_store = CookieMessageStore::builder(secret_key.clone()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(message_framework.clone())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false) // set to true in prod
                    .build(),
            )
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .configure(routes::configure::<HttpRosterApi>)
            .app_data(web::Data::new(tera.clone()))
            .app_data(roster_api.clone())
            .app_data(store.clone())
    })
    .bind(bind_address)?
    .run()
    .await
}
