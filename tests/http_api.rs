use std::collections::HashMap;
use std::net::SocketAddr;

use actix_web::{App, HttpResponse, HttpServer, web};
use serde_json::json;

use client_dashboard::api::http::HttpRosterApi;
use client_dashboard::api::{ApiError, RosterApi};
use client_dashboard::domain::selection::Selection;

/// Echoes the query back so the client's parameters can be checked.
async fn clients_for_age(query: web::Query<HashMap<String, String>>) -> HttpResponse {
    let param = |key: &str| query.get(key).cloned().unwrap_or_default();
    HttpResponse::Ok().json(json!([{
        "firstName": param("gender"),
        "lastName": format!("{}-{}", param("lowAge"), param("highAge")),
        "phone": "555-0100",
        "ssn": "123-45-6789",
        "age": 25
    }]))
}

fn start_backend(
    genders: fn() -> HttpResponse,
    clients_enabled: bool,
) -> std::io::Result<SocketAddr> {
    let server = HttpServer::new(move || {
        let app =
            App::new().route("/getGenderList", web::get().to(move || async move { genders() }));
        if clients_enabled {
            app.route("/getClientsForAge", web::get().to(clients_for_age))
        } else {
            app
        }
    })
    .workers(1)
    .bind(("127.0.0.1", 0))?;

    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    Ok(addr)
}

fn ok_genders() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("application/json")
        .body(r#"[{"gender":"Male","count":2},{"gender":"Female","count":3}]"#)
}

fn broken_genders() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("application/json")
        .body(r#"[{"gender":"Male""#)
}

fn failing_genders() -> HttpResponse {
    HttpResponse::InternalServerError().finish()
}

#[actix_web::test]
async fn fetches_and_decodes_gender_list() {
    let addr = start_backend(ok_genders, true).unwrap();
    let api = HttpRosterApi::new(format!("http://{addr}/"));

    let genders = api.gender_list().await.unwrap();

    assert_eq!(genders.len(), 2);
    assert_eq!(genders[1].gender, "Female");
    assert_eq!(genders[1].count, 3);
}

#[actix_web::test]
async fn sends_age_bounds_and_gender_as_query() {
    let addr = start_backend(ok_genders, true).unwrap();
    let api = HttpRosterApi::new(format!("http://{addr}"));
    let selection = Selection::parse("Female", 30, 60).unwrap();

    let clients = api.clients_for_age(&selection).await.unwrap();

    assert_eq!(clients.len(), 1);
    assert_eq!(clients[0].first_name, "Female");
    assert_eq!(clients[0].last_name, "30-60");
    assert_eq!(clients[0].gender, None);
}

#[actix_web::test]
async fn non_success_status_is_reported() {
    let addr = start_backend(failing_genders, false).unwrap();
    let api = HttpRosterApi::new(format!("http://{addr}"));

    assert_eq!(api.gender_list().await, Err(ApiError::Status(500)));

    let selection = Selection::parse("Male", 10, 30).unwrap();
    assert_eq!(
        api.clients_for_age(&selection).await,
        Err(ApiError::Status(404))
    );
}

#[actix_web::test]
async fn malformed_body_is_a_decode_error() {
    let addr = start_backend(broken_genders, false).unwrap();
    let api = HttpRosterApi::new(format!("http://{addr}"));

    let err = api.gender_list().await.unwrap_err();

    assert!(matches!(err, ApiError::Decode(_)));
}

#[actix_web::test]
async fn unreachable_backend_is_a_transport_error() {
    let api = HttpRosterApi::new("http://127.0.0.1:1");

    let err = api.gender_list().await.unwrap_err();

    assert!(matches!(err, ApiError::Transport(_)));
}
