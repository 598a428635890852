//! Shared helpers for the HTTP integration tests.
#![allow(dead_code)]

use std::collections::HashMap;

use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;
use actix_web::test::TestRequest;

use client_dashboard::api::ApiError;
use client_dashboard::api::test::StubRosterApi;
use client_dashboard::domain::client::ClientRecord;
use client_dashboard::domain::gender::GenderSummary;

/// Backend answering the first gender-list call with two groups.
pub fn roster_with_genders() -> StubRosterApi {
    StubRosterApi::new().with_genders(Ok(vec![
        GenderSummary::new("Male", 2),
        GenderSummary::new("Female", 3),
    ]))
}

/// Backend whose gender list fails with a server error.
pub fn failing_roster() -> StubRosterApi {
    StubRosterApi::new().with_genders(Err(ApiError::Status(500)))
}

pub fn client(first: &str, last: &str, age: u32) -> ClientRecord {
    ClientRecord {
        first_name: first.to_string(),
        last_name: last.to_string(),
        phone: format!("555-{age:04}"),
        ssn: format!("{age:03}-00-0000"),
        age,
        gender: None,
    }
}

/// Minimal browser cookie jar: keeps the latest value per cookie name.
#[derive(Default)]
pub struct CookieJar {
    cookies: HashMap<String, Cookie<'static>>,
}

impl CookieJar {
    pub fn store<B>(&mut self, response: &ServiceResponse<B>) {
        for cookie in response.response().cookies() {
            if cookie.value().is_empty() {
                self.cookies.remove(cookie.name());
            } else {
                self.cookies
                    .insert(cookie.name().to_string(), cookie.into_owned());
            }
        }
    }

    pub fn attach(&self, mut request: TestRequest) -> TestRequest {
        for cookie in self.cookies.values() {
            request = request.cookie(cookie.clone());
        }
        request
    }
}

/// Initializes the dashboard app with the full middleware stack.
macro_rules! dashboard_app {
    ($api:expr, $store:expr) => {{
        use actix_session::{SessionMiddleware, storage::CookieSessionStore};
        use actix_web::cookie::Key;
        use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};

        let key = Key::generate();
        let message_store = CookieMessageStore::builder(key.clone()).build();
        let tera = tera::Tera::new("templates/**/*").expect("templates should parse");

        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(FlashMessagesFramework::builder(message_store).build())
                .wrap(
                    SessionMiddleware::builder(CookieSessionStore::default(), key)
                        .cookie_secure(false)
                        .build(),
                )
                .configure(client_dashboard::routes::configure::<client_dashboard::api::test::StubRosterApi>)
                .app_data(actix_web::web::Data::new(tera))
                .app_data($api.clone())
                .app_data($store.clone()),
        )
        .await
    }};
}

/// Sends `$request` with the jar's cookies and records the cookies set in reply.
macro_rules! send {
    ($app:expr, $jar:expr, $request:expr) => {{
        let response =
            actix_web::test::call_service(&$app, $jar.attach($request).to_request()).await;
        $jar.store(&response);
        response
    }};
}
