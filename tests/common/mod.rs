//! Shared test infrastructure for the HTTP tests.
//!
//! - `test_app!()` builds the full app (session middleware, routes, 404
//!   fallback) around a fresh `Workspaces` registry.
//! - `Jar` carries the signed session cookie from one request to the next.
//! - `get!` / `post_form!` send a request through the jar.
#![allow(dead_code, unused_macros)]

use std::time::Duration;

use actix_web::body::MessageBody;
use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;
use actix_web::test::{self, TestRequest};
use regex::Regex;

use rbac_dash::config::Config;

// ============================================================================
// APP SETUP
// ============================================================================

/// Config for tests: banner stays up long enough to be observed.
pub fn test_config() -> Config {
    Config {
        banner_delay: Duration::from_secs(60),
        ..Config::default()
    }
}

macro_rules! test_app {
    () => {{
        use actix_session::{SessionMiddleware, storage::CookieSessionStore};
        use actix_web::{App, cookie::Key, web};

        let workspaces = web::Data::new(rbac_dash::models::workspace::Workspaces::new());
        let config = web::Data::new(common::test_config());
        actix_web::test::init_service(
            App::new()
                .wrap(
                    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
                        .cookie_secure(false)
                        .build(),
                )
                .app_data(workspaces)
                .app_data(config)
                .configure(rbac_dash::handlers::routes)
                .default_service(web::to(rbac_dash::handlers::not_found)),
        )
        .await
    }};
}

// ============================================================================
// REQUESTS
// ============================================================================

macro_rules! get {
    ($app:expr, $jar:expr, $uri:expr) => {{
        let req = $jar.attach(actix_web::test::TestRequest::get().uri($uri));
        let resp = actix_web::test::call_service(&$app, req.to_request()).await;
        $jar.absorb(&resp);
        resp
    }};
}

macro_rules! post_form {
    ($app:expr, $jar:expr, $uri:expr, $form:expr) => {{
        let req = $jar.attach(actix_web::test::TestRequest::post().uri($uri).set_form($form));
        let resp = actix_web::test::call_service(&$app, req.to_request()).await;
        $jar.absorb(&resp);
        resp
    }};
}

/// Cookies set by earlier responses, replayed on later requests.
#[derive(Default)]
pub struct Jar {
    cookies: Vec<Cookie<'static>>,
}

impl Jar {
    pub fn absorb<B>(&mut self, resp: &ServiceResponse<B>) {
        for cookie in resp.response().cookies() {
            let cookie = cookie.into_owned();
            self.cookies.retain(|c| c.name() != cookie.name());
            self.cookies.push(cookie);
        }
    }

    pub fn attach(&self, mut req: TestRequest) -> TestRequest {
        for cookie in &self.cookies {
            req = req.cookie(cookie.clone());
        }
        req
    }
}

// ============================================================================
// RESPONSE HELPERS
// ============================================================================

pub async fn body_text<B: MessageBody>(resp: ServiceResponse<B>) -> String {
    let bytes = test::read_body(resp).await;
    String::from_utf8_lossy(&bytes).into_owned()
}

pub fn location<B>(resp: &ServiceResponse<B>) -> String {
    resp.headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

/// First CSRF token found in a rendered page.
pub fn extract_csrf_token(html: &str) -> String {
    let re = Regex::new(r#"name="csrf_token" value="([0-9a-f]+)""#).expect("valid regex");
    re.captures(html)
        .map(|c| c[1].to_string())
        .expect("page has no csrf token")
}
