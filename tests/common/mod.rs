#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, Error, HttpRequest, HttpResponse, HttpServer, test, web};
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
use serde_json::Value;
use tera::Tera;
use url::{Url, form_urlencoded};

use clickcode_site::configure_routes;
use clickcode_site::models::config::ServerConfig;
use clickcode_site::repository::{SupabaseOptions, SupabaseRepository};
use clickcode_site::submission::InFlightSubmissions;

/// Nothing listens on the discard port, so every outbound call fails fast.
pub const UNREACHABLE_BACKEND: &str = "http://127.0.0.1:9/";

/// Canned answers of a fake hosted backend.
#[derive(Clone)]
pub struct Backend {
    pub company_settings: Option<Value>,
    pub restaurants: Value,
    pub contact_reply: Value,
}

/// A request as received by the fake backend.
#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub path: String,
    pub query: Vec<(String, String)>,
    /// Header names are lower-case.
    pub headers: HashMap<String, String>,
    pub body: Option<Value>,
}

impl RecordedRequest {
    fn capture(req: &HttpRequest, body: &[u8]) -> Self {
        Self {
            path: req.path().to_string(),
            query: form_urlencoded::parse(req.query_string().as_bytes())
                .into_owned()
                .collect(),
            headers: req
                .headers()
                .iter()
                .map(|(name, value)| {
                    (
                        name.as_str().to_string(),
                        value.to_str().unwrap_or_default().to_string(),
                    )
                })
                .collect(),
            body: serde_json::from_slice(body).ok(),
        }
    }

    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}

/// Handle to a running fake backend.
pub struct FakeBackend {
    pub url: Url,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl FakeBackend {
    /// Requests received on `path`, oldest first.
    pub fn requests_to(&self, path: &str) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .expect("request log")
            .iter()
            .filter(|req| req.path == path)
            .cloned()
            .collect()
    }
}

fn record(log: &Mutex<Vec<RecordedRequest>>, req: &HttpRequest, body: &[u8]) {
    log.lock()
        .expect("request log")
        .push(RecordedRequest::capture(req, body));
}

/// Serves `backend` on an ephemeral local port, recording every request.
pub fn spawn_backend(backend: Backend) -> FakeBackend {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let log = requests.clone();

    let server = HttpServer::new(move || {
        let settings = backend.company_settings.clone();
        let restaurants = backend.restaurants.clone();
        let reply = backend.contact_reply.clone();
        let (settings_log, restaurants_log, contact_log) = (log.clone(), log.clone(), log.clone());
        App::new()
            .route(
                "/rest/v1/company_settings",
                web::get().to(move |req: HttpRequest, body: web::Bytes| {
                    record(&settings_log, &req, &body);
                    let settings = settings.clone();
                    async move {
                        match settings {
                            Some(row) => HttpResponse::Ok().json(row),
                            None => HttpResponse::NotAcceptable().json(serde_json::json!({
                                "code": "PGRST116",
                                "message": "JSON object requested, multiple (or no) rows returned"
                            })),
                        }
                    }
                }),
            )
            .route(
                "/rest/v1/restaurants",
                web::get().to(move |req: HttpRequest, body: web::Bytes| {
                    record(&restaurants_log, &req, &body);
                    let restaurants = restaurants.clone();
                    async move { HttpResponse::Ok().json(restaurants) }
                }),
            )
            .route(
                "/functions/v1/submit-contact-form",
                web::post().to(move |req: HttpRequest, body: web::Bytes| {
                    record(&contact_log, &req, &body);
                    let reply = reply.clone();
                    async move { HttpResponse::Ok().json(reply) }
                }),
            )
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("bind fake backend");

    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    FakeBackend {
        url: Url::parse(&format!("http://{addr}/")).expect("backend url"),
        requests,
    }
}

pub fn server_config(backend_url: &Url) -> ServerConfig {
    ServerConfig {
        domain: "localhost".to_string(),
        address: "127.0.0.1".to_string(),
        port: 0,
        templates_dir: templates_dir().to_string(),
        secret: "x".repeat(64),
        supabase_url: backend_url.clone(),
        supabase_anon_key: "anon".to_string(),
        contact_form_url: backend_url
            .join("functions/v1/submit-contact-form")
            .expect("contact url"),
        request_timeout_secs: 2,
        contact_email: "hello@example.com".to_string(),
        contact_phone: "+355 68 000 0000".to_string(),
    }
}

pub fn templates_dir() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/templates/**/*")
}

pub fn tera() -> Tera {
    Tera::new(templates_dir()).expect("templates")
}

/// The site wired like production, minus static files, against `backend_url`.
pub fn site_app(
    backend_url: &Url,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody + use<>>,
        Error = Error,
        InitError = (),
    > + use<>,
> {
    let config = server_config(backend_url);
    let repo = SupabaseRepository::new(SupabaseOptions {
        project_url: config.supabase_url.clone(),
        anon_key: config.supabase_anon_key.clone(),
        contact_form_url: config.contact_form_url.clone(),
        timeout: Duration::from_secs(config.request_timeout_secs),
    })
    .expect("repository");

    let key = Key::from(config.secret.as_bytes());
    let message_store = CookieMessageStore::builder(key.clone()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    App::new()
        .wrap(message_framework)
        .wrap(
            SessionMiddleware::builder(CookieSessionStore::default(), key)
                .cookie_secure(false)
                .build(),
        )
        .configure(configure_routes)
        .app_data(web::Data::new(tera()))
        .app_data(web::Data::new(repo))
        .app_data(web::Data::new(InFlightSubmissions::new()))
        .app_data(web::Data::new(config))
}

pub fn unreachable_backend() -> Url {
    Url::parse(UNREACHABLE_BACKEND).expect("url")
}

/// Cookies set by `resp`, ready to be replayed on the next request.
pub fn cookies<B>(resp: &ServiceResponse<B>) -> Vec<Cookie<'static>> {
    resp.response()
        .cookies()
        .map(|cookie| cookie.into_owned())
        .collect()
}

pub async fn body_string<B: MessageBody>(resp: ServiceResponse<B>) -> String {
    let bytes = test::read_body(resp).await;
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

/// Pulls the hidden form token out of a rendered contact page.
pub fn form_token(page: &str) -> String {
    let marker = "name=\"form_token\" value=\"";
    let start = page.find(marker).expect("form token field") + marker.len();
    let end = page[start..].find('"').expect("token end") + start;
    page[start..end].to_string()
}
