use crate::app::App;
use crate::catalog::{seed_properties, CatalogStore, IdSource, SequentialIds};
use crate::responses::ResultResp;
use crate::router::handle;
use astra::{Body, Response};
use http::{Method, Request};
use std::io::Read;

/// Fresh seeded app per test with deterministic ids.
pub fn init_test_app() -> App {
    app_with_ids(Box::new(SequentialIds::new("test")))
}

pub fn app_with_ids(ids: Box<dyn IdSource>) -> App {
    let catalog = CatalogStore::initialize(seed_properties())
        .unwrap_or_else(|e| panic!("Seed catalog failed to load: {e}"));
    App::new(catalog, ids)
}

/// Always hands out the same id.
pub struct FixedId(pub &'static str);

impl IdSource for FixedId {
    fn next_id(&self) -> String {
        self.0.to_string()
    }
}

pub fn get(app: &App, uri: &str) -> ResultResp {
    let req = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    handle(req, app)
}

pub fn post_form(app: &App, uri: &str, form: &[(&str, &str)]) -> ResultResp {
    let body = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(form)
        .finish();

    let req = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap();
    handle(req, app)
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}
