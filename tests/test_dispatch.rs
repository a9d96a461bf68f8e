use std::sync::Arc;

use minicat::handler::{Handler, RequestMapping, UnmatchedRoute, dispatch};
use minicat::http::content_type::ContentType;
use minicat::http::error::HttpError;
use minicat::http::request::{HttpRequest, Method, RequestBuilder};
use minicat::http::response::HttpResponse;

struct PostOnly;

impl Handler for PostOnly {
    fn post(&self, _request: &HttpRequest, response: &mut HttpResponse) -> Result<(), HttpError> {
        response.set_body("posted");
        Ok(())
    }
}

struct Named(&'static str);

impl Handler for Named {
    fn get(&self, _request: &HttpRequest, response: &mut HttpResponse) -> Result<(), HttpError> {
        response.set_body(self.0);
        Ok(())
    }
}

fn request(method: Method, target: &str) -> HttpRequest {
    RequestBuilder::new().method(method).target(target).build().unwrap()
}

#[test]
fn test_get_to_post_only_handler_is_noop() {
    let mut response = HttpResponse::with_content_type(ContentType::Html);
    let before = response.clone();

    dispatch(&PostOnly, &request(Method::GET, "/"), &mut response).unwrap();

    assert_eq!(response, before);
}

#[test]
fn test_post_reaches_post_entry_point() {
    let mut response = HttpResponse::with_content_type(ContentType::Html);

    dispatch(&PostOnly, &request(Method::POST, "/"), &mut response).unwrap();

    assert_eq!(response.body, "posted");
}

#[test]
fn test_other_methods_are_unsupported() {
    for method in [Method::PUT, Method::DELETE, Method::HEAD, Method::OPTIONS, Method::PATCH] {
        let mut response = HttpResponse::with_content_type(ContentType::Html);

        let result = dispatch(&Named("x"), &request(method, "/"), &mut response);

        assert!(matches!(
            result,
            Err(HttpError::UnsupportedMethod { method: ref m }) if m == method.as_str()
        ));
    }
}

#[test]
fn test_resolve_exact_path() {
    let mapping = RequestMapping::builder()
        .route("/login", Named("login"))
        .route("/", Named("root"))
        .build();

    let handler = mapping.resolve("/login").unwrap();
    let mut response = HttpResponse::with_content_type(ContentType::Html);
    dispatch(handler.as_ref(), &request(Method::GET, "/login"), &mut response).unwrap();

    assert_eq!(response.body, "login");
    assert!(mapping.contains("/"));
    assert!(!mapping.contains("/login/"));
}

#[test]
fn test_unmatched_path_goes_to_default_handler() {
    let mapping = RequestMapping::builder()
        .route("/login", Named("login"))
        .unmatched(UnmatchedRoute::Default(Arc::new(Named("fallback"))))
        .build();

    let handler = mapping.resolve("/nowhere").unwrap();
    let mut response = HttpResponse::with_content_type(ContentType::Html);
    dispatch(handler.as_ref(), &request(Method::GET, "/nowhere"), &mut response).unwrap();

    assert_eq!(response.body, "fallback");
}

#[test]
fn test_unmatched_path_rejected() {
    let mapping = RequestMapping::builder()
        .route("/login", Named("login"))
        .unmatched(UnmatchedRoute::Reject)
        .build();

    assert!(matches!(
        mapping.resolve("/nowhere"),
        Err(HttpError::RouteNotFound { ref path }) if path == "/nowhere"
    ));
}
