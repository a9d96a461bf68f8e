use std::path::PathBuf;
use std::sync::Arc;

use minicat::app::build_mapping;
use minicat::app::controller::{ErrorPageHandler, StaticFileHandler};
use minicat::app::resource::StaticResources;
use minicat::app::user::{User, UserRepository};
use minicat::config::UnmatchedPolicy;
use minicat::handler::dispatch;
use minicat::http::content_type::ContentType;
use minicat::http::request::{Method, RequestBuilder};
use minicat::http::error::HttpError;
use minicat::http::response::{HttpResponse, StatusCode};
use minicat::session::SessionStore;

fn static_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static")
}

#[test]
fn test_read_static_resource() {
    let resources = StaticResources::new(static_root());

    let content = resources.read("/css/styles.css").unwrap();

    assert!(content.contains("font-family"));
}

#[test]
fn test_missing_static_resource() {
    let resources = StaticResources::new(static_root());

    assert!(matches!(
        resources.read("/nope.html"),
        Err(HttpError::NotFound { .. })
    ));
}

#[test]
fn test_static_resource_rejects_traversal() {
    let resources = StaticResources::new(static_root().join("css"));

    assert!(matches!(
        resources.read("/../index.html"),
        Err(HttpError::NotFound { .. })
    ));
}

#[test]
fn test_discover_lists_url_paths() {
    let paths = StaticResources::new(static_root()).discover().unwrap();

    assert!(paths.contains(&"/index.html".to_string()));
    assert!(paths.contains(&"/css/styles.css".to_string()));
}

#[test]
fn test_discover_missing_root_is_empty() {
    let paths = StaticResources::new("/nonexistent/static").discover().unwrap();

    assert!(paths.is_empty());
}

#[test]
fn test_build_mapping_registers_routes() {
    let mapping = build_mapping(
        UnmatchedPolicy::Reject,
        Arc::new(StaticResources::new(static_root())),
        Arc::new(SessionStore::new()),
        Arc::new(UserRepository::with_defaults()),
    )
    .unwrap();

    for path in ["/", "/login", "/register", "/index.html", "/css/styles.css"] {
        assert!(mapping.contains(path), "missing route {}", path);
    }
    assert!(mapping.resolve("/missing").is_err());
}

#[test]
fn test_user_repository() {
    let users = UserRepository::with_defaults();

    let gugu = users.find_by_account("gugu").unwrap();
    assert!(gugu.check_password("password"));
    assert!(!gugu.check_password("invalidpassword"));

    assert!(users.save(User::new("newId", "pw", "new@example.com")));
    assert!(!users.save(User::new("gugu", "other", "other@example.com")));
    assert!(users.find_by_account("nobody").is_none());
}

#[test]
fn test_missing_static_file_is_not_found() {
    let handler = StaticFileHandler::new(Arc::new(StaticResources::new(static_root())));
    let request = RequestBuilder::new().method(Method::GET).target("/gone.html").build().unwrap();
    let mut response = HttpResponse::with_content_type(ContentType::Html);

    dispatch(&handler, &request, &mut response).unwrap();

    assert_eq!(response.status, StatusCode::NotFound);
    assert_eq!(response.body, std::fs::read_to_string(static_root().join("404.html")).unwrap());
}

#[test]
fn test_error_page_without_file_has_empty_body() {
    let handler = ErrorPageHandler::unauthorized(Arc::new(StaticResources::new("/nonexistent/static")));
    let request = RequestBuilder::new().method(Method::GET).target("/401.html").build().unwrap();
    let mut response = HttpResponse::with_content_type(ContentType::Html);

    dispatch(&handler, &request, &mut response).unwrap();

    assert_eq!(response.status, StatusCode::Unauthorized);
    assert_eq!(response.body, "");
    assert_eq!(response.header("Content-Length"), Some("0"));
}
