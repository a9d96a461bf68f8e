use minicat::http::content_type::ContentType;
use minicat::http::error::HttpError;
use minicat::http::request::{HttpRequest, Method, RequestBuilder};

fn request(target: &str, accept: Option<&str>) -> HttpRequest {
    let mut builder = RequestBuilder::new().method(Method::GET).target(target);
    if let Some(accept) = accept {
        builder = builder.header("Accept", accept);
    }
    builder.build().unwrap()
}

#[test]
fn test_first_accept_entry_wins() {
    let req = request("/css/styles.css", Some("text/css,*/*;q=0.1"));
    assert_eq!(ContentType::negotiate(&req).unwrap(), ContentType::Css);

    let req = request("/index.html", Some("text/css,*/*;q=0.1"));
    assert_eq!(ContentType::negotiate(&req).unwrap(), ContentType::Css);
}

#[test]
fn test_accept_parameters_are_ignored() {
    let req = request("/login", Some("text/html;charset=utf-8"));

    assert_eq!(ContentType::negotiate(&req).unwrap(), ContentType::Html);
}

#[test]
fn test_missing_accept_uses_extension() {
    let req = request("/js/scripts.js", None);

    assert_eq!(ContentType::negotiate(&req).unwrap(), ContentType::Js);
}

#[test]
fn test_extension_match_is_case_insensitive() {
    let req = request("/STYLES.CSS", None);

    assert_eq!(ContentType::negotiate(&req).unwrap(), ContentType::Css);
}

#[test]
fn test_missing_accept_and_unknown_extension_defaults_to_html() {
    assert_eq!(ContentType::negotiate(&request("/login", None)).unwrap(), ContentType::Html);
    assert_eq!(ContentType::negotiate(&request("/favicon.ico", None)).unwrap(), ContentType::Html);
}

#[test]
fn test_wildcard_accept_uses_extension() {
    let req = request("/js/scripts.js", Some("*/*"));
    assert_eq!(ContentType::negotiate(&req).unwrap(), ContentType::Js);

    let req = request("/register", Some("*/* "));
    assert_eq!(ContentType::negotiate(&req).unwrap(), ContentType::Html);
}

#[test]
fn test_wildcard_is_never_chosen_from_path() {
    let req = request("/file.all", None);

    assert_eq!(ContentType::negotiate(&req).unwrap(), ContentType::Html);
}

#[test]
fn test_unknown_accept_fails() {
    let req = request("/index.html", Some("bogus/type"));

    assert!(matches!(
        ContentType::negotiate(&req),
        Err(HttpError::UnsupportedContentType { .. })
    ));
}

#[test]
fn test_lookup_tables() {
    assert_eq!(ContentType::from_wire("text/plain"), Some(ContentType::PlainText));
    assert_eq!(ContentType::from_wire("*/*"), Some(ContentType::All));
    assert_eq!(ContentType::from_wire("TEXT/HTML"), None);
    assert_eq!(ContentType::from_name("plain_text"), Some(ContentType::PlainText));
    assert_eq!(ContentType::from_name("js"), Some(ContentType::Js));
    assert_eq!(ContentType::from_name("txt"), None);
    assert_eq!(ContentType::Js.as_str(), "text/javascript");
    assert_eq!(ContentType::Css.name(), "CSS");
}
