//! Minicat - a small HTTP/1.1 server
//!
//! Parses one request per connection, routes it to a handler, and writes back
//! a byte-exact response. Sessions are correlated through a `JSESSIONID` cookie.

pub mod app;
pub mod config;
pub mod handler;
pub mod http;
pub mod server;
pub mod session;
