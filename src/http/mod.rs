//! HTTP protocol implementation.
//!
//! One request per connection, no keep-alive.
//!
//! # Architecture
//!
//! - **`parser`**: reads a request line, headers and an optional body from a buffered stream
//! - **`request`** / **`headers`**: the parsed request model
//! - **`content_type`**: picks the response media type from `Accept` or the path extension
//! - **`response`**: the response model filled in by handlers
//! - **`writer`**: serializes a response byte-for-byte and writes it out
//! - **`connection`**: drives one connection through the states below
//! - **`error`**: failures raised along the way
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Parse the request
//!        └──────┬──────┘
//!               │ Request parsed
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Negotiate, route, dispatch
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               ▼
//!            Closed
//! ```
//!
//! A failure in any state other than a content negotiation failure ends the
//! connection with nothing written. A negotiation failure is answered with
//! `406 NOT_ACCEPTABLE`.

pub mod connection;
pub mod content_type;
pub mod error;
pub mod headers;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
