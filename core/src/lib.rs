//! Client for the todo service.
//!
//! # Overview
//! `TodoClient` builds `HttpRequest` values and parses `HttpResponse` values
//! without touching the network (host-does-IO pattern). `BlockingClient`
//! pairs it with a `ureq` agent for callers that just want to make the call.
//!
//! # Design
//! - `TodoClient` is stateless; it holds only `base_url`.
//! - Each operation is split into `build_*` and `parse_*`, so the I/O
//!   boundary is explicit.
//! - DTOs are defined independently from the server crate; the live-server
//!   integration test catches schema drift.

pub mod blocking;
pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use blocking::BlockingClient;
pub use client::TodoClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{AddTodo, Todo};
