//! Coursedesk HTTP client
//!
//! A thin typed wrapper over `reqwest` for the course backend. Works on
//! native targets and in the browser (`fetch` via reqwest's wasm backend).

#[macro_use]
extern crate tracing;

pub mod client;

pub use client::{ClientError, CourseClient, CourseClientBuilder};
