//! Networking modules for the upload and chat endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `error` classifies their failures,
//! `transport` abstracts them for the widget flows, and `types` defines the
//! wire schema shared with the server.

pub mod api;
pub mod error;
pub mod transport;
pub mod types;
