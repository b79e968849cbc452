//! Networking modules for the REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` composes the request/response hooks, `transport` performs the actual
//! HTTP exchange, and `types` defines the wire schema.

pub mod api;
pub mod transport;
pub mod types;
