//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` maps domain calls to requests and normalizes failures,
//! `transport` is the HTTP seam, and `types` defines the wire schema.

pub mod api;
pub mod transport;
pub mod types;
