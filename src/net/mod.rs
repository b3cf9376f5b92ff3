//! Networking modules for the remote post store.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the wire schema, `store` defines the store seam and the
//! call-sequencing helpers, and `api` implements the seam over HTTP.

pub mod api;
pub mod store;
pub mod types;
