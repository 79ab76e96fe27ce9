//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` defines the endpoint traits and their HTTP implementation, `error`
//! the failure taxonomy, and `types` the shared wire schema.

pub mod api;
pub mod error;
#[cfg(test)]
pub(crate) mod mock;
pub mod types;
