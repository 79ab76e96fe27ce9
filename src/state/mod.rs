//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` holds the plain session snapshot and role derivation; `session`
//! owns every write to it.

pub mod auth;
pub mod session;
