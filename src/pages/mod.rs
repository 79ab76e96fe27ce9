//! Page-level route components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each page is mounted by the router behind `components::route_gate`, so a
//! page only renders once the visitor satisfies its access requirement.

pub mod auth_callback;
pub mod landing;
pub mod login;
pub mod members;
pub mod register;
pub mod settings;
pub mod subscription;
