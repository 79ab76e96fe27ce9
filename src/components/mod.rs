//! Reusable UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components here are shared by several pages: the route gate that every
//! navigation passes through, the member shell around signed-in pages, and
//! the loading placeholder shown while the session resolves.

pub mod loading;
pub mod route_gate;
pub mod shell;
