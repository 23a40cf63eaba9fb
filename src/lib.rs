//! glint-ui - Shared UI components for glint
//!
//! Pure view components. No stores, no I/O; every component renders from
//! its props alone.

pub mod components;

pub use components::*;
