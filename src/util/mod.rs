//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Decision logic for guards and page flows lives here as plain functions so
//! components stay thin and the rules can be tested without a browser.

pub mod apply_flow;
pub mod auth;
pub mod lifetime;
