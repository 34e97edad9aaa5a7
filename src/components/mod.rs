//! Reusable UI components.

pub mod guard;
pub mod job_card;
