//! Networking modules for the REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `gateway` is the single egress point and runs the `middleware` pipeline
//! over a `transport`; `token_store` and `navigator` are the two side-effect
//! seams the pipeline touches; `api` holds typed endpoint helpers and `types`
//! the wire schema.

pub mod api;
pub mod error;
pub mod gateway;
pub mod middleware;
pub mod navigator;
pub mod token_store;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;
