//! HTTP transport layer
//!
//! Exposes seeding, ingestion, and metrics as REST endpoints over the core
//! engine. The transport does no retries; every engine failure is reported
//! to the caller as-is.

pub mod http;
pub mod rest;
pub mod state;
