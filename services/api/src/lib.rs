//! services/api/src/lib.rs
//!
//! The library surface of the API service, shared by the `api` and
//! `openapi` binaries and by the HTTP integration tests.

pub mod adapters;
pub mod config;
pub mod error;
pub mod web;
