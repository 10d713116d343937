//! Mockapi - mock JSON HTTP endpoints for local development
//!
//! Serves canned payloads so frontends and pipelines can be developed
//! without the real backing services:
//! - A fixed list of number records
//! - Transactions read from a bundled fixture file
//! - Water/weather measurements read from a bundled fixture file
//!
//! Fixture files are plain JSON documents passed through unmodified; a
//! fixture that is missing or unparseable is served as an empty object.

pub mod api;
pub mod config;
pub mod error;
pub mod fixture;
pub mod sample;

pub use error::{Error, Result};
