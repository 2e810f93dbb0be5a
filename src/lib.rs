//! CI demo API
//!
//! A small HTTP service with a greeting, an arithmetic mean and a string
//! reversal endpoint. Query validation failures answer 422, domain failures
//! answer 400.

pub mod config;
pub mod error;
pub mod handlers;
pub mod openapi;
pub mod query;
pub mod routes;
pub mod utils;

pub use config::AppConfig;
pub use routes::create_router;
