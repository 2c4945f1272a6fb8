//! HTTP API for the correlation service

pub mod handlers;
pub mod protein_handlers;
pub mod routes;

pub use routes::create_router;
