//! medirisk-web — HTTP front end for the Medirisk prediction service.
//! Maps the uniform per-domain prediction contract onto a JSON API:
//!   - POST /api/{domain}/predict
//!   - GET  /api/domains
//!   - GET  /

pub mod config;
pub mod handlers;
pub mod router;
pub mod state;
