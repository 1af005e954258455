//! Hedgehog Web - server-rendered CRUD pages for the hedgehog catalog.
//!
//! # Architecture
//!
//! - **Routes**: one handler per verb+path; reads render, writes redirect
//! - **Flash**: cookie sessions carrying read-once validation messages
//! - **Render**: list, detail, and form pages built with maud
//!
//! # Security
//!
//! - All dynamic content is HTML-escaped by maud
//! - Image URLs are only rendered when they are http(s)
//! - Strict Content-Security-Policy: no scripts, forms post to self only

pub mod config;
pub mod error;
pub mod flash;
pub mod render;
pub mod routes;
pub mod state;

pub use config::Config;
pub use error::WebError;
pub use routes::router;
pub use state::AppState;
