//! Hedgehog Core - record model, validation, and storage for the hedgehog catalog.
//!
//! # Architecture
//!
//! - **Record**: [`HedgehogRecord`] and the form-shaped [`HedgehogFields`]
//! - **Validate**: per-field required/length rules producing [`ValidationErrors`]
//! - **Store**: the [`RecordStore`] trait and its SQLite-backed [`SqliteStore`]

pub mod error;
pub mod record;
pub mod store;
pub mod validate;

pub use error::{Result, StoreError};
pub use record::{HedgehogFields, HedgehogRecord, RecordId};
pub use store::{RecordStore, SqliteStore};
pub use validate::{Field, ValidationErrors};
