//! Record storage.
//!
//! [`RecordStore`] is the seam between route handlers and persistence. The
//! store owns identity assignment and timestamps; callers only hand it
//! form-shaped fields and ids.

mod schema;
mod sqlite;

pub use schema::SCHEMA_VERSION;
pub use sqlite::SqliteStore;

use crate::error::Result;
use crate::record::{HedgehogFields, HedgehogRecord, RecordId};

/// Create/read/update/delete access to the hedgehog collection.
///
/// Writes validate the complete resulting record before touching storage,
/// so a rejected write never leaves a partial change behind.
pub trait RecordStore: Send + Sync {
    /// Persist a new record, assigning it a fresh id and timestamps.
    fn create(&self, fields: &HedgehogFields) -> Result<HedgehogRecord>;

    /// All records in insertion order.
    fn list_all(&self) -> Result<Vec<HedgehogRecord>>;

    /// Look up a record; `Ok(None)` when no record has this id.
    fn find_by_id(&self, id: &RecordId) -> Result<Option<HedgehogRecord>>;

    /// Replace all four content fields of an existing record.
    ///
    /// An unknown id is `NotFound` before the fields are validated.
    fn update(&self, id: &RecordId, fields: &HedgehogFields) -> Result<HedgehogRecord>;

    /// Remove a record permanently.
    fn delete(&self, id: &RecordId) -> Result<()>;
}
