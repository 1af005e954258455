//! SQLite-backed record store.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};
use parking_lot::Mutex;
use rusqlite::{Connection, OptionalExtension, Row, params};

use super::RecordStore;
use super::schema::init_schema;
use crate::error::{Result, StoreError};
use crate::record::{HedgehogFields, HedgehogRecord, RecordId};
use crate::validate::validate;

const SELECT_COLUMNS: &str =
    "id, common_name, binomial_name, description, image_url, created_at, updated_at";

/// Record store persisting to a single SQLite database.
///
/// The connection is shared behind a mutex, so every operation is
/// serialized. Cloning is cheap and shares the connection.
#[derive(Clone)]
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Open (or create) the database at `path`.
    ///
    /// `":memory:"` opens a private in-memory database. `busy_timeout`
    /// bounds how long any call waits on a locked database file.
    pub fn open(path: impl AsRef<Path>, busy_timeout: Duration) -> Result<Self> {
        let path = path.as_ref();
        let conn = if path == Path::new(":memory:") {
            Connection::open_in_memory()?
        } else {
            Connection::open(path)?
        };
        conn.busy_timeout(busy_timeout)?;
        init_schema(&conn)?;

        tracing::info!(path = %path.display(), "record store opened");

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Open a fresh in-memory store.
    pub fn open_in_memory() -> Result<Self> {
        Self::open(":memory:", Duration::from_secs(5))
    }

    fn select_one(conn: &Connection, id: &RecordId) -> Result<Option<HedgehogRecord>> {
        let sql = format!("SELECT {SELECT_COLUMNS} FROM hedgehogs WHERE id = ?1");
        let raw = conn
            .query_row(&sql, [id.as_str()], RawRecord::from_row)
            .optional()?;
        raw.map(RawRecord::decode).transpose()
    }
}

impl RecordStore for SqliteStore {
    fn create(&self, fields: &HedgehogFields) -> Result<HedgehogRecord> {
        let valid = validate(fields)?;
        let id = RecordId::generate();
        let now = Utc::now();

        let conn = self.conn.lock();
        conn.execute(
            "INSERT INTO hedgehogs
                (id, common_name, binomial_name, description, image_url, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6)",
            params![
                id.as_str(),
                valid.common_name,
                valid.binomial_name,
                valid.description,
                valid.image_url,
                format_timestamp(now),
            ],
        )?;

        tracing::debug!(id = %id, "record created");

        Ok(HedgehogRecord {
            id,
            common_name: valid.common_name,
            binomial_name: valid.binomial_name,
            description: valid.description,
            image_url: valid.image_url,
            created_at: now,
            updated_at: now,
        })
    }

    fn list_all(&self) -> Result<Vec<HedgehogRecord>> {
        let conn = self.conn.lock();
        let sql = format!("SELECT {SELECT_COLUMNS} FROM hedgehogs ORDER BY seq");
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map([], RawRecord::from_row)?;

        let mut records = Vec::new();
        for raw in rows {
            records.push(raw?.decode()?);
        }
        Ok(records)
    }

    fn find_by_id(&self, id: &RecordId) -> Result<Option<HedgehogRecord>> {
        let conn = self.conn.lock();
        Self::select_one(&conn, id)
    }

    fn update(&self, id: &RecordId, fields: &HedgehogFields) -> Result<HedgehogRecord> {
        let conn = self.conn.lock();
        // Existence first: an unknown id is NotFound whatever the fields hold
        if Self::select_one(&conn, id)?.is_none() {
            return Err(StoreError::NotFound(id.clone()));
        }

        let valid = validate(fields)?;
        let now = format_timestamp(Utc::now());

        // max() keeps updated_at >= created_at even if the clock stepped back
        let changed = conn.execute(
            "UPDATE hedgehogs
             SET common_name = ?2, binomial_name = ?3, description = ?4, image_url = ?5,
                 updated_at = max(?6, created_at)
             WHERE id = ?1",
            params![
                id.as_str(),
                valid.common_name,
                valid.binomial_name,
                valid.description,
                valid.image_url,
                now,
            ],
        )?;

        if changed == 0 {
            return Err(StoreError::NotFound(id.clone()));
        }

        tracing::debug!(id = %id, "record updated");

        Self::select_one(&conn, id)?.ok_or_else(|| StoreError::NotFound(id.clone()))
    }

    fn delete(&self, id: &RecordId) -> Result<()> {
        let conn = self.conn.lock();
        let removed = conn.execute("DELETE FROM hedgehogs WHERE id = ?1", [id.as_str()])?;
        if removed == 0 {
            return Err(StoreError::NotFound(id.clone()));
        }
        tracing::debug!(id = %id, "record deleted");
        Ok(())
    }
}

/// Timestamps are stored as fixed-width RFC 3339 UTC text so that string
/// comparison matches chronological order.
fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

fn parse_timestamp(id: &str, value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| StoreError::Corrupt {
            id: id.to_string(),
            reason: format!("bad timestamp {value:?}: {e}"),
        })
}

/// A row as read from SQLite, before timestamp decoding.
struct RawRecord {
    id: String,
    common_name: String,
    binomial_name: String,
    description: String,
    image_url: String,
    created_at: String,
    updated_at: String,
}

impl RawRecord {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            common_name: row.get(1)?,
            binomial_name: row.get(2)?,
            description: row.get(3)?,
            image_url: row.get(4)?,
            created_at: row.get(5)?,
            updated_at: row.get(6)?,
        })
    }

    fn decode(self) -> Result<HedgehogRecord> {
        let created_at = parse_timestamp(&self.id, &self.created_at)?;
        let updated_at = parse_timestamp(&self.id, &self.updated_at)?;
        Ok(HedgehogRecord {
            id: RecordId::from(self.id),
            common_name: self.common_name,
            binomial_name: self.binomial_name,
            description: self.description,
            image_url: self.image_url,
            created_at,
            updated_at,
        })
    }
}
