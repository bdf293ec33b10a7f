//! Persistence of the form collection in a SQLite-backed key-value store.
//!
//! The whole collection lives as one JSON document under [`FORMS_KEY`].

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension, params};
use serde::Deserialize;

use crate::demo::DemoData;
use crate::error::StorageError;
use crate::form::{Field, Form, FormCollection};

pub const FORMS_KEY: &str = "formcraft_forms";

pub struct FormStore {
    conn: Connection,
}

impl FormStore {
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get::<_, String>(0))?;
        Self::init(conn)
    }

    pub fn open_in_memory() -> Result<Self, StorageError> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self, StorageError> {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv_store (
             store_key TEXT PRIMARY KEY,
             store_value TEXT NOT NULL,
             updated_at INTEGER NOT NULL DEFAULT (strftime('%s','now'))
           );",
        )?;
        Ok(Self { conn })
    }

    pub fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let value = self
            .conn
            .query_row(
                "SELECT store_value FROM kv_store WHERE store_key = ?1 LIMIT 1;",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    pub fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT INTO kv_store (store_key, store_value, updated_at)
           VALUES (?1, ?2, strftime('%s','now'))
           ON CONFLICT(store_key)
           DO UPDATE SET
             store_value = excluded.store_value,
             updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }

    /// Reads the saved collection. A missing record is an empty collection.
    pub fn load_forms(&self, demo: &mut DemoData) -> Result<FormCollection, StorageError> {
        match self.get(FORMS_KEY)? {
            Some(raw) => decode_forms(&raw, demo),
            None => Ok(FormCollection::new()),
        }
    }

    pub fn save_forms(&self, forms: &FormCollection) -> Result<(), StorageError> {
        let raw = serde_json::to_string(forms)?;
        self.put(FORMS_KEY, &raw)
    }
}

/// Stored shape of a form. Older records may lack `submissions`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredForm {
    id: String,
    name: String,
    fields: Vec<Field>,
    created_at: DateTime<Utc>,
    #[serde(default)]
    submissions: Option<u32>,
}

pub fn decode_forms(raw: &str, demo: &mut DemoData) -> Result<FormCollection, StorageError> {
    let stored: Vec<StoredForm> = serde_json::from_str(raw)?;

    let mut seen = HashSet::new();
    let mut forms = Vec::with_capacity(stored.len());
    for record in stored {
        if !seen.insert(record.id.clone()) {
            return Err(StorageError::Malformed(format!(
                "duplicate form id '{}'",
                record.id
            )));
        }

        let form = Form {
            submissions: record
                .submissions
                .unwrap_or_else(|| demo.legacy_submissions()),
            id: record.id,
            name: record.name,
            fields: record.fields,
            created_at: record.created_at,
        };
        form.check_shape().map_err(StorageError::Malformed)?;
        forms.push(form);
    }

    Ok(FormCollection::from(forms))
}
