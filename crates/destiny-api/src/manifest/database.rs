//! Read-only access to the extracted manifest SQLite database

use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags, OptionalExtension};
use serde_json::Value;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

use crate::error::{Error, Result};

/// Definition table keyed by text instead of the signed hash.
const KEYED_BY_TEXT: &str = "DestinyHistoricalStatsDefinition";

/// Identifier of a definition row.
///
/// Most tables are keyed by a 32-bit hash. `DestinyHistoricalStatsDefinition`
/// is keyed by stat id strings such as `activitiesCleared`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DefinitionKey {
    Hash(u32),
    Key(String),
}

impl DefinitionKey {
    /// Value stored in the signed `id` column, if this key can name one.
    fn signed_id(&self) -> Option<i32> {
        match self {
            Self::Hash(hash) => Some(*hash as i32),
            Self::Key(key) => {
                let wide = key.trim().parse::<i64>().ok()?;
                i32::try_from(wide)
                    .ok()
                    .or_else(|| u32::try_from(wide).ok().map(|h| h as i32))
            }
        }
    }
}

impl From<u32> for DefinitionKey {
    fn from(hash: u32) -> Self {
        Self::Hash(hash)
    }
}

impl From<&str> for DefinitionKey {
    fn from(key: &str) -> Self {
        Self::Key(key.to_string())
    }
}

impl From<String> for DefinitionKey {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

impl FromStr for DefinitionKey {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(s.parse::<u32>().map_or_else(|_| Self::Key(s.to_string()), Self::Hash))
    }
}

impl fmt::Display for DefinitionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hash(hash) => write!(f, "{hash}"),
            Self::Key(key) => f.write_str(key),
        }
    }
}

/// Open manifest content database.
#[derive(Debug)]
pub struct ManifestDatabase {
    conn: Connection,
    path: PathBuf,
}

impl ManifestDatabase {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let conn = Connection::open_with_flags(
            &path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        debug!(path = %path.display(), "Opened manifest database");
        Ok(Self { conn, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Names of all definition tables.
    pub fn definitions(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")?;
        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(names)
    }

    /// Look up the JSON definition for `key` in the `definition` table.
    ///
    /// Hashes are stored in the `id` column as signed 32-bit integers; a text
    /// key naming a number (signed or unsigned) is accepted there too.
    pub fn decode_hash(&self, key: impl Into<DefinitionKey>, definition: &str) -> Result<Value> {
        let key = key.into();
        if definition.is_empty()
            || !definition
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'_')
        {
            return Err(Error::UnknownDefinition(definition.to_string()));
        }

        let raw = if definition == KEYED_BY_TEXT {
            let sql = format!("SELECT json FROM {definition} WHERE key = ?1");
            self.lookup(&sql, definition, key.to_string())?
        } else {
            let sql = format!("SELECT json FROM {definition} WHERE id = ?1");
            match key.signed_id() {
                Some(id) => self.lookup(&sql, definition, id)?,
                None => {
                    self.check_table(definition)?;
                    None
                }
            }
        };

        let raw = raw.ok_or_else(|| Error::DefinitionNotFound {
            definition: definition.to_string(),
            key: key.to_string(),
        })?;
        Ok(serde_json::from_slice(&raw)?)
    }

    fn check_table(&self, definition: &str) -> Result<()> {
        let found = self
            .conn
            .query_row(
                "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1",
                [definition],
                |_| Ok(()),
            )
            .optional()?;
        found.ok_or_else(|| Error::UnknownDefinition(definition.to_string()))
    }

    fn lookup<P: rusqlite::ToSql>(
        &self,
        sql: &str,
        definition: &str,
        key: P,
    ) -> Result<Option<Vec<u8>>> {
        let mut stmt = match self.conn.prepare(sql) {
            Ok(stmt) => stmt,
            Err(rusqlite::Error::SqliteFailure(_, Some(msg))) if msg.starts_with("no such table") => {
                return Err(Error::UnknownDefinition(definition.to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        let raw = stmt
            .query_row([key], |row| match row.get_ref(0)? {
                ValueRef::Text(bytes) | ValueRef::Blob(bytes) => Ok(Some(bytes.to_vec())),
                _ => Ok(None),
            })
            .optional()?;

        match raw {
            None => Ok(None),
            Some(Some(bytes)) => Ok(Some(bytes)),
            Some(None) => Err(Error::unexpected_response(format!(
                "{definition} row has no JSON payload"
            ))),
        }
    }
}
