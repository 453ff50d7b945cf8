//! SQLite persistence for resources and quizzes.
//!
//! Every request opens its own connection to the database file; SQLite
//! serializes concurrent writers. The schema is created idempotently when
//! the [`Database`] is opened at startup.

mod quizzes;
mod resources;
mod sql;

pub use quizzes::QuizStore;
pub use resources::ResourceStore;

use crate::error::Result;
use log::info;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Handle to the database file. Cheap to clone and share across workers.
#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    /// Opens (creating if needed) the database at `path` and ensures both
    /// tables exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let db = Self {
            path: path.as_ref().to_path_buf(),
        };
        let conn = db.connect()?;
        create_tables(&conn)?;
        info!("Database ready at {}", db.path.display());
        Ok(db)
    }

    pub fn connect(&self) -> Result<Connection> {
        Ok(Connection::open(&self.path)?)
    }

    pub fn resources(&self) -> Result<ResourceStore> {
        Ok(ResourceStore::new(self.connect()?))
    }

    pub fn quizzes(&self) -> Result<QuizStore> {
        Ok(QuizStore::new(self.connect()?))
    }
}

pub fn create_tables(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(&format!("{};{};", sql::CREATE_RESOURCES, sql::CREATE_QUIZZES))
}

#[cfg(test)]
pub(crate) fn memory_connection() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    create_tables(&conn).unwrap();
    conn
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn reopening_keeps_existing_rows() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("portal.db");

        let db = Database::open(&path).unwrap();
        db.resources()
            .unwrap()
            .add("Polity Notes", "pdfs/polity.pdf", "Group 1")
            .unwrap();

        let reopened = Database::open(&path).unwrap();
        assert_eq!(reopened.resources().unwrap().list(None).unwrap().len(), 1);
    }
}
