use super::sql;
use crate::error::Result;
use common::model::resource::Resource;
use rusqlite::{params, Connection, Row};

/// Study resources stored in the `resources` table.
pub struct ResourceStore {
    conn: Connection,
}

fn resource_from_row(row: &Row<'_>) -> rusqlite::Result<Resource> {
    Ok(Resource {
        id: row.get(0)?,
        title: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
        link: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        category: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
    })
}

impl ResourceStore {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Inserts a resource and returns its new id. Duplicates are allowed.
    pub fn add(&self, title: &str, link: &str, category: &str) -> Result<i64> {
        self.conn
            .execute(sql::INSERT_RESOURCE, params![title, link, category])?;
        Ok(self.conn.last_insert_rowid())
    }

    /// All resources in insertion order, restricted to `category` when given.
    pub fn list(&self, category: Option<&str>) -> Result<Vec<Resource>> {
        let resources = match category {
            Some(category) => {
                let mut stmt = self.conn.prepare(sql::SELECT_RESOURCES_BY_SUBJECT)?;
                let rows = stmt.query_map(params![category], resource_from_row)?;
                rows.collect::<rusqlite::Result<Vec<_>>>()?
            }
            None => {
                let mut stmt = self.conn.prepare(sql::SELECT_RESOURCES)?;
                let rows = stmt.query_map([], resource_from_row)?;
                rows.collect::<rusqlite::Result<Vec<_>>>()?
            }
        };
        Ok(resources)
    }

    /// Removes the resource with `id`. Returns whether a row was deleted;
    /// an unknown id is not an error.
    pub fn delete(&self, id: i64) -> Result<bool> {
        let affected = self.conn.execute(sql::DELETE_RESOURCE, params![id])?;
        Ok(affected > 0)
    }
}
