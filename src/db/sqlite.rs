// SqliteCatalog — rusqlite backend implementing the AuthorCatalog trait.
//
// The Connection is wrapped in tokio::sync::Mutex because Connection is
// !Send. Trait methods lock the mutex, do synchronous rusqlite work, and
// return. The lock is never held across .await points.
//
// The free functions in queries.rs remain usable against a Connection
// directly, which is what the unit tests do.

use anyhow::Result;
use async_trait::async_trait;
use rusqlite::Connection;
use tokio::sync::Mutex;

use super::models::{Author, CatalogCounts, Era, EraDetail, Graph, HistoricalEvent};
use super::seed::{self, CatalogFile, ImportReport};
use super::traits::AuthorCatalog;

pub struct SqliteCatalog {
    conn: Mutex<Connection>,
}

impl SqliteCatalog {
    /// Wrap an already-opened rusqlite Connection.
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }
}

#[async_trait]
impl AuthorCatalog for SqliteCatalog {
    async fn table_count(&self) -> Result<i64> {
        let conn = self.conn.lock().await;
        super::schema::table_count(&conn)
    }

    async fn list_authors(&self) -> Result<Vec<Author>> {
        let conn = self.conn.lock().await;
        super::queries::list_authors(&conn)
    }

    async fn list_eras(&self) -> Result<Vec<Era>> {
        let conn = self.conn.lock().await;
        super::queries::list_eras(&conn)
    }

    async fn era_detail(&self, era_id: i64) -> Result<EraDetail> {
        let conn = self.conn.lock().await;
        super::queries::era_detail(&conn, era_id)
    }

    async fn graph(&self) -> Result<Graph> {
        let conn = self.conn.lock().await;
        Ok(Graph {
            nodes: super::queries::list_authors(&conn)?,
            edges: super::queries::list_connections(&conn)?,
        })
    }

    async fn list_events(&self) -> Result<Vec<HistoricalEvent>> {
        let conn = self.conn.lock().await;
        super::queries::list_events(&conn)
    }

    async fn counts(&self) -> Result<CatalogCounts> {
        let conn = self.conn.lock().await;
        super::queries::counts(&conn)
    }

    async fn import_catalog(&self, catalog: &CatalogFile) -> Result<ImportReport> {
        let conn = self.conn.lock().await;
        seed::import(&conn, catalog)
    }
}
