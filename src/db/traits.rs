// AuthorCatalog trait — the seam between the matching core and storage.
//
// The core treats the catalog as an opaque read-only collaborator: it asks
// for the candidate list (and era list, for grouped ranking) and never
// mutates what it gets back. All methods are async so a sync backend
// (rusqlite behind a Mutex) and any future native-async backend fit the
// same interface.

use anyhow::Result;
use async_trait::async_trait;

use super::models::{Author, CatalogCounts, Era, EraDetail, Graph, HistoricalEvent};
use super::seed::{CatalogFile, ImportReport};

#[async_trait]
pub trait AuthorCatalog: Send + Sync {
    // --- Lifecycle ---

    /// Count the number of user-created tables in the database.
    async fn table_count(&self) -> Result<i64>;

    // --- Ranking inputs ---

    /// All authors in catalog order. Ranking iterates this order, so it
    /// must be deterministic.
    async fn list_authors(&self) -> Result<Vec<Author>>;

    /// All eras in timeline order.
    async fn list_eras(&self) -> Result<Vec<Era>>;

    // --- Presentation views ---

    /// Works and authors belonging to one era.
    async fn era_detail(&self, era_id: i64) -> Result<EraDetail>;

    /// The full influence graph.
    async fn graph(&self) -> Result<Graph>;

    /// All historical events in chronological order.
    async fn list_events(&self) -> Result<Vec<HistoricalEvent>>;

    /// Per-table row counts.
    async fn counts(&self) -> Result<CatalogCounts>;

    // --- Seeding ---

    /// Bulk-import a parsed seed bundle.
    async fn import_catalog(&self, catalog: &CatalogFile) -> Result<ImportReport>;
}
