// Database schema — table creation and migrations.
//
// We use a simple version-based approach: a `schema_version` table tracks
// which migrations have run. The catalog tables mirror the five record
// kinds the application knows about: eras, authors, works, connections,
// and historical events.

use anyhow::{Context, Result};
use rusqlite::Connection;

/// Create all tables if they don't exist yet.
///
/// This is idempotent — safe to call on every startup.
pub fn create_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        -- Tracks schema version for future migrations
        CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        -- Historical eras used to partition authors on the timeline
        CREATE TABLE IF NOT EXISTS eras (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            start_year INTEGER,
            end_year INTEGER,
            short_description TEXT,
            detailed_description TEXT,
            theme_color TEXT,
            icon TEXT
        );

        -- The author catalog, each with a precomputed style fingerprint.
        -- The four style columns are nullable as a set: an author is only
        -- rankable when all four are present.
        CREATE TABLE IF NOT EXISTS authors (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            birth_year INTEGER,
            death_year INTEGER,
            image TEXT,
            short_description TEXT,
            era_id INTEGER REFERENCES eras(id),
            vocabulary REAL,                   -- 0-100
            complexity REAL,                   -- 0-100
            pacing REAL,                       -- 0-100
            abstraction REAL                   -- 0-100
        );

        -- Published works, linked to author and era
        CREATE TABLE IF NOT EXISTS works (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            author_id INTEGER NOT NULL REFERENCES authors(id),
            era_id INTEGER NOT NULL REFERENCES eras(id),
            publication_year INTEGER,
            cover_image TEXT,
            link TEXT
        );

        -- Influence edges between authors
        CREATE TABLE IF NOT EXISTS connections (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            source_author_id INTEGER NOT NULL REFERENCES authors(id),
            target_author_id INTEGER NOT NULL REFERENCES authors(id),
            kind TEXT NOT NULL
        );

        -- Dated events shown alongside the era timeline
        CREATE TABLE IF NOT EXISTS historical_events (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            label TEXT NOT NULL,
            year INTEGER,
            short_description TEXT,
            icon TEXT
        );

        -- Index for partitioning authors by era during grouped ranking
        CREATE INDEX IF NOT EXISTS idx_authors_era
            ON authors(era_id);

        -- Index for era detail lookups
        CREATE INDEX IF NOT EXISTS idx_works_era
            ON works(era_id);

        -- Index for walking the influence graph from a source author
        CREATE INDEX IF NOT EXISTS idx_connections_source
            ON connections(source_author_id);
        ",
    )
    .context("Failed to create database tables")?;

    // Record initial schema version if not already set
    conn.execute(
        "INSERT OR IGNORE INTO schema_version (version) VALUES (?1)",
        [1],
    )?;

    Ok(())
}

/// Count the number of tables in the database (useful for init confirmation).
pub fn table_count(conn: &Connection) -> Result<i64> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%'",
        [],
        |row| row.get(0),
    )?;
    Ok(count)
}
