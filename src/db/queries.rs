// Database queries — CRUD operations for all catalog tables.
//
// Every database interaction goes through this module. This keeps SQL
// contained in one place and gives the rest of the app clean Rust
// interfaces.

use anyhow::Result;
use rusqlite::{params, Connection, Row};

use crate::dna::vector::StyleVector;

use super::models::{
    Author, AuthorSummary, CatalogCounts, Connection as AuthorConnection, Era, EraDetail,
    HistoricalEvent, WorkSummary,
};

// --- Authors ---

/// List all authors in catalog order (by id).
///
/// Ranking iterates this list directly, and ties go to the first candidate
/// seen, so the ordering here must stay deterministic across runs.
pub fn list_authors(conn: &Connection) -> Result<Vec<Author>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, birth_year, death_year, image, short_description, era_id,
                vocabulary, complexity, pacing, abstraction
         FROM authors
         ORDER BY id",
    )?;
    let authors = stmt
        .query_map([], author_from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(authors)
}

/// Insert an author; the style vector is stored as four nullable columns.
pub fn insert_author(
    conn: &Connection,
    name: &str,
    birth_year: Option<i32>,
    death_year: Option<i32>,
    image: Option<&str>,
    short_description: Option<&str>,
    era_id: Option<i64>,
    style: Option<StyleVector>,
) -> Result<i64> {
    let dims = style.map(StyleVector::to_array);
    conn.execute(
        "INSERT INTO authors (name, birth_year, death_year, image, short_description, era_id,
                              vocabulary, complexity, pacing, abstraction)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            name,
            birth_year,
            death_year,
            image,
            short_description,
            era_id,
            dims.map(|d| d[0]),
            dims.map(|d| d[1]),
            dims.map(|d| d[2]),
            dims.map(|d| d[3]),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

fn author_from_row(row: &Row<'_>) -> rusqlite::Result<Author> {
    let vocabulary: Option<f64> = row.get(7)?;
    let complexity: Option<f64> = row.get(8)?;
    let pacing: Option<f64> = row.get(9)?;
    let abstraction: Option<f64> = row.get(10)?;

    // A usable vector needs all four dimensions
    let style = match (vocabulary, complexity, pacing, abstraction) {
        (Some(v), Some(c), Some(p), Some(a)) => Some(StyleVector::new(v, c, p, a)),
        _ => None,
    };

    Ok(Author {
        id: row.get(0)?,
        name: row.get(1)?,
        birth_year: row.get(2)?,
        death_year: row.get(3)?,
        image: row.get(4)?,
        short_description: row.get(5)?,
        era_id: row.get(6)?,
        style,
    })
}

// --- Eras ---

/// List all eras in timeline order (by start year).
pub fn list_eras(conn: &Connection) -> Result<Vec<Era>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, start_year, end_year, short_description, detailed_description,
                theme_color, icon
         FROM eras
         ORDER BY start_year",
    )?;
    let eras = stmt
        .query_map([], |row| {
            Ok(Era {
                id: row.get(0)?,
                name: row.get(1)?,
                start_year: row.get(2)?,
                end_year: row.get(3)?,
                short_description: row.get(4)?,
                detailed_description: row.get(5)?,
                theme_color: row.get(6)?,
                icon: row.get(7)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(eras)
}

pub fn insert_era(
    conn: &Connection,
    name: &str,
    start_year: Option<i32>,
    end_year: Option<i32>,
    short_description: Option<&str>,
    detailed_description: Option<&str>,
    theme_color: Option<&str>,
    icon: Option<&str>,
) -> Result<i64> {
    conn.execute(
        "INSERT INTO eras (name, start_year, end_year, short_description, detailed_description,
                           theme_color, icon)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            name,
            start_year,
            end_year,
            short_description,
            detailed_description,
            theme_color,
            icon
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Works and authors for a single era, shaped for the timeline detail view.
pub fn era_detail(conn: &Connection, era_id: i64) -> Result<EraDetail> {
    let mut stmt = conn.prepare(
        "SELECT works.id, works.title, authors.name, works.publication_year
         FROM works
         JOIN authors ON authors.id = works.author_id
         WHERE works.era_id = ?1
         ORDER BY works.publication_year",
    )?;
    let works = stmt
        .query_map(params![era_id], |row| {
            Ok(WorkSummary {
                id: row.get(0)?,
                title: row.get(1)?,
                author_name: row.get(2)?,
                publication_year: row.get(3)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    let mut stmt = conn.prepare("SELECT id, name FROM authors WHERE era_id = ?1 ORDER BY id")?;
    let authors = stmt
        .query_map(params![era_id], |row| {
            let id: i64 = row.get(0)?;
            let name: String = row.get(1)?;
            Ok(AuthorSummary::from_name(id, &name))
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(EraDetail { works, authors })
}

// --- Works ---

pub fn insert_work(
    conn: &Connection,
    title: &str,
    author_id: i64,
    era_id: i64,
    publication_year: Option<i32>,
    cover_image: Option<&str>,
    link: Option<&str>,
) -> Result<i64> {
    conn.execute(
        "INSERT INTO works (title, author_id, era_id, publication_year, cover_image, link)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![title, author_id, era_id, publication_year, cover_image, link],
    )?;
    Ok(conn.last_insert_rowid())
}

// --- Connections ---

pub fn list_connections(conn: &Connection) -> Result<Vec<AuthorConnection>> {
    let mut stmt = conn.prepare(
        "SELECT id, source_author_id, target_author_id, kind FROM connections ORDER BY id",
    )?;
    let connections = stmt
        .query_map([], |row| {
            Ok(AuthorConnection {
                id: row.get(0)?,
                source_author_id: row.get(1)?,
                target_author_id: row.get(2)?,
                kind: row.get(3)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(connections)
}

pub fn insert_connection(
    conn: &Connection,
    source_author_id: i64,
    target_author_id: i64,
    kind: &str,
) -> Result<i64> {
    conn.execute(
        "INSERT INTO connections (source_author_id, target_author_id, kind)
         VALUES (?1, ?2, ?3)",
        params![source_author_id, target_author_id, kind],
    )?;
    Ok(conn.last_insert_rowid())
}

// --- Historical events ---

/// List all events in chronological order.
pub fn list_events(conn: &Connection) -> Result<Vec<HistoricalEvent>> {
    let mut stmt = conn.prepare(
        "SELECT id, label, year, short_description, icon
         FROM historical_events
         ORDER BY year",
    )?;
    let events = stmt
        .query_map([], |row| {
            Ok(HistoricalEvent {
                id: row.get(0)?,
                label: row.get(1)?,
                year: row.get(2)?,
                short_description: row.get(3)?,
                icon: row.get(4)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(events)
}

pub fn insert_event(
    conn: &Connection,
    label: &str,
    year: Option<i32>,
    short_description: Option<&str>,
    icon: Option<&str>,
) -> Result<i64> {
    conn.execute(
        "INSERT INTO historical_events (label, year, short_description, icon)
         VALUES (?1, ?2, ?3, ?4)",
        params![label, year, short_description, icon],
    )?;
    Ok(conn.last_insert_rowid())
}

// --- Counts ---

/// Per-table row counts for status and debug views.
pub fn counts(conn: &Connection) -> Result<CatalogCounts> {
    let count = |table: &str| -> Result<i64> {
        let n = conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
            row.get(0)
        })?;
        Ok(n)
    };
    Ok(CatalogCounts {
        authors: count("authors")?,
        eras: count("eras")?,
        works: count("works")?,
        connections: count("connections")?,
        events: count("historical_events")?,
    })
}
