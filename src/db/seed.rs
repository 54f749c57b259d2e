// Catalog seeding — bulk import from a JSON bundle.
//
// The seed file references records by name rather than id (an era by its
// name, a work by its author's name), since ids only exist after insertion.
// Import resolves those references in dependency order: eras, then authors,
// then works and connections, then events. A dangling reference aborts the
// import with a message naming the offending entry.

use std::collections::HashMap;

use anyhow::{Context, Result};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::dna::vector::StyleVector;

use super::queries;

/// The on-disk seed bundle. Every section is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub eras: Vec<SeedEra>,
    #[serde(default)]
    pub authors: Vec<SeedAuthor>,
    #[serde(default)]
    pub works: Vec<SeedWork>,
    #[serde(default)]
    pub connections: Vec<SeedConnection>,
    #[serde(default)]
    pub events: Vec<SeedEvent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedEra {
    pub name: String,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
    pub short_description: Option<String>,
    pub detailed_description: Option<String>,
    pub theme_color: Option<String>,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedAuthor {
    pub name: String,
    pub birth_year: Option<i32>,
    pub death_year: Option<i32>,
    pub image: Option<String>,
    pub short_description: Option<String>,
    /// Era name, resolved against the eras section (or pre-existing rows)
    pub era: Option<String>,
    pub style: Option<StyleVector>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedWork {
    pub title: String,
    /// Author name, resolved against the authors section
    pub author: String,
    /// Era name, resolved against the eras section
    pub era: String,
    pub publication_year: Option<i32>,
    pub cover_image: Option<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConnection {
    pub source: String,
    pub target: String,
    pub kind: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedEvent {
    pub label: String,
    pub year: Option<i32>,
    pub short_description: Option<String>,
    pub icon: Option<String>,
}

/// How many rows of each kind an import inserted.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct ImportReport {
    pub eras: usize,
    pub authors: usize,
    pub works: usize,
    pub connections: usize,
    pub events: usize,
}

/// Parse a seed bundle from JSON text.
pub fn parse(json: &str) -> Result<CatalogFile> {
    serde_json::from_str(json).context("Failed to parse catalog seed JSON")
}

/// Insert a parsed bundle into the database, resolving name references.
pub fn import(conn: &Connection, catalog: &CatalogFile) -> Result<ImportReport> {
    let mut report = ImportReport::default();

    // Start from whatever is already in the database so a bundle can extend
    // a previously seeded catalog.
    let mut era_ids: HashMap<String, i64> = queries::list_eras(conn)?
        .into_iter()
        .map(|e| (e.name, e.id))
        .collect();
    let mut author_ids: HashMap<String, i64> = queries::list_authors(conn)?
        .into_iter()
        .map(|a| (a.name, a.id))
        .collect();

    for era in &catalog.eras {
        let id = queries::insert_era(
            conn,
            &era.name,
            era.start_year,
            era.end_year,
            era.short_description.as_deref(),
            era.detailed_description.as_deref(),
            era.theme_color.as_deref(),
            era.icon.as_deref(),
        )?;
        era_ids.insert(era.name.clone(), id);
        report.eras += 1;
    }

    for author in &catalog.authors {
        let era_id = match &author.era {
            Some(era_name) => Some(resolve(&era_ids, era_name, "era", &author.name)?),
            None => None,
        };
        let id = queries::insert_author(
            conn,
            &author.name,
            author.birth_year,
            author.death_year,
            author.image.as_deref(),
            author.short_description.as_deref(),
            era_id,
            author.style,
        )?;
        author_ids.insert(author.name.clone(), id);
        report.authors += 1;
    }

    for work in &catalog.works {
        let author_id = resolve(&author_ids, &work.author, "author", &work.title)?;
        let era_id = resolve(&era_ids, &work.era, "era", &work.title)?;
        queries::insert_work(
            conn,
            &work.title,
            author_id,
            era_id,
            work.publication_year,
            work.cover_image.as_deref(),
            work.link.as_deref(),
        )?;
        report.works += 1;
    }

    for connection in &catalog.connections {
        let source = resolve(&author_ids, &connection.source, "author", &connection.source)?;
        let target = resolve(&author_ids, &connection.target, "author", &connection.target)?;
        queries::insert_connection(conn, source, target, &connection.kind)?;
        report.connections += 1;
    }

    for event in &catalog.events {
        queries::insert_event(
            conn,
            &event.label,
            event.year,
            event.short_description.as_deref(),
            event.icon.as_deref(),
        )?;
        report.events += 1;
    }

    Ok(report)
}

fn resolve(ids: &HashMap<String, i64>, name: &str, kind: &str, referenced_by: &str) -> Result<i64> {
    ids.get(name).copied().ok_or_else(|| {
        anyhow::anyhow!("Unknown {kind} \"{name}\" referenced by \"{referenced_by}\"")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::schema::create_tables;

    const BUNDLE: &str = r#"{
        "eras": [
            {"name": "Romanticism", "start_year": 1790, "end_year": 1850,
             "short_description": null, "detailed_description": null,
             "theme_color": null, "icon": null}
        ],
        "authors": [
            {"name": "Mary Shelley", "birth_year": 1797, "death_year": 1851,
             "image": null, "short_description": null, "era": "Romanticism",
             "style": {"vocabulary": 58, "complexity": 72, "pacing": 40, "abstraction": 33}}
        ],
        "works": [
            {"title": "Frankenstein", "author": "Mary Shelley", "era": "Romanticism",
             "publication_year": 1818, "cover_image": null, "link": null}
        ],
        "events": [
            {"label": "Year Without a Summer", "year": 1816,
             "short_description": null, "icon": null}
        ]
    }"#;

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        create_tables(&conn).unwrap();
        conn
    }

    #[test]
    fn test_import_resolves_names() {
        let conn = test_conn();
        let catalog = parse(BUNDLE).unwrap();
        let report = import(&conn, &catalog).unwrap();

        assert_eq!(report.eras, 1);
        assert_eq!(report.authors, 1);
        assert_eq!(report.works, 1);
        assert_eq!(report.events, 1);
        assert_eq!(report.connections, 0);

        let authors = queries::list_authors(&conn).unwrap();
        assert_eq!(authors[0].name, "Mary Shelley");
        assert!(authors[0].era_id.is_some());
        assert_eq!(
            authors[0].style,
            Some(StyleVector::new(58.0, 72.0, 40.0, 33.0))
        );
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let catalog = parse("{}").unwrap();
        assert!(catalog.eras.is_empty());
        assert!(catalog.authors.is_empty());
    }

    #[test]
    fn test_dangling_era_reference_fails_with_context() {
        let conn = test_conn();
        let catalog = parse(
            r#"{"authors": [{"name": "Nobody", "birth_year": null, "death_year": null,
                "image": null, "short_description": null, "era": "Atlantis", "style": null}]}"#,
        )
        .unwrap();

        let err = import(&conn, &catalog).unwrap_err();
        assert!(err.to_string().contains("Atlantis"), "{err}");
    }

    #[test]
    fn test_import_extends_existing_catalog() {
        let conn = test_conn();
        queries::insert_era(&conn, "Victorian", Some(1837), None, None, None, None, None).unwrap();

        let catalog = parse(
            r#"{"authors": [{"name": "George Eliot", "birth_year": 1819, "death_year": 1880,
                "image": null, "short_description": null, "era": "Victorian", "style": null}]}"#,
        )
        .unwrap();
        let report = import(&conn, &catalog).unwrap();
        assert_eq!(report.authors, 1);
    }
}
