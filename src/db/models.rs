// Data models — Rust structs that map to database rows.
//
// These are the types that flow through the application. They're separate
// from the database queries so other modules can use them without depending
// on rusqlite directly.

use serde::{Deserialize, Serialize};

use crate::dna::vector::StyleVector;

/// A catalog author with an optional precomputed style fingerprint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    pub id: i64,
    pub name: String,
    pub birth_year: Option<i32>,
    pub death_year: Option<i32>,
    pub image: Option<String>,
    pub short_description: Option<String>,
    /// The era this author belongs to (links to the eras table)
    pub era_id: Option<i64>,
    /// Present only when all four style columns are stored
    pub style: Option<StyleVector>,
}

/// A historical era used to partition authors for per-era matching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Era {
    pub id: i64,
    pub name: String,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
    pub short_description: Option<String>,
    pub detailed_description: Option<String>,
    pub theme_color: Option<String>,
    pub icon: Option<String>,
}

/// A published work, linked to its author and era.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Work {
    pub id: i64,
    pub title: String,
    pub author_id: i64,
    pub era_id: i64,
    pub publication_year: Option<i32>,
    pub cover_image: Option<String>,
    pub link: Option<String>,
}

/// A directed influence edge between two authors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Connection {
    pub id: i64,
    pub source_author_id: i64,
    pub target_author_id: i64,
    /// Relationship kind, e.g. "influenced" or "contemporary"
    pub kind: String,
}

/// A dated historical event shown alongside the era timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoricalEvent {
    pub id: i64,
    pub label: String,
    pub year: Option<i32>,
    pub short_description: Option<String>,
    pub icon: Option<String>,
}

/// A work row joined with its author's name, for era detail views.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkSummary {
    pub id: i64,
    pub title: String,
    pub author_name: String,
    pub publication_year: Option<i32>,
}

/// An author reduced to name and initials, for era detail views.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorSummary {
    pub id: i64,
    pub name: String,
    pub initials: String,
}

impl AuthorSummary {
    /// Build a summary from a full author row, deriving uppercase initials
    /// from the first letter of each name part.
    pub fn from_name(id: i64, name: &str) -> Self {
        let initials: String = name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect();
        Self {
            id,
            name: name.to_string(),
            initials,
        }
    }
}

/// Works and authors belonging to a single era.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EraDetail {
    pub works: Vec<WorkSummary>,
    pub authors: Vec<AuthorSummary>,
}

/// The influence graph: authors as nodes, connections as edges.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<Author>,
    pub edges: Vec<Connection>,
}

/// Per-table row counts, for `quill status` and the debug endpoint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CatalogCounts {
    pub authors: i64,
    pub eras: i64,
    pub works: i64,
    pub connections: i64,
    pub events: i64,
}
