// Composition tests — verifying that the pieces chain together correctly.
//
// These tests exercise the full data flow:
//   text -> extract -> StyleVector -> rank against a seeded catalog
// without any network access; the database is in-memory.

use rusqlite::Connection;

use quill::db::schema;
use quill::db::seed;
use quill::db::sqlite::SqliteCatalog;
use quill::db::traits::AuthorCatalog;
use quill::dna::extract::extract;
use quill::dna::matcher::{rank, NO_MATCH_SCORE};

// Two deliberately contrasting writing samples: clipped, concrete prose
// versus long, abstract clauses. Their fingerprints must differ enough for
// ranking to tell them apart.
const TERSE_SAMPLE: &str = "He ran. The door slammed. Rain hit the tin roof hard. \
    She counted the coins twice. The dog barked once and stopped. Nobody spoke. \
    The kettle hissed. He sat down. The clock ticked on the wall. They waited.";

const ORNATE_SAMPLE: &str = "The persistence of memory within any society depends upon the \
    transmission of belief and the preservation of justice, for a civilization estranged from \
    truth surrenders its freedom to the quiet erosion of wisdom, and whatever notion of hope \
    remains is an inheritance from the imagination of earlier generations.";

#[test]
fn contrasting_samples_produce_distinct_fingerprints() {
    let terse = extract(TERSE_SAMPLE);
    let ornate = extract(ORNATE_SAMPLE);

    assert!(!terse.is_zero());
    assert!(!ornate.is_zero());
    // Ornate prose runs much longer per sentence and far more abstract
    assert!(ornate.complexity > terse.complexity);
    assert!(ornate.abstraction > terse.abstraction);
}

#[test]
fn extracted_fingerprint_matches_its_own_author() {
    // Seed the catalog with fingerprints extracted from the two samples;
    // querying with either sample must come back to its own author at 100.
    let authors = vec![
        seeded_author(1, "Terse", extract(TERSE_SAMPLE)),
        seeded_author(2, "Ornate", extract(ORNATE_SAMPLE)),
    ];

    let outcome = rank(&extract(TERSE_SAMPLE), &authors, None);
    let best = outcome.best.expect("a best match");
    assert_eq!(best.author.name, "Terse");
    assert_eq!(best.score, 100);

    let outcome = rank(&extract(ORNATE_SAMPLE), &authors, None);
    let best = outcome.best.expect("a best match");
    assert_eq!(best.author.name, "Ornate");
    assert_eq!(best.score, 100);
}

#[tokio::test]
async fn full_flow_through_a_seeded_database() {
    let conn = Connection::open_in_memory().unwrap();
    schema::create_tables(&conn).unwrap();

    // Store the samples' real fingerprints in the catalog
    let terse = extract(TERSE_SAMPLE);
    let ornate = extract(ORNATE_SAMPLE);
    let bundle = seed::parse(&format!(
        r#"{{
            "eras": [{{"name": "Minimalism", "start_year": 1960}},
                     {{"name": "Romanticism", "start_year": 1790}}],
            "authors": [
                {{"name": "Terse", "era": "Minimalism", "style": {}}},
                {{"name": "Ornate", "era": "Romanticism", "style": {}}}
            ]
        }}"#,
        serde_json::to_string(&terse).unwrap(),
        serde_json::to_string(&ornate).unwrap(),
    ))
    .unwrap();
    seed::import(&conn, &bundle).unwrap();
    let catalog = SqliteCatalog::new(conn);

    // The request flow: extract, fetch candidates and eras, rank
    let query = extract(ORNATE_SAMPLE);
    let authors = catalog.list_authors().await.unwrap();
    let eras = catalog.list_eras().await.unwrap();
    let outcome = rank(&query, &authors, Some(&eras));

    let best = outcome.best.expect("a best match");
    assert_eq!(best.author.name, "Ornate");
    assert_eq!(outcome.score, 100);

    // Both eras have exactly one eligible candidate
    assert_eq!(outcome.era_matches.len(), 2);
    let romantic = outcome
        .era_matches
        .iter()
        .find(|m| m.era.name == "Romanticism")
        .unwrap();
    assert_eq!(romantic.best.author.name, "Ornate");
    assert_eq!(romantic.best.score, 100);

    assert_eq!(outcome.debug.len(), 2);
    assert_eq!(outcome.debug[0].name, "Ornate");
}

#[tokio::test]
async fn empty_database_degrades_to_no_match() {
    let conn = Connection::open_in_memory().unwrap();
    schema::create_tables(&conn).unwrap();
    let catalog = SqliteCatalog::new(conn);

    let query = extract(TERSE_SAMPLE);
    let authors = catalog.list_authors().await.unwrap();
    let eras = catalog.list_eras().await.unwrap();
    let outcome = rank(&query, &authors, Some(&eras));

    assert!(outcome.best.is_none());
    assert_eq!(outcome.score, NO_MATCH_SCORE);
    assert!(outcome.era_matches.is_empty());
    assert!(outcome.debug.is_empty());
}

fn seeded_author(
    id: i64,
    name: &str,
    style: quill::dna::vector::StyleVector,
) -> quill::db::models::Author {
    quill::db::models::Author {
        id,
        name: name.to_string(),
        birth_year: None,
        death_year: None,
        image: None,
        short_description: None,
        era_id: None,
        style: Some(style),
    }
}
