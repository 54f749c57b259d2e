// Colored terminal output for fingerprints and match reports.
//
// This module handles all terminal-specific formatting: colors, bars,
// tables. The main.rs display code delegates here.

use colored::Colorize;

use crate::db::models::Author;
use crate::dna::matcher::MatchOutcome;
use crate::dna::vector::StyleVector;

/// Display a style vector as a labeled bar chart.
///
/// This is what the user sees after `quill analyze` — it should make the
/// shape of the fingerprint readable at a glance.
pub fn display_style_vector(vector: &StyleVector) {
    println!("\n{}", "=== Your Style Fingerprint ===".bold());
    println!();

    let dims = [
        ("Vocabulary", vector.vocabulary),
        ("Complexity", vector.complexity),
        ("Pacing", vector.pacing),
        ("Abstraction", vector.abstraction),
    ];

    let bar_width: usize = 20;

    for (label, value) in dims {
        let filled = (value / 100.0 * bar_width as f64).round() as usize;
        let empty = bar_width.saturating_sub(filled);
        let bar = format!("[{}{}]", "=".repeat(filled), " ".repeat(empty));

        let colored_bar = if value >= 70.0 {
            bar.bright_green()
        } else if value >= 30.0 {
            bar.bright_yellow()
        } else {
            bar.bright_blue()
        };

        println!("  {:<12} {} {:>3}", label.bold(), colored_bar, value);
    }
}

/// Display a full match report: best match, per-era breakdown, runners-up.
pub fn display_match(outcome: &MatchOutcome) {
    display_style_vector(&outcome.query);
    println!();

    match &outcome.best {
        Some(best) => {
            let years = lifespan(&best.author);
            println!(
                "{} {} {}",
                "Closest match:".bold(),
                best.author.name.bold(),
                years.dimmed()
            );
            println!("  Similarity: {}", colorize_score(best.score));
            if let Some(desc) = &best.author.short_description {
                println!("  {}", desc.dimmed());
            }
        }
        None => {
            println!("{}", "No match found — the catalog is empty.".yellow());
            return;
        }
    }

    if !outcome.era_matches.is_empty() {
        println!("\n{}", "--- Best match per era ---".bold());
        for m in &outcome.era_matches {
            println!(
                "  {:<24} {:<28} {}",
                m.era.name,
                m.best.author.name,
                colorize_score(m.best.score)
            );
        }
    }

    if outcome.debug.len() > 1 {
        println!("\n{}", "--- Runners-up ---".dimmed());
        for (i, entry) in outcome.debug.iter().enumerate() {
            println!(
                "  {:>2}. {:<28} {}",
                i + 1,
                entry.name,
                colorize_score(entry.score)
            );
        }
    }
    println!();
}

/// Display the author catalog as a table with style columns.
pub fn display_authors(authors: &[Author]) {
    if authors.is_empty() {
        println!("Catalog is empty. Run `quill seed <file>` first.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Author Catalog ({} authors) ===", authors.len()).bold()
    );
    println!();
    println!(
        "  {:<28} {:>11} {:>6} {:>6} {:>6} {:>6}  {}",
        "Name".dimmed(),
        "Years".dimmed(),
        "Vocab".dimmed(),
        "Cmplx".dimmed(),
        "Pace".dimmed(),
        "Abstr".dimmed(),
        "About".dimmed(),
    );
    println!("  {}", "-".repeat(96).dimmed());

    for author in authors {
        let about = author
            .short_description
            .as_deref()
            .map(|d| super::truncate_chars(d, 28))
            .unwrap_or_default();

        match author.style {
            Some(style) => println!(
                "  {:<28} {:>11} {:>6} {:>6} {:>6} {:>6}  {}",
                author.name,
                lifespan(author),
                style.vocabulary,
                style.complexity,
                style.pacing,
                style.abstraction,
                about.dimmed(),
            ),
            None => println!(
                "  {:<28} {:>11} {:>27}  {}",
                author.name,
                lifespan(author),
                "no fingerprint".dimmed(),
                about.dimmed(),
            ),
        }
    }
    println!();
}

/// Format an author's lifespan like "(1775-1817)", degrading when unknown.
fn lifespan(author: &Author) -> String {
    match (author.birth_year, author.death_year) {
        (Some(b), Some(d)) => format!("({b}-{d})"),
        (Some(b), None) => format!("({b}-)"),
        _ => String::new(),
    }
}

/// Colorize a 0-100 similarity score (or the -1 no-match sentinel).
fn colorize_score(score: i64) -> colored::ColoredString {
    let text = format!("{score}/100");
    if score >= 80 {
        text.bright_green()
    } else if score >= 50 {
        text.bright_yellow()
    } else if score >= 0 {
        text.bright_blue()
    } else {
        "no match".dimmed()
    }
}
