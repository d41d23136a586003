//! CLI output formatting.
//!
//! Each command has a `format_*` function returning `Vec<String>` for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.
//!
//! Display is information-first: entities lead with a positional index and
//! their semantic identity (the catchy title), with file paths as trailing
//! context.
//!
//! ```text
//! Browse → index.html
//! Library → library.html
//! Articles
//! 001 長文もおまかせ、LLMの新常識 → articles/llm-context.html
//! 002 眠りの質は朝決まる → articles/deep-sleep.html
//! Generated 2 article pages
//! ```

use crate::catalog::{Article, Catalog, CatalogReport, LoadSource};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

// ============================================================================
// Catalog load
// ============================================================================

/// Lines describing a degraded catalog load. Empty when the live document
/// loaded cleanly.
pub fn format_load_notice(source: &LoadSource) -> Vec<String> {
    match source {
        LoadSource::Live => Vec::new(),
        LoadSource::Fallback(err) => vec![
            "Catalog unavailable — using fallback data (0 articles)".to_string(),
            format!("    Reason: {err}"),
        ],
    }
}

pub fn format_catalog_summary(catalog: &Catalog) -> String {
    format!(
        "{} articles, {} categories, {} moods",
        catalog.articles().len(),
        catalog.standard_categories().len() + catalog.thematic_categories().len(),
        catalog.moods().len(),
    )
}

pub fn print_load_notice(source: &LoadSource) {
    for line in format_load_notice(source) {
        println!("{line}");
    }
}

// ============================================================================
// Render
// ============================================================================

/// Format the render command's page inventory.
pub fn format_render_output(articles: &[&Article]) -> Vec<String> {
    let mut lines = vec![
        "Browse → index.html".to_string(),
        "Library → library.html".to_string(),
    ];

    if !articles.is_empty() {
        lines.push("Articles".to_string());
        for (i, article) in articles.iter().enumerate() {
            lines.push(format!(
                "{} {} → articles/{}.html",
                format_index(i + 1),
                article.catchy_title,
                article.id
            ));
        }
    }

    lines.push(format!("Generated {} article pages", articles.len()));
    lines
}

pub fn print_render_output(articles: &[&Article]) {
    for line in format_render_output(articles) {
        println!("{line}");
    }
}

// ============================================================================
// Check
// ============================================================================

/// Format the integrity report. A clean catalog is a single line.
pub fn format_check_output(report: &CatalogReport) -> Vec<String> {
    if report.is_clean() {
        return vec!["Catalog check: clean".to_string()];
    }

    let mut lines = Vec::new();

    if !report.duplicate_ids.is_empty() {
        lines.push("Duplicate article ids".to_string());
        for id in &report.duplicate_ids {
            lines.push(format!("    {id}"));
        }
    }
    if !report.dangling_related.is_empty() {
        lines.push("Dangling related references".to_string());
        for (article, missing) in &report.dangling_related {
            lines.push(format!("    {article} → {missing}"));
        }
    }
    if !report.unknown_categories.is_empty() {
        lines.push("Unknown categories".to_string());
        for (article, category) in &report.unknown_categories {
            lines.push(format!("    {article}: {category}"));
        }
    }
    if !report.unknown_moods.is_empty() {
        lines.push("Unknown moods".to_string());
        for (article, mood) in &report.unknown_moods {
            lines.push(format!("    {article}: {mood}"));
        }
    }

    lines.push(format!(
        "Catalog check: {} errors, {} warnings",
        report.duplicate_ids.len(),
        report.dangling_related.len()
            + report.unknown_categories.len()
            + report.unknown_moods.len(),
    ));
    lines
}

pub fn print_check_output(report: &CatalogReport) {
    for line in format_check_output(report) {
        println!("{line}");
    }
}
