//! Catalog loading and lookups.
//!
//! The catalog is a single JSON document holding every article the app can
//! show, plus the category and mood pools used to filter them:
//!
//! ```text
//! {
//!   "articles":   [ ... ],
//!   "categories": { "standard": [ ... ], "thematic": [ ... ] },
//!   "moods":      [ ... ]
//! }
//! ```
//!
//! Missing top-level keys deserialize as empty collections, so a partial
//! document is still a valid catalog.
//!
//! ## Degraded loading
//!
//! [`Catalog::load`] never fails. If the file is missing, unreadable, or
//! malformed, it returns the hardcoded fallback catalog — the full category
//! and mood pools with zero articles — together with a [`LoadSource`] that
//! carries the underlying error. The interface stays usable with an empty
//! grid instead of dying on a bad deploy.
//!
//! ## The synthetic "all" entry
//!
//! Category and mood pools are stored without an "all" entry.
//! [`Catalog::all_categories`] and [`Catalog::all_moods`] prepend one at
//! query time, so it can never leak into an article's own tag sets.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Category ids that mark an article as AI-related, and that get the
/// emphasized tab treatment. One table for both so the classification
/// stays auditable in a single place.
pub const AI_CATEGORIES: &[&str] = &["ai-technology", "applied-ai"];

/// Substrings that mark a tag as AI-related (case-insensitive match).
pub const AI_TAG_MARKERS: &[&str] = &["ai", "chatgpt", "llm"];

/// Selector id meaning "no filtering on this axis".
pub const ALL_ID: &str = "all";

// ============================================================================
// Data model
// ============================================================================

/// One article in the catalog. Field names mirror the authored JSON
/// (camelCase); every field is optional in the document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Article {
    pub id: String,
    pub catchy_title: String,
    pub original_title: String,
    pub summary: Summary,
    pub tags: Vec<String>,
    pub categories: ArticleCategories,
    pub mood: Vec<String>,
    /// Reading-time estimate in seconds.
    pub reading_time: u32,
    pub thumbnail: Thumbnail,
    pub metadata: SourceMeta,
    /// Ordered ids of related articles. Entries that don't resolve are
    /// dropped at lookup time, not treated as errors.
    pub related_articles: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Summary {
    pub one_line: String,
    pub full_summary: String,
}

/// An article's two category sets: one standard (primary taxonomy) id set
/// and any number of thematic (cross-cutting) ids.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ArticleCategories {
    pub standard: Vec<String>,
    pub thematic: Vec<String>,
}

/// Thumbnail descriptor: either an image URL (`kind == "image"`) or a
/// color palette from which a gradient is picked.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Thumbnail {
    #[serde(rename = "type")]
    pub kind: String,
    pub url: Option<String>,
    pub colors: Vec<String>,
}

impl Thumbnail {
    /// True when the thumbnail should render as an image rather than a
    /// gradient.
    pub fn is_image(&self) -> bool {
        self.kind == "image" && self.url.is_some()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SourceMeta {
    pub source: String,
    pub url: Option<String>,
    pub published: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Category {
    pub id: String,
    /// Japanese display name.
    pub name: String,
    pub name_en: String,
    pub icon: String,
}

impl Default for Category {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            name_en: String::new(),
            icon: "📄".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Mood {
    pub id: String,
    pub name: String,
    pub icon: String,
}

/// On-disk document shape. Converted into a [`Catalog`] after parsing.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CatalogDoc {
    articles: Vec<Article>,
    categories: CategoryPools,
    moods: Vec<Mood>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CategoryPools {
    standard: Vec<Category>,
    thematic: Vec<Category>,
}

// ============================================================================
// Catalog
// ============================================================================

/// Where a loaded catalog came from.
#[derive(Debug)]
pub enum LoadSource {
    /// Parsed from the live document.
    Live,
    /// The live document could not be used; the fallback catalog is in
    /// effect and the grid is empty.
    Fallback(CatalogError),
}

impl LoadSource {
    pub fn is_live(&self) -> bool {
        matches!(self, LoadSource::Live)
    }
}

/// The full article/category/mood catalog. Immutable after load.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    articles: Vec<Article>,
    standard: Vec<Category>,
    thematic: Vec<Category>,
    moods: Vec<Mood>,
}

impl Catalog {
    /// Load a catalog, degrading to the fallback on any failure.
    pub fn load(path: &Path) -> (Catalog, LoadSource) {
        match Self::read(path) {
            Ok(catalog) => (catalog, LoadSource::Live),
            Err(err) => (Self::fallback(), LoadSource::Fallback(err)),
        }
    }

    /// Strict load. Used by `check`, where a broken document should be an
    /// error rather than silently becoming the fallback.
    pub fn read(path: &Path) -> Result<Catalog, CatalogError> {
        let content = fs::read_to_string(path)?;
        let doc: CatalogDoc = serde_json::from_str(&content)?;
        Ok(Self::from_parts(
            doc.articles,
            doc.categories.standard,
            doc.categories.thematic,
            doc.moods,
        ))
    }

    pub fn from_parts(
        articles: Vec<Article>,
        standard: Vec<Category>,
        thematic: Vec<Category>,
        moods: Vec<Mood>,
    ) -> Catalog {
        Catalog {
            articles,
            standard,
            thematic,
            moods,
        }
    }

    /// The minimal catalog substituted when the live document can't be
    /// loaded: full category and mood pools, zero articles.
    pub fn fallback() -> Catalog {
        let cat = |id: &str, name: &str, name_en: &str, icon: &str| Category {
            id: id.to_string(),
            name: name.to_string(),
            name_en: name_en.to_string(),
            icon: icon.to_string(),
        };
        let mood = |id: &str, name: &str, icon: &str| Mood {
            id: id.to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
        };

        Catalog {
            articles: Vec::new(),
            standard: vec![
                cat("nature-science", "自然科学", "Nature & Universe", "🌌"),
                cat("ai-technology", "AI・テクノロジー", "AI & Technology", "🤖"),
                cat("human-mind", "人間科学・心理", "Human & Mind", "🧠"),
                cat("society-business", "社会科学・ビジネス", "Society & Business", "📊"),
                cat("health-medical", "医歯薬学・ヘルスケア", "Health & Medical", "🏥"),
            ],
            thematic: vec![
                cat("life-hacks", "ライフハック", "Life Hacks", "✨"),
                cat("applied-ai", "AI × 〇〇", "Applied AI", "🔮"),
                cat("future-trends", "未来予測", "Future Trends", "🚀"),
                cat("thinking-models", "思考法", "Thinking Models", "💡"),
                cat("sustainability", "サステナビリティ", "Sustainability", "🌱"),
            ],
            moods: vec![
                mood("motivating", "元気が欲しい", "💪"),
                mood("practical", "すぐ使える知識", "🛠️"),
                mood("thought-provoking", "じっくり考えたい", "🤔"),
                mood("inspiring", "ワクワクしたい", "✨"),
            ],
        }
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn article_by_id(&self, id: &str) -> Option<&Article> {
        self.articles.iter().find(|a| a.id == id)
    }

    /// All categories with the synthetic "all" entry prepended, standard
    /// pool before thematic.
    pub fn all_categories(&self) -> Vec<Category> {
        let mut out = Vec::with_capacity(1 + self.standard.len() + self.thematic.len());
        out.push(synthetic_all_category());
        out.extend(self.standard.iter().cloned());
        out.extend(self.thematic.iter().cloned());
        out
    }

    pub fn standard_categories(&self) -> &[Category] {
        &self.standard
    }

    pub fn thematic_categories(&self) -> &[Category] {
        &self.thematic
    }

    pub fn moods(&self) -> &[Mood] {
        &self.moods
    }

    /// All moods with the synthetic "all" entry prepended.
    pub fn all_moods(&self) -> Vec<Mood> {
        let mut out = Vec::with_capacity(1 + self.moods.len());
        out.push(synthetic_all_mood());
        out.extend(self.moods.iter().cloned());
        out
    }

    /// Look up a category in either pool. The synthetic "all" entry is not
    /// stored, so it is not found here.
    pub fn category_by_id(&self, id: &str) -> Option<&Category> {
        self.standard
            .iter()
            .chain(self.thematic.iter())
            .find(|c| c.id == id)
    }

    pub fn mood_by_id(&self, id: &str) -> Option<&Mood> {
        self.moods.iter().find(|m| m.id == id)
    }

    /// Up to `limit` related articles for `id`, in stored order. The limit
    /// applies to the stored reference list; ids that don't resolve are
    /// then dropped silently, so the result may be shorter.
    pub fn related_articles(&self, id: &str, limit: usize) -> Vec<&Article> {
        let Some(article) = self.article_by_id(id) else {
            return Vec::new();
        };
        article
            .related_articles
            .iter()
            .take(limit)
            .filter_map(|rid| self.article_by_id(rid))
            .collect()
    }
}

fn synthetic_all_category() -> Category {
    Category {
        id: ALL_ID.to_string(),
        name: "すべて".to_string(),
        name_en: "All".to_string(),
        icon: "📚".to_string(),
    }
}

fn synthetic_all_mood() -> Mood {
    Mood {
        id: ALL_ID.to_string(),
        name: "すべて".to_string(),
        icon: "🌟".to_string(),
    }
}

// ============================================================================
// AI classification
// ============================================================================

/// True if the article carries an AI category or an AI-marked tag.
///
/// Used for presentational highlighting only — it never affects filtering.
pub fn is_ai_related(article: &Article) -> bool {
    let by_category = article
        .categories
        .standard
        .iter()
        .chain(article.categories.thematic.iter())
        .any(|c| AI_CATEGORIES.contains(&c.as_str()));

    by_category || article.tags.iter().any(|t| tag_has_ai_marker(t))
}

/// True if the tag case-insensitively contains one of [`AI_TAG_MARKERS`].
pub fn tag_has_ai_marker(tag: &str) -> bool {
    let folded = tag.to_lowercase();
    AI_TAG_MARKERS.iter().any(|m| folded.contains(m))
}

// ============================================================================
// Integrity check
// ============================================================================

/// Report from [`Catalog::check`]. Duplicate ids are hard errors; the rest
/// are warnings (lookups already tolerate them by dropping the reference).
#[derive(Debug, Default)]
pub struct CatalogReport {
    pub duplicate_ids: Vec<String>,
    /// `(article id, dangling related id)` pairs.
    pub dangling_related: Vec<(String, String)>,
    /// `(article id, unknown category id)` pairs.
    pub unknown_categories: Vec<(String, String)>,
    /// `(article id, unknown mood id)` pairs.
    pub unknown_moods: Vec<(String, String)>,
}

impl CatalogReport {
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }

    pub fn has_errors(&self) -> bool {
        !self.duplicate_ids.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.dangling_related.is_empty()
            || !self.unknown_categories.is_empty()
            || !self.unknown_moods.is_empty()
    }
}

impl Catalog {
    /// Validate catalog cross-references without failing the app: the
    /// runtime drops broken references silently, `check` makes them
    /// visible to whoever authors the document.
    pub fn check(&self) -> CatalogReport {
        let mut report = CatalogReport::default();

        let mut seen = HashSet::new();
        for article in &self.articles {
            if !seen.insert(article.id.as_str()) && !report.duplicate_ids.contains(&article.id) {
                report.duplicate_ids.push(article.id.clone());
            }
        }

        let known_moods: HashSet<&str> = self.moods.iter().map(|m| m.id.as_str()).collect();
        for article in &self.articles {
            for rid in &article.related_articles {
                if self.article_by_id(rid).is_none() {
                    report
                        .dangling_related
                        .push((article.id.clone(), rid.clone()));
                }
            }
            for cid in article
                .categories
                .standard
                .iter()
                .chain(article.categories.thematic.iter())
            {
                if self.category_by_id(cid).is_none() {
                    report
                        .unknown_categories
                        .push((article.id.clone(), cid.clone()));
                }
            }
            for mid in &article.mood {
                if !known_moods.contains(mid.as_str()) {
                    report.unknown_moods.push((article.id.clone(), mid.clone()));
                }
            }
        }

        report
    }
}
