//! # Paper Insight
//!
//! Browsing engine for a research-paper reading app. A static JSON catalog
//! is the data source: articles carry categories, moods, and tags; the
//! engine filters them, builds the interface fragments, and remembers what
//! the reader bookmarked and liked.
//!
//! # Architecture: Four Cooperating Components
//!
//! ```text
//! catalog     →  filters      →  components   →  app
//! (load/hold)    (selection)     (fragments)     (state + events)
//! ```
//!
//! - [`catalog`] loads and holds the article/category/mood catalog and
//!   answers lookups. Loading degrades to a fallback catalog instead of
//!   failing, so the interface survives a broken deploy with an empty grid.
//! - [`filters`] owns the current selection (category, mood, query) and
//!   evaluates it as a pure, order-preserving conjunction over articles.
//! - [`components`] turns entities into HTML fragments with maud —
//!   compile-time templates, auto-escaped interpolation.
//! - [`app`] wires it together: it owns preferences and theme, routes
//!   control activations through a dispatch table, and renders into an
//!   in-memory surface a host shell applies to its mount points.
//!
//! The browser shell itself — real DOM, real storage — is a collaborator,
//! not part of this crate. [`prefs`] abstracts the flat key-value store
//! (file-backed or in-memory), and [`pages`] assembles full documents so
//! the `paper-insight` binary can render the whole interface as a static
//! preview site.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`catalog`] | Catalog model, degraded loading, lookups, AI classification, integrity check |
//! | [`filters`] | Filter state, stable conjunction filtering, section titles, search debounce |
//! | [`components`] | Card / tab / pill / skeleton fragment builders |
//! | [`app`] | Controller: startup sequence, dispatch table, toggles, surface updates |
//! | [`prefs`] | Bookmark/like sets and theme over a flat key-value store |
//! | [`pages`] | Full-page assembly for the static preview site |
//! | [`config`] | Sparse `config.toml` loading and validation |
//! | [`output`] | CLI output formatting — pure `format_*`, thin `print_*` |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! Fragments are generated with [Maud](https://maud.lambda.xyz/): malformed
//! HTML is a build error, template variables are Rust expressions, and all
//! interpolation is auto-escaped — catalog text can never inject markup.
//!
//! ## Explicit Objects Over Globals
//!
//! The catalog, filter state, and controller are plain structs constructed
//! once at startup and passed by reference. Single-instance semantics
//! without process-wide mutable state.
//!
//! ## Surface-as-Data
//!
//! The controller never touches a DOM. It renders into a
//! [`Surface`](app::Surface) — region strings, visibility flags, toasts,
//! control patches, navigation requests — which a host shell (or the
//! static renderer) applies. Every interactive behavior is testable by
//! reading the surface back.
//!
//! ## Tolerant Edges
//!
//! Failures at the boundaries never crash the interface: a broken catalog
//! becomes the fallback catalog, a corrupt preference key reads as empty,
//! a failed preference write keeps the in-memory state and records a
//! notice. Broken cross-references (related articles, category lookups)
//! resolve to nothing and are dropped from lists.

pub mod app;
pub mod catalog;
pub mod components;
pub mod config;
pub mod filters;
pub mod output;
pub mod pages;
pub mod prefs;

#[cfg(test)]
pub(crate) mod test_helpers;
