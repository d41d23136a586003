//! Application controller.
//!
//! [`App`] owns the per-user state (preferences, theme, filter selection)
//! and turns control activations into surface updates. It is the only
//! writer of preference state, the filter engine is the only writer of
//! filter state, and the catalog is immutable after load — every mutation
//! happens synchronously in response to a single event, so there is no
//! locking anywhere.
//!
//! ## The surface
//!
//! The controller does not touch a real DOM. It renders fragments into a
//! [`Surface`]: named region contents plus the small amount of out-of-band
//! state a host shell needs to apply (visibility flags, toast queue,
//! in-place control patches, navigation requests). The host owns the
//! actual mount points; the field-to-mount-point mapping is part of the
//! surface contract.
//!
//! ## Dispatch
//!
//! Interactive containers use one delegated listener each; the host
//! resolves the activated element to a [`ControlTarget`] (a role plus an
//! optional entity id) and hands it to [`App::dispatch`]. Which element
//! was activated and what to do about it stay decoupled.

use crate::catalog::{self, Article, Catalog, LoadSource};
use crate::components::{self, CardContext};
use crate::config::AppConfig;
use crate::filters::{Debouncer, FilterState};
use crate::prefs::{self, KvStore, Preferences, Theme};
use std::time::{Duration, Instant};

pub const TOAST_BOOKMARK_ADDED: &str = "あとで読むに保存しました";
pub const TOAST_BOOKMARK_REMOVED: &str = "保存済みから削除しました";
pub const TOAST_LIKED: &str = "いいねしました！";

/// Logical control kinds the delegated listeners can resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlRole {
    CategoryTab,
    MoodPill,
    Bookmark,
    Like,
    /// The card itself, outside its action controls.
    Card,
    ThemeToggle,
    /// Bottom-navigation control for the library view.
    LibraryNav,
    /// Bottom-navigation control that focuses the search field.
    SearchNav,
}

/// An activated control: its role plus the entity id carried on the
/// element, when the role has one.
#[derive(Debug, Clone)]
pub struct ControlTarget {
    pub role: ControlRole,
    pub id: Option<String>,
}

impl ControlTarget {
    pub fn new(role: ControlRole, id: impl Into<String>) -> Self {
        Self {
            role,
            id: Some(id.into()),
        }
    }

    pub fn bare(role: ControlRole) -> Self {
        Self { role, id: None }
    }
}

/// An in-place update to a single toggle control, applied without
/// re-rendering its region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlPatch {
    pub role: ControlRole,
    pub article_id: String,
    pub active: bool,
    pub icon: &'static str,
}

/// Render target the host applies to its mount points.
///
/// | Field           | Mount point id   | Content |
/// |-----------------|------------------|---------|
/// | `category_tabs` | `categoryTabs`   | HTML    |
/// | `mood_pills`    | `moodFilters`    | HTML    |
/// | `article_grid`  | `articlesGrid`   | HTML    |
/// | `section_title` | `sectionTitle`   | text    |
/// | `article_count` | `articleCount`   | text    |
/// | `toasts`        | `toast`          | text, transient |
/// | `grid_visible` / `empty_visible` | `articlesGrid` / `emptyState` | display flags |
#[derive(Debug, Default)]
pub struct Surface {
    pub category_tabs: String,
    pub mood_pills: String,
    pub article_grid: String,
    pub section_title: String,
    pub article_count: String,
    pub grid_visible: bool,
    pub empty_visible: bool,
    pub theme: Theme,
    pub toasts: Vec<String>,
    pub patches: Vec<ControlPatch>,
    /// Pending navigation request (a relative URL), set by card activation
    /// and the library control.
    pub navigate: Option<String>,
    /// Set when the search control asks the host to focus the input.
    pub search_focus: bool,
}

/// The application controller. One instance per session.
pub struct App<S: KvStore> {
    catalog: Catalog,
    load_source: LoadSource,
    filters: FilterState,
    prefs: Preferences,
    theme: Theme,
    store: S,
    surface: Surface,
    debouncer: Debouncer,
    pending_query: Option<String>,
    max_tags: usize,
    /// Non-fatal conditions (failed preference writes) for the diagnostic
    /// output path.
    pub notices: Vec<String>,
}

impl<S: KvStore> App<S> {
    /// Startup sequence: load preferences, resolve the theme, reset the
    /// filter selection, then render every region once.
    pub fn start(
        catalog: Catalog,
        load_source: LoadSource,
        store: S,
        config: &AppConfig,
        system_dark: bool,
    ) -> App<S> {
        let prefs = Preferences::load(&store);
        let theme = Theme::resolve(prefs::load_theme(&store), system_dark);

        let mut app = App {
            catalog,
            load_source,
            filters: FilterState::new(),
            prefs,
            theme,
            store,
            surface: Surface {
                theme,
                ..Surface::default()
            },
            debouncer: Debouncer::new(Duration::from_millis(config.search.debounce_ms)),
            pending_query: None,
            max_tags: config.cards.max_tags,
            notices: Vec::new(),
        };

        app.render_category_tabs();
        app.render_mood_pills();
        app.render_grid();
        app
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn load_source(&self) -> &LoadSource {
        &self.load_source
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn preferences(&self) -> &Preferences {
        &self.prefs
    }

    /// Bookmarked articles in catalog order, for the library view.
    pub fn bookmarked_articles(&self) -> Vec<&Article> {
        self.catalog
            .articles()
            .iter()
            .filter(|a| self.prefs.bookmarks.contains(&a.id))
            .collect()
    }

    /// Take the pending navigation request, if any.
    pub fn take_navigation(&mut self) -> Option<String> {
        self.surface.navigate.take()
    }

    pub fn drain_toasts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.surface.toasts)
    }

    // ------------------------------------------------------------------
    // Dispatch
    // ------------------------------------------------------------------

    /// Route an activated control to its handler. Roles carrying an id do
    /// nothing when the id is missing — a click that delegation could not
    /// resolve is not an error.
    pub fn dispatch(&mut self, target: ControlTarget) {
        match target.role {
            ControlRole::CategoryTab => {
                if let Some(id) = target.id {
                    self.select_category(&id);
                }
            }
            ControlRole::MoodPill => {
                if let Some(id) = target.id {
                    self.select_mood(&id);
                }
            }
            ControlRole::Bookmark => {
                if let Some(id) = target.id {
                    self.toggle_bookmark(&id);
                }
            }
            ControlRole::Like => {
                if let Some(id) = target.id {
                    self.toggle_like(&id);
                }
            }
            ControlRole::Card => {
                if let Some(id) = target.id {
                    self.surface.navigate = Some(format!("article.html?id={id}"));
                }
            }
            ControlRole::ThemeToggle => self.toggle_theme(),
            ControlRole::LibraryNav => {
                self.surface.navigate = Some("library.html".to_string());
            }
            ControlRole::SearchNav => {
                self.surface.search_focus = true;
            }
        }
    }

    pub fn select_category(&mut self, id: &str) {
        self.filters.set_category(id);
        self.render_category_tabs();
        self.render_grid();
    }

    pub fn select_mood(&mut self, id: &str) {
        self.filters.set_mood(id);
        self.render_mood_pills();
        self.render_grid();
    }

    /// Buffer a keystroke; the query applies on [`App::tick`] once the
    /// quiet period passes.
    pub fn search_input(&mut self, text: &str, now: Instant) {
        self.pending_query = Some(text.to_string());
        self.debouncer.input(now);
    }

    /// Apply a pending search query if its quiet period has elapsed.
    /// Returns true when the grid was re-rendered.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.debouncer.due(now) {
            return false;
        }
        let Some(query) = self.pending_query.take() else {
            return false;
        };
        self.filters.set_search_query(&query);
        self.render_grid();
        true
    }

    // ------------------------------------------------------------------
    // Toggle handlers
    // ------------------------------------------------------------------

    /// Bookmark state may change the library view, so the whole grid
    /// re-renders. Toasts fire on add and remove.
    pub fn toggle_bookmark(&mut self, id: &str) {
        let added = self.prefs.toggle_bookmark(id);
        self.surface.toasts.push(
            if added {
                TOAST_BOOKMARK_ADDED
            } else {
                TOAST_BOOKMARK_REMOVED
            }
            .to_string(),
        );
        self.persist_prefs();
        self.render_grid();
    }

    /// Likes only affect the one control, so the grid is left alone and a
    /// patch is emitted instead. Toast on add only.
    pub fn toggle_like(&mut self, id: &str) {
        let added = self.prefs.toggle_like(id);
        if added {
            self.surface.toasts.push(TOAST_LIKED.to_string());
        }
        self.surface.patches.push(ControlPatch {
            role: ControlRole::Like,
            article_id: id.to_string(),
            active: added,
            icon: components::like_icon(added),
        });
        self.persist_prefs();
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.surface.theme = self.theme;
        if let Err(err) = prefs::save_theme(&mut self.store, self.theme) {
            self.notices.push(format!("theme save failed: {err}"));
        }
    }

    fn persist_prefs(&mut self) {
        // In-memory state is already updated; a failed write only loses
        // durability, not the session.
        if let Err(err) = self.prefs.save(&mut self.store) {
            self.notices.push(format!("preference write failed: {err}"));
        }
    }

    // ------------------------------------------------------------------
    // Render passes
    // ------------------------------------------------------------------

    fn render_category_tabs(&mut self) {
        let mut html = String::new();
        for category in self.catalog.all_categories() {
            let active = category.id == self.filters.category();
            html.push_str(&components::render_category_tab(&category, active).into_string());
        }
        self.surface.category_tabs = html;
    }

    fn render_mood_pills(&mut self) {
        let mut html = String::new();
        for mood in self.catalog.all_moods() {
            let active = mood.id == self.filters.mood();
            html.push_str(&components::render_mood_pill(&mood, active).into_string());
        }
        self.surface.mood_pills = html;
    }

    fn render_grid(&mut self) {
        let selected = self.filters.filter(self.catalog.articles());

        self.surface.section_title = self.filters.section_title(&self.catalog);
        self.surface.article_count = format!("{}件", selected.len());
        self.surface.grid_visible = !selected.is_empty();
        self.surface.empty_visible = selected.is_empty();

        let mut html = String::new();
        for article in &selected {
            let ctx = CardContext {
                is_ai: catalog::is_ai_related(article),
                bookmarked: self.prefs.bookmarks.contains(&article.id),
                liked: self.prefs.likes.contains(&article.id),
                max_tags: self.max_tags,
            };
            html.push_str(&components::render_article_card(article, &ctx).into_string());
        }
        self.surface.article_grid = html;
    }
}
