//! Filter state and article selection.
//!
//! One [`FilterState`] instance holds the three active selectors — category,
//! mood, search query — and evaluates them as a pure conjunction over a
//! slice of articles. Filtering never re-sorts: the output preserves the
//! relative order of the input, so catalog order is display order.
//!
//! Search input is buffered through a [`Debouncer`] rather than applied per
//! keystroke. The debouncer is a deadline policy over caller-supplied
//! instants, which keeps it inert for a query stream that never pauses and
//! keeps tests free of real sleeps.

use crate::catalog::{ALL_ID, Article, Catalog};
use std::time::{Duration, Instant};

/// The current filter selection. Owned by the controller, mutated exactly
/// one field per user interaction, read synchronously by every render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    category: String,
    mood: String,
    query: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterState {
    /// All/all/empty — the state every session starts from.
    pub fn new() -> Self {
        Self {
            category: ALL_ID.to_string(),
            mood: ALL_ID.to_string(),
            query: String::new(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn set_category(&mut self, id: &str) {
        self.category = id.to_string();
    }

    pub fn set_mood(&mut self, id: &str) {
        self.mood = id.to_string();
    }

    /// Queries are case-folded and trimmed at write time, so every read
    /// sees the normalized form.
    pub fn set_search_query(&mut self, query: &str) {
        self.query = query.trim().to_lowercase();
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn mood(&self) -> &str {
        &self.mood
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Select the articles matching all three predicates, preserving input
    /// order.
    pub fn filter<'a>(&self, articles: &'a [Article]) -> Vec<&'a Article> {
        articles.iter().filter(|a| self.matches(a)).collect()
    }

    /// Conjunction of the category, mood, and search predicates.
    pub fn matches(&self, article: &Article) -> bool {
        self.matches_category(article) && self.matches_mood(article) && self.matches_search(article)
    }

    /// "all", or membership in either of the article's category sets.
    pub fn matches_category(&self, article: &Article) -> bool {
        self.category == ALL_ID
            || article.categories.standard.iter().any(|c| *c == self.category)
            || article.categories.thematic.iter().any(|c| *c == self.category)
    }

    pub fn matches_mood(&self, article: &Article) -> bool {
        self.mood == ALL_ID || article.mood.iter().any(|m| *m == self.mood)
    }

    /// Empty query, or substring match against the case-folded join of
    /// titles, summaries, and tags.
    pub fn matches_search(&self, article: &Article) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let mut haystack = vec![
            article.catchy_title.as_str(),
            article.original_title.as_str(),
            article.summary.one_line.as_str(),
            article.summary.full_summary.as_str(),
        ];
        haystack.extend(article.tags.iter().map(String::as_str));
        haystack.join(" ").to_lowercase().contains(&self.query)
    }

    /// Heading for the current selection. Exactly one branch fires, in
    /// priority order: query, then category, then mood, then the generic
    /// label. An unknown category or mood id falls through to the next
    /// branch.
    pub fn section_title(&self, catalog: &Catalog) -> String {
        if !self.query.is_empty() {
            return format!("「{}」の検索結果", self.query);
        }
        if self.category != ALL_ID
            && let Some(category) = catalog.category_by_id(&self.category)
        {
            return category.name.clone();
        }
        if self.mood != ALL_ID
            && let Some(mood) = catalog.mood_by_id(&self.mood)
        {
            return format!("{} {}", mood.icon, mood.name);
        }
        "すべての記事".to_string()
    }
}

// ============================================================================
// Search debounce
// ============================================================================

/// Restartable quiet-period timer for search input.
///
/// Each [`Debouncer::input`] call pushes the deadline out by the full delay;
/// [`Debouncer::due`] fires at most once per armed deadline. A caller that
/// keeps typing keeps pushing the deadline, so filtering only happens after
/// the stream goes quiet.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Record a keystroke at `now`, restarting the quiet-period window.
    pub fn input(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// True once the quiet period has elapsed. Consumes the deadline.
    pub fn due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn pending(&self) -> bool {
        self.deadline.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{article, sample_catalog};

    fn scenario_article() -> Article {
        let mut a = article("llm-context");
        a.catchy_title = "長文もおまかせ".to_string();
        a.tags = vec!["LLM".to_string()];
        a.categories.standard = vec!["ai-technology".to_string()];
        a.mood = vec!["practical".to_string()];
        a
    }

    // =========================================================================
    // Predicates and conjunction
    // =========================================================================

    #[test]
    fn default_state_matches_everything() {
        let state = FilterState::new();
        let a = scenario_article();
        assert!(state.matches(&a));
        assert_eq!(state.category(), "all");
        assert_eq!(state.mood(), "all");
        assert_eq!(state.query(), "");
    }

    #[test]
    fn category_filter_matches_standard_set() {
        let mut state = FilterState::new();
        state.set_category("ai-technology");
        assert!(state.matches(&scenario_article()));
    }

    #[test]
    fn category_filter_matches_thematic_set() {
        let mut state = FilterState::new();
        state.set_category("life-hacks");
        let mut a = scenario_article();
        a.categories.thematic = vec!["life-hacks".to_string()];
        assert!(state.matches(&a));
    }

    #[test]
    fn mood_filter_excludes_non_member() {
        let mut state = FilterState::new();
        state.set_mood("motivating");
        assert!(!state.matches(&scenario_article()));
    }

    #[test]
    fn search_matches_tag_case_insensitively() {
        let mut state = FilterState::new();
        state.set_search_query("llm");
        assert!(state.matches(&scenario_article()));

        state.set_search_query("xyz");
        assert!(!state.matches(&scenario_article()));
    }

    #[test]
    fn search_query_is_folded_and_trimmed_at_write_time() {
        let mut state = FilterState::new();
        state.set_search_query("  LLM  ");
        assert_eq!(state.query(), "llm");
    }

    #[test]
    fn conjunction_law() {
        // filter([a]) is non-empty iff all three predicates hold independently
        let mut state = FilterState::new();
        state.set_category("ai-technology");
        state.set_mood("practical");
        state.set_search_query("llm");

        let a = scenario_article();
        let selected = !state.filter(std::slice::from_ref(&a)).is_empty();
        assert_eq!(
            selected,
            state.matches_category(&a) && state.matches_mood(&a) && state.matches_search(&a)
        );
        assert!(selected);

        state.set_mood("motivating");
        assert!(state.filter(std::slice::from_ref(&a)).is_empty());
        assert!(!state.matches_mood(&a));
    }

    #[test]
    fn filter_is_stable_and_idempotent() {
        let catalog = sample_catalog();
        let mut state = FilterState::new();
        state.set_search_query("の");

        let first = state.filter(catalog.articles());
        let second = state.filter(catalog.articles());
        let first_ids: Vec<_> = first.iter().map(|a| a.id.as_str()).collect();
        let second_ids: Vec<_> = second.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(first_ids, second_ids);

        // Output order is input order
        let input_order: Vec<_> = catalog
            .articles()
            .iter()
            .filter(|a| state.matches(a))
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(first_ids, input_order);

        // Every selected article still matches — re-filtering drops nothing
        assert!(first.iter().all(|a| state.matches(a)));
    }

    #[test]
    fn reset_restores_defaults() {
        let mut state = FilterState::new();
        state.set_category("ai-technology");
        state.set_mood("practical");
        state.set_search_query("llm");
        state.reset();
        assert_eq!(state, FilterState::new());
    }

    // =========================================================================
    // Section title precedence
    // =========================================================================

    #[test]
    fn title_prefers_query_over_everything() {
        let catalog = sample_catalog();
        let mut state = FilterState::new();
        state.set_category("ai-technology");
        state.set_mood("practical");
        state.set_search_query("LLM");
        assert_eq!(state.section_title(&catalog), "「llm」の検索結果");
    }

    #[test]
    fn title_uses_category_display_name() {
        let catalog = sample_catalog();
        let mut state = FilterState::new();
        state.set_category("ai-technology");
        state.set_mood("practical");
        assert_eq!(state.section_title(&catalog), "AI・テクノロジー");
    }

    #[test]
    fn title_uses_mood_icon_and_name() {
        let catalog = sample_catalog();
        let mut state = FilterState::new();
        state.set_mood("practical");
        assert_eq!(state.section_title(&catalog), "🛠️ すぐ使える知識");
    }

    #[test]
    fn title_defaults_to_generic_label() {
        let catalog = sample_catalog();
        assert_eq!(FilterState::new().section_title(&catalog), "すべての記事");
    }

    #[test]
    fn title_unknown_category_falls_through_to_mood() {
        let catalog = sample_catalog();
        let mut state = FilterState::new();
        state.set_category("no-such-category");
        state.set_mood("practical");
        assert_eq!(state.section_title(&catalog), "🛠️ すぐ使える知識");
    }

    // =========================================================================
    // Debounce
    // =========================================================================

    #[test]
    fn debouncer_fires_after_quiet_period() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(Duration::from_millis(300));
        d.input(t0);
        assert!(!d.due(t0 + Duration::from_millis(299)));
        assert!(d.due(t0 + Duration::from_millis(300)));
        // Deadline consumed — doesn't fire again
        assert!(!d.due(t0 + Duration::from_secs(10)));
    }

    #[test]
    fn each_keystroke_restarts_the_window() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(Duration::from_millis(300));
        d.input(t0);
        d.input(t0 + Duration::from_millis(200));
        // 300ms after the first keystroke, but only 100ms after the second
        assert!(!d.due(t0 + Duration::from_millis(300)));
        assert!(d.due(t0 + Duration::from_millis(500)));
    }

    #[test]
    fn unbroken_stream_never_fires() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(Duration::from_millis(300));
        for i in 0..50 {
            let now = t0 + Duration::from_millis(i * 100);
            d.input(now);
            assert!(!d.due(now + Duration::from_millis(99)));
        }
        assert!(d.pending());
    }

    #[test]
    fn idle_debouncer_is_inert() {
        let mut d = Debouncer::new(Duration::from_millis(300));
        assert!(!d.pending());
        assert!(!d.due(Instant::now()));
    }
}
