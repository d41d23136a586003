//! Full-page assembly for the static preview site.
//!
//! The controller renders fragments into surface regions; this module wraps
//! those regions — and the detail/library views — into complete HTML
//! documents for the `render` command:
//!
//! - **Browse page** (`index.html`): header with search and theme toggle,
//!   category tabs, mood pills, the filtered card grid (or empty state),
//!   and the bottom navigation.
//! - **Article pages** (`articles/{id}.html`): one detail view per article
//!   with the full summary rendered as markdown and a related-articles
//!   strip.
//! - **Library page** (`library.html`): the bookmarked-card view.
//!
//! The stylesheet is embedded at compile time, so the output directory is
//! self-contained.

use crate::app::Surface;
use crate::catalog::{self, Article, Catalog};
use crate::components::{self, CardContext};
use crate::config::AppConfig;
use crate::prefs::Theme;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};

const CSS: &str = include_str!("../static/style.css");

pub fn stylesheet() -> &'static str {
    CSS
}

/// Renders the base HTML document structure.
fn base_document(title: &str, language: &str, theme: Theme, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(language) data-theme=(theme.as_str()) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(CSS)) }
            }
            body {
                (content)
            }
        }
    }
}

/// Renders the browse page around the controller's surface regions.
///
/// Region contents are already-rendered fragments and are inserted raw;
/// the title and count are plain text and go through normal escaping.
pub fn render_browse_page(surface: &Surface, config: &AppConfig) -> Markup {
    let content = html! {
        header.app-header {
            h1.app-header__title { (config.site.title) }
            div.app-header__actions {
                input #searchInput type="search" class="search-input"
                    placeholder="キーワードで探す" aria-label="記事を検索";
                button #themeToggle .theme-toggle aria-label="テーマ切り替え" {
                    span.theme-toggle__icon { (surface.theme.toggle_icon()) }
                }
            }
        }
        nav #categoryTabs .category-tabs role="tablist" {
            (PreEscaped(surface.category_tabs.as_str()))
        }
        div #moodFilters .mood-filters {
            (PreEscaped(surface.mood_pills.as_str()))
        }
        main.articles-section {
            div.section-heading {
                h2 #sectionTitle .section-heading__title { (surface.section_title) }
                span #articleCount .section-heading__count { (surface.article_count) }
            }
            div #articlesGrid .articles-grid
                style=[(!surface.grid_visible).then_some("display: none;")] {
                (PreEscaped(surface.article_grid.as_str()))
            }
            div #emptyState .empty-state
                style=[(!surface.empty_visible).then_some("display: none;")] {
                p.empty-state__icon { "🔍" }
                p { "該当する記事が見つかりませんでした" }
                p.empty-state__hint { "条件を変えて探してみてください" }
            }
        }
        div #toast .toast {}
        (bottom_nav())
    };

    base_document(&config.site.title, &config.site.language, surface.theme, content)
}

/// Renders an article detail page.
pub fn render_article_page(article: &Article, catalog: &Catalog, config: &AppConfig) -> Markup {
    let is_ai = catalog::is_ai_related(article);
    let related = catalog.related_articles(&article.id, config.related.limit);

    // Full summaries are authored markdown; plain text passes through as
    // paragraphs.
    let parser = Parser::new(&article.summary.full_summary);
    let mut body_html = String::new();
    md_html::push_html(&mut body_html, parser);

    let content = html! {
        header.app-header {
            a.app-header__back href="index.html" { "← ホーム" }
            h1.app-header__title { (config.site.title) }
        }
        main.article-detail {
            article data-article-id=(article.id) {
                div.article-detail__meta {
                    span.badge.badge--time { (components::format_reading_time(article.reading_time)) }
                    (components::render_tags(&article.tags, is_ai, article.tags.len()))
                }
                h1.article-detail__title { (article.catchy_title) }
                p.article-detail__original { (article.original_title) }
                p.article-detail__lead { (article.summary.one_line) }
                div.article-detail__body { (PreEscaped(body_html)) }
                footer.article-detail__source {
                    @if let Some(url) = &article.metadata.url {
                        a href=(url) target="_blank" rel="noopener" { (article.metadata.source) }
                    } @else {
                        span { (article.metadata.source) }
                    }
                    @if let Some(published) = &article.metadata.published {
                        span.article-detail__published { (published) }
                    }
                }
            }
            @if !related.is_empty() {
                section.related-articles {
                    h2 { "関連記事" }
                    ul.related-articles__list {
                        @for r in &related {
                            li {
                                a href={ "article.html?id=" (r.id) } { (r.catchy_title) }
                            }
                        }
                    }
                }
            }
        }
        (bottom_nav())
    };

    base_document(&article.catchy_title, &config.site.language, Theme::Light, content)
}

/// Renders the library page from bookmarked entries.
pub fn render_library_page(entries: &[(&Article, CardContext)], config: &AppConfig) -> Markup {
    let content = html! {
        header.app-header {
            a.app-header__back href="index.html" { "← ホーム" }
            h1.app-header__title { "🔖 ライブラリ" }
        }
        main.articles-section {
            @if entries.is_empty() {
                div.empty-state {
                    p.empty-state__icon { "🔖" }
                    p { "保存した記事はまだありません" }
                }
            } @else {
                div.articles-grid {
                    @for (article, ctx) in entries {
                        (components::render_article_card(article, ctx))
                    }
                }
            }
        }
        (bottom_nav())
    };

    base_document("ライブラリ", &config.site.language, Theme::Light, content)
}

fn bottom_nav() -> Markup {
    html! {
        nav.bottom-nav {
            a #navHome .bottom-nav__item href="index.html" { "🏠 ホーム" }
            a #navSearch .bottom-nav__item href="#" { "🔍 さがす" }
            a #navBookmark .bottom-nav__item href="library.html" { "🔖 ライブラリ" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::sample_catalog;

    fn surface() -> Surface {
        Surface {
            category_tabs: "<button>tab</button>".to_string(),
            mood_pills: "<button>pill</button>".to_string(),
            article_grid: "<article>card</article>".to_string(),
            section_title: "すべての記事".to_string(),
            article_count: "4件".to_string(),
            grid_visible: true,
            empty_visible: false,
            ..Surface::default()
        }
    }

    // =========================================================================
    // Browse page
    // =========================================================================

    #[test]
    fn browse_page_mounts_regions_by_id() {
        let html = render_browse_page(&surface(), &AppConfig::default()).into_string();
        assert!(html.starts_with("<!DOCTYPE html>"));
        for id in [
            "searchInput",
            "themeToggle",
            "categoryTabs",
            "moodFilters",
            "sectionTitle",
            "articleCount",
            "articlesGrid",
            "emptyState",
            "toast",
            "navBookmark",
        ] {
            assert!(html.contains(&format!(r#"id="{id}""#)), "missing #{id}");
        }
        // Region fragments land unescaped; the title text is escaped prose
        assert!(html.contains("<article>card</article>"));
        assert!(html.contains("すべての記事"));
        assert!(html.contains("4件"));
    }

    #[test]
    fn browse_page_hides_empty_state_when_grid_shows() {
        let html = render_browse_page(&surface(), &AppConfig::default()).into_string();
        // Only the empty state carries display: none
        assert_eq!(html.matches("display: none;").count(), 1);

        let mut s = surface();
        s.grid_visible = false;
        s.empty_visible = true;
        let empty = render_browse_page(&s, &AppConfig::default()).into_string();
        assert!(empty.contains("該当する記事が見つかりませんでした"));
    }

    #[test]
    fn browse_page_escapes_section_title() {
        let mut s = surface();
        s.section_title = "「<script>」の検索結果".to_string();
        let html = render_browse_page(&s, &AppConfig::default()).into_string();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn browse_page_carries_theme_attribute() {
        let mut s = surface();
        s.theme = Theme::Dark;
        let html = render_browse_page(&s, &AppConfig::default()).into_string();
        assert!(html.contains(r#"data-theme="dark""#));
        assert!(html.contains("☀️")); // toggle offers the way back
    }

    // =========================================================================
    // Article page
    // =========================================================================

    #[test]
    fn article_page_renders_titles_and_source() {
        let catalog = sample_catalog();
        let article = catalog.article_by_id("llm-context").unwrap();
        let html = render_article_page(article, &catalog, &AppConfig::default()).into_string();

        assert!(html.contains(&article.catchy_title));
        assert!(html.contains(&article.original_title));
        assert!(html.contains("arXiv"));
        assert!(html.contains("秒で読める") || html.contains("分で読める"));
    }

    #[test]
    fn article_page_renders_full_summary_markdown() {
        let catalog = sample_catalog();
        let article = catalog.article_by_id("deep-sleep").unwrap();
        let html = render_article_page(article, &catalog, &AppConfig::default()).into_string();
        // The sample summary carries **強調** markup
        assert!(html.contains("<strong>"));
    }

    #[test]
    fn article_page_related_strip_drops_dangling_refs() {
        let catalog = sample_catalog();
        let article = catalog.article_by_id("llm-context").unwrap();
        let html = render_article_page(article, &catalog, &AppConfig::default()).into_string();

        assert!(html.contains("関連記事"));
        assert!(html.contains("article.html?id=deep-sleep"));
        assert!(html.contains("article.html?id=focus-mind"));
        assert!(!html.contains("ghost-article"));
    }

    #[test]
    fn article_page_omits_related_section_when_none_resolve() {
        let catalog = sample_catalog();
        let article = catalog.article_by_id("deep-sleep").unwrap();
        let html = render_article_page(article, &catalog, &AppConfig::default()).into_string();
        assert!(!html.contains("関連記事"));
    }

    // =========================================================================
    // Library page
    // =========================================================================

    #[test]
    fn library_page_lists_bookmarked_cards() {
        let catalog = sample_catalog();
        let article = catalog.article_by_id("focus-mind").unwrap();
        let entries = vec![(
            article,
            CardContext {
                bookmarked: true,
                max_tags: 3,
                ..CardContext::default()
            },
        )];
        let html = render_library_page(&entries, &AppConfig::default()).into_string();
        assert!(html.contains("focus-mind"));
        assert!(html.contains("bookmark-btn active"));
    }

    #[test]
    fn library_page_empty_state() {
        let html = render_library_page(&[], &AppConfig::default()).into_string();
        assert!(html.contains("保存した記事はまだありません"));
    }
}
