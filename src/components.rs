//! UI fragment builders.
//!
//! Stateless functions from catalog entities to [`Markup`] fragments: article
//! cards, category tabs, mood pills, and the loading skeleton. Fragments are
//! mounted into page regions by the controller and assembled into full
//! documents by [`pages`](crate::pages).
//!
//! Every data-derived string goes through maud interpolation, which escapes
//! on insertion — catalog text can never smuggle markup into the page.

use crate::catalog::{self, Article, Category, Mood, Thumbnail};
use maud::{Markup, html};

/// Gradient class chosen by an article's leading palette color. Colors not
/// in the table (and articles with no palette at all) get
/// [`DEFAULT_GRADIENT`].
pub const COLOR_GRADIENTS: &[(&str, &str)] = &[
    ("#667eea", "gradient-purple-blue"),
    ("#0D9488", "gradient-teal-cyan"),
    ("#F59E0B", "gradient-orange-pink"),
    ("#3B82F6", "gradient-blue-indigo"),
    ("#10B981", "gradient-green-teal"),
    ("#8B5CF6", "gradient-purple-blue"),
    ("#22C55E", "gradient-green-teal"),
    ("#EF4444", "gradient-rose-purple"),
];

pub const DEFAULT_GRADIENT: &str = "gradient-teal-cyan";

/// Per-card display state supplied by the controller.
#[derive(Debug, Clone, Copy, Default)]
pub struct CardContext {
    pub is_ai: bool,
    pub bookmarked: bool,
    pub liked: bool,
    /// Upper bound on tags shown on the card.
    pub max_tags: usize,
}

/// Resolve the gradient class for a thumbnail from its first palette color.
pub fn gradient_class(thumbnail: &Thumbnail) -> &'static str {
    let Some(first) = thumbnail.colors.first() else {
        return DEFAULT_GRADIENT;
    };
    COLOR_GRADIENTS
        .iter()
        .find(|(color, _)| *color == first)
        .map(|(_, class)| *class)
        .unwrap_or(DEFAULT_GRADIENT)
}

/// Inline style for image-backed thumbnails; gradient thumbnails carry no
/// style and render from their class alone.
pub fn thumbnail_style(thumbnail: &Thumbnail) -> Option<String> {
    if !thumbnail.is_image() {
        return None;
    }
    thumbnail.url.as_ref().map(|url| {
        format!(
            "background-image: url('{}'); background-size: cover; background-position: center;",
            url.replace('\'', "%27")
        )
    })
}

/// Reading-time badge text: seconds phrasing under a minute, rounded
/// minutes from there on.
pub fn format_reading_time(seconds: u32) -> String {
    if seconds < 60 {
        format!("{seconds}秒で読める")
    } else {
        let minutes = (f64::from(seconds) / 60.0).round() as u32;
        format!("{minutes}分で読める")
    }
}

fn tag_class(highlight_ai: bool, tag: &str) -> &'static str {
    if highlight_ai && catalog::tag_has_ai_marker(tag) {
        "tag tag--ai"
    } else {
        "tag"
    }
}

/// Up to `max` tag chips. AI-marked tags are highlighted only when the
/// article itself is AI-related.
pub fn render_tags(tags: &[String], highlight_ai: bool, max: usize) -> Markup {
    html! {
        @for tag in tags.iter().take(max) {
            span class=(tag_class(highlight_ai, tag)) { (tag) }
        }
    }
}

/// An article card: thumbnail, reading-time badge, tags, title, one-line
/// summary, source label, and the bookmark/like controls. The title links
/// to the detail view; the card root carries the article id for delegated
/// dispatch.
pub fn render_article_card(article: &Article, ctx: &CardContext) -> Markup {
    let bookmark_class = if ctx.bookmarked {
        "action-btn bookmark-btn active"
    } else {
        "action-btn bookmark-btn"
    };
    let like_class = if ctx.liked {
        "action-btn like-btn active liked"
    } else {
        "action-btn like-btn"
    };

    html! {
        article.article-card data-article-id=(article.id) {
            div class={ "article-card__thumbnail " (gradient_class(&article.thumbnail)) }
                style=[thumbnail_style(&article.thumbnail)] {}
            div.article-card__body {
                div.article-card__meta {
                    span.badge.badge--time { (format_reading_time(article.reading_time)) }
                    (render_tags(&article.tags, ctx.is_ai, ctx.max_tags))
                }
                h3.article-card__title {
                    a href={ "article.html?id=" (article.id) } { (article.catchy_title) }
                }
                p.article-card__summary { (article.summary.one_line) }
                div.article-card__footer {
                    span.article-card__source { (article.metadata.source) }
                    div.article-card__actions {
                        button class=(bookmark_class) data-id=(article.id) aria-label="あとで読む" {
                            (bookmark_icon(ctx.bookmarked))
                        }
                        button class=(like_class) data-id=(article.id) aria-label="いいね" {
                            (like_icon(ctx.liked))
                        }
                    }
                }
            }
        }
    }
}

pub fn bookmark_icon(active: bool) -> &'static str {
    if active { "📑" } else { "🔖" }
}

pub fn like_icon(active: bool) -> &'static str {
    if active { "❤️" } else { "🤍" }
}

/// A category tab. Exactly one tab is active at a time; tabs for the AI
/// categories get a distinguishing modifier class.
pub fn render_category_tab(category: &Category, active: bool) -> Markup {
    let mut class = String::from("category-tabs__item");
    if active {
        class.push_str(" active");
    }
    if catalog::AI_CATEGORIES.contains(&category.id.as_str()) {
        class.push_str(" category-tabs__item--ai");
    }

    html! {
        button class=(class) data-category-id=(category.id) role="tab" aria-selected=(active) {
            (category.icon) " " (category.name)
        }
    }
}

/// A mood pill. Same single-active contract as tabs.
pub fn render_mood_pill(mood: &Mood, active: bool) -> Markup {
    let class = if active { "mood-pill active" } else { "mood-pill" };
    html! {
        button class=(class) data-mood-id=(mood.id) {
            span { (mood.icon) } " " (mood.name)
        }
    }
}

/// Fixed-shape loading placeholder shown while the catalog loads.
pub fn render_skeleton_card() -> Markup {
    html! {
        div.article-card {
            div.article-card__thumbnail.skeleton style="height: 140px;" {}
            div.article-card__body {
                div.article-card__meta {
                    span.skeleton style="width: 80px; height: 24px;" {}
                    span.skeleton style="width: 50px; height: 24px;" {}
                }
                div.skeleton style="width: 100%; height: 24px; margin-bottom: 8px;" {}
                div.skeleton style="width: 80%; height: 20px; margin-bottom: 12px;" {}
                div.skeleton style="width: 100%; height: 40px;" {}
            }
        }
    }
}
