//! Shared test fixtures for the paper-insight test suite.
//!
//! Provides a bare article builder and a small in-memory catalog with the
//! shapes the unit tests lean on: an AI article with a dangling related
//! reference, an image-thumbnail article, and articles across several
//! categories and moods.

use crate::catalog::{
    Article, ArticleCategories, Catalog, Category, Mood, SourceMeta, Summary, Thumbnail,
};

/// A minimal article with the given id. Tests overwrite the fields they
/// care about.
pub fn article(id: &str) -> Article {
    Article {
        id: id.to_string(),
        catchy_title: format!("Article {id}"),
        original_title: format!("Original {id}"),
        summary: Summary::default(),
        tags: Vec::new(),
        categories: ArticleCategories::default(),
        mood: Vec::new(),
        reading_time: 60,
        thumbnail: Thumbnail::default(),
        metadata: SourceMeta {
            source: "TestSource".to_string(),
            url: None,
            published: None,
        },
        related_articles: Vec::new(),
    }
}

fn category(id: &str, name: &str, name_en: &str, icon: &str) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        name_en: name_en.to_string(),
        icon: icon.to_string(),
    }
}

fn mood(id: &str, name: &str, icon: &str) -> Mood {
    Mood {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
    }
}

/// Four articles over the full category/mood pools.
///
/// - `llm-context`: AI article (standard `ai-technology`, thematic
///   `applied-ai`, tag `LLM`), mood `practical`, palette thumbnail,
///   related refs including the dangling `ghost-article`
/// - `deep-sleep`: health article, moods `motivating` + `practical`,
///   image thumbnail, markdown in the full summary
/// - `focus-mind`: psychology article, mood `thought-provoking`
/// - `market-shift`: business article, mood `inspiring`, palette color
///   missing from the gradient table
pub fn sample_catalog() -> Catalog {
    let mut llm = article("llm-context");
    llm.catchy_title = "長文もおまかせ、LLMの新常識".to_string();
    llm.original_title = "Extending Context Windows in Large Language Models".to_string();
    llm.summary = Summary {
        one_line: "コンテキスト窓の仕組みをやさしく解説".to_string(),
        full_summary: "長いプロンプトをどう扱うか、最新の研究を整理した。".to_string(),
    };
    llm.tags = vec!["LLM".to_string(), "プロンプト".to_string(), "論文".to_string()];
    llm.categories.standard = vec!["ai-technology".to_string()];
    llm.categories.thematic = vec!["applied-ai".to_string()];
    llm.mood = vec!["practical".to_string()];
    llm.reading_time = 45;
    llm.thumbnail = Thumbnail {
        kind: "gradient".to_string(),
        url: None,
        colors: vec!["#667eea".to_string()],
    };
    llm.metadata.source = "arXiv".to_string();
    llm.related_articles = vec![
        "deep-sleep".to_string(),
        "ghost-article".to_string(),
        "focus-mind".to_string(),
    ];

    let mut sleep = article("deep-sleep");
    sleep.catchy_title = "眠りの質は朝決まる".to_string();
    sleep.original_title = "Morning Light Exposure and Sleep Quality".to_string();
    sleep.summary = Summary {
        one_line: "朝の光が夜の睡眠を左右する".to_string(),
        full_summary: "朝の光を浴びる習慣が**睡眠の質**を大きく変える。".to_string(),
    };
    sleep.tags = vec!["睡眠".to_string(), "健康".to_string()];
    sleep.categories.standard = vec!["health-medical".to_string()];
    sleep.categories.thematic = vec!["life-hacks".to_string()];
    sleep.mood = vec!["motivating".to_string(), "practical".to_string()];
    sleep.reading_time = 125;
    sleep.thumbnail = Thumbnail {
        kind: "image".to_string(),
        url: Some("https://example.com/sleep.png".to_string()),
        colors: Vec::new(),
    };
    sleep.metadata = SourceMeta {
        source: "Nature".to_string(),
        url: Some("https://example.com/sleep-study".to_string()),
        published: Some("2026-03-01".to_string()),
    };

    let mut focus = article("focus-mind");
    focus.catchy_title = "集中力のつくり方".to_string();
    focus.original_title = "The Cognitive Science of Sustained Attention".to_string();
    focus.summary = Summary {
        one_line: "注意がそれる仕組みを知れば対策できる".to_string(),
        full_summary: "注意の研究から、集中を保つ環境づくりを考える。".to_string(),
    };
    focus.tags = vec!["心理学".to_string(), "集中".to_string()];
    focus.categories.standard = vec!["human-mind".to_string()];
    focus.mood = vec!["thought-provoking".to_string()];
    focus.reading_time = 90;
    focus.thumbnail = Thumbnail {
        kind: "gradient".to_string(),
        url: None,
        colors: vec!["#F59E0B".to_string()],
    };
    focus.metadata.source = "Science".to_string();
    focus.related_articles = vec!["llm-context".to_string()];

    let mut market = article("market-shift");
    market.catchy_title = "市場を読む力".to_string();
    market.original_title = "Reading Structural Market Shifts".to_string();
    market.summary = Summary {
        one_line: "ビジネスで潮目を見極める".to_string(),
        full_summary: "構造変化を早く掴むためにどこを見るべきか。".to_string(),
    };
    market.tags = vec!["ビジネス".to_string(), "経済".to_string()];
    market.categories.standard = vec!["society-business".to_string()];
    market.categories.thematic = vec!["future-trends".to_string()];
    market.mood = vec!["inspiring".to_string()];
    market.reading_time = 300;
    market.thumbnail = Thumbnail {
        kind: "gradient".to_string(),
        url: None,
        colors: vec!["#ABCDEF".to_string()],
    };
    market.metadata.source = "HBR".to_string();

    Catalog::from_parts(
        vec![llm, sleep, focus, market],
        vec![
            category("nature-science", "自然科学", "Nature & Universe", "🌌"),
            category("ai-technology", "AI・テクノロジー", "AI & Technology", "🤖"),
            category("human-mind", "人間科学・心理", "Human & Mind", "🧠"),
            category("society-business", "社会科学・ビジネス", "Society & Business", "📊"),
            category("health-medical", "医歯薬学・ヘルスケア", "Health & Medical", "🏥"),
        ],
        vec![
            category("life-hacks", "ライフハック", "Life Hacks", "✨"),
            category("applied-ai", "AI × 〇〇", "Applied AI", "🔮"),
            category("future-trends", "未来予測", "Future Trends", "🚀"),
            category("thinking-models", "思考法", "Thinking Models", "💡"),
            category("sustainability", "サステナビリティ", "Sustainability", "🌱"),
        ],
        vec![
            mood("motivating", "元気が欲しい", "💪"),
            mood("practical", "すぐ使える知識", "🛠️"),
            mood("thought-provoking", "じっくり考えたい", "🤔"),
            mood("inspiring", "ワクワクしたい", "✨"),
        ],
    )
}
