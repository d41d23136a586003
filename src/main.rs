use clap::{Parser, Subcommand};
use paper_insight::app::{App, ControlRole, ControlTarget};
use paper_insight::catalog::{self, Article, Catalog};
use paper_insight::components::CardContext;
use paper_insight::config::{self, AppConfig};
use paper_insight::prefs::FileStore;
use paper_insight::{output, pages};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "paper-insight")]
#[command(about = "Article browser for research paper summaries")]
#[command(long_about = "\
Article browser for research paper summaries

Loads a JSON catalog of articles, categories, and moods, filters it by
category / mood / free-text query, and renders the browsing interface —
card grid, detail pages, and the bookmark library — as a static HTML
preview site.

Catalog document shape:

  {
    \"articles\":   [ ... ],                            # cards
    \"categories\": { \"standard\": [], \"thematic\": [] }, # filter tabs
    \"moods\":      [ ... ]                             # filter pills
  }

Missing top-level keys default to empty collections. If the document
cannot be loaded at all, a fallback catalog (full filter pools, zero
articles) keeps the interface usable.

Bookmarks, likes, and the theme live in a flat key-value store under
prefs_dir and survive across runs.

Run 'paper-insight gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Config file
    #[arg(long, default_value = "config.toml", global = true)]
    config: PathBuf,

    /// Output directory for rendered pages
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

/// Filter selection applied through the controller before rendering.
#[derive(clap::Args)]
struct RenderArgs {
    /// Category id to select (tab)
    #[arg(long)]
    category: Option<String>,

    /// Mood id to select (pill)
    #[arg(long)]
    mood: Option<String>,

    /// Search query (applied after the configured debounce)
    #[arg(long)]
    query: Option<String>,

    /// Report a dark system theme to the controller
    #[arg(long)]
    dark: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Render the browse, article, and library pages as a static site
    Render(RenderArgs),
    /// Validate the catalog document without rendering
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Render(args) => render(&cli.config, &cli.output, args),
        Command::Check => check(&cli.config),
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
            Ok(())
        }
    }
}

fn render(
    config_path: &Path,
    output_dir: &Path,
    args: RenderArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load(config_path)?;
    let (catalog, source) = Catalog::load(Path::new(&config.catalog.path));
    output::print_load_notice(&source);

    let store = FileStore::new(&config.prefs_dir);
    let mut app = App::start(catalog, source, store, &config, args.dark);

    // Route the CLI selection through the same dispatch the interactive
    // shell uses.
    if let Some(id) = args.category {
        app.dispatch(ControlTarget::new(ControlRole::CategoryTab, id));
    }
    if let Some(id) = args.mood {
        app.dispatch(ControlTarget::new(ControlRole::MoodPill, id));
    }
    if let Some(query) = args.query {
        let now = Instant::now();
        app.search_input(&query, now);
        app.tick(now + Duration::from_millis(config.search.debounce_ms));
    }

    std::fs::create_dir_all(output_dir)?;
    let browse = pages::render_browse_page(app.surface(), &config);
    std::fs::write(output_dir.join("index.html"), browse.into_string())?;

    let entries: Vec<(&Article, CardContext)> = app
        .bookmarked_articles()
        .into_iter()
        .map(|a| {
            (
                a,
                CardContext {
                    is_ai: catalog::is_ai_related(a),
                    bookmarked: true,
                    liked: app.preferences().likes.contains(&a.id),
                    max_tags: config.cards.max_tags,
                },
            )
        })
        .collect();
    let library = pages::render_library_page(&entries, &config);
    std::fs::write(output_dir.join("library.html"), library.into_string())?;

    let articles_dir = output_dir.join("articles");
    std::fs::create_dir_all(&articles_dir)?;
    for article in app.catalog().articles() {
        let page = pages::render_article_page(article, app.catalog(), &config);
        std::fs::write(
            articles_dir.join(format!("{}.html", article.id)),
            page.into_string(),
        )?;
    }

    let articles: Vec<&Article> = app.catalog().articles().iter().collect();
    output::print_render_output(&articles);
    for notice in &app.notices {
        println!("{notice}");
    }
    println!("Site rendered at {}", output_dir.display());
    Ok(())
}

fn check(config_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load(config_path)?;
    let catalog = Catalog::read(Path::new(&config.catalog.path))?;
    println!("Catalog: {}", output::format_catalog_summary(&catalog));

    let report = catalog.check();
    output::print_check_output(&report);

    if report.has_errors() {
        return Err("catalog check failed".into());
    }
    Ok(())
}
