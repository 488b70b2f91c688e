use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use titlesearch_core::config::{Config, SearchSettings};
use titlesearch_core::corpus::{Corpus, DEMO_SIZE};
use titlesearch_core::types::ScoredResult;
use titlesearch_text::SearchPipeline;

#[derive(Parser)]
#[command(name = "titlesearch", version, about = "Fuzzy title search over a JSON catalog")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rank the catalog for a single query
    Search {
        query: String,
        /// JSON array of {"id", "title"} objects; defaults to data.corpus_path, then the demo catalog
        #[arg(long, env = "TITLESEARCH_CORPUS")]
        corpus: Option<PathBuf>,
        /// Overrides search.max_results
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Type TEXT one character at a time through the debounced pipeline
    Replay {
        text: String,
        #[arg(long, env = "TITLESEARCH_CORPUS")]
        corpus: Option<PathBuf>,
    },
    /// Print the demo catalog as JSON
    Demo {
        #[arg(long, default_value_t = DEMO_SIZE)]
        count: usize,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn load_corpus(config: &Config, corpus: Option<PathBuf>) -> anyhow::Result<Corpus> {
    let configured = match corpus {
        Some(path) => Some(path),
        None => config.corpus_path().context("reading data.corpus_path")?,
    };
    match configured {
        Some(path) => Corpus::from_json_file(&path).with_context(|| format!("loading corpus from {}", path.display())),
        None => {
            info!(count = DEMO_SIZE, "no corpus configured, using demo catalog");
            Ok(Corpus::demo(DEMO_SIZE))
        }
    }
}

const TINT_WIDTH: usize = 5;

/// `#3    Game 3  [###..]  (score 23)`; the bar shows highlight intensity.
fn format_result(r: &ScoredResult) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let filled = (r.highlight_intensity() * TINT_WIDTH as f32).round() as usize;
    let bar = format!("{}{}", "#".repeat(filled), ".".repeat(TINT_WIDTH - filled));
    format!("#{:<4} {}  [{}]  (score {})", r.original_index + 1, r.item.title, bar, r.score)
}

fn print_results(results: &[ScoredResult]) {
    if results.is_empty() {
        println!("No matches");
        return;
    }
    for r in results {
        println!("{}", format_result(r));
    }
}

fn run_search(config: &Config, query: &str, corpus: Option<PathBuf>, limit: Option<usize>) -> anyhow::Result<()> {
    let mut settings = config.search().context("reading [search] settings")?;
    if let Some(limit) = limit {
        settings.max_results = limit;
        settings.validate()?;
    }
    let mut pipeline = SearchPipeline::new(&settings);
    pipeline.set_corpus(load_corpus(config, corpus)?);
    pipeline.set_query(query);
    pipeline.flush();
    print_results(pipeline.current_results());
    Ok(())
}

fn run_replay(config: &Config, text: &str, corpus: Option<PathBuf>) -> anyhow::Result<()> {
    let settings: SearchSettings = config.search().context("reading [search] settings")?;
    let mut pipeline = SearchPipeline::new(&settings);
    pipeline.set_corpus(load_corpus(config, corpus)?);
    let baseline = pipeline.recomputations();

    let mut at = Instant::now();
    let mut typed = String::new();
    for ch in text.chars() {
        typed.push(ch);
        pipeline.poll_at(at);
        pipeline.set_query_at(&typed, at);
        at += settings.keystroke_interval();
    }
    if let Some(deadline) = pipeline.deadline() {
        pipeline.poll_at(deadline);
    }

    println!("committed query: {:?}", pipeline.committed_query());
    println!("keystrokes: {}, recomputations: {}", text.chars().count(), pipeline.recomputations() - baseline);
    print_results(pipeline.current_results());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = Config::load().context("loading configuration")?;
    match cli.command {
        Command::Search { query, corpus, limit } => run_search(&config, &query, corpus, limit)?,
        Command::Replay { text, corpus } => run_replay(&config, &text, corpus)?,
        Command::Demo { count } => println!("{}", serde_json::to_string_pretty(Corpus::demo(count).items())?),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::providers::{Format, Toml};
    use figment::Figment;
    use titlesearch_core::types::Item;

    fn config_from(raw: &str) -> Config {
        Config::from_figment(Figment::new().merge(Toml::string(raw))).expect("config")
    }

    fn hit(score: usize) -> ScoredResult {
        ScoredResult { item: Item::new("game-3", "Game 3"), original_index: 2, score }
    }

    #[test]
    fn result_line_carries_tint_bar() {
        assert_eq!(format_result(&hit(0)), "#3    Game 3  [.....]  (score 0)");
        assert_eq!(format_result(&hit(4)), "#3    Game 3  [##...]  (score 4)");
        assert_eq!(format_result(&hit(23)), "#3    Game 3  [#####]  (score 23)");
    }

    #[test]
    fn malformed_configured_corpus_path_is_reported() {
        let config = config_from("[data]\ncorpus_path = 5\n");
        assert!(load_corpus(&config, None).is_err());
    }

    #[test]
    fn explicit_corpus_flag_wins_over_config() {
        let config = config_from("[data]\ncorpus_path = 5\n");
        let missing = PathBuf::from("/nonexistent/titlesearch/corpus.json");
        let err = load_corpus(&config, Some(missing)).expect_err("missing file");
        assert!(err.to_string().contains("loading corpus"));
    }
}
