use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tango::deck::{ALL_CATEGORIES, Deck, DeckReport, builtin_deck, clean_example, load_deck};
use tango::error::DeckError;
use tango::quiz::{Direction, Mode};
use tango::{App, Config, QuizController};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Width used when printing examples
const WRAP_WIDTH: usize = 72;

#[derive(Parser)]
#[command(name = "tango")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Deck file to load instead of the configured or built-in deck
    #[arg(short, long, global = true)]
    deck: Option<PathBuf>,

    /// Category to start on
    #[arg(short, long)]
    category: Option<String>,

    /// Start mode (list or quiz)
    #[arg(short, long)]
    mode: Option<Mode>,

    /// Prompt direction (forward or reverse)
    #[arg(long)]
    direction: Option<Direction>,

    /// Seed for a reproducible question order
    #[arg(long)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the deck's categories with entry counts
    Categories,
    /// Print the words of a category
    Words {
        /// Category key (defaults to all)
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Validate the deck and report problems
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    init_logging(cli.command.is_none())?;

    let deck = resolve_deck(cli.deck.as_deref(), &config)?;

    match cli.command {
        Some(Commands::Categories) => print_categories(&deck),
        Some(Commands::Words { category }) => {
            let key = category.unwrap_or_else(|| ALL_CATEGORIES.to_string());
            ensure_category(&deck, &key)?;
            print_words(&deck, &key);
        }
        Some(Commands::Check) => print_report(&deck),
        None => {
            if let Some(key) = &cli.category {
                ensure_category(&deck, key)?;
            }

            let quiz = match cli.seed {
                Some(seed) => QuizController::with_seed(deck, seed),
                None => QuizController::new(deck),
            };
            let mut quiz =
                quiz.with_default_direction(cli.direction.unwrap_or(config.default_direction));
            if let Some(key) = &cli.category {
                quiz.select_category(key);
            }
            quiz.set_mode(cli.mode.unwrap_or(config.default_mode));

            let mut app = App::new(config, quiz)?;
            app.run().await?;
        }
    }

    Ok(())
}

/// Log to a file while the TUI owns the terminal, to stderr otherwise
fn init_logging(tui: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "tango=info".into());

    if tui {
        let log_path = Config::log_path()?;
        if let Some(parent) = log_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory {:?}", parent))?;
        }
        let file = File::create(&log_path)
            .with_context(|| format!("Failed to create log file {:?}", log_path))?;
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }

    Ok(())
}

/// Deck from the command line, then the config, then the built-in sample
fn resolve_deck(cli_path: Option<&Path>, config: &Config) -> Result<Deck> {
    let deck = match cli_path.or(config.deck_path.as_deref()) {
        Some(path) => load_deck(path).map_err(|err| {
            let hint = load_hint(&err);
            anyhow::Error::new(err).context(format!("Could not load deck {:?}: {}", path, hint))
        })?,
        None => builtin_deck().context("Built-in deck is invalid")?,
    };
    Ok(deck)
}

/// What to do about a deck that failed to load
fn load_hint(err: &DeckError) -> &'static str {
    if err.is_content_error() {
        "fix the deck file, then run `tango --deck <path> check`"
    } else {
        "check the path given with --deck or in config.json"
    }
}

fn ensure_category(deck: &Deck, key: &str) -> Result<()> {
    if !deck.selectable_keys().contains(&key) {
        bail!("Unknown category '{}'. Try `tango categories`.", key);
    }
    Ok(())
}

fn print_categories(deck: &Deck) {
    for key in deck.selectable_keys() {
        println!("{:<12} {:<24} {:>4}", key, deck.category_name(key), deck.count_in(key));
    }
}

fn print_words(deck: &Deck, key: &str) {
    let options = textwrap::Options::new(WRAP_WIDTH)
        .initial_indent("    ")
        .subsequent_indent("    ");

    for entry in deck.filter(key) {
        println!("{:<8} {}  /  {}", entry.id, entry.prompt, entry.clean_answer());
        let example = clean_example(&entry.example);
        if !example.is_empty() {
            println!("{}", textwrap::fill(&example, &options));
        }
    }
}

fn print_report(deck: &Deck) {
    let report = DeckReport::new(deck);
    println!("entries:          {}", report.entries);
    println!("categories:       {}", report.categories);
    println!("distinct answers: {}", report.distinct_answers);

    if !report.supports_full_choices() {
        println!("warning: fewer than 4 distinct answers; choice questions will show fewer options");
    }
    for key in &report.empty_categories {
        println!("warning: category '{}' has no entries", key);
    }
    if report.supports_full_choices() && report.empty_categories.is_empty() {
        println!("ok");
    }
}
