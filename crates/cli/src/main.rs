mod config;
mod render;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use rand::Rng;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

use catalog::{Catalog, ALL_GENRES};
use config::{parse_hours, AppConfig, ProfileOverrides};
use engine::{Scorer, UserStats};
use session::{AppController, DisplayMode, ManualRecognizer, SpeechSynthesizer, TerminalSynthesizer};

/// Inclusive-Vision - accessible movie recommendations
#[derive(Parser)]
#[command(name = "inclusive-vision")]
#[command(about = "Movie recommendations with voice control and a high-contrast mode", long_about = None)]
struct Cli {
    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON catalog file (defaults to the built-in catalog)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// JSON profile file (defaults to the demo profile)
    #[arg(long, global = true)]
    profile: Option<PathBuf>,

    /// Daily hours for a genre, e.g. --hours Sci-Fi=3 (repeatable)
    #[arg(long = "hours", value_name = "GENRE=HOURS", value_parser = parse_hours, global = true)]
    hours: Vec<(String, f64)>,

    /// Movie id to add to the wishlist (repeatable)
    #[arg(long, value_name = "ID", global = true)]
    wishlist: Vec<String>,

    /// Movie id to mark as watched (repeatable)
    #[arg(long, value_name = "ID", global = true)]
    watched: Vec<String>,

    /// Start in high-contrast mode
    #[arg(long, global = true)]
    high_contrast: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show ranked recommendations for the profile
    Recommend {
        /// Number of recommendations to show
        #[arg(long)]
        limit: Option<usize>,

        /// Show reason, style and description for each entry
        #[arg(long)]
        explain: bool,
    },

    /// List the movies in the catalog
    Catalog {
        /// Only movies tagged with this genre
        #[arg(long)]
        genre: Option<String>,
    },

    /// Explain the status colors
    Legend,

    /// Interactive session; each stdin line is a voice transcript
    Voice,

    /// Time scoring passes over random profiles
    Benchmark {
        /// Number of scoring passes
        #[arg(long, default_value = "1000")]
        requests: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if cli.catalog.is_some() {
        config.catalog = cli.catalog;
    }
    if cli.profile.is_some() {
        config.profile = cli.profile;
    }
    config.high_contrast |= cli.high_contrast;

    let overrides = ProfileOverrides {
        hours: cli.hours,
        wishlist: cli.wishlist,
        watched: cli.watched,
    };

    let catalog = Arc::new(config.load_catalog()?);
    let stats = config.load_profile(&overrides)?;
    let mode = if config.high_contrast {
        DisplayMode::HighContrast
    } else {
        DisplayMode::Standard
    };
    debug!("Using {} movies, display mode {}", catalog.len(), mode);

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Recommend { limit, explain } => {
            handle_recommend(&catalog, &stats, mode, limit.unwrap_or(config.limit), explain)
        }
        Commands::Catalog { genre } => handle_catalog(&catalog, genre.as_deref()),
        Commands::Legend => {
            render::print_legend(mode);
            Ok(())
        }
        Commands::Voice => handle_voice(catalog, stats, mode).await,
        Commands::Benchmark { requests } => handle_benchmark(&catalog, requests),
    }
}

/// Handle the 'recommend' command
fn handle_recommend(
    catalog: &Catalog,
    stats: &UserStats,
    mode: DisplayMode,
    limit: usize,
    explain: bool,
) -> Result<()> {
    let start = Instant::now();
    let results = Scorer::standard().score(catalog.movies(), stats);
    info!("Scored {} movies in {:?}", results.len(), start.elapsed());

    render::print_recommendations(&results, mode, limit, explain, None);
    Ok(())
}

/// Handle the 'catalog' command
fn handle_catalog(catalog: &Catalog, genre: Option<&str>) -> Result<()> {
    match genre {
        Some(genre) => {
            let ids = catalog.get_movies_by_genre(genre);
            if ids.is_empty() {
                println!("No movies tagged '{}'. Known genres: {}", genre, catalog.genres().join(", "));
                return Ok(());
            }
            render::print_catalog(ids.iter().filter_map(|id| catalog.get_movie(id)));
        }
        None => render::print_catalog(catalog.movies().iter()),
    }
    Ok(())
}

/// Handle the 'voice' command
///
/// Lines starting with ':' are UI actions; anything else is treated as a
/// recognizer transcript and only acted on while voice control is on.
async fn handle_voice(catalog: Arc<Catalog>, stats: UserStats, mode: DisplayMode) -> Result<()> {
    let mut controller = AppController::new(catalog, stats, TerminalSynthesizer::new())
        .with_recognizer(Box::new(ManualRecognizer::new()))
        .with_display_mode(mode);

    render::print_voice_help();
    show(&controller);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines
        .next_line()
        .await
        .context("Failed to read from stdin")?
    {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (action, arg) = match line.split_once(char::is_whitespace) {
            Some((action, arg)) => (action, arg.trim()),
            None => (line, ""),
        };

        match action {
            ":quit" | ":q" => break,
            ":help" => render::print_voice_help(),
            ":list" => show(&controller),
            ":listen" => {
                let on = controller.toggle_listening();
                let state = if on { "Voice Control Active" } else { "Voice control off" };
                println!("{}", state.bold());
            }
            ":mode" => {
                controller.toggle_display_mode();
                show(&controller);
            }
            ":wishlist" | ":watched" if arg.is_empty() => {
                println!("Usage: {} <movie id>", action);
            }
            ":wishlist" => {
                controller.add_to_wishlist(arg);
                show(&controller);
            }
            ":watched" => {
                controller.mark_watched(arg);
                show(&controller);
            }
            other if other.starts_with(':') => {
                println!("Unknown action '{}'; try :help", other);
            }
            _ => {
                if !controller.is_listening() {
                    println!("Voice control is off; type :listen to start");
                    continue;
                }
                if controller.handle_transcript(&line.to_lowercase()).is_some() {
                    show(&controller);
                }
            }
        }
    }

    finish_speaking(&controller).await;
    Ok(())
}

/// Wait until the last announcement has played out
async fn finish_speaking<S: SpeechSynthesizer>(controller: &AppController<S>) {
    while controller.announcer().synthesizer().is_speaking() {
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
}

fn show(controller: &AppController<TerminalSynthesizer>) {
    render::print_recommendations(
        controller.recommendations(),
        controller.display_mode(),
        usize::MAX,
        controller.display_mode().is_high_contrast(),
        Some(controller.selected_index()),
    );
}

/// Handle the 'benchmark' command
fn handle_benchmark(catalog: &Catalog, requests: usize) -> Result<()> {
    if requests == 0 {
        anyhow::bail!("--requests must be at least 1");
    }

    let scorer = Scorer::standard();
    let mut rng = rand::rng();

    let mut genres: Vec<&str> = catalog.genres();
    for genre in ALL_GENRES {
        if !genres.contains(&genre) {
            genres.push(genre);
        }
    }

    let mut timings: Vec<Duration> = Vec::with_capacity(requests);
    for _ in 0..requests {
        // Random profile: some genres, some wishlisted, some watched
        let mut stats = UserStats::new();
        for genre in &genres {
            if rng.random_bool(0.6) {
                stats.set_hours(*genre, rng.random_range(0.0..4.0))?;
            }
        }
        for movie in catalog.movies() {
            if rng.random_bool(0.2) {
                stats.add_to_wishlist(movie.id.as_str());
            }
            if rng.random_bool(0.2) {
                stats.mark_watched(movie.id.as_str());
            }
        }

        let start = Instant::now();
        let results = scorer.score(catalog.movies(), &stats);
        timings.push(start.elapsed());
        debug!("Top result: {:?}", results.first().map(|r| &r.movie.title));
    }

    let total_time: Duration = timings.iter().sum();
    let avg_latency = total_time / (timings.len() as u32);
    timings.sort();
    let percentile = |p: f64| timings[((timings.len() as f64 * p) as usize).min(timings.len() - 1)];
    let throughput = requests as f64 / total_time.as_secs_f64().max(f64::EPSILON);

    println!("{}", "Benchmark results:".bold().blue());
    println!("Scoring passes: {} over {} movies", requests, catalog.len());
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(0.50));
    println!("P95 latency: {:?}", percentile(0.95));
    println!("P99 latency: {:?}", percentile(0.99));
    println!("Throughput: {:.2} passes/second", throughput);

    Ok(())
}
