//! Terminal rendering of recommendation lists.

use catalog::{Movie, MovieStatus};
use colored::{ColoredString, Colorize};
use engine::RecommendationResult;
use session::{status_style, DisplayMode, VoiceCommand, LEGEND};

/// Color a piece of text the way a card with `status` is colored
fn paint(text: &str, status: MovieStatus, mode: DisplayMode) -> ColoredString {
    match (mode, status) {
        (DisplayMode::Standard, MovieStatus::Favorite) => text.red(),
        (DisplayMode::Standard, MovieStatus::Watched) => text.dimmed(),
        (DisplayMode::Standard, MovieStatus::Discovery) => text.normal(),
        (DisplayMode::HighContrast, MovieStatus::Favorite) => text.bright_red().bold(),
        (DisplayMode::HighContrast, MovieStatus::Watched) => text.black().on_white().bold(),
        (DisplayMode::HighContrast, MovieStatus::Discovery) => text.bright_white().bold(),
    }
}

fn genres(movie: &Movie) -> String {
    movie.genres.join(", ")
}

/// Print the ranked list, marking the selected entry if there is one
pub fn print_recommendations(
    results: &[RecommendationResult],
    mode: DisplayMode,
    limit: usize,
    explain: bool,
    selected: Option<usize>,
) {
    let header = match mode {
        DisplayMode::Standard => "Movie Recommendations:".bold().blue(),
        DisplayMode::HighContrast => "MOVIE RECOMMENDATIONS".bold().bright_white(),
    };
    println!("{}", header);

    for (rank, result) in results.iter().take(limit).enumerate() {
        let movie = &result.movie;
        let marker = if selected == Some(rank) { "▶" } else { " " };
        let hot = if result.is_hot() {
            " 🔥 Hot Recommendation".yellow().to_string()
        } else {
            String::new()
        };

        let title = format!("{} ({})", movie.title, movie.year);
        println!(
            "{} {}. {} [{}] ★ {} - Score: {:.2} - {}{}",
            marker,
            (rank + 1).to_string().green(),
            paint(&title, movie.status, mode),
            genres(movie),
            movie.rating,
            result.score,
            movie.status.to_string().to_uppercase(),
            hot
        );

        if explain {
            println!("     Reason: {}", result.reason);
            println!("     Style:  {}", status_style(movie.status, mode));
            if mode == DisplayMode::Standard {
                println!("     Poster: {}", movie.image_url);
            }
            println!("     {}", movie.description);
        }
    }
}

/// Print the catalog in declaration order
pub fn print_catalog<'a>(movies: impl Iterator<Item = &'a Movie>) {
    println!("{}", "Catalog:".bold().blue());
    for movie in movies {
        println!(
            "  {:>3}  {} ({}) [{}] ★ {}",
            movie.id,
            movie.title,
            movie.year,
            genres(movie),
            movie.rating
        );
    }
}

pub fn print_legend(mode: DisplayMode) {
    println!("{}", "Legend & System Status".bold());
    for entry in LEGEND {
        println!(
            "  {} - {}",
            paint(entry.label, entry.status, mode),
            entry.description
        );
    }
}

pub fn print_voice_help() {
    println!("{}", "Voice Shortcuts".bold());
    for command in VoiceCommand::ALL {
        println!("  {}", command.hint());
    }
    println!("{}", "Actions".bold());
    println!("  :listen          toggle voice control");
    println!("  :mode            toggle high-contrast mode");
    println!("  :wishlist <id>   add a movie to the wishlist");
    println!("  :watched <id>    mark a movie as watched");
    println!("  :list            show the list again");
    println!("  :help            show this help");
    println!("  :quit            leave");
}
