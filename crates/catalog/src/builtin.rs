//! The embedded demo catalog.

use crate::types::{Catalog, Movie, MovieStatus};

/// Genre vocabulary offered by the demo profile editor
pub const ALL_GENRES: [&str; 7] = [
    "Sci-Fi",
    "Action",
    "Drama",
    "Comedy",
    "Thriller",
    "Horror",
    "Documentary",
];

struct Entry {
    id: &'static str,
    title: &'static str,
    genres: &'static [&'static str],
    description: &'static str,
    rating: f32,
    year: u16,
    image_url: &'static str,
}

const ENTRIES: [Entry; 8] = [
    Entry {
        id: "1",
        title: "Interstellar",
        genres: &["Sci-Fi", "Drama"],
        description: "A team of explorers travel through a wormhole in space in an attempt to ensure humanity's survival.",
        rating: 8.7,
        year: 2014,
        image_url: "https://picsum.photos/seed/inter/400/600",
    },
    Entry {
        id: "2",
        title: "The Dark Knight",
        genres: &["Action", "Thriller"],
        description: "When the menace known as the Joker wreaks havoc and chaos on the people of Gotham.",
        rating: 9.0,
        year: 2008,
        image_url: "https://picsum.photos/seed/batman/400/600",
    },
    Entry {
        id: "3",
        title: "Inception",
        genres: &["Sci-Fi", "Action"],
        description: "A thief who steals corporate secrets through the use of dream-sharing technology.",
        rating: 8.8,
        year: 2010,
        image_url: "https://picsum.photos/seed/inception/400/600",
    },
    Entry {
        id: "4",
        title: "Pulp Fiction",
        genres: &["Thriller", "Crime"],
        description: "The lives of two mob hitmen, a boxer, a gangster and his wife intertwine.",
        rating: 8.9,
        year: 1994,
        image_url: "https://picsum.photos/seed/pulp/400/600",
    },
    Entry {
        id: "5",
        title: "The Martian",
        genres: &["Sci-Fi", "Drama"],
        description: "An astronaut becomes stranded on Mars after his team assume him dead.",
        rating: 8.0,
        year: 2015,
        image_url: "https://picsum.photos/seed/martian/400/600",
    },
    Entry {
        id: "6",
        title: "Parasite",
        genres: &["Drama", "Thriller"],
        description: "Greed and class discrimination threaten the newly formed symbiotic relationship.",
        rating: 8.5,
        year: 2019,
        image_url: "https://picsum.photos/seed/parasite/400/600",
    },
    Entry {
        id: "7",
        title: "The Social Network",
        genres: &["Drama", "Biography"],
        description: "As Harvard student Mark Zuckerberg creates the social networking site that would become known as Facebook.",
        rating: 7.8,
        year: 2010,
        image_url: "https://picsum.photos/seed/social/400/600",
    },
    Entry {
        id: "8",
        title: "Blade Runner 2049",
        genres: &["Sci-Fi", "Action"],
        description: "A young Blade Runner's discovery of a long-buried secret leads him to track down former Blade Runner Rick Deckard.",
        rating: 8.0,
        year: 2017,
        image_url: "https://picsum.photos/seed/blade/400/600",
    },
];

/// The demo movies as owned records, all starting as `discovery`
pub fn builtin_movies() -> Vec<Movie> {
    ENTRIES
        .iter()
        .map(|e| Movie {
            id: e.id.to_string(),
            title: e.title.to_string(),
            genres: e.genres.iter().map(|g| g.to_string()).collect(),
            description: e.description.to_string(),
            rating: e.rating,
            year: e.year,
            image_url: e.image_url.to_string(),
            status: MovieStatus::Discovery,
        })
        .collect()
}

impl Catalog {
    /// Build the embedded demo catalog
    pub fn builtin() -> Self {
        let mut catalog = Catalog::new();
        for movie in builtin_movies() {
            let inserted = catalog.insert_movie(movie);
            debug_assert!(inserted.is_ok(), "duplicate id in ENTRIES: {:?}", inserted);
        }
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_contents() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 8);
        assert_eq!(catalog.get_movie("1").unwrap().title, "Interstellar");
        assert_eq!(catalog.get_movie("8").unwrap().year, 2017);
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_builtin_genre_index() {
        let catalog = Catalog::builtin();
        let sci_fi = catalog.get_movies_by_genre("Sci-Fi");
        assert_eq!(sci_fi, &["1", "3", "5", "8"]);
        assert_eq!(catalog.get_movies_by_genre("Crime"), &["4"]);
        assert!(catalog.get_movies_by_genre("Documentary").is_empty());
    }

    #[test]
    fn test_builtin_entries_insert_cleanly() {
        let checked = Catalog::from_movies(builtin_movies()).unwrap();
        assert_eq!(checked.len(), Catalog::builtin().len());
        assert_eq!(checked.movies(), Catalog::builtin().movies());
    }

    #[test]
    fn test_builtin_starts_as_discovery() {
        assert!(
            builtin_movies()
                .iter()
                .all(|m| m.status == MovieStatus::Discovery)
        );
    }
}
