use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::util::format::tmdb_poster_url;

// ---------------------------------------------------------------------------
// Movie – one card on the dashboard
// ---------------------------------------------------------------------------

/// A movie as displayed on the dashboard.
///
/// The JSON shape matches what `GET /api/movies/trending` returns:
///
/// ```json
/// {
///   "id": 1,
///   "title": "Inception",
///   "posterUrl": "https://image.tmdb.org/t/p/w500/9gk7adHYeDMPS6ivNEmZwtI91a0.jpg",
///   "rating": 8.8,
///   "mlConfidence": 0.92,
///   "releaseYear": 2010,
///   "genres": ["Sci-Fi", "Action", "Thriller"]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: u64,
    pub title: String,
    /// Full image URL, or a TMDB poster path such as `/abc.jpg`.
    #[serde(alias = "poster_url", alias = "poster_path")]
    pub poster_url: String,
    /// 0–10 scale.
    pub rating: f64,
    /// Recommendation model certainty, 0–1.
    #[serde(alias = "ml_confidence")]
    pub ml_confidence: f64,
    #[serde(alias = "release_year")]
    pub release_year: i32,
    #[serde(default)]
    pub genres: Vec<String>,
}

impl Movie {
    /// URL to load the poster from. Bare TMDB paths are expanded with the
    /// given size segment (`w500`, `original`, ...).
    pub fn poster_source(&self, size: &str) -> String {
        if self.poster_url.starts_with("http://") || self.poster_url.starts_with("https://") {
            self.poster_url.clone()
        } else {
            tmdb_poster_url(&self.poster_url, size)
        }
    }

    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }
}

// ---------------------------------------------------------------------------
// MovieCatalog – the loaded list
// ---------------------------------------------------------------------------

/// All movies of the session with a pre-computed genre index.
#[derive(Debug, Clone, Default)]
pub struct MovieCatalog {
    pub movies: Vec<Movie>,
    /// Every genre label that appears in `movies`, sorted.
    pub genres: BTreeSet<String>,
}

impl MovieCatalog {
    pub fn from_movies(movies: Vec<Movie>) -> Self {
        let genres = movies
            .iter()
            .flat_map(|m| m.genres.iter().cloned())
            .collect();
        MovieCatalog { movies, genres }
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}
