//! Static placeholder data used until a live recommendation source exists.

use super::model::Movie;

fn movie(
    id: u64,
    title: &str,
    poster_path: &str,
    rating: f64,
    ml_confidence: f64,
    release_year: i32,
    genres: &[&str],
) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        poster_url: poster_path.to_string(),
        rating,
        ml_confidence,
        release_year,
        genres: genres.iter().map(|g| g.to_string()).collect(),
    }
}

/// The trending list shown on the dashboard when no catalog is configured.
/// Posters are bare TMDB paths, resolved at the configured size.
pub fn trending_movies() -> Vec<Movie> {
    vec![
        movie(1, "Inception", "/9gk7adHYeDMPS6ivNEmZwtI91a0.jpg", 8.8, 0.92, 2010, &["Sci-Fi", "Action", "Thriller"]),
        movie(2, "The Dark Knight", "/qJ2tW6WMCd7CKF81ChzWQKc67Il.jpg", 9.0, 0.89, 2008, &["Action", "Crime", "Drama"]),
        movie(3, "Interstellar", "/gEU2QniE6E77NI6lCu244MyJgZy.jpg", 8.6, 0.95, 2014, &["Sci-Fi", "Drama", "Adventure"]),
        movie(4, "Pulp Fiction", "/3W7v0eIac2zGmBRgHd2LYNQDMoD.jpg", 8.9, 0.87, 1994, &["Crime", "Drama"]),
        movie(5, "Fight Club", "/pB8BM7pdSp6B6Ih7QZ4DrQ3PchJ.jpg", 8.8, 0.91, 1999, &["Drama", "Thriller"]),
        movie(6, "The Matrix", "/f89U3ADr1oRoRCRn/NxjRHtRnr63v0eeEEQIaXEJWgIJ.jpg", 8.7, 0.93, 1999, &["Sci-Fi", "Action"]),
    ]
}

// ---------------------------------------------------------------------------
// Stats panel series
// ---------------------------------------------------------------------------

/// Headline numbers for the stats panel.
#[derive(Debug, Clone, PartialEq)]
pub struct UserStats {
    pub movies_watched: u32,
    pub avg_rating: f64,
    pub top_genre: String,
    /// Percent.
    pub model_accuracy: u32,
    pub avg_confidence: f64,
}

pub fn user_stats() -> UserStats {
    UserStats {
        movies_watched: 127,
        avg_rating: 8.2,
        top_genre: "Sci-Fi".to_string(),
        model_accuracy: 91,
        avg_confidence: 0.86,
    }
}

/// Share of watched movies per genre, in percent.
pub fn genre_shares() -> Vec<(&'static str, f64)> {
    vec![
        ("Sci-Fi", 35.0),
        ("Action", 25.0),
        ("Drama", 20.0),
        ("Thriller", 15.0),
        ("Comedy", 5.0),
    ]
}

/// Number of recommendations per model-confidence bucket.
pub fn confidence_buckets() -> Vec<(&'static str, u32)> {
    vec![
        ("0-20%", 5),
        ("20-40%", 12),
        ("40-60%", 25),
        ("60-80%", 38),
        ("80-100%", 45),
    ]
}

/// Monthly model accuracy, in percent.
pub fn accuracy_trend() -> Vec<(&'static str, f64)> {
    vec![
        ("Jan", 78.0),
        ("Feb", 82.0),
        ("Mar", 85.0),
        ("Apr", 87.0),
        ("May", 89.0),
        ("Jun", 91.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trending_ids_unique_and_in_range() {
        let movies = trending_movies();
        assert_eq!(movies.len(), 6);
        let mut ids: Vec<u64> = movies.iter().map(|m| m.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 6);
        for m in &movies {
            assert!((0.0..=10.0).contains(&m.rating), "{}", m.title);
            assert!((0.0..=1.0).contains(&m.ml_confidence), "{}", m.title);
        }
    }

    #[test]
    fn test_posters_resolve_at_requested_size() {
        let movies = trending_movies();
        assert_eq!(movies[0].poster_url, "/9gk7adHYeDMPS6ivNEmZwtI91a0.jpg");
        assert_eq!(
            movies[0].poster_source("w342"),
            "https://image.tmdb.org/t/p/w342/9gk7adHYeDMPS6ivNEmZwtI91a0.jpg"
        );
    }

    #[test]
    fn test_genre_shares_sum_to_100() {
        let total: f64 = genre_shares().iter().map(|(_, v)| v).sum();
        assert_eq!(total, 100.0);
    }
}
