use std::collections::BTreeSet;

use super::model::Movie;

/// Genre chips offered by the search bar.
pub const GENRES: [&str; 8] = [
    "Action", "Comedy", "Drama", "Sci-Fi", "Horror", "Romance", "Thriller", "Adventure",
];

pub const LATEST_YEAR: i32 = 2024;
pub const DEFAULT_MIN_YEAR: i32 = 1990;

/// Years offered by the year selectors, newest first (2024 down to 1995).
pub fn year_options() -> Vec<i32> {
    (0..30).map(|i| LATEST_YEAR - i).collect()
}

/// Genre chips to offer: the fixed list, then any other genre found in the
/// catalog.
pub fn genre_choices(catalog_genres: &BTreeSet<String>) -> Vec<String> {
    let mut choices: Vec<String> = GENRES.iter().map(|g| g.to_string()).collect();
    choices.extend(
        catalog_genres
            .iter()
            .filter(|g| !GENRES.contains(&g.as_str()))
            .cloned(),
    );
    choices
}

// ---------------------------------------------------------------------------
// Filter criteria: what the search bar has selected
// ---------------------------------------------------------------------------

/// Search bar state.
///
/// A movie passes when it matches every active part:
/// * `search_query` (trimmed) is empty, or the title contains it ignoring case
/// * `selected_genres` is empty, or the movie has at least one of them
/// * `rating >= min_rating`
/// * `release_year` lies in `year_min..=year_max`
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub search_query: String,
    pub selected_genres: BTreeSet<String>,
    pub min_rating: f64,
    pub year_min: i32,
    pub year_max: i32,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            selected_genres: BTreeSet::new(),
            min_rating: 0.0,
            year_min: DEFAULT_MIN_YEAR,
            year_max: LATEST_YEAR,
        }
    }
}

impl FilterCriteria {
    pub fn matches(&self, movie: &Movie) -> bool {
        let query = self.search_query.trim();
        if !query.is_empty() && !movie.title.to_lowercase().contains(&query.to_lowercase()) {
            return false;
        }
        if !self.selected_genres.is_empty()
            && !movie.genres.iter().any(|g| self.selected_genres.contains(g))
        {
            return false;
        }
        if movie.rating < self.min_rating {
            return false;
        }
        (self.year_min..=self.year_max).contains(&movie.release_year)
    }

    /// Select `genre` if it is not selected, deselect it otherwise.
    pub fn toggle_genre(&mut self, genre: &str) {
        if !self.selected_genres.remove(genre) {
            self.selected_genres.insert(genre.to_string());
        }
    }

    pub fn set_min_rating(&mut self, rating: f64) {
        self.min_rating = rating;
    }

    /// Set the inclusive year range; reversed bounds are swapped.
    pub fn set_year_range(&mut self, min: i32, max: i32) {
        self.year_min = min.min(max);
        self.year_max = min.max(max);
    }

    /// Whether anything differs from the show-everything default.
    pub fn is_active(&self) -> bool {
        *self != Self::default()
    }
}

/// Return indices of movies that pass `criteria`, in list order.
pub fn filtered_indices(movies: &[Movie], criteria: &FilterCriteria) -> Vec<usize> {
    movies
        .iter()
        .enumerate()
        .filter(|(_, m)| criteria.matches(m))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::mock::trending_movies;

    fn titles(criteria: &FilterCriteria) -> Vec<String> {
        let movies = trending_movies();
        filtered_indices(&movies, criteria)
            .into_iter()
            .map(|i| movies[i].title.clone())
            .collect()
    }

    #[test]
    fn test_default_shows_everything() {
        let criteria = FilterCriteria::default();
        assert!(!criteria.is_active());
        assert_eq!(titles(&criteria).len(), 6);
    }

    #[test]
    fn test_search_is_case_insensitive_and_trimmed() {
        let criteria = FilterCriteria {
            search_query: "  the ".into(),
            ..Default::default()
        };
        assert_eq!(titles(&criteria), ["The Dark Knight", "The Matrix"]);

        let criteria = FilterCriteria {
            search_query: "STELLAR".into(),
            ..Default::default()
        };
        assert_eq!(titles(&criteria), ["Interstellar"]);
    }

    #[test]
    fn test_genres_match_any_selected() {
        let mut criteria = FilterCriteria::default();
        criteria.toggle_genre("Crime");
        assert_eq!(titles(&criteria), ["The Dark Knight", "Pulp Fiction"]);

        criteria.toggle_genre("Adventure");
        assert_eq!(titles(&criteria), ["The Dark Knight", "Interstellar", "Pulp Fiction"]);

        criteria.toggle_genre("Crime");
        criteria.toggle_genre("Adventure");
        assert!(criteria.selected_genres.is_empty());
        assert!(!criteria.is_active());
    }

    #[test]
    fn test_min_rating_is_inclusive() {
        let mut criteria = FilterCriteria::default();
        criteria.set_min_rating(8.9);
        assert_eq!(titles(&criteria), ["The Dark Knight", "Pulp Fiction"]);
        criteria.set_min_rating(9.5);
        assert!(titles(&criteria).is_empty());
    }

    #[test]
    fn test_year_range() {
        let mut criteria = FilterCriteria::default();
        criteria.set_year_range(2009, 1995);
        assert_eq!((criteria.year_min, criteria.year_max), (1995, 2009));
        assert_eq!(titles(&criteria), ["The Dark Knight", "Fight Club", "The Matrix"]);

        criteria.set_year_range(2010, 2010);
        assert_eq!(titles(&criteria), ["Inception"]);
    }

    #[test]
    fn test_criteria_combine() {
        let mut criteria = FilterCriteria::default();
        criteria.toggle_genre("Sci-Fi");
        criteria.set_min_rating(8.7);
        criteria.set_year_range(2000, 2024);
        assert_eq!(titles(&criteria), ["Inception"]);
    }

    #[test]
    fn test_genre_choices_append_catalog_extras() {
        let catalog: BTreeSet<String> = ["Drama", "Crime", "Sci-Fi"].iter().map(|g| g.to_string()).collect();
        let choices = genre_choices(&catalog);
        assert_eq!(choices.len(), GENRES.len() + 1);
        assert_eq!(choices.last().map(String::as_str), Some("Crime"));
    }

    #[test]
    fn test_year_options() {
        let years = year_options();
        assert_eq!(years.len(), 30);
        assert_eq!(years.first(), Some(&2024));
        assert_eq!(years.last(), Some(&1995));
    }
}
