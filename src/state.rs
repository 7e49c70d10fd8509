use std::path::PathBuf;
use std::time::Instant;

use crate::config::AppConfig;
use crate::data::filter::{filtered_indices, FilterCriteria};
use crate::data::loader::fetch_trending;
use crate::data::model::{Movie, MovieCatalog};
use crate::util::debounce::Debounced;
use crate::util::stats::{calculate_stats, StatSummary};

/// Which page fills the central panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Dashboard,
    Stats,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: AppConfig,

    /// Movies of the session (empty until the first fetch completes).
    pub catalog: MovieCatalog,

    /// Search bar selections.
    pub criteria: FilterCriteria,

    /// Indices of movies passing `criteria` (cached).
    pub visible_indices: Vec<usize>,

    /// Text in the search box; copied into `criteria` once typing pauses.
    pub search_input: String,
    search: Debounced<String>,

    pub view: View,

    /// Status / error message shown in the top bar.
    pub status_message: Option<String>,

    /// Whether the trending list is still being fetched.
    pub loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let search = Debounced::new(config.search_debounce);
        Self {
            config,
            catalog: MovieCatalog::default(),
            criteria: FilterCriteria::default(),
            visible_indices: Vec::new(),
            search_input: String::new(),
            search,
            view: View::default(),
            status_message: None,
            loading: true,
        }
    }

    /// Fetch the trending list from the configured source.
    pub fn load_trending(&mut self) {
        self.loading = true;
        match fetch_trending(&self.config) {
            Ok(movies) => {
                log::info!("Loaded {} trending movies", movies.len());
                self.set_movies(movies);
            }
            Err(e) => self.fail_loading(&e),
        }
    }

    /// Switch to a catalog file picked by the user. The configured path
    /// only changes once the file has loaded.
    pub fn open_catalog(&mut self, path: PathBuf) {
        let config = AppConfig {
            catalog_path: Some(path),
            ..self.config.clone()
        };
        self.loading = true;
        match fetch_trending(&config) {
            Ok(movies) => {
                log::info!("Loaded {} movies from the opened catalog", movies.len());
                self.config = config;
                self.set_movies(movies);
            }
            Err(e) => self.fail_loading(&e),
        }
    }

    /// Ingest a freshly fetched movie list.
    pub fn set_movies(&mut self, movies: Vec<Movie>) {
        self.catalog = MovieCatalog::from_movies(movies);
        self.status_message = None;
        self.loading = false;
        self.refilter();
    }

    /// Record a failed fetch; the previous list stays on screen.
    pub fn fail_loading(&mut self, err: &anyhow::Error) {
        log::error!("Failed to fetch movies: {err:#}");
        self.status_message = Some(format!("Error: {err:#}"));
        self.loading = false;
    }

    /// Recompute `visible_indices` after a criteria change.
    pub fn refilter(&mut self) {
        self.visible_indices = filtered_indices(&self.catalog.movies, &self.criteria);
    }

    pub fn visible_movies(&self) -> impl Iterator<Item = &Movie> + '_ {
        self.visible_indices.iter().map(|&i| &self.catalog.movies[i])
    }

    // -- Search bar --

    /// The search box changed; the query is applied after the debounce delay.
    pub fn search_input_changed(&mut self, now: Instant) {
        self.search.call(self.search_input.clone(), now);
    }

    /// Apply a due search. Returns when the next check is needed, if a
    /// search is still pending.
    pub fn tick(&mut self, now: Instant) -> Option<Instant> {
        if let Some(query) = self.search.poll(now) {
            log::debug!("Applying search {query:?}");
            self.criteria.search_query = query;
            self.refilter();
        }
        self.search.deadline()
    }

    pub fn toggle_genre(&mut self, genre: &str) {
        self.criteria.toggle_genre(genre);
        self.refilter();
    }

    pub fn set_min_rating(&mut self, rating: f64) {
        self.criteria.set_min_rating(rating);
        self.refilter();
    }

    pub fn set_year_range(&mut self, min: i32, max: i32) {
        self.criteria.set_year_range(min, max);
        self.refilter();
    }

    /// Reset every filter, including a search still waiting on the debounce.
    pub fn clear_filters(&mut self) {
        self.search.cancel();
        self.search_input.clear();
        self.criteria = FilterCriteria::default();
        self.refilter();
    }

    // -- Stats panel --

    pub fn rating_stats(&self) -> StatSummary {
        let ratings: Vec<f64> = self.visible_movies().map(|m| m.rating).collect();
        calculate_stats(&ratings)
    }

    pub fn confidence_stats(&self) -> StatSummary {
        let confidences: Vec<f64> = self.visible_movies().map(|m| m.ml_confidence).collect();
        calculate_stats(&confidences)
    }
}
