/// Data layer: movie model, mock data, catalog loading and filtering.
///
/// Architecture:
/// ```text
///  mock list │ .json / .csv / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  fetch_trending → Vec<Movie>
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ MovieCatalog  │  Vec<Movie>, genre index
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  FilterCriteria → visible indices
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod mock;
pub mod model;
