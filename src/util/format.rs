//! Shared formatting helpers for cards, badges and the stats panel.

/// Number of genres shown on a movie card.
pub const DEFAULT_MAX_GENRES: usize = 3;

/// Poster size segment used when none is configured.
pub const DEFAULT_POSTER_SIZE: &str = "w500";

const TMDB_IMAGE_BASE: &str = "https://image.tmdb.org/t/p/";

/// Round `value` to `decimals` places, halves away from zero.
///
/// `format!("{:.1}", x)` breaks exact ties towards even, which turns
/// `86.5` into `"86"`; rounding first keeps the usual display behaviour.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

fn to_fixed(value: f64, decimals: usize) -> String {
    let rounded = round_to(value, decimals as u32);
    format!("{rounded:.decimals$}")
}

/// Rating on the 0–10 scale with one decimal (`8.8`). Out-of-range values
/// are formatted as-is.
pub fn format_rating(rating: f64) -> String {
    to_fixed(rating, 1)
}

/// Model confidence (0–1) as a whole percentage (`0.92` → `"92%"`).
pub fn format_confidence(confidence: f64) -> String {
    format!("{}%", to_fixed(confidence * 100.0, 0))
}

/// Abbreviate large counts: `1500` → `"1.5K"`, `2_500_000` → `"2.5M"`.
pub fn format_number(num: f64) -> String {
    if num >= 1_000_000.0 {
        format!("{}M", to_fixed(num / 1_000_000.0, 1))
    } else if num >= 1_000.0 {
        format!("{}K", to_fixed(num / 1_000.0, 1))
    } else {
        num.to_string()
    }
}

/// Cut `text` to `max_len` characters and append `...` when it is longer.
pub fn truncate_text(text: &str, max_len: usize) -> String {
    match text.char_indices().nth(max_len) {
        None => text.to_string(),
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
    }
}

/// The first `max` genres of a movie.
pub fn format_genres(genres: &[String], max: usize) -> &[String] {
    &genres[..genres.len().min(max)]
}

/// Full TMDB image URL for a poster path such as `/9gk7adHYeDMPS6ivNEmZwtI91a0.jpg`.
pub fn tmdb_poster_url(poster_path: &str, size: &str) -> String {
    format!("{TMDB_IMAGE_BASE}{size}{poster_path}")
}
