use eframe::egui::{self, Color32, RichText, Ui};

use crate::color::tone_color;
use crate::data::model::Movie;
use crate::util::classify::{confidence_color, rating_badge_color, rating_label};
use crate::util::format::{
    format_confidence, format_genres, format_rating, truncate_text, DEFAULT_MAX_GENRES,
};

pub const CARD_WIDTH: f32 = 200.0;
pub const CARD_HEIGHT: f32 = 400.0;
const POSTER_HEIGHT: f32 = 280.0;
const TITLE_MAX_CHARS: usize = 22;

// ---------------------------------------------------------------------------
// Movie card
// ---------------------------------------------------------------------------

/// Poster with rating and confidence badges, title, year, genres and a
/// match bar.
pub fn movie_card(ui: &mut Ui, movie: &Movie, poster_size: &str) {
    egui::Frame::group(ui.style())
        .fill(ui.visuals().extreme_bg_color)
        .show(ui, |ui: &mut Ui| {
            ui.set_width(CARD_WIDTH);

            ui.add(
                egui::Image::new(movie.poster_source(poster_size))
                    .fit_to_exact_size(egui::vec2(CARD_WIDTH, POSTER_HEIGHT))
                    .show_loading_spinner(true),
            );

            ui.horizontal(|ui: &mut Ui| {
                badge(
                    ui,
                    &format!("ML: {}", format_confidence(movie.ml_confidence)),
                    tone_color(confidence_color(movie.ml_confidence)),
                );
                badge(
                    ui,
                    &format!("★ {}", format_rating(movie.rating)),
                    tone_color(rating_badge_color(movie.rating)),
                );
            });

            ui.label(RichText::new(truncate_text(&movie.title, TITLE_MAX_CHARS)).strong().size(16.0))
                .on_hover_text(movie.title.as_str());
            ui.label(
                RichText::new(format!("{} · {}", movie.release_year, rating_label(movie.rating))).weak(),
            );

            let chip = ui.visuals().faint_bg_color;
            ui.horizontal_wrapped(|ui: &mut Ui| {
                for genre in format_genres(&movie.genres, DEFAULT_MAX_GENRES) {
                    ui.label(RichText::new(genre.as_str()).small().background_color(chip));
                }
            });

            ui.add(
                egui::ProgressBar::new(movie.ml_confidence.clamp(0.0, 1.0) as f32)
                    .desired_width(CARD_WIDTH)
                    .fill(tone_color(confidence_color(movie.ml_confidence)))
                    .text("Match"),
            );
        });
}

/// Placeholder shown while the trending list loads.
pub fn placeholder_card(ui: &mut Ui) {
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.set_min_size(egui::vec2(CARD_WIDTH, CARD_HEIGHT));
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.spinner();
        });
    });
}

fn badge(ui: &mut Ui, text: &str, color: Color32) {
    ui.label(
        RichText::new(text)
            .strong()
            .small()
            .color(Color32::BLACK)
            .background_color(color),
    );
}
