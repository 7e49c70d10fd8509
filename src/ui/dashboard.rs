use eframe::egui::{self, RichText, ScrollArea, Ui};

use super::card::{movie_card, placeholder_card};
use crate::state::AppState;

const PLACEHOLDER_CARDS: usize = 8;

// ---------------------------------------------------------------------------
// Trending dashboard (central panel)
// ---------------------------------------------------------------------------

pub fn trending(ui: &mut Ui, state: &AppState) {
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.vertical_centered(|ui: &mut Ui| {
                ui.label(RichText::new("🎭 Movie Recommender").size(32.0).strong());
                ui.label("Discover movies tailored to your taste using AI and sentiment analysis");
            });
            ui.separator();

            ui.heading("🔥 Trending Now");
            ui.label(RichText::new("Browse trending movies with ML-powered recommendations").weak());
            ui.add_space(12.0);

            ui.horizontal_wrapped(|ui: &mut Ui| {
                ui.spacing_mut().item_spacing = egui::vec2(16.0, 16.0);

                if state.loading {
                    for _ in 0..PLACEHOLDER_CARDS {
                        placeholder_card(ui);
                    }
                    return;
                }

                if state.visible_indices.is_empty() {
                    ui.label("No movies match the current filters.");
                    return;
                }

                for movie in state.visible_movies() {
                    movie_card(ui, movie, &state.config.poster_size);
                }
            });
        });
}
