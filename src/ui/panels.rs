use std::time::Instant;

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::filter::{genre_choices, year_options};
use crate::state::{AppState, View};
use crate::util::format::{format_number, format_rating};

// ---------------------------------------------------------------------------
// Left side panel – search & filter bar
// ---------------------------------------------------------------------------

/// Render the search box and filter widgets.
pub fn search_filter(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Search & Filter");
    ui.separator();

    let search = ui.add(
        egui::TextEdit::singleline(&mut state.search_input)
            .hint_text("🔍 Search movies...")
            .desired_width(f32::INFINITY),
    );
    if search.changed() {
        state.search_input_changed(Instant::now());
    }
    ui.add_space(8.0);

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Genre chips ----
            ui.strong("🎬 Genres");
            let genres = genre_choices(&state.catalog.genres);
            ui.horizontal_wrapped(|ui: &mut Ui| {
                for genre in &genres {
                    let selected = state.criteria.selected_genres.contains(genre);
                    if ui.selectable_label(selected, genre.as_str()).clicked() {
                        state.toggle_genre(genre);
                    }
                }
            });
            ui.add_space(8.0);

            // ---- Minimum rating ----
            ui.strong("⭐ Min Rating");
            let mut min_rating = state.criteria.min_rating;
            let slider = ui.add(
                egui::Slider::new(&mut min_rating, 0.0..=10.0)
                    .step_by(0.5)
                    .show_value(false),
            );
            if slider.changed() {
                state.set_min_rating(min_rating);
            }
            ui.label(RichText::new(format!("{}+", format_rating(state.criteria.min_rating))).weak());
            ui.add_space(8.0);

            // ---- Year range ----
            ui.strong("📅 Year");
            let years = year_options();
            let (mut from, mut to) = (state.criteria.year_min, state.criteria.year_max);
            ui.horizontal(|ui: &mut Ui| {
                year_combo(ui, "year_from", &mut from, &years);
                ui.label("to");
                year_combo(ui, "year_to", &mut to, &years);
            });
            if (from, to) != (state.criteria.year_min, state.criteria.year_max) {
                state.set_year_range(from, to);
            }

            ui.separator();
            let any_filter = state.criteria.is_active() || !state.search_input.is_empty();
            if ui
                .add_enabled(any_filter, egui::Button::new("Clear filters"))
                .clicked()
            {
                state.clear_filters();
            }
        });
}

fn year_combo(ui: &mut Ui, id: &str, year: &mut i32, years: &[i32]) {
    egui::ComboBox::from_id_salt(id)
        .selected_text(year.to_string())
        .width(72.0)
        .show_ui(ui, |ui: &mut Ui| {
            for &y in years {
                ui.selectable_value(year, y, y.to_string());
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open catalog…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Reload").clicked() {
                state.load_trending();
                ui.close_menu();
            }
        });

        ui.separator();

        ui.selectable_value(&mut state.view, View::Dashboard, "🔥 Trending");
        ui.selectable_value(&mut state.view, View::Stats, "📊 Stats");

        ui.separator();

        if !state.loading {
            ui.label(format!(
                "{} movies, {} shown",
                format_number(state.catalog.len() as f64),
                state.visible_indices.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open movie catalog")
        .add_filter("Supported files", &["json", "csv", "parquet", "pq"])
        .add_filter("JSON", &["json"])
        .add_filter("CSV", &["csv"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        state.open_catalog(path);
    }
}
