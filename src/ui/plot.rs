use eframe::egui::{self, RichText, ScrollArea, Ui};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints};

use crate::color::{tone_color, GenreColors};
use crate::data::mock::{self, UserStats};
use crate::state::AppState;
use crate::util::classify::{confidence_color, Tone};
use crate::util::format::{format_confidence, format_number, format_rating};
use crate::util::stats::StatSummary;

const CHART_HEIGHT: f32 = 260.0;

// ---------------------------------------------------------------------------
// Stats panel (central panel)
// ---------------------------------------------------------------------------

/// Headline numbers, catalog summaries and the three charts.
pub fn stats_dashboard(ui: &mut Ui, state: &AppState) {
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("📊 Your Movie Stats");
            ui.label(RichText::new("Visualize your taste profile and ML model predictions").weak());
            ui.add_space(8.0);

            headline_cards(ui, &mock::user_stats());
            ui.add_space(12.0);

            catalog_summary(ui, state);
            ui.add_space(12.0);

            ui.columns(2, |cols: &mut [Ui]| {
                genre_chart(&mut cols[0]);
                confidence_chart(&mut cols[1]);
            });
            ui.add_space(12.0);

            accuracy_chart(ui);
        });
}

fn headline_cards(ui: &mut Ui, stats: &UserStats) {
    let cards = [
        ("🎬", "Movies Watched", format_number(stats.movies_watched as f64)),
        ("⭐", "Avg Rating", format_rating(stats.avg_rating)),
        ("🎭", "Top Genre", stats.top_genre.clone()),
        ("🤖", "Model Accuracy", format!("{}%", stats.model_accuracy)),
        ("📈", "Avg Confidence", format_confidence(stats.avg_confidence)),
    ];

    ui.horizontal_wrapped(|ui: &mut Ui| {
        for (icon, label, value) in cards {
            egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
                ui.set_min_width(140.0);
                ui.vertical(|ui: &mut Ui| {
                    ui.label(RichText::new(icon).size(24.0));
                    ui.label(RichText::new(value).size(24.0).strong());
                    ui.label(RichText::new(label).weak());
                });
            });
        }
    });
}

/// Min / max / average / median over the movies currently shown.
fn catalog_summary(ui: &mut Ui, state: &AppState) {
    ui.strong(format!("Catalog ({} shown)", state.visible_indices.len()));

    egui::Grid::new("catalog_summary")
        .striped(true)
        .num_columns(5)
        .show(ui, |ui: &mut Ui| {
            for header in ["", "Min", "Max", "Avg", "Median"] {
                ui.strong(header);
            }
            ui.end_row();

            summary_row(ui, "Rating", &state.rating_stats(), format_rating);
            summary_row(ui, "Confidence", &state.confidence_stats(), format_confidence);
        });
}

fn summary_row(ui: &mut Ui, label: &str, summary: &StatSummary, fmt: fn(f64) -> String) {
    ui.label(label);
    for value in [summary.min, summary.max, summary.avg, summary.median] {
        ui.label(fmt(value));
    }
    ui.end_row();
}

// ---------------------------------------------------------------------------
// Charts
// ---------------------------------------------------------------------------

fn genre_chart(ui: &mut Ui) {
    ui.strong("Genre Preferences");

    let shares = mock::genre_shares();
    let colors = GenreColors::new(shares.iter().map(|(genre, _)| *genre));

    Plot::new("genre_preferences")
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .show_axes([false, true])
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            // one chart per genre so each gets a legend entry
            for (i, (genre, share)) in shares.iter().enumerate() {
                let bar = Bar::new(i as f64, *share).width(0.7);
                plot_ui.bar_chart(
                    BarChart::new(vec![bar])
                        .name(*genre)
                        .color(colors.color_for(genre)),
                );
            }
        });
}

fn confidence_chart(ui: &mut Ui) {
    ui.strong("ML Confidence Distribution");

    let buckets = mock::confidence_buckets();
    let labels: Vec<&'static str> = buckets.iter().map(|(range, _)| *range).collect();
    let bucket_width = 1.0 / buckets.len() as f64;

    Plot::new("confidence_distribution")
        .height(CHART_HEIGHT)
        .x_axis_formatter(move |mark, _range| category_label(&labels, mark.value))
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for (i, (range, count)) in buckets.iter().enumerate() {
                let tone = confidence_color(i as f64 * bucket_width);
                let bar = Bar::new(i as f64, *count as f64).width(0.7);
                plot_ui.bar_chart(BarChart::new(vec![bar]).name(*range).color(tone_color(tone)));
            }
        });
}

fn accuracy_chart(ui: &mut Ui) {
    ui.strong("Model Accuracy Over Time");

    let trend = mock::accuracy_trend();
    let labels: Vec<&'static str> = trend.iter().map(|(month, _)| *month).collect();

    Plot::new("accuracy_trend")
        .height(CHART_HEIGHT)
        .y_axis_label("Accuracy %")
        .x_axis_formatter(move |mark, _range| category_label(&labels, mark.value))
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            let points: PlotPoints = trend
                .iter()
                .enumerate()
                .map(|(i, (_, accuracy))| [i as f64, *accuracy])
                .collect();
            plot_ui.line(
                Line::new(points)
                    .name("Accuracy")
                    .color(tone_color(Tone::Green))
                    .width(3.0),
            );
        });
}

/// Axis label for a category chart: the label at whole-number positions,
/// nothing in between.
fn category_label(labels: &[&str], value: f64) -> String {
    let idx = value.round();
    if (value - idx).abs() > 1e-6 || idx < 0.0 {
        return String::new();
    }
    labels
        .get(idx as usize)
        .map(|s| s.to_string())
        .unwrap_or_default()
}
