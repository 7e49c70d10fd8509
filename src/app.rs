use std::time::Instant;

use eframe::egui;

use crate::config::AppConfig;
use crate::state::{AppState, View};
use crate::ui::{dashboard, panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct CinescopeApp {
    pub state: AppState,
}

impl CinescopeApp {
    /// Build the app and fetch the trending list.
    pub fn new(config: AppConfig) -> Self {
        let mut state = AppState::new(config);
        state.load_trending();
        Self { state }
    }
}

impl Default for CinescopeApp {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl eframe::App for CinescopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply a debounced search, and wake up again when the next one is due.
        let now = Instant::now();
        if let Some(due) = self.state.tick(now) {
            ctx.request_repaint_after(due.saturating_duration_since(now));
        }

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: search & filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::search_filter(ui, &mut self.state);
            });

        // ---- Central panel: trending grid or stats ----
        egui::CentralPanel::default().show(ctx, |ui| match self.state.view {
            View::Dashboard => dashboard::trending(ui, &self.state),
            View::Stats => plot::stats_dashboard(ui, &self.state),
        });
    }
}
