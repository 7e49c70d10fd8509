use cinescope::app::CinescopeApp;
use cinescope::config::AppConfig;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = AppConfig::from_env()
        .unwrap_or_else(|e| {
            log::warn!("{e}; using default settings");
            AppConfig::default()
        })
        .with_cli_catalog(std::env::args().nth(1));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Cinescope – Movie Recommendations",
        options,
        Box::new(move |cc| {
            // Install image loaders so egui can fetch and decode posters.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(CinescopeApp::new(config)))
        }),
    )
}
