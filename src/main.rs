mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use app::SunDashApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 820.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "SunDash – Solar Information Dashboard",
        options,
        Box::new(|cc| {
            // Install image loaders so egui can fetch and render the
            // live sun imagery (jpg over https).
            egui_extras::install_image_loaders(&cc.egui_ctx);

            let mut app = SunDashApp::default();

            // Optional: load the sunspot file named on the command line.
            if let Some(path) = std::env::args().nth(1).map(PathBuf::from) {
                match data::loader::load_file(&path) {
                    Ok(dataset) => {
                        log::info!("Loaded {} observations from {}", dataset.len(), path.display());
                        app.state.set_dataset(dataset);
                    }
                    Err(e) => {
                        log::error!("Failed to load {}: {e}", path.display());
                        app.state.status_message = Some(format!("Error: {e}"));
                    }
                }
            }

            Ok(Box::new(app))
        }),
    )
}
