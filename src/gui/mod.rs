use std::path::PathBuf;

use eframe::egui;

use crate::settings::Settings;

mod app;

pub use app::SunlytApp;

pub fn launch_gui(base_path: PathBuf, settings: Settings) -> eframe::Result<()> {
    let (width, height) = settings.ui.window_size.unwrap_or((1180.0, 760.0));
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Sunlyt")
            .with_inner_size([width, height])
            .with_min_inner_size([960.0, 620.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Sunlyt",
        native_options,
        Box::new(move |cc| Box::new(SunlytApp::new(cc, base_path.clone(), settings.clone()))),
    )
}
