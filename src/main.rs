#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use colorink::ColorInkApp;

fn main() -> eframe::Result {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 780.0])
            .with_title("ColorInk"),
        ..Default::default()
    };
    eframe::run_native(
        "colorink",
        native_options,
        Box::new(|cc| Ok(Box::new(ColorInkApp::new(cc)))),
    )
}
