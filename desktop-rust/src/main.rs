mod app;
mod model;

use app::DesktopApp;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "pH Strip Analyzer",
        options,
        Box::new(|_cc| Box::new(DesktopApp::default())),
    )
}
