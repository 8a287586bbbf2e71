//! Six Pawns GUI
//!
//! A small window for playing the six-pawns line game against the
//! minimax AI.

use sixpawns::ui::SixPawnsApp;

fn main() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 420.0])
            .with_min_inner_size([720.0, 320.0])
            .with_title("Six Pawns"),
        ..Default::default()
    };

    eframe::run_native(
        "Six Pawns",
        options,
        Box::new(|cc| Ok(Box::new(SixPawnsApp::new(cc)))),
    )
}
