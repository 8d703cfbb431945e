//! GUI module - viewer windows
//!
//! Both windows block the calling thread until the user closes them.

mod animation_viewer;
mod app;

pub use animation_viewer::AnimationViewer;
pub use app::StackedPlotsApp;

use crate::charts::PileAnimation;
use crate::data::SimulationOutput;
use eframe::egui;
use std::sync::Arc;

fn native_options(title: &str, size: [f32; 2]) -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(size)
            .with_min_inner_size([400.0, 400.0])
            .with_title(title),
        ..Default::default()
    }
}

/// Show the stacked displacement/velocity/acceleration charts.
pub fn show_stacked_plots(output: SimulationOutput) -> eframe::Result<()> {
    let title = "Pile Response";
    eframe::run_native(
        title,
        native_options(title, [1000.0, 1200.0]),
        Box::new(|cc| Ok(Box::new(StackedPlotsApp::new(cc, output)))),
    )
}

/// Play the pile displacement animation.
pub fn show_animation(animation: Arc<PileAnimation>) -> eframe::Result<()> {
    let title = "Pile Displacement Animation";
    eframe::run_native(
        title,
        native_options(title, [640.0, 800.0]),
        Box::new(|cc| Ok(Box::new(AnimationViewer::new(cc, animation)))),
    )
}
