//! Stacked Time-Series Window
//! Displacement, velocity and acceleration charts stacked over a shared time axis.

use crate::charts::{ChartPlotter, ACCELERATION_CHART, DISPLACEMENT_CHART, VELOCITY_CHART};
use crate::data::SimulationOutput;
use egui::RichText;

/// Vertical room taken by each chart's title and the spacing around it
const CHART_HEADER: f32 = 30.0;
const MIN_CHART_HEIGHT: f32 = 120.0;

/// Viewer window with three stacked time-series charts.
pub struct StackedPlotsApp {
    output: SimulationOutput,
}

impl StackedPlotsApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, output: SimulationOutput) -> Self {
        Self { output }
    }

    /// Height of one chart so that the three of them fill the panel.
    fn chart_height(available: f32) -> f32 {
        ((available - 3.0 * CHART_HEADER) / 3.0).max(MIN_CHART_HEIGHT)
    }
}

impl eframe::App for StackedPlotsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.output.time_steps() == 0 {
                ui.centered_and_justified(|ui| {
                    ui.label(RichText::new("No Data").size(20.0));
                });
                return;
            }

            let height = Self::chart_height(ui.available_height());
            let time = self.output.time();
            let charts = [
                (&DISPLACEMENT_CHART, self.output.displacement()),
                (&VELOCITY_CHART, self.output.velocity()),
                (&ACCELERATION_CHART, self.output.acceleration()),
            ];
            let last = charts.len() - 1;

            for (idx, (chart, table)) in charts.into_iter().enumerate() {
                ChartPlotter::draw_time_series_chart(ui, chart, time, table, height, idx == last);
                if idx != last {
                    ui.add_space(6.0);
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn charts_share_the_panel_height() {
        assert_eq!(StackedPlotsApp::chart_height(990.0), 300.0);
        assert_eq!(StackedPlotsApp::chart_height(200.0), MIN_CHART_HEIGHT);
    }
}
