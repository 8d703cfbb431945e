//! Chart Plotter Module
//! Draws the interactive charts with egui_plot.

use crate::charts::{Frame, PileAnimation};
use crate::data::TimeSeriesTable;
use egui::{Color32, RichText, Vec2b};
use egui_plot::{Legend, Line, Plot, PlotBounds, PlotPoints, Points};

/// Smallest half-width shown for the animation, so a motionless pile still gets an axis.
const MIN_AXIS_BOUND: f64 = 1e-6;

/// Color palette for nodes
pub const PALETTE: [Color32; 10] = [
    Color32::from_rgb(31, 119, 180),  // Blue
    Color32::from_rgb(255, 127, 14),  // Orange
    Color32::from_rgb(44, 160, 44),   // Green
    Color32::from_rgb(214, 39, 40),   // Red
    Color32::from_rgb(148, 103, 189), // Purple
    Color32::from_rgb(140, 86, 75),   // Brown
    Color32::from_rgb(227, 119, 194), // Pink
    Color32::from_rgb(127, 127, 127), // Grey
    Color32::from_rgb(188, 189, 34),  // Olive
    Color32::from_rgb(23, 190, 207),  // Cyan
];

pub const PROFILE_COLOR: Color32 = Color32::from_rgb(31, 119, 180);

/// Titles and labels of one time-series chart.
#[derive(Debug, Clone, Copy)]
pub struct SeriesChart {
    pub id: &'static str,
    pub title: &'static str,
    pub y_label: &'static str,
}

pub const DISPLACEMENT_CHART: SeriesChart = SeriesChart {
    id: "displacement",
    title: "Displacement vs Time for Each Node",
    y_label: "Displacement (m)",
};

pub const VELOCITY_CHART: SeriesChart = SeriesChart {
    id: "velocity",
    title: "Velocity vs Time for Each Node",
    y_label: "Velocity (m/s)",
};

pub const ACCELERATION_CHART: SeriesChart = SeriesChart {
    id: "acceleration",
    title: "Acceleration vs Time for Each Node",
    y_label: "Acceleration (m/s^2)",
};

pub const TIME_LABEL: &str = "Time (s)";

/// Link group of the stacked charts; panning or zooming one moves the time axis of all.
pub const TIME_AXIS_GROUP: &str = "pile_time_axis";

/// Only the time axis is shared, each chart keeps its own value range.
pub const TIME_AXIS_LINK: Vec2b = Vec2b { x: true, y: false };

/// Tick label of the depth axis, which is plotted negated.
pub fn depth_label(mark: f64) -> String {
    let depth = -mark;
    if depth.abs() < 1e-12 {
        "0.00".to_string()
    } else {
        format!("{depth:.2}")
    }
}

/// Legend entry of a node, 1-indexed.
pub fn node_label(index: usize) -> String {
    format!("Node {}", index + 1)
}

/// Creates the charts of the viewer windows using egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    pub fn get_node_color(index: usize) -> Color32 {
        PALETTE[index % PALETTE.len()]
    }

    /// One line per node against the shared time column.
    pub fn draw_time_series_chart(
        ui: &mut egui::Ui,
        chart: &SeriesChart,
        time: &[f64],
        table: &TimeSeriesTable,
        height: f32,
        show_time_label: bool,
    ) {
        ui.label(RichText::new(chart.title).size(14.0).strong());

        let mut plot = Plot::new(chart.id)
            .height(height)
            .legend(Legend::default())
            .show_grid(true)
            .y_axis_label(chart.y_label)
            .allow_scroll(false)
            .link_axis(TIME_AXIS_GROUP, TIME_AXIS_LINK)
            .link_cursor(TIME_AXIS_GROUP, TIME_AXIS_LINK);
        if show_time_label {
            plot = plot.x_axis_label(TIME_LABEL);
        }
        if let (Some(&start), Some(&end)) = (time.first(), time.last()) {
            plot = plot.include_x(start).include_x(end);
        }

        plot.show(ui, |plot_ui| {
            for (idx, values) in table.nodes().enumerate() {
                let points: PlotPoints = time
                    .iter()
                    .zip(values)
                    .map(|(&t, &v)| [t, v])
                    .collect();

                plot_ui.line(
                    Line::new(points)
                        .color(Self::get_node_color(idx))
                        .width(1.5)
                        .name(node_label(idx)),
                );
            }
        });
    }

    /// Pile profile at one frame: displacement across, depth down.
    ///
    /// Depth is plotted negated so the pile top sits at the top of the chart.
    pub fn draw_pile_profile(ui: &mut egui::Ui, animation: &PileAnimation, frame: &Frame) {
        let bound = animation.axis_bound().max(MIN_AXIS_BOUND);
        let pile_length = animation.pile_length();

        let points: Vec<[f64; 2]> = frame
            .points
            .iter()
            .map(|&[displacement, depth]| [displacement, -depth])
            .collect();

        Plot::new("pile_profile")
            .x_axis_label("Displacement (m)")
            .y_axis_label("Depth (m)")
            .show_grid(true)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .y_axis_formatter(|mark, _range| depth_label(mark.value))
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                    [-bound, -pile_length],
                    [bound, 0.0],
                ));

                plot_ui.line(
                    Line::new(PlotPoints::from_iter(points.iter().copied()))
                        .color(PROFILE_COLOR)
                        .width(2.0),
                );
                plot_ui.points(
                    Points::new(PlotPoints::from_iter(points.iter().copied()))
                        .radius(4.0)
                        .color(PROFILE_COLOR),
                );
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_labels_are_one_indexed() {
        assert_eq!(node_label(0), "Node 1");
        assert_eq!(node_label(11), "Node 12");
    }

    #[test]
    fn node_colors_cycle_through_palette() {
        assert_eq!(ChartPlotter::get_node_color(0), PALETTE[0]);
        assert_eq!(ChartPlotter::get_node_color(PALETTE.len() + 3), PALETTE[3]);
    }

    #[test]
    fn depth_labels_use_two_decimals() {
        assert_eq!(depth_label(-2.5000000000000004), "2.50");
        assert_eq!(depth_label(-0.30000000000000004), "0.30");
        assert_eq!(depth_label(-0.0), "0.00");
        assert_eq!(depth_label(1e-15), "0.00");
    }

    #[test]
    fn stacked_charts_share_only_the_time_axis() {
        assert!(TIME_AXIS_LINK.x);
        assert!(!TIME_AXIS_LINK.y);
    }
}
