//! Static Chart Renderer
//! Writes the viewer figures to image files with plotters.
//!
//! - Stacked time-series figure: displacement, velocity and acceleration panels
//!   sharing the time axis, exported as PNG.
//! - Pile animation: one GIF frame per time step, delayed by the simulation
//!   time step.

use crate::charts::plotter::{
    depth_label, node_label, SeriesChart, ACCELERATION_CHART, DISPLACEMENT_CHART, TIME_LABEL, VELOCITY_CHART,
};
use crate::charts::PileAnimation;
use crate::data::{SimulationOutput, TimeSeriesTable};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::fmt::Display;
use std::ops::Range;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

const STACKED_SIZE: (u32, u32) = (1000, 1200);
const ANIMATION_SIZE: (u32, u32) = (640, 800);

const FONT_SIZE_TITLE: u32 = 20;
const FONT_SIZE_LABEL: u32 = 15;
const LINE_WIDTH: u32 = 2;
const MARKER_SIZE: u32 = 4;

/// GIF frame delay when the time column has no usable first step.
pub const FALLBACK_FRAME_DELAY_MS: u32 = 100;

// Same colors as the interactive palette
const NODE_COLORS: [RGBColor; 10] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
    RGBColor(188, 189, 34),
    RGBColor(23, 190, 207),
];

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to render chart: {0}")]
    Drawing(String),
}

fn draw_err(err: impl Display) -> RenderError {
    RenderError::Drawing(err.to_string())
}

/// Min..max of the values padded by 15%, or by 0.5 for a (nearly) flat series.
pub fn padded_range(values: impl IntoIterator<Item = f64>) -> Range<f64> {
    let (min, max) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if min > max {
        return -1.0..1.0;
    }

    let range = max - min;
    let padding = if range < 1e-6 { 0.5 } else { range * 0.15 };
    (min - padding)..(max + padding)
}

/// First to last time stamp, widened to one second when the column cannot span an axis.
pub fn time_range(time: &[f64]) -> Range<f64> {
    match (time.first(), time.last()) {
        (Some(&start), Some(&end)) if end > start => start..end,
        (Some(&start), _) => start..start + 1.0,
        _ => 0.0..1.0,
    }
}

/// GIF delays are stored in centiseconds.
const GIF_DELAY_UNIT_MS: u32 = 10;

/// Delay between GIF frames in milliseconds.
///
/// Rounded to whole centiseconds, never below one, so a very short time step
/// does not encode as a zero delay.
pub fn gif_frame_delay_ms(animation: &PileAnimation) -> u32 {
    let Some(interval) = animation.frame_interval() else {
        return FALLBACK_FRAME_DELAY_MS;
    };
    let requested = u32::try_from(interval.as_millis()).unwrap_or(u32::MAX);
    let centis = (requested.saturating_add(GIF_DELAY_UNIT_MS / 2) / GIF_DELAY_UNIT_MS).max(1);
    let delay = centis.saturating_mul(GIF_DELAY_UNIT_MS);
    if delay != requested {
        log::info!(
            "GIF frame delay coarsened from {:?} to {} ms",
            interval,
            delay
        );
    }
    delay
}

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Write the three stacked time-series panels to a PNG file.
    pub fn render_stacked_png(output: &SimulationOutput, path: &Path) -> Result<(), RenderError> {
        let root = BitMapBackend::new(path, STACKED_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(draw_err)?;

        let panels = root.margin(10, 10, 10, 10).split_evenly((3, 1));
        let charts = [
            (&DISPLACEMENT_CHART, output.displacement()),
            (&VELOCITY_CHART, output.velocity()),
            (&ACCELERATION_CHART, output.acceleration()),
        ];
        let last = charts.len() - 1;

        for (idx, (area, (chart, table))) in panels.iter().zip(charts).enumerate() {
            Self::draw_series_panel(area, chart, output.time(), table, idx == last)?;
        }

        root.present().map_err(draw_err)?;
        log::info!("Stacked plot saved as '{}'", path.display());
        Ok(())
    }

    fn draw_series_panel(
        area: &DrawingArea<BitMapBackend<'_>, Shift>,
        chart: &SeriesChart,
        time: &[f64],
        table: &TimeSeriesTable,
        show_time_label: bool,
    ) -> Result<(), RenderError> {
        let mut ctx = ChartBuilder::on(area)
            .caption(chart.title, ("sans-serif", FONT_SIZE_TITLE))
            .margin(8)
            .x_label_area_size(if show_time_label { 45 } else { 30 })
            .y_label_area_size(80)
            .build_cartesian_2d(time_range(time), padded_range(table.values()))
            .map_err(draw_err)?;

        {
            let mut mesh = ctx.configure_mesh();
            mesh.y_desc(chart.y_label)
                .label_style(("sans-serif", FONT_SIZE_LABEL));
            if show_time_label {
                mesh.x_desc(TIME_LABEL);
            }
            mesh.draw().map_err(draw_err)?;
        }

        for (idx, values) in table.nodes().enumerate() {
            let color = NODE_COLORS[idx % NODE_COLORS.len()];
            ctx.draw_series(LineSeries::new(
                time.iter().copied().zip(values.iter().copied()),
                color.stroke_width(LINE_WIDTH),
            ))
            .map_err(draw_err)?
            .label(node_label(idx))
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(LINE_WIDTH))
            });
        }

        ctx.configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(("sans-serif", FONT_SIZE_LABEL))
            .draw()
            .map_err(draw_err)?;

        Ok(())
    }

    /// Encode every animation frame into a GIF. Returns the number of frames written.
    pub fn render_animation_gif(
        animation: &Arc<PileAnimation>,
        path: &Path,
    ) -> Result<usize, RenderError> {
        let delay_ms = gif_frame_delay_ms(animation);
        let root = BitMapBackend::gif(path, ANIMATION_SIZE, delay_ms)
            .map_err(draw_err)?
            .into_drawing_area();

        let bound = animation.axis_bound();
        let bound = if bound > 0.0 { bound } else { 1e-6 };
        let depth = animation.pile_length();
        let depth = if depth > 0.0 { depth } else { 1.0 };
        let color = NODE_COLORS[0];

        let mut written = 0;
        for frame in animation.frames() {
            root.fill(&WHITE).map_err(draw_err)?;

            let mut ctx = ChartBuilder::on(&root)
                .caption(
                    format!("Time: {:.3} s", frame.time),
                    ("sans-serif", FONT_SIZE_TITLE),
                )
                .margin(15)
                .x_label_area_size(45)
                .y_label_area_size(60)
                .build_cartesian_2d(-bound..bound, -depth..0.0)
                .map_err(draw_err)?;

            ctx.configure_mesh()
                .x_desc("Displacement (m)")
                .y_desc("Depth (m)")
                .y_label_formatter(&|v: &f64| depth_label(*v))
                .label_style(("sans-serif", FONT_SIZE_LABEL))
                .draw()
                .map_err(draw_err)?;

            let points: Vec<(f64, f64)> = frame
                .points
                .iter()
                .map(|&[displacement, depth]| (displacement, -depth))
                .collect();

            ctx.draw_series(LineSeries::new(
                points.iter().copied(),
                color.stroke_width(LINE_WIDTH),
            ))
            .map_err(draw_err)?;
            ctx.draw_series(
                points
                    .iter()
                    .map(|&point| Circle::new(point, MARKER_SIZE, color.filled())),
            )
            .map_err(draw_err)?;

            root.present().map_err(draw_err)?;
            written += 1;
        }

        log::info!(
            "Animation saved as '{}' ({} frames, {} ms per frame)",
            path.display(),
            written,
            delay_ms
        );
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padded_range_adds_fifteen_percent() {
        let range = padded_range([-1.0, 3.0]);
        assert!((range.start + 1.6).abs() < 1e-12);
        assert!((range.end - 3.6).abs() < 1e-12);
    }

    #[test]
    fn flat_series_gets_fixed_padding() {
        assert_eq!(padded_range([2.0, 2.0]), 1.5..2.5);
        assert_eq!(padded_range(std::iter::empty::<f64>()), -1.0..1.0);
    }

    #[test]
    fn time_range_covers_column() {
        assert_eq!(time_range(&[0.0, 0.5, 2.0]), 0.0..2.0);
        assert_eq!(time_range(&[3.0]), 3.0..4.0);
        assert_eq!(time_range(&[]), 0.0..1.0);
    }

    #[test]
    fn gif_delay_follows_first_step() {
        let table = TimeSeriesTable::new(vec![0.0, 0.04, 0.08], vec![vec![0.0, 0.1, 0.2]]);
        let animation = PileAnimation::new(table, 5.0);
        assert_eq!(gif_frame_delay_ms(&animation), 40);

        let single = PileAnimation::new(TimeSeriesTable::new(vec![0.0], vec![vec![0.0]]), 5.0);
        assert_eq!(gif_frame_delay_ms(&single), FALLBACK_FRAME_DELAY_MS);
    }

    #[test]
    fn short_steps_keep_a_visible_gif_delay() {
        let delay_for = |step: f64| {
            let table = TimeSeriesTable::new(vec![0.0, step], vec![vec![0.0, 0.1]]);
            gif_frame_delay_ms(&PileAnimation::new(table, 5.0))
        };
        assert_eq!(delay_for(0.002), 10);
        assert_eq!(delay_for(0.0001), 10);
        assert_eq!(delay_for(0.026), 30);
    }
}
