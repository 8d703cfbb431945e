//! Charts module - Chart rendering

mod animation;
mod plotter;
mod renderer;

pub use animation::{
    axis_bound, frame_interval, node_positions, Frame, FrameSequence, PileAnimation, AXIS_PADDING,
};
pub use plotter::{
    node_label, ChartPlotter, SeriesChart, ACCELERATION_CHART, DISPLACEMENT_CHART, TIME_LABEL,
    VELOCITY_CHART,
};
pub use renderer::{RenderError, StaticChartRenderer, FALLBACK_FRAME_DELAY_MS};
