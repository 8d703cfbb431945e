//! Pile Animation Model
//! Frame geometry for the displacement-along-the-pile animation.

use crate::data::TimeSeriesTable;
use std::sync::Arc;
use std::time::Duration;

/// Horizontal padding applied to the largest absolute displacement.
pub const AXIS_PADDING: f64 = 1.2;

/// `count` evenly spaced depths from 0 (pile top) to `pile_length` (pile bottom), inclusive.
pub fn node_positions(pile_length: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let step = pile_length / (count - 1) as f64;
            (0..count)
                .map(|i| if i == count - 1 { pile_length } else { i as f64 * step })
                .collect()
        }
    }
}

/// Symmetric horizontal bound: 1.2 times the largest absolute displacement.
///
/// Empty tables, or tables holding non-finite values, give 0.
pub fn axis_bound(displacement: &TimeSeriesTable) -> f64 {
    use statrs::statistics::Statistics;

    let peak = displacement.values().abs_max();
    if peak.is_finite() {
        AXIS_PADDING * peak
    } else {
        0.0
    }
}

/// Duration of the first simulation time step.
pub fn frame_interval(time: &[f64]) -> Option<Duration> {
    let step = match time {
        [first, second, ..] => second - first,
        _ => return None,
    };
    if step > 0.0 {
        Duration::try_from_secs_f64(step).ok()
    } else {
        None
    }
}

/// One rendered instant of the animation.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub index: usize,
    /// Simulation time in seconds.
    pub time: f64,
    /// `[displacement, depth]` per node, top to bottom.
    pub points: Vec<[f64; 2]>,
}

/// Everything needed to animate pile displacement over time.
#[derive(Debug, Clone, PartialEq)]
pub struct PileAnimation {
    displacement: TimeSeriesTable,
    pile_length: f64,
    depths: Vec<f64>,
    axis_bound: f64,
    frame_interval: Option<Duration>,
}

impl PileAnimation {
    pub fn new(displacement: TimeSeriesTable, pile_length: f64) -> Self {
        let depths = node_positions(pile_length, displacement.node_count());
        let axis_bound = axis_bound(&displacement);
        let frame_interval = frame_interval(displacement.time());

        Self {
            displacement,
            pile_length,
            depths,
            axis_bound,
            frame_interval,
        }
    }

    pub fn pile_length(&self) -> f64 {
        self.pile_length
    }

    pub fn depths(&self) -> &[f64] {
        &self.depths
    }

    pub fn axis_bound(&self) -> f64 {
        self.axis_bound
    }

    pub fn frame_interval(&self) -> Option<Duration> {
        self.frame_interval
    }

    /// Number of frames a full playback renders.
    pub fn frame_count(&self) -> usize {
        self.displacement.time_steps()
    }

    /// Frame for one time step.
    pub fn frame(&self, index: usize) -> Option<Frame> {
        let time = *self.displacement.time().get(index)?;
        let row = self.displacement.row(index)?;
        let points = row
            .into_iter()
            .zip(&self.depths)
            .map(|(d, &depth)| [d, depth])
            .collect();

        Some(Frame {
            index,
            time,
            points,
        })
    }

    /// A fresh playback from the first time step.
    ///
    /// Each sequence is consumed once; replaying means asking for a new one.
    pub fn frames(self: &Arc<Self>) -> FrameSequence {
        FrameSequence {
            animation: Arc::clone(self),
            next: 0,
        }
    }
}

/// Lazily built, finite run of frames.
#[derive(Debug)]
pub struct FrameSequence {
    animation: Arc<PileAnimation>,
    next: usize,
}

impl FrameSequence {
    pub fn is_finished(&self) -> bool {
        self.next >= self.animation.frame_count()
    }
}

impl Iterator for FrameSequence {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        let frame = self.animation.frame(self.next)?;
        self.next += 1;
        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.animation.frame_count().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for FrameSequence {}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> TimeSeriesTable {
        TimeSeriesTable::new(
            vec![0.0, 0.002, 0.004],
            vec![
                vec![0.0, 0.01, -0.03],
                vec![0.0, 0.005, 0.02],
                vec![0.0, -0.001, 0.004],
            ],
        )
    }

    #[test]
    fn positions_span_the_pile() {
        assert_eq!(node_positions(12.5, 3), vec![0.0, 6.25, 12.5]);
        assert_eq!(node_positions(10.0, 1), vec![0.0]);
        assert!(node_positions(10.0, 0).is_empty());
    }

    #[test]
    fn positions_increase_and_end_at_length() {
        let positions = node_positions(7.3, 11);
        assert_eq!(positions.len(), 11);
        assert_eq!(positions[0], 0.0);
        assert_eq!(positions[10], 7.3);
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn bound_pads_peak_absolute_displacement() {
        let bound = axis_bound(&table());
        assert!((bound - 1.2 * 0.03).abs() < 1e-12);
    }

    #[test]
    fn bound_of_empty_table_is_zero() {
        assert_eq!(axis_bound(&TimeSeriesTable::default()), 0.0);
    }

    #[test]
    fn interval_is_first_time_step() {
        let interval = frame_interval(&[0.5, 0.525, 0.6]).unwrap();
        assert_eq!(interval.as_millis(), 25);
        assert!(frame_interval(&[0.0]).is_none());
        assert!(frame_interval(&[1.0, 1.0]).is_none());
    }

    #[test]
    fn unrepresentable_step_has_no_interval() {
        assert!(frame_interval(&[0.0, 1e30]).is_none());
        assert!(frame_interval(&[0.0, f64::INFINITY]).is_none());
        assert!(frame_interval(&[f64::NAN, 1.0]).is_none());
    }

    #[test]
    fn sequence_yields_every_time_step_once() {
        let animation = Arc::new(PileAnimation::new(table(), 12.5));
        let mut frames = animation.frames();
        assert_eq!(frames.len(), 3);

        let first = frames.next().unwrap();
        assert_eq!(first.index, 0);
        assert_eq!(first.points, vec![[0.0, 0.0], [0.0, 6.25], [0.0, 12.5]]);

        let rest: Vec<Frame> = frames.by_ref().collect();
        assert_eq!(rest.len(), 2);
        assert_eq!(rest[1].time, 0.004);
        assert_eq!(rest[1].points[0], [-0.03, 0.0]);

        assert!(frames.is_finished());
        assert!(frames.next().is_none());
    }

    #[test]
    fn replay_needs_a_new_sequence() {
        let animation = Arc::new(PileAnimation::new(table(), 12.5));
        let played: Vec<Frame> = animation.frames().collect();
        let replayed: Vec<Frame> = animation.frames().collect();
        assert_eq!(played, replayed);
    }
}
