//! Pile Animation Window
//! Plays the displacement profile of the pile frame by frame.

use crate::charts::{ChartPlotter, Frame, FrameSequence, PileAnimation};
use egui::{Color32, RichText};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Viewer window stepping through a [`FrameSequence`].
///
/// At most one frame is shown per frame interval, so a slow redraw stretches
/// playback instead of dropping frames.
pub struct AnimationViewer {
    animation: Arc<PileAnimation>,
    frames: FrameSequence,
    current: Option<Frame>,
    last_advance: Option<Instant>,
}

impl AnimationViewer {
    pub fn new(_cc: &eframe::CreationContext<'_>, animation: Arc<PileAnimation>) -> Self {
        let frames = animation.frames();
        Self {
            animation,
            frames,
            current: None,
            last_advance: None,
        }
    }

    /// Whether the next frame is due at `now`.
    fn is_due(last_advance: Option<Instant>, interval: Option<Duration>, now: Instant) -> bool {
        match (last_advance, interval) {
            (None, _) => true,
            (Some(last), Some(interval)) => now.duration_since(last) >= interval,
            (Some(_), None) => true,
        }
    }

    fn advance(&mut self, now: Instant) {
        if !Self::is_due(self.last_advance, self.animation.frame_interval(), now) {
            return;
        }
        if let Some(frame) = self.frames.next() {
            self.current = Some(frame);
            self.last_advance = Some(now);
        }
    }

    /// Start over with a new frame sequence.
    fn replay(&mut self) {
        self.frames = self.animation.frames();
        self.current = None;
        self.last_advance = None;
    }
}

impl eframe::App for AnimationViewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.advance(Instant::now());

        if !self.frames.is_finished() {
            match self.animation.frame_interval() {
                Some(interval) => ctx.request_repaint_after(interval),
                None => ctx.request_repaint(),
            }
        }

        egui::TopBottomPanel::top("animation_header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let time_text = self
                    .current
                    .as_ref()
                    .map(|frame| format!("Time: {:.3} s", frame.time))
                    .unwrap_or_else(|| "Time: -".to_string());
                ui.label(RichText::new(time_text).size(16.0).strong());

                ui.add_space(20.0);
                let progress = format!(
                    "Frame {}/{}",
                    self.current.as_ref().map_or(0, |frame| frame.index + 1),
                    self.animation.frame_count()
                );
                ui.label(RichText::new(progress).size(12.0).color(Color32::GRAY));

                if self.frames.is_finished() {
                    ui.add_space(20.0);
                    if ui.button("Replay").clicked() {
                        self.replay();
                        ctx.request_repaint();
                    }
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| match &self.current {
            Some(frame) => ChartPlotter::draw_pile_profile(ui, &self.animation, frame),
            None => {
                ui.centered_and_justified(|ui| {
                    ui.label(RichText::new("No Data").size(20.0));
                });
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_is_due_immediately() {
        let now = Instant::now();
        assert!(AnimationViewer::is_due(None, Some(Duration::from_millis(50)), now));
    }

    #[test]
    fn next_frame_waits_for_interval() {
        let start = Instant::now();
        let interval = Some(Duration::from_millis(50));

        assert!(!AnimationViewer::is_due(
            Some(start),
            interval,
            start + Duration::from_millis(20)
        ));
        assert!(AnimationViewer::is_due(
            Some(start),
            interval,
            start + Duration::from_millis(50)
        ));
    }
}
