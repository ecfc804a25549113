//! Background animation state management.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use folio_core::{AnimationSpeed, BackgroundStyle};

use crate::rain::{self, RainColumn};
use crate::rng::Rng;

/// Background animation state.
///
/// Owns the rain columns and reacts to terminal resizes by recomputing the
/// column count from the frame area, preserving surviving drops. Advancing
/// accumulates whole frames from the elapsed clock, so an uneven poll
/// cadence never produces fractional cell movement.
#[derive(Debug)]
pub struct RainState {
    columns: Vec<RainColumn>,
    last_width: u16,
    last_height: u16,
    last_update_ms: u64,
    frame_acc_ms: u64,
    frame_count: u64,
    rng: Rng,
}

impl Default for RainState {
    fn default() -> Self {
        Self::new()
    }
}

impl RainState {
    /// Create a new background state seeded from the system clock.
    pub fn new() -> Self {
        Self::with_rng(Rng::from_entropy())
    }

    /// Create a background state with an explicit generator.
    pub fn with_rng(rng: Rng) -> Self {
        Self {
            columns: Vec::new(),
            last_width: 0,
            last_height: 0,
            last_update_ms: 0,
            frame_acc_ms: 0,
            frame_count: 0,
            rng,
        }
    }

    /// Render the background to the frame.
    pub fn render(
        &mut self,
        frame: &mut Frame,
        style: BackgroundStyle,
        elapsed_ms: u64,
        speed: AnimationSpeed,
    ) {
        if style == BackgroundStyle::None {
            // Keep the clock current so re-enabling doesn't replay the gap.
            self.last_update_ms = elapsed_ms;
            return;
        }

        let area = frame.area();
        self.advance(area.width, area.height, elapsed_ms, speed);

        let lines: Vec<Line> = (0..area.height)
            .map(|y| {
                let spans: Vec<Span> = (0..area.width)
                    .map(|x| rain::render_char(&self.columns, x, y, self.frame_count))
                    .collect();
                Line::from(spans)
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), area);
    }

    /// Resize if needed and advance the field by the elapsed whole frames.
    pub fn advance(&mut self, width: u16, height: u16, elapsed_ms: u64, speed: AnimationSpeed) {
        if self.columns.is_empty() && width > 0 {
            self.columns = rain::init_columns(width);
        } else if width != self.last_width {
            rain::resize_columns(&mut self.columns, width);
        }
        self.last_width = width;
        self.last_height = height;

        let delta_ms = elapsed_ms.saturating_sub(self.last_update_ms);
        self.last_update_ms = elapsed_ms;

        let interval = speed.rain_frame_interval_ms();
        self.frame_acc_ms += delta_ms;
        let frames = self.frame_acc_ms / interval;
        self.frame_acc_ms %= interval;

        rain::update(&mut self.columns, frames, height, &mut self.rng);
        self.frame_count = self.frame_count.wrapping_add(frames);
    }

    /// Column states, one per cell of the last seen width.
    pub fn columns(&self) -> &[RainColumn] {
        &self.columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> RainState {
        RainState::with_rng(Rng::from_seed(11))
    }

    #[test]
    fn column_count_follows_every_resize() {
        let mut s = state();
        for (width, t) in [(80u16, 0u64), (40, 100), (120, 200), (1, 300)] {
            s.advance(width, 24, t, AnimationSpeed::Normal);
            assert_eq!(s.columns().len(), width as usize);
        }
    }

    #[test]
    fn whole_frames_accumulate_across_uneven_ticks() {
        let mut s = state();
        s.advance(4, 1000, 0, AnimationSpeed::Normal);
        // 20ms + 20ms = one 33ms frame plus 7ms carried over.
        s.advance(4, 1000, 20, AnimationSpeed::Normal);
        assert_eq!(s.columns()[0].y, 1.0);
        s.advance(4, 1000, 40, AnimationSpeed::Normal);
        assert_eq!(s.columns()[0].y, 2.0);
    }

    #[test]
    fn speed_changes_frame_cadence() {
        let mut slow = state();
        let mut fast = state();
        slow.advance(4, 1000, 0, AnimationSpeed::Slow);
        fast.advance(4, 1000, 0, AnimationSpeed::Fast);
        slow.advance(4, 1000, 330, AnimationSpeed::Slow);
        fast.advance(4, 1000, 330, AnimationSpeed::Fast);
        assert!(fast.columns()[0].y > slow.columns()[0].y);
    }

    #[test]
    fn disabled_background_does_not_replay_the_gap() {
        let mut s = state();
        s.advance(4, 1000, 0, AnimationSpeed::Normal);
        // Simulate a long stretch with the effect off.
        s.last_update_ms = 10_000;
        s.advance(4, 1000, 10_033, AnimationSpeed::Normal);
        assert_eq!(s.columns()[0].y, 2.0);
    }
}
