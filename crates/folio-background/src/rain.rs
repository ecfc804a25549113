//! Glyph rain column logic.

use ratatui::{
    style::{Color, Style},
    text::Span,
};

use crate::chars::RAIN_CHARS;
use crate::rng::Rng;

/// Probability per frame that an off-screen drop recycles to the top.
pub const RESET_PROBABILITY: f64 = 0.025;

/// State for a single rain column.
#[derive(Debug, Clone)]
pub struct RainColumn {
    /// Current row of the drop head, in cells. Grows past the visible
    /// height until the drop recycles, so columns restart staggered.
    pub y: f32,
    /// Length of the fading trail behind the head.
    pub trail_length: usize,
    /// Seed for glyph selection, bumped on every recycle.
    pub char_seed: usize,
}

/// Initialize one column per cell of width, with drops starting at row 1.
pub fn init_columns(width: u16) -> Vec<RainColumn> {
    (0..width).map(|x| new_column(x as usize)).collect()
}

fn new_column(x: usize) -> RainColumn {
    RainColumn {
        y: 1.0,
        // Vary trail lengths between columns
        trail_length: 4 + (x * 11) % 8,
        char_seed: x * 17,
    }
}

/// Adjust the column list to a new width, preserving surviving drops.
pub fn resize_columns(columns: &mut Vec<RainColumn>, width: u16) {
    let width = width as usize;
    if width < columns.len() {
        columns.truncate(width);
    } else {
        for x in columns.len()..width {
            columns.push(new_column(x));
        }
    }
}

/// Advance every column by `frames` cells, recycling off-screen drops.
pub fn update(columns: &mut [RainColumn], frames: u64, height: u16, rng: &mut Rng) {
    for _ in 0..frames {
        for col in columns.iter_mut() {
            col.y += 1.0;
            // Past the bottom edge the drop keeps descending until an
            // independent coin flip recycles it, so columns restart out of
            // phase with each other.
            if col.y > height as f32 && rng.chance(RESET_PROBABILITY) {
                col.y = 0.0;
                col.char_seed = col.char_seed.wrapping_add(1);
            }
        }
    }
}

/// Render the rain character at the given cell.
pub fn render_char(columns: &[RainColumn], x: u16, y: u16, frame: u64) -> Span<'static> {
    let x = x as usize;
    let y_f = y as f32;

    if x >= columns.len() {
        return Span::raw(" ");
    }

    let col = &columns[x];
    let head_y = col.y;
    let tail_y = head_y - col.trail_length as f32;

    // Cells between tail and head form the fading trail left by the head;
    // a terminal has no alpha overlay, so the fade is an intensity ramp.
    if y_f >= tail_y && y_f <= head_y {
        let distance_from_head = head_y - y_f;
        let intensity = 1.0 - (distance_from_head / col.trail_length as f32);

        let ch = glyph_at(col, y, frame);

        let color = if distance_from_head < 1.0 {
            Color::Rgb(200, 255, 200) // Bright head
        } else {
            let g = (80.0 + 140.0 * intensity) as u8;
            let r = (30.0 * intensity) as u8;
            Color::Rgb(r, g, r)
        };

        Span::styled(ch.to_string(), Style::new().fg(color))
    } else {
        Span::raw(" ")
    }
}

/// Pick a glyph for a cell, churning every frame.
fn glyph_at(col: &RainColumn, y: u16, frame: u64) -> char {
    let idx = col
        .char_seed
        .wrapping_add((y as usize).wrapping_mul(31))
        .wrapping_add((frame as usize).wrapping_mul(7));
    RAIN_CHARS[idx % RAIN_CHARS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_drop_per_column() {
        let columns = init_columns(40);
        assert_eq!(columns.len(), 40);
    }

    #[test]
    fn resize_matches_column_count_to_width() {
        let mut columns = init_columns(40);
        for width in [0u16, 1, 39, 40, 41, 200, 7] {
            resize_columns(&mut columns, width);
            assert_eq!(columns.len(), width as usize, "width = {width}");
        }
    }

    #[test]
    fn resize_preserves_surviving_drop_progress() {
        let mut columns = init_columns(10);
        let mut rng = Rng::from_seed(1);
        update(&mut columns, 5, 100, &mut rng);
        let y_before = columns[3].y;
        resize_columns(&mut columns, 20);
        assert_eq!(columns[3].y, y_before);
    }

    #[test]
    fn drops_advance_one_cell_per_frame() {
        let mut columns = init_columns(4);
        let mut rng = Rng::from_seed(1);
        // Tall field so no drop can go off-screen and recycle.
        update(&mut columns, 10, 1000, &mut rng);
        for col in &columns {
            assert_eq!(col.y, 11.0);
        }
    }

    #[test]
    fn every_column_eventually_recycles() {
        let mut columns = init_columns(30);
        let seeds: Vec<usize> = columns.iter().map(|c| c.char_seed).collect();
        let mut rng = Rng::from_seed(99);
        // With p=0.025 per off-screen frame, 20k frames over a height of 10
        // recycle each column hundreds of times over.
        update(&mut columns, 20_000, 10, &mut rng);
        for (col, seed) in columns.iter().zip(seeds) {
            assert_ne!(col.char_seed, seed);
        }
    }

    #[test]
    fn recycling_is_not_synchronized() {
        let mut columns = init_columns(30);
        let mut rng = Rng::from_seed(5);
        update(&mut columns, 500, 10, &mut rng);
        let first = columns[0].y;
        assert!(columns.iter().any(|c| c.y != first));
    }

    #[test]
    fn out_of_range_cell_renders_blank() {
        let columns = init_columns(2);
        assert_eq!(render_char(&columns, 5, 0, 0).content, " ");
    }

    #[test]
    fn head_cell_renders_a_rain_glyph() {
        let columns = init_columns(2);
        let span = render_char(&columns, 0, 1, 0);
        let ch = span.content.chars().next().unwrap();
        assert!(crate::chars::RAIN_CHARS.contains(&ch));
    }

    #[test]
    fn cells_outside_the_trail_are_blank() {
        let mut columns = init_columns(1);
        columns[0].y = 5.0;
        columns[0].trail_length = 3;
        assert_eq!(render_char(&columns, 0, 1, 0).content, " ");
        assert_ne!(render_char(&columns, 0, 4, 0).content, " ");
    }
}
