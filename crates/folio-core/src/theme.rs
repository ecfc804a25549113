//! The cyberpunk-terminal palette.

use ratatui::style::Color;

/// Page surface, a near-black charcoal.
pub const SURFACE: Color = Color::Rgb(26, 26, 26);

/// Body text, pale green.
pub const TEXT: Color = Color::Rgb(200, 230, 201);

/// Accent green used for labels and borders.
pub const ACCENT: Color = Color::Rgb(129, 199, 132);

/// Bright terminal green for highlights.
pub const BRIGHT: Color = Color::Rgb(146, 247, 146);

/// Dimmed text for secondary detail.
pub const DIM: Color = Color::Rgb(100, 140, 102);
