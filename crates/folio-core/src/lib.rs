//! Core types shared across the folio portfolio terminal.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

pub mod theme;

/// The routed pages of the portfolio.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Home,
    About,
    Skills,
    Projects,
    Testimonials,
    Contact,
}

impl Page {
    /// All pages in navigation order.
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::About,
        Page::Skills,
        Page::Projects,
        Page::Testimonials,
        Page::Contact,
    ];

    /// Cycle to the next page.
    pub fn next(self) -> Self {
        match self {
            Page::Home => Page::About,
            Page::About => Page::Skills,
            Page::Skills => Page::Projects,
            Page::Projects => Page::Testimonials,
            Page::Testimonials => Page::Contact,
            Page::Contact => Page::Home,
        }
    }

    /// Cycle to the previous page.
    pub fn prev(self) -> Self {
        match self {
            Page::Home => Page::Contact,
            Page::About => Page::Home,
            Page::Skills => Page::About,
            Page::Projects => Page::Skills,
            Page::Testimonials => Page::Projects,
            Page::Contact => Page::Testimonials,
        }
    }

    /// Navbar label for this page.
    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "HOME",
            Page::About => "ABOUT",
            Page::Skills => "SKILLS",
            Page::Projects => "PROJECTS",
            Page::Testimonials => "TESTIMONIALS",
            Page::Contact => "CONTACT",
        }
    }

    /// Map a digit key (1-6) to a page.
    pub fn from_digit(digit: char) -> Option<Self> {
        match digit {
            '1' => Some(Page::Home),
            '2' => Some(Page::About),
            '3' => Some(Page::Skills),
            '4' => Some(Page::Projects),
            '5' => Some(Page::Testimonials),
            '6' => Some(Page::Contact),
            _ => None,
        }
    }

    /// Index of this page in [`Page::ALL`].
    pub fn index(self) -> usize {
        match self {
            Page::Home => 0,
            Page::About => 1,
            Page::Skills => 2,
            Page::Projects => 3,
            Page::Testimonials => 4,
            Page::Contact => 5,
        }
    }
}

/// Speed setting for background animations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationSpeed {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl AnimationSpeed {
    /// Cycle to the next speed setting.
    pub fn next(self) -> Self {
        match self {
            AnimationSpeed::Slow => AnimationSpeed::Normal,
            AnimationSpeed::Normal => AnimationSpeed::Fast,
            AnimationSpeed::Fast => AnimationSpeed::Slow,
        }
    }

    /// Redraw period of the glyph rain, in milliseconds.
    ///
    /// Normal is the observed 33ms (~30 FPS) cadence of the effect.
    pub fn rain_frame_interval_ms(self) -> u64 {
        match self {
            AnimationSpeed::Slow => 66,
            AnimationSpeed::Normal => 33,
            AnimationSpeed::Fast => 16,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AnimationSpeed::Slow => "slow",
            AnimationSpeed::Normal => "normal",
            AnimationSpeed::Fast => "fast",
        }
    }
}

/// Background effect selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackgroundStyle {
    None,
    #[default]
    GlyphRain,
}

impl BackgroundStyle {
    /// Toggle the background effect on or off.
    pub fn toggle(self) -> Self {
        match self {
            BackgroundStyle::None => BackgroundStyle::GlyphRain,
            BackgroundStyle::GlyphRain => BackgroundStyle::None,
        }
    }
}

/// Contact form submission state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl FormStatus {
    /// Status line shown on the submit control.
    pub fn label(self) -> &'static str {
        match self {
            FormStatus::Idle => "INITIALIZE_TRANSMISSION",
            FormStatus::Loading => "PROCESSING...",
            FormStatus::Success => "TRANSMISSION_COMPLETE",
            FormStatus::Error => "TRANSMISSION_FAILED",
        }
    }

    pub fn color(self) -> Color {
        match self {
            FormStatus::Idle => theme::TEXT,
            FormStatus::Loading => theme::ACCENT,
            FormStatus::Success => theme::BRIGHT,
            FormStatus::Error => Color::Rgb(240, 100, 100),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_cycle_visits_all_pages() {
        let mut page = Page::Home;
        for expected in Page::ALL {
            assert_eq!(page, expected);
            page = page.next();
        }
        assert_eq!(page, Page::Home);
    }

    #[test]
    fn page_prev_inverts_next() {
        for page in Page::ALL {
            assert_eq!(page.next().prev(), page);
        }
    }

    #[test]
    fn digit_keys_map_in_navigation_order() {
        for (i, digit) in ['1', '2', '3', '4', '5', '6'].into_iter().enumerate() {
            assert_eq!(Page::from_digit(digit), Some(Page::ALL[i]));
            assert_eq!(Page::ALL[i].index(), i);
        }
        assert_eq!(Page::from_digit('7'), None);
    }

    #[test]
    fn background_toggle_is_involutive() {
        assert_eq!(BackgroundStyle::GlyphRain.toggle().toggle(), BackgroundStyle::GlyphRain);
    }
}
