//! Falling-glyph background effect for the folio terminal.
//!
//! A full-viewport "rain" of characters drifting down one drop per column,
//! recycling near-randomly once past the bottom edge. Purely cosmetic: the
//! effect owns no page state and draws behind every page at a fixed cadence,
//! independent of the boot-sequence engine.

mod chars;
mod rain;
mod rng;
mod state;

pub use rain::{RESET_PROBABILITY, RainColumn};
pub use rng::Rng;
pub use state::RainState;
