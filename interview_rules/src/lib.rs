//! # Interview Rules
//!
//! The "Interview Bible" crate - contains the authored content model
//! (questions, answers, endings, conditions), the scoring mechanics, and the
//! per-playthrough game state. This crate is the single source of truth for
//! interview data and does not contain any engine logic.

pub mod content;
pub mod game_state;
pub mod mechanics;

pub use content::*;
pub use game_state::*;
pub use mechanics::*;
