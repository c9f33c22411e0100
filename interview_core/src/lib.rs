//! # Interview Core
//!
//! The engine of the interview simulator. This crate interfaces with
//! `interview_rules`, evaluates authored conditions, scores answers, and
//! sequences a playthrough from the first question to its ending.
//!
//! ## Core Components
//!
//! - **evaluator**: Pure predicates testing unlock and ending conditions
//! - **progression**: Answer processing and mood derivation
//! - **selection**: Picks the next eligible question from the pool
//! - **resolution**: Matches terminal state against the ending table
//! - **orchestrator**: The playthrough state machine and its event surface
//!
//! ## Design Philosophy
//!
//! - **State-Driven**: Every decision is a function of accumulated game state
//! - **Fail-Closed**: Bad input is rejected, bad content falls back to a
//!   default ending; the player never sees a raw error
//! - **Presentation-Agnostic**: The engine emits events and knows nothing
//!   about rendering, audio, or animation

pub mod evaluator;
pub mod orchestrator;
pub mod progression;
pub mod resolution;
pub mod selection;

pub use evaluator::*;
pub use orchestrator::*;
pub use progression::*;
pub use resolution::*;
pub use selection::*;
