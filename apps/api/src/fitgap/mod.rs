// Fit-gap scoring engine.
// Pure and synchronous: no I/O, no shared state. Callers validate input before it gets here.

pub mod experience;
pub mod recommendations;
pub mod scoring;
pub mod skills;

pub use experience::{AlignmentTier, ExperienceEntry};
pub use scoring::{score, ScoreResult, Signal};
