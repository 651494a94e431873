//! Presentation-facing state: MVI primitives and the counter screen.

pub mod counter;
pub mod mvi;
