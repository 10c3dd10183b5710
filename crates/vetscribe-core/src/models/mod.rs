//! Domain models for dental charting.

mod chart;
mod condition;
mod species;

pub use chart::*;
pub use condition::*;
pub use species::*;
