//! Report export for assembled charts.

mod report;

pub use report::*;
