//! Pure computations over snapshot records.
//!
//! Nothing in this module performs I/O or reads the clock; "today" is always
//! passed in by the caller.

pub mod aggregate;
pub mod dashboard;
pub mod normalize;
pub mod series;
pub mod streak;

pub use aggregate::aggregate;
pub use dashboard::assemble;
pub use normalize::{parse_line, parse_log};
pub use series::{calendar_days, heatmap, materialize, within};
pub use streak::{longest_streak, streak};
