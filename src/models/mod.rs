pub mod chart;
pub mod daily;
pub mod snapshot;
pub mod view;

pub use chart::*;
pub use daily::*;
pub use snapshot::*;
pub use view::*;
