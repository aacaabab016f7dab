pub mod availability;
pub mod date_math;
pub mod date_range;
pub mod day_grid;
pub mod month_window;
pub mod selection;

pub use availability::*;
pub use date_math::*;
pub use date_range::*;
pub use day_grid::*;
pub use month_window::*;
pub use selection::*;
