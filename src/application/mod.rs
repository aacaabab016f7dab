pub mod appearance;
pub mod cli;
pub mod config;
pub mod engine;
pub mod logging;
pub mod replay;

pub use appearance::*;
pub use cli::*;
pub use config::*;
pub use engine::*;
pub use replay::{ReplayEvent, StepOutcome};
