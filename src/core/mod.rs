pub mod engine;
pub mod pipeline;
pub mod simulator;

pub use crate::domain::model::{CountingMode, Direction, Instruction, SimulationResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
