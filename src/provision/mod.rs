//! Provisioning plan model and execution

pub mod plan;
pub mod runner;
pub mod step;

pub use plan::Plan;
pub use runner::{ProcessExecutor, Runner, StepExecutor};
pub use step::{CommandStep, Step};
