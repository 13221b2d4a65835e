//! CLI command implementations

pub mod doctor;
pub mod init;
pub mod plan;
pub mod run;

pub use doctor::execute as doctor;
pub use init::execute as init;
pub use plan::execute as plan;
pub use run::execute as run;
