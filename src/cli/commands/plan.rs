//! Plan command - show the resolved step sequence

use crate::cli::args::{OutputFormat, PlanArgs};
use crate::config::Config;
use crate::error::GroundworkResult;
use crate::provision::Plan;

/// Execute the plan command
pub async fn execute(args: PlanArgs, config: &Config) -> GroundworkResult<()> {
    let plan = Plan::build(config);

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&plan)?);
        }
        OutputFormat::Plain => {
            for step in &plan.steps {
                println!("{}", step.summary());
            }
        }
        OutputFormat::Table => {
            println!("{:<4} {:<32} COMMAND", "#", "STEP");
            for (i, step) in plan.steps.iter().enumerate() {
                println!("{:<4} {:<32} {}", i + 1, step.name(), step.summary());
            }
        }
    }

    Ok(())
}
