//! UI module for consistent CLI output
//!
//! Uses `cliclack` for styled output in interactive terminals with
//! automatic fallback to plain lines in CI/build-platform environments.
//! There are no prompts: a build phase has no one to answer them.

mod context;
mod output;
mod progress;

pub use context::UiContext;
pub use output::{
    intro, outro_success, outro_warn, remark, section, step_error_detail, step_ok_detail,
    step_warn_hint,
};
pub use progress::TaskSpinner;
