//! CLI command handlers, one file per command.

mod check;
mod completions;
mod resolve;
mod show_config;

pub use check::run_check;
pub use completions::run_completions;
pub use resolve::run_resolve;
pub use show_config::run_show_config;
