//! CLI command handlers. Each command is in its own file.

mod check;
mod completions;
mod health;
mod inspect;

pub use check::run_check;
pub use completions::run_completions;
pub use health::run_health;
pub use inspect::run_inspect;
