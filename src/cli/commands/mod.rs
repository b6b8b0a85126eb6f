//! CLI commands implementation.
//!
//! Each subcommand lives in its own module; shared progress and outcome
//! plumbing lives in `helpers`.

mod browse;
mod helpers;
mod search;
mod show;

pub use browse::cmd_browse;
pub use search::cmd_search;
pub use show::cmd_show;
