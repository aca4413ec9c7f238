mod cli_args;
mod cli_error;
mod run_plan;

pub use cli_args::*;
pub use cli_error::*;
pub use run_plan::*;
