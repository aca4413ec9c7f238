mod address;
mod attempt;
mod cancel;
mod destination_mode;
mod error;
mod fee;
mod ledger;
mod pacing;
mod report;
mod run_config;
mod substrate;

pub use address::*;
pub use attempt::*;
pub use cancel::*;
pub use destination_mode::*;
pub use error::*;
pub use fee::*;
pub use ledger::*;
pub use pacing::*;
pub use report::*;
pub use run_config::*;
pub use substrate::*;
