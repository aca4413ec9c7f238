mod ledger;
mod signer;

pub use ledger::*;
pub use signer::*;
