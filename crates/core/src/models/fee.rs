use crate::prelude::*;

/// Fixed fee descriptor, constant across all attempts of a run.
#[derive(Debug, Clone, Getters, Builder)]
pub struct Fee {
    #[getset(get = "pub")]
    denom: String,

    /// Fee amount in the smallest on-chain unit. Attached as the tip on
    /// Substrate ledgers and counted into the pre-run cost estimate.
    #[getset(get = "pub")]
    amount: u128,

    /// Carried in the descriptor for ledgers that meter gas; only the cost
    /// estimate is derived from the descriptor on ledgers that do not.
    #[getset(get = "pub")]
    gas_limit: u64,
}
