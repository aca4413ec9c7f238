use crate::prelude::*;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Fatal run errors. Each of these surfaces before any transfer attempt is
/// made; per-attempt failures never show up here, they are recorded in the
/// attempt's outcome instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("sender identity unresolvable: {0}")]
    Identity(#[from] IdentityError),

    #[error("network error: {0}")]
    Network(#[from] NetworkError),

    #[error(
        "insufficient balance: {available} {denom} available, at least \
         {required} {denom} required for {tx_count} transfers"
    )]
    InsufficientBalance {
        available: u128,
        required: u128,
        denom: String,
        tx_count: u32,
    },
}

/// The sender credential could not be resolved into an address.
#[derive(Debug, thiserror::Error)]
#[error("{underlying}")]
pub struct IdentityError {
    pub underlying: String,
}

/// Fresh-keypair address derivation failed (entropy or formatting failure).
#[derive(Debug, thiserror::Error)]
#[error("{underlying}")]
pub struct DerivationError {
    pub underlying: String,
}

/// Connectivity failure talking to the node.
#[derive(Debug, thiserror::Error)]
#[error("{underlying}")]
pub struct NetworkError {
    pub underlying: String,
}

/// A submission failed without producing a chain-level receipt.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("transport error: {underlying}")]
    Transport { underlying: String },

    #[error("validation error: {underlying}")]
    Validation { underlying: String },
}
