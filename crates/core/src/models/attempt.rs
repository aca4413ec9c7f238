use crate::prelude::*;

/// Classified result of a single submission.
///
/// Chain-level status codes and raised transport errors are unified here at
/// the ledger boundary, so the scheduler only ever branches on this tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// The chain executed the transfer (zero status code).
    Success { tx_hash: String },
    /// The chain returned a non-zero status code.
    ChainRejected { code: u32, raw_log: String },
    /// The submission itself failed with a transport or validation error.
    SubmitError { reason: String },
}

impl AttemptOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// One iteration of the scheduling loop: the derived parameters of exactly
/// one transfer submission, plus its outcome.
#[derive(Debug, Clone, Getters, Builder)]
pub struct TransferAttempt {
    /// 1-based sequence number.
    #[getset(get = "pub")]
    index: u32,

    #[getset(get = "pub")]
    amount: u128,

    /// Pacing delay applied before this submission.
    #[getset(get = "pub")]
    delay_ms: u64,

    #[getset(get = "pub")]
    destination: Address,

    #[getset(get = "pub")]
    outcome: AttemptOutcome,
}
