use crate::prelude::*;
use std::sync::Arc;

/// Receipt returned by a ledger for a submitted transfer. A zero `code`
/// means the chain executed the transfer.
#[derive(Debug, Clone, Getters, Builder)]
pub struct TxReceipt {
    #[getset(get = "pub")]
    code: u32,

    #[getset(get = "pub")]
    tx_hash: String,

    /// Chain-provided diagnostic for non-zero codes; empty on success.
    #[getset(get = "pub")]
    raw_log: String,
}

/// All parameters of one transfer submission.
#[derive(Debug, Clone, Getters, Builder)]
pub struct TransferRequest {
    #[getset(get = "pub")]
    from: Address,

    #[getset(get = "pub")]
    to: Address,

    #[getset(get = "pub")]
    amount: u128,

    #[getset(get = "pub")]
    denom: String,

    #[getset(get = "pub")]
    fee: Fee,

    #[getset(get = "pub")]
    memo: String,
}

/// Capability the scheduler consumes from the underlying value-transfer
/// network: address resolution, balance queries and transfer submission.
#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// The sender's resolved address. Resolution happens once at client
    /// construction; a malformed credential never yields a client.
    fn own_address(&self) -> &Address;

    /// Derives the address of a freshly generated keypair. Fresh entropy on
    /// every call; the keypair is discarded right after derivation.
    async fn derive_fresh_address(&self) -> Result<Address, DerivationError>;

    /// Free balance of `address` in the smallest on-chain unit.
    async fn balance(&self, address: &Address, denom: &str) -> Result<u128, NetworkError>;

    /// Submits a transfer and waits for a chain-level receipt. Returns `Err`
    /// only when no receipt could be obtained at all.
    async fn submit_transfer(&self, request: &TransferRequest) -> Result<TxReceipt, SubmitError>;
}

#[async_trait]
impl<T: LedgerClient + ?Sized> LedgerClient for Arc<T> {
    fn own_address(&self) -> &Address {
        (**self).own_address()
    }

    async fn derive_fresh_address(&self) -> Result<Address, DerivationError> {
        (**self).derive_fresh_address().await
    }

    async fn balance(&self, address: &Address, denom: &str) -> Result<u128, NetworkError> {
        (**self).balance(address, denom).await
    }

    async fn submit_transfer(&self, request: &TransferRequest) -> Result<TxReceipt, SubmitError> {
        (**self).submit_transfer(request).await
    }
}
