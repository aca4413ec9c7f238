use codec::Decode;
use rand::{rngs::OsRng, RngCore};
use sp_core::{sr25519, Pair};
use std::str::FromStr;
use std::time::Duration;
use subxt::{
    config::DefaultExtrinsicParamsBuilder,
    dynamic::Value,
    error::DispatchError,
    tx::DynamicPayload,
    utils::AccountId32,
    OnlineClient, PolkadotConfig,
};

use crate::prelude::*;

/// Api handle to the node.
pub type Api = OnlineClient<PolkadotConfig>;

/// Maximal number of connection attempts.
const MAX_ATTEMPTS: usize = 10;
/// Delay period between failed connection attempts.
const RETRY_DELAY: Duration = Duration::from_secs(1);

// Chains with a different `AccountInfo` layout would need their own decode
// path; the standard frame-system/pallet-balances layout covers the targets
// this tool is used against.
type AccountInfo = frame_system::AccountInfo<u32, pallet_balances::AccountData<u128>>;

/// [`LedgerClient`] backed by a Substrate node over subxt.
///
/// The `denom` of queries is a display symbol only; this client always
/// serves the chain's native token. Memos are attached by batching a
/// `System.remark` atomically with the transfer.
pub struct SubstrateLedger {
    api: Api,
    signer: SenderSigner,
    own_address: Address,
}

impl SubstrateLedger {
    /// Resolves the sender identity from `suri` and connects to `url`.
    ///
    /// Both failure modes are fatal to a run: a malformed credential and a
    /// node that stays unreachable after the retry budget.
    pub async fn connect(url: &Url, suri: &str) -> Result<Self> {
        let signer = SenderSigner::from_suri(suri)?;
        let own_address = Address::new(signer.account().to_string());
        let api = connect_with_retries(url).await?;
        Ok(Self {
            api,
            signer,
            own_address,
        })
    }
}

async fn connect_with_retries(url: &Url) -> Result<Api, NetworkError> {
    for attempt in 1..=MAX_ATTEMPTS {
        info!("Attempt #{attempt}: connecting to {url}");
        match Api::from_url(url.as_str()).await {
            Ok(api) => return Ok(api),
            Err(err) => {
                warn!("Node {url} not reachable: {err:?}");
                tokio::time::sleep(RETRY_DELAY).await;
            }
        }
    }
    Err(NetworkError {
        underlying: format!("failed to connect to {url} after {MAX_ATTEMPTS} attempts"),
    })
}

fn network_error(e: subxt::Error) -> NetworkError {
    NetworkError {
        underlying: format!("{e:?}"),
    }
}

/// Non-zero receipt codes for the dispatch-error families.
fn dispatch_code(err: &DispatchError) -> u32 {
    match err {
        DispatchError::Module(_) => 1,
        DispatchError::Token(_) => 2,
        DispatchError::Arithmetic(_) => 3,
        _ => 255,
    }
}

fn transfer_payload(request: &TransferRequest, to: &AccountId32) -> DynamicPayload {
    let transfer = subxt::dynamic::tx(
        "Balances",
        "transfer_keep_alive",
        vec![
            Value::unnamed_variant("Id", [Value::from_bytes(to.0)]),
            Value::u128(*request.amount()),
        ],
    );
    let remark = subxt::dynamic::tx(
        "System",
        "remark",
        vec![Value::from_bytes(request.memo().as_bytes())],
    );
    // The memo rides in the same extrinsic as the transfer.
    let calls = vec![transfer.into_value(), remark.into_value()];
    subxt::dynamic::tx("Utility", "batch_all", vec![Value::from(calls)])
}

#[async_trait]
impl LedgerClient for SubstrateLedger {
    fn own_address(&self) -> &Address {
        &self.own_address
    }

    async fn derive_fresh_address(&self) -> Result<Address, DerivationError> {
        let mut seed = [0u8; 32];
        OsRng
            .try_fill_bytes(&mut seed)
            .map_err(|e| DerivationError {
                underlying: format!("entropy source failed: {e}"),
            })?;
        let pair = sr25519::Pair::from_seed_slice(&seed).map_err(|e| DerivationError {
            underlying: format!("{e:?}"),
        })?;
        // The keypair only lives long enough to derive its address.
        let fresh = SenderSigner::from_pair(pair);
        Ok(Address::new(fresh.account().to_string()))
    }

    async fn balance(&self, address: &Address, _denom: &str) -> Result<u128, NetworkError> {
        let account = AccountId32::from_str(address.as_str()).map_err(|e| NetworkError {
            underlying: format!("bad address {address}: {e:?}"),
        })?;
        let storage_addr =
            subxt::dynamic::storage("System", "Account", vec![Value::from_bytes(account.0)]);
        let encoded = self
            .api
            .storage()
            .at_latest()
            .await
            .map_err(network_error)?
            .fetch(&storage_addr)
            .await
            .map_err(network_error)?
            .map(|v| v.into_encoded());
        let Some(encoded) = encoded else {
            // Account not on chain yet.
            return Ok(0);
        };
        let account_state: AccountInfo =
            Decode::decode(&mut &encoded[..]).map_err(|e| NetworkError {
                underlying: format!("undecodable account state: {e}"),
            })?;
        Ok(account_state.data.free)
    }

    async fn submit_transfer(&self, request: &TransferRequest) -> Result<TxReceipt, SubmitError> {
        let to = AccountId32::from_str(request.to().as_str()).map_err(|e| {
            SubmitError::Validation {
                underlying: format!("bad destination address {}: {e:?}", request.to()),
            }
        })?;
        let payload = transfer_payload(request, &to);
        let params = DefaultExtrinsicParamsBuilder::<PolkadotConfig>::new()
            .tip(*request.fee().amount())
            .build();

        let progress = self
            .api
            .tx()
            .sign_and_submit_then_watch(&payload, &self.signer, params)
            .await
            .map_err(|e| SubmitError::Transport {
                underlying: format!("{e:?}"),
            })?;
        let tx_hash = format!("{:?}", progress.extrinsic_hash());
        debug!("Submitted {tx_hash}, waiting for finalization");

        match progress.wait_for_finalized_success().await {
            Ok(_) => Ok(TxReceipt::builder()
                .code(0)
                .tx_hash(tx_hash)
                .raw_log(String::new())
                .build()),
            Err(subxt::Error::Runtime(dispatch)) => Ok(TxReceipt::builder()
                .code(dispatch_code(&dispatch))
                .tx_hash(tx_hash)
                .raw_log(dispatch.to_string())
                .build()),
            Err(e) => Err(SubmitError::Transport {
                underlying: format!("{e:?}"),
            }),
        }
    }
}
