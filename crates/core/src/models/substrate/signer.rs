use sp_core::{sr25519, Pair};
use sp_runtime::{
    traits::{IdentifyAccount, Verify},
    MultiSignature,
};
use subxt::{tx::Signer, utils::AccountId32, PolkadotConfig};

use crate::prelude::*;

/// sr25519 signer for the sending account.
#[derive(Clone)]
pub struct SenderSigner {
    account_id: AccountId32,
    pair: sr25519::Pair,
}

impl std::fmt::Debug for SenderSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SenderSigner({})", self.account_id)
    }
}

impl SenderSigner {
    /// Builds a signer from a secret URI (a `//Name` dev path or a mnemonic,
    /// optionally with a derivation path). Fails when the credential is
    /// malformed.
    pub fn from_suri(suri: &str) -> Result<Self, IdentityError> {
        let pair = sr25519::Pair::from_string(suri, None).map_err(|e| IdentityError {
            underlying: format!("{e:?}"),
        })?;
        Ok(Self::from_pair(pair))
    }

    pub fn from_pair(pair: sr25519::Pair) -> Self {
        let account_id = <MultiSignature as Verify>::Signer::from(pair.public()).into_account();
        let bytes: [u8; 32] = account_id.into();
        Self {
            account_id: AccountId32(bytes),
            pair,
        }
    }

    pub fn account(&self) -> &AccountId32 {
        &self.account_id
    }
}

impl Signer<PolkadotConfig> for SenderSigner {
    fn account_id(&self) -> <PolkadotConfig as subxt::Config>::AccountId {
        self.account_id.clone()
    }

    fn sign(&self, signer_payload: &[u8]) -> <PolkadotConfig as subxt::Config>::Signature {
        let signature = self.pair.sign(signer_payload);
        subxt::utils::MultiSignature::Sr25519(signature.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dev_suri_resolves() {
        let signer = SenderSigner::from_suri("//Alice").unwrap();
        // SS58 form of the well-known //Alice dev account.
        assert_eq!(
            signer.account().to_string(),
            "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY"
        );
    }

    #[test]
    fn malformed_suri_is_rejected() {
        // Not a dev path and not a valid mnemonic.
        assert!(SenderSigner::from_suri("this is not a valid mnemonic phrase at all").is_err());
    }
}
