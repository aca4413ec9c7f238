use crate::prelude::*;

/// Validated operator intent: where to run, as whom, and the immutable
/// [`RunConfig`] handed to the scheduler.
#[derive(Debug, Clone, Getters, Builder)]
pub struct RunPlan {
    #[getset(get = "pub")]
    node_url: Url,

    /// Secret URI of the sending account. Never logged.
    #[getset(get = "pub")]
    suri: String,

    /// Decimal places of the token, display only.
    #[getset(get = "pub")]
    decimals: u8,

    #[getset(get = "pub")]
    config: RunConfig,
}
