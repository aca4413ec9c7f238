use crate::prelude::*;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("invalid CLI arguments: {0}")]
    InvalidCliArgs(#[from] InvalidCliArgs),

    #[error("{0}")]
    CoreError(#[from] Error),
}

#[derive(Debug, thiserror::Error)]
pub enum InvalidCliArgs {
    #[error("node url invalid: {bad_value}")]
    NodeUrlInvalid { bad_value: String },

    #[error("count must be at least 1")]
    CountMustBePositive,

    #[error("min-amount {min} exceeds max-amount {max}")]
    AmountRangeInverted { min: u128, max: u128 },

    #[error("min-delay-ms {min} exceeds max-delay-ms {max}")]
    DelayRangeInverted { min: u64, max: u64 },

    #[error("decimals {bad_value} exceeds the supported maximum of {MAX_DECIMALS}")]
    DecimalsTooLarge { bad_value: u8 },
}
