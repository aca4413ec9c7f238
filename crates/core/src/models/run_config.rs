use crate::prelude::*;

/// Immutable description of one run, produced by the config collector.
///
/// The producer guarantees `tx_count >= 1`, `min_amount <= max_amount` and
/// `min_delay_ms <= max_delay_ms`; the scheduler assumes these invariants.
#[derive(Debug, Clone, Getters, Builder)]
pub struct RunConfig {
    /// Number of transfer attempts.
    #[getset(get = "pub")]
    tx_count: u32,

    /// Lower amount bound, inclusive, in the smallest on-chain unit.
    #[getset(get = "pub")]
    min_amount: u128,

    /// Upper amount bound, inclusive, in the smallest on-chain unit.
    #[getset(get = "pub")]
    max_amount: u128,

    /// Lower bound of the pre-submission delay, inclusive.
    #[getset(get = "pub")]
    min_delay_ms: u64,

    /// Upper bound of the pre-submission delay, inclusive.
    #[getset(get = "pub")]
    max_delay_ms: u64,

    #[getset(get = "pub")]
    destination_mode: DestinationMode,

    /// Display symbol of the transferred token.
    #[getset(get = "pub")]
    denom: String,

    #[getset(get = "pub")]
    fee: Fee,

    /// Each attempt carries the memo `"{memo_prefix}-{index}"`.
    #[getset(get = "pub")]
    memo_prefix: String,
}

impl RunConfig {
    /// Worst-case total cost of the run: every attempt at the maximal
    /// amount plus the fixed fee. Saturates at `u128::MAX`, so an
    /// overflowing configuration fails the affordability pre-check
    /// instead of wrapping past it.
    pub fn estimated_cost(&self) -> u128 {
        (self.tx_count as u128).saturating_mul(self.max_amount.saturating_add(*self.fee.amount()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(tx_count: u32, max_amount: u128, fee_amount: u128) -> RunConfig {
        RunConfig::builder()
            .tx_count(tx_count)
            .min_amount(0)
            .max_amount(max_amount)
            .min_delay_ms(0)
            .max_delay_ms(0)
            .destination_mode(DestinationMode::SelfAddress)
            .denom("UNIT".to_owned())
            .fee(
                Fee::builder()
                    .denom("UNIT".to_owned())
                    .amount(fee_amount)
                    .gas_limit(200_000)
                    .build(),
            )
            .memo_prefix("test".to_owned())
            .build()
    }

    #[test]
    fn estimated_cost_is_worst_case_per_attempt_times_count() {
        assert_eq!(config(3, 1_000, 50).estimated_cost(), 3 * 1_050);
    }

    #[test]
    fn estimated_cost_with_zero_fee() {
        assert_eq!(config(5, 2_000, 0).estimated_cost(), 10_000);
    }

    #[test]
    fn estimated_cost_saturates_instead_of_wrapping() {
        assert_eq!(config(2, u128::MAX, 0).estimated_cost(), u128::MAX);
        assert_eq!(config(1, u128::MAX, 1).estimated_cost(), u128::MAX);
    }
}
