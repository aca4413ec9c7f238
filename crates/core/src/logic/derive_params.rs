use crate::prelude::*;
use rand::Rng;

/// Draws an amount uniformly from the configured inclusive range. A
/// degenerate range (`min == max`) always yields that value.
pub fn draw_amount<R: Rng>(rng: &mut R, config: &RunConfig) -> u128 {
    rng.gen_range(*config.min_amount()..=*config.max_amount())
}

/// Draws the pre-submission delay uniformly from the configured inclusive
/// range, same degenerate rule as [`draw_amount`].
pub fn draw_delay_ms<R: Rng>(rng: &mut R, config: &RunConfig) -> u64 {
    rng.gen_range(*config.min_delay_ms()..=*config.max_delay_ms())
}

/// Resolves the destination for one attempt.
///
/// RANDOM mode falls back to the sender's own address when fresh-address
/// derivation fails. That recovery is local to the attempt, never fatal to
/// the run.
pub async fn resolve_destination<C>(config: &RunConfig, client: &C) -> Address
where
    C: LedgerClient + ?Sized,
{
    match config.destination_mode() {
        DestinationMode::SelfAddress => client.own_address().clone(),
        DestinationMode::Random => match client.derive_fresh_address().await {
            Ok(address) => address,
            Err(e) => {
                warn!("Failed to derive a fresh destination, falling back to self: {e}");
                client.own_address().clone()
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn config(min_amount: u128, max_amount: u128, min_delay: u64, max_delay: u64) -> RunConfig {
        RunConfig::builder()
            .tx_count(1)
            .min_amount(min_amount)
            .max_amount(max_amount)
            .min_delay_ms(min_delay)
            .max_delay_ms(max_delay)
            .destination_mode(DestinationMode::SelfAddress)
            .denom("UNIT".to_owned())
            .fee(
                Fee::builder()
                    .denom("UNIT".to_owned())
                    .amount(0)
                    .gas_limit(200_000)
                    .build(),
            )
            .memo_prefix("test".to_owned())
            .build()
    }

    #[test]
    fn draws_stay_within_inclusive_bounds() {
        let config = config(10, 20, 5, 15);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1_000 {
            let amount = draw_amount(&mut rng, &config);
            assert!((10..=20).contains(&amount));
            let delay = draw_delay_ms(&mut rng, &config);
            assert!((5..=15).contains(&delay));
        }
    }

    #[test]
    fn degenerate_range_yields_the_single_value() {
        let config = config(1_000, 1_000, 0, 0);
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(draw_amount(&mut rng, &config), 1_000);
        assert_eq!(draw_delay_ms(&mut rng, &config), 0);
    }

    #[test]
    fn seeded_rng_is_deterministic() {
        let config = config(0, u64::MAX as u128, 0, u64::MAX);
        let first: Vec<_> = {
            let mut rng = StdRng::seed_from_u64(42);
            (0..16).map(|_| draw_amount(&mut rng, &config)).collect()
        };
        let second: Vec<_> = {
            let mut rng = StdRng::seed_from_u64(42);
            (0..16).map(|_| draw_amount(&mut rng, &config)).collect()
        };
        assert_eq!(first, second);
    }
}
