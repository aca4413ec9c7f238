use crate::prelude::*;

/// Fixed-point rendering of a smallest-unit amount.
///
/// Falls back to the raw amount when the scale does not fit in a `u128`;
/// argument validation keeps `decimals` below that point.
pub fn format_amount(amount: u128, decimals: u8) -> String {
    let Some(scale) = 10u128.checked_pow(decimals as u32) else {
        return amount.to_string();
    };
    if scale == 1 {
        return amount.to_string();
    }
    let whole = amount / scale;
    let frac = amount % scale;
    format!("{whole}.{frac:0width$}", width = decimals as usize)
}

pub fn print_plan(plan: &RunPlan) {
    let config = plan.config();
    let decimals = *plan.decimals();
    info!("⚙️  Configuration:");
    info!("- Node URL: {}", plan.node_url());
    info!("- Number of transfers: {}", config.tx_count());
    info!(
        "- Amount range: {} - {} {}",
        format_amount(*config.min_amount(), decimals),
        format_amount(*config.max_amount(), decimals),
        config.denom()
    );
    info!(
        "- Delay range: {} - {} ms",
        config.min_delay_ms(),
        config.max_delay_ms()
    );
    info!(
        "- Fee per transfer: {} {}",
        format_amount(*config.fee().amount(), decimals),
        config.denom()
    );
    let mode = match config.destination_mode() {
        DestinationMode::SelfAddress => "self address",
        DestinationMode::Random => "random addresses",
    };
    info!("- Destination mode: {mode}");
}

pub fn print_summary(config: &RunConfig, report: &RunReport, decimals: u8) {
    let attempted = report.attempts().len();
    let successes = *report.success_count();
    let ratio = if attempted == 0 {
        0.0
    } else {
        successes as f64 / attempted as f64 * 100.0
    };

    info!("📊 Transfer summary:");
    info!("✅ Successful: {successes}/{attempted} ({ratio:.1}%)");
    info!(
        "💰 Total sent: {} {}",
        format_amount(*report.total_sent(), decimals),
        config.denom()
    );
    for attempt in report.attempts() {
        match attempt.outcome() {
            AttemptOutcome::ChainRejected { code, raw_log } => warn!(
                "❌ Attempt {} rejected with code {code}: {raw_log}",
                attempt.index()
            ),
            AttemptOutcome::SubmitError { reason } => {
                warn!("❌ Attempt {} failed to submit: {reason}", attempt.index())
            }
            AttemptOutcome::Success { .. } => {}
        }
    }
    if let Some(balance) = report.final_balance() {
        info!(
            "💵 Final balance: {} {}",
            format_amount(*balance, decimals),
            config.denom()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_fixed_decimals() {
        assert_eq!(format_amount(1_500_000, 6), "1.500000");
        assert_eq!(format_amount(42, 6), "0.000042");
        assert_eq!(format_amount(0, 6), "0.000000");
        assert_eq!(format_amount(1_000_000_000_000, 12), "1.000000000000");
    }

    #[test]
    fn zero_decimals_is_the_raw_amount() {
        assert_eq!(format_amount(1234, 0), "1234");
    }

    #[test]
    fn oversized_decimals_fall_back_to_the_raw_amount() {
        assert_eq!(format_amount(1234, 38), format!("0.{:038}", 1234));
        assert_eq!(format_amount(1234, 39), "1234");
        assert_eq!(format_amount(u128::MAX, u8::MAX), u128::MAX.to_string());
    }
}
