use crate::prelude::*;
use clap::{Parser, ValueEnum};

pub const BINARY_NAME: &str = "dripper";
pub const DEFAULT_MEMO_PREFIX: &str = "dripper";

/// Largest power of ten that still fits in a `u128` amount.
pub const MAX_DECIMALS: u8 = 38;

/// Drip-feeds randomized token transfers to a Substrate node.
///
/// Performs `--count` strictly sequential transfers with amounts and
/// pre-submission delays drawn uniformly from the configured ranges, either
/// back to the sender or to freshly generated addresses, and prints a
/// summary at the end. Aborts up front when the sender balance cannot cover
/// the worst-case cost of the whole run.
#[derive(Parser, Debug)]
#[command(name = BINARY_NAME, author, version, about, long_about = None)]
pub struct CliArgs {
    /// Node URL (ws:// or wss://)
    #[arg(long)]
    node_url: String,

    /// Secret URI of the sending account (a `//Name` dev path or a mnemonic)
    #[arg(long, env = "SENDER_SURI", hide_env_values = true)]
    suri: String,

    /// Number of transfers to attempt
    #[arg(long, default_value_t = 5)]
    count: u32,

    /// Minimum amount per transfer, in the smallest on-chain unit
    #[arg(long, default_value_t = 1_000)]
    min_amount: u128,

    /// Maximum amount per transfer, in the smallest on-chain unit
    #[arg(long, default_value_t = 5_000)]
    max_amount: u128,

    /// Minimum delay before each submission, in milliseconds
    #[arg(long, default_value_t = 10_000)]
    min_delay_ms: u64,

    /// Maximum delay before each submission, in milliseconds
    #[arg(long, default_value_t = 30_000)]
    max_delay_ms: u64,

    /// Where the funds go
    #[arg(long, value_enum, default_value = "self")]
    dest: DestinationArg,

    /// Display symbol of the native token
    #[arg(long, default_value = "UNIT")]
    denom: String,

    /// Fixed fee (tip) per transfer, in the smallest on-chain unit
    #[arg(long, default_value_t = 0)]
    fee_amount: u128,

    /// Gas limit carried in the fee descriptor; only the cost estimate uses it
    #[arg(long, default_value_t = 200_000)]
    gas_limit: u64,

    /// Memo prefix; each transfer carries "{prefix}-{index}"
    #[arg(long, default_value_t = DEFAULT_MEMO_PREFIX.to_owned())]
    memo_prefix: String,

    /// Decimal places of the native token, used for display only
    #[arg(long, default_value_t = 12)]
    decimals: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DestinationArg {
    /// Send back to the sender's own address
    #[value(name = "self")]
    SelfAddress,
    /// Send to a freshly generated address each time
    Random,
}

impl From<DestinationArg> for DestinationMode {
    fn from(arg: DestinationArg) -> Self {
        match arg {
            DestinationArg::SelfAddress => DestinationMode::SelfAddress,
            DestinationArg::Random => DestinationMode::Random,
        }
    }
}

impl TryFrom<CliArgs> for RunPlan {
    type Error = InvalidCliArgs;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let Ok(node_url) = Url::parse(&args.node_url) else {
            return Err(InvalidCliArgs::NodeUrlInvalid {
                bad_value: args.node_url.clone(),
            });
        };
        if args.count == 0 {
            return Err(InvalidCliArgs::CountMustBePositive);
        }
        if args.min_amount > args.max_amount {
            return Err(InvalidCliArgs::AmountRangeInverted {
                min: args.min_amount,
                max: args.max_amount,
            });
        }
        if args.min_delay_ms > args.max_delay_ms {
            return Err(InvalidCliArgs::DelayRangeInverted {
                min: args.min_delay_ms,
                max: args.max_delay_ms,
            });
        }
        if args.decimals > MAX_DECIMALS {
            return Err(InvalidCliArgs::DecimalsTooLarge {
                bad_value: args.decimals,
            });
        }

        let fee = Fee::builder()
            .denom(args.denom.clone())
            .amount(args.fee_amount)
            .gas_limit(args.gas_limit)
            .build();
        let config = RunConfig::builder()
            .tx_count(args.count)
            .min_amount(args.min_amount)
            .max_amount(args.max_amount)
            .min_delay_ms(args.min_delay_ms)
            .max_delay_ms(args.max_delay_ms)
            .destination_mode(args.dest.into())
            .denom(args.denom)
            .fee(fee)
            .memo_prefix(args.memo_prefix)
            .build();

        Ok(RunPlan::builder()
            .node_url(node_url)
            .suri(args.suri)
            .decimals(args.decimals)
            .config(config)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(extra: &[&str]) -> CliArgs {
        let mut argv = vec![BINARY_NAME, "--node-url", "ws://127.0.0.1:9944", "--suri", "//Alice"];
        argv.extend_from_slice(extra);
        CliArgs::try_parse_from(argv).unwrap()
    }

    #[test]
    fn defaults_produce_a_valid_plan() {
        let plan = RunPlan::try_from(parse(&[])).unwrap();
        assert_eq!(*plan.config().tx_count(), 5);
        assert_eq!(*plan.config().min_amount(), 1_000);
        assert_eq!(*plan.config().max_amount(), 5_000);
        assert_eq!(
            *plan.config().destination_mode(),
            DestinationMode::SelfAddress
        );
        assert_eq!(plan.config().memo_prefix(), DEFAULT_MEMO_PREFIX);
        assert_eq!(*plan.decimals(), 12);
    }

    #[test]
    fn random_destination_is_parsed() {
        let plan = RunPlan::try_from(parse(&["--dest", "random"])).unwrap();
        assert_eq!(*plan.config().destination_mode(), DestinationMode::Random);
    }

    #[test]
    fn zero_count_is_rejected() {
        let result = RunPlan::try_from(parse(&["--count", "0"]));
        assert!(matches!(result, Err(InvalidCliArgs::CountMustBePositive)));
    }

    #[test]
    fn inverted_amount_range_is_rejected() {
        let result = RunPlan::try_from(parse(&["--min-amount", "10", "--max-amount", "9"]));
        assert!(matches!(
            result,
            Err(InvalidCliArgs::AmountRangeInverted { min: 10, max: 9 })
        ));
    }

    #[test]
    fn inverted_delay_range_is_rejected() {
        let result = RunPlan::try_from(parse(&["--min-delay-ms", "50", "--max-delay-ms", "40"]));
        assert!(matches!(
            result,
            Err(InvalidCliArgs::DelayRangeInverted { min: 50, max: 40 })
        ));
    }

    #[test]
    fn bad_node_url_is_rejected() {
        let argv = [BINARY_NAME, "--node-url", "not a url", "--suri", "//Alice"];
        let args = CliArgs::try_parse_from(argv).unwrap();
        assert!(matches!(
            RunPlan::try_from(args),
            Err(InvalidCliArgs::NodeUrlInvalid { .. })
        ));
    }

    #[test]
    fn decimals_above_the_maximum_are_rejected() {
        let result = RunPlan::try_from(parse(&["--decimals", "39"]));
        assert!(matches!(
            result,
            Err(InvalidCliArgs::DecimalsTooLarge { bad_value: 39 })
        ));
    }

    #[test]
    fn maximal_decimals_are_accepted() {
        let plan = RunPlan::try_from(parse(&["--decimals", "38"])).unwrap();
        assert_eq!(*plan.decimals(), MAX_DECIMALS);
    }

    #[test]
    fn degenerate_ranges_are_accepted() {
        let plan = RunPlan::try_from(parse(&[
            "--min-amount",
            "1000",
            "--max-amount",
            "1000",
            "--min-delay-ms",
            "0",
            "--max-delay-ms",
            "0",
        ]))
        .unwrap();
        assert_eq!(*plan.config().min_amount(), *plan.config().max_amount());
    }
}
