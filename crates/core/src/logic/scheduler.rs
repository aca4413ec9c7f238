use crate::prelude::*;
use rand::Rng;
use std::time::Duration;

/// Fixed cooldown applied between attempts (never after the last one), on
/// top of each attempt's randomized pre-submission delay.
pub const COOLDOWN_BETWEEN_ATTEMPTS: Duration = Duration::from_millis(1_000);

/// Sequential transfer scheduler.
///
/// Runs the affordability pre-check once, then one submission per index in
/// strict order, then a best-effort final balance lookup. Attempts never
/// run concurrently and a failed attempt is never retried.
#[derive(Builder)]
pub struct Scheduler<C, R, P> {
    config: RunConfig,
    client: C,
    rng: R,
    pacing: P,
    #[builder(default)]
    cancel: CancelFlag,
}

impl<C, R, P> Scheduler<C, R, P>
where
    C: LedgerClient,
    R: Rng,
    P: Pacing,
{
    /// Runs the full loop and hands the accumulated report back.
    ///
    /// Only an unaffordable run or a failed balance query abort here; every
    /// per-attempt failure is recorded in the attempt's outcome and the
    /// loop moves on to the next index.
    pub async fn run(mut self) -> Result<RunReport> {
        self.precheck().await?;

        let tx_count = *self.config.tx_count();
        let mut report = RunReport::default();
        for index in 1..=tx_count {
            if self.cancel.is_tripped() {
                info!(
                    "Cancellation requested, stopping after {} of {tx_count} attempts",
                    report.attempts().len()
                );
                break;
            }
            let attempt = self.execute_attempt(index).await;
            report.record(attempt);
            if index < tx_count {
                self.pacing.pause(COOLDOWN_BETWEEN_ATTEMPTS).await;
            }
        }

        self.fetch_final_balance(&mut report).await;
        Ok(report)
    }

    /// Conservative affordability gate: worst-case per-attempt cost times
    /// the attempt count. Not a per-transaction guarantee.
    async fn precheck(&self) -> Result<()> {
        let sender = self.client.own_address();
        let available = self.client.balance(sender, self.config.denom()).await?;
        let required = self.config.estimated_cost();
        debug!("Balance {available}, worst-case run cost {required}");
        if available < required {
            return Err(Error::InsufficientBalance {
                available,
                required,
                denom: self.config.denom().clone(),
                tx_count: *self.config.tx_count(),
            });
        }
        Ok(())
    }

    async fn execute_attempt(&mut self, index: u32) -> TransferAttempt {
        let amount = draw_amount(&mut self.rng, &self.config);
        let delay_ms = draw_delay_ms(&mut self.rng, &self.config);
        let destination = resolve_destination(&self.config, &self.client).await;

        info!(
            "🔄 Attempt {index}/{}: sending {amount} {} to {destination} after {delay_ms} ms",
            self.config.tx_count(),
            self.config.denom(),
        );
        self.pacing.pause(Duration::from_millis(delay_ms)).await;

        let request = TransferRequest::builder()
            .from(self.client.own_address().clone())
            .to(destination.clone())
            .amount(amount)
            .denom(self.config.denom().clone())
            .fee(self.config.fee().clone())
            .memo(format!("{}-{index}", self.config.memo_prefix()))
            .build();

        let outcome = match self.client.submit_transfer(&request).await {
            Ok(receipt) if *receipt.code() == 0 => {
                info!("✅ Attempt {index} succeeded, tx hash {}", receipt.tx_hash());
                AttemptOutcome::Success {
                    tx_hash: receipt.tx_hash().clone(),
                }
            }
            Ok(receipt) => {
                error!(
                    "❌ Attempt {index} rejected with code {}: {}",
                    receipt.code(),
                    receipt.raw_log()
                );
                AttemptOutcome::ChainRejected {
                    code: *receipt.code(),
                    raw_log: receipt.raw_log().clone(),
                }
            }
            Err(e) => {
                error!("❌ Attempt {index} failed to submit: {e}");
                AttemptOutcome::SubmitError {
                    reason: e.to_string(),
                }
            }
        };

        TransferAttempt::builder()
            .index(index)
            .amount(amount)
            .delay_ms(delay_ms)
            .destination(destination)
            .outcome(outcome)
            .build()
    }

    /// Best-effort: a failure here only omits the field from the report.
    async fn fetch_final_balance(&self, report: &mut RunReport) {
        if *report.success_count() == 0 {
            return;
        }
        match self
            .client
            .balance(self.client.own_address(), self.config.denom())
            .await
        {
            Ok(balance) => report.set_final_balance(balance),
            Err(e) => warn!("Final balance query failed: {e}"),
        }
    }
}
