use crate::prelude::*;

/// Accumulated results of a run, the sole mutable state of the scheduler.
///
/// `success_count` and `total_sent` are updated as each attempt is recorded,
/// never recomputed lazily, so the report is a consistent snapshot at any
/// point mid-run.
#[derive(Debug, Default, Getters)]
pub struct RunReport {
    /// Insertion order equals execution order.
    #[getset(get = "pub")]
    attempts: Vec<TransferAttempt>,

    /// Number of recorded attempts with a [`AttemptOutcome::Success`] outcome.
    #[getset(get = "pub")]
    success_count: u32,

    /// Sum of amounts over successful attempts.
    #[getset(get = "pub")]
    total_sent: u128,

    /// Sender balance after the run. `None` when nothing succeeded or the
    /// best-effort query failed.
    #[getset(get = "pub")]
    final_balance: Option<u128>,
}

impl RunReport {
    pub(crate) fn record(&mut self, attempt: TransferAttempt) {
        if attempt.outcome().is_success() {
            self.success_count += 1;
            self.total_sent += *attempt.amount();
        }
        self.attempts.push(attempt);
    }

    pub(crate) fn set_final_balance(&mut self, balance: u128) {
        self.final_balance = Some(balance);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attempt(index: u32, amount: u128, outcome: AttemptOutcome) -> TransferAttempt {
        TransferAttempt::builder()
            .index(index)
            .amount(amount)
            .delay_ms(0)
            .destination(Address::from("addr"))
            .outcome(outcome)
            .build()
    }

    #[test]
    fn totals_track_successes_only() {
        let mut report = RunReport::default();
        report.record(attempt(1, 100, AttemptOutcome::Success { tx_hash: "0x1".into() }));
        assert_eq!(*report.success_count(), 1);
        assert_eq!(*report.total_sent(), 100);

        report.record(attempt(
            2,
            200,
            AttemptOutcome::ChainRejected { code: 1, raw_log: "funds".into() },
        ));
        report.record(attempt(3, 300, AttemptOutcome::SubmitError { reason: "reset".into() }));
        assert_eq!(*report.success_count(), 1);
        assert_eq!(*report.total_sent(), 100);

        report.record(attempt(4, 400, AttemptOutcome::Success { tx_hash: "0x4".into() }));
        assert_eq!(*report.success_count(), 2);
        assert_eq!(*report.total_sent(), 500);
        assert_eq!(report.attempts().len(), 4);
    }

    #[test]
    fn empty_report_is_all_zero() {
        let report = RunReport::default();
        assert!(report.attempts().is_empty());
        assert_eq!(*report.success_count(), 0);
        assert_eq!(*report.total_sent(), 0);
        assert_eq!(*report.final_balance(), None);
    }
}
