use crate::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

async fn run_transfers(cli_args: CliArgs) -> Result<(), CliError> {
    let plan = RunPlan::try_from(cli_args)?;
    print_plan(&plan);

    info!("🔑 Resolving sender identity and connecting to {}", plan.node_url());
    let ledger = SubstrateLedger::connect(plan.node_url(), plan.suri()).await?;
    info!("👤 Sender address: {}", ledger.own_address());

    let cancel = CancelFlag::new();
    spawn_cancel_watcher(cancel.clone());

    info!("🚀 Starting transfers...");
    let scheduler = Scheduler::builder()
        .config(plan.config().clone())
        .client(ledger)
        .rng(StdRng::from_entropy())
        .pacing(TokioPacing)
        .cancel(cancel)
        .build();
    let report = scheduler.run().await?;

    print_summary(plan.config(), &report, *plan.decimals());
    Ok(())
}

/// Trips the flag on Ctrl-C so the loop stops at the next iteration
/// boundary with a consistent partial report.
fn spawn_cancel_watcher(cancel: CancelFlag) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupt received, finishing the current attempt and stopping");
            cancel.trip();
        }
    });
}

pub async fn run(cli_args: CliArgs) {
    match run_transfers(cli_args).await {
        Ok(_) => info!("{BINARY_NAME} ran successfully"),
        Err(e) => {
            error!("❌ Error running {BINARY_NAME}: {e}");
            std::process::exit(1);
        }
    }
}
