//! Fixed-cadence trigger over the coordinator.

use std::time::Duration;

use tokio::time::MissedTickBehavior;

use crate::models::run::RunError;
use crate::models::timeframe::Timeframe;
use crate::pipeline::coordinator::Coordinator;

/// Invokes `coordinator.run(timeframe)` every `every`, forever.
///
/// The first run fires immediately. Each invocation is independent: a
/// listing failure is logged and the loop continues with the next tick.
/// This trigger awaits a run before admitting the next tick (missed ticks
/// are delayed, not bursted), so runs it starts never overlap; callers that
/// want overlapping runs can invoke [`Coordinator::run`] directly, which is
/// safe because storage keys are overwrite-idempotent.
pub async fn run_on_schedule(coordinator: &Coordinator, timeframe: &Timeframe, every: Duration) {
    let mut ticker = tokio::time::interval(every);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        match coordinator.run(timeframe).await {
            Ok(result) => {
                if !result.is_clean() {
                    for (symbol, cause) in &result.failed {
                        tracing::warn!(symbol = %symbol, error = %cause, "symbol failed this run");
                    }
                }
            }
            Err(RunError::Listing(cause)) => {
                tracing::error!(error = %cause, "run aborted before fan-out: symbol listing failed");
            }
        }
    }
}
