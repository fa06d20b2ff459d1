use std::future::Future;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::{self, Instant, MissedTickBehavior};

/// Drive `action` once per `period` until the stop signal fires.
///
/// The first run happens one full period after start. Each run is awaited
/// to completion before the next tick is considered, so runs never overlap.
/// The loop also exits when the stop sender is dropped.
pub async fn run_on_interval<A, Fut>(
    period: Duration,
    mut stop_signal: watch::Receiver<bool>,
    mut action: A,
) where
    A: FnMut() -> Fut,
    Fut: Future<Output = ()>,
{
    let mut ticker = time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => action().await,
            _ = stop_signal.changed() => {
                log::info!("Scheduler stopped.");
                break;
            }
        }
    }
}
