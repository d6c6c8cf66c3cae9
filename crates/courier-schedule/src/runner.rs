use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::{debug, error, info};

use crate::dispatch::PostDispatcher;
use crate::recurrence::DailySchedule;

/// Drives a [`PostDispatcher`] at the schedule's cadence.
///
/// One cooperative task, one timer: the next cycle is not computed until
/// the dispatcher call returns, so firings never overlap. `last_fire` is
/// observability only. The next occurrence always comes from the wall
/// clock, which is what keeps the loop drift-free.
pub struct DailyScheduler {
    schedule: DailySchedule,
    dispatcher: PostDispatcher,
    last_fire: Option<DateTime<Utc>>,
}

impl DailyScheduler {
    pub fn new(schedule: DailySchedule, dispatcher: PostDispatcher) -> Self {
        Self {
            schedule,
            dispatcher,
            last_fire: None,
        }
    }

    pub fn last_fire(&self) -> Option<DateTime<Utc>> {
        self.last_fire
    }

    /// Sleep/fire loop. Runs until `shutdown` flips to `true` or its
    /// sender is dropped.
    pub async fn run(mut self, mut shutdown: watch::Receiver<bool>) {
        info!(schedule = %self.schedule, "daily scheduler started");

        loop {
            let now = Utc::now();
            let Some(delay) = self.schedule.delay_until_next(now) else {
                error!(schedule = %self.schedule, "no next occurrence computable, stopping");
                return;
            };
            debug!(delay_secs = delay.as_secs(), "sleeping until next fire");

            tokio::select! {
                _ = tokio::time::sleep(delay) => {
                    self.dispatcher.fire().await;
                    let fired_at = Utc::now();
                    self.last_fire = Some(fired_at);
                    info!(fired_at = %fired_at, "cycle complete");
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        info!("daily scheduler shutting down");
                        return;
                    }
                }
            }
        }
    }
}
