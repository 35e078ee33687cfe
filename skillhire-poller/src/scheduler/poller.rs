//! Job status poller
//!
//! Runs one loop per watched job. A loop fetches the job's status every
//! interval, hands each fresh copy to the caller's callback and stops on a
//! terminal status, on timeout, or on cancellation. Transient fetch failures
//! are logged and retried on the next tick.

use skillhire_core::domain::{AnalysisStatus, ResourceId, TrackedJob};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, Weak};
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use super::handle::{PollHandle, Shared, StopReason};
use crate::config::{PollOptions, PollerConfig};
use crate::error::{PollerError, Result};
use crate::source::StatusSource;

/// Starts and tracks poll loops for jobs served by a `StatusSource`
///
/// At most one loop is live per job id: starting a second poll for a job
/// that is already being watched cancels the older loop and replaces it.
pub struct JobPoller<S: StatusSource> {
    source: Arc<S>,
    config: PollerConfig,
    active: Arc<Registry<S::Job>>,
}

/// Live loops by job id. A loop removes its own entry when it ends; entries
/// of aborted loops are pruned on the next access.
type Registry<J> = Mutex<HashMap<ResourceId, Arc<Shared<J>>>>;

fn prune<J: Clone>(active: &mut HashMap<ResourceId, Arc<Shared<J>>>) {
    active.retain(|_, loop_state| loop_state.is_active());
}

impl<S: StatusSource> JobPoller<S> {
    /// Creates a new job poller
    pub fn new(source: Arc<S>, config: PollerConfig) -> Self {
        Self {
            source,
            config,
            active: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn config(&self) -> &PollerConfig {
        &self.config
    }

    /// Polls `job_id` with the configured interval and timeout
    pub fn start_polling<F>(&self, job_id: ResourceId, on_update: F) -> Result<PollHandle<S::Job>>
    where
        F: FnMut(&S::Job) + Send + 'static,
    {
        self.start_polling_with(job_id, on_update, self.config.options())
    }

    /// Polls `job_id` with explicit options
    ///
    /// The first fetch happens one interval after this call, then one per
    /// interval until the job is terminal, `options.timeout` has elapsed, or
    /// the returned handle is cancelled or dropped. Must be called from
    /// within a Tokio runtime.
    pub fn start_polling_with<F>(
        &self,
        job_id: ResourceId,
        on_update: F,
        options: PollOptions,
    ) -> Result<PollHandle<S::Job>>
    where
        F: FnMut(&S::Job) + Send + 'static,
    {
        options.validate()?;
        let runtime = tokio::runtime::Handle::try_current().map_err(|_| PollerError::NoRuntime)?;

        let started = Instant::now();
        let shared = Shared::new(job_id.clone());

        let replaced = {
            let mut active = self.active.lock().unwrap_or_else(PoisonError::into_inner);
            prune(&mut active);
            active.insert(job_id.clone(), Arc::clone(&shared))
        };

        if let Some(previous) = replaced {
            if previous.stop(StopReason::Replaced) {
                info!("Replaced existing poll for job {}", job_id);
            }
        }

        info!(
            "Polling job {} (interval: {:?}, timeout: {:?})",
            job_id, options.interval, options.timeout
        );

        let task = runtime.spawn(run_loop(
            Arc::clone(&self.source),
            Arc::clone(&shared),
            Arc::downgrade(&self.active),
            on_update,
            options,
            started,
        ));
        shared.attach(task.abort_handle());

        Ok(PollHandle::new(shared))
    }

    /// Stops the live loop for `job_id`, if any
    pub fn cancel(&self, job_id: &ResourceId) -> bool {
        let removed = {
            let mut active = self.active.lock().unwrap_or_else(PoisonError::into_inner);
            prune(&mut active);
            active.remove(job_id)
        };

        match removed {
            Some(loop_state) => loop_state.stop(StopReason::Cancelled),
            None => false,
        }
    }

    /// Stops every live loop
    pub fn cancel_all(&self) {
        let drained: Vec<_> = self
            .active
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .drain()
            .map(|(_, loop_state)| loop_state)
            .collect();

        for loop_state in drained {
            loop_state.stop(StopReason::Cancelled);
        }
    }

    /// Ids of jobs that currently have a live loop
    pub fn active_jobs(&self) -> Vec<ResourceId> {
        let mut active = self.active.lock().unwrap_or_else(PoisonError::into_inner);
        prune(&mut active);
        let mut ids: Vec<_> = active.keys().cloned().collect();
        ids.sort();
        ids
    }
}

impl<S: StatusSource> Drop for JobPoller<S> {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

/// Body of a single poll loop
///
/// Ticks are strictly sequential: the next tick is not awaited until the
/// current fetch has resolved, so callbacks arrive in fetch order.
async fn run_loop<S, F>(
    source: Arc<S>,
    shared: Arc<Shared<S::Job>>,
    registry: Weak<Registry<S::Job>>,
    on_update: F,
    options: PollOptions,
    started: Instant,
) where
    S: StatusSource,
    F: FnMut(&S::Job) + Send + 'static,
{
    let stopped = poll_until_stopped(&*source, &shared, on_update, options, started).await;
    if let Some(reason) = stopped {
        if shared.finish(reason) {
            info!("Stopped polling job {}: {}", shared.job_id(), reason);
        }
    }

    // Only drop our own entry; a replacing loop may already own the id
    if let Some(registry) = registry.upgrade() {
        let mut active = registry.lock().unwrap_or_else(PoisonError::into_inner);
        if active
            .get(shared.job_id())
            .is_some_and(|entry| Arc::ptr_eq(entry, &shared))
        {
            active.remove(shared.job_id());
        }
    }
}

/// Returns `None` when the loop was stopped from outside
async fn poll_until_stopped<S, F>(
    source: &S,
    shared: &Shared<S::Job>,
    mut on_update: F,
    options: PollOptions,
    started: Instant,
) -> Option<StopReason>
where
    S: StatusSource,
    F: FnMut(&S::Job) + Send + 'static,
{
    let job_id = shared.job_id().clone();
    let deadline = time::sleep_until(started + options.timeout);
    tokio::pin!(deadline);

    let mut ticker = time::interval_at(started + options.interval, options.interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut consecutive_failures: u32 = 0;

    let reason = loop {
        tokio::select! {
            biased;
            _ = ticker.tick() => {}
            _ = &mut deadline => break StopReason::TimedOut,
        }

        if !shared.is_active() {
            return None;
        }

        debug!("Fetching status of job {}", job_id);

        let fetched = tokio::select! {
            biased;
            result = source.fetch_status(&job_id) => result,
            _ = &mut deadline => break StopReason::TimedOut,
        };

        match fetched {
            Ok(job) => {
                consecutive_failures = 0;
                let status = job.status();

                if !shared.deliver(job, &mut on_update) {
                    return None;
                }

                match status {
                    AnalysisStatus::Complete => break StopReason::Completed,
                    AnalysisStatus::Failed => break StopReason::Failed,
                    AnalysisStatus::Pending | AnalysisStatus::Analyzing => {}
                }
            }
            Err(e) => {
                consecutive_failures += 1;
                warn!(
                    "Failed to fetch status of job {} ({} in a row): {}",
                    job_id, consecutive_failures, e
                );
            }
        }
    };

    Some(reason)
}
