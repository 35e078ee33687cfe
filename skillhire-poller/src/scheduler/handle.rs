//! Poll handles
//!
//! A `PollHandle` is the caller's end of one poll loop. Dropping it cancels
//! the loop, so a watcher that goes out of scope never leaves a timer behind.

use skillhire_core::domain::ResourceId;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{self, ThreadId};
use tokio::sync::watch;
use tokio::task::AbortHandle;
use tracing::error;

/// Why a poll loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The job reached `complete`
    Completed,
    /// The job reached `failed`
    Failed,
    /// The timeout elapsed before a terminal status was seen
    TimedOut,
    /// The caller cancelled (or dropped the handle)
    Cancelled,
    /// A newer poll for the same job took over
    Replaced,
}

impl std::fmt::Display for StopReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StopReason::Completed => write!(f, "completed"),
            StopReason::Failed => write!(f, "failed"),
            StopReason::TimedOut => write!(f, "timed out"),
            StopReason::Cancelled => write!(f, "cancelled"),
            StopReason::Replaced => write!(f, "replaced"),
        }
    }
}

/// Lifecycle of a poll loop. `Stopped` is absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollState {
    Idle,
    Active,
    Stopped(StopReason),
}

/// Final report of a stopped loop
#[derive(Debug, Clone)]
pub struct PollOutcome<J> {
    pub reason: StopReason,
    /// Last job delivered to the callback, if any
    pub last: Option<J>,
    /// Number of callback invocations
    pub updates: usize,
}

struct Delivery<J> {
    last: Option<J>,
    updates: usize,
}

/// State shared between a handle, the poll task and the poller's registry
pub(crate) struct Shared<J> {
    job_id: ResourceId,
    active: AtomicBool,
    /// Held for the whole duration of a callback
    delivery: Mutex<Delivery<J>>,
    delivering_on: Mutex<Option<ThreadId>>,
    state: watch::Sender<PollState>,
    task: Mutex<Option<AbortHandle>>,
}

impl<J: Clone> Shared<J> {
    pub(crate) fn new(job_id: ResourceId) -> Arc<Self> {
        let (state, _) = watch::channel(PollState::Idle);
        Arc::new(Self {
            job_id,
            active: AtomicBool::new(true),
            delivery: Mutex::new(Delivery {
                last: None,
                updates: 0,
            }),
            delivering_on: Mutex::new(None),
            state,
            task: Mutex::new(None),
        })
    }

    pub(crate) fn job_id(&self) -> &ResourceId {
        &self.job_id
    }

    pub(crate) fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Binds the spawned loop to this state and moves it to `Active`
    pub(crate) fn attach(&self, task: AbortHandle) {
        let mut slot = self.task.lock().unwrap_or_else(PoisonError::into_inner);
        if self.is_active() {
            self.state.send_if_modified(|state| {
                if *state == PollState::Idle {
                    *state = PollState::Active;
                    true
                } else {
                    false
                }
            });
            *slot = Some(task);
        } else {
            task.abort();
        }
    }

    /// Hands a fetched job to the callback
    ///
    /// Returns `false` if the loop was stopped, in which case the job is
    /// discarded. A panicking callback is logged and does not end the loop.
    pub(crate) fn deliver<F>(&self, job: J, on_update: &mut F) -> bool
    where
        F: FnMut(&J),
    {
        let mut delivery = self.delivery.lock().unwrap_or_else(PoisonError::into_inner);
        if !self.is_active() {
            return false;
        }

        self.set_delivering(Some(thread::current().id()));
        let outcome = catch_unwind(AssertUnwindSafe(|| on_update(&job)));
        self.set_delivering(None);

        if outcome.is_err() {
            error!("Update callback for job {} panicked", self.job_id);
        }

        delivery.updates += 1;
        delivery.last = Some(job);
        true
    }

    /// Stops the loop from the outside and releases its timer
    ///
    /// Waits for an in-progress callback unless called from inside it.
    /// Returns `false` if the loop had already stopped.
    pub(crate) fn stop(&self, reason: StopReason) -> bool {
        if !self.deactivate(reason) {
            return false;
        }

        let task = self
            .task
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(task) = task {
            task.abort();
        }
        true
    }

    /// Stops the loop from inside the poll task
    pub(crate) fn finish(&self, reason: StopReason) -> bool {
        self.deactivate(reason)
    }

    fn deactivate(&self, reason: StopReason) -> bool {
        if !self.active.swap(false, Ordering::SeqCst) {
            return false;
        }

        let reentrant = *self
            .delivering_on
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            == Some(thread::current().id());
        if !reentrant {
            drop(self.delivery.lock().unwrap_or_else(PoisonError::into_inner));
        }

        self.state.send_replace(PollState::Stopped(reason));
        true
    }

    fn set_delivering(&self, thread: Option<ThreadId>) {
        *self
            .delivering_on
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = thread;
    }

    pub(crate) fn state(&self) -> PollState {
        *self.state.borrow()
    }

    pub(crate) async fn wait(&self) -> PollOutcome<J> {
        let mut rx = self.state.subscribe();
        let reason = loop {
            if let PollState::Stopped(reason) = *rx.borrow_and_update() {
                break reason;
            }
            if rx.changed().await.is_err() {
                break StopReason::Cancelled;
            }
        };

        let delivery = self.delivery.lock().unwrap_or_else(PoisonError::into_inner);
        PollOutcome {
            reason,
            last: delivery.last.clone(),
            updates: delivery.updates,
        }
    }
}

/// Caller's end of a poll loop
///
/// Cancels the loop when dropped, unless it was detached.
pub struct PollHandle<J: Clone> {
    shared: Arc<Shared<J>>,
    cancel_on_drop: bool,
}

impl<J: Clone> PollHandle<J> {
    pub(crate) fn new(shared: Arc<Shared<J>>) -> Self {
        Self {
            shared,
            cancel_on_drop: true,
        }
    }

    pub fn job_id(&self) -> &ResourceId {
        self.shared.job_id()
    }

    pub fn is_active(&self) -> bool {
        self.shared.is_active()
    }

    pub fn state(&self) -> PollState {
        self.shared.state()
    }

    /// Stops polling
    ///
    /// Once this returns no further fetch is issued and the callback is not
    /// invoked again; a callback running on another thread is waited for.
    /// Called from inside the callback, the running call is the last one.
    /// Calling it on a stopped handle does nothing.
    pub fn cancel(&self) {
        self.shared.stop(StopReason::Cancelled);
    }

    /// Resolves once the loop has stopped, for whatever reason
    pub async fn wait(&self) -> PollOutcome<J> {
        self.shared.wait().await
    }

    /// Lets the loop run to its own end without holding the handle
    ///
    /// The loop can still be stopped through `JobPoller::cancel`.
    pub fn detach(mut self) {
        self.cancel_on_drop = false;
    }
}

impl<J: Clone> Drop for PollHandle<J> {
    fn drop(&mut self) {
        if self.cancel_on_drop {
            self.shared.stop(StopReason::Cancelled);
        }
    }
}

impl<J: Clone> std::fmt::Debug for PollHandle<J> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PollHandle")
            .field("job_id", self.shared.job_id())
            .field("state", &self.shared.state())
            .finish()
    }
}
