//! Scheduler layer
//!
//! Owns the poll loops: `JobPoller` starts them and enforces one loop per
//! job, `PollHandle` is what callers hold to observe or cancel a loop.

mod handle;
pub mod poller;

pub use handle::{PollHandle, PollOutcome, PollState, StopReason};
pub use poller::JobPoller;
