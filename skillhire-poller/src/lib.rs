//! SkillHire job status poller
//!
//! Watches server-side repository analysis jobs from a client that has no
//! push channel. Each watched job gets one polling loop that fetches its
//! status on a fixed interval until the job reaches a terminal status, the
//! timeout elapses, or the caller cancels.
//!
//! Architecture:
//! - Configuration: default interval and timeout, overridable from the environment
//! - Source: the `StatusSource` seam the loop fetches through (implemented by `ApiClient`)
//! - Scheduler: `JobPoller` owns the loops, `PollHandle` is the caller's end of one loop
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use skillhire_client::ApiClient;
//! use skillhire_poller::{JobPoller, PollerConfig};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = Arc::new(ApiClient::new("http://localhost:8000/api"));
//! let poller = JobPoller::new(client, PollerConfig::default());
//!
//! let handle = poller.start_polling("42".into(), |repo| {
//!     println!("{} is {}", repo.repo_name, repo.analysis_status);
//! })?;
//! let outcome = handle.wait().await;
//! println!("stopped: {}", outcome.reason);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod scheduler;
pub mod source;

pub use config::{PollOptions, PollerConfig};
pub use error::{PollerError, Result};
pub use scheduler::{JobPoller, PollHandle, PollOutcome, PollState, StopReason};
pub use source::StatusSource;
