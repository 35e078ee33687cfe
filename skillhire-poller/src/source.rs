//! Status source
//!
//! The single collaborator the poll loop depends on. Any failure to produce
//! a fresh job (network error, non-2xx answer, unparsable body) is a
//! transport error from the poller's point of view.

use async_trait::async_trait;
use skillhire_client::{ApiClient, ClientError};
use skillhire_core::domain::{LinkedRepository, ResourceId, TrackedJob};

#[async_trait]
pub trait StatusSource: Send + Sync + 'static {
    /// The observed job type
    type Job: TrackedJob + Clone + Send + Sync + 'static;

    /// Reads the current state of `id`
    async fn fetch_status(&self, id: &ResourceId) -> Result<Self::Job, ClientError>;
}

#[async_trait]
impl StatusSource for ApiClient {
    type Job = LinkedRepository;

    async fn fetch_status(&self, id: &ResourceId) -> Result<LinkedRepository, ClientError> {
        self.get_repository(id).await
    }
}
