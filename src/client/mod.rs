//! Code Dx API client

use async_trait::async_trait;

pub mod codedx;
pub mod filter;
#[cfg(test)]
pub mod mock;
pub mod models;

pub use codedx::CodeDxClient;
pub use filter::{FindingFilter, PAGE_SIZE};
#[cfg(test)]
#[allow(unused_imports)]
pub use mock::MockCodeDxClient;
pub use models::{Finding, Job, JobId, Project, Status, StatusMap};

/// Code Dx API operations used by the sync flow.
///
/// Transport and protocol failures never surface as errors here: each
/// operation logs a diagnostic and returns its documented fallback (an empty
/// collection or the job-id sentinel). Callers check for empty/sentinel
/// values rather than matching on `Err`.
#[async_trait]
pub trait CodeDxApi: Send + Sync {
    /// List every project visible to the API key
    async fn projects(&self) -> Vec<Project>;

    /// Fetch the status table for a project
    async fn statuses(&self, project_id: u64) -> StatusMap;

    /// Fetch every finding matching the filter, in ascending ID order.
    ///
    /// A failed page request invalidates the whole scan: accumulated pages
    /// are discarded and the result is empty.
    async fn findings(&self, project_id: u64, filter: &FindingFilter) -> Vec<Finding>;

    /// Submit a bulk status change for the given findings.
    ///
    /// Returns the sentinel without any network call when `finding_ids` is
    /// empty, and after a failed submission.
    async fn bulk_status_update(&self, project_id: u64, finding_ids: &[u64], status: u64) -> JobId;

    /// Block until the job leaves the queued state, a poll fails, or the
    /// configured ceiling elapses. The sentinel returns immediately.
    async fn wait_for_job(&self, job_id: &JobId);
}
