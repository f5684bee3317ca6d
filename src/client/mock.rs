//! Mock Code Dx API client for testing
//!
//! Implements [`CodeDxApi`] without network I/O so the sync flow can be
//! exercised end to end in unit tests. Configure canned responses via the
//! builder methods, then inspect call counts and captured requests.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::CodeDxApi;
use super::filter::FindingFilter;
use super::models::{Finding, JobId, Project, StatusMap};

/// Mock API client for testing
#[derive(Default)]
pub struct MockCodeDxClient {
    /// Projects to return from `projects`
    projects: Arc<Mutex<Vec<Project>>>,
    /// Status table to return from `statuses`
    statuses: Arc<Mutex<StatusMap>>,
    /// Findings to return from `findings`
    findings: Arc<Mutex<Vec<Finding>>>,
    /// Next job id issued by `bulk_status_update`
    next_job_id: Arc<Mutex<u64>>,
    /// Call counts for test verification
    call_counts: Arc<Mutex<CallCounts>>,
    /// Captured bulk update submissions
    bulk_updates: Arc<Mutex<Vec<BulkUpdate>>>,
    /// Job ids passed to `wait_for_job`, sentinel included
    waited_jobs: Arc<Mutex<Vec<JobId>>>,
}

/// Tracks API call counts for test verification
#[derive(Debug, Default, Clone)]
pub struct CallCounts {
    pub projects: usize,
    pub statuses: usize,
    pub findings: usize,
    pub bulk_status_update: usize,
    pub wait_for_job: usize,
}

/// A captured bulk status update submission
#[derive(Debug, Clone)]
pub struct BulkUpdate {
    pub project_id: u64,
    pub finding_ids: Vec<u64>,
    pub status: u64,
    pub job_id: JobId,
}

impl MockCodeDxClient {
    pub fn new() -> Self {
        Self {
            next_job_id: Arc::new(Mutex::new(100)),
            ..Self::default()
        }
    }

    pub fn with_projects(self, projects: Vec<Project>) -> Self {
        Self {
            projects: Arc::new(Mutex::new(projects)),
            ..self
        }
    }

    pub fn with_statuses(self, statuses: StatusMap) -> Self {
        Self {
            statuses: Arc::new(Mutex::new(statuses)),
            ..self
        }
    }

    pub fn with_findings(self, findings: Vec<Finding>) -> Self {
        Self {
            findings: Arc::new(Mutex::new(findings)),
            ..self
        }
    }

    /// Call counts accumulated so far
    pub async fn call_counts(&self) -> CallCounts {
        self.call_counts.lock().await.clone()
    }

    /// Bulk updates captured so far, in submission order
    pub async fn bulk_updates(&self) -> Vec<BulkUpdate> {
        self.bulk_updates.lock().await.clone()
    }

    /// Job ids waited on so far, in call order
    pub async fn waited_jobs(&self) -> Vec<JobId> {
        self.waited_jobs.lock().await.clone()
    }
}

#[async_trait]
impl CodeDxApi for MockCodeDxClient {
    async fn projects(&self) -> Vec<Project> {
        self.call_counts.lock().await.projects += 1;
        self.projects.lock().await.clone()
    }

    async fn statuses(&self, _project_id: u64) -> StatusMap {
        self.call_counts.lock().await.statuses += 1;
        self.statuses.lock().await.clone()
    }

    async fn findings(&self, _project_id: u64, _filter: &FindingFilter) -> Vec<Finding> {
        self.call_counts.lock().await.findings += 1;
        self.findings.lock().await.clone()
    }

    async fn bulk_status_update(&self, project_id: u64, finding_ids: &[u64], status: u64) -> JobId {
        self.call_counts.lock().await.bulk_status_update += 1;

        if finding_ids.is_empty() {
            return JobId::none();
        }

        let mut next = self.next_job_id.lock().await;
        let job_id = JobId::from(next.to_string());
        *next += 1;

        self.bulk_updates.lock().await.push(BulkUpdate {
            project_id,
            finding_ids: finding_ids.to_vec(),
            status,
            job_id: job_id.clone(),
        });

        job_id
    }

    async fn wait_for_job(&self, job_id: &JobId) {
        self.call_counts.lock().await.wait_for_job += 1;
        self.waited_jobs.lock().await.push(job_id.clone());
    }
}
