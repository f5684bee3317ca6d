//! Code Dx API client implementation

use std::time::{Duration, Instant};

use async_trait::async_trait;
use indicatif::ProgressBar;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client as HttpClient, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::CodeDxApi;
use super::filter::{BulkStatusUpdate, FindingFilter, PAGE_SIZE, TableRequest};
use super::models::{Finding, Job, JobId, Project, StatusMap};
use crate::config::CodeDxConfig;
use crate::error::{ApiError, ConfigError, Result};

/// Interval between job status polls
const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Per-request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

type ApiResult<T> = std::result::Result<T, ApiError>;

/// Code Dx API client.
///
/// Holds the base URL, default headers, and the HTTP connection pool. The
/// constructor performs no I/O; project resolution is an explicit operation
/// driven by the caller.
pub struct CodeDxClient {
    http: HttpClient,
    base_url: String,
    job_timeout: Option<Duration>,
}

impl CodeDxClient {
    /// Create a new client from connection settings.
    ///
    /// Certificate verification is only relaxed when the configuration sets
    /// `insecure: true`.
    pub fn new(config: &CodeDxConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut api_key = HeaderValue::from_str(&config.api_key).map_err(|_| {
            ConfigError::Invalid("API key contains characters not valid in a header".to_string())
        })?;
        api_key.set_sensitive(true);
        headers.insert("API-Key", api_key);

        let http = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .default_headers(headers)
            .danger_accept_invalid_certs(config.insecure)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url(),
            job_timeout: config.job_timeout(),
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    /// GET a JSON resource
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self.http.get(self.api_url(path)).send().await?;
        Self::decode(response).await
    }

    /// POST a JSON body and decode a JSON response
    async fn post_json<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: serde::Serialize + Sync,
        T: DeserializeOwned,
    {
        let response = self.http.post(self.api_url(path)).json(body).send().await?;
        Self::decode(response).await
    }

    /// Any status other than 200 is a failure for this API
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
        let status = response.status();
        if status != StatusCode::OK {
            return Err(ApiError::Status(status.as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse response: {e}")))
    }
}

#[async_trait]
impl CodeDxApi for CodeDxClient {
    async fn projects(&self) -> Vec<Project> {
        #[derive(Deserialize)]
        struct ProjectsResponse {
            projects: Vec<Project>,
        }

        match self.get_json::<ProjectsResponse>("/projects").await {
            Ok(response) => response.projects,
            Err(err) => {
                log::warn!("project listing failed: {err}");
                Vec::new()
            }
        }
    }

    async fn statuses(&self, project_id: u64) -> StatusMap {
        let path = format!("/projects/{project_id}/statuses");
        match self.get_json(&path).await {
            Ok(statuses) => statuses,
            Err(err) => {
                log::warn!("status listing for project {project_id} failed: {err}");
                StatusMap::new()
            }
        }
    }

    async fn findings(&self, project_id: u64, filter: &FindingFilter) -> Vec<Finding> {
        let path = format!("/projects/{project_id}/findings/table");
        let mut request = TableRequest::first_page(filter.clone());
        let mut findings = Vec::new();

        loop {
            let page: Vec<Finding> = match self.post_json(&path, &request).await {
                Ok(page) => page,
                Err(err) => {
                    // A failed page invalidates the whole scan; accumulated
                    // pages are discarded, not returned.
                    log::warn!(
                        "findings page {} for project {project_id} failed: {err}",
                        request.pagination.page
                    );
                    return Vec::new();
                }
            };

            let last_page = page.len() < PAGE_SIZE;
            findings.extend(page);
            if last_page {
                break;
            }
            request.next_page();
        }

        log::debug!(
            "collected {} findings for project {project_id}",
            findings.len()
        );
        findings
    }

    async fn bulk_status_update(&self, project_id: u64, finding_ids: &[u64], status: u64) -> JobId {
        if finding_ids.is_empty() {
            return JobId::none();
        }

        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct BulkResponse {
            job_id: JobId,
        }

        let path = format!("/projects/{project_id}/bulk-status-update");
        let body = BulkStatusUpdate::new(finding_ids, status);

        match self.post_json::<_, BulkResponse>(&path, &body).await {
            Ok(response) => response.job_id,
            Err(err) => {
                log::warn!("bulk status update for project {project_id} failed: {err}");
                JobId::none()
            }
        }
    }

    async fn wait_for_job(&self, job_id: &JobId) {
        if job_id.is_none() {
            return;
        }

        let spinner = ProgressBar::new_spinner();
        spinner.set_message(format!("waiting on job {job_id}"));
        spinner.enable_steady_tick(Duration::from_millis(120));

        let path = format!("/jobs/{}", job_id.as_str());
        let started = Instant::now();

        loop {
            let job: Job = match self.get_json(&path).await {
                Ok(job) => job,
                Err(err) => {
                    log::warn!("poll for job {job_id} failed: {err}");
                    break;
                }
            };

            if !job.is_queued() {
                log::debug!("job {job_id} left the queue with state \"{}\"", job.status);
                break;
            }

            if let Some(ceiling) = self.job_timeout {
                if started.elapsed() >= ceiling {
                    log::warn!(
                        "gave up waiting on job {job_id} after {}s",
                        ceiling.as_secs()
                    );
                    break;
                }
            }

            tokio::time::sleep(POLL_INTERVAL).await;
        }

        spinner.finish_and_clear();
    }
}
