//! Wire models for the Code Dx API

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Project resource
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Server-assigned project ID
    pub id: u64,

    /// Project display name
    pub name: String,
}

/// A finding status defined for a project (e.g. "false-positive" or a
/// custom disposition label)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Status {
    /// Server-assigned status ID. Zero never occurs on the wire and is used
    /// by callers as the "not resolved" marker.
    pub id: u64,

    /// Human-readable status name shown in the Code Dx UI
    pub display: String,
}

/// Status table for a project, keyed by an opaque server-defined key
pub type StatusMap = HashMap<String, Status>;

/// A single row from the findings table endpoint.
///
/// The server returns far more fields than the sync flow consumes; everything
/// beyond the ID is kept in `extra` so authorization policies can inspect any
/// field the server reported.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    /// Server-assigned finding ID
    pub id: u64,

    /// All remaining server-defined fields, untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Identifier of an asynchronous server-side job.
///
/// The sentinel value `-1` marks a submission that never reached the server
/// (empty batch or failed request); waiting on the sentinel is a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(String);

impl JobId {
    const SENTINEL: &'static str = "-1";

    /// The "nothing submitted" sentinel
    pub fn none() -> Self {
        JobId(Self::SENTINEL.to_string())
    }

    /// True if this is the sentinel rather than a real server job
    pub fn is_none(&self) -> bool {
        self.0 == Self::SENTINEL
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for JobId {
    fn from(id: String) -> Self {
        JobId(id)
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Job state report from the jobs endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    /// Current lifecycle state; the job is terminal once this leaves "queued"
    pub status: String,
}

impl Job {
    /// True while the job is still waiting to run
    pub fn is_queued(&self) -> bool {
        self.status == "queued"
    }
}
