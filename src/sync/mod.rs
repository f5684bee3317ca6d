//! False-positive disposition sync flow
//!
//! Linear pass over one project: resolve the project and both disposition
//! statuses, fetch everything currently marked false-positive, partition by
//! the authorization rule, then apply each bucket with a bulk update and wait
//! for the server-side job. Nothing is mutated until every precondition has
//! resolved.

use std::collections::HashMap;

use colored::Colorize;

use crate::client::{CodeDxApi, FindingFilter, StatusMap};
use crate::config::FpMarkupConfig;
use crate::error::{Error, Result};

pub mod authorize;

pub use authorize::{AuthorizationPolicy, DenyAll};

/// Status key the candidate findings currently hold
const FALSE_POSITIVE: &str = "false-positive";

/// Outcome of one sync pass
#[derive(Debug, Clone)]
pub struct SyncReport {
    pub project_id: u64,
    pub authorized: usize,
    pub unauthorized: usize,
}

/// Resolve the two configured display names against a project's status table.
///
/// The first non-zero assignment wins per name, so a stray zero id can never
/// mask an already-resolved status. An unresolved name is a fatal
/// precondition failure.
fn resolve_statuses(statuses: &StatusMap, markup: &FpMarkupConfig) -> Result<(u64, u64)> {
    let mut unauth_status = 0;
    let mut auth_status = 0;

    for status in statuses.values() {
        if unauth_status == 0 && status.display == markup.status_fp_unauth {
            unauth_status = status.id;
        }
        if auth_status == 0 && status.display == markup.status_fp_auth {
            auth_status = status.id;
        }
    }

    if unauth_status == 0 {
        return Err(Error::StatusNotFound(markup.status_fp_unauth.clone()));
    }
    if auth_status == 0 {
        return Err(Error::StatusNotFound(markup.status_fp_auth.clone()));
    }

    Ok((unauth_status, auth_status))
}

/// Run one sync pass over the named project.
pub async fn run(
    client: &dyn CodeDxApi,
    project_name: &str,
    markup: &FpMarkupConfig,
    policy: &dyn AuthorizationPolicy,
) -> Result<SyncReport> {
    // Resolve the project name. Duplicate names keep the later entry,
    // matching the server's listing order.
    let mut project_map: HashMap<String, u64> = HashMap::new();
    for project in client.projects().await {
        project_map.insert(project.name, project.id);
    }

    let project_id = *project_map
        .get(project_name)
        .ok_or_else(|| Error::UnknownProject(project_name.to_string()))?;
    println!("Project ID: {}", project_id.to_string().cyan());

    // Both disposition statuses must resolve before anything is fetched or
    // mutated.
    let statuses = client.statuses(project_id).await;
    let (unauth_status, auth_status) = resolve_statuses(&statuses, markup)?;
    log::debug!(
        "resolved \"{}\" -> {unauth_status}, \"{}\" -> {auth_status}",
        markup.status_fp_unauth,
        markup.status_fp_auth
    );

    // Gather candidates and partition by the authorization rule.
    let filter = FindingFilter::new().status(FALSE_POSITIVE);
    let findings = client.findings(project_id, &filter).await;

    let mut auth_list = Vec::new();
    let mut unauth_list = Vec::new();
    for finding in &findings {
        if policy.authorize(finding) {
            auth_list.push(finding.id);
        } else {
            unauth_list.push(finding.id);
        }
    }

    println!(
        "False Positive authorization for {} findings",
        auth_list.len()
    );
    println!(
        "False Positive not authorized for {} findings",
        unauth_list.len()
    );

    // Unauthorized bucket first, then authorized; each job runs to
    // completion before the next submission.
    let job = client
        .bulk_status_update(project_id, &unauth_list, unauth_status)
        .await;
    client.wait_for_job(&job).await;

    let job = client
        .bulk_status_update(project_id, &auth_list, auth_status)
        .await;
    client.wait_for_job(&job).await;

    println!("{}", "Done.".green());

    Ok(SyncReport {
        project_id,
        authorized: auth_list.len(),
        unauthorized: unauth_list.len(),
    })
}
