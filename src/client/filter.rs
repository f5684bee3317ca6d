//! Filter and pagination types for findings table requests

use serde::{Deserialize, Serialize};

/// Fixed page size for findings table requests.
/// A page shorter than this signals the last page.
pub const PAGE_SIZE: usize = 2500;

/// Filter criteria for the findings table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FindingFilter {
    /// Restrict to findings currently holding this status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl FindingFilter {
    /// Create an empty filter (matches everything)
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the filter to a single status key
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

/// Sort specification for table requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sort {
    /// Field to sort by
    pub by: String,

    /// "ascending" or "descending"
    pub direction: String,
}

impl Sort {
    /// Ascending by finding ID, the order the pagination loop relies on
    pub fn by_id_ascending() -> Self {
        Self {
            by: "id".to_string(),
            direction: "ascending".to_string(),
        }
    }
}

/// Pagination window for table requests. Pages are 1-indexed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pagination {
    pub page: usize,

    #[serde(rename = "perPage")]
    pub per_page: usize,
}

/// Request body for `POST /projects/{id}/findings/table`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableRequest {
    pub filter: FindingFilter,
    pub sort: Sort,
    pub pagination: Pagination,
}

impl TableRequest {
    /// First page of a full scan for the given criteria
    pub fn first_page(filter: FindingFilter) -> Self {
        Self {
            filter,
            sort: Sort::by_id_ascending(),
            pagination: Pagination {
                page: 1,
                per_page: PAGE_SIZE,
            },
        }
    }

    /// Advance the window to the next page
    pub fn next_page(&mut self) {
        self.pagination.page += 1;
    }
}

/// Request body for `POST /projects/{id}/bulk-status-update`.
///
/// The endpoint expects finding IDs as strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkStatusUpdate {
    pub filter: BulkFilter,
    pub status: u64,
}

/// Finding selector for a bulk update
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkFilter {
    pub finding: Vec<String>,
}

impl BulkStatusUpdate {
    /// Build a bulk update for the given finding IDs and target status
    pub fn new(finding_ids: &[u64], status: u64) -> Self {
        Self {
            filter: BulkFilter {
                finding: finding_ids.iter().map(|id| id.to_string()).collect(),
            },
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_table_request_wire_shape() {
        let req = TableRequest::first_page(FindingFilter::new().status("false-positive"));
        let value = serde_json::to_value(&req).unwrap();

        assert_eq!(
            value,
            json!({
                "filter": {"status": "false-positive"},
                "sort": {"by": "id", "direction": "ascending"},
                "pagination": {"page": 1, "perPage": 2500}
            })
        );
    }

    #[test]
    fn test_empty_filter_serializes_empty() {
        let value = serde_json::to_value(FindingFilter::new()).unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn test_next_page_increments() {
        let mut req = TableRequest::first_page(FindingFilter::new());
        assert_eq!(req.pagination.page, 1);

        req.next_page();
        req.next_page();
        assert_eq!(req.pagination.page, 3);
        assert_eq!(req.pagination.per_page, PAGE_SIZE);
    }

    #[test]
    fn test_bulk_update_stringifies_ids() {
        let req = BulkStatusUpdate::new(&[10, 12], 3);
        let value = serde_json::to_value(&req).unwrap();

        assert_eq!(
            value,
            json!({
                "filter": {"finding": ["10", "12"]},
                "status": 3
            })
        );
    }
}
