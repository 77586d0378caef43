//! Core trait for policy storage backends

use async_trait::async_trait;
use polaris_query::{PolicyQuery, SortKey};
use serde::{Deserialize, Serialize};

use crate::{models::Policy, Result};

/// Per-status record count produced by the group aggregation, keyed by the
/// raw status code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusGroup {
    pub id: String,
    pub count: i64,
}

/// Read-only access to the policy collection.
///
/// This trait defines the four contract operations the search and stats
/// services need. The production backend is MongoDB; tests substitute the
/// in-memory implementation. Implementations must be safe for concurrent
/// use — every operation is a read.
#[async_trait]
pub trait PolicyStore: Send + Sync {
    /// Fetch one page of records matching `query`, ordered by `sort`.
    ///
    /// An empty `sort` leaves the store's natural order. `skip` past the end
    /// of the result set yields an empty page, not an error.
    async fn find(
        &self,
        query: &PolicyQuery,
        sort: &[SortKey],
        skip: u64,
        limit: i64,
    ) -> Result<Vec<Policy>>;

    /// Count all records matching `query`, ignoring pagination.
    async fn count(&self, query: &PolicyQuery) -> Result<u64>;

    /// Distinct set of line-of-business values across all records.
    async fn distinct_lines_of_business(&self) -> Result<Vec<String>>;

    /// Record counts grouped by status code.
    async fn status_counts(&self) -> Result<Vec<StatusGroup>>;
}
