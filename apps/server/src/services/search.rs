//! Search service - policy search implementation
//!
//! Orchestrates search operations by:
//! - Compiling the request's filter and sort entries via `polaris-query`
//! - Executing the paginated query against the policy store
//! - Returning the page together with the unpaginated total

use std::sync::Arc;

use polaris_query::{filter, sort, FilterEntry, SortEntry};
use serde::{Deserialize, Serialize};

use crate::{db::PolicyStore, models::Policy, Result};

/// Search request body as sent by the UI grid.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    #[serde(default)]
    pub filter_entries: Vec<FilterEntry>,
    #[serde(default)]
    pub sort_entries: Vec<SortEntry>,
    /// Records to skip.
    #[serde(default)]
    pub from: u64,
    /// Page size.
    #[serde(default = "default_size")]
    pub size: i64,
}

fn default_size() -> i64 {
    10
}

/// One page of matching records plus the total ignoring pagination.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    pub data: Vec<Policy>,
    pub total: u64,
    pub from: u64,
    pub size: i64,
}

/// Search service coordinates query compilation and store access.
pub struct SearchService {
    store: Arc<dyn PolicyStore>,
}

impl SearchService {
    pub fn new(store: Arc<dyn PolicyStore>) -> Self {
        Self { store }
    }

    /// Execute a search request.
    ///
    /// `total` always reflects the full matching set; a `from` past the end
    /// yields an empty page, not an error. Store failures propagate.
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResult> {
        let query = filter::compile(&request.filter_entries);
        let sort = sort::compile(&request.sort_entries);

        tracing::debug!(
            ?query,
            ?sort,
            from = request.from,
            size = request.size,
            "Executing policy search"
        );

        let total = self.store.count(&query).await?;
        let data = self
            .store
            .find(&query, &sort, request.from, request.size)
            .await?;

        tracing::debug!(total, returned = data.len(), "Search completed");

        Ok(SearchResult {
            data,
            total,
            from: request.from,
            size: request.size,
        })
    }
}
