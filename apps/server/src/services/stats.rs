//! Stats service - status counts and distinct lines of business

use std::sync::Arc;

use serde::Serialize;

use crate::{db::PolicyStore, Result};

/// Status code with its record count and display label.
#[derive(Debug, Clone, Serialize)]
pub struct StatusCount {
    pub id: String,
    pub count: i64,
    pub name: String,
}

/// Aggregate view over the whole collection.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResult {
    pub statuses: Vec<StatusCount>,
    pub lines_of_business: Vec<String>,
}

/// Stats service recomputes collection-wide aggregates on every call.
pub struct StatsService {
    store: Arc<dyn PolicyStore>,
}

impl StatsService {
    pub fn new(store: Arc<dyn PolicyStore>) -> Self {
        Self { store }
    }

    /// Distinct lines of business plus per-status counts, each status
    /// decorated with its display label. Statuses come back sorted by code.
    pub async fn line_of_business_stats(&self) -> Result<StatsResult> {
        let lines_of_business = self.store.distinct_lines_of_business().await?;

        let mut statuses: Vec<StatusCount> = self
            .store
            .status_counts()
            .await?
            .into_iter()
            .map(|group| StatusCount {
                name: status_label(&group.id).unwrap_or("Unknown").to_string(),
                id: group.id,
                count: group.count,
            })
            .collect();
        statuses.sort_by(|a, b| a.id.cmp(&b.id));

        tracing::debug!(
            statuses = statuses.len(),
            lines = lines_of_business.len(),
            "Computed line-of-business stats"
        );

        Ok(StatsResult {
            statuses,
            lines_of_business,
        })
    }
}

/// Display label for a policy status code.
fn status_label(code: &str) -> Option<&'static str> {
    match code {
        "ALL" => Some("All"),
        "PENDING_RENEWAL" => Some("Pending Renewal"),
        "APPROVAL_PENDING" => Some("Approval Pending"),
        "IN_DESIGN" => Some("In Design"),
        "PENDING_QUOTE" => Some("Pending Quote"),
        "QUOTED" => Some("Quoted"),
        "BOUND" => Some("Bound"),
        "ISSUED" => Some("Issued"),
        "CLOSED" => Some("Closed"),
        _ => None,
    }
}
