//! In-memory policy store
//!
//! Evaluates compiled queries directly against a record list. This is the
//! substitutable backend used for deterministic service and API tests; its
//! matching semantics mirror the MongoDB rendering in [`super::mongo`].

use std::cmp::Ordering;
use std::collections::BTreeMap;

use async_trait::async_trait;
use polaris_query::{Condition, PolicyQuery, SortKey};

use crate::db::traits::{PolicyStore, StatusGroup};
use crate::models::Policy;
use crate::Result;

/// Policy store over an in-memory record list.
#[derive(Debug, Clone, Default)]
pub struct MemoryPolicyStore {
    policies: Vec<Policy>,
}

impl MemoryPolicyStore {
    pub fn new(policies: Vec<Policy>) -> Self {
        Self { policies }
    }

    fn matching(&self, query: &PolicyQuery) -> Vec<&Policy> {
        self.policies
            .iter()
            .filter(|policy| matches_query(policy, query))
            .collect()
    }
}

#[async_trait]
impl PolicyStore for MemoryPolicyStore {
    async fn find(
        &self,
        query: &PolicyQuery,
        sort: &[SortKey],
        skip: u64,
        limit: i64,
    ) -> Result<Vec<Policy>> {
        let mut matches = self.matching(query);
        if !sort.is_empty() {
            matches.sort_by(|a, b| compare(a, b, sort));
        }

        let skip = usize::try_from(skip).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(0);

        Ok(matches
            .into_iter()
            .skip(skip)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn count(&self, query: &PolicyQuery) -> Result<u64> {
        Ok(self.matching(query).len() as u64)
    }

    async fn distinct_lines_of_business(&self) -> Result<Vec<String>> {
        let mut lines: Vec<String> = self
            .policies
            .iter()
            .flat_map(|policy| policy.line_of_business.iter().cloned())
            .collect();
        lines.sort();
        lines.dedup();
        Ok(lines)
    }

    async fn status_counts(&self) -> Result<Vec<StatusGroup>> {
        let mut counts = BTreeMap::new();
        for policy in &self.policies {
            *counts.entry(policy.status.clone()).or_insert(0i64) += 1;
        }

        Ok(counts
            .into_iter()
            .map(|(id, count)| StatusGroup { id, count })
            .collect())
    }
}

enum FieldValue<'a> {
    Text(&'a str),
    List(&'a [String]),
}

fn field_value<'a>(policy: &'a Policy, field: &str) -> Option<FieldValue<'a>> {
    match field {
        "policy_number" => Some(FieldValue::Text(&policy.policy_number)),
        "named_insured" => Some(FieldValue::Text(&policy.named_insured)),
        "status" => Some(FieldValue::Text(&policy.status)),
        "line_of_business" => Some(FieldValue::List(&policy.line_of_business)),
        "MNPID" => policy.mnpid.as_deref().map(FieldValue::Text),
        "MBU_handler" => policy.mbu_handler.as_deref().map(FieldValue::Text),
        "producing_UW" => policy.producing_uw.as_deref().map(FieldValue::Text),
        _ => None,
    }
}

fn matches_query(policy: &Policy, query: &PolicyQuery) -> bool {
    query
        .all
        .iter()
        .all(|condition| matches_condition(policy, condition))
        && (query.any.is_empty()
            || query
                .any
                .iter()
                .any(|condition| matches_condition(policy, condition)))
}

fn matches_condition(policy: &Policy, condition: &Condition) -> bool {
    match condition {
        Condition::Eq { field, value } => match field_value(policy, field) {
            Some(FieldValue::Text(text)) => text == value,
            Some(FieldValue::List(items)) => items.iter().any(|item| item == value),
            None => false,
        },
        Condition::In { field, values } => match field_value(policy, field) {
            Some(FieldValue::Text(text)) => values.iter().any(|candidate| candidate == text),
            Some(FieldValue::List(items)) => items.iter().any(|item| values.contains(item)),
            None => false,
        },
        Condition::Contains { field, value } | Condition::AnyContains { field, value } => {
            let needle = value.to_lowercase();
            match field_value(policy, field) {
                Some(FieldValue::Text(text)) => text.to_lowercase().contains(&needle),
                Some(FieldValue::List(items)) => items
                    .iter()
                    .any(|item| item.to_lowercase().contains(&needle)),
                None => false,
            }
        }
    }
}

fn compare(a: &Policy, b: &Policy, sort: &[SortKey]) -> Ordering {
    for key in sort {
        // Missing values sort first, as they do in the document store.
        let ordering = sort_value(a, &key.field).cmp(&sort_value(b, &key.field));
        let ordering = if key.ascending {
            ordering
        } else {
            ordering.reverse()
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

fn sort_value(policy: &Policy, field: &str) -> Option<String> {
    match field_value(policy, field) {
        Some(FieldValue::Text(text)) => Some(text.to_string()),
        Some(FieldValue::List(items)) => items.first().cloned(),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn date(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    fn policy(number: &str, insured: &str, lines: &[&str], status: &str) -> Policy {
        Policy {
            policy_number: number.to_string(),
            named_insured: insured.to_string(),
            line_of_business: lines.iter().map(|line| line.to_string()).collect(),
            status: status.to_string(),
            effective_date: date("2024-01-01T00:00:00Z"),
            expiration_date: date("2025-01-01T00:00:00Z"),
            premium: 5000.0,
            mnpid: None,
            mbu_handler: None,
            producing_uw: None,
        }
    }

    fn store() -> MemoryPolicyStore {
        MemoryPolicyStore::new(vec![
            policy("POL001", "Acme Corporation", &["Commercial Auto"], "BOUND"),
            policy(
                "POL002",
                "XYZ Industries",
                &["General Liability", "Commercial Auto"],
                "QUOTED",
            ),
            policy("POL003", "ABC Company", &["Workers Compensation"], "BOUND"),
        ])
    }

    #[tokio::test]
    async fn in_condition_matches_array_elements() {
        let query = PolicyQuery {
            all: vec![Condition::In {
                field: "line_of_business".to_string(),
                values: vec!["Commercial Auto".to_string()],
            }],
            any: Vec::new(),
        };

        assert_eq!(store().count(&query).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn or_group_matches_any_condition() {
        let query = PolicyQuery {
            all: Vec::new(),
            any: vec![
                Condition::Contains {
                    field: "named_insured".to_string(),
                    value: "acme".to_string(),
                },
                Condition::AnyContains {
                    field: "line_of_business".to_string(),
                    value: "workers".to_string(),
                },
            ],
        };

        assert_eq!(store().count(&query).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn find_applies_sort_skip_and_limit() {
        let sort = [SortKey {
            field: "named_insured".to_string(),
            ascending: true,
        }];

        let page = store()
            .find(&PolicyQuery::default(), &sort, 1, 10)
            .await
            .unwrap();

        let insureds: Vec<&str> = page.iter().map(|p| p.named_insured.as_str()).collect();
        assert_eq!(insureds, vec!["Acme Corporation", "XYZ Industries"]);
    }

    #[tokio::test]
    async fn status_counts_sorted_by_code() {
        let groups = store().status_counts().await.unwrap();
        assert_eq!(
            groups,
            vec![
                StatusGroup {
                    id: "BOUND".to_string(),
                    count: 2
                },
                StatusGroup {
                    id: "QUOTED".to_string(),
                    count: 1
                },
            ]
        );
    }

    #[tokio::test]
    async fn distinct_lines_deduplicate_across_records() {
        let lines = store().distinct_lines_of_business().await.unwrap();
        assert_eq!(
            lines,
            vec![
                "Commercial Auto".to_string(),
                "General Liability".to_string(),
                "Workers Compensation".to_string(),
            ]
        );
    }
}
