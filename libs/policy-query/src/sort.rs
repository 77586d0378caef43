//! Sort compilation: UI sort descriptors into ordered sort keys.

use serde::Deserialize;

use crate::fields;
use crate::query::SortKey;

/// A single sort descriptor from the UI grid: column id plus direction.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortEntry {
    pub col_id: Option<String>,
    pub sort: Option<String>,
}

/// Compile sort descriptors in order; the first key is the primary sort.
///
/// `asc` sorts ascending, anything else descending. Descriptors without a
/// column id are skipped. An empty result leaves the store's natural order.
pub fn compile(entries: &[SortEntry]) -> Vec<SortKey> {
    entries
        .iter()
        .filter_map(|entry| {
            let field = entry.col_id.as_deref()?;
            Some(SortKey {
                field: fields::internal_name(field).to_string(),
                ascending: entry.sort.as_deref() == Some("asc"),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(col_id: &str, sort: &str) -> SortEntry {
        SortEntry {
            col_id: Some(col_id.to_string()),
            sort: Some(sort.to_string()),
        }
    }

    #[test]
    fn maps_grid_column_to_storage_field() {
        let keys = compile(&[entry("masterNameInsuredAccountName", "asc")]);
        assert_eq!(
            keys,
            vec![SortKey {
                field: "named_insured".to_string(),
                ascending: true
            }]
        );
    }

    #[test]
    fn non_asc_directions_sort_descending() {
        assert!(!compile(&[entry("status", "desc")])[0].ascending);
        assert!(!compile(&[entry("status", "DESC")])[0].ascending);
        assert!(!compile(&[SortEntry {
            col_id: Some("status".to_string()),
            sort: None,
        }])[0]
            .ascending);
    }

    #[test]
    fn preserves_descriptor_order() {
        let keys = compile(&[entry("status", "asc"), entry("policy_number", "desc")]);
        assert_eq!(keys[0].field, "status");
        assert_eq!(keys[1].field, "policy_number");
    }

    #[test]
    fn skips_descriptors_without_a_column() {
        let keys = compile(&[
            SortEntry::default(),
            entry("policy_number", "asc"),
        ]);
        assert_eq!(keys.len(), 1);
        assert_eq!(keys[0].field, "policy_number");
    }

    #[test]
    fn empty_input_compiles_to_no_keys() {
        assert!(compile(&[]).is_empty());
    }
}
