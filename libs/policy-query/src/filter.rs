//! Filter compilation: UI filter descriptors into a [`PolicyQuery`].

use serde::Deserialize;

use crate::fields;
use crate::query::{Condition, PolicyQuery};

/// Scalar fields targeted by the multi-field `searchFields` descriptor.
const SEARCH_FIELDS: [&str; 4] = ["named_insured", "MNPID", "MBU_handler", "producing_UW"];

/// Fields for which a plain `contains` filter is honored. A `contains` on
/// any other field is dropped.
const CONTAINS_FIELDS: [&str; 2] = ["MBU_handler", "producing_UW"];

/// A single filter descriptor as sent by the UI's filter builder.
///
/// Every part is optional: descriptors missing a field, action, or usable
/// value compile to nothing instead of failing the request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterEntry {
    pub field: Option<String>,
    pub filter_action: Option<String>,
    pub filter_value: Option<FilterValue>,
}

/// Filter value: a bare string for substring searches, an array for
/// membership and equality filters.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    One(String),
    Many(Vec<String>),
}

impl FilterValue {
    fn as_text(&self) -> Option<&str> {
        match self {
            FilterValue::One(value) => Some(value),
            FilterValue::Many(_) => None,
        }
    }

    /// The value as a list; a bare string becomes a one-element list.
    fn as_list(&self) -> Vec<String> {
        match self {
            FilterValue::One(value) => vec![value.clone()],
            FilterValue::Many(values) => values.clone(),
        }
    }
}

/// Compile an ordered list of filter descriptors into a single query.
///
/// Descriptors combine with AND, except the `searchFields`/`contains`
/// descriptor, which becomes the query's top-level OR group across a fixed
/// set of fields. Field names pass through [`fields::internal_name`] first.
pub fn compile(entries: &[FilterEntry]) -> PolicyQuery {
    let mut query = PolicyQuery::default();

    for entry in entries {
        let (Some(field), Some(action)) = (entry.field.as_deref(), entry.filter_action.as_deref())
        else {
            continue;
        };

        if field == "searchFields" && action == "contains" {
            let Some(term) = entry.filter_value.as_ref().and_then(FilterValue::as_text) else {
                continue;
            };
            // A later searchFields descriptor replaces the group wholesale.
            query.any = search_fields_group(term);
            continue;
        }

        let field = fields::internal_name(field);
        let Some(value) = entry.filter_value.as_ref() else {
            continue;
        };

        match action {
            "in" => query.all.push(Condition::In {
                field: field.to_string(),
                values: value.as_list(),
            }),
            "equals" => {
                let values = value.as_list();
                if field == "status" {
                    // Status equality matches any of the given codes,
                    // normalized to the canonical upper-case form.
                    query.all.push(Condition::In {
                        field: field.to_string(),
                        values: values.into_iter().map(|v| v.to_uppercase()).collect(),
                    });
                } else if let Some(first) = values.into_iter().next() {
                    // Non-status equality uses only the first value.
                    query.all.push(Condition::Eq {
                        field: field.to_string(),
                        value: first,
                    });
                }
            }
            "contains" => {
                if CONTAINS_FIELDS.contains(&field) {
                    if let Some(term) = value.as_text() {
                        query.all.push(Condition::Contains {
                            field: field.to_string(),
                            value: term.to_string(),
                        });
                    }
                }
            }
            _ => {}
        }
    }

    query
}

fn search_fields_group(term: &str) -> Vec<Condition> {
    let mut group: Vec<Condition> = SEARCH_FIELDS
        .iter()
        .map(|field| Condition::Contains {
            field: (*field).to_string(),
            value: term.to_string(),
        })
        .collect();

    // line_of_business holds a sequence, so the substring match applies to
    // its elements.
    group.push(Condition::AnyContains {
        field: "line_of_business".to_string(),
        value: term.to_string(),
    });

    group
}
