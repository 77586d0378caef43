//! Compiled query and sort representations.
//!
//! These types are the contract between the compilers and the store
//! implementations. They describe matching semantics, not driver syntax.

/// A single per-field condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// Field value equals the given string exactly.
    ///
    /// On an array field this matches when any element equals the value.
    Eq { field: String, value: String },

    /// Field value is a member of the given set.
    ///
    /// On an array field this matches when any element is in the set. An
    /// empty set matches nothing.
    In { field: String, values: Vec<String> },

    /// Case-insensitive substring match on the field value.
    Contains { field: String, value: String },

    /// Case-insensitive substring match against any element of an array
    /// field.
    AnyContains { field: String, value: String },
}

/// Compiled query predicate.
///
/// `all` conditions combine with AND. `any` is the single top-level OR group
/// contributed by the multi-field search descriptor; a record matches the
/// query when it satisfies every `all` condition and, if the group is
/// non-empty, at least one `any` condition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyQuery {
    pub all: Vec<Condition>,
    /// At most one group exists. Compiling a later multi-field search
    /// descriptor replaces the current group entirely (last one wins).
    pub any: Vec<Condition>,
}

impl PolicyQuery {
    /// True when the query matches every record.
    pub fn is_unfiltered(&self) -> bool {
        self.all.is_empty() && self.any.is_empty()
    }
}

/// One key of a compiled sort specification. Keys apply in order; the first
/// is the primary sort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    /// Internal storage field name.
    pub field: String,
    /// Ascending when true, descending otherwise.
    pub ascending: bool,
}
