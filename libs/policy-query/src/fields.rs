//! External (UI) to internal (storage) field name mapping.

/// Translate a UI-facing field name into the storage field name.
///
/// Unknown names pass through unchanged, so the mapping is total. Extend the
/// table as the stored schema diverges further from the grid's column model.
pub fn internal_name(field: &str) -> &str {
    match field {
        "programLineOfBusinesses" => "line_of_business",
        "masterNameInsuredAccountName" => "named_insured",
        other => other,
    }
}
