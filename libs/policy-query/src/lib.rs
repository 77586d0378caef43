//! Query translation for the policy search API.
//!
//! Translates the UI grid's filter and sort descriptors into store-neutral
//! query shapes:
//! - [`fields`] maps external (UI) field names to internal storage names
//! - [`filter`] compiles filter descriptors into a [`PolicyQuery`]
//! - [`sort`] compiles sort descriptors into an ordered list of [`SortKey`]s
//!
//! Compilation is best-effort by design: the UI's dynamic filter builder may
//! send descriptors the backend does not understand, and those compile to
//! nothing rather than failing the request. The compiled forms carry no
//! driver types; the server's store implementations render them into native
//! queries.

pub mod fields;
pub mod filter;
pub mod query;
pub mod sort;

pub use filter::{FilterEntry, FilterValue};
pub use query::{Condition, PolicyQuery, SortKey};
pub use sort::SortEntry;
