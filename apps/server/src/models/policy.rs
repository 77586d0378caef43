//! Persisted policy records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An insurance policy record as stored in the `policies` collection.
///
/// Invariants maintained by the seeding/import side: `status` holds the
/// upper-case canonical code, and `line_of_business` is always a sequence,
/// even when it holds a single value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Policy {
    pub policy_number: String,
    pub named_insured: String,
    pub line_of_business: Vec<String>,
    pub status: String,
    pub effective_date: DateTime<Utc>,
    pub expiration_date: DateTime<Utc>,
    pub premium: f64,

    /// Internal master-name/program identifier.
    #[serde(rename = "MNPID", default, skip_serializing_if = "Option::is_none")]
    pub mnpid: Option<String>,

    /// Handling business unit contact.
    #[serde(rename = "MBU_handler", default, skip_serializing_if = "Option::is_none")]
    pub mbu_handler: Option<String>,

    /// Producing underwriter.
    #[serde(rename = "producing_UW", default, skip_serializing_if = "Option::is_none")]
    pub producing_uw: Option<String>,
}
