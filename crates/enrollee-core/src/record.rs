//! The enrollee record type and its positional decoder

use serde::{Deserialize, Serialize};

/// Column names in the fixed field order used for decoding and encoding
pub const COLUMNS: [&str; 5] = ["user_id", "first_name", "last_name", "version", "insurance"];

/// Sentinel user ID substituted when the field does not parse
pub const MISSING_USER_ID: i64 = -1;

/// Version substituted when the field does not parse
pub const DEFAULT_VERSION: i64 = 1;

/// Insurance value substituted when the field is empty
pub const INSURANCE_NOT_PROVIDED: &str = "__not_provided";

/// A single enrollee record
///
/// Every field is populated on decode; malformed input is repaired with
/// the sentinel defaults above, never rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollee {
    /// User ID; not guaranteed unique in raw input
    pub user_id: i64,
    /// First name, verbatim from input
    pub first_name: String,
    /// Last name, verbatim from input
    pub last_name: String,
    /// Record version; picks the winner among duplicate user IDs
    pub version: i64,
    /// Insurance name, the grouping key
    pub insurance: String,
}

impl Enrollee {
    /// Decode one row of raw fields, in the order given by [`COLUMNS`].
    ///
    /// An unparseable `user_id` becomes `-1`, an unparseable `version`
    /// becomes `1`, and an empty `insurance` becomes `"__not_provided"`.
    /// Names pass through without trimming. Fields beyond the fifth are
    /// ignored. The caller must supply at least 5 fields; the reader
    /// rejects shorter rows before decoding.
    pub fn from_fields(fields: &[&str]) -> Self {
        let insurance = if fields[4].is_empty() {
            INSURANCE_NOT_PROVIDED.to_string()
        } else {
            fields[4].to_string()
        };

        Self {
            user_id: parse_int_or(fields[0], MISSING_USER_ID),
            first_name: fields[1].to_string(),
            last_name: fields[2].to_string(),
            version: parse_int_or(fields[3], DEFAULT_VERSION),
            insurance,
        }
    }
}

/// Parse a whole field as an integer, tolerating surrounding whitespace.
///
/// Unlike a prefix parse, `"12abc"` is unparseable here and falls back to
/// the default.
fn parse_int_or(s: &str, default: i64) -> i64 {
    s.trim().parse::<i64>().unwrap_or(default)
}
