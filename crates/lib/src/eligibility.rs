//! # Eligibility Gate
//!
//! The live prediction model covers exactly one crop, one province and one
//! year. Every scenario is supported for that combination; everything else is
//! shown as "coming soon".

use crate::types::SelectionTuple;

pub const SUPPORTED_CROP: &str = "coffee";
pub const SUPPORTED_REGION: &str = "dak-lak";
pub const SUPPORTED_YEAR: i32 = 2026;

/// Returns `true` if the remote model can answer for this selection.
pub fn is_eligible(selection: &SelectionTuple) -> bool {
    selection.crop == SUPPORTED_CROP
        && selection.region == SUPPORTED_REGION
        && selection.year == SUPPORTED_YEAR
}
