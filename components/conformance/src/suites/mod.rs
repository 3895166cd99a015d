//! The case catalog, grouped by suite.

pub mod construction;
mod fixtures;
pub mod inheritance;
pub mod visibility;

use crate::case::ConformanceCase;

/// Names of every suite, in run order
pub const SUITE_NAMES: [&str; 3] = [construction::SUITE, visibility::SUITE, inheritance::SUITE];

/// Cases of one suite, or `None` for an unknown suite name
pub fn cases_for(suite: &str) -> Option<Vec<ConformanceCase>> {
    match suite {
        construction::SUITE => Some(construction::cases()),
        visibility::SUITE => Some(visibility::cases()),
        inheritance::SUITE => Some(inheritance::cases()),
        _ => None,
    }
}

/// Every case of every suite
pub fn all_cases() -> Vec<ConformanceCase> {
    SUITE_NAMES
        .iter()
        .filter_map(|suite| cases_for(suite))
        .flatten()
        .collect()
}
