//! Mana type filter used by filtered counting

use serde::{Deserialize, Serialize};

/// Selects which mana types participate in a filtered count.
///
/// All flags default to off. Wildcard mana is never counted through a filter;
/// it only surfaces in the unfiltered totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManaFilter {
    pub white: bool,
    pub blue: bool,
    pub black: bool,
    pub red: bool,
    pub green: bool,
    pub colorless: bool,
}

impl ManaFilter {
    /// A filter with every flag off.
    pub fn new() -> Self {
        Self::default()
    }

    /// A filter accepting the five colors and colorless.
    pub fn all() -> Self {
        ManaFilter {
            white: true,
            blue: true,
            black: true,
            red: true,
            green: true,
            colorless: true,
        }
    }
}
