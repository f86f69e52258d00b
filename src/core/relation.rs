//! Comparison and ordering utilities over mana vectors
//!
//! These relations feed AI heuristics that rank, merge, or prune candidate
//! mana bundles. None of them mutate; none of them pay costs.

use crate::core::mana::Mana;
use std::cmp::Ordering;

impl Mana {
    /// Counter-for-counter equality across all seven counters, ignoring the
    /// provenance flag. Use `==` when the flag matters.
    pub fn equal_value(&self, other: &Mana) -> bool {
        self.red == other.red
            && self.green == other.green
            && self.blue == other.blue
            && self.white == other.white
            && self.black == other.black
            && self.colorless == other.colorless
            && self.any == other.any
    }

    /// Weak ordering by total mana only.
    ///
    /// Two vectors with the same total but different distributions compare as
    /// `Equal` here despite not being `==`; this is a magnitude ordering,
    /// deliberately not an `Ord` impl, and must not be used where structural
    /// identity matters (map keys, dedup).
    pub fn cmp_by_total(&self, other: &Mana) -> Ordering {
        self.count().cmp(&other.count())
    }

    /// Does this vector share any mana type with `probe`?
    ///
    /// True when some color is positive in both, or when `probe` has a
    /// colorless component and this vector holds any mana at all. Tests type
    /// overlap, not sufficiency.
    pub fn contains(&self, probe: &Mana) -> bool {
        if probe.black > 0 && self.black > 0 {
            return true;
        }
        if probe.blue > 0 && self.blue > 0 {
            return true;
        }
        if probe.red > 0 && self.red > 0 {
            return true;
        }
        if probe.white > 0 && self.white > 0 {
            return true;
        }
        if probe.green > 0 && self.green > 0 {
            return true;
        }
        if probe.colorless > 0 && self.count() > 0 {
            return true;
        }
        false
    }

    /// Dominance test: could a pool with this composition ever satisfy a cost
    /// with `probe`'s composition?
    ///
    /// Requires at least `probe`'s count in every color, and either enough
    /// colorless or enough surplus colored mana to stand in for the unmet
    /// colorless part.
    pub fn includes_mana(&self, probe: &Mana) -> bool {
        self.green >= probe.green
            && self.blue >= probe.blue
            && self.white >= probe.white
            && self.black >= probe.black
            && self.red >= probe.red
            && (self.colorless >= probe.colorless
                || self.count_colored() >= probe.count_colored() + probe.colorless)
    }

    /// Number of the five colors with a positive counter. Wildcard and
    /// colorless are not colors.
    pub fn different_colors(&self) -> u32 {
        let mut count = 0;
        if self.blue > 0 {
            count += 1;
        }
        if self.black > 0 {
            count += 1;
        }
        if self.green > 0 {
            count += 1;
        }
        if self.white > 0 {
            count += 1;
        }
        if self.red > 0 {
            count += 1;
        }
        count
    }
}

/// Pick the stronger of two mana bundles, if one dominates.
///
/// The provisional winner is whichever has more colored mana, then more
/// wildcard, then the larger total, ties going to `a`. The winner stands only
/// if the other bundle exceeds it in none of white, red, green, blue, black,
/// or wildcard; otherwise the bundles are incomparable and `None` is
/// returned. Colorless is deliberately left out of the dominance check.
///
/// `more_valuable` of `{1}{W}{R}` and `{G}{W}{R}` is `{G}{W}{R}`; of
/// `{G}{W}{B}` and `{G}{W}{R}` it is `None`.
pub fn more_valuable<'a>(a: &'a Mana, b: &'a Mana) -> Option<&'a Mana> {
    let (greater, lesser) =
        if b.count_colored() > a.count_colored() || b.any() > a.any() || b.count() > a.count() {
            (b, a)
        } else {
            (a, b)
        };
    if lesser.white() > greater.white()
        || lesser.red() > greater.red()
        || lesser.green() > greater.green()
        || lesser.blue() > greater.blue()
        || lesser.black() > greater.black()
        || lesser.any() > greater.any()
    {
        return None;
    }
    Some(greater)
}
