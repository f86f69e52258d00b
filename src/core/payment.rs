//! Pool/cost role wrappers and the payment algorithms
//!
//! A pool and a cost share the [`Mana`] representation; the wrappers here give
//! each role its own type so a swapped argument is a compile error instead of
//! a silent rules violation. All deficit arithmetic runs on a private signed
//! balance, so `Mana` itself never holds a negative counter and a failed
//! payment never leaves the pool half-mutated.

use crate::core::mana::{Mana, ManaSymbol};
use crate::error::{ManaError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An immutable-in-use mana requirement attached to a spell or ability.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ManaCost {
    mana: Mana,
}

impl ManaCost {
    /// A free cost.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_mana(mana: Mana) -> Self {
        ManaCost { mana }
    }

    pub fn mana(&self) -> &Mana {
        &self.mana
    }

    /// Converted mana cost: the total of every counter.
    pub fn cmc(&self) -> u32 {
        self.mana.count()
    }
}

impl From<Mana> for ManaCost {
    fn from(mana: Mana) -> Self {
        ManaCost::from_mana(mana)
    }
}

impl fmt::Display for ManaCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.mana.fmt(f)
    }
}

/// A player's mutable ledger of available mana.
///
/// Created empty, filled by `add` as sources resolve, drained by [`pay`] and
/// emptied by `clear` when the owning state machine ends the accounting
/// period.
///
/// [`pay`]: ManaPool::pay
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManaPool {
    mana: Mana,
}

impl ManaPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_mana(mana: Mana) -> Self {
        ManaPool { mana }
    }

    pub fn mana(&self) -> &Mana {
        &self.mana
    }

    pub fn mana_mut(&mut self) -> &mut Mana {
        &mut self.mana
    }

    /// Add produced mana to the pool.
    pub fn add(&mut self, mana: &Mana) {
        self.mana.add(mana);
    }

    /// Add a single mana of the given color.
    pub fn add_symbol(&mut self, symbol: ManaSymbol) {
        self.mana.add(&Mana::from(symbol));
    }

    /// Empty the pool.
    pub fn clear(&mut self) {
        self.mana.clear();
    }

    /// Total mana in the pool.
    pub fn total(&self) -> u32 {
        self.mana.count()
    }

    /// Non-mutating affordability check: can this pool pay `cost`?
    ///
    /// Each unmet colored requirement is charged against the pool's wildcard
    /// mana; once the wildcard credit is exhausted the cost is unpayable. An
    /// unmet colorless requirement is payable as long as the mana left over
    /// after the colored requirements covers it, since any leftover type can
    /// be borrowed for generic payment.
    pub fn can_pay(&self, cost: &ManaCost) -> bool {
        let mut balance = Balance::between(&self.mana, cost.mana());
        if !balance.charge_colored_to_wildcard() {
            return false;
        }
        if balance.colorless < 0 && balance.colorless + balance.convertible() < 0 {
            return false;
        }
        true
    }

    /// The minimal additional mana this pool would need to pay `cost`.
    ///
    /// All-zero exactly when [`can_pay`](ManaPool::can_pay) holds. Wildcard
    /// mana in the pool is applied to the colored deficits color by color
    /// (red, green, blue, black, white) before anything is reported missing,
    /// and leftover mana of any type offsets the colorless deficit.
    pub fn shortfall(&self, cost: &ManaCost) -> Mana {
        let mut balance = Balance::between(&self.mana, cost.mana());

        balance.draw_wildcard_for(ColoredLane::Red);
        balance.draw_wildcard_for(ColoredLane::Green);
        balance.draw_wildcard_for(ColoredLane::Blue);
        balance.draw_wildcard_for(ColoredLane::Black);
        balance.draw_wildcard_for(ColoredLane::White);

        if balance.colorless < 0 {
            let surplus = balance.red.max(0)
                + balance.green.max(0)
                + balance.blue.max(0)
                + balance.white.max(0)
                + balance.black.max(0)
                + balance.any.max(0);
            balance.colorless += surplus.min(-balance.colorless);
        }

        balance.missing()
    }

    /// Pay `cost` from this pool.
    ///
    /// Colored requirements are taken from their own counters first, then
    /// from wildcard mana. A remaining colorless requirement borrows one unit
    /// at a time in strict priority order red, green, blue, white, black,
    /// wildcard. The pool is only written on success, so on
    /// [`ManaError::InsufficientMana`] it still holds its pre-call contents
    /// and on success every counter is non-negative.
    pub fn pay(&mut self, cost: &ManaCost) -> Result<()> {
        let mut balance = Balance::between(&self.mana, cost.mana());
        if !balance.charge_colored_to_wildcard() {
            return Err(self.insufficient(cost));
        }

        while balance.colorless < 0 {
            if !balance.borrow_for_colorless() {
                return Err(self.insufficient(cost));
            }
        }

        balance.commit(&mut self.mana);
        Ok(())
    }

    fn insufficient(&self, cost: &ManaCost) -> ManaError {
        ManaError::InsufficientMana {
            cost: *cost.mana(),
            pool: self.mana,
        }
    }
}

impl From<Mana> for ManaPool {
    fn from(mana: Mana) -> Self {
        ManaPool::from_mana(mana)
    }
}

impl fmt::Display for ManaPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.mana.fmt(f)
    }
}

/// The colored deficits wildcard mana may be drawn against.
#[derive(Debug, Clone, Copy)]
enum ColoredLane {
    Red,
    Green,
    Blue,
    White,
    Black,
}

/// Signed per-type balance of a pool against a cost. Negative means unmet
/// demand; positive means surplus. Only this scratch value ever goes negative,
/// and only between construction and `commit`.
#[derive(Debug, Clone, Copy)]
struct Balance {
    red: i64,
    green: i64,
    blue: i64,
    white: i64,
    black: i64,
    colorless: i64,
    any: i64,
}

impl Balance {
    fn between(pool: &Mana, cost: &Mana) -> Self {
        Balance {
            red: i64::from(pool.red()) - i64::from(cost.red()),
            green: i64::from(pool.green()) - i64::from(cost.green()),
            blue: i64::from(pool.blue()) - i64::from(cost.blue()),
            white: i64::from(pool.white()) - i64::from(cost.white()),
            black: i64::from(pool.black()) - i64::from(cost.black()),
            colorless: i64::from(pool.colorless()) - i64::from(cost.colorless()),
            any: i64::from(pool.any()) - i64::from(cost.any()),
        }
    }

    fn lane_mut(&mut self, lane: ColoredLane) -> &mut i64 {
        match lane {
            ColoredLane::Red => &mut self.red,
            ColoredLane::Green => &mut self.green,
            ColoredLane::Blue => &mut self.blue,
            ColoredLane::White => &mut self.white,
            ColoredLane::Black => &mut self.black,
        }
    }

    /// Move every negative colored balance onto the wildcard balance, zeroing
    /// the color. Surplus in one color never covers a deficit in another;
    /// only wildcard mana crosses colors. Returns false once the wildcard
    /// balance itself goes negative, i.e. the colored demand is unpayable.
    fn charge_colored_to_wildcard(&mut self) -> bool {
        for lane in [
            ColoredLane::Red,
            ColoredLane::Green,
            ColoredLane::Blue,
            ColoredLane::Black,
            ColoredLane::White,
        ] {
            let slot = self.lane_mut(lane);
            if *slot < 0 {
                let deficit = *slot;
                *slot = 0;
                self.any += deficit;
                if self.any < 0 {
                    return false;
                }
            }
        }
        // A cost can demand wildcard mana outright; that demand has no other
        // counter to fall back on.
        self.any >= 0
    }

    /// Apply available wildcard surplus to one colored deficit, as far as it
    /// reaches.
    fn draw_wildcard_for(&mut self, lane: ColoredLane) {
        let available = self.any;
        if available <= 0 {
            return;
        }
        let slot = self.lane_mut(lane);
        if *slot < 0 {
            let draw = available.min(-*slot);
            *slot += draw;
            self.any -= draw;
        }
    }

    /// Total signed balance across everything that can be borrowed for a
    /// colorless deficit.
    fn convertible(&self) -> i64 {
        self.red + self.green + self.blue + self.white + self.black + self.any
    }

    /// Convert one unit of remaining mana into one unit of colorless credit,
    /// in strict priority order red, green, blue, white, black, wildcard.
    /// Returns false when nothing is left to borrow.
    fn borrow_for_colorless(&mut self) -> bool {
        for slot in [
            &mut self.red,
            &mut self.green,
            &mut self.blue,
            &mut self.white,
            &mut self.black,
            &mut self.any,
        ] {
            if *slot > 0 {
                *slot -= 1;
                self.colorless += 1;
                return true;
            }
        }
        false
    }

    /// The still-unmet demand as a non-negative vector: absolute values of
    /// the negative balances, zero elsewhere.
    fn missing(&self) -> Mana {
        fn deficit(balance: i64) -> u32 {
            if balance < 0 {
                (-balance) as u32
            } else {
                0
            }
        }
        Mana {
            red: deficit(self.red),
            green: deficit(self.green),
            blue: deficit(self.blue),
            white: deficit(self.white),
            black: deficit(self.black),
            colorless: deficit(self.colorless),
            any: deficit(self.any),
            flag: false,
        }
    }

    /// Write the balance back into a pool vector. Callers must have resolved
    /// every deficit first.
    fn commit(&self, pool: &mut Mana) {
        debug_assert!(
            self.red >= 0
                && self.green >= 0
                && self.blue >= 0
                && self.white >= 0
                && self.black >= 0
                && self.colorless >= 0
                && self.any >= 0,
            "committing an unresolved balance: {self:?}"
        );
        pool.red = self.red as u32;
        pool.green = self.green as u32;
        pool.blue = self.blue as u32;
        pool.white = self.white as u32;
        pool.black = self.black as u32;
        pool.colorless = self.colorless as u32;
        pool.any = self.any as u32;
    }
}
