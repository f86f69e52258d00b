//! The mana vector shared by pools and costs

use crate::core::filter::ManaFilter;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The five colored mana symbols (WUBRG)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ManaSymbol {
    White,
    Blue,
    Black,
    Red,
    Green,
}

impl fmt::Display for ManaSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManaSymbol::White => write!(f, "W"),
            ManaSymbol::Blue => write!(f, "U"),
            ManaSymbol::Black => write!(f, "B"),
            ManaSymbol::Red => write!(f, "R"),
            ManaSymbol::Green => write!(f, "G"),
        }
    }
}

/// Mana types addressable through the keyed accessors: the five colors plus
/// colorless. Wildcard ("any") mana is not a type a source produces directly,
/// so it is not keyed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ManaType {
    White,
    Blue,
    Black,
    Red,
    Green,
    Colorless,
}

/// A bundle of mana: five colored counters, a colorless (generic) counter,
/// and a wildcard counter usable for any single colored requirement.
///
/// The same representation backs both a player's mana pool and a cost; the
/// [`ManaPool`](crate::core::ManaPool) and [`ManaCost`](crate::core::ManaCost)
/// wrappers keep the two roles apart at call sites.
///
/// Counters are never negative at rest. Constructors and setters accept signed
/// amounts and clamp negatives to zero with a logged warning rather than
/// failing, so a buggy caller degrades loudly instead of corrupting the ledger.
///
/// `flag` is an opaque provenance marker: it travels with clones and takes part
/// in structural equality, but no arithmetic in this crate interprets it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mana {
    pub(crate) red: u32,
    pub(crate) green: u32,
    pub(crate) blue: u32,
    pub(crate) white: u32,
    pub(crate) black: u32,
    pub(crate) colorless: u32,
    pub(crate) any: u32,
    pub(crate) flag: bool,
}

impl Mana {
    /// The all-zero vector: empty pool, free cost.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a vector from explicit counts. Negative counts are clamped to
    /// zero and logged.
    #[allow(clippy::too_many_arguments)]
    pub fn with_values(
        red: i32,
        green: i32,
        blue: i32,
        white: i32,
        black: i32,
        colorless: i32,
        any: i32,
    ) -> Self {
        Mana {
            red: not_negative(red, "red"),
            green: not_negative(green, "green"),
            blue: not_negative(blue, "blue"),
            white: not_negative(white, "white"),
            black: not_negative(black, "black"),
            colorless: not_negative(colorless, "colorless"),
            any: not_negative(any, "any"),
            flag: false,
        }
    }

    /// `amount` red mana and nothing else.
    pub fn red_mana(amount: i32) -> Self {
        Mana::with_values(amount, 0, 0, 0, 0, 0, 0)
    }

    /// `amount` green mana and nothing else.
    pub fn green_mana(amount: i32) -> Self {
        Mana::with_values(0, amount, 0, 0, 0, 0, 0)
    }

    /// `amount` blue mana and nothing else.
    pub fn blue_mana(amount: i32) -> Self {
        Mana::with_values(0, 0, amount, 0, 0, 0, 0)
    }

    /// `amount` white mana and nothing else.
    pub fn white_mana(amount: i32) -> Self {
        Mana::with_values(0, 0, 0, amount, 0, 0, 0)
    }

    /// `amount` black mana and nothing else.
    pub fn black_mana(amount: i32) -> Self {
        Mana::with_values(0, 0, 0, 0, amount, 0, 0)
    }

    /// `amount` colorless (generic) mana and nothing else.
    pub fn colorless_mana(amount: i32) -> Self {
        Mana::with_values(0, 0, 0, 0, 0, amount, 0)
    }

    /// `amount` wildcard mana and nothing else.
    pub fn any_mana(amount: i32) -> Self {
        Mana::with_values(0, 0, 0, 0, 0, 0, amount)
    }

    pub fn red(&self) -> u32 {
        self.red
    }

    pub fn green(&self) -> u32 {
        self.green
    }

    pub fn blue(&self) -> u32 {
        self.blue
    }

    pub fn white(&self) -> u32 {
        self.white
    }

    pub fn black(&self) -> u32 {
        self.black
    }

    pub fn colorless(&self) -> u32 {
        self.colorless
    }

    pub fn any(&self) -> u32 {
        self.any
    }

    pub fn flag(&self) -> bool {
        self.flag
    }

    pub fn set_red(&mut self, amount: i32) {
        self.red = not_negative(amount, "red");
    }

    pub fn set_green(&mut self, amount: i32) {
        self.green = not_negative(amount, "green");
    }

    pub fn set_blue(&mut self, amount: i32) {
        self.blue = not_negative(amount, "blue");
    }

    pub fn set_white(&mut self, amount: i32) {
        self.white = not_negative(amount, "white");
    }

    pub fn set_black(&mut self, amount: i32) {
        self.black = not_negative(amount, "black");
    }

    pub fn set_colorless(&mut self, amount: i32) {
        self.colorless = not_negative(amount, "colorless");
    }

    pub fn set_any(&mut self, amount: i32) {
        self.any = not_negative(amount, "any");
    }

    pub fn set_flag(&mut self, flag: bool) {
        self.flag = flag;
    }

    /// Add every counter of `other` to this vector.
    pub fn add(&mut self, other: &Mana) {
        self.red = self.red.saturating_add(other.red);
        self.green = self.green.saturating_add(other.green);
        self.blue = self.blue.saturating_add(other.blue);
        self.white = self.white.saturating_add(other.white);
        self.black = self.black.saturating_add(other.black);
        self.colorless = self.colorless.saturating_add(other.colorless);
        self.any = self.any.saturating_add(other.any);
    }

    /// Subtract every counter of `other`, flooring each at zero. Plain
    /// removal only; cost payment with generic borrowing lives on
    /// [`ManaPool::pay`](crate::core::ManaPool::pay).
    pub fn subtract(&mut self, other: &Mana) {
        self.red = self.red.saturating_sub(other.red);
        self.green = self.green.saturating_sub(other.green);
        self.blue = self.blue.saturating_sub(other.blue);
        self.white = self.white.saturating_sub(other.white);
        self.black = self.black.saturating_sub(other.black);
        self.colorless = self.colorless.saturating_sub(other.colorless);
        self.any = self.any.saturating_sub(other.any);
    }

    /// Reset all seven counters to zero. The provenance flag is untouched.
    pub fn clear(&mut self) {
        self.red = 0;
        self.green = 0;
        self.blue = 0;
        self.white = 0;
        self.black = 0;
        self.colorless = 0;
        self.any = 0;
    }

    /// Overwrite the seven counters from `other`. The provenance flag is
    /// carried only by cloning, never by this.
    pub fn set_to_mana(&mut self, other: &Mana) {
        self.red = other.red;
        self.green = other.green;
        self.blue = other.blue;
        self.white = other.white;
        self.black = other.black;
        self.colorless = other.colorless;
        self.any = other.any;
    }

    /// Total of all seven counters.
    pub fn count(&self) -> u32 {
        self.red + self.green + self.blue + self.white + self.black + self.colorless + self.any
    }

    /// Total excluding colorless: the five colors plus wildcard.
    pub fn count_colored(&self) -> u32 {
        self.red + self.green + self.blue + self.white + self.black + self.any
    }

    /// Total restricted to the types enabled in `filter`; `None` counts
    /// everything.
    pub fn count_filtered(&self, filter: Option<&ManaFilter>) -> u32 {
        let filter = match filter {
            Some(filter) => filter,
            None => return self.count(),
        };
        let mut count = 0;
        if filter.black {
            count += self.black;
        }
        if filter.blue {
            count += self.blue;
        }
        if filter.white {
            count += self.white;
        }
        if filter.green {
            count += self.green;
        }
        if filter.red {
            count += self.red;
        }
        if filter.colorless {
            count += self.colorless;
        }
        count
    }

    /// Counter for the given mana type.
    pub fn get(&self, mana_type: ManaType) -> u32 {
        match mana_type {
            ManaType::White => self.white,
            ManaType::Blue => self.blue,
            ManaType::Black => self.black,
            ManaType::Red => self.red,
            ManaType::Green => self.green,
            ManaType::Colorless => self.colorless,
        }
    }

    /// Set the counter for the given mana type, clamping negatives to zero.
    pub fn set(&mut self, mana_type: ManaType, amount: i32) {
        match mana_type {
            ManaType::White => self.set_white(amount),
            ManaType::Blue => self.set_blue(amount),
            ManaType::Black => self.set_black(amount),
            ManaType::Red => self.set_red(amount),
            ManaType::Green => self.set_green(amount),
            ManaType::Colorless => self.set_colorless(amount),
        }
    }

    /// Counter for the given colored symbol.
    pub fn get_color(&self, symbol: ManaSymbol) -> u32 {
        match symbol {
            ManaSymbol::White => self.white,
            ManaSymbol::Blue => self.blue,
            ManaSymbol::Black => self.black,
            ManaSymbol::Red => self.red,
            ManaSymbol::Green => self.green,
        }
    }
}

impl From<ManaSymbol> for Mana {
    /// A single mana of the given color.
    fn from(symbol: ManaSymbol) -> Self {
        let mut mana = Mana::new();
        match symbol {
            ManaSymbol::White => mana.white = 1,
            ManaSymbol::Blue => mana.blue = 1,
            ManaSymbol::Black => mana.black = 1,
            ManaSymbol::Red => mana.red = 1,
            ManaSymbol::Green => mana.green = 1,
        }
        mana
    }
}

impl fmt::Display for Mana {
    /// Canonical text form: `{N}` for colorless (omitted when zero), then one
    /// `{R}`/`{G}`/`{U}`/`{W}`/`{B}` token per colored mana in that order,
    /// then `{Any}` per wildcard. `{1}{R}{W}` is one generic, one red, one
    /// white.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.colorless > 0 {
            write!(f, "{{{}}}", self.colorless)?;
        }
        for _ in 0..self.red {
            write!(f, "{{R}}")?;
        }
        for _ in 0..self.green {
            write!(f, "{{G}}")?;
        }
        for _ in 0..self.blue {
            write!(f, "{{U}}")?;
        }
        for _ in 0..self.white {
            write!(f, "{{W}}")?;
        }
        for _ in 0..self.black {
            write!(f, "{{B}}")?;
        }
        for _ in 0..self.any {
            write!(f, "{{Any}}")?;
        }
        Ok(())
    }
}

/// Clamp a caller-supplied amount to the non-negative range, logging the
/// correction so the caller bug is visible without aborting the game.
fn not_negative(amount: i32, name: &str) -> u32 {
    if amount < 0 {
        warn!("{name} mana can not be less than 0, got {amount}; defaulting to 0");
        0
    } else {
        amount as u32
    }
}
