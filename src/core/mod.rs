//! Core mana types and engines

pub mod filter;
pub mod mana;
pub mod payment;
pub mod relation;

pub use filter::ManaFilter;
pub use mana::{Mana, ManaSymbol, ManaType};
pub use payment::{ManaCost, ManaPool};
pub use relation::more_valuable;
