//! Mana accounting and cost satisfaction for an MTG-style rules engine
//!
//! This crate implements the resource ledger a game engine consults whenever a
//! spell or ability cost must be paid: a seven-counter mana vector shared by
//! pools (available mana) and costs (required mana), affordability checks,
//! shortfall computation, the mutating payment with its generic-mana borrowing
//! rule, and the comparison utilities AI heuristics use to rank mana bundles.

pub mod core;
pub mod error;

pub use error::{ManaError, Result};
