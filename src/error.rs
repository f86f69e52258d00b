//! Error types for the mana engine

use crate::core::Mana;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ManaError {
    /// Payment failed: the pool cannot cover the cost even after converting
    /// colored and wildcard mana toward the generic requirement.
    ///
    /// The pool is left unchanged when this is returned.
    #[error("insufficient mana: cannot pay '{cost}' from pool '{pool}'")]
    InsufficientMana { cost: Mana, pool: Mana },
}

pub type Result<T> = std::result::Result<T, ManaError>;
