//! Cross-cutting properties of the payment and relation engines
//!
//! These sweep a grid of small mana vectors and check the contracts that the
//! rest of a game engine leans on: the affordability check agrees with the
//! mutating payment, the shortfall is exactly what is missing, and the
//! valuation partial order stays inside its inputs.

use mtg_mana::core::{more_valuable, Mana, ManaCost, ManaPool};

/// Every vector with red/any in 0..=2 and green/blue/white/colorless in 0..=1.
/// 96 vectors; pairs of them cover the interesting interactions between
/// colored, generic, and wildcard mana without exploding the grid.
fn sample_vectors() -> Vec<Mana> {
    let mut vectors = Vec::new();
    for red in 0..=2 {
        for green in 0..=1 {
            for blue in 0..=1 {
                for white in 0..=1 {
                    for colorless in 0..=1 {
                        for any in 0..=2 {
                            vectors.push(Mana::with_values(red, green, blue, white, 0, colorless, any));
                        }
                    }
                }
            }
        }
    }
    vectors
}

#[test]
fn add_then_subtract_is_identity() {
    for base in sample_vectors() {
        for delta in sample_vectors() {
            let mut mana = base;
            mana.add(&delta);
            mana.subtract(&delta);
            assert!(
                mana.equal_value(&base),
                "add/subtract of {delta} did not restore {base}"
            );
        }
    }
}

#[test]
fn can_pay_agrees_with_pay() {
    for pool_mana in sample_vectors() {
        for cost_mana in sample_vectors() {
            let cost = ManaCost::from_mana(cost_mana);
            let pool = ManaPool::from_mana(pool_mana);

            let mut paying = pool.clone();
            let outcome = paying.pay(&cost);

            assert_eq!(
                pool.can_pay(&cost),
                outcome.is_ok(),
                "can_pay disagreed with pay for pool {pool_mana} and cost {cost_mana}"
            );

            match outcome {
                Ok(()) => {
                    // Payment consumes exactly the cost's total.
                    assert_eq!(paying.total(), pool.total() - cost.cmc());
                }
                Err(_) => {
                    // A failed payment is a no-op.
                    assert_eq!(paying, pool);
                }
            }
        }
    }
}

#[test]
fn shortfall_is_zero_exactly_when_payable() {
    for pool_mana in sample_vectors() {
        for cost_mana in sample_vectors() {
            let cost = ManaCost::from_mana(cost_mana);
            let pool = ManaPool::from_mana(pool_mana);
            let missing = pool.shortfall(&cost);

            assert_eq!(
                missing.count() == 0,
                pool.can_pay(&cost),
                "shortfall {missing} inconsistent with can_pay for pool {pool_mana} and cost {cost_mana}"
            );
        }
    }
}

#[test]
fn acquiring_the_shortfall_makes_the_cost_payable() {
    for pool_mana in sample_vectors() {
        for cost_mana in sample_vectors() {
            let cost = ManaCost::from_mana(cost_mana);
            let pool = ManaPool::from_mana(pool_mana);

            let mut topped_up = pool.clone();
            topped_up.add(&pool.shortfall(&cost));
            assert!(
                topped_up.can_pay(&cost),
                "pool {pool_mana} plus its shortfall still cannot pay {cost_mana}"
            );
        }
    }
}

#[test]
fn more_valuable_returns_a_dominating_input() {
    let vectors = sample_vectors();
    for a in &vectors {
        for b in &vectors {
            match more_valuable(a, b) {
                None => {}
                Some(winner) => {
                    assert!(std::ptr::eq(winner, a) || std::ptr::eq(winner, b));
                    let loser = if std::ptr::eq(winner, a) { b } else { a };
                    assert!(loser.white() <= winner.white());
                    assert!(loser.red() <= winner.red());
                    assert!(loser.green() <= winner.green());
                    assert!(loser.blue() <= winner.blue());
                    assert!(loser.black() <= winner.black());
                    assert!(loser.any() <= winner.any());
                }
            }
        }
    }
}

#[test]
fn more_valuable_is_reflexive_safe() {
    for mana in sample_vectors() {
        assert_eq!(more_valuable(&mana, &mana), Some(&mana));
    }
}

#[test]
fn literal_payment_scenarios() {
    // {R}{G} pays {2} by borrowing red then green.
    let mut pool = ManaPool::from_mana(Mana::with_values(1, 1, 0, 0, 0, 0, 0));
    let cost = ManaCost::from_mana(Mana::colorless_mana(2));
    assert!(pool.can_pay(&cost));
    pool.pay(&cost).unwrap();
    assert_eq!(*pool.mana(), Mana::new());

    // {W} cannot pay {U}; one blue is missing.
    let pool = ManaPool::from_mana(Mana::white_mana(1));
    let cost = ManaCost::from_mana(Mana::blue_mana(1));
    assert!(!pool.can_pay(&cost));
    assert_eq!(pool.shortfall(&cost), Mana::blue_mana(1));

    // Two wildcard mana pay {R}{G} and are consumed.
    let mut pool = ManaPool::from_mana(Mana::any_mana(2));
    let cost = ManaCost::from_mana(Mana::with_values(1, 1, 0, 0, 0, 0, 0));
    assert!(pool.can_pay(&cost));
    pool.pay(&cost).unwrap();
    assert_eq!(pool.mana().any(), 0);

    // {1} pays {1} with no borrowing.
    let mut pool = ManaPool::from_mana(Mana::colorless_mana(1));
    let cost = ManaCost::from_mana(Mana::colorless_mana(1));
    assert!(pool.can_pay(&cost));
    pool.pay(&cost).unwrap();
    assert_eq!(pool.total(), 0);

    // Canonical rendering.
    assert_eq!(Mana::with_values(1, 0, 0, 1, 0, 1, 0).to_string(), "{1}{R}{W}");
}

#[test]
fn pool_serde_round_trip() {
    let mut pool = ManaPool::new();
    pool.add(&Mana::with_values(1, 0, 2, 0, 1, 3, 1));
    let json = serde_json::to_string(&pool).unwrap();
    let back: ManaPool = serde_json::from_str(&json).unwrap();
    assert_eq!(back, pool);
}
