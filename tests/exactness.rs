//! The exactness contract, checked by actually executing the output.
//!
//! For every budget B the synthesized sequence must consume exactly B
//! cycles under the timing model - no remainder, for either strategy.

mod common;

use common::run;
use cyclewait::{synthesize_dynamic_depth, synthesize_tiered, Strategy};

/// Exhaustive below 4096 (every pad/loop combination shows up there),
/// strided above to keep the simulation time sensible.
fn small_budgets() -> impl Iterator<Item = u64> {
    (1..=4096u64).chain((4097..=20_000).step_by(7))
}

#[test]
fn tiered_is_exact_for_every_small_budget() {
    for budget in small_budgets() {
        let seq = synthesize_tiered(budget).unwrap();
        assert_eq!(
            run(seq.instructions(), budget),
            budget,
            "tiered budget {budget}"
        );
    }
}

#[test]
fn dynamic_depth_is_exact_for_every_small_budget() {
    for budget in small_budgets() {
        let seq = synthesize_dynamic_depth(budget).unwrap();
        assert_eq!(
            run(seq.instructions(), budget),
            budget,
            "nested budget {budget}"
        );
    }
}

#[test]
fn both_strategies_agree_on_larger_budgets() {
    // Sampled across the overlap region, including tier boundaries, nest
    // depth transitions and values with awkward remainders.
    let samples = [
        768u64,
        769,
        777,
        778,
        197_130,
        197_131,
        262_145,
        262_146,
        999_983,
        1_000_000,
        2_000_003,
        16_000_000,
    ];
    for &budget in &samples {
        let tiered = synthesize_tiered(budget).unwrap();
        let nested = synthesize_dynamic_depth(budget).unwrap();
        assert_eq!(run(tiered.instructions(), budget), budget, "tiered {budget}");
        assert_eq!(run(nested.instructions(), budget), budget, "nested {budget}");
        // Same contract, different decompositions.
        assert_ne!(tiered.instructions(), nested.instructions());
    }
}

// Simulating ~84M cycles takes a while; run with `cargo test -- --ignored`.
#[test]
#[ignore]
fn exactness_at_the_24_bit_tier_boundary() {
    for budget in [83_886_082u64, 83_886_083] {
        let tiered = synthesize_tiered(budget).unwrap();
        assert_eq!(run(tiered.instructions(), budget), budget);
        let nested = synthesize_dynamic_depth(budget).unwrap();
        assert_eq!(run(nested.instructions(), budget), budget);
    }
}

#[test]
fn synthesis_is_deterministic() {
    for budget in [1u64, 17, 768, 769, 262_146, 5_000_000] {
        let a = synthesize_tiered(budget).unwrap();
        let b = synthesize_tiered(budget).unwrap();
        assert_eq!(a, b);
        let c = synthesize_dynamic_depth(budget).unwrap();
        let d = synthesize_dynamic_depth(budget).unwrap();
        assert_eq!(c, d);
    }
}

#[test]
fn small_budget_identities() {
    use cyclewait::Instruction;
    for strategy in [Strategy::Tiered, Strategy::DynamicDepth] {
        assert_eq!(
            strategy.synthesize(1).unwrap().instructions(),
            &[Instruction::Nop]
        );
        assert_eq!(
            strategy.synthesize(2).unwrap().instructions(),
            &[Instruction::Rjmp { offset: 0 }]
        );
    }
    // Budget 3 differs: tiered already fits a minimal loop, nested pads.
    assert_eq!(
        Strategy::DynamicDepth.synthesize(3).unwrap().instructions(),
        &[Instruction::Rjmp { offset: 0 }, Instruction::Nop]
    );
}

#[test]
fn reported_clobbers_match_executed_writes() {
    for budget in [100u64, 1_000, 300_000, 90_000_000] {
        let seq = synthesize_tiered(budget).unwrap();
        let written: Vec<u8> = seq
            .instructions()
            .iter()
            .filter_map(|inst| match *inst {
                cyclewait::Instruction::Ldi { reg, .. } => Some(reg),
                _ => None,
            })
            .collect();
        assert_eq!(seq.clobbers(), &written[..], "budget {budget}");
    }
}
