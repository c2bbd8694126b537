//! Ledger integration tests: economy, guarantee and collection views.

use shine_on::cards::IdolIdentity;
use shine_on::core::{GachaConfig, Rarity};
use shine_on::gacha::{CardGenerator, DrawMode, NameAllocator, RandomGenerator};
use shine_on::ledger::{Ledger, PlayerState, SortKey, TEN_DRAW_SIZE};

// =============================================================================
// Test Generators
// =============================================================================

/// Replays identities in order and records the mode of every call.
struct Recording {
    cards: Vec<IdolIdentity>,
    modes: Vec<DrawMode>,
}

impl Recording {
    fn new(cards: Vec<IdolIdentity>) -> Self {
        Self {
            cards,
            modes: Vec::new(),
        }
    }
}

impl CardGenerator for Recording {
    fn generate(&mut self, _: &GachaConfig, _: &NameAllocator, mode: DrawMode) -> IdolIdentity {
        self.modes.push(mode);
        self.cards.remove(0)
    }
}

/// Always offers a Common card unless the mode forbids it.
struct CommonOnly {
    modes: Vec<DrawMode>,
}

impl CardGenerator for CommonOnly {
    fn generate(&mut self, _: &GachaConfig, _: &NameAllocator, mode: DrawMode) -> IdolIdentity {
        self.modes.push(mode);
        if mode.allows(Rarity::Common) {
            IdolIdentity::new("Amy", Rarity::Common)
        } else {
            IdolIdentity::new("Luna", Rarity::Rare)
        }
    }
}

fn unique_commons(count: usize) -> Vec<IdolIdentity> {
    (0..count)
        .map(|i| IdolIdentity::new(format!("Trainee{:03}", i), Rarity::Common))
        .collect()
}

// =============================================================================
// Economy Scenarios
// =============================================================================

#[test]
fn test_hundred_new_single_draws_spend_everything() {
    let mut ledger = Ledger::new(GachaConfig::default(), Recording::new(unique_commons(100))).unwrap();

    for _ in 0..100 {
        let draw = ledger.single_draw();
        assert!(!draw.outcome.is_duplicate);
        assert!(!draw.bankruptcy_triggered);
    }

    assert_eq!(ledger.coins(), 0);
    assert_eq!(ledger.total_draws(), 100);
    assert_eq!(ledger.collection_size(), 100);
}

#[test]
fn test_bankruptcy_after_running_dry() {
    let mut ledger = Ledger::new(GachaConfig::default(), Recording::new(unique_commons(101))).unwrap();
    for _ in 0..100 {
        ledger.single_draw();
    }

    let draw = ledger.single_draw();
    assert!(draw.bankruptcy_triggered);
    assert_eq!(ledger.coins(), 40);
}

#[test]
fn test_coin_identity_over_seeded_play() {
    let mut ledger = Ledger::new(GachaConfig::default(), RandomGenerator::seeded(2024)).unwrap();

    for round in 0..200 {
        let before = ledger.coins();
        if round % 3 == 0 {
            let batch = ledger.ten_draw();
            let bonus = if batch.bankruptcy_triggered { 100 } else { 0 };
            assert_eq!(ledger.coins(), before + bonus - 100 + batch.total_refund());
        } else {
            let draw = ledger.single_draw();
            let bonus = if draw.bankruptcy_triggered { 50 } else { 0 };
            assert_eq!(ledger.coins(), before + bonus - 10 + draw.outcome.refund);
        }
        assert!(ledger.coins() >= 0);
    }
}

#[test]
fn test_refunds_follow_rarity() {
    let cards = vec![
        IdolIdentity::new("Amy", Rarity::Common),
        IdolIdentity::new("Amy", Rarity::Common),
        IdolIdentity::new("Luna", Rarity::Rare),
        IdolIdentity::new("Luna", Rarity::Rare),
        IdolIdentity::new("Aria", Rarity::Epic),
        IdolIdentity::new("Aria", Rarity::Epic),
        IdolIdentity::new("Anna", Rarity::Legendary),
        IdolIdentity::new("Anna", Rarity::Legendary),
    ];
    let mut ledger = Ledger::new(GachaConfig::default(), Recording::new(cards)).unwrap();

    let mut refunds = Vec::new();
    for _ in 0..4 {
        ledger.single_draw();
        let dup = ledger.single_draw();
        refunds.push(dup.outcome.refund);
    }

    assert_eq!(refunds, vec![2, 4, 6, 8]);
    assert_eq!(ledger.card("Anna").unwrap().fans, 10000 + 5000);
    assert_eq!(ledger.card("Amy").unwrap().fans, 100 + 100);
    assert_eq!(ledger.collection_size(), 4);
}

// =============================================================================
// Ten-Draw Guarantee
// =============================================================================

#[test]
fn test_guarantee_requested_after_nine_commons() {
    let mut ledger = Ledger::new(GachaConfig::default(), CommonOnly { modes: Vec::new() }).unwrap();

    let batch = ledger.ten_draw();

    let modes = &ledger.generator_mut().modes;
    assert_eq!(modes.len(), TEN_DRAW_SIZE);
    assert!(modes[..9].iter().all(|m| *m == DrawMode::Standard));
    assert_eq!(modes[9], DrawMode::GuaranteedRareOrBetter);
    assert!(batch.outcomes[9].rarity().is_rare_or_better());
    assert_eq!(ledger.total_draws(), 10);
}

#[test]
fn test_no_guarantee_when_rare_already_drawn() {
    let mut cards = unique_commons(9);
    cards[4] = IdolIdentity::new("Luna", Rarity::Rare);
    cards.push(IdolIdentity::new("Amy", Rarity::Common));
    let mut ledger = Ledger::new(GachaConfig::default(), Recording::new(cards)).unwrap();

    let batch = ledger.ten_draw();

    assert!(ledger.generator_mut().modes.iter().all(|m| *m == DrawMode::Standard));
    assert_eq!(batch.outcomes[9].rarity(), Rarity::Common);
}

#[test]
fn test_seeded_ten_draws_always_contain_rare() {
    let mut ledger = Ledger::new(GachaConfig::default(), RandomGenerator::seeded(99)).unwrap();

    for _ in 0..300 {
        let batch = ledger.ten_draw();
        assert_eq!(batch.outcomes.len(), TEN_DRAW_SIZE);
        assert!(batch.best_rarity().unwrap().is_rare_or_better());
    }
}

// =============================================================================
// Collection Views
// =============================================================================

#[test]
fn test_list_sorted_puts_legendary_first() {
    let cards = vec![
        IdolIdentity::new("Amy", Rarity::Common),
        IdolIdentity::new("Anna", Rarity::Legendary),
    ];
    let mut ledger = Ledger::new(GachaConfig::default(), Recording::new(cards)).unwrap();
    ledger.single_draw();
    ledger.single_draw();

    let sorted = ledger.list_sorted(SortKey::Rarity);
    assert_eq!(sorted.len(), 2);
    assert_eq!(sorted[0].name, "Anna");
    assert_eq!(sorted[1].name, "Amy");
}

#[test]
fn test_completion_is_reported_once() {
    let config = GachaConfig::default();
    let mut identities: Vec<_> = Rarity::ALL
        .iter()
        .flat_map(|r| config.pool[*r].iter().map(move |n| IdolIdentity::new(n.clone(), *r)))
        .collect();
    identities.push(IdolIdentity::new("Amy", Rarity::Common));
    let total = identities.len();
    let mut ledger = Ledger::new(config, Recording::new(identities)).unwrap();

    let completions: Vec<bool> = (0..total)
        .map(|_| ledger.single_draw().completed_collection)
        .collect();

    assert_eq!(completions.iter().filter(|c| **c).count(), 1);
    assert!(completions[total - 2]);
    assert!(ledger.is_complete());
    assert!((ledger.collection_rate() - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_total_fans_sums_collection() {
    let cards = vec![
        IdolIdentity::new("Amy", Rarity::Common),
        IdolIdentity::new("Luna", Rarity::Rare),
        IdolIdentity::new("Luna", Rarity::Rare),
    ];
    let mut ledger = Ledger::new(GachaConfig::default(), Recording::new(cards)).unwrap();
    for _ in 0..3 {
        ledger.single_draw();
    }

    assert_eq!(ledger.total_fans(), 100 + 500 + 300);
}

#[test]
fn test_restore_and_reset() {
    let mut ledger = Ledger::new(GachaConfig::default(), RandomGenerator::seeded(5)).unwrap();
    let loaded = PlayerState::new(3, 40).with_card(shine_on::OwnedCard::restore("Luna", Rarity::Rare, 4, 1400));

    ledger.restore(loaded.clone());
    assert_eq!(ledger.state(), &loaded);
    assert!(ledger.names().is_used("Luna"));

    ledger.reset();
    assert_eq!(ledger.coins(), 1000);
    assert_eq!(ledger.total_draws(), 0);
    assert!(ledger.names().is_empty());
}

// =============================================================================
// Serialization
// =============================================================================

#[test]
fn test_draw_results_serialize_to_json() {
    let mut ledger = Ledger::new(GachaConfig::default(), RandomGenerator::seeded(8)).unwrap();
    let batch = ledger.ten_draw();

    let json = serde_json::to_string(&batch).unwrap();
    let parsed: shine_on::TenDraw = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, batch);

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["outcomes"].as_array().unwrap().len(), TEN_DRAW_SIZE);
}

#[test]
fn test_config_from_json_overrides() {
    let mut value = serde_json::to_value(GachaConfig::default()).unwrap();
    value["economy"]["single_draw_cost"] = serde_json::json!(20);
    let config: GachaConfig = serde_json::from_value(value).unwrap();

    let mut ledger = Ledger::new(config, RandomGenerator::seeded(1)).unwrap();
    ledger.single_draw();
    assert_eq!(ledger.coins(), 980);
}
