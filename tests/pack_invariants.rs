//! Property tests for the pack and weapon slot
//!
//! Random sequences of player actions must never overfill the pack or leave
//! the equipped weapon sitting in the pack at the same time.

use proptest::prelude::*;
use zombie_survival::{Item, Player, SilentNarrator};

#[derive(Debug, Clone)]
enum Op {
    Take(usize),
    Discard(usize),
    Equip(usize),
    Eat(usize),
    Use(usize),
    SetHealth(f64),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..6usize).prop_map(Op::Take),
        (0..6usize).prop_map(Op::Discard),
        (0..6usize).prop_map(Op::Equip),
        (0..6usize).prop_map(Op::Eat),
        (0..6usize).prop_map(Op::Use),
        (1.0..500.0f64).prop_map(Op::SetHealth),
    ]
}

fn items() -> Vec<Item> {
    vec![
        Item::weapon("shovel", 15.0).unwrap(),
        Item::weapon("shovel", 15.0).unwrap(),
        Item::weapon("chainsaw", 25.0).unwrap(),
        Item::food("sandwich", 30.0).unwrap(),
        Item::food("sandwich", 30.0).unwrap(),
        Item::new("rock").unwrap(),
    ]
}

proptest! {
    #[test]
    fn test_pack_and_slot_invariants(ops in prop::collection::vec(op(), 0..40)) {
        let items = items();
        let mut player = Player::new("Joan", 500.0, 30.0, 70.0)
            .unwrap()
            .with_narrator(SilentNarrator);

        for op in ops {
            let len_before = player.pack().len();
            match op {
                Op::Take(i) => {
                    let carried = player.pack().contains(&items[i])
                        || player.equipped().is_some_and(|w| w.is_same(&items[i]));
                    let taken = player.take_item(items[i].clone());
                    prop_assert_eq!(taken, !carried && len_before < 3);
                }
                Op::Discard(i) => {
                    let was_there = player.pack().contains(&items[i]);
                    prop_assert_eq!(player.discard_item(&items[i]), was_there);
                }
                Op::Equip(i) => { player.equip(&items[i]); }
                Op::Eat(i) => { player.eat(&items[i]); }
                Op::Use(i) => { player.use_item(&items[i]); }
                Op::SetHealth(h) => player.set_health(h),
            }

            prop_assert!(player.pack().len() <= 3);
            prop_assert!(player.health() <= player.max_health());
            if let Some(weapon) = player.equipped() {
                prop_assert!(weapon.is_weapon());
                prop_assert!(!player.pack().contains(weapon));
            }
        }
    }
}
