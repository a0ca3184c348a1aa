//! Property tests for the store and zone mutator.

use proptest::prelude::*;

use solo_board::core::{ImageRef, StepId, Zone};
use solo_board::timeline::GameStateStore;
use solo_board::zones::{append_images, remove_image_at, remove_image_by_value};

#[derive(Clone, Debug)]
enum Op {
    Add,
    Copy(usize),
    Remove(usize),
    Reset,
    Append(usize, usize, Vec<u8>),
}

fn zone_strategy() -> impl Strategy<Value = usize> {
    0..Zone::COUNT
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => Just(Op::Add),
        2 => any::<usize>().prop_map(Op::Copy),
        2 => any::<usize>().prop_map(Op::Remove),
        1 => Just(Op::Reset),
        3 => (any::<usize>(), zone_strategy(), prop::collection::vec(0u8..6, 0..4))
            .prop_map(|(step, zone, images)| Op::Append(step, zone, images)),
    ]
}

fn img(n: u8) -> ImageRef {
    ImageRef::new(format!("card-{n}.png"))
}

/// Build a store by replaying `ops`, mapping arbitrary indices onto the
/// current timeline so that most operations hit an existing step.
fn replay(ops: &[Op]) -> GameStateStore {
    let mut store = GameStateStore::new();
    store.add_step(None).unwrap();
    for op in ops {
        let len = store.len();
        match op {
            Op::Add => {
                store.add_step(None).unwrap();
            }
            Op::Copy(i) if len > 0 => {
                store.add_step(Some(i % len)).unwrap();
            }
            Op::Remove(i) if len > 0 => {
                let id = store.timeline().get(i % len).unwrap().id;
                store.remove_step(id);
            }
            Op::Reset => {
                store.reset_timeline();
            }
            Op::Append(i, zone, images) if len > 0 => {
                let id = store.timeline().get(i % len).unwrap().id;
                let zone = Zone::ALL[*zone];
                store.update(|t| append_images(t, id, zone, images.iter().map(|&n| img(n))));
            }
            _ => {}
        }
    }
    store
}

proptest! {
    #[test]
    fn prop_ids_stay_valid(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let store = replay(&ops);
        prop_assert!(store.timeline().validate(store.next_id()).is_ok());
    }

    #[test]
    fn prop_remove_drops_exactly_one(
        ops in prop::collection::vec(op_strategy(), 0..30),
        pick in any::<usize>(),
    ) {
        let mut store = replay(&ops);
        prop_assume!(!store.is_empty());
        let before = store.timeline().clone();
        let target = before.get(pick % before.len()).unwrap().id;
        let next_id = store.next_id();

        store.remove_step(target);

        prop_assert_eq!(store.len(), before.len() - 1);
        prop_assert_eq!(store.next_id(), next_id);
        prop_assert!(store.step(target).is_none());
        for step in store.timeline() {
            prop_assert_eq!(Some(step), before.step(step.id));
        }
    }

    #[test]
    fn prop_add_allocates_fresh_id(ops in prop::collection::vec(op_strategy(), 0..30)) {
        let mut store = replay(&ops);
        let len = store.len();
        let next = store.next_id();

        let id = store.add_step(None).unwrap();

        prop_assert_eq!(store.len(), len + 1);
        prop_assert_eq!(id, next);
        prop_assert!(store.timeline().ids().filter(|&other| other != id).all(|other| other < id));
    }

    #[test]
    fn prop_copy_matches_source(
        ops in prop::collection::vec(op_strategy(), 0..30),
        pick in any::<usize>(),
    ) {
        let mut store = replay(&ops);
        prop_assume!(!store.is_empty());
        let index = pick % store.len();
        let source = store.timeline().get(index).unwrap().clone();

        let id = store.add_step(Some(index)).unwrap();
        let copy = store.step(id).unwrap();

        prop_assert_ne!(copy.id, source.id);
        for zone in Zone::ALL {
            prop_assert_eq!(copy.zone(zone), source.zone(zone));
        }
    }

    #[test]
    fn prop_append_then_remove_last_restores(
        ops in prop::collection::vec(op_strategy(), 0..30),
        pick in any::<usize>(),
        zone in zone_strategy(),
        n in 0u8..6,
    ) {
        let store = replay(&ops);
        prop_assume!(!store.is_empty());
        let id = store.timeline().get(pick % store.len()).unwrap().id;
        let zone = Zone::ALL[zone];
        let original = store.timeline().clone();

        let appended = append_images(&original, id, zone, [img(n)]);
        let last = appended.step(id).unwrap().zone(zone).len() - 1;
        let restored = remove_image_at(&appended, id, zone, last);

        prop_assert_eq!(restored, original);
    }

    #[test]
    fn prop_remove_missing_value_is_noop(
        ops in prop::collection::vec(op_strategy(), 0..30),
        pick in any::<usize>(),
        zone in zone_strategy(),
    ) {
        let store = replay(&ops);
        prop_assume!(!store.is_empty());
        let id = store.timeline().get(pick % store.len()).unwrap().id;
        let missing = ImageRef::new("never-dropped.png");

        let once = remove_image_by_value(store.timeline(), id, Zone::ALL[zone], &missing);

        prop_assert_eq!(&once, store.timeline());
    }

    #[test]
    fn prop_unknown_step_is_untouched(
        ops in prop::collection::vec(op_strategy(), 0..30),
        zone in zone_strategy(),
    ) {
        let store = replay(&ops);
        let unknown = StepId::new(store.next_id().raw() + 10);

        let next = append_images(store.timeline(), unknown, Zone::ALL[zone], [img(1)]);

        prop_assert_eq!(&next, store.timeline());
    }
}
