use censor_core::{CensorState, Entity, MatchMode, Segment};
use censor_text::{censor_all, render, toggle, uncensor_all, CensorEngine};
use proptest::prelude::*;

/// Words drawn from a small vocabulary so surface forms actually hit.
fn text_strategy() -> impl Strategy<Value = String> {
    let word = prop_oneof![
        Just("Mike"),
        Just("mike"),
        Just("Block"),
        Just("110"),
        Just("Zoë"),
        Just("alice"),
        Just("#05-77"),
    ];
    let sep = prop_oneof![Just(" "), Just(", "), Just(". "), Just("-"), Just("\n")];
    prop::collection::vec((word, sep), 0..24)
        .prop_map(|parts| parts.into_iter().map(|(w, s)| format!("{w}{s}")).collect())
}

fn entities_strategy() -> impl Strategy<Value = Vec<Entity>> {
    let surface = prop_oneof![
        Just("mike"),
        Just("block 110"),
        Just("block"),
        Just("110"),
        Just("zoë"),
        Just("05-77"),
        Just("  "),
        Just(""),
        Just("Alice"),
    ];
    let category = prop_oneof![Just("NAME"), Just("ADDRESS"), Just("ID")];
    prop::collection::vec(
        (category, surface, 0.0f64..=1.0).prop_map(|(c, s, p)| Entity::new(c, s, p)),
        0..6,
    )
}

fn mode_strategy() -> impl Strategy<Value = MatchMode> {
    prop_oneof![Just(MatchMode::Strict), Just(MatchMode::Flexible)]
}

proptest! {
    #[test]
    fn segments_cover_text_exactly(
        text in text_strategy(),
        entities in entities_strategy(),
        mode in mode_strategy(),
    ) {
        let seg = CensorEngine::new(mode).segment(&text, &entities);
        let joined: String = seg.segments().iter().map(Segment::text).collect();
        prop_assert_eq!(joined, text);
    }

    #[test]
    fn segments_partition_text(
        text in text_strategy(),
        entities in entities_strategy(),
        mode in mode_strategy(),
    ) {
        let seg = CensorEngine::new(mode).segment(&text, &entities);
        prop_assert!(seg.verify_partition());
        if let (Some(first), Some(last)) = (seg.segments().first(), seg.segments().last()) {
            prop_assert_eq!(first.start(), 0);
            prop_assert_eq!(last.end(), text.len());
        }
        prop_assert!(seg.segments().windows(2).all(|w| w[0].end() == w[1].start()));
    }

    #[test]
    fn empty_state_render_is_identity(
        text in text_strategy(),
        entities in entities_strategy(),
    ) {
        let seg = CensorEngine::default().segment(&text, &entities);
        prop_assert_eq!(render(seg.segments(), &CensorState::new()), text);
    }

    #[test]
    fn toggle_is_an_involution(
        keys in prop::collection::vec("[a-z]{1,4}", 0..8),
        key in "[a-z]{1,4}",
    ) {
        let state: CensorState = keys.into_iter().collect();
        prop_assert_eq!(toggle(&toggle(&state, &key), &key), state);
    }

    #[test]
    fn bulk_actions_discard_prior_toggles(
        text in text_strategy(),
        entities in entities_strategy(),
        picks in prop::collection::vec(any::<bool>(), 0..16),
        stray in prop::collection::vec("[a-z]{1,6}", 0..4),
    ) {
        let seg = CensorEngine::default().segment(&text, &entities);
        let entity_keys: Vec<&str> = seg.entity_keys().collect();

        // A prior state with a hand-picked subset of entity toggles plus keys
        // that belong to no segment at all.
        let mut prior = CensorState::new();
        for (key, on) in entity_keys.iter().zip(picks.iter()) {
            if *on {
                prior = toggle(&prior, key);
            }
        }
        for key in &stray {
            prior = toggle(&prior, key);
        }

        let censored = censor_all(seg.segments());
        let censored_keys: Vec<&str> = censored.censored_keys().collect();
        let mut expected = entity_keys.clone();
        expected.sort_unstable();
        expected.dedup();
        prop_assert_eq!(censored_keys, expected);
        for key in &stray {
            prop_assert!(!censored.is_censored(key));
        }

        let cleared = uncensor_all();
        prop_assert!(cleared.is_empty());
        prop_assert!(prior.censored_keys().all(|k| !cleared.is_censored(k)));
        prop_assert_eq!(seg.render(&cleared), text.clone());
        prop_assert_eq!(seg.render(&cleared), seg.render(&uncensor_all()));
    }
}
