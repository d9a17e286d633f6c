use censor_core::Entity;
use censor_session::SessionState;
use censor_text::CensorEngine;
use proptest::prelude::*;

fn text_strategy() -> impl Strategy<Value = String> {
    let word = prop_oneof![
        Just("Mike"),
        Just("Block"),
        Just("110"),
        Just("alice"),
        Just("said"),
    ];
    let sep = prop_oneof![Just(" "), Just(", "), Just(". ")];
    prop::collection::vec((word, sep), 0..16)
        .prop_map(|parts| parts.into_iter().map(|(w, s)| format!("{w}{s}")).collect())
}

fn entities() -> Vec<Entity> {
    vec![
        Entity::new("NAME", "mike", 0.9),
        Entity::new("NAME", "alice", 0.8),
        Entity::new("ADDRESS", "block 110", 0.9),
    ]
}

fn segmented(text: &str) -> SessionState {
    let (started, ticket) = SessionState::new(text).on_detect_start();
    started
        .on_detect_success(ticket, &entities(), &CensorEngine::default())
        .unwrap()
}

fn entity_keys(state: &SessionState) -> Vec<String> {
    state
        .segmentation()
        .map(|s| s.entity_keys().into_iter().map(str::to_string).collect())
        .unwrap_or_default()
}

proptest! {
    #[test]
    fn toggle_twice_restores_state(text in text_strategy(), pick in any::<prop::sample::Index>()) {
        let state = segmented(&text);
        let keys = entity_keys(&state);
        prop_assume!(!keys.is_empty());
        let key = &keys[pick.index(keys.len())];
        let twice = state.on_toggle(key).on_toggle(key);
        prop_assert_eq!(twice.censor_state(), state.censor_state());
    }

    #[test]
    fn bulk_actions_ignore_prior_toggles(
        text in text_strategy(),
        picks in prop::collection::vec(any::<bool>(), 0..16),
    ) {
        let fresh = segmented(&text);
        let keys = entity_keys(&fresh);
        let toggled = keys
            .iter()
            .zip(picks.iter())
            .filter(|(_, on)| **on)
            .fold(fresh.clone(), |s, (k, _)| s.on_toggle(k));

        let toggled_censored = toggled.on_censor_all();
        let fresh_censored = fresh.on_censor_all();
        prop_assert_eq!(
            toggled_censored.censor_state(),
            fresh_censored.censor_state()
        );
        let toggled_uncensored = toggled.on_uncensor_all();
        let fresh_uncensored = fresh.on_uncensor_all();
        prop_assert_eq!(
            toggled_uncensored.censor_state(),
            fresh_uncensored.censor_state()
        );
        prop_assert_eq!(
            toggled.on_censor_all().on_uncensor_all(),
            toggled.on_uncensor_all()
        );
    }

    #[test]
    fn uncensor_after_censor_all_restores_input(text in text_strategy()) {
        let engine = CensorEngine::default();
        let state = segmented(&text).on_censor_all().on_uncensor_all();
        prop_assert!(state.censor_state().is_empty());
        prop_assert_eq!(state.output(&engine), text);
    }

    #[test]
    fn fresh_segmentation_renders_input(text in text_strategy()) {
        prop_assert_eq!(segmented(&text).output(&CensorEngine::default()), text);
    }

    #[test]
    fn only_latest_ticket_applies(text in text_strategy(), extra in 1usize..5) {
        let (mut state, first) = SessionState::new(text.as_str()).on_detect_start();
        for _ in 0..extra {
            state = state.on_detect_start().0;
        }
        prop_assert!(state
            .on_detect_success(first, &entities(), &CensorEngine::default())
            .is_err());
        prop_assert!(!state.is_segmented());
    }

    #[test]
    fn censor_all_covers_every_entity(text in text_strategy()) {
        let state = segmented(&text).on_censor_all();
        for key in entity_keys(&state) {
            prop_assert!(state.censor_state().is_censored(&key));
        }
    }
}
