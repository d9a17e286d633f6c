use std::sync::Arc;
use std::thread;

use censor_core::errors::DetectorError;
use censor_core::{CensorConfig, CensorError, Entity};
use censor_detector::StaticDetector;
use censor_session::{SessionManager, SessionState};
use censor_text::CensorEngine;

const TEXT: &str = "My name is Mike. I stay at Block 110.";

fn name_only() -> Vec<Entity> {
    vec![Entity::new("NAME", "mike", 0.9)]
}

fn both() -> Vec<Entity> {
    vec![
        Entity::new("NAME", "mike", 0.9),
        Entity::new("ADDRESS", "block 110", 0.9),
    ]
}

#[test]
fn manager_creates_and_removes_sessions() {
    let manager = SessionManager::new();
    let id = manager.create_session(TEXT);
    assert_eq!(manager.session_count(), 1);
    assert_eq!(manager.get_state(&id).unwrap().text(), TEXT);
    assert!(manager.session_ids().contains(&id));
    assert!(manager.remove_session(&id).is_some());
    assert_eq!(manager.session_count(), 0);
    assert!(manager.get_state(&id).is_none());
}

#[test]
fn out_of_order_responses_keep_newest_segmentation() {
    let manager = SessionManager::new();
    let engine = CensorEngine::default();
    manager.create_session_with_id("s1".into(), TEXT);

    let first = manager.begin_detection("s1").unwrap();
    let second = manager.begin_detection("s1").unwrap();
    assert!(second.sequence() > first.sequence());

    // Newer request resolves first.
    manager
        .complete_detection("s1", second, Ok(both()), &engine)
        .unwrap();

    // The older one resolves late and must not overwrite.
    let err = manager
        .complete_detection("s1", first, Ok(name_only()), &engine)
        .unwrap_err();
    assert!(matches!(err, CensorError::StaleResponse { .. }));

    let state = manager.get_state("s1").unwrap();
    assert_eq!(state.segmentation().unwrap().entity_count(), 2);
}

#[test]
fn stale_failure_does_not_clobber_result() {
    let manager = SessionManager::new();
    let engine = CensorEngine::default();
    manager.create_session_with_id("s1".into(), TEXT);

    let first = manager.begin_detection("s1").unwrap();
    let second = manager.begin_detection("s1").unwrap();
    manager
        .complete_detection("s1", second, Ok(both()), &engine)
        .unwrap();

    let failure = Err(DetectorError::RequestFailed {
        reason: "timeout".into(),
    }
    .into());
    assert!(manager
        .complete_detection("s1", first, failure, &engine)
        .is_err());
    let state = manager.get_state("s1").unwrap();
    assert!(state.error().is_none());
    assert!(state.is_segmented());
}

#[test]
fn current_failure_clears_and_reports() {
    let manager = SessionManager::new();
    let engine = CensorEngine::default();
    manager.create_session_with_id("s1".into(), TEXT);
    let ticket = manager.begin_detection("s1").unwrap();
    manager
        .complete_detection(
            "s1",
            ticket,
            Err(DetectorError::HttpStatus {
                status: 502,
                body: "bad gateway".into(),
            }
            .into()),
            &engine,
        )
        .unwrap();
    let state = manager.get_state("s1").unwrap();
    assert!(!state.is_segmented());
    assert!(state.error().unwrap().contains("502"));
    assert_eq!(state.output(&engine), TEXT);
}

#[test]
fn unknown_session_is_reported() {
    let manager = SessionManager::new();
    let seeded = SessionManager::new();
    seeded.create_session_with_id("other".into(), TEXT);
    let ticket = seeded.begin_detection("other").unwrap();

    let err = manager
        .complete_detection("missing", ticket, Ok(Vec::new()), &CensorEngine::default())
        .unwrap_err();
    assert!(matches!(err, CensorError::SessionNotFound { .. }));
    assert!(manager.begin_detection("missing").is_none());
    assert!(!manager.update("missing", |s| s.on_censor_all()));
}

#[test]
fn update_applies_transitions() {
    let manager = SessionManager::new();
    let engine = CensorEngine::default();
    manager.create_session_with_id("s1".into(), TEXT);
    let ticket = manager.begin_detection("s1").unwrap();
    manager
        .complete_detection("s1", ticket, Ok(both()), &engine)
        .unwrap();

    assert!(manager.update("s1", SessionState::on_censor_all));
    assert_eq!(
        manager.get_state("s1").unwrap().output(&engine),
        "My name is [name]. I stay at [address]."
    );
}

#[test]
fn cleanup_removes_idle_sessions() {
    let manager = SessionManager::new();
    manager.create_session(TEXT);
    manager.create_session(TEXT);
    assert_eq!(manager.cleanup_stale_sessions(chrono::Duration::hours(1)), 0);
    assert_eq!(manager.cleanup_stale_sessions(chrono::Duration::seconds(-1)), 2);
    assert_eq!(manager.session_count(), 0);
}

#[test]
fn concurrent_sessions_are_isolated() {
    let manager = Arc::new(SessionManager::new());
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let manager = Arc::clone(&manager);
            thread::spawn(move || {
                let id = format!("s{i}");
                manager.create_session_with_id(id.clone(), TEXT);
                let state = manager.get_state(&id).unwrap().run_detection(
                    &StaticDetector::demo(),
                    &CensorEngine::default(),
                    0.5,
                );
                manager.update(&id, |_| state.clone());
                if i % 2 == 0 {
                    manager.update(&id, SessionState::on_censor_all);
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let engine = CensorEngine::default();
    for i in 0..8 {
        let out = manager.get_state(&format!("s{i}")).unwrap().output(&engine);
        if i % 2 == 0 {
            assert_eq!(out, "My name is [name]. I stay at [address].");
        } else {
            assert_eq!(out, TEXT);
        }
    }
}

#[test]
fn config_driven_labels_reach_session_output() {
    let config = CensorConfig::from_toml(
        "[render]\nuse_default_labels = true\n[render.label_overrides]\nNAME = \"person\"\n",
    )
    .unwrap();
    let engine = CensorEngine::from_config(&config);
    let state = SessionState::new(TEXT)
        .run_detection(&StaticDetector::demo(), &engine, config.detector.confidence_threshold)
        .on_censor_all();
    assert_eq!(state.output(&engine), "My name is [person]. I stay at [address].");
}

#[test]
fn session_state_serializes() {
    let state = SessionState::new(TEXT)
        .run_detection(&StaticDetector::demo(), &CensorEngine::default(), 0.5)
        .on_censor_all();
    let json = serde_json::to_value(&state).unwrap();
    assert_eq!(json["segmentation"]["segments"][1]["kind"], "entity");
    assert_eq!(json["censor_state"]["ent-0-11-15-NAME"], true);
    let back: SessionState = serde_json::from_value(json).unwrap();
    assert_eq!(back, state);
}
