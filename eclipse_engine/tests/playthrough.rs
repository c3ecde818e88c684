//! Whole-session runs through the bundled story, driven the way a host drives the engine.

use eclipse_engine::{Engine, EngineConfig, SessionState, load_world};
use std::sync::Arc;
use std::thread;

fn engine() -> Engine {
    let world = load_world(&EngineConfig::default()).expect("bundled story loads");
    Engine::new(Arc::new(world))
}

fn started(engine: &Engine, name: &str) -> SessionState {
    let mut state = engine.new_session();
    engine.start_adventure(&mut state, Some(name));
    state
}

fn trail(state: &SessionState) -> Vec<(&str, &str, &str)> {
    state
        .history()
        .iter()
        .map(|r| (r.from(), r.action(), r.to()))
        .collect()
}

#[test]
fn override_route_to_the_pods_and_back() {
    let engine = engine();
    let mut state = started(&engine, "Ripley");

    engine.player_action(&mut state, "search the locker");
    let text = engine.player_action(&mut state, "head to the door");
    assert!(text.starts_with("Action confirmed: go_to_door.\n\nYou swipe the card."));
    assert_eq!(engine.check_inventory(&state), "Current Inventory: Access Card");

    engine.player_action(&mut state, "override");
    assert_eq!(state.current_scene, "drone_override");
    engine.player_action(&mut state, "board the pod");
    assert_eq!(state.current_scene, "pod_launch");
    let text = engine.player_action(&mut state, "end transmission");
    assert!(text.starts_with("Action confirmed: end_game.\n\nHiss..."));
    assert_eq!(state.current_scene, "intro");

    assert_eq!(
        trail(&state),
        vec![
            ("intro", "search_locker", "locker_loot"),
            ("locker_loot", "go_to_door", "corridor_access"),
            ("corridor_access", "talk_drone", "drone_override"),
            ("drone_override", "enter_pod", "pod_launch"),
            ("pod_launch", "end_game", "intro"),
        ]
    );
    // reaching the start scene through a choice is a move, not a restart
    assert_eq!(state.inventory, vec!["Access Card"]);
    assert_eq!(state.journal, vec!["Found Level 3 Access Card."]);
}

#[test]
fn vent_and_fight_routes() {
    let engine = engine();
    for (command, via) in [("crawl into the vent", "vent_crawl"), ("attack", "drone_combat")] {
        let mut state = started(&engine, "Ripley");
        engine.player_action(&mut state, "search the locker");
        engine.player_action(&mut state, "head to the door");
        engine.player_action(&mut state, command);
        assert_eq!(state.current_scene, via);
        engine.player_action(&mut state, "rush, run, board");
        assert_eq!(state.current_scene, "pod_launch");
    }
}

#[test]
fn forcing_the_door_is_fatal_and_reboots() {
    let engine = engine();
    let mut state = started(&engine, "Ripley");

    engine.player_action(&mut state, "run");
    assert_eq!(state.current_scene, "corridor_locked");
    assert!(engine.look(&state).contains("LEVEL 3 CLEARANCE REQUIRED"));
    let text = engine.player_action(&mut state, "pry it open");
    assert!(text.contains("The station claims another soul."));
    assert_eq!(state.current_scene, "injury_death");

    engine.player_action(&mut state, "reboot");
    assert_eq!(state.current_scene, "intro");
    assert_eq!(state.history().len(), 3);
    assert_eq!(engine.check_inventory(&state), "Inventory is empty.");
}

#[test]
fn unrecognized_commands_are_no_ops() {
    let engine = engine();
    let mut state = started(&engine, "Ripley");
    engine.player_action(&mut state, "search the locker");
    let snapshot = (state.current_scene.clone(), state.history().len(), state.inventory.clone());

    // locker_loot only offers "Head to the blast door..."
    let text = engine.player_action(&mut state, "wait");
    assert!(text.starts_with("Command not recognized. Please choose a valid action.\n\nYou force the locker open."));
    assert_eq!(
        (state.current_scene.clone(), state.history().len(), state.inventory.clone()),
        snapshot
    );
}

#[test]
fn restart_clears_run_but_keeps_identity_and_journal() {
    let engine = engine();
    let mut state = started(&engine, "Ripley");
    let id = state.session_id().to_string();

    engine.player_action(&mut state, "search the locker");
    engine.player_action(&mut state, "head to the door");
    let text = engine.start_adventure(&mut state, None);

    assert!(text.starts_with("Booting sequence complete... Subject: Survivor. Vital signs: Stable.\n\nHiss..."));
    assert_eq!(state.session_id(), id);
    assert_eq!(state.current_scene, "intro");
    assert!(state.history().is_empty());
    assert!(state.inventory.is_empty());
    assert_eq!(engine.journal(&state), "Journal:\n1. Found Level 3 Access Card.");
}

#[test]
fn restart_can_clear_the_journal() {
    let world = load_world(&EngineConfig::default()).unwrap();
    let config = EngineConfig {
        clear_journal_on_restart: true,
        ..EngineConfig::default()
    };
    let engine = Engine::from_config(Arc::new(world), &config);
    let mut state = started(&engine, "Ripley");
    engine.player_action(&mut state, "search the locker");
    engine.player_action(&mut state, "head to the door");
    engine.start_adventure(&mut state, Some("Ripley"));
    assert_eq!(engine.journal(&state), "Journal is empty.");
}

#[test]
fn sessions_are_independent_across_threads() {
    let engine = Arc::new(engine());
    let handles: Vec<_> = ["search the locker", "run", "check console"]
        .into_iter()
        .map(|command| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                let mut state = engine.new_session();
                engine.player_action(&mut state, command);
                (state.session_id().to_string(), state.current_scene)
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let scenes: Vec<&str> = results.iter().map(|(_, scene)| scene.as_str()).collect();
    assert_eq!(scenes, vec!["locker_loot", "corridor_locked", "status_check"]);
    assert_ne!(results[0].0, results[1].0);
}
