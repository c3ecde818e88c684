//! Render module.
//!
//! Builds the plain text handed back to whatever sits around the engine. The text is consumed
//! verbatim (printed by the REPL, or spoken by a voice layer), so nothing here emits ANSI styling
//! or wraps lines; that is left to the host.
use std::fmt::Write;

use crate::session::SessionState;
use crate::world::WorldGraph;

use log::error;

/// Shown instead of a scene when the session points at a scene that does not exist.
pub const UNKNOWN_SCENE_TEXT: &str = "System Error. Scene data corrupted. What do you do?";
pub const OPTIONS_HEADER: &str = "OPTIONS:";
pub const COMMAND_PROMPT: &str = "What is your command?";
pub const NOT_RECOGNIZED_TEXT: &str = "Command not recognized. Please choose a valid action.";
pub const EMPTY_INVENTORY_TEXT: &str = "Inventory is empty.";
pub const EMPTY_JOURNAL_TEXT: &str = "Journal is empty.";
pub const EMPTY_HISTORY_TEXT: &str = "No actions recorded.";

/// Render a scene: description, the options list (descriptions only, never keys), and the prompt.
///
/// Unknown keys produce [`UNKNOWN_SCENE_TEXT`] instead of an error.
pub fn scene_text(world: &WorldGraph, scene_key: &str) -> String {
    let Some(scene) = world.get_scene(scene_key) else {
        error!("render requested for unknown scene \"{scene_key}\"");
        return UNKNOWN_SCENE_TEXT.to_string();
    };

    let mut text = format!("{}\n\n{OPTIONS_HEADER}\n", scene.description);
    for choice in &scene.choices {
        let _ = writeln!(text, "- {}", choice.description);
    }
    text.push('\n');
    text.push_str(COMMAND_PROMPT);
    text
}

/// The re-prompt returned when a command matched no choice.
pub fn not_recognized_text(world: &WorldGraph, scene_key: &str) -> String {
    format!("{NOT_RECOGNIZED_TEXT}\n\n{}", scene_text(world, scene_key))
}

/// Boot message shown when an adventure (re)starts.
pub fn boot_text(player_name: &str) -> String {
    format!("Booting sequence complete... Subject: {player_name}. Vital signs: Stable.")
}

/// Comma-separated inventory, or an explicit empty notice.
pub fn inventory_text(state: &SessionState) -> String {
    if state.inventory.is_empty() {
        EMPTY_INVENTORY_TEXT.to_string()
    } else {
        format!("Current Inventory: {}", state.inventory.join(", "))
    }
}

/// Numbered journal entries, oldest first.
pub fn journal_text(state: &SessionState) -> String {
    if state.journal.is_empty() {
        return EMPTY_JOURNAL_TEXT.to_string();
    }
    let mut text = String::from("Journal:");
    for (n, entry) in state.journal.iter().enumerate() {
        let _ = write!(text, "\n{}. {entry}", n + 1);
    }
    text
}

/// One line per recorded transition.
pub fn history_text(state: &SessionState) -> String {
    if state.history().is_empty() {
        return EMPTY_HISTORY_TEXT.to_string();
    }
    state
        .history()
        .iter()
        .map(|record| {
            format!(
                "[{}] {} --{}--> {}",
                record.timestamp(),
                record.from(),
                record.action(),
                record.to()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::record_history_at;
    use eclipse_data::{ChoiceDef, GameDef, SceneDef, WorldDef};
    use time::macros::datetime;

    fn world() -> WorldGraph {
        WorldGraph::from_def(&WorldDef {
            game: GameDef {
                title: "Render".into(),
                start_scene: "deck".into(),
                ..GameDef::default()
            },
            scenes: vec![SceneDef::new(
                "deck",
                "Deck",
                "Red lights strobe.",
                vec![
                    ChoiceDef::new("search_locker", "Search the locker.", "deck"),
                    ChoiceDef::new("open_door", "Open the door.", "deck"),
                ],
            )],
        })
        .expect("valid test world")
    }

    #[test]
    fn scene_text_layout() {
        assert_eq!(
            scene_text(&world(), "deck"),
            "Red lights strobe.\n\nOPTIONS:\n- Search the locker.\n- Open the door.\n\nWhat is your command?"
        );
    }

    #[test]
    fn scene_text_hides_choice_keys() {
        let text = scene_text(&world(), "deck");
        assert!(!text.contains("search_locker"));
        assert!(!text.contains("open_door"));
    }

    #[test]
    fn unknown_scene_renders_fallback() {
        assert_eq!(scene_text(&world(), "no_such_scene"), UNKNOWN_SCENE_TEXT);
        assert_eq!(
            not_recognized_text(&world(), "no_such_scene"),
            format!("{NOT_RECOGNIZED_TEXT}\n\n{UNKNOWN_SCENE_TEXT}")
        );
    }

    #[test]
    fn inventory_listing() {
        let mut state = SessionState::new("deck");
        assert_eq!(inventory_text(&state), "Inventory is empty.");
        state.inventory.push("Access Card".into());
        state.inventory.push("Rusted Pipe".into());
        assert_eq!(inventory_text(&state), "Current Inventory: Access Card, Rusted Pipe");
    }

    #[test]
    fn journal_listing_is_numbered() {
        let mut state = SessionState::new("deck");
        assert_eq!(journal_text(&state), EMPTY_JOURNAL_TEXT);
        state.journal.push("Woke up.".into());
        state.journal.push("Found a card.".into());
        assert_eq!(journal_text(&state), "Journal:\n1. Woke up.\n2. Found a card.");
    }

    #[test]
    fn history_listing() {
        let mut state = SessionState::new("deck");
        assert_eq!(history_text(&state), EMPTY_HISTORY_TEXT);
        record_history_at("deck", "open_door", "deck", datetime!(2025-01-02 03:04:05 UTC), &mut state);
        assert_eq!(history_text(&state), "[2025-01-02T03:04:05Z] deck --open_door--> deck");
    }

    #[test]
    fn boot_text_names_player() {
        assert_eq!(
            boot_text("Ripley"),
            "Booting sequence complete... Subject: Ripley. Vital signs: Stable."
        );
    }
}
