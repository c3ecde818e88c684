//! REPL and command handling.
//!
//! The terminal host runs one session in a read-eval-print loop. Story commands go to the
//! [`Engine`]; the handful of host commands (inventory, journal, restart and so on) are sorted
//! out first by [`parse_command`]. The engine returns plain text, which is wrapped and
//! colored here line by line.

mod input;

use crate::command::{Command, HOST_COMMANDS, parse_command};
use crate::config::EngineConfig;
use crate::engine::Engine;
use crate::render::{COMMAND_PROMPT, NOT_RECOGNIZED_TEXT, OPTIONS_HEADER, UNKNOWN_SCENE_TEXT};
use crate::session::SessionState;
use crate::style::GameStyle;
use crate::world::WorldGraph;

use anyhow::{Context, Result};
use log::info;

use input::{InputEvent, InputManager};

const HELP_TEXT: &str = "Type what you want to do, in your own words, and the closest option is chosen.

Other commands:
- start [name]: restart the adventure
- inventory (inv, i): show what you carry
- journal: show your journal
- history: show every action taken this run
- look (l): show the current scene again
- help (?): show this help
- quit (exit): leave the game";

/// How a line of engine output is colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    Boot,
    Confirm,
    Error,
    Section,
    Option,
    Prompt,
    Item,
    Journal,
    Text,
}

/// Run the read-eval-print loop for a single session until the player quits.
///
/// # Errors
/// - if the terminal cannot be read
pub fn run_repl(engine: &Engine, config: &EngineConfig) -> Result<()> {
    let width = config.wrap_width.unwrap_or_else(textwrap::termwidth);
    let mut input = InputManager::new(completion_terms(engine.world()));
    let mut state = engine.new_session();
    info!("session {} opened", state.session_id());

    show(&engine.start_adventure(&mut state, None), width);
    loop {
        let prompt = prompt_text(engine.world(), &state).prompt_style().to_string();
        let event = input.read_line(&prompt).context("reading player input")?;
        let line = match event {
            InputEvent::Line(line) => line,
            InputEvent::Eof => "quit".to_string(),
            InputEvent::Interrupted => {
                println!("{}", "Command canceled.".error_style());
                continue;
            },
        };
        if line.trim().is_empty() {
            continue;
        }

        let response = match parse_command(&line) {
            Command::Start(name) => engine.start_adventure(&mut state, name.as_deref()),
            Command::Inventory => engine.check_inventory(&state),
            Command::Journal => engine.journal(&state),
            Command::History => engine.history(&state),
            Command::Look => engine.look(&state),
            Command::Help => HELP_TEXT.to_string(),
            Command::Quit => {
                quit_summary(&state);
                println!("{}", "Transmission ended.".boot_style());
                break;
            },
            Command::Action(text) => engine.player_action(&mut state, &text),
        };
        show(&response, width);
    }
    Ok(())
}

/// Words offered by tab completion: host commands and every story choice key.
fn completion_terms(world: &WorldGraph) -> Vec<String> {
    HOST_COMMANDS
        .iter()
        .map(ToString::to_string)
        .chain(world.scenes().flat_map(|scene| scene.choices.iter().map(|c| c.id.clone())))
        .collect()
}

fn prompt_text(world: &WorldGraph, state: &SessionState) -> String {
    let place = world
        .get_scene(&state.current_scene)
        .map_or(state.current_scene.as_str(), |scene| scene.title.as_str());
    format!(
        "\n[{}|{place}]>> ",
        state.player_name.as_deref().unwrap_or("?")
    )
}

fn quit_summary(state: &SessionState) {
    info!(
        "session {} closed in \"{}\" after {} actions",
        state.session_id(),
        state.current_scene,
        state.history().len()
    );
    info!("ending inventory:");
    state.inventory.iter().for_each(|item| info!("- {item}"));
    info!("ending journal:");
    state.journal.iter().for_each(|entry| info!("* {entry}"));
}

/// Print engine output wrapped to `width` and colored by line.
fn show(text: &str, width: usize) {
    println!();
    for line in text.lines() {
        let kind = classify(line);
        let indent = if kind == LineKind::Option { "  " } else { "" };
        let options = textwrap::Options::new(width.max(20)).subsequent_indent(indent);
        for wrapped in textwrap::wrap(line, options) {
            println!("{}", paint(&wrapped, kind));
        }
    }
}

fn classify(line: &str) -> LineKind {
    if line.starts_with("Booting sequence") {
        LineKind::Boot
    } else if line.starts_with("Action confirmed:") {
        LineKind::Confirm
    } else if line == NOT_RECOGNIZED_TEXT || line == UNKNOWN_SCENE_TEXT {
        LineKind::Error
    } else if line == OPTIONS_HEADER || line == "Journal:" || line == "Other commands:" {
        LineKind::Section
    } else if line.starts_with("- ") {
        LineKind::Option
    } else if line == COMMAND_PROMPT {
        LineKind::Prompt
    } else if line.starts_with("Current Inventory:") {
        LineKind::Item
    } else if line.split_once(". ").is_some_and(|(n, _)| n.parse::<usize>().is_ok()) {
        LineKind::Journal
    } else {
        LineKind::Text
    }
}

fn paint(line: &str, kind: LineKind) -> String {
    match kind {
        LineKind::Boot => line.boot_style(),
        LineKind::Confirm => line.confirm_style(),
        LineKind::Error => line.error_style(),
        LineKind::Section => line.section_style(),
        LineKind::Option => line.option_style(),
        LineKind::Prompt => line.prompt_style(),
        LineKind::Item => line.item_style(),
        LineKind::Journal => line.journal_style(),
        LineKind::Text => line.description_style(),
    }
    .to_string()
}
