//! Command module
//!
//! Sorts a typed line into the few host commands the terminal handles itself, and
//! everything else, which is a story command for the engine.

/// Commands that can be entered at the prompt.
#[derive(Debug, Clone, PartialEq, Eq, variantly::Variantly)]
pub enum Command {
    /// (Re)start the adventure, optionally under a new name.
    Start(Option<String>),
    Inventory,
    Journal,
    History,
    Look,
    Help,
    Quit,
    /// Free text passed to the intent resolver.
    Action(String),
}

/// Words recognized as host commands, for completion and help.
pub const HOST_COMMANDS: &[&str] = &[
    "start", "inventory", "inv", "journal", "history", "look", "help", "quit", "exit",
];

/// Parses an input line into a `Command`.
///
/// Host commands only match as the whole line, so multi-word story commands (and story
/// choice keys such as `restart`) always fall through to `Command::Action`.
pub fn parse_command(input: &str) -> Command {
    let words: Vec<&str> = input.split_whitespace().collect();
    let first = words.first().map(|word| word.to_lowercase());
    match (first.as_deref(), words.as_slice()) {
        (Some("start"), [_]) => Command::Start(None),
        (Some("start"), [_, name @ ..]) => Command::Start(Some(name.join(" "))),
        (Some("inventory" | "inv" | "i"), [_]) => Command::Inventory,
        (Some("journal"), [_]) => Command::Journal,
        (Some("history"), [_]) => Command::History,
        (Some("look" | "l"), [_]) => Command::Look,
        (Some("help" | "?"), [_]) => Command::Help,
        (Some("quit" | "exit"), [_]) => Command::Quit,
        _ => Command::Action(input.trim().to_string()),
    }
}
