//! Engine -- the operations a host calls once per player turn.
//!
//! An [`Engine`] pairs an immutable [`WorldGraph`] with an [`IntentMatcher`]. It holds no
//! per-player data: every operation takes the caller's [`SessionState`], so one engine can
//! serve any number of sessions, on any number of threads. Holding `&mut SessionState` for
//! the length of a call is what keeps turns for one session from overlapping.
//!
//! None of these operations fail. Unknown scenes, unmatched commands and odd input all come
//! back as text the player can read.

use std::sync::Arc;

use crate::config::EngineConfig;
use crate::effect::apply_effects;
use crate::history::record_history;
use crate::intent::{IntentMatcher, KeywordMatcher, Resolution};
use crate::render;
use crate::session::SessionState;
use crate::world::WorldGraph;

use log::{info, warn};

/// Player name used when an adventure starts without one.
pub const DEFAULT_PLAYER_NAME: &str = "Survivor";

#[derive(Debug)]
pub struct Engine {
    world: Arc<WorldGraph>,
    matcher: Box<dyn IntentMatcher>,
    default_player_name: String,
    clear_journal_on_restart: bool,
}

impl Engine {
    /// Engine with the default keyword matcher and default settings.
    pub fn new(world: Arc<WorldGraph>) -> Self {
        Self {
            world,
            matcher: Box::new(KeywordMatcher),
            default_player_name: DEFAULT_PLAYER_NAME.to_string(),
            clear_journal_on_restart: false,
        }
    }

    /// Engine configured from settings.
    pub fn from_config(world: Arc<WorldGraph>, config: &EngineConfig) -> Self {
        Self::new(world)
            .with_matcher(config.matcher.build())
            .with_default_player_name(&config.default_player_name)
            .with_clear_journal_on_restart(config.clear_journal_on_restart)
    }

    #[must_use]
    pub fn with_matcher(mut self, matcher: Box<dyn IntentMatcher>) -> Self {
        self.matcher = matcher;
        self
    }

    #[must_use]
    pub fn with_default_player_name(mut self, name: &str) -> Self {
        if name.trim().is_empty() {
            warn!("ignoring blank default player name");
        } else {
            self.default_player_name = name.trim().to_string();
        }
        self
    }

    /// Whether `start_adventure` also empties the journal.
    #[must_use]
    pub fn with_clear_journal_on_restart(mut self, clear: bool) -> Self {
        self.clear_journal_on_restart = clear;
        self
    }

    pub fn world(&self) -> &WorldGraph {
        &self.world
    }

    pub fn matcher(&self) -> &dyn IntentMatcher {
        self.matcher.as_ref()
    }

    /// A fresh session positioned at the start scene.
    pub fn new_session(&self) -> SessionState {
        SessionState::new(self.world.start_scene())
    }

    /// Reset the session to the start scene and return the boot message plus the first scene.
    ///
    /// Inventory and history are cleared. The journal is kept unless the engine was built
    /// with `with_clear_journal_on_restart(true)`. The session id never changes.
    pub fn start_adventure(&self, state: &mut SessionState, player_name: Option<&str>) -> String {
        let name = player_name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(self.default_player_name.as_str())
            .to_string();

        state.player_name = Some(name.clone());
        state.current_scene = self.world.start_scene().to_string();
        state.clear_history();
        state.inventory.clear();
        if self.clear_journal_on_restart {
            state.journal.clear();
        }
        info!(
            "session {}: adventure started for \"{name}\" at \"{}\"",
            state.session_id(),
            state.current_scene
        );

        format!(
            "{}\n\n{}",
            render::boot_text(&name),
            render::scene_text(&self.world, &state.current_scene)
        )
    }

    /// Resolve `command` against the session's current scene without changing anything.
    ///
    /// A session sitting on an unknown scene has nothing to match, so the result is `NoMatch`.
    pub fn resolve(&self, state: &SessionState, command: &str) -> Resolution {
        match self.world.get_scene(self.current_scene_key(state)) {
            Some(scene) => self.matcher.resolve(scene, command),
            None => Resolution::NoMatch,
        }
    }

    /// Run one player turn.
    ///
    /// On a match: apply the choice's effects, record the transition, move to the destination,
    /// and return the confirmation followed by the new scene. Otherwise return the
    /// not-recognized notice with the current scene, leaving the session untouched.
    pub fn player_action(&self, state: &mut SessionState, command: &str) -> String {
        let current = self.current_scene_key(state).to_string();
        let Some(scene) = self.world.get_scene(&current) else {
            warn!(
                "session {}: current scene \"{current}\" is not in the world; nothing to match",
                state.session_id()
            );
            return render::not_recognized_text(&self.world, &current);
        };

        let chosen = match self.matcher.resolve(scene, command) {
            Resolution::Matched(choice_id) => scene.choice(&choice_id),
            Resolution::NoMatch => None,
        };
        let Some(choice) = chosen else {
            info!(
                "session {}: {command:?} matched no choice in \"{current}\" ({} matcher)",
                state.session_id(),
                self.matcher.name()
            );
            return render::not_recognized_text(&self.world, &current);
        };

        apply_effects(&choice.effects, state);
        let note = record_history(&current, &choice.id, &choice.to, state);
        state.current_scene.clone_from(&choice.to);

        format!("{note}\n\n{}", render::scene_text(&self.world, &choice.to))
    }

    /// Held items, or an explicit empty notice.
    pub fn check_inventory(&self, state: &SessionState) -> String {
        render::inventory_text(state)
    }

    /// Journal entries gathered so far.
    pub fn journal(&self, state: &SessionState) -> String {
        render::journal_text(state)
    }

    /// The transition log for this session.
    pub fn history(&self, state: &SessionState) -> String {
        render::history_text(state)
    }

    /// Re-render the current scene.
    pub fn look(&self, state: &SessionState) -> String {
        self.render(self.current_scene_key(state))
    }

    /// Render any scene by key; unknown keys give the fallback text.
    pub fn render(&self, scene_key: &str) -> String {
        render::scene_text(&self.world, scene_key)
    }

    /// The session's scene, with an empty key treated as the start scene.
    fn current_scene_key<'a>(&'a self, state: &'a SessionState) -> &'a str {
        if state.current_scene.is_empty() {
            self.world.start_scene()
        } else {
            &state.current_scene
        }
    }
}
