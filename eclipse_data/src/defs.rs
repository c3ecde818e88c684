use serde::{Deserialize, Serialize};

/// Stable identifier used for scene and choice references.
pub type Id = String;

/// Top-level authored story loaded by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct WorldDef {
    pub game: GameDef,
    #[serde(default)]
    pub scenes: Vec<SceneDef>,
}

/// Story-level metadata and startup configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct GameDef {
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub intro: String,
    pub start_scene: Id,
}

/// A node in the story graph.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SceneDef {
    pub id: Id,
    pub title: String,
    pub desc: String,
    /// Outgoing choices in the order they are shown and matched.
    #[serde(default)]
    pub choices: Vec<ChoiceDef>,
}

/// A labeled edge from one scene to another.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChoiceDef {
    pub id: Id,
    pub desc: String,
    pub to: Id,
    #[serde(default)]
    pub effects: Vec<EffectDef>,
}

/// Mutations applied to the session when a choice is taken.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum EffectDef {
    AddJournal(String),
    AddInventory(String),
}

impl SceneDef {
    /// Convenience constructor used by compiled-in story tables.
    pub fn new(id: &str, title: &str, desc: &str, choices: Vec<ChoiceDef>) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            desc: desc.to_string(),
            choices,
        }
    }
}

impl ChoiceDef {
    /// A choice without effects.
    pub fn new(id: &str, desc: &str, to: &str) -> Self {
        Self {
            id: id.to_string(),
            desc: desc.to_string(),
            to: to.to_string(),
            effects: Vec::new(),
        }
    }

    /// Attach effects to this choice.
    #[must_use]
    pub fn with_effects(mut self, effects: Vec<EffectDef>) -> Self {
        self.effects = effects;
        self
    }
}
