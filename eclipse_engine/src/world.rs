//! Data structures representing the story graph.
//!
//! This module defines [`WorldGraph`] and the [`Scene`] / [`Choice`] nodes and edges
//! it is made of. A graph is built once from a validated [`WorldDef`] and is never
//! mutated afterward, so a single instance can be shared (behind an `Arc`) by any
//! number of sessions.

use crate::Id;
use crate::effect::Effect;

use eclipse_data::{ChoiceDef, SceneDef, ValidationError, WorldDef, validate_world};
use log::info;
use std::collections::HashMap;
use thiserror::Error;

/// Failures while turning a `WorldDef` into a `WorldGraph`.
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("world definition failed validation:\n{}", list_errors(.0))]
    Invalid(Vec<ValidationError>),
}

fn list_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|err| format!("- {err}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// An outgoing edge from a scene.
#[derive(Debug, Clone, PartialEq)]
pub struct Choice {
    pub id: Id,
    pub description: String,
    pub to: Id,
    pub effects: Vec<Effect>,
}

/// A node in the story graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub id: Id,
    pub title: String,
    pub description: String,
    /// Choices in definition order, which is also display and matching order.
    pub choices: Vec<Choice>,
}
impl Scene {
    /// Look up a choice of this scene by its key.
    pub fn choice(&self, choice_id: &str) -> Option<&Choice> {
        self.choices.iter().find(|choice| choice.id == choice_id)
    }
}

/// Immutable, validated story content.
#[derive(Debug, Clone)]
pub struct WorldGraph {
    title: String,
    slug: String,
    intro: String,
    start_scene: Id,
    scenes: HashMap<Id, Scene>,
}
impl WorldGraph {
    /// Build a graph from authored content.
    ///
    /// # Errors
    /// - if the definition has dangling destinations, duplicate ids, a missing start scene,
    ///   or any other problem reported by [`validate_world`]
    pub fn from_def(def: &WorldDef) -> Result<WorldGraph, WorldError> {
        let errors = validate_world(def);
        if !errors.is_empty() {
            return Err(WorldError::Invalid(errors));
        }

        let scenes: HashMap<Id, Scene> = def
            .scenes
            .iter()
            .map(|scene_def| (scene_def.id.clone(), scene_from_def(scene_def)))
            .collect();
        info!(
            "world graph \"{}\" built: {} scenes, start at \"{}\"",
            def.game.title,
            scenes.len(),
            def.game.start_scene
        );

        Ok(Self {
            title: def.game.title.clone(),
            slug: def.game.slug.clone(),
            intro: def.game.intro.clone(),
            start_scene: def.game.start_scene.clone(),
            scenes,
        })
    }

    /// Get a scene by key, or `None` if no such scene exists.
    pub fn get_scene(&self, key: &str) -> Option<&Scene> {
        self.scenes.get(key)
    }

    /// True if `key` names a scene in this graph.
    pub fn contains(&self, key: &str) -> bool {
        self.scenes.contains_key(key)
    }

    /// Key of the designated start scene.
    pub fn start_scene(&self) -> &str {
        &self.start_scene
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn intro(&self) -> &str {
        &self.intro
    }

    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }

    /// Iterate over every scene (in no particular order).
    pub fn scenes(&self) -> impl Iterator<Item = &Scene> {
        self.scenes.values()
    }
}

fn scene_from_def(def: &SceneDef) -> Scene {
    Scene {
        id: def.id.clone(),
        title: def.title.clone(),
        description: def.desc.clone(),
        choices: def.choices.iter().map(choice_from_def).collect(),
    }
}

fn choice_from_def(def: &ChoiceDef) -> Choice {
    Choice {
        id: def.id.clone(),
        description: def.desc.clone(),
        to: def.to.clone(),
        effects: def.effects.iter().map(Effect::from).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eclipse_data::{EffectDef, GameDef};

    fn small_def() -> WorldDef {
        WorldDef {
            game: GameDef {
                title: "Small".into(),
                slug: "small".into(),
                intro: "A tiny story.".into(),
                start_scene: "a".into(),
                ..GameDef::default()
            },
            scenes: vec![
                SceneDef::new(
                    "a",
                    "Scene A",
                    "First.",
                    vec![
                        ChoiceDef::new("zeta", "Last letter.", "b"),
                        ChoiceDef::new("alpha", "First letter.", "b")
                            .with_effects(vec![EffectDef::AddInventory("Token".into())]),
                    ],
                ),
                SceneDef::new("b", "Scene B", "Second.", vec![ChoiceDef::new("back", "Go back.", "a")]),
            ],
        }
    }

    #[test]
    fn builds_graph_from_valid_def() {
        let graph = WorldGraph::from_def(&small_def()).expect("valid world");
        assert_eq!(graph.scene_count(), 2);
        assert_eq!(graph.start_scene(), "a");
        assert_eq!(graph.title(), "Small");
        assert_eq!(graph.slug(), "small");
        assert_eq!(graph.intro(), "A tiny story.");
        assert!(graph.contains("b"));
    }

    #[test]
    fn unknown_scene_is_none() {
        let graph = WorldGraph::from_def(&small_def()).unwrap();
        assert!(graph.get_scene("missing").is_none());
        assert!(!graph.contains("missing"));
    }

    #[test]
    fn choice_order_and_effects_are_preserved() {
        let graph = WorldGraph::from_def(&small_def()).unwrap();
        let scene = graph.get_scene("a").unwrap();
        let ids: Vec<&str> = scene.choices.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["zeta", "alpha"]);
        assert_eq!(
            scene.choice("alpha").unwrap().effects,
            vec![Effect::AddInventory("Token".into())]
        );
        assert!(scene.choice("omega").is_none());
    }

    #[test]
    fn invalid_def_is_rejected_with_every_problem_listed() {
        let mut def = small_def();
        def.scenes[0].choices[0].to = "void".into();
        def.scenes[1].choices[0].to = "abyss".into();
        let err = WorldGraph::from_def(&def).unwrap_err();
        let WorldError::Invalid(errors) = &err;
        assert_eq!(errors.len(), 2);
        let text = err.to_string();
        assert!(text.contains("missing scene 'void'"));
        assert!(text.contains("missing scene 'abyss'"));
    }
}
