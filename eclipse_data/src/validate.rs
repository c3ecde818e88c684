use std::collections::HashSet;
use std::fmt;

use crate::*;

/// Validation error for malformed or missing references in a `WorldDef`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    DuplicateId { kind: &'static str, id: String },
    MissingReference { kind: &'static str, id: String, context: String },
    InvalidValue { context: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateId { kind, id } => {
                write!(f, "duplicate {kind} id '{id}'")
            },
            ValidationError::MissingReference { kind, id, context } => {
                write!(f, "missing {kind} '{id}' ({context})")
            },
            ValidationError::InvalidValue { context } => {
                write!(f, "invalid value ({context})")
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate cross-references and basic invariants in a `WorldDef`.
///
/// Every choice must lead to a scene that exists (self-references included),
/// the start scene must exist, and every scene must offer at least one choice.
///
/// ```
/// use eclipse_data::{ChoiceDef, GameDef, SceneDef, WorldDef, validate_world};
///
/// let world = WorldDef {
///     game: GameDef {
///         title: "Demo".into(),
///         start_scene: "start".into(),
///         ..GameDef::default()
///     },
///     scenes: vec![SceneDef::new(
///         "start",
///         "Start",
///         "A room.",
///         vec![ChoiceDef::new("wait", "Wait a moment.", "start")],
///     )],
/// };
/// assert!(validate_world(&world).is_empty());
/// ```
pub fn validate_world(world: &WorldDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let mut scenes = HashSet::new();
    track_ids(
        "scene",
        world.scenes.iter().map(|s| s.id.as_str()),
        &mut scenes,
        &mut errors,
    );

    if world.game.start_scene.trim().is_empty() {
        errors.push(ValidationError::InvalidValue {
            context: "game start scene missing".to_string(),
        });
    } else {
        check_ref(
            "scene",
            &world.game.start_scene,
            &scenes,
            "game start scene".to_string(),
            &mut errors,
        );
    }

    for scene in &world.scenes {
        if scene.choices.is_empty() {
            errors.push(ValidationError::InvalidValue {
                context: format!("scene '{}' has no choices", scene.id),
            });
        }

        let mut choice_ids = HashSet::new();
        track_ids(
            "choice",
            scene.choices.iter().map(|c| c.id.as_str()),
            &mut choice_ids,
            &mut errors,
        );

        for choice in &scene.choices {
            if choice.id.trim().is_empty() {
                errors.push(ValidationError::InvalidValue {
                    context: format!("scene '{}' has a choice with an empty id", scene.id),
                });
            }
            if choice.desc.trim().is_empty() {
                errors.push(ValidationError::InvalidValue {
                    context: format!("scene '{}' choice '{}' has an empty description", scene.id, choice.id),
                });
            }
            check_ref(
                "scene",
                &choice.to,
                &scenes,
                format!("scene '{}' choice '{}'", scene.id, choice.id),
                &mut errors,
            );
            for effect in &choice.effects {
                validate_effect(effect, &mut errors, &format!("scene '{}' choice '{}'", scene.id, choice.id));
            }
        }
    }

    errors
}

fn validate_effect(effect: &EffectDef, errors: &mut Vec<ValidationError>, context: &str) {
    let (kind, text) = match effect {
        EffectDef::AddJournal(text) => ("journal entry", text),
        EffectDef::AddInventory(item) => ("inventory item", item),
    };
    if text.trim().is_empty() {
        errors.push(ValidationError::InvalidValue {
            context: format!("{context} adds an empty {kind}"),
        });
    }
}

fn track_ids<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
    seen: &mut HashSet<String>,
    errors: &mut Vec<ValidationError>,
) {
    for id in ids {
        if !seen.insert(id.to_string()) {
            errors.push(ValidationError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
}

fn check_ref(
    kind: &'static str,
    id: &str,
    known: &HashSet<String>,
    context: String,
    errors: &mut Vec<ValidationError>,
) {
    if !known.contains(id) {
        errors.push(ValidationError::MissingReference {
            kind,
            id: id.to_string(),
            context,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_world() -> WorldDef {
        WorldDef {
            game: GameDef {
                title: "Test".into(),
                start_scene: "intro".into(),
                ..GameDef::default()
            },
            scenes: vec![
                SceneDef::new(
                    "intro",
                    "Intro",
                    "The beginning.",
                    vec![
                        ChoiceDef::new("go", "Go onward.", "end")
                            .with_effects(vec![EffectDef::AddInventory("Key".into())]),
                    ],
                ),
                SceneDef::new(
                    "end",
                    "End",
                    "The end.",
                    vec![ChoiceDef::new("restart", "Start over.", "intro")],
                ),
            ],
        }
    }

    #[test]
    fn valid_world_passes() {
        assert!(validate_world(&base_world()).is_empty());
    }

    #[test]
    fn dangling_destination_is_reported() {
        let mut world = base_world();
        world.scenes[0].choices[0].to = "nowhere".into();
        let errors = validate_world(&world);
        assert_eq!(
            errors,
            vec![ValidationError::MissingReference {
                kind: "scene",
                id: "nowhere".into(),
                context: "scene 'intro' choice 'go'".into(),
            }]
        );
    }

    #[test]
    fn duplicate_scene_and_choice_ids_are_reported() {
        let mut world = base_world();
        let dup = world.scenes[1].clone();
        world.scenes.push(dup);
        let extra = world.scenes[0].choices[0].clone();
        world.scenes[0].choices.push(extra);
        let errors = validate_world(&world);
        assert!(errors.contains(&ValidationError::DuplicateId {
            kind: "scene",
            id: "end".into()
        }));
        assert!(errors.contains(&ValidationError::DuplicateId {
            kind: "choice",
            id: "go".into()
        }));
    }

    #[test]
    fn missing_start_scene_is_reported() {
        let mut world = base_world();
        world.game.start_scene = "   ".into();
        let errors = validate_world(&world);
        assert!(matches!(errors.as_slice(), [ValidationError::InvalidValue { .. }]));

        world.game.start_scene = "lobby".into();
        let errors = validate_world(&world);
        assert!(errors.iter().any(|e| e.to_string() == "missing scene 'lobby' (game start scene)"));
    }

    #[test]
    fn dead_end_scene_and_empty_effect_are_invalid() {
        let mut world = base_world();
        world.scenes[1].choices.clear();
        world.scenes[0].choices[0].effects.push(EffectDef::AddJournal(String::new()));
        let messages: Vec<String> = validate_world(&world).iter().map(ToString::to_string).collect();
        assert!(messages.contains(&"invalid value (scene 'end' has no choices)".to_string()));
        assert!(messages.contains(&"invalid value (scene 'intro' choice 'go' adds an empty journal entry)".to_string()));
    }
}
