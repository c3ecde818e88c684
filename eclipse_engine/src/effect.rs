//! Effect module
//!
//! Side effects a choice may declare. The set is closed: adding a new kind of effect means
//! adding a variant here and an arm in [`apply_effect`], and the compiler points at every
//! other place that needs to know about it.
use crate::session::SessionState;

use eclipse_data::EffectDef;
use log::info;
use variantly::Variantly;

/// A declared mutation applied when a choice is taken.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum Effect {
    AddJournal(String),
    AddInventory(String),
}

impl From<&EffectDef> for Effect {
    fn from(def: &EffectDef) -> Self {
        match def {
            EffectDef::AddJournal(text) => Effect::AddJournal(text.clone()),
            EffectDef::AddInventory(item) => Effect::AddInventory(item.clone()),
        }
    }
}

/// Apply every effect in order. Never fails and never skips the rest of the list.
pub fn apply_effects(effects: &[Effect], state: &mut SessionState) {
    for effect in effects {
        apply_effect(effect, state);
    }
}

/// Apply a single effect to the session.
///
/// Repeated application appends again; duplicates in inventory or journal are allowed.
pub fn apply_effect(effect: &Effect, state: &mut SessionState) {
    match effect {
        Effect::AddJournal(text) => {
            state.journal.push(text.clone());
            info!("└─ effect: AddJournal(\"{text}\") [session {}]", state.session_id());
        },
        Effect::AddInventory(item) => {
            state.inventory.push(item.clone());
            info!("└─ effect: AddInventory(\"{item}\") [session {}]", state.session_id());
        },
    }
}
