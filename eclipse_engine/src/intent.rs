//! Intent resolution: mapping free text onto one of a scene's choices.
//!
//! The default [`KeywordMatcher`] is simple and deterministic:
//!
//! 1. the command is lowercased and trimmed;
//! 2. choices are checked in definition order;
//! 3. a choice matches if its key occurs anywhere in the command, or if any of the first
//!    three whitespace-separated words of its lowercased description occurs anywhere in it;
//! 4. the first matching choice wins -- no scoring, no "best" match;
//! 5. if nothing matches the result is [`Resolution::NoMatch`] and the caller re-prompts.
//!
//! Short words such as "the" or "to" among those first three description words make the
//! default matcher loose: "look at the ceiling" selects any choice whose description starts
//! with "Search the ...". That behavior is kept as-is. [`StrictKeywordMatcher`] is the
//! tightened alternative and is opt-in through [`MatcherKind`].

use crate::Id;
use crate::world::Scene;

use serde::Deserialize;
use std::fmt;
use variantly::Variantly;

/// Number of leading description words that count as keywords.
pub const DESCRIPTION_KEYWORDS: usize = 3;

/// Words the strict matcher never treats as keywords.
const STOPWORDS: &[&str] = &[
    "a", "an", "and", "at", "for", "from", "in", "into", "it", "of", "on", "or", "the", "to", "with", "you", "your",
];

/// Outcome of resolving a command against a scene.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum Resolution {
    Matched(Id),
    NoMatch,
}

/// Maps a raw command onto one of a scene's choices.
pub trait IntentMatcher: Send + Sync + fmt::Debug {
    /// Short name used in logs and settings.
    fn name(&self) -> &'static str;
    /// Pick the choice the player most plausibly meant, or `NoMatch`.
    fn resolve(&self, scene: &Scene, command: &str) -> Resolution;
}

/// Matcher selection as written in settings files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatcherKind {
    #[default]
    Keyword,
    Strict,
}
impl MatcherKind {
    pub fn build(self) -> Box<dyn IntentMatcher> {
        match self {
            MatcherKind::Keyword => Box::new(KeywordMatcher),
            MatcherKind::Strict => Box::new(StrictKeywordMatcher),
        }
    }
}

/// Lowercase and trim a raw command.
pub fn normalize_command(command: &str) -> String {
    command.trim().to_lowercase()
}

/// Substring keyword matcher (the default).
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordMatcher;

impl IntentMatcher for KeywordMatcher {
    fn name(&self) -> &'static str {
        "keyword"
    }

    fn resolve(&self, scene: &Scene, command: &str) -> Resolution {
        let text = normalize_command(command);
        scene
            .choices
            .iter()
            .find(|choice| {
                text.contains(choice.id.as_str())
                    || choice
                        .description
                        .to_lowercase()
                        .split_whitespace()
                        .take(DESCRIPTION_KEYWORDS)
                        .any(|word| text.contains(word))
            })
            .map_or(Resolution::NoMatch, |choice| Resolution::Matched(choice.id.clone()))
    }
}

/// Whole-word matcher that ignores punctuation and stopwords in descriptions.
///
/// Choice keys still match as substrings, so typing `open_door` always works.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictKeywordMatcher;

impl IntentMatcher for StrictKeywordMatcher {
    fn name(&self) -> &'static str {
        "strict"
    }

    fn resolve(&self, scene: &Scene, command: &str) -> Resolution {
        let text = normalize_command(command);
        let command_words: Vec<&str> = words(&text).collect();
        scene
            .choices
            .iter()
            .find(|choice| {
                if text.contains(choice.id.as_str()) {
                    return true;
                }
                let description = choice.description.to_lowercase();
                words(&description)
                    .take(DESCRIPTION_KEYWORDS)
                    .filter(|word| !STOPWORDS.contains(word))
                    .any(|word| command_words.contains(&word))
            })
            .map_or(Resolution::NoMatch, |choice| Resolution::Matched(choice.id.clone()))
    }
}

/// Whitespace-separated words with surrounding punctuation removed; empty leftovers are skipped.
fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
        .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|word| !word.is_empty())
}
