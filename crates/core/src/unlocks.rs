//! DEX card unlock rules.

use crate::error::CoreError;

/// A threshold condition gating a DEX card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnlockRule {
    /// Unlocked once the user's level reaches the value.
    Level(i32),
    /// Unlocked once the user's current streak reaches the value.
    Streak(i32),
}

impl UnlockRule {
    /// Build a rule from its stored `(type, value)` representation.
    pub fn from_parts(rule_type: &str, value: i32) -> Result<Self, CoreError> {
        match rule_type {
            "level" => Ok(UnlockRule::Level(value)),
            "streak" => Ok(UnlockRule::Streak(value)),
            other => Err(CoreError::Internal(format!(
                "Unknown unlock rule type: {other}"
            ))),
        }
    }

    /// Whether the rule is satisfied by the given progression state.
    ///
    /// Satisfaction is evaluated against the state at completion time only;
    /// grants are permanent, so a later streak reset never matters.
    pub fn is_satisfied(&self, level: i32, streak: i32) -> bool {
        match self {
            UnlockRule::Level(required) => level >= *required,
            UnlockRule::Streak(required) => streak >= *required,
        }
    }
}
