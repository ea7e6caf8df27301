//! Player actions and their submitted form.
//!
//! [`Action`] is the closed set of moves a player may choose each round.
//! [`ActionInput`] is what actually reaches the engine: either a recognized
//! action or the raw text a client sent. Callers reject unrecognized input
//! before resolution; the engine still resolves it as an "invalid action"
//! with no effect.
use std::fmt;

/// A move a player can choose for a round.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase")]
pub enum Action {
    /// Spend energy to deal damage to the opponent.
    Attack,
    /// Halve incoming damage this round and recover energy.
    Defend,
    /// Spend energy so the next attack hits harder.
    Charge,
}

impl Action {
    pub const ALL: [Action; 3] = [Action::Attack, Action::Defend, Action::Charge];
}

/// An action as submitted for a round, before it is known to be valid.
///
/// Serializes as the plain action string in both cases.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub enum ActionInput {
    Known(Action),
    Unrecognized(String),
}

impl ActionInput {
    /// Parses the exact action strings `attack`, `defend` and `charge`.
    /// Anything else (including different casing) is kept as unrecognized.
    pub fn parse(raw: &str) -> Self {
        raw.parse::<Action>()
            .map(ActionInput::Known)
            .unwrap_or_else(|_| ActionInput::Unrecognized(raw.to_owned()))
    }

    pub fn action(&self) -> Option<Action> {
        match self {
            ActionInput::Known(action) => Some(*action),
            ActionInput::Unrecognized(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ActionInput::Known(action) => action.as_ref(),
            ActionInput::Unrecognized(raw) => raw,
        }
    }
}

impl From<Action> for ActionInput {
    fn from(action: Action) -> Self {
        ActionInput::Known(action)
    }
}

impl From<String> for ActionInput {
    fn from(raw: String) -> Self {
        ActionInput::parse(&raw)
    }
}

impl From<ActionInput> for String {
    fn from(input: ActionInput) -> Self {
        match input {
            ActionInput::Known(action) => action.to_string(),
            ActionInput::Unrecognized(raw) => raw,
        }
    }
}

impl fmt::Display for ActionInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two actions submitted for one round, keyed by player slot.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionPair {
    pub player1: ActionInput,
    pub player2: ActionInput,
}

impl ActionPair {
    pub fn new(player1: impl Into<ActionInput>, player2: impl Into<ActionInput>) -> Self {
        Self {
            player1: player1.into(),
            player2: player2.into(),
        }
    }
}
