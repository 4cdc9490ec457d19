use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::*;

/// State recorded by a single move at one coordinate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveState {
    Cleared,
    Exploded,
    Flagged,
    Unknown,
}

impl MoveState {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cleared => "cleared",
            Self::Exploded => "exploded",
            Self::Flagged => "flagged",
            Self::Unknown => "unknown",
        }
    }

    /// Whether a flood fill must stop when it reaches a cell in this state.
    pub const fn is_known(self) -> bool {
        matches!(self, Self::Cleared | Self::Exploded | Self::Flagged)
    }
}

impl fmt::Display for MoveState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MoveState {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "cleared" => Ok(Self::Cleared),
            "exploded" => Ok(Self::Exploded),
            "flagged" => Ok(Self::Flagged),
            "unknown" => Ok(Self::Unknown),
            _ => Err(GameError::InvalidMoveState),
        }
    }
}

/// Overall state of a game session.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    Active,
    Cleared,
    Exploded,
}

impl SessionState {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Cleared => "cleared",
            Self::Exploded => "exploded",
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Cleared | Self::Exploded)
    }

    /// Terminal states never change again; an active session may move anywhere.
    pub fn can_become(self, next: SessionState) -> bool {
        !self.is_terminal() || self == next
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::Active
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SessionState {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "active" => Ok(Self::Active),
            "cleared" => Ok(Self::Cleared),
            "exploded" => Ok(Self::Exploded),
            _ => Err(GameError::InvalidSessionState),
        }
    }
}

/// What the player asked for at a coordinate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveAction {
    Reveal,
    Flag,
    MarkUnknown,
}

impl MoveAction {
    /// Anything other than an explicit flag or unknown mark is a reveal.
    pub const fn from_requested(state: Option<MoveState>) -> Self {
        match state {
            Some(MoveState::Flagged) => Self::Flag,
            Some(MoveState::Unknown) => Self::MarkUnknown,
            Some(MoveState::Cleared | MoveState::Exploded) | None => Self::Reveal,
        }
    }
}
