//! Chat message entities

use crate::practice::turn::{Speaker, Turn};
use serde::{Deserialize, Serialize};

/// Role of a message in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A message in a conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    /// Reinterpret a transcript turn from the simulated client's point of
    /// view: the trainee speaks as `user`, the client as `assistant`.
    pub fn from_turn(turn: &Turn) -> Self {
        match turn.speaker() {
            Speaker::Trainee => Self::user(turn.text()),
            Speaker::SimulatedClient => Self::assistant(turn.text()),
        }
    }
}
