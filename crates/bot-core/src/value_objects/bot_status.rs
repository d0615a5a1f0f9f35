//! Bot run status and its transition table
//!
//! | command   | from      | to        |
//! |-----------|-----------|-----------|
//! | `start`   | stopped   | running   |
//! | `stop`    | running   | stopped   |
//! | `restart` | any       | running   |
//!
//! Anything else is rejected with `DomainError::InvalidTransition`.
//! Deploying a new version never touches the status.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Recorded run status of a bot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BotStatus {
    #[default]
    Stopped,
    Running,
}

/// Lifecycle command that changes a bot's status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BotCommand {
    Start,
    Stop,
    Restart,
}

impl BotStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stopped => "stopped",
            Self::Running => "running",
        }
    }

    /// Apply a lifecycle command, returning the resulting status
    ///
    /// # Errors
    /// Returns `DomainError::InvalidTransition` when the command is not
    /// allowed from the current status.
    pub fn apply(self, command: BotCommand) -> Result<Self, DomainError> {
        match (command, self) {
            (BotCommand::Start, Self::Stopped) => Ok(Self::Running),
            (BotCommand::Stop, Self::Running) => Ok(Self::Stopped),
            (BotCommand::Restart, _) => Ok(Self::Running),
            (_, current) => Err(DomainError::InvalidTransition {
                command: command.as_str(),
                current,
            }),
        }
    }
}

impl BotCommand {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
            Self::Restart => "restart",
        }
    }

    /// The status a bot must currently be in for the command to succeed.
    /// `None` means the command is accepted from any status.
    pub const fn required_status(self) -> Option<BotStatus> {
        match self {
            Self::Start => Some(BotStatus::Stopped),
            Self::Stop => Some(BotStatus::Running),
            Self::Restart => None,
        }
    }
}

impl fmt::Display for BotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for BotCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BotStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stopped" => Ok(Self::Stopped),
            "running" => Ok(Self::Running),
            other => Err(DomainError::InternalError(format!(
                "unknown bot status: {other}"
            ))),
        }
    }
}
