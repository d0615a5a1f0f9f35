//! Bot entity - a managed automation worker record

use chrono::{DateTime, Utc};
use serde_json::Value as JsonValue;

use crate::value_objects::BotStatus;

/// Bot entity
///
/// `config` is an opaque document owned by whoever runs the bot; it is stored
/// and returned verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct Bot {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub version: String,
    pub config: JsonValue,
    pub status: BotStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Bot {
    /// Read-only status projection
    pub fn status_view(&self) -> BotStatusView {
        BotStatusView {
            id: self.id,
            name: self.name.clone(),
            status: self.status,
            version: self.version.clone(),
        }
    }
}

/// Fields required to insert a bot; status always starts as `Stopped`
#[derive(Debug, Clone, PartialEq)]
pub struct NewBot {
    pub name: String,
    pub description: String,
    pub version: String,
    pub config: JsonValue,
}

/// Partial update: `None` leaves the field untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BotPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub version: Option<String>,
    pub config: Option<JsonValue>,
}

impl BotPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.version.is_none()
            && self.config.is_none()
    }

    /// Apply the supplied fields to a bot. Returns `true` if anything was set.
    pub fn apply_to(self, bot: &mut Bot) -> bool {
        let changed = !self.is_empty();
        if let Some(name) = self.name {
            bot.name = name;
        }
        if let Some(description) = self.description {
            bot.description = description;
        }
        if let Some(version) = self.version {
            bot.version = version;
        }
        if let Some(config) = self.config {
            bot.config = config;
        }
        if changed {
            bot.updated_at = Utc::now();
        }
        changed
    }
}

/// `{id, name, status, version}` projection served by the status endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotStatusView {
    pub id: i64,
    pub name: String,
    pub status: BotStatus,
    pub version: String,
}
