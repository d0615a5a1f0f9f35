//! Cron expression stored on schedules
//!
//! Only the shape is checked (five whitespace-separated fields); schedules are
//! stored for external runners and never evaluated here.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

const FIELD_COUNT: usize = 5;

/// A five-field cron expression, normalised to single spaces
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CronExpression(String);

impl CronExpression {
    /// Validate and normalise a cron expression
    ///
    /// # Errors
    /// Returns `DomainError::InvalidCron` unless the input has exactly five fields.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let fields: Vec<&str> = input.split_whitespace().collect();
        if fields.len() != FIELD_COUNT {
            return Err(DomainError::InvalidCron(input.to_string()));
        }
        Ok(Self(fields.join(" ")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CronExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
