//! Shared enabled/disabled status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Activation status shared by users, roles, and departments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "entity_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum EntityStatus {
    /// The record is active.
    Enabled,
    /// The record has been deactivated by an administrator.
    Disabled,
}

impl EntityStatus {
    /// Check if the record is enabled.
    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Enabled)
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Enabled => "enabled",
            Self::Disabled => "disabled",
        }
    }
}

impl fmt::Display for EntityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EntityStatus {
    type Err = adminhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "enabled" => Ok(Self::Enabled),
            "disabled" => Ok(Self::Disabled),
            _ => Err(adminhub_core::AppError::validation(format!(
                "Invalid status: '{s}'. Expected one of: enabled, disabled"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("enabled".parse::<EntityStatus>().unwrap(), EntityStatus::Enabled);
        assert_eq!("DISABLED".parse::<EntityStatus>().unwrap(), EntityStatus::Disabled);
        assert!("archived".parse::<EntityStatus>().is_err());
    }

    #[test]
    fn test_is_enabled() {
        assert!(EntityStatus::Enabled.is_enabled());
        assert!(!EntityStatus::Disabled.is_enabled());
    }
}
