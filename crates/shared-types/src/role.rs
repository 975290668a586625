use serde::{Deserialize, Serialize};
use std::fmt;

use crate::AppError;

/// Permission scope the dashboard is viewed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewerRole {
    /// Sees only cases they own.
    #[default]
    #[serde(alias = "cso")]
    Officer,
    /// Sees every case across the team.
    Supervisor,
}

pub const ALL_ROLES: &[ViewerRole] = &[ViewerRole::Officer, ViewerRole::Supervisor];

impl ViewerRole {
    /// Lowercase key for config and logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewerRole::Officer => "officer",
            ViewerRole::Supervisor => "supervisor",
        }
    }

    /// Short name used in badges ("Officer view").
    pub fn short_label(&self) -> &'static str {
        match self {
            ViewerRole::Officer => "Officer",
            ViewerRole::Supervisor => "Supervisor",
        }
    }

    /// Name shown on the role toggle.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            ViewerRole::Officer => "Customer Service Officer",
            ViewerRole::Supervisor => "Supervisor",
        }
    }

    pub fn parse(s: &str) -> Result<Self, AppError> {
        match s.trim().to_lowercase().as_str() {
            "officer" | "cso" => Ok(ViewerRole::Officer),
            "supervisor" => Ok(ViewerRole::Supervisor),
            _ => Err(AppError::bad_request(format!("Unknown viewer role: {s}"))),
        }
    }

    /// The other role. The toggle has no guards in either direction.
    pub fn toggled(&self) -> Self {
        match self {
            ViewerRole::Officer => ViewerRole::Supervisor,
            ViewerRole::Supervisor => ViewerRole::Officer,
        }
    }

    pub fn sees_all_cases(&self) -> bool {
        matches!(self, ViewerRole::Supervisor)
    }
}

impl fmt::Display for ViewerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
