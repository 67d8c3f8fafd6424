//! Profile role types.

use serde::{Deserialize, Serialize};

/// Role of a synced profile.
///
/// Wire format: lowercase string (`"client"` / `"chauffeur"`), matching both
/// the identity provider's metadata hint and the `profiles.role` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Client,
    Chauffeur,
}

impl Role {
    /// Parse from the wire string. Returns `None` for unknown values.
    pub fn parse(v: &str) -> Option<Self> {
        match v {
            "client" => Some(Self::Client),
            "chauffeur" => Some(Self::Chauffeur),
            _ => None,
        }
    }

    /// Wire string stored in `profiles.role` and `notifications.recipient_role`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Chauffeur => "chauffeur",
        }
    }
}
