use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub type MemberId = i64;

/// Organizational role of a project member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Member,
    #[serde(rename = "PM")]
    Pm,
    #[serde(rename = "PL")]
    Pl,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Member, Role::Pm, Role::Pl];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Member => "Member",
            Role::Pm => "PM",
            Role::Pl => "PL",
        }
    }

    pub fn weight(self) -> u32 {
        crate::analysis::weights::role_weight(self.as_str())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| format!("unknown role: {s}"))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    /// Stored as written. Out-of-set roles must still deserialize so the
    /// input policy can reject them or fall back to the default weight;
    /// `parsed_role` gives the typed view.
    pub role: String, // "Member" | "PM" | "PL"
    #[serde(default)]
    pub email: Option<String>,
}

impl Member {
    pub fn new(id: MemberId, name: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            name: name.into(),
            role: role.as_str().to_string(),
            email: None,
        }
    }

    pub fn parsed_role(&self) -> Option<Role> {
        self.role.parse().ok()
    }
}
