pub mod aggregate;
pub mod history;
pub mod rounding;
pub mod timeline;
pub mod weights;

use crate::error::{Result, ScoringError};
use crate::models::member::Member;
use crate::models::project::Histories;
use history::ScoreHistory;
use rounding::RoundingMode;
use serde::{Deserialize, Serialize};

/// What to do with records that should have been stopped at data entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputPolicy {
    /// Fail the whole computation on an out-of-range score or unknown role.
    #[default]
    Reject,
    /// Clamp scores into 0..=100 and give unknown roles the default weight.
    Clamp,
}

impl InputPolicy {
    pub const ALL: [InputPolicy; 2] = [InputPolicy::Reject, InputPolicy::Clamp];

    pub fn as_str(self) -> &'static str {
        match self {
            InputPolicy::Reject => "reject",
            InputPolicy::Clamp => "clamp",
        }
    }

    pub fn from_setting(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|policy| policy.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoringSettings {
    pub input_policy: InputPolicy,
    pub rounding: RoundingMode,
}

/// A member paired with its role weight and ordered history.
#[derive(Debug, Clone)]
pub struct MemberHistory<'a> {
    pub member: &'a Member,
    pub weight: u32,
    pub history: ScoreHistory<'a>,
}

/// Validates and orders every member's history once, so the current and the
/// historical views resolve scores from the same data.
pub fn prepare<'a>(
    members: &'a [Member],
    histories: &'a Histories,
    policy: InputPolicy,
) -> Result<Vec<MemberHistory<'a>>> {
    members
        .iter()
        .map(|member| {
            let records = histories.get(&member.id).map(Vec::as_slice).unwrap_or(&[]);
            Ok(MemberHistory {
                member,
                weight: member_weight(member, policy)?,
                history: ScoreHistory::build(member.id, records, policy)?,
            })
        })
        .collect()
}

fn member_weight(member: &Member, policy: InputPolicy) -> Result<u32> {
    if let Some(role) = member.parsed_role() {
        return Ok(role.weight());
    }

    match policy {
        InputPolicy::Reject => Err(ScoringError::UnknownRole {
            member_id: member.id,
            role: member.role.clone(),
        }),
        InputPolicy::Clamp => {
            log::warn!(
                "member {} has unknown role {:?}; using default weight",
                member.id,
                member.role
            );
            Ok(weights::role_weight(&member.role))
        }
    }
}
