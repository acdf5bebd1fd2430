use crate::models::member::{Member, MemberId};
use crate::models::score::ScoreRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Score histories keyed by member id, each in insertion order.
pub type Histories = HashMap<MemberId, Vec<ScoreRecord>>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectInfo {
    pub id: i64,
    pub name: String,
    pub document_url: String,
}

/// Read-only view of one project, already authorized and filtered by the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectScores {
    pub project: Option<ProjectInfo>,
    pub members: Vec<Member>,
    #[serde(default)]
    pub histories: Histories,
}
