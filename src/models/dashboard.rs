use crate::models::member::MemberId;
use crate::models::project::ProjectInfo;
use crate::models::score::ScoreRecord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelinePoint {
    pub date: String, // "YYYY-MM-DD"
    pub weighted_average: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberSummary {
    pub id: MemberId,
    pub name: String,
    pub role: String,
    pub weight: u32,
    pub latest_score: Option<i64>,
    pub latest_comment: Option<String>,
    pub latest_score_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub project: Option<ProjectInfo>,
    pub weighted_average: Option<f64>,
    pub last_updated: Option<String>,
    pub members_summary: Vec<MemberSummary>,
    pub timeline: Vec<TimelinePoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberWithLatestScore {
    pub id: MemberId,
    pub name: String,
    pub role: String,
    pub email: Option<String>,
    pub latest_score: Option<i64>,
    pub latest_score_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberInfo {
    pub id: MemberId,
    pub name: String,
    pub role: String,
}

/// A member's score history, newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreHistoryView {
    pub member: MemberInfo,
    pub scores: Vec<ScoreRecord>,
}
