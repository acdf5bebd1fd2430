use crate::models::member::MemberId;
use serde::{Deserialize, Serialize};

pub const MIN_SCORE: i64 = 0;
pub const MAX_SCORE: i64 = 100;

/// One evaluation event. Histories are append-only, so a member's
/// `Vec<ScoreRecord>` is kept in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub id: i64,
    pub member_id: MemberId,
    pub score: i64,
    #[serde(default)]
    pub comment: Option<String>,
    pub created_at: String, // ISO-8601
}

impl ScoreRecord {
    pub fn is_in_range(&self) -> bool {
        (MIN_SCORE..=MAX_SCORE).contains(&self.score)
    }
}
