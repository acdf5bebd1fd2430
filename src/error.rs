use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("score {score} on record {record_id} of member {member_id} is outside 0..=100")]
    InvalidScore {
        member_id: i64,
        record_id: i64,
        score: i64,
    },

    #[error("member {member_id} has unknown role {role:?} (expected Member, PM or PL)")]
    UnknownRole { member_id: i64, role: String },

    #[error("record {record_id} has unparseable timestamp {value:?}")]
    InvalidTimestamp { record_id: i64, value: String },

    #[error("Settings error: {0}")]
    Settings(String),
}

impl ScoringError {
    pub fn settings<S: Into<String>>(msg: S) -> Self {
        ScoringError::Settings(msg.into())
    }
}

impl From<serde_json::Error> for ScoringError {
    fn from(err: serde_json::Error) -> Self {
        ScoringError::Settings(err.to_string())
    }
}

impl From<std::io::Error> for ScoringError {
    fn from(err: std::io::Error) -> Self {
        ScoringError::Settings(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ScoringError>;
