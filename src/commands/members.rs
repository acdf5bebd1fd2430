use crate::analysis::history::ScoreHistory;
use crate::analysis::{prepare, ScoringSettings};
use crate::error::Result;
use crate::models::dashboard::{MemberInfo, MemberWithLatestScore, ScoreHistoryView};
use crate::models::member::Member;
use crate::models::project::ProjectScores;
use crate::models::score::ScoreRecord;

/// Project members with their most recent score.
pub fn list_members(input: &ProjectScores, settings: ScoringSettings) -> Result<Vec<MemberWithLatestScore>> {
    let prepared = prepare(&input.members, &input.histories, settings.input_policy)?;

    Ok(prepared
        .iter()
        .map(|entry| {
            let latest = entry.history.latest();
            MemberWithLatestScore {
                id: entry.member.id,
                name: entry.member.name.clone(),
                role: entry.member.role.clone(),
                email: entry.member.email.clone(),
                latest_score: latest.map(|latest| i64::from(latest.score())),
                latest_score_at: latest.map(|latest| latest.record().created_at.clone()),
            }
        })
        .collect())
}

/// A member's full history, newest first.
pub fn score_history(
    member: &Member,
    records: &[ScoreRecord],
    settings: ScoringSettings,
) -> Result<ScoreHistoryView> {
    let history = ScoreHistory::build(member.id, records, settings.input_policy)?;
    let scores = history
        .entries()
        .iter()
        .rev()
        .map(|entry| entry.record().clone())
        .collect();

    Ok(ScoreHistoryView {
        member: MemberInfo {
            id: member.id,
            name: member.name.clone(),
            role: member.role.clone(),
        },
        scores,
    })
}
