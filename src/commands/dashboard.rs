use crate::analysis::aggregate::current_average;
use crate::analysis::timeline::timeline_from;
use crate::analysis::{prepare, MemberHistory, ScoringSettings};
use crate::error::Result;
use crate::models::dashboard::{Dashboard, MemberSummary};
use crate::models::project::ProjectScores;

/// Loads scoring settings from `data_dir`, then assembles the dashboard.
pub fn build_dashboard(data_dir: &str, input: &ProjectScores) -> Result<Dashboard> {
    let settings = crate::commands::settings::load_effective_scoring_settings(data_dir)?;
    get_dashboard(input, settings)
}

pub fn get_dashboard(input: &ProjectScores, settings: ScoringSettings) -> Result<Dashboard> {
    let prepared = prepare(&input.members, &input.histories, settings.input_policy)?;

    let members_summary: Vec<MemberSummary> = prepared.iter().map(summarize_member).collect();
    let weighted_average = current_average(&prepared, settings.rounding);
    let timeline = timeline_from(&prepared, settings.rounding);

    log::debug!(
        "dashboard for {} members: average={weighted_average:?}, {} timeline points",
        members_summary.len(),
        timeline.len()
    );

    Ok(Dashboard {
        project: input.project.clone(),
        weighted_average,
        last_updated: last_updated(&prepared),
        members_summary,
        timeline,
    })
}

fn summarize_member(entry: &MemberHistory<'_>) -> MemberSummary {
    let latest = entry.history.latest();

    MemberSummary {
        id: entry.member.id,
        name: entry.member.name.clone(),
        role: entry.member.role.clone(),
        weight: entry.weight,
        // the score that went into the aggregate, after input policy
        latest_score: latest.map(|latest| i64::from(latest.score())),
        latest_comment: latest.and_then(|latest| latest.record().comment.clone()),
        latest_score_at: latest.map(|latest| latest.record().created_at.clone()),
    }
}

/// Timestamp of the most recent latest-score across members, as recorded.
fn last_updated(prepared: &[MemberHistory<'_>]) -> Option<String> {
    prepared
        .iter()
        .filter_map(|entry| entry.history.latest())
        .max_by(|a, b| a.recorded_at().cmp(&b.recorded_at()))
        .map(|latest| latest.record().created_at.clone())
}
