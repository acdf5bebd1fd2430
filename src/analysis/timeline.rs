use crate::analysis::aggregate::WeightedSnapshot;
use crate::analysis::history::end_of_day;
use crate::analysis::rounding::RoundingMode;
use crate::analysis::{prepare, MemberHistory, ScoringSettings};
use crate::error::Result;
use crate::models::dashboard::TimelinePoint;
use crate::models::member::Member;
use crate::models::project::Histories;
use chrono::NaiveDate;
use std::collections::BTreeSet;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Distinct calendar dates of every record, ascending.
pub fn score_dates(members: &[MemberHistory<'_>]) -> BTreeSet<NaiveDate> {
    members
        .iter()
        .flat_map(|member| member.history.entries())
        .map(|entry| entry.recorded_at().date())
        .collect()
}

/// One point per date on which any score was recorded, using each member's
/// latest score as of the end of that date. Cursors only move forward, so
/// each history is walked once.
pub fn timeline_from(members: &[MemberHistory<'_>], rounding: RoundingMode) -> Vec<TimelinePoint> {
    let dates = score_dates(members);
    let mut cursors: Vec<_> = members
        .iter()
        .map(|member| (member, member.history.cursor()))
        .collect();
    let mut points = Vec::with_capacity(dates.len());

    for date in dates {
        let cutoff = end_of_day(date);
        let mut snapshot = WeightedSnapshot::empty(cutoff);

        for (member, cursor) in cursors.iter_mut() {
            if let Some(entry) = cursor.advance_to(cutoff) {
                snapshot.insert(member.member.id, member.weight, entry.score());
            }
        }

        if snapshot.is_empty() {
            log::debug!("no visible scores on {date}; skipping timeline point");
            continue;
        }

        if let Some(weighted_average) = snapshot.average(rounding) {
            points.push(TimelinePoint {
                date: date.format(DATE_FORMAT).to_string(),
                weighted_average,
            });
        }
    }

    points
}

pub fn build_timeline(members: &[Member], histories: &Histories) -> Result<Vec<TimelinePoint>> {
    build_timeline_with(members, histories, ScoringSettings::default())
}

pub fn build_timeline_with(
    members: &[Member],
    histories: &Histories,
    settings: ScoringSettings,
) -> Result<Vec<TimelinePoint>> {
    let prepared = prepare(members, histories, settings.input_policy)?;
    Ok(timeline_from(&prepared, settings.rounding))
}
