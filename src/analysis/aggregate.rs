use crate::analysis::rounding::{ratio_to_tenths, RoundingMode};
use crate::analysis::{prepare, MemberHistory, ScoringSettings};
use crate::error::Result;
use crate::models::member::{Member, MemberId};
use crate::models::project::Histories;
use chrono::NaiveDateTime;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotEntry {
    pub weight: u32,
    pub score: u8,
}

/// Each contributing member's latest score as of `cutoff`. Members with no
/// visible score are absent rather than counted as zero.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedSnapshot {
    pub cutoff: NaiveDateTime,
    pub entries: BTreeMap<MemberId, SnapshotEntry>,
}

impl WeightedSnapshot {
    pub fn empty(cutoff: NaiveDateTime) -> Self {
        Self {
            cutoff,
            entries: BTreeMap::new(),
        }
    }

    pub fn at(members: &[MemberHistory<'_>], cutoff: NaiveDateTime) -> Self {
        let mut snapshot = Self::empty(cutoff);
        for member in members {
            if let Some(entry) = member.history.latest_at_or_before(cutoff) {
                snapshot.insert(member.member.id, member.weight, entry.score());
            }
        }
        snapshot
    }

    pub fn insert(&mut self, member_id: MemberId, weight: u32, score: u8) {
        self.entries.insert(member_id, SnapshotEntry { weight, score });
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn weighted_sum(&self) -> u64 {
        self.entries
            .values()
            .map(|entry| u64::from(entry.score) * u64::from(entry.weight))
            .sum()
    }

    pub fn total_weight(&self) -> u64 {
        self.entries.values().map(|entry| u64::from(entry.weight)).sum()
    }

    /// Weighted average rounded to one decimal; `None` when nobody contributes.
    pub fn average(&self, rounding: RoundingMode) -> Option<f64> {
        ratio_to_tenths(self.weighted_sum(), self.total_weight(), rounding)
    }
}

/// Weighted average over every member's most recent score.
pub fn current_average(members: &[MemberHistory<'_>], rounding: RoundingMode) -> Option<f64> {
    WeightedSnapshot::at(members, NaiveDateTime::MAX).average(rounding)
}

pub fn weighted_average(members: &[Member], histories: &Histories) -> Result<Option<f64>> {
    weighted_average_with(members, histories, ScoringSettings::default())
}

pub fn weighted_average_with(
    members: &[Member],
    histories: &Histories,
    settings: ScoringSettings,
) -> Result<Option<f64>> {
    let prepared = prepare(members, histories, settings.input_policy)?;
    Ok(current_average(&prepared, settings.rounding))
}
