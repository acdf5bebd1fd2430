use crate::analysis::InputPolicy;
use crate::error::{Result, ScoringError};
use crate::models::member::MemberId;
use crate::models::score::{ScoreRecord, MAX_SCORE, MIN_SCORE};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

const NAIVE_TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parses an ISO-8601 timestamp into the wall-clock time it was written with.
/// An offset is accepted but not applied, so the calendar date stays the one in
/// the string. All records of a project are expected to share one convention.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(with_offset.naive_local());
    }

    NAIVE_TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
}

/// Last representable instant of `date`; every record dated `date` is visible at it.
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_nano_opt(23, 59, 59, 999_999_999)
        .unwrap_or(NaiveDateTime::MAX)
}

#[derive(Debug, Clone)]
pub struct HistoryEntry<'a> {
    recorded_at: NaiveDateTime,
    sequence: usize,
    score: u8,
    record: &'a ScoreRecord,
}

impl<'a> HistoryEntry<'a> {
    pub fn record(&self) -> &'a ScoreRecord {
        self.record
    }

    pub fn recorded_at(&self) -> NaiveDateTime {
        self.recorded_at
    }

    /// Insertion position within the member's history.
    pub fn sequence(&self) -> usize {
        self.sequence
    }

    /// Score after input policy has been applied; always within 0..=100.
    pub fn score(&self) -> u8 {
        self.score
    }

    fn is_visible_at(&self, cutoff: NaiveDateTime) -> bool {
        self.recorded_at <= cutoff
    }
}

/// One member's score history ordered by (timestamp, insertion sequence).
#[derive(Debug, Clone, Default)]
pub struct ScoreHistory<'a> {
    entries: Vec<HistoryEntry<'a>>,
}

impl<'a> ScoreHistory<'a> {
    pub fn build(member_id: MemberId, records: &'a [ScoreRecord], policy: InputPolicy) -> Result<Self> {
        let mut entries = Vec::with_capacity(records.len());

        for (sequence, record) in records.iter().enumerate() {
            let recorded_at = parse_timestamp(&record.created_at).ok_or_else(|| {
                ScoringError::InvalidTimestamp {
                    record_id: record.id,
                    value: record.created_at.clone(),
                }
            })?;

            entries.push(HistoryEntry {
                recorded_at,
                sequence,
                score: effective_score(member_id, record, policy)?,
                record,
            });
        }

        entries.sort_by(|a, b| {
            a.recorded_at
                .cmp(&b.recorded_at)
                .then(a.sequence.cmp(&b.sequence))
        });

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[HistoryEntry<'a>] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Latest record with timestamp <= `cutoff`; equal timestamps resolve to
    /// the one inserted last.
    pub fn latest_at_or_before(&self, cutoff: NaiveDateTime) -> Option<&HistoryEntry<'a>> {
        let visible = self
            .entries
            .partition_point(|entry| entry.is_visible_at(cutoff));
        visible.checked_sub(1).and_then(|index| self.entries.get(index))
    }

    pub fn latest(&self) -> Option<&HistoryEntry<'a>> {
        self.latest_at_or_before(NaiveDateTime::MAX)
    }

    pub fn cursor(&self) -> HistoryCursor<'_, 'a> {
        HistoryCursor {
            history: self,
            visible: 0,
        }
    }
}

/// Forward-only view over a history for ascending cutoffs.
#[derive(Debug)]
pub struct HistoryCursor<'h, 'a> {
    history: &'h ScoreHistory<'a>,
    visible: usize,
}

impl<'h, 'a> HistoryCursor<'h, 'a> {
    /// Same result as `latest_at_or_before(cutoff)`, provided cutoffs never decrease.
    pub fn advance_to(&mut self, cutoff: NaiveDateTime) -> Option<&'h HistoryEntry<'a>> {
        let entries = &self.history.entries;
        while entries
            .get(self.visible)
            .is_some_and(|entry| entry.is_visible_at(cutoff))
        {
            self.visible += 1;
        }

        self.visible.checked_sub(1).and_then(|index| entries.get(index))
    }
}

fn effective_score(member_id: MemberId, record: &ScoreRecord, policy: InputPolicy) -> Result<u8> {
    if !record.is_in_range() {
        match policy {
            InputPolicy::Reject => {
                return Err(ScoringError::InvalidScore {
                    member_id,
                    record_id: record.id,
                    score: record.score,
                });
            }
            InputPolicy::Clamp => {
                log::warn!(
                    "clamping out-of-range score {} on record {} of member {member_id}",
                    record.score,
                    record.id
                );
            }
        }
    }

    Ok(record.score.clamp(MIN_SCORE, MAX_SCORE) as u8)
}
