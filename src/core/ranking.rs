use std::cmp::Ordering;
use std::collections::HashSet;

use thiserror::Error;

use crate::models::{FormattedRankEntry, RankEntry};

/// Errors that can occur while ranking
#[derive(Debug, Error, PartialEq)]
pub enum RankError {
    #[error("Duplicate entry id: {0}")]
    DuplicateId(String),
}

/// Joint-rank orderer
///
/// Sorts entries by descending score and annotates each with
/// - `rank_position`: index of the first entry holding the same score
/// - `joint_group`: ordinal of the score among distinct scores
///
/// Equal scores keep their input order. Nothing is cached between calls.
#[derive(Debug, Clone, Copy)]
pub struct RankEngine {
    podium_tiers: usize,
}

impl RankEngine {
    pub fn new(podium_tiers: usize) -> Self {
        Self { podium_tiers }
    }

    pub fn podium_tiers(&self) -> usize {
        self.podium_tiers
    }

    /// Rank a snapshot of entries
    ///
    /// # Errors
    /// `RankError::DuplicateId` when two entries share an id.
    pub fn rank(&self, entries: Vec<RankEntry>) -> Result<Vec<FormattedRankEntry>, RankError> {
        rank(entries)
    }

    /// Entries whose joint group earns a trophy
    pub fn podium<'a>(&self, ranked: &'a [FormattedRankEntry]) -> &'a [FormattedRankEntry] {
        let end = ranked
            .iter()
            .position(|entry| entry.joint_group >= self.podium_tiers)
            .unwrap_or(ranked.len());
        &ranked[..end]
    }
}

impl Default for RankEngine {
    fn default() -> Self {
        Self::new(3)
    }
}

/// Rank entries by descending score with joint-rank annotations
pub fn rank(entries: Vec<RankEntry>) -> Result<Vec<FormattedRankEntry>, RankError> {
    ensure_unique_ids(&entries)?;

    let mut sorted = entries;
    // Vec::sort_by is stable, which keeps tied entries in input order
    sorted.sort_by(|a, b| compare_scores(b.score, a.score));

    let mut ranked: Vec<FormattedRankEntry> = Vec::with_capacity(sorted.len());
    let mut joint_group = 0;
    let mut rank_position = 0;

    for (index, entry) in sorted.into_iter().enumerate() {
        if let Some(previous) = ranked.last().map(|last| last.score) {
            if compare_scores(previous, entry.score) != Ordering::Equal {
                joint_group += 1;
                rank_position = index;
            }
        }

        ranked.push(FormattedRankEntry {
            id: entry.id,
            score: entry.score,
            rank_position,
            joint_group,
        });
    }

    tracing::trace!(
        "Ranked {} entries into {} joint groups",
        ranked.len(),
        ranked.last().map_or(0, |last| last.joint_group + 1)
    );

    Ok(ranked)
}

/// Find an entry by id in a ranked list
pub fn locate<'a>(ranked: &'a [FormattedRankEntry], id: &str) -> Option<&'a FormattedRankEntry> {
    ranked.iter().find(|entry| entry.id == id)
}

fn ensure_unique_ids(entries: &[RankEntry]) -> Result<(), RankError> {
    let mut seen = HashSet::with_capacity(entries.len());
    for entry in entries {
        if !seen.insert(entry.id.as_str()) {
            return Err(RankError::DuplicateId(entry.id.clone()));
        }
    }
    Ok(())
}

/// Total order over scores that treats -0.0 and 0.0 as equal
///
/// NaN sorts above every number; it only has to terminate, not mean anything.
#[inline]
fn compare_scores(a: f64, b: f64) -> Ordering {
    normalize_zero(a).total_cmp(&normalize_zero(b))
}

#[inline]
fn normalize_zero(score: f64) -> f64 {
    if score == 0.0 {
        0.0
    } else {
        score
    }
}
