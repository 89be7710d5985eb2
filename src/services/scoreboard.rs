use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::RwLock;

use crate::core::ranking::{RankEngine, RankError};
use crate::models::{FormattedRankEntry, RankEntry};

/// Errors that can occur when recording scores
#[derive(Debug, Error, PartialEq)]
pub enum ScoreBoardError {
    #[error("Scoreboard is full ({0} entries)")]
    Full(usize),
}

#[derive(Debug, Default)]
struct Board {
    entries: Vec<RankEntry>,
    // id -> index into `entries`
    slots: HashMap<String, usize>,
}

/// In-memory score snapshot
///
/// Entries keep the slot of their first submission, so ties rank in the
/// order players first posted a score. Holds at most `max_entries` ids.
#[derive(Debug, Clone)]
pub struct ScoreBoard {
    board: Arc<RwLock<Board>>,
    engine: RankEngine,
    max_entries: usize,
}

impl ScoreBoard {
    pub fn new(engine: RankEngine, max_entries: usize) -> Self {
        Self {
            board: Arc::new(RwLock::new(Board::default())),
            engine,
            max_entries,
        }
    }

    pub fn engine(&self) -> &RankEngine {
        &self.engine
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Record a score, generating an id when none is given
    ///
    /// Re-submitting an id replaces its score in place. New ids are refused
    /// once the board holds `max_entries`.
    pub async fn submit(&self, id: Option<String>, score: f64) -> Result<String, ScoreBoardError> {
        let id = id.unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

        let mut board = self.board.write().await;
        if let Some(&slot) = board.slots.get(&id) {
            let existing = &mut board.entries[slot];
            tracing::debug!("Updating score for {}: {} -> {}", id, existing.score, score);
            existing.score = score;
            return Ok(id);
        }

        if board.entries.len() >= self.max_entries {
            tracing::warn!("Refusing score for {}: board full at {} entries", id, self.max_entries);
            return Err(ScoreBoardError::Full(self.max_entries));
        }

        tracing::debug!("Recording new score for {}: {}", id, score);
        let slot = board.entries.len();
        board.entries.push(RankEntry::new(id.clone(), score));
        board.slots.insert(id.clone(), slot);

        Ok(id)
    }

    /// Copy of the current entries in submission order
    pub async fn snapshot(&self) -> Vec<RankEntry> {
        self.board.read().await.entries.clone()
    }

    /// Rank the current snapshot
    pub async fn standings(&self) -> Result<Vec<FormattedRankEntry>, RankError> {
        let snapshot = self.snapshot().await;
        self.engine.rank(snapshot)
    }

    pub async fn len(&self) -> usize {
        self.board.read().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.board.read().await.entries.is_empty()
    }

    pub async fn clear(&self) {
        let mut board = self.board.write().await;
        board.entries.clear();
        board.slots.clear();
    }
}

impl Default for ScoreBoard {
    fn default() -> Self {
        Self::new(RankEngine::default(), 10_000)
    }
}
