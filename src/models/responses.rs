use serde::{Deserialize, Serialize};
use crate::models::domain::{Classification, FormattedRankEntry, Orientation, Rejection, Trophy};

/// Response for the classify endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyResponse {
    pub orientation: Option<Orientation>,
    pub rejection: Option<Rejection>,
}

impl From<Classification> for ClassifyResponse {
    fn from(classification: Classification) -> Self {
        Self {
            orientation: classification.orientation(),
            rejection: classification.rejection(),
        }
    }
}

/// One player's ranked entry with its podium trophy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankStanding {
    #[serde(flatten)]
    pub entry: FormattedRankEntry,
    pub trophy: Option<Trophy>,
}

impl RankStanding {
    pub fn new(entry: FormattedRankEntry, podium_tiers: usize) -> Self {
        let trophy = entry.trophy(podium_tiers);
        Self { entry, trophy }
    }
}

/// Response carrying a full ranking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RanksResponse {
    pub ranks: Vec<FormattedRankEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mine: Option<RankStanding>,
}

/// Response for a score submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitScoreResponse {
    pub id: String,
    pub standing: Option<RankStanding>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
