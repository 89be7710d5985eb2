use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{Point, RankEntry};

/// Request to rank an explicit list of entries
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FormatRanksRequest {
    #[validate(nested)]
    pub entries: Vec<RankEntryInput>,
}

/// Entry as posted by a client, validated before ranking
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankEntryInput {
    #[validate(length(min = 1))]
    pub id: String,
    #[serde(alias = "point")]
    pub score: f64,
}

impl From<RankEntryInput> for RankEntry {
    fn from(input: RankEntryInput) -> Self {
        RankEntry::new(input.id, input.score)
    }
}

/// Request to submit a score to the scoreboard
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubmitScoreRequest {
    #[validate(length(min = 1))]
    #[serde(default)]
    pub id: Option<String>,
    #[serde(alias = "point")]
    pub score: f64,
}

/// Raw 68-point detector output
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Classify68Request {
    #[validate(length(min = 68))]
    pub points: Vec<Point>,
}

/// Query parameters for the standings endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StandingsQuery {
    #[serde(rename = "mineId")]
    pub mine_id: Option<String>,
}
