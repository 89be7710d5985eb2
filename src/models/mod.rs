// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Classification, FormattedRankEntry, LandmarkError, LandmarkSet, Orientation, Point,
    PoseThresholds, RankEntry, Rejection, Trophy, IBUG68_LEN,
};
pub use requests::{Classify68Request, FormatRanksRequest, RankEntryInput, StandingsQuery, SubmitScoreRequest};
pub use responses::{
    ClassifyResponse, ErrorResponse, HealthResponse, RankStanding, RanksResponse, SubmitScoreResponse,
};
