use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::ranking::{locate, RankError};
use crate::models::{
    ErrorResponse, FormatRanksRequest, RankEntry, RankStanding, RanksResponse, StandingsQuery,
    SubmitScoreRequest, SubmitScoreResponse,
};
use crate::routes::{bad_request, AppState};
use crate::services::ScoreBoardError;

/// Configure ranking routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/ranks", web::get().to(get_standings))
        .route("/ranks", web::post().to(submit_score))
        .route("/ranks/format", web::post().to(format_ranks));
}

/// Rank an explicit list of entries
///
/// POST /api/v1/ranks/format
///
/// Request body:
/// ```json
/// {
///   "entries": [{"id": "string", "score": 10}]
/// }
/// ```
async fn format_ranks(
    state: web::Data<AppState>,
    req: web::Json<FormatRanksRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for format_ranks request: {:?}", errors);
        return bad_request("Validation failed", errors);
    }

    let entries: Vec<RankEntry> = req.into_inner().entries.into_iter().map(Into::into).collect();
    let count = entries.len();

    match state.scoreboard.engine().rank(entries) {
        Ok(ranks) => {
            tracing::info!("Formatted {} rank entries", count);
            HttpResponse::Ok().json(RanksResponse { ranks, mine: None })
        }
        Err(e) => rank_error(e),
    }
}

/// Current scoreboard standings
///
/// GET /api/v1/ranks?mineId={id}
async fn get_standings(
    state: web::Data<AppState>,
    query: web::Query<StandingsQuery>,
) -> impl Responder {
    let podium_tiers = state.scoreboard.engine().podium_tiers();

    match state.scoreboard.standings().await {
        Ok(ranks) => {
            let mine = query
                .mine_id
                .as_deref()
                .and_then(|id| locate(&ranks, id))
                .map(|entry| RankStanding::new(entry.clone(), podium_tiers));
            HttpResponse::Ok().json(RanksResponse { ranks, mine })
        }
        Err(e) => rank_error(e),
    }
}

/// Submit a score to the scoreboard
///
/// POST /api/v1/ranks
///
/// Request body:
/// ```json
/// {
///   "id": "optional string",
///   "score": 300
/// }
/// ```
async fn submit_score(
    state: web::Data<AppState>,
    req: web::Json<SubmitScoreRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return bad_request("Validation failed", errors);
    }

    let req = req.into_inner();
    let id = match state.scoreboard.submit(req.id, req.score).await {
        Ok(id) => id,
        Err(e @ ScoreBoardError::Full(_)) => return bad_request("Scoreboard full", e),
    };
    let podium_tiers = state.scoreboard.engine().podium_tiers();

    match state.scoreboard.standings().await {
        Ok(ranks) => {
            let standing = locate(&ranks, &id)
                .map(|entry| RankStanding::new(entry.clone(), podium_tiers));
            tracing::info!(
                "Recorded score {} for {} ({} entries on the board)",
                req.score,
                id,
                ranks.len()
            );
            HttpResponse::Ok().json(SubmitScoreResponse { id, standing })
        }
        Err(e) => rank_error(e),
    }
}

fn rank_error(err: RankError) -> HttpResponse {
    match err {
        RankError::DuplicateId(_) => HttpResponse::BadRequest().json(ErrorResponse {
            error: "Invalid input".to_string(),
            message: err.to_string(),
            status_code: 400,
        }),
    }
}
