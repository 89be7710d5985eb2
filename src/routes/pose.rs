use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{Classify68Request, ClassifyResponse, LandmarkSet};
use crate::routes::{bad_request, AppState};

/// Configure pose classification routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/pose/classify", web::post().to(classify))
        .route("/pose/classify68", web::post().to(classify68));
}

/// Classify a landmark set
///
/// POST /api/v1/pose/classify
///
/// Request body:
/// ```json
/// {
///   "noseBridge": [{"x": 0.0, "y": 0.0}],
///   "jawOutline": [{"x": 0.0, "y": 0.0}, {"x": 0.0, "y": 0.0}]
/// }
/// ```
///
/// A rejected frame is still a 200 with `orientation: null`.
async fn classify(
    state: web::Data<AppState>,
    req: web::Json<LandmarkSet>,
) -> impl Responder {
    let classification = state.classifier.classify(&req);
    tracing::debug!("Classified landmark set: {:?}", classification);
    HttpResponse::Ok().json(ClassifyResponse::from(classification))
}

/// Classify raw 68-point detector output
///
/// POST /api/v1/pose/classify68
async fn classify68(
    state: web::Data<AppState>,
    req: web::Json<Classify68Request>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return bad_request("Validation failed", errors);
    }

    let landmarks = match LandmarkSet::from_ibug68(&req.points) {
        Ok(landmarks) => landmarks,
        Err(e) => return bad_request("Invalid landmarks", e),
    };

    let classification = state.classifier.classify(&landmarks);
    tracing::debug!("Classified 68-point landmarks: {:?}", classification);
    HttpResponse::Ok().json(ClassifyResponse::from(classification))
}
