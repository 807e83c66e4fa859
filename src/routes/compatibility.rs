use actix_web::{web, HttpResponse};

use crate::core::Matcher;
use crate::models::{CompatibilityBreakdown, CompatibilityRequest, CompatibilityResponse};

/// Configure scoring routes
///
/// Needs only the shared `Matcher`, no storage.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/compatibility", web::post().to(score_profiles));
}

/// Score two profiles
///
/// POST /api/v1/compatibility
///
/// Request body:
/// ```json
/// {
///   "profileA": { "age": 25, "location": "Boston", "tags": ["yoga"] },
///   "profileB": { "age": 27, "location": "South Boston" }
/// }
/// ```
///
/// A missing profile scores 0 with an empty breakdown.
async fn score_profiles(
    matcher: web::Data<Matcher>,
    req: web::Json<CompatibilityRequest>,
) -> HttpResponse {
    let req = req.into_inner();

    let breakdown = match (req.profile_a.as_ref(), req.profile_b.as_ref()) {
        (Some(a), Some(b)) => matcher.engine().breakdown(a, b),
        _ => CompatibilityBreakdown::default(),
    };

    tracing::debug!("Compatibility requested: score {}", breakdown.score);

    HttpResponse::Ok().json(CompatibilityResponse {
        score: breakdown.score,
        breakdown,
    })
}
