use crate::errors::ApiError;
use crate::models::MatchQuery;
use crate::routes::AppState;
use actix_web::{web, HttpRequest, HttpResponse};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/matches/{user_id}", web::get().to(get_matches));
}

/// Get potential matches for a user
///
/// GET /api/matches/{user_id}?min_score=&limit=
///
/// Fails with NotFound if the caller has no stored profile. The response is
/// the ordered list of scored matches, best first, with sensitive candidate
/// fields redacted.
async fn get_matches(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
    query: web::Query<MatchQuery>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();
    state.guard(&req, &user_id)?;

    let min_score = query.min_score.unwrap_or(state.matching.default_min_score);
    // Cap limit to keep a single request from walking the whole store output
    let limit = query
        .limit
        .unwrap_or(state.matching.default_limit)
        .min(state.matching.max_limit);

    let user_profile = state.profiles.get(&user_id)?;
    let candidates = state.profiles.all();

    let result = state
        .matcher
        .find_matches(&user_id, &user_profile, candidates, min_score, limit);

    tracing::info!(
        "Returning {} matches for user {} (from {} candidates)",
        result.matches.len(),
        user_id,
        result.total_candidates
    );

    Ok(HttpResponse::Ok().json(result.matches))
}
