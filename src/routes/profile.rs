use crate::errors::ApiError;
use crate::models::{DeleteResponse, UserProfile};
use crate::routes::AppState;
use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/profile/{user_id}")
            .route(web::get().to(get_profile))
            .route(web::put().to(put_profile))
            .route(web::delete().to(delete_profile)),
    );
}

/// Get a user profile by ID
///
/// GET /api/profile/{user_id}
async fn get_profile(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();
    state.guard(&req, &user_id)?;

    let profile = state.profiles.get(&user_id)?;
    Ok(HttpResponse::Ok().json(profile))
}

/// Create or replace a user profile
///
/// PUT /api/profile/{user_id}
///
/// Full overwrite on every save; there is no partial patch. The body is
/// validated (age range, enum option sets) before it reaches the store.
async fn put_profile(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Json<UserProfile>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();
    state.guard(&req, &user_id)?;

    let profile = body.into_inner();
    profile.validate()?;

    state.profiles.put(&user_id, profile.clone());
    tracing::info!("Profile saved for user {}", user_id);

    Ok(HttpResponse::Ok().json(profile))
}

/// Delete a user profile
///
/// DELETE /api/profile/{user_id}
async fn delete_profile(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();
    state.guard(&req, &user_id)?;

    state.profiles.delete(&user_id)?;
    tracing::info!("Profile deleted for user {}", user_id);

    Ok(HttpResponse::Ok().json(DeleteResponse {
        message: "Profile deleted successfully".to_string(),
    }))
}
