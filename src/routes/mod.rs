// Route exports
pub mod chat;
pub mod matches;
pub mod profile;

use crate::auth;
use crate::config::{MatchingSettings, SecuritySettings};
use crate::core::Matcher;
use crate::errors::ApiError;
use crate::models::{HealthResponse, TokenRequest, TokenResponse};
use crate::rate_limit::RateLimiter;
use crate::services::{GroqClient, ProfileStore, SessionStore};
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub profiles: Arc<dyn ProfileStore>,
    pub sessions: Arc<dyn SessionStore>,
    pub groq: Arc<GroqClient>,
    pub matcher: Matcher,
    pub limiter: Arc<RateLimiter>,
    pub security: SecuritySettings,
    pub matching: MatchingSettings,
    pub environment: String,
}

impl AppState {
    /// Common checks for authenticated routes: rate limit first, then the
    /// bearer subject must equal the resource's user id.
    pub fn guard(&self, req: &HttpRequest, user_id: &str) -> Result<(), ApiError> {
        self.limiter.check(&client_key(req))?;
        auth::authorize_user(req, &self.security, user_id)
    }
}

fn client_key(req: &HttpRequest) -> String {
    req.peer_addr()
        .map(|addr| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check)).service(
        web::scope("/api")
            .route("/auth/token", web::post().to(issue_token))
            .configure(profile::configure)
            .configure(chat::configure)
            .configure(matches::configure),
    );
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: state.environment.clone(),
    })
}

/// Development token minting endpoint
///
/// POST /api/auth/token
///
/// Issues a bearer token whose subject is the supplied user id. Rate
/// limited but unauthenticated; real identity verification is out of scope.
async fn issue_token(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<TokenRequest>,
) -> Result<HttpResponse, ApiError> {
    state.limiter.check(&client_key(&req))?;
    body.validate()?;

    let token = auth::create_access_token(&body.user_id, &state.security)?;
    Ok(HttpResponse::Ok().json(TokenResponse::bearer(token)))
}
