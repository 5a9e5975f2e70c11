use crate::errors::ApiError;
use crate::models::{ChatRequest, ChatResponse};
use crate::routes::AppState;
use crate::services::{prompts::FALLBACK_MESSAGE, ChatMode};
use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/chat/advisor", web::post().to(chat_with_advisor))
        .route("/chat/partner", web::post().to(chat_with_partner));
}

/// Chat with the dating advisor persona
///
/// POST /api/chat/advisor
async fn chat_with_advisor(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<ChatRequest>,
) -> Result<HttpResponse, ApiError> {
    chat(state, req, body.into_inner(), ChatMode::Advisor).await
}

/// Chat with the simulated partner persona
///
/// POST /api/chat/partner
async fn chat_with_partner(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<ChatRequest>,
) -> Result<HttpResponse, ApiError> {
    chat(state, req, body.into_inner(), ChatMode::Partner).await
}

/// Shared chat flow: append the user turn, call the gateway with the mode's
/// system prompt, and append the reply. A gateway failure never propagates:
/// the static fallback is appended as the assistant turn instead, so the
/// transcript always gains a paired response.
async fn chat(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: ChatRequest,
    mode: ChatMode,
) -> Result<HttpResponse, ApiError> {
    body.validate()?;
    state.guard(&req, &body.user_id)?;

    state.sessions.append_user(&body.user_id, &body.message);
    let transcript = state.sessions.transcript(&body.user_id);

    let reply = match state.groq.generate(mode.system_prompt(), &transcript).await {
        Ok(text) => text,
        Err(e) => {
            tracing::error!("Completion failed for user {}: {}", body.user_id, e);
            FALLBACK_MESSAGE.to_string()
        }
    };

    state.sessions.append_assistant(&body.user_id, &reply);

    Ok(HttpResponse::Ok().json(ChatResponse {
        message: reply,
        chat_history: state.sessions.transcript(&body.user_id),
    }))
}
