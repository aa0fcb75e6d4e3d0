//! Chat-session handlers.
//!
//! Chat state lives entirely in the caller's session: a partner is attached by
//! `start-session` and detached by `end-session`. Everything else validates its
//! input and answers from the scenario generator.

use axum::{Json, extract::State};
use serde::Serialize;
use serde_json::Value;

use ser_core::{ChatStatus, Partner};

use crate::error::{OrInternal, Result};
use crate::extract::{JsonPayload, display_value};
use crate::middleware::RequireUser;
use crate::models::{ChatStats, chat_state};
use crate::state::AppState;

/// Response carrying only a human-readable message.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    fn new(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            message: message.into(),
        })
    }
}

// ============================================================================
// Session lifecycle
// ============================================================================

/// Response from starting a chat session.
#[derive(Debug, Serialize)]
pub struct StartSessionResponse {
    pub status: ChatStatus,
    pub message: &'static str,
    pub partner: Partner,
}

/// Match the caller with a partner.
///
/// POST /api/chat/start-session
///
/// # Errors
///
/// Returns an error if the gate fails or the session cannot be written.
pub async fn start_session(
    State(state): State<AppState>,
    RequireUser(ctx): RequireUser,
) -> Result<Json<StartSessionResponse>> {
    let partner = state.scenario().match_partner();

    chat_state::store(&ctx.session, &partner)
        .await
        .or_internal("Failed to start chat session")?;

    tracing::info!(
        user_id = %ctx.user.id,
        partner_id = %partner.id,
        "Chat partner matched"
    );

    Ok(Json(StartSessionResponse {
        status: ChatStatus::Connected,
        message: "Partner found!",
        partner,
    }))
}

/// Response from ending a chat session.
#[derive(Debug, Serialize)]
pub struct EndSessionResponse {
    pub status: ChatStatus,
    pub message: &'static str,
}

/// Detach the current partner, if any.
///
/// POST /api/chat/end-session
///
/// # Errors
///
/// Returns an error if the gate fails or the session cannot be written.
pub async fn end_session(RequireUser(ctx): RequireUser) -> Result<Json<EndSessionResponse>> {
    chat_state::clear(&ctx.session)
        .await
        .or_internal("Failed to end chat session")?;

    Ok(Json(EndSessionResponse {
        status: ChatStatus::Ended,
        message: "Chat session ended successfully",
    }))
}

/// Response describing the current chat state.
#[derive(Debug, Serialize)]
pub struct SessionStatusResponse {
    pub status: ChatStatus,
    pub partner: Option<Partner>,
}

/// Report whether a partner is attached.
///
/// GET /api/chat/session-status
///
/// # Errors
///
/// Returns an error if the gate fails or the stored chat state is unreadable.
pub async fn session_status(RequireUser(ctx): RequireUser) -> Result<Json<SessionStatusResponse>> {
    let state = chat_state::load(&ctx.session)
        .await
        .or_internal("Failed to get session status")?;

    let response = match state {
        chat_state::ChatState::Idle => SessionStatusResponse {
            status: ChatStatus::None,
            partner: None,
        },
        chat_state::ChatState::Connected(partner) => SessionStatusResponse {
            status: ChatStatus::Connected,
            partner: Some(partner),
        },
    };

    Ok(Json(response))
}

/// Random statistics about the caller's chats.
///
/// GET /api/chat/stats
///
/// # Errors
///
/// Returns an error if the gate fails.
pub async fn stats(
    State(state): State<AppState>,
    RequireUser(_ctx): RequireUser,
) -> Result<Json<ChatStats>> {
    Ok(Json(state.scenario().chat_stats()))
}

// ============================================================================
// Messaging
// ============================================================================

/// Response from sending a message.
#[derive(Debug, Serialize)]
pub struct SendMessageResponse {
    pub message: &'static str,
    pub message_id: String,
}

/// Send a message to the current partner.
///
/// POST /api/chat/send-message
///
/// # Errors
///
/// Returns 400 if the body has no `message`.
pub async fn send_message(
    State(state): State<AppState>,
    RequireUser(ctx): RequireUser,
    payload: JsonPayload,
) -> Result<Json<SendMessageResponse>> {
    payload.require_keys(&["message"], "Message is required")?;

    let message_id = state.scenario().message_id();
    tracing::debug!(user_id = %ctx.user.id, %message_id, "Message accepted");

    Ok(Json(SendMessageResponse {
        message: "Message sent successfully",
        message_id,
    }))
}

/// Messages in the current chat.
#[derive(Debug, Serialize)]
pub struct MessagesResponse {
    pub messages: Vec<Value>,
}

/// List messages in the current chat.
///
/// GET /api/chat/get-messages
///
/// # Errors
///
/// Returns an error if the gate fails.
pub async fn get_messages(
    State(state): State<AppState>,
    RequireUser(_ctx): RequireUser,
) -> Result<Json<MessagesResponse>> {
    Ok(Json(MessagesResponse {
        messages: state.scenario().messages(),
    }))
}

// ============================================================================
// Reconnect requests
// ============================================================================

/// Response from creating a reconnect request.
#[derive(Debug, Serialize)]
pub struct ReconnectRequestResponse {
    pub message: &'static str,
    pub request_id: String,
}

/// Ask a previous partner to chat again.
///
/// POST /api/chat/request-reconnect
///
/// # Errors
///
/// Returns 400 if the body has no `target_user_id`.
pub async fn request_reconnect(
    State(state): State<AppState>,
    RequireUser(_ctx): RequireUser,
    payload: JsonPayload,
) -> Result<Json<ReconnectRequestResponse>> {
    payload.require_keys(&["target_user_id"], "Target user ID is required")?;

    Ok(Json(ReconnectRequestResponse {
        message: "Reconnect request sent successfully",
        request_id: state.scenario().reconnect_request_id(),
    }))
}

/// Accept or decline a reconnect request.
///
/// POST /api/chat/respond-reconnect
///
/// # Errors
///
/// Returns 400 if the body lacks `request_id` or `response`.
pub async fn respond_reconnect(
    RequireUser(_ctx): RequireUser,
    payload: JsonPayload,
) -> Result<Json<MessageResponse>> {
    let body = payload.require_keys(
        &["request_id", "response"],
        "Request ID and response are required",
    )?;

    let response = body.get("response").map(display_value).unwrap_or_default();

    Ok(MessageResponse::new(format!(
        "Reconnect request {response} successfully"
    )))
}

/// Pending reconnect requests.
#[derive(Debug, Serialize)]
pub struct ReconnectRequestsResponse {
    pub reconnect_requests: Vec<Value>,
}

/// List reconnect requests addressed to the caller.
///
/// GET /api/chat/get-reconnect-requests
///
/// # Errors
///
/// Returns an error if the gate fails.
pub async fn get_reconnect_requests(
    State(state): State<AppState>,
    RequireUser(_ctx): RequireUser,
) -> Result<Json<ReconnectRequestsResponse>> {
    Ok(Json(ReconnectRequestsResponse {
        reconnect_requests: state.scenario().reconnect_requests(),
    }))
}

/// Users met before.
#[derive(Debug, Serialize)]
pub struct MetUsersResponse {
    pub met_users: Vec<Value>,
}

/// List users the caller has chatted with.
///
/// GET /api/chat/met-users
///
/// # Errors
///
/// Returns an error if the gate fails.
pub async fn met_users(
    State(state): State<AppState>,
    RequireUser(_ctx): RequireUser,
) -> Result<Json<MetUsersResponse>> {
    Ok(Json(MetUsersResponse {
        met_users: state.scenario().met_users(),
    }))
}

/// Response from starting a direct chat.
#[derive(Debug, Serialize)]
pub struct DirectChatResponse {
    pub success: bool,
    pub message: &'static str,
    pub partner: Partner,
}

/// Open a chat with a specific user.
///
/// POST /api/chat/start-direct-chat
///
/// # Errors
///
/// Returns 400 if the body has no `target_user_id`.
pub async fn start_direct_chat(
    State(state): State<AppState>,
    RequireUser(_ctx): RequireUser,
    payload: JsonPayload,
) -> Result<Json<DirectChatResponse>> {
    let body = payload.require_keys(&["target_user_id"], "Target user ID is required")?;

    let target = body
        .get("target_user_id")
        .map(display_value)
        .unwrap_or_default();

    Ok(Json(DirectChatResponse {
        success: true,
        message: "Direct chat started successfully",
        partner: state.scenario().direct_partner(target),
    }))
}

// ============================================================================
// Feedback
// ============================================================================

/// File a report against the current partner.
///
/// POST /api/chat/report
///
/// # Errors
///
/// Returns 400 if the body is absent.
pub async fn report(
    RequireUser(ctx): RequireUser,
    payload: JsonPayload,
) -> Result<Json<MessageResponse>> {
    let body = payload.require("No data provided")?;
    tracing::info!(user_id = %ctx.user.id, fields = body.len(), "User report submitted");

    Ok(MessageResponse::new("Report submitted successfully"))
}

/// Report a problem with the service.
///
/// POST /api/chat/report-problem
///
/// # Errors
///
/// Returns 400 if the body is absent.
pub async fn report_problem(
    RequireUser(ctx): RequireUser,
    payload: JsonPayload,
) -> Result<Json<MessageResponse>> {
    payload.require("Problem data is required")?;
    tracing::info!(user_id = %ctx.user.id, "Problem report submitted");

    Ok(MessageResponse::new("Problem report submitted successfully"))
}

/// Send a message to the operators.
///
/// POST /api/chat/contact-us
///
/// # Errors
///
/// Returns 400 if the body is absent.
pub async fn contact_us(
    RequireUser(ctx): RequireUser,
    payload: JsonPayload,
) -> Result<Json<MessageResponse>> {
    payload.require("Contact data is required")?;
    tracing::info!(user_id = %ctx.user.id, "Contact message received");

    Ok(MessageResponse::new("Contact message sent successfully"))
}
