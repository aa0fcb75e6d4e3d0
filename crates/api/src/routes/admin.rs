//! Admin moderation handlers.
//!
//! Every handler goes through [`RequireAdmin`]. Moderation has no backend yet:
//! listings come from the scenario generator and actions echo their input.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use serde_json::{Map, Value, json};

use crate::error::Result;
use crate::extract::JsonPayload;
use crate::middleware::RequireAdmin;
use crate::models::{ManagedUser, Report, SystemSettings};
use crate::routes::chat::MessageResponse;
use crate::state::AppState;

/// Reason recorded when a ban request does not give one.
pub const DEFAULT_BAN_REASON: &str = "No reason provided";

/// Users listing.
#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub users: Vec<ManagedUser>,
}

/// List users.
///
/// GET /api/admin/users
///
/// # Errors
///
/// Returns an error if the admin gate fails.
pub async fn get_users(
    State(state): State<AppState>,
    RequireAdmin(_ctx): RequireAdmin,
) -> Result<Json<UsersResponse>> {
    Ok(Json(UsersResponse {
        users: state.scenario().managed_users(),
    }))
}

/// Response from banning a user.
#[derive(Debug, Serialize)]
pub struct BanResponse {
    pub message: String,
    pub reason: Value,
}

/// Ban a user. The body and its `reason` are optional.
///
/// POST /api/admin/users/{user_id}/ban
///
/// # Errors
///
/// Returns an error if the admin gate fails.
pub async fn ban_user(
    RequireAdmin(ctx): RequireAdmin,
    Path(user_id): Path<String>,
    payload: JsonPayload,
) -> Result<Json<BanResponse>> {
    let reason = payload
        .into_optional()
        .and_then(|mut body| body.remove("reason"))
        .unwrap_or_else(|| json!(DEFAULT_BAN_REASON));

    tracing::info!(admin_id = %ctx.user.id, %user_id, %reason, "User banned");

    Ok(Json(BanResponse {
        message: format!("User {user_id} banned successfully"),
        reason,
    }))
}

/// Lift a ban.
///
/// POST /api/admin/users/{user_id}/unban
///
/// # Errors
///
/// Returns an error if the admin gate fails.
pub async fn unban_user(
    RequireAdmin(ctx): RequireAdmin,
    Path(user_id): Path<String>,
) -> Result<Json<MessageResponse>> {
    tracing::info!(admin_id = %ctx.user.id, %user_id, "User unbanned");

    Ok(Json(MessageResponse {
        message: format!("User {user_id} unbanned successfully"),
    }))
}

/// Reports listing.
#[derive(Debug, Serialize)]
pub struct ReportsResponse {
    pub reports: Vec<Report>,
}

/// List user reports.
///
/// GET /api/admin/reports
///
/// # Errors
///
/// Returns an error if the admin gate fails.
pub async fn get_reports(
    State(state): State<AppState>,
    RequireAdmin(_ctx): RequireAdmin,
) -> Result<Json<ReportsResponse>> {
    Ok(Json(ReportsResponse {
        reports: state.scenario().reports(),
    }))
}

/// Response from reviewing a report.
#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub message: String,
    pub action: Value,
    pub notes: Value,
    pub user_banned: Value,
}

/// Record a moderator's decision on a report.
///
/// POST /api/admin/reports/{report_id}/review
///
/// `action` defaults to `null`, `notes` to `""` and `ban_user` to `false`.
///
/// # Errors
///
/// Returns 400 if the body is absent.
pub async fn review_report(
    RequireAdmin(ctx): RequireAdmin,
    Path(report_id): Path<String>,
    payload: JsonPayload,
) -> Result<Json<ReviewResponse>> {
    let mut body = payload.require("Review data is required")?;

    let action = body.remove("action").unwrap_or(Value::Null);
    let notes = body.remove("notes").unwrap_or_else(|| json!(""));
    let user_banned = body.remove("ban_user").unwrap_or(Value::Bool(false));

    tracing::info!(admin_id = %ctx.user.id, %report_id, %action, "Report reviewed");

    Ok(Json(ReviewResponse {
        message: format!("Report {report_id} reviewed successfully"),
        action,
        notes,
        user_banned,
    }))
}

/// Current system settings.
#[derive(Debug, Serialize)]
pub struct SettingsResponse {
    pub settings: SystemSettings,
}

/// Read system settings.
///
/// GET /api/admin/system-settings
///
/// # Errors
///
/// Returns an error if the admin gate fails.
pub async fn get_system_settings(
    State(state): State<AppState>,
    RequireAdmin(_ctx): RequireAdmin,
) -> Result<Json<SettingsResponse>> {
    Ok(Json(SettingsResponse {
        settings: state.scenario().system_settings(),
    }))
}

/// Response from updating system settings.
#[derive(Debug, Serialize)]
pub struct UpdateSettingsResponse {
    pub message: &'static str,
    pub settings: Map<String, Value>,
}

/// Update system settings. The submitted object is echoed back.
///
/// PUT /api/admin/system-settings
///
/// # Errors
///
/// Returns 400 if the body is absent.
pub async fn update_system_settings(
    RequireAdmin(ctx): RequireAdmin,
    payload: JsonPayload,
) -> Result<Json<UpdateSettingsResponse>> {
    let settings = payload.require("Settings data is required")?;

    tracing::info!(
        admin_id = %ctx.user.id,
        keys = ?settings.keys().collect::<Vec<_>>(),
        "System settings updated"
    );

    Ok(Json(UpdateSettingsResponse {
        message: "System settings updated successfully",
        settings,
    }))
}
