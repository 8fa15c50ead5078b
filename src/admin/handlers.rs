use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::admin::AppState;
use crate::sites::browse::{scan_directories, DirectoryNode};
use crate::sites::{ConfigEntry, SaveRequest, SiteError};

#[derive(Serialize)]
pub struct SystemStatus {
    pub version: &'static str,
    pub status: &'static str,
}

/// Uniform envelope for every mutating action, mirroring the
/// success-flag-plus-message results the panel has always returned.
#[derive(Serialize)]
pub struct ActionResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ActionResponse {
    pub fn plain(success: bool, message: impl Into<String>) -> Self {
        Self {
            success,
            message: message.into(),
            name: None,
        }
    }
}

#[derive(Deserialize)]
pub struct CreateSiteRequest {
    pub path: String,
    pub port: u32,
    #[serde(default)]
    pub autoindex: bool,
    #[serde(default)]
    pub custom_404: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdatePortRequest {
    pub port: u32,
}

fn site_error_status(err: &SiteError) -> StatusCode {
    match err {
        SiteError::InvalidInput { .. } | SiteError::InvalidPath(_) => StatusCode::BAD_REQUEST,
        SiteError::Protected(_) => StatusCode::FORBIDDEN,
        SiteError::NotFound(_) => StatusCode::NOT_FOUND,
        SiteError::PortConflict(_) | SiteError::NoChange => StatusCode::CONFLICT,
        SiteError::Write { .. } | SiteError::Delete { .. } | SiteError::Link { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn site_failure(err: SiteError) -> (StatusCode, Json<ActionResponse>) {
    (
        site_error_status(&err),
        Json(ActionResponse::plain(false, err.to_string())),
    )
}

pub async fn get_status() -> Json<SystemStatus> {
    Json(SystemStatus {
        version: env!("CARGO_PKG_VERSION"),
        status: "operational",
    })
}

pub async fn list_sites(State(state): State<AppState>) -> Json<Vec<ConfigEntry>> {
    Json(state.store.registry().list())
}

pub async fn create_site(
    State(state): State<AppState>,
    Json(request): Json<CreateSiteRequest>,
) -> (StatusCode, Json<ActionResponse>) {
    let request = SaveRequest {
        path: request.path,
        port: request.port,
        autoindex: request.autoindex,
        custom_404: request.custom_404,
    };
    match state.store.save(&request) {
        Ok(site) => (
            StatusCode::OK,
            Json(ActionResponse {
                success: true,
                message: "Configuration saved successfully.".to_string(),
                name: Some(site.name),
            }),
        ),
        Err(err) => site_failure(err),
    }
}

pub async fn delete_site(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> (StatusCode, Json<ActionResponse>) {
    match state.store.delete(&name) {
        Ok(()) => (
            StatusCode::OK,
            Json(ActionResponse::plain(
                true,
                "Configuration deleted successfully.",
            )),
        ),
        Err(err) => site_failure(err),
    }
}

pub async fn update_site_port(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(request): Json<UpdatePortRequest>,
) -> (StatusCode, Json<ActionResponse>) {
    match state.store.update_port(&name, request.port) {
        Ok(()) => (
            StatusCode::OK,
            Json(ActionResponse::plain(
                true,
                "Configuration port updated successfully.",
            )),
        ),
        Err(err) => site_failure(err),
    }
}

pub async fn reload_server(State(state): State<AppState>) -> (StatusCode, Json<ActionResponse>) {
    match state.reloader.reload().await {
        Ok(()) => (
            StatusCode::OK,
            Json(ActionResponse::plain(
                true,
                "Server configuration reloaded successfully.",
            )),
        ),
        Err(err) => (
            StatusCode::BAD_GATEWAY,
            Json(ActionResponse::plain(false, err.to_string())),
        ),
    }
}

pub async fn list_directories(State(state): State<AppState>) -> Json<Vec<DirectoryNode>> {
    Json(scan_directories(&state.browse_root))
}
