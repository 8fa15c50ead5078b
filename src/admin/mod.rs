pub mod auth;
pub mod handlers;

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};

use crate::auth::{CredentialVerifier, SessionStore};
use crate::sites::SiteStore;
use crate::system::ReloadOrchestrator;
use self::auth::admin_auth_middleware;
use self::handlers::*;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<SiteStore>,
    pub reloader: Arc<ReloadOrchestrator>,
    pub sessions: Arc<SessionStore>,
    pub verifier: Arc<dyn CredentialVerifier>,
    pub browse_root: PathBuf,
    pub auth_required: bool,
}

pub fn setup_admin_router(state: AppState) -> Router {
    let guarded = Router::new()
        .route("/admin/status", get(get_status))
        .route("/admin/sites", get(list_sites).post(create_site))
        .route("/admin/sites/{name}", delete(delete_site))
        .route("/admin/sites/{name}/port", put(update_site_port))
        .route("/admin/reload", post(reload_server))
        .route("/admin/directories", get(list_directories))
        .route("/admin/logout", post(auth::logout))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            admin_auth_middleware,
        ));

    Router::new()
        .route("/admin/login", post(auth::login))
        .merge(guarded)
        .with_state(state)
}
