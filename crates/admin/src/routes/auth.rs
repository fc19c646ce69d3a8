//! Admin authentication route handlers.
//!
//! Authenticates against the same remote login endpoint as the
//! storefront, but only admin-flagged accounts get a session here;
//! everyone else is turned away at the door.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::middleware::{clear_current_admin, set_current_admin};
use crate::models::CurrentAdmin;
use crate::state::AppState;

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Login page template (standalone, no dashboard shell).
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
}

/// Display the login page.
pub async fn login_page() -> impl IntoResponse {
    LoginTemplate { error: None }
}

/// Handle login form submission.
///
/// A valid login without the admin flag is rejected the same way a bad
/// password is surfaced: inline, with no session written.
#[instrument(skip(state, session, form))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Response {
    match state.api().login(&form.username, &form.password).await {
        Ok(user) if user.is_admin => {
            let admin = CurrentAdmin {
                id: user.id,
                username: user.username.clone(),
            };

            if let Err(e) = set_current_admin(&session, &admin).await {
                tracing::error!("Failed to set admin session: {e}");
                return LoginTemplate {
                    error: Some("Session error, please try again".to_string()),
                }
                .into_response();
            }

            Redirect::to("/").into_response()
        }
        Ok(user) => {
            tracing::warn!("Non-admin login attempt by {}", user.username);
            LoginTemplate {
                error: Some("Access denied! Admin only.".to_string()),
            }
            .into_response()
        }
        Err(e) => {
            tracing::warn!("Admin login failed for {}: {e}", form.username);
            LoginTemplate {
                error: Some(e.user_message()),
            }
            .into_response()
        }
    }
}

/// Handle logout.
#[instrument(skip(session))]
pub async fn logout(session: Session) -> Response {
    if let Err(e) = clear_current_admin(&session).await {
        tracing::error!("Failed to clear admin session: {e}");
    }

    if let Err(e) = session.flush().await {
        tracing::error!("Failed to flush admin session: {e}");
    }

    Redirect::to("/login").into_response()
}
