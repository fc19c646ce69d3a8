//! Authentication route handlers.
//!
//! Credentials pass through to the Shop API unmodified; the remote
//! decides. A successful login stores the identity in the session so a
//! reload does not re-authenticate. Logout clears the session, the
//! user's cart snapshot, and with them every admin-only affordance.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::filters;
use crate::middleware::{OptionalAuth, clear_current_user, set_current_user};
use crate::models::{CurrentUser, Flash, Page};
use crate::state::AppState;
use crate::viewmodel;

use super::{MessageQuery, Shell};

// =============================================================================
// Form Types
// =============================================================================

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Registration form data.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

// =============================================================================
// Templates
// =============================================================================

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub shell: Shell,
    pub error: Option<String>,
    /// Pre-filled username, e.g. right after registration.
    pub username: Option<String>,
}

/// Register page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/register.html")]
pub struct RegisterTemplate {
    pub shell: Shell,
    pub error: Option<String>,
}

// =============================================================================
// Login Routes
// =============================================================================

/// Display the login page.
pub async fn login_page(
    State(state): State<AppState>,
    OptionalAuth(user): OptionalAuth,
    Query(query): Query<MessageQuery>,
) -> impl IntoResponse {
    let flash = Flash::from_query(query.error.as_deref(), query.success.as_deref());

    LoginTemplate {
        shell: Shell::build(&state, Page::Login, user, flash),
        error: None,
        username: None,
    }
}

/// Handle login form submission.
///
/// On failure the remote's message is rendered inline and nothing is
/// stored; on success the identity goes into the session and the user
/// lands on the product listing.
#[instrument(skip(state, session, form))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Response {
    match state.api().login(&form.username, &form.password).await {
        Ok(user) => {
            let current_user = CurrentUser {
                id: user.id,
                username: user.username.clone(),
                is_admin: user.is_admin,
            };

            if let Err(e) = set_current_user(&session, &current_user).await {
                tracing::error!("Failed to set session: {e}");
                return Redirect::to("/login?error=session").into_response();
            }

            Redirect::to("/products").into_response()
        }
        Err(e) => {
            tracing::warn!("Login failed for {}: {e}", form.username);
            LoginTemplate {
                shell: Shell::build(&state, Page::Login, None, None),
                error: Some(e.user_message()),
                username: Some(form.username),
            }
            .into_response()
        }
    }
}

// =============================================================================
// Registration Routes
// =============================================================================

/// Display the registration page.
pub async fn register_page(
    State(state): State<AppState>,
    OptionalAuth(user): OptionalAuth,
) -> impl IntoResponse {
    RegisterTemplate {
        shell: Shell::build(&state, Page::Login, user, None),
        error: None,
    }
}

/// Handle registration form submission.
///
/// No auto-login: success lands on the login page with the username
/// pre-filled.
#[instrument(skip(state, form))]
pub async fn register(State(state): State<AppState>, Form(form): Form<RegisterForm>) -> Response {
    match state
        .api()
        .register(&form.username, &form.email, &form.password, &form.full_name)
        .await
    {
        Ok(()) => LoginTemplate {
            shell: Shell::build(
                &state,
                Page::Login,
                None,
                Flash::from_query(None, Some("registered")),
            ),
            error: None,
            username: Some(form.username),
        }
        .into_response(),
        Err(e) => {
            tracing::warn!("Registration failed for {}: {e}", form.username);
            RegisterTemplate {
                shell: Shell::build(&state, Page::Login, None, None),
                error: Some(e.user_message()),
            }
            .into_response()
        }
    }
}

// =============================================================================
// Logout Route
// =============================================================================

/// Handle logout.
///
/// Clears the session record, the user's cart snapshot, and thereby the
/// admin affordances, regardless of prior state.
#[instrument(skip(state, session, user))]
pub async fn logout(
    State(state): State<AppState>,
    OptionalAuth(user): OptionalAuth,
    session: Session,
) -> Response {
    if let Some(user) = user {
        viewmodel::cart::clear(state.carts(), user.id);
    }

    if let Err(e) = clear_current_user(&session).await {
        tracing::error!("Failed to clear session: {e}");
    }

    // Also destroy the entire session record
    if let Err(e) = session.flush().await {
        tracing::error!("Failed to flush session: {e}");
    }

    Redirect::to("/?success=logged_out").into_response()
}
