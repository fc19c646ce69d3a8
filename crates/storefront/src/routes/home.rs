//! Home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use axum::response::IntoResponse;

use crate::filters;
use crate::middleware::OptionalAuth;
use crate::models::{Flash, Page};
use crate::state::AppState;

use super::{MessageQuery, Shell};

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub shell: Shell,
}

/// Display the home page.
pub async fn home(
    State(state): State<AppState>,
    OptionalAuth(user): OptionalAuth,
    Query(query): Query<MessageQuery>,
) -> impl IntoResponse {
    let flash = Flash::from_query(query.error.as_deref(), query.success.as_deref());

    HomeTemplate {
        shell: Shell::build(&state, Page::Home, user, flash),
    }
}
