//! User listing handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use axum::response::IntoResponse;
use tracing::instrument;

use bramble_core::User;

use crate::components::data_table::{DataTableConfig, users_table_config};
use crate::filters::{self, format_date};
use crate::middleware::RequireAdminAuth;
use crate::state::AppState;

use super::Shell;

/// User row display data.
#[derive(Debug, Clone)]
pub struct UserRow {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub is_admin: bool,
    pub joined: String,
}

impl From<&User> for UserRow {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.as_i32(),
            username: user.username.clone(),
            email: user.email.to_string(),
            full_name: user
                .full_name
                .clone()
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| "N/A".to_string()),
            is_admin: user.is_admin,
            joined: user
                .created_at
                .as_deref()
                .map_or_else(String::new, format_date),
        }
    }
}

/// Users page template.
#[derive(Template, WebTemplate)]
#[template(path = "users/index.html")]
pub struct UsersTemplate {
    pub shell: Shell,
    pub config: DataTableConfig,
    pub users: Vec<UserRow>,
    pub load_error: Option<String>,
}

/// Display the user listing.
#[instrument(skip(state, admin))]
pub async fn index(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
) -> impl IntoResponse {
    let (users, load_error) = match state.api().users().await {
        Ok(users) => (users, None),
        Err(e) => {
            tracing::error!("Failed to fetch users: {e}");
            (Vec::new(), Some("Error loading users".to_string()))
        }
    };

    UsersTemplate {
        shell: Shell::build("/users", &admin, None),
        config: users_table_config(),
        users: users.iter().map(UserRow::from).collect(),
        load_error,
    }
}
