//! Authentication route handlers.
//!
//! Provides the login page, login form processing, and logout.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form, Router,
    extract::State,
    response::{IntoResponse, Redirect, Response},
    routing::get,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::error::AppError;
use crate::filters;
use crate::middleware::{clear_current_user, set_current_user};
use crate::models::CurrentUser;
use crate::services::{AuthError, AuthService};
use crate::state::AppState;

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
}

/// Build the auth router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", get(login_page).post(login))
        .route("/logout", get(logout))
}

/// Render the login page.
///
/// GET /login
async fn login_page() -> LoginTemplate {
    LoginTemplate { error: None }
}

/// Handle login form submission.
///
/// POST /login
///
/// On success stores the user identity in the session and redirects to
/// the catalog. On bad credentials re-renders the form with a generic
/// error, with no hint of which field was wrong.
async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    match AuthService::new(state.pool())
        .login(&form.username, &form.password)
        .await
    {
        Ok(user) => {
            let current = CurrentUser {
                id: user.id,
                username: user.username,
            };
            set_current_user(&session, &current).await?;
            tracing::info!(username = %current.username, "login successful");
            Ok(Redirect::to("/").into_response())
        }
        Err(AuthError::InvalidCredentials) => {
            tracing::warn!(username = %form.username, "login rejected");
            Ok(LoginTemplate {
                error: Some("Dados incorretos".to_string()),
            }
            .into_response())
        }
        Err(AuthError::Repository(e)) => Err(e.into()),
    }
}

/// Logout and clear the session.
///
/// GET /logout
async fn logout(session: Session) -> Result<Redirect, AppError> {
    clear_current_user(&session).await?;
    Ok(Redirect::to("/login"))
}
