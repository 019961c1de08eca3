/**
 * Page Handlers
 *
 * Handlers for the HTML pages. Pages render for anonymous visitors too;
 * a signed-in user is passed to the template when the request carries a
 * valid token.
 */

use std::sync::Arc;

use axum::{extract::State, response::Html};
use minijinja::context;
use serde::Serialize;

use crate::backend::auth::handlers::types::UserOut;
use crate::backend::error::BackendError;
use crate::backend::frontend::templates::{Templates, INDEX_TEMPLATE, LOGIN_TEMPLATE, REGISTER_TEMPLATE};
use crate::backend::middleware::auth::MaybeUser;
use crate::backend::server::config::Settings;

/// Settings exposed to templates
#[derive(Debug, Clone, Serialize)]
pub struct PageSettings {
    pub project_name: String,
    /// Rendered unescaped
    pub project_name_html: String,
    pub app_version: String,
}

impl From<&Settings> for PageSettings {
    fn from(settings: &Settings) -> Self {
        Self {
            project_name: settings.project_name.clone(),
            project_name_html: settings.project_name_html.clone(),
            app_version: settings.app_version.clone(),
        }
    }
}

fn render_page(
    templates: &Templates,
    settings: &Settings,
    name: &str,
    user: Option<UserOut>,
) -> Result<Html<String>, BackendError> {
    templates.render(
        name,
        context! {
            settings => PageSettings::from(settings),
            user => user,
        },
    )
}

/// GET /
pub async fn index(
    State(templates): State<Templates>,
    State(settings): State<Arc<Settings>>,
    MaybeUser(user): MaybeUser,
) -> Result<Html<String>, BackendError> {
    render_page(&templates, &settings, INDEX_TEMPLATE, user.map(|u| u.to_public()))
}

/// GET /login
pub async fn login_page(
    State(templates): State<Templates>,
    State(settings): State<Arc<Settings>>,
    MaybeUser(user): MaybeUser,
) -> Result<Html<String>, BackendError> {
    render_page(&templates, &settings, LOGIN_TEMPLATE, user.map(|u| u.to_public()))
}

/// GET /register
pub async fn register_page(
    State(templates): State<Templates>,
    State(settings): State<Arc<Settings>>,
    MaybeUser(user): MaybeUser,
) -> Result<Html<String>, BackendError> {
    render_page(&templates, &settings, REGISTER_TEMPLATE, user.map(|u| u.to_public()))
}
