/**
 * Page Templates
 *
 * The HTML templates are compiled into the binary and registered with a
 * single minijinja environment at startup. Autoescaping is on for every
 * `.html` template.
 */

use std::sync::Arc;

use axum::response::Html;
use minijinja::Environment;
use serde::Serialize;

use crate::backend::error::BackendError;

pub const BASE_TEMPLATE: &str = "base.html";
pub const INDEX_TEMPLATE: &str = "index.html";
pub const LOGIN_TEMPLATE: &str = "login.html";
pub const REGISTER_TEMPLATE: &str = "register.html";

const SOURCES: [(&str, &str); 4] = [
    (BASE_TEMPLATE, include_str!("../../../templates/base.html")),
    (INDEX_TEMPLATE, include_str!("../../../templates/index.html")),
    (LOGIN_TEMPLATE, include_str!("../../../templates/login.html")),
    (REGISTER_TEMPLATE, include_str!("../../../templates/register.html")),
];

/// Compiled template environment
#[derive(Clone)]
pub struct Templates {
    env: Arc<Environment<'static>>,
}

impl Templates {
    /// Compile all page templates
    pub fn load() -> Result<Self, BackendError> {
        let mut env = Environment::new();
        for (name, source) in SOURCES {
            env.add_template(name, source)?;
        }
        Ok(Self { env: Arc::new(env) })
    }

    /// Render `name` with `ctx`
    pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<Html<String>, BackendError> {
        let template = self.env.get_template(name)?;
        let html = template.render(ctx).map_err(|e| {
            tracing::error!("Failed to render template {}: {}", name, e);
            e
        })?;
        Ok(Html(html))
    }
}
