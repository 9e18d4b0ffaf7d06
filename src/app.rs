use std::sync::Arc;

use axum::{routing::{get, post}, Router};

use crate::components::TemplateComponent;
use crate::config::Config;
use crate::errors::WikiError;
use crate::handlers::{
    handle_edit, handle_not_found, handle_root, handle_save, handle_view, handle_wrong_method,
};
use crate::services::{LinkService, PageService};
use crate::types::AppState;
use crate::utils::RoutePattern;

/// Compile patterns and parse templates once for the process lifetime
pub fn build_state(config: &Config) -> Result<AppState, WikiError> {
    let templates = TemplateComponent::load(&config.templates_dir)?;
    Ok(AppState {
        pages: PageService::new(config.data_dir.as_ref().clone()),
        links: Arc::new(LinkService::new()?),
        templates: Arc::new(templates),
        routes: Arc::new(RoutePattern::new()?),
    })
}

/// Wire the page routes onto shared state
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handle_root))
        .route("/view/:title", get(handle_view).fallback(handle_wrong_method))
        .route("/edit/:title", get(handle_edit).fallback(handle_wrong_method))
        .route("/save/:title", post(handle_save).fallback(handle_wrong_method))
        .fallback(handle_not_found)
        .with_state(state)
}

pub fn build_app(config: &Config) -> Result<Router, WikiError> {
    Ok(router(build_state(config)?))
}
