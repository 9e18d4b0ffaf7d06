use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};

use crate::errors::WikiError;
use crate::types::{Action, AppState, Page};
use crate::utils::form::form_value;

/// Page that `/` always sends visitors to
pub const FRONT_PAGE: &str = "FrontPage";

/// A validated `/{action}/{title}` request
///
/// Rejects with a 404 before the handler runs when the path does not have
/// exactly that shape or the title is not plain alphanumeric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub action: Action,
    pub title: String,
}

#[async_trait]
impl FromRequestParts<AppState> for PageRequest {
    type Rejection = WikiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        // Matched before percent-decoding, so an escaped title is never accepted.
        let path = parts.uri.path();
        match state.routes.parse(path) {
            Some((action, title)) => Ok(PageRequest { action, title }),
            None => {
                log::warn!("Rejected malformed page path: '{}'", path);
                Err(WikiError::NotFound)
            }
        }
    }
}

/// 302 redirect to `location`
fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}

fn render_template(state: &AppState, name: &str, page: &Page) -> Result<Response, WikiError> {
    match state.templates.render(name, page) {
        Ok(html) => Ok(Html(html).into_response()),
        Err(e) => {
            log::error!("Rendering '{}' for page '{}' failed: {}", name, page.title, e);
            Err(e)
        }
    }
}

/// Handle root path requests
pub async fn handle_root() -> Response {
    log::debug!("Root request, redirecting to {}", FRONT_PAGE);
    found(&Action::View.path_for(FRONT_PAGE))
}

/// Show a page with its bracket links rendered, or send the visitor to create it
pub async fn handle_view(
    State(state): State<AppState>,
    request: PageRequest,
) -> Result<Response, WikiError> {
    log::info!("View request received: '{}'", request.title);

    let mut page = match state.pages.load(&request.title) {
        Ok(page) => page,
        Err(e) => {
            log::debug!("{}, redirecting to editor", e);
            return Ok(found(&Action::Edit.path_for(&request.title)));
        }
    };
    page.body = state.links.render(&page.body);
    render_template(&state, "view", &page)
}

/// Show the edit form, empty when the page does not exist yet
pub async fn handle_edit(
    State(state): State<AppState>,
    request: PageRequest,
) -> Result<Response, WikiError> {
    log::info!("Edit request received: '{}'", request.title);

    let page = state.pages.load(&request.title).unwrap_or_else(|e| {
        log::debug!("{}, starting from an empty page", e);
        Page::empty(request.title.clone())
    });
    render_template(&state, "edit", &page)
}

/// Store the submitted body and redirect to the page
pub async fn handle_save(
    State(state): State<AppState>,
    request: PageRequest,
    req: Request,
) -> Result<Response, WikiError> {
    let body = form_value(req, "body").await.map_err(|e| {
        log::warn!("Unreadable form for '{}': {}", request.title, e);
        e
    })?;
    log::info!("Save request received: '{}', {} bytes", request.title, body.len());

    let page = Page::new(request.title, body);
    state.pages.save(&page)?;
    Ok(found(&Action::View.path_for(&page.title)))
}

/// Known route, wrong method. Malformed paths still get a 404 from the extractor.
pub async fn handle_wrong_method(request: PageRequest) -> WikiError {
    log::warn!("Method not allowed for {} on '{}'", request.action.as_str(), request.title);
    WikiError::MethodNotAllowed
}

/// Anything outside the known routes
pub async fn handle_not_found(uri: Uri) -> WikiError {
    log::warn!("Path not found: '{}'", uri.path());
    WikiError::NotFound
}
