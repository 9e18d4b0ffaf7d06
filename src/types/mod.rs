use std::sync::Arc;

use crate::components::TemplateComponent;
use crate::services::{LinkService, PageService};
use crate::utils::RoutePattern;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub pages: PageService,
    pub links: Arc<LinkService>,
    pub templates: Arc<TemplateComponent>,
    pub routes: Arc<RoutePattern>,
}

/// A wiki page: a title and its raw body bytes
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Page {
    pub title: String,
    pub body: Vec<u8>,
}

impl Page {
    pub fn new(title: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self { title: title.into(), body: body.into() }
    }

    /// An empty page, used when editing a title that has not been saved yet
    pub fn empty(title: impl Into<String>) -> Self {
        Self { title: title.into(), body: Vec::new() }
    }
}

/// The three page actions a request path can name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    View,
    Edit,
    Save,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Action::View => "view",
            Action::Edit => "edit",
            Action::Save => "save",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "view" => Some(Action::View),
            "edit" => Some(Action::Edit),
            "save" => Some(Action::Save),
            _ => None,
        }
    }

    /// Path for this action on the given title
    pub fn path_for(self, title: &str) -> String {
        format!("/{}/{}", self.as_str(), title)
    }
}
