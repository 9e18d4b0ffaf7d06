//! tinywiki - a minimal wiki server
//!
//! Pages are plain text files, one per title, viewed and edited over HTTP.
//! `[PageName]` in a page body becomes a link to that page when viewed.

pub mod app;
pub mod components;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod logger;
pub mod services;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use app::{build_app, build_state, router};
pub use config::{Args, Config};
pub use errors::WikiError;
pub use types::{Action, AppState, Page};
pub use services::{LinkService, PageService};
pub use components::{Template, TemplateComponent};
pub use utils::RoutePattern;
