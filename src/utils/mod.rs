pub mod form;

use regex::Regex;
use crate::errors::WikiError;
use crate::types::Action;

/// The only accepted shape for page requests. The title class doubles as the
/// guard against path traversal in the page store, so it must stay strict.
const ROUTE_PATTERN: &str = r"^/(edit|save|view)/([a-zA-Z0-9]+)$";

/// Compiled request path matcher, built once at startup
pub struct RoutePattern {
    pattern: Regex,
}

impl RoutePattern {
    pub fn new() -> Result<Self, WikiError> {
        Ok(Self { pattern: Regex::new(ROUTE_PATTERN)? })
    }

    /// Split a request path into its action and title, if it is well formed
    pub fn parse(&self, path: &str) -> Option<(Action, String)> {
        let caps = self.pattern.captures(path)?;
        let action = Action::parse(caps.get(1)?.as_str())?;
        Some((action, caps.get(2)?.as_str().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_each_action() {
        let routes = RoutePattern::new().unwrap();
        assert_eq!(routes.parse("/view/FrontPage"), Some((Action::View, "FrontPage".into())));
        assert_eq!(routes.parse("/edit/abc123"), Some((Action::Edit, "abc123".into())));
        assert_eq!(routes.parse("/save/X"), Some((Action::Save, "X".into())));
    }

    #[test]
    fn rejects_malformed_paths() {
        let routes = RoutePattern::new().unwrap();
        for path in [
            "/",
            "/view/",
            "/view",
            "/view/bad.title!",
            "/view/a/b",
            "/view/../secret",
            "/view/Front%20Page",
            "/delete/FrontPage",
            "/view/FrontPage/",
            "view/FrontPage",
        ] {
            assert_eq!(routes.parse(path), None, "{path} should not match");
        }
    }
}
