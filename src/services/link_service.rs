use regex::bytes::{Captures, Regex};
use crate::errors::WikiError;

/// Matches `[Title]` where the title is one or more ASCII alphanumerics
const LINK_PATTERN: &str = r"\[([a-zA-Z0-9]+)\]";

/// Service that turns bracket links in a page body into anchors
pub struct LinkService {
    pattern: Regex,
}

impl LinkService {
    pub fn new() -> Result<Self, WikiError> {
        Ok(Self { pattern: Regex::new(LINK_PATTERN)? })
    }

    /// Rewrite every `[Title]` into `<a href="/view/Title">Title</a>`
    pub fn render(&self, body: &[u8]) -> Vec<u8> {
        self.pattern
            .replace_all(body, |caps: &Captures| {
                let title = &caps[1];
                let mut out = Vec::with_capacity(title.len() * 2 + 24);
                out.extend_from_slice(b"<a href=\"/view/");
                out.extend_from_slice(title);
                out.extend_from_slice(b"\">");
                out.extend_from_slice(title);
                out.extend_from_slice(b"</a>");
                out
            })
            .into_owned()
    }
}
