use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use log::{debug, info, error};
use crate::errors::WikiError;
use crate::types::Page;

/// Templates every wiki install must provide
pub const TEMPLATE_NAMES: [&str; 2] = ["edit", "view"];

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(String),
    Field(String),
}

/// A parsed HTML template with `{{TITLE}}` and `{{BODY}}` placeholders
///
/// Values are inserted as-is. The view template receives a body that is
/// already HTML, the edit template receives the stored bytes untouched.
#[derive(Debug, Clone)]
pub struct Template {
    name: String,
    segments: Vec<Segment>,
}

impl Template {
    /// Parse template source. Fails on an unclosed or empty placeholder.
    pub fn parse(name: &str, source: &str) -> Result<Self, WikiError> {
        let mut segments = Vec::new();
        let mut rest = source;

        while let Some(start) = rest.find("{{") {
            if start > 0 {
                segments.push(Segment::Text(rest[..start].to_string()));
            }
            let after = &rest[start + 2..];
            let end = after.find("}}").ok_or_else(|| {
                WikiError::Template(format!("template: {}: unclosed placeholder", name))
            })?;
            let field = after[..end].trim();
            if field.is_empty() {
                return Err(WikiError::Template(format!(
                    "template: {}: empty placeholder",
                    name
                )));
            }
            segments.push(Segment::Field(field.to_string()));
            rest = &after[end + 2..];
        }
        if !rest.is_empty() {
            segments.push(Segment::Text(rest.to_string()));
        }

        Ok(Self { name: name.to_string(), segments })
    }

    /// Render the template with a page as its data
    pub fn render(&self, page: &Page) -> Result<Vec<u8>, WikiError> {
        let mut out = Vec::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.extend_from_slice(text.as_bytes()),
                Segment::Field(field) => match field.as_str() {
                    "TITLE" => out.extend_from_slice(page.title.as_bytes()),
                    "BODY" => out.extend_from_slice(&page.body),
                    other => {
                        return Err(WikiError::Template(format!(
                            "template: {}: can't evaluate field {} in page data",
                            self.name, other
                        )));
                    }
                },
            }
        }
        Ok(out)
    }
}

/// Component holding the parsed page templates for the process lifetime
pub struct TemplateComponent {
    templates: BTreeMap<String, Template>,
}

impl TemplateComponent {
    /// Load `edit.html` and `view.html` from a directory
    pub fn load(dir: &Path) -> Result<Self, WikiError> {
        let mut templates = BTreeMap::new();
        for name in TEMPLATE_NAMES {
            let path = dir.join(format!("{}.html", name));
            debug!("Loading template '{}' from {:?}", name, path);
            let source = fs::read_to_string(&path).map_err(|e| {
                error!("Failed to read template {:?}: {}", path, e);
                WikiError::Template(format!("open {}: {}", path.display(), e))
            })?;
            templates.insert(name.to_string(), Template::parse(&format!("{}.html", name), &source)?);
        }
        info!("Loaded {} templates from {:?}", templates.len(), dir);
        Ok(Self { templates })
    }

    /// Build from in-memory sources
    pub fn from_sources(edit: &str, view: &str) -> Result<Self, WikiError> {
        let mut templates = BTreeMap::new();
        templates.insert("edit".to_string(), Template::parse("edit.html", edit)?);
        templates.insert("view".to_string(), Template::parse("view.html", view)?);
        Ok(Self { templates })
    }

    /// Render the named template with the given page
    pub fn render(&self, name: &str, page: &Page) -> Result<Vec<u8>, WikiError> {
        let template = self.templates.get(name).ok_or_else(|| {
            WikiError::Template(format!("template: no template named {}.html", name))
        })?;
        template.render(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn renders_title_and_body() {
        let tpl = Template::parse("view.html", "<h1>{{TITLE}}</h1><div>{{ BODY }}</div>").unwrap();
        let out = tpl.render(&Page::new("Home", "<a href=\"/view/X\">X</a>")).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "<h1>Home</h1><div><a href=\"/view/X\">X</a></div>"
        );
    }

    #[test]
    fn unknown_field_fails_at_render_time() {
        let tpl = Template::parse("view.html", "{{AUTHOR}}").unwrap();
        let err = tpl.render(&Page::empty("Home")).unwrap_err();
        assert!(err.to_string().contains("AUTHOR"));
    }

    #[test]
    fn unclosed_placeholder_is_parse_error() {
        assert!(Template::parse("edit.html", "<p>{{TITLE</p>").is_err());
        assert!(Template::parse("edit.html", "<p>{{  }}</p>").is_err());
    }

    #[test]
    fn load_requires_both_templates() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("view.html"), "{{BODY}}").unwrap();
        assert!(TemplateComponent::load(tmp.path()).is_err());

        fs::write(tmp.path().join("edit.html"), "<textarea>{{BODY}}</textarea>").unwrap();
        let templates = TemplateComponent::load(tmp.path()).unwrap();
        let out = templates.render("edit", &Page::new("P", "[Raw]")).unwrap();
        assert_eq!(out, b"<textarea>[Raw]</textarea>".to_vec());
    }

    #[test]
    fn unknown_template_name_is_error() {
        let templates = TemplateComponent::from_sources("{{BODY}}", "{{BODY}}").unwrap();
        assert!(templates.render("history", &Page::empty("P")).is_err());
    }
}
