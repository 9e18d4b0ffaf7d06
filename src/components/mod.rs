pub mod templates;

pub use templates::{Template, TemplateComponent};
