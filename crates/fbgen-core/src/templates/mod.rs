//! Template system for demo module scaffolding.
//!
//! Templates are embedded into the binary at compile-time via [`include_str!`] in the
//! [`embedded`] module, then rendered at runtime with [Handlebars](https://handlebarsjs.com/)
//! via the [`renderer::TemplateRenderer`].
//!
//! ## Template variables
//!
//! Templates use Handlebars syntax. Every module context provides:
//! - `{{lower_name}}` — module key, used for the namespace, include paths and file names
//! - `{{upper_name}}` — display name stored in the header's `NAME` constant
//!
//! ## Adding a new template kind
//!
//! 1. Create the `.tmpl` file under `templates/demo/`
//! 2. Add a `pub const` with `include_str!` in [`embedded`]
//! 3. Add the [`TemplateKind`] variant and wire it into [`TemplateSet::builtin`]
//!
//! **Warning**: Template files in `templates/` and constants in [`embedded`] must stay in sync.
//! The `include_str!` paths are relative to `embedded.rs` and checked at compile-time.

pub mod embedded;
pub mod renderer;

use std::borrow::Cow;
use std::fmt;

use crate::error::{FbgenError, Result};

/// The kind of file a template produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    /// C++ implementation file.
    Source,
    /// C++ public header.
    Interface,
    /// HLSL shader source.
    ShaderSource,
    /// HLSL header shared between the shader and the C++ side.
    ShaderInterface,
}

impl TemplateKind {
    /// File suffix (without the dot) used when a template doesn't override it.
    pub fn default_suffix(self) -> &'static str {
        match self {
            Self::Source => "cpp",
            Self::Interface => "hpp",
            Self::ShaderSource => "hlsl",
            Self::ShaderInterface => "hlsli",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Source => "source",
            Self::Interface => "interface",
            Self::ShaderSource => "shader source",
            Self::ShaderInterface => "shader interface",
        };
        f.write_str(name)
    }
}

/// A static text pattern for one file kind.
#[derive(Debug, Clone)]
pub struct Template {
    kind: TemplateKind,
    body: Cow<'static, str>,
    suffix: Cow<'static, str>,
}

impl Template {
    /// Create a template using the kind's default suffix.
    pub fn new(kind: TemplateKind, body: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            body: body.into(),
            suffix: Cow::Borrowed(kind.default_suffix()),
        }
    }

    /// Override the file suffix (given without the leading dot).
    pub fn with_suffix(mut self, suffix: impl Into<Cow<'static, str>>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn kind(&self) -> TemplateKind {
        self.kind
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }
}

/// An ordered collection of templates, at most one per kind.
///
/// Order determines the order files are planned and written in.
#[derive(Debug, Clone)]
pub struct TemplateSet {
    templates: Vec<Template>,
}

impl TemplateSet {
    pub fn new(templates: Vec<Template>) -> Result<Self> {
        for (i, t) in templates.iter().enumerate() {
            if templates[..i].iter().any(|prev| prev.kind == t.kind) {
                return Err(FbgenError::DuplicateTemplate(t.kind));
            }
        }
        Ok(Self { templates })
    }

    /// The compiled-in demo module templates.
    pub fn builtin() -> Self {
        Self {
            templates: vec![
                Template::new(TemplateKind::Source, embedded::DEMO_SOURCE),
                Template::new(TemplateKind::Interface, embedded::DEMO_INTERFACE),
                Template::new(TemplateKind::ShaderSource, embedded::DEMO_SHADER_SOURCE),
                Template::new(TemplateKind::ShaderInterface, embedded::DEMO_SHADER_INTERFACE),
            ],
        }
    }

    pub fn get(&self, kind: TemplateKind) -> Option<&Template> {
        self.templates.iter().find(|t| t.kind == kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Template> {
        self.templates.iter()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
