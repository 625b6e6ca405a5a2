//! Handlebars-based template renderer for module scaffolding.
//!
//! Wraps the [`handlebars::Handlebars`] engine with **strict mode** enabled and
//! HTML escaping disabled. Strict mode ensures that any `{{variable}}` referenced in a
//! template must be present in the [`PlaceholderContext`], otherwise rendering returns
//! [`FbgenError::UnboundPlaceholder`]. Templates produce C++ and HLSL source; a silently
//! empty namespace or include path would still parse, then fail far from the cause.
//!
//! ## Usage
//!
//! ```ignore
//! use fbgen_core::context::PlaceholderContext;
//! use fbgen_core::templates::{renderer::TemplateRenderer, TemplateKind, TemplateSet};
//!
//! let renderer = TemplateRenderer::new();
//! let set = TemplateSet::builtin();
//! let ctx = PlaceholderContext::for_module(&module);
//! let header = renderer.render(set.get(TemplateKind::Interface).unwrap(), &ctx)?;
//! ```

use handlebars::{Handlebars, RenderErrorReason};

use crate::context::PlaceholderContext;
use crate::error::{FbgenError, Result};
use crate::templates::Template;

/// Template renderer using Handlebars for generating module files.
///
/// Rendering is a pure function of `(template, context)`: no helpers with side
/// effects are registered, so the same inputs always produce the same bytes.
pub struct TemplateRenderer {
    hbs: Handlebars<'static>,
}

impl TemplateRenderer {
    /// Create a new renderer with strict mode enabled and escaping disabled.
    pub fn new() -> Self {
        let mut hbs = Handlebars::new();
        hbs.set_strict_mode(true);
        hbs.register_escape_fn(handlebars::no_escape);
        Self { hbs }
    }

    /// Render a template with the given context.
    pub fn render(&self, template: &Template, context: &PlaceholderContext) -> Result<String> {
        self.hbs
            .render_template(template.body(), context)
            .map_err(|e| match e.reason() {
                RenderErrorReason::MissingVariable(marker) => FbgenError::UnboundPlaceholder {
                    kind: template.kind(),
                    marker: marker.clone().unwrap_or_else(|| "<unknown>".into()),
                },
                _ => FbgenError::TemplateRender(format!("{} template: {e}", template.kind())),
            })
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}
