//! Compile-time embedded templates for demo module scaffolding.
//!
//! Each constant loads a template file from `templates/` via [`include_str!`]. The paths
//! are relative to this source file (`crates/fbgen-core/src/templates/embedded.rs`).
//!
//! ## Warning
//!
//! Do NOT rename or move template files without updating the `include_str!` path here.
//! Do NOT modify template files without checking that the Handlebars variables still match
//! what [`crate::context::PlaceholderContext::for_module`] binds.

// -------------------------------------------------------
// Demo module templates
// -------------------------------------------------------

pub const DEMO_SOURCE: &str = include_str!("../../../../templates/demo/module.cpp.tmpl");
pub const DEMO_INTERFACE: &str = include_str!("../../../../templates/demo/module.hpp.tmpl");
pub const DEMO_SHADER_SOURCE: &str = include_str!("../../../../templates/demo/module.hlsl.tmpl");
pub const DEMO_SHADER_INTERFACE: &str =
    include_str!("../../../../templates/demo/module.hlsli.tmpl");
