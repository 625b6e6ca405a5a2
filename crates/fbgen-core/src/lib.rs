//! Core library for the fbgen toolkit.
//!
//! Scaffolds demo modules for the fb rendering codebase. Each module is a
//! directory holding four co-generated files (C++ source and header, HLSL
//! source and header) rendered from one shared [`templates::TemplateSet`]
//! with one [`context::PlaceholderContext`] per module, so the files agree on
//! namespace, include paths and display name.
//!
//! The pipeline is strictly one-directional:
//! [`module::ModuleDescriptor`] → [`plan::plan`] → [`templates::renderer::TemplateRenderer`]
//! → [`writer::write_scaffold`], driven per module by [`driver::run`].

pub mod config;
pub mod context;
pub mod driver;
pub mod error;
pub mod module;
pub mod plan;
pub mod templates;
pub mod writer;
