//! Standalone build helpers that sit next to the scaffolder.
//!
//! None of these touch the scaffolding pipeline; each is a pure function over its
//! input plus a thin I/O wrapper, shared with the rest of fbgen only through
//! [`fbgen_core::error::FbgenError`].
//!
//! - [`binary`] — size and SHA-256 of a built executable
//! - [`star`] — vertex/index tables for the procedural star mesh
//! - [`scanner`] — heuristic lint for non-constant-looking assignments in HLSL

pub mod binary;
pub mod scanner;
pub mod star;
