//! Markdown rendering pipeline for untrusted user content.
//!
//! This module provides the parse → sanitize → linkify pipeline: comrak
//! converts Markdown to HTML, the allow-list sanitizer strips everything
//! outside the policy, and a final pass turns bare URLs into anchors.

mod links;
mod renderer;

pub use links::Linkifier;
pub use renderer::SafeMarkdownRenderer;
