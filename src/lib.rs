//! Sanitizing Markdown renderer for untrusted user content.
//!
//! Converts user-authored Markdown into HTML that is safe to embed in a page
//! without further escaping. The pipeline has three stages: comrak parses the
//! Markdown, an allow-list sanitizer strips every tag, attribute, and URL
//! scheme outside the policy, and a final pass wraps bare URLs in anchors.

mod config;
mod markdown;
mod policy;
mod sanitize;

pub use config::Config;
pub use markdown::{Linkifier, SafeMarkdownRenderer};
pub use policy::{ALLOWED_ATTRIBUTES, ALLOWED_PROTOCOLS, ALLOWED_TAGS, Policy};
pub use sanitize::HtmlSanitizer;
