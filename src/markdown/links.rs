//! Bare URL detection over sanitized HTML.

/// Wraps bare URLs in sanitized HTML with anchor tags.
///
/// Runs as the last pipeline stage, after sanitization, so it also catches
/// URLs that surfaced as plain text when a disallowed element was stripped.
/// Text already inside `<a>`, `<code>`, or `<pre>` elements is left alone.
/// Generated anchors carry `target="_blank"`, matching what the sanitizer
/// forces onto Markdown-authored links.
pub struct Linkifier;

/// Characters that end a URL token. Quotes are excluded from URLs so the
/// generated `href` attribute value stays well formed.
const URL_TERMINATORS: &[char] = &['"', '\''];

/// Trailing sentence punctuation that is not part of a detected URL.
const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', ')'];

impl Linkifier {
    /// Creates a linkifier.
    pub fn new() -> Self {
        Self
    }

    /// Converts bare `http://` and `https://` URLs in text to anchor tags.
    ///
    /// The input must be sanitizer output: tags are balanced and attribute
    /// values are quoted, so a linear scan that alternates between tag and
    /// text regions is sufficient. Tag regions are copied verbatim; text
    /// regions outside skipped elements are scanned for URLs.
    ///
    /// # Arguments
    ///
    /// * `html`: Sanitized HTML fragment
    ///
    /// # Returns
    ///
    /// HTML with bare URLs wrapped in `<a href="URL" target="_blank">` tags
    pub fn linkify(&self, html: &str) -> String {
        let mut result = String::with_capacity(html.len() + 64);
        let mut skip_depth: usize = 0;
        let mut pos = 0;

        while pos < html.len() {
            let Some(offset) = html[pos..].find('<') else {
                Self::emit_text(&html[pos..], skip_depth, &mut result);
                return result;
            };
            let tag_start = pos + offset;

            Self::emit_text(&html[pos..tag_start], skip_depth, &mut result);

            let tag_end = match html[tag_start..].find('>') {
                Some(p) => tag_start + p + 1,
                None => {
                    // Unterminated tag cannot come from the sanitizer; copy
                    // the remainder verbatim
                    result.push_str(&html[tag_start..]);
                    return result;
                }
            };

            let tag = &html[tag_start..tag_end];
            if Self::is_skipped_element(tag) {
                if tag.starts_with("</") {
                    skip_depth = skip_depth.saturating_sub(1);
                } else {
                    skip_depth += 1;
                }
            }

            result.push_str(tag);
            pos = tag_end;
        }

        result
    }

    /// Copies a text region into the output, linkifying unless inside a
    /// skipped element.
    fn emit_text(text: &str, skip_depth: usize, out: &mut String) {
        if skip_depth == 0 {
            Self::linkify_text(text, out);
        } else {
            out.push_str(text);
        }
    }

    /// Returns true for tags whose content must not be linkified.
    ///
    /// # Arguments
    ///
    /// * `tag`: Complete tag including angle brackets, opening or closing
    fn is_skipped_element(tag: &str) -> bool {
        let name = tag
            .trim_start_matches('<')
            .trim_start_matches('/')
            .trim_end_matches('>');
        let name_end = name
            .find(|c: char| !c.is_ascii_alphanumeric())
            .unwrap_or(name.len());
        matches!(&name[..name_end], "a" | "code" | "pre")
    }

    /// Scans a text region for bare URLs and writes the result to `out`.
    ///
    /// URL tokens run from a scheme prefix to the next whitespace or quote.
    /// Trailing sentence punctuation stays outside the anchor. A scheme with
    /// no host (a literal `http://`) is copied as plain text.
    fn linkify_text(text: &str, out: &mut String) {
        let mut pos = 0;

        while pos < text.len() {
            let Some(start) = Self::find_url_start(text, pos) else {
                out.push_str(&text[pos..]);
                return;
            };

            out.push_str(&text[pos..start]);

            let token_end = text[start..]
                .find(|c: char| c.is_whitespace() || URL_TERMINATORS.contains(&c))
                .map_or(text.len(), |p| start + p);

            let url = Self::trim_trailing_punctuation(&text[start..token_end]);

            if Self::host_part(url).is_empty() {
                // Scheme prefix with nothing behind it, plain text
                out.push_str(&text[start..token_end]);
                pos = token_end;
                continue;
            }

            out.push_str("<a href=\"");
            out.push_str(url);
            out.push_str("\" target=\"_blank\">");
            out.push_str(url);
            out.push_str("</a>");
            out.push_str(&text[start + url.len()..token_end]);

            pos = token_end;
        }
    }

    /// Finds the next URL scheme occurrence at a word boundary.
    ///
    /// # Arguments
    ///
    /// * `text`: Text region to scan
    /// * `from`: Byte offset to start scanning at
    ///
    /// # Returns
    ///
    /// Byte offset of the scheme start, or None when no URL remains
    fn find_url_start(text: &str, from: usize) -> Option<usize> {
        let mut offset = from;

        while let Some(rel) = text[offset..].find("http") {
            let idx = offset + rel;
            let candidate = &text[idx..];
            let has_scheme =
                candidate.starts_with("http://") || candidate.starts_with("https://");
            let at_boundary = text[..idx]
                .chars()
                .next_back()
                .is_none_or(|c| !c.is_ascii_alphanumeric());

            if has_scheme && at_boundary {
                return Some(idx);
            }

            offset = idx + "http".len();
        }

        None
    }

    /// Strips trailing sentence punctuation from a URL token.
    ///
    /// A `;` that closes an HTML entity stays in the URL: the text is
    /// sanitizer output, so a literal `&` inside a URL arrives as `&amp;`,
    /// and splitting the entity would leave an unterminated `&amp` in the
    /// generated `href`.
    fn trim_trailing_punctuation(token: &str) -> &str {
        let mut url = token;

        while let Some(last) = url.chars().next_back() {
            if !TRAILING_PUNCTUATION.contains(&last) {
                break;
            }
            if last == ';' && Self::ends_with_entity_head(&url[..url.len() - 1]) {
                break;
            }
            url = &url[..url.len() - last.len_utf8()];
        }

        url
    }

    /// Returns true when the text ends with `&` plus entity name characters,
    /// so a following `;` would terminate an HTML entity.
    fn ends_with_entity_head(text: &str) -> bool {
        match text.rfind('&') {
            Some(idx) => {
                let name = &text[idx + 1..];
                !name.is_empty()
                    && name
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || c == '#')
            }
            None => false,
        }
    }

    /// Returns the part of the URL after the scheme prefix.
    fn host_part(url: &str) -> &str {
        url.strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"))
            .unwrap_or("")
    }
}

impl Default for Linkifier {
    fn default() -> Self {
        Self::new()
    }
}
