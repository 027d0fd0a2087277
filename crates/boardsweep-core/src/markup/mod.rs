//! Markup handling
//!
//! Board text items carry lightweight tag-based markup in their `content`
//! field. The engine itself never interprets markup; it goes through the
//! [`MarkupRenderer`] capability so that matching stays independent of any
//! rendering environment and can be tested headlessly. [`TagMarkup`] is the
//! stock implementation and mirrors how the platform's renderer flattens
//! content to text: tags collapse to nothing and character entities decode.

/// Capability for converting between markup and plain text
pub trait MarkupRenderer: Send + Sync {
    /// Render markup down to the plain text the platform would display
    fn to_plain_text(&self, markup: &str) -> String;

    /// Wrap replaced plain text back into minimal markup
    fn wrap_plain_text(&self, text: &str) -> String;
}

/// Stock renderer for the platform's tag-based markup
#[derive(Debug, Clone, Copy, Default)]
pub struct TagMarkup;

impl MarkupRenderer for TagMarkup {
    /// Strips tags and decodes entities.
    ///
    /// Line-break and paragraph tags collapse like the rest, matching the
    /// platform's text rendering of `content`. An unterminated tag swallows
    /// the remainder of the string.
    fn to_plain_text(&self, markup: &str) -> String {
        let mut out = String::with_capacity(markup.len());
        let mut chars = markup.char_indices();

        while let Some((pos, ch)) = chars.next() {
            match ch {
                '<' => {
                    for (_, c) in chars.by_ref() {
                        if c == '>' {
                            break;
                        }
                    }
                }
                '&' => {
                    let rest = &markup[pos + 1..];
                    match rest.find(';').and_then(|end| {
                        let decoded = decode_entity(&rest[..end])?;
                        Some((decoded, end))
                    }) {
                        Some((decoded, end)) => {
                            out.push(decoded);
                            // Skip past the entity body and its terminator
                            for _ in 0..=end {
                                chars.next();
                            }
                        }
                        None => out.push('&'),
                    }
                }
                _ => out.push(ch),
            }
        }

        out
    }

    /// Wraps the whole text in a single paragraph tag, turning literal
    /// newlines into line-break tags.
    fn wrap_plain_text(&self, text: &str) -> String {
        format!("<p>{}</p>", text.replace('\n', "<br>"))
    }
}

/// Decode one character entity body (the part between `&` and `;`)
fn decode_entity(body: &str) -> Option<char> {
    match body {
        "lt" => Some('<'),
        "gt" => Some('>'),
        "amp" => Some('&'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => {
            let digits = body.strip_prefix('#')?;
            let code = match digits.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => digits.parse().ok()?,
            };
            char::from_u32(code)
        }
    }
}
