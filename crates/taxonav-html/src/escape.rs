// ── Escaping helpers ──

use std::borrow::Cow;

/// Escape a string for use in HTML text content or attribute values.
///
/// Borrows the input unchanged when nothing needs escaping, which is the
/// common case for category names.
pub fn escape_html(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len() + 8);
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}

/// Escape a string for interpolation into a double-quoted JS string
/// literal inside an inline `<script>` block.
pub fn escape_js(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 8);
    for ch in input.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            // `</script>` inside the literal would end the block early.
            '/' => out.push_str("\\/"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_passthrough_borrows() {
        assert!(matches!(escape_html("Tech"), Cow::Borrowed("Tech")));
    }

    #[test]
    fn html_special_characters_are_escaped() {
        assert_eq!(
            escape_html(r#"<b>"Arts & Crafts"</b>"#),
            "&lt;b&gt;&quot;Arts &amp; Crafts&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn js_escapes_quotes_and_script_closers() {
        assert_eq!(
            escape_js(r#"https://example.org/blog"</script>"#),
            r#"https:\/\/example.org\/blog\"<\/script>"#
        );
    }
}
