//! HTML escaping for user-supplied text.

/// Escapes the five HTML-significant characters to their named
/// entities. Everything else, including non-ASCII text, passes
/// through untouched. Callers apply this exactly once per field,
/// when the notification envelope is built.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_all_five_characters() {
        assert_eq!(
            escape_html(r#"<script>alert("x & 'y'")</script>"#),
            "&lt;script&gt;alert(&quot;x &amp; &#39;y&#39;&quot;)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_output_contains_no_literal_specials() {
        let escaped = escape_html("a<b>c\"d'e&f");
        for c in ['<', '>', '"', '\''] {
            assert!(!escaped.contains(c), "found literal {:?} in {}", c, escaped);
        }
        // Ampersands only as part of entities.
        assert!(!escaped.replace("&amp;", "").replace("&lt;", "").replace("&gt;", "")
            .replace("&quot;", "").replace("&#39;", "").contains('&'));
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(escape_html("hello world"), "hello world");
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn test_non_ascii_untouched() {
        assert_eq!(escape_html("compétences & été"), "compétences &amp; été");
        assert_eq!(escape_html("n∞sia 🎉"), "n∞sia 🎉");
    }
}
