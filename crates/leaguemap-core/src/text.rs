// crates/leaguemap-core/src/text.rs

/// Convert a string into a folded key suitable for comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Be’er Sheva` -> `Be'er Sheva`)
/// 2\) Normalize to lowercase
///
/// # Examples
///
/// ```rust
/// use leaguemap_core::text::fold_key;
///
/// assert_eq!(fold_key("Ness Ziōna"), "ness ziona");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Compares two strings for equality after Unicode folding and normalization.
///
/// ```rust
/// use leaguemap_core::text::equals_folded;
///
/// assert!(equals_folded("HAIFA", "haifa"));
/// assert!(!equals_folded("Holon", "Afula"));
/// ```
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

/// Escapes text placed into popup and tooltip markup.
///
/// Leaflet treats popup/tooltip strings as HTML.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Makes serialized JSON safe to inline inside a `<script>` element.
///
/// `serde_json` output only contains `<` inside strings, so replacing it with
/// the `\u003c` escape keeps the JSON valid and rules out an early `</script>`.
pub fn escape_script(json: &str) -> String {
    json.replace('<', "\\u003c")
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029")
}
