/// Context-aware escaping for untrusted strings
pub struct Escape;

impl Escape {
    /// Escape HTML special characters as entities
    ///
    /// The five characters `& < > " '` become `&amp; &lt; &gt; &quot; &#x27;`.
    pub fn html(text: &str) -> String {
        text.chars()
            .map(|c| match c {
                '&' => "&amp;".to_string(),
                '<' => "&lt;".to_string(),
                '>' => "&gt;".to_string(),
                '"' => "&quot;".to_string(),
                '\'' => "&#x27;".to_string(),
                _ => c.to_string(),
            })
            .collect()
    }

    /// Escape a value for embedding in a JavaScript string literal
    ///
    /// Backslash, both quote characters, and control whitespace get their
    /// backslash forms; `</` becomes `<\/` so the value cannot close an
    /// inline `<script>` block.
    pub fn js_string(text: &str) -> String {
        text.replace('\\', "\\\\")
            .replace('"', "\\\"")
            .replace('\'', "\\'")
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
            .replace("</", "<\\/")
    }
}
