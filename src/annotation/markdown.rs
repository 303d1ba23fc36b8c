use once_cell::sync::Lazy;
use regex::Regex;

static MARKDOWN_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"!\[[^\]]*\]\([^)]*\)", // images
        r"\[[^\]]*\]\([^)]*\)",  // links
        r"\*{1,3}",              // bold / italic
        r"_+",                   // underscore emphasis
        r"~{2}",                 // strikethrough
        r"`{1,3}",               // code markers
        r"(?m)^#{1,6} ",         // headers
        r"(?m)^>\s?",            // blockquotes
        r"-{2,}",                // horizontal rules
        r"\|",                   // table bars
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("markdown pattern is valid"))
    .collect()
});

/// Remove common Markdown syntax so only prose reaches the annotator.
pub fn strip_markdown(text: &str) -> String {
    let stripped = MARKDOWN_PATTERNS
        .iter()
        .fold(text.to_string(), |acc, pattern| {
            pattern.replace_all(&acc, "").into_owned()
        });
    stripped.trim().to_string()
}
