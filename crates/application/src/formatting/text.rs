use fancy_regex::Regex;
use std::sync::LazyLock;

static BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("blank line pattern is valid"));

/// `"safe_search-enabled"` -> `"Safe Search Enabled"`
pub fn capitalize_words(text: &str) -> String {
    text.split([' ', '-', '_'])
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Splits a free-form address list on separators and newlines, dropping empty items.
pub fn normalize_textarea(text: &str) -> Vec<String> {
    text.split([';', ',', ' ', '\n'])
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Drops a leading newline and collapses runs of blank lines in a rules editor.
pub fn normalize_rules_textarea(text: &str) -> String {
    let trimmed = text.strip_prefix('\n').unwrap_or(text);
    BLANK_LINES.replace_all(trimmed, "\n").into_owned()
}

/// `path?key=value&...` with form-urlencoded parameters in the given order
pub fn get_path_with_query_string(path: &str, params: &[(String, String)]) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        .finish();
    format!("{}?{}", path, query)
}
