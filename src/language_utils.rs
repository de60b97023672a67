use isolang::Language;

/// Language code utilities
///
/// Column suffixes are free-form 2-10 character codes, so validation here
/// is deliberately loose: anything word-shaped is accepted as a code for
/// translation purposes, and ISO 639 lookup is only used to show a
/// human-readable name next to a code when one exists.
/// True when the string is shaped like a language code usable in a column
/// suffix: 2 to 10 word characters or hyphens.
pub fn is_code_shaped(code: &str) -> bool {
    let trimmed = code.trim();
    (2..=10).contains(&trimmed.len())
        && trimmed.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_')
}

/// Get the English language name for an ISO 639-1/639-3 code, if known
pub fn language_name(code: &str) -> Option<String> {
    let normalized = code.trim().to_lowercase();

    // Region suffixes like "pt-BR" resolve through their primary subtag
    let primary = normalized.split('-').next().unwrap_or(&normalized);

    let language = match primary.len() {
        2 => Language::from_639_1(primary),
        3 => Language::from_639_3(primary),
        _ => None,
    };
    language.map(|l| l.to_name().to_string())
}

/// Render a code for display, with the language name attached when known:
/// "sk" -> "sk (Slovak)", "xx" -> "xx"
pub fn describe_code(code: &str) -> String {
    match language_name(code) {
        Some(name) => format!("{} ({})", code, name),
        None => code.to_string(),
    }
}
