use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

// Lowercase ASCII, Polish diacritics, digits and plain spaces survive
static DISALLOWED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-ząćęłńóśźż0-9 ]").expect("tag charset pattern is valid"));

/// Normalize a comma-separated list of tag phrases.
///
/// Each phrase is lowercased, `-`/`_` become spaces, everything outside the
/// tag charset is dropped and whitespace is collapsed. Phrases that end up
/// empty are discarded; the rest are joined with `", "` in input order.
/// `None` and `""` both give `""`. Normalizing an already normalized string
/// returns it unchanged.
pub fn normalize_tags<'a>(input: impl Into<Option<&'a str>>) -> String {
    let Some(input) = input.into() else {
        return String::new();
    };

    input
        .split(',')
        .map(normalize_tag)
        .filter(|tag| !tag.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Normalize a single tag phrase
pub fn normalize_tag(tag: &str) -> String {
    let lowered = tag.trim().to_lowercase();
    let collapsed = WHITESPACE.replace_all(&lowered, " ");
    let spaced = collapsed.replace(['-', '_'], " ");
    let filtered = DISALLOWED.replace_all(&spaced, "");

    // Stripping can leave double or edge spaces behind ("a - b", "rock!")
    WHITESPACE.replace_all(filtered.trim(), " ").into_owned()
}
