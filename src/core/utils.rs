/// Lowercase, trim, and collapse internal whitespace. Applied to a
/// submission before any comparison.
pub fn normalize_answer(text: &str) -> String {
    text.trim().to_lowercase().split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Replace accented vowels with their bare forms for the "close match"
/// hint signal. ñ is a letter of its own, not an accented n, so it is
/// left alone.
pub fn strip_diacritics(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            'á' => 'a',
            'é' => 'e',
            'í' => 'i',
            'ó' => 'o',
            'ú' => 'u',
            'ü' => 'u',
            _ => c,
        })
        .collect()
}
