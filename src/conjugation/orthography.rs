use crate::core::models::OrthographicChange;

/// Join a stem and an ending, applying the verb's spelling rule at the
/// boundary. Each rule fires only when the ending opens with the vowel
/// that would otherwise shift the consonant sound: c/g/z/gu adjust
/// before e (busque, llegue, empiece, averigüe) and g/gu/c adjust
/// before a (escoja, sigamos, venza). Everything else concatenates
/// untouched.
pub fn join(stem: &str, ending: &str, pattern: Option<OrthographicChange>) -> String {
    let Some(pattern) = pattern else {
        return format!("{}{}", stem, ending);
    };
    let before_e = ending.starts_with(['e', 'é']);
    let before_a = ending.starts_with(['a', 'á']);

    let adjusted = match pattern {
        OrthographicChange::CToQu if before_e => replace_suffix(stem, "c", "qu"),
        OrthographicChange::GToGu if before_e => replace_suffix(stem, "g", "gu"),
        OrthographicChange::ZToC if before_e => replace_suffix(stem, "z", "c"),
        OrthographicChange::GuToGue if before_e => replace_suffix(stem, "gu", "gü"),
        OrthographicChange::GToJ if before_a => replace_suffix(stem, "g", "j"),
        OrthographicChange::GuToG if before_a => replace_suffix(stem, "gu", "g"),
        OrthographicChange::CToZ if before_a => replace_suffix(stem, "c", "z"),
        _ => None,
    };

    match adjusted {
        Some(stem) => format!("{}{}", stem, ending),
        None => format!("{}{}", stem, ending),
    }
}

fn replace_suffix(stem: &str, suffix: &str, replacement: &str) -> Option<String> {
    stem.strip_suffix(suffix).map(|base| format!("{}{}", base, replacement))
}
