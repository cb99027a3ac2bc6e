use crate::core::{
    models::Conjugation,
    utils::{
        normalize_answer,
        strip_diacritics,
    },
};

/// Outcome of checking one submission against the engine's ground
/// truth. `accent_mismatch` is a hint-quality signal only; it never
/// makes an answer correct.
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub is_correct: bool,
    pub matched_form: Option<String>,
    pub accent_mismatch: bool,
}

/// Compare a learner's submission against the accepted forms for a
/// cell. Correctness is a diacritic-sensitive exact match after
/// lowercasing and whitespace normalization: subjunctive and indicative
/// often differ only by an accent (hable vs habló), so the accent is
/// part of the answer. A diacritic-insensitive pass runs separately so
/// the feedback layer can tell "missing accent" apart from "wrong
/// form".
pub fn validate(submitted: &str, correct: &Conjugation) -> Verdict {
    let normalized = normalize_answer(submitted);

    for form in correct.accepted_forms() {
        if normalized == normalize_answer(form) {
            return Verdict {
                is_correct: true,
                matched_form: Some(form.to_string()),
                accent_mismatch: false,
            };
        }
    }

    let stripped = strip_diacritics(&normalized);
    let accent_mismatch = correct
        .accepted_forms()
        .any(|form| stripped == strip_diacritics(&normalize_answer(form)));

    Verdict { is_correct: false, matched_form: None, accent_mismatch }
}
