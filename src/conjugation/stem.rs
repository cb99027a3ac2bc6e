use crate::core::{
    models::{
        ConjugationClass,
        StemChange,
        VerbEntry,
    },
    SubjunctError,
};

/// Infinitive minus its -ar/-er/-ir ending.
pub fn infinitive_stem(infinitive: &str) -> Result<&str, SubjunctError> {
    for suffix in ["ar", "er", "ír", "ir"] {
        if let Some(stem) = infinitive.strip_suffix(suffix) {
            return Ok(stem);
        }
    }
    Err(SubjunctError::Custom(format!("'{}' is not an -ar/-er/-ir infinitive", infinitive)))
}

/// Stem carrying the stem change, used for the stressed persons
/// (yo, tú, él, ellos) of the present subjunctive.
fn stressed_vowel(pattern: StemChange) -> (char, &'static str) {
    match pattern {
        StemChange::EToIe => ('e', "ie"),
        StemChange::EToI => ('e', "i"),
        StemChange::OToUe => ('o', "ue"),
        StemChange::OToU => ('o', "u"),
        StemChange::UToUe => ('u', "ue"),
    }
}

/// The nosotros/vosotros row of the stem-change table. -ar/-er stem
/// changers revert to the plain stem in the unstressed persons; -ir
/// verbs instead take the raised vowel (sintamos, durmamos). Encoded
/// as an explicit table because scattered conditionals are exactly how
/// piensemos/empieze-class bugs happen.
fn unstressed_vowel(pattern: StemChange, class: ConjugationClass) -> Option<(char, &'static str)> {
    match class {
        ConjugationClass::Ar | ConjugationClass::Er => None,
        ConjugationClass::Ir => match pattern {
            StemChange::EToIe | StemChange::EToI => Some(('e', "i")),
            StemChange::OToUe | StemChange::OToU => Some(('o', "u")),
            // no -ir verb alternates u/ue
            StemChange::UToUe => None,
        },
    }
}

/// Replace the last occurrence of `target` in the stem. The alternation
/// always lands on the stem's final syllable (preferir -> prefir-, not
/// prifer-).
fn swap_last_vowel(stem: &str, target: char, replacement: &str) -> String {
    match stem.rfind(target) {
        Some(pos) => {
            let mut out = String::with_capacity(stem.len() + 1);
            out.push_str(&stem[..pos]);
            out.push_str(replacement);
            out.push_str(&stem[pos + target.len_utf8()..]);
            out
        }
        None => stem.to_string(),
    }
}

/// Present subjunctive stem for the stressed persons. Derived from the
/// first-person-singular present indicative: an explicit yo override
/// (digo, pongo, conozco) minus -o when the catalog carries one,
/// otherwise the infinitive stem with the stem change applied.
pub fn stressed_stem(entry: &VerbEntry) -> Result<String, SubjunctError> {
    if let Some(yo) = &entry.yo_present {
        return yo.strip_suffix('o').map(str::to_string).ok_or_else(|| {
            SubjunctError::Custom(format!(
                "yo form '{}' of '{}' does not end in -o; verb needs a full irregular table",
                yo, entry.infinitive
            ))
        });
    }
    let stem = infinitive_stem(&entry.infinitive)?;
    Ok(match entry.stem_change() {
        Some(pattern) => {
            let (target, replacement) = stressed_vowel(pattern);
            swap_last_vowel(stem, target, replacement)
        }
        None => stem.to_string(),
    })
}

/// Present subjunctive stem for nosotros/vosotros. Verbs with an
/// irregular yo form keep that stem through the whole paradigm
/// (tengamos, digamos); stem changers follow the unstressed row.
pub fn unstressed_stem(entry: &VerbEntry, class: ConjugationClass) -> Result<String, SubjunctError> {
    if entry.yo_present.is_some() {
        return stressed_stem(entry);
    }
    let stem = infinitive_stem(&entry.infinitive)?;
    Ok(match entry.stem_change().and_then(|p| unstressed_vowel(p, class)) {
        Some((target, replacement)) => swap_last_vowel(stem, target, replacement),
        None => stem.to_string(),
    })
}

/// Third-person-plural preterite, the base for both imperfect
/// subjunctive sets. Strong preterites come from the catalog override
/// (dijeron, vinieron); everything else is derived, with the -ir
/// raised vowel (durmieron) and i -> y after a stem-final vowel
/// (leyeron, oyeron, construyeron).
pub fn preterite_ellos(entry: &VerbEntry, class: ConjugationClass) -> Result<String, SubjunctError> {
    if let Some(form) = &entry.preterite_ellos {
        return Ok(form.clone());
    }
    let stem = infinitive_stem(&entry.infinitive)?;
    match class {
        ConjugationClass::Ar => Ok(format!("{}aron", stem)),
        ConjugationClass::Er | ConjugationClass::Ir => {
            let stem = match (class, entry.stem_change()) {
                (ConjugationClass::Ir, Some(pattern)) => {
                    match unstressed_vowel(pattern, ConjugationClass::Ir) {
                        Some((target, replacement)) => swap_last_vowel(stem, target, replacement),
                        None => stem.to_string(),
                    }
                }
                _ => stem.to_string(),
            };
            // A stem-final vowel turns the ending's i into y (leyeron,
            // oyeron, construyeron) -- but not the silent u of gu/qu
            // digraphs (siguieron).
            let silent_u = stem.ends_with("gu") || stem.ends_with("qu");
            if stem.ends_with(['a', 'e', 'i', 'o', 'u']) && !silent_u {
                Ok(format!("{}yeron", stem))
            } else {
                Ok(format!("{}ieron", stem))
            }
        }
    }
}

/// Imperfect subjunctive base: preterite ellos form minus -ron.
pub fn imperfect_base(entry: &VerbEntry, class: ConjugationClass) -> Result<String, SubjunctError> {
    let preterite = preterite_ellos(entry, class)?;
    preterite.strip_suffix("ron").map(str::to_string).ok_or_else(|| {
        SubjunctError::Custom(format!(
            "preterite '{}' of '{}' does not end in -ron",
            preterite, entry.infinitive
        ))
    })
}

/// Past participle for the compound tenses. Overrides cover the
/// irregular set (dicho, hecho, visto, puesto, ...); -er/-ir stems
/// ending in a/e/o take -ído (leído, caído, oído).
pub fn past_participle(entry: &VerbEntry, class: ConjugationClass) -> Result<String, SubjunctError> {
    if let Some(form) = &entry.past_participle {
        return Ok(form.clone());
    }
    let stem = infinitive_stem(&entry.infinitive)?;
    match class {
        ConjugationClass::Ar => Ok(format!("{}ado", stem)),
        ConjugationClass::Er | ConjugationClass::Ir => {
            if stem.ends_with(['a', 'e', 'o']) {
                Ok(format!("{}ído", stem))
            } else {
                Ok(format!("{}ido", stem))
            }
        }
    }
}

/// Accent the final vowel of an imperfect base for the nosotros forms
/// (hablá-ramos, dijé-ramos, fué-semos).
pub fn accent_last_vowel(base: &str) -> String {
    let accented = |c: char| match c {
        'a' => Some('á'),
        'e' => Some('é'),
        'i' => Some('í'),
        'o' => Some('ó'),
        'u' => Some('ú'),
        _ => None,
    };
    match base.char_indices().rev().find_map(|(i, c)| accented(c).map(|a| (i, c, a))) {
        Some((pos, plain, accent)) => {
            let mut out = String::with_capacity(base.len() + 1);
            out.push_str(&base[..pos]);
            out.push(accent);
            out.push_str(&base[pos + plain.len_utf8()..]);
            out
        }
        None => base.to_string(),
    }
}
