use crate::core::models::{
    ConjugationClass,
    Person,
};

/// Present subjunctive endings, paradigm order. -ar verbs swap to the
/// e-set, -er/-ir to the a-set.
const PRESENT_AR: [&str; 6] = ["e", "es", "e", "emos", "éis", "en"];
const PRESENT_ER_IR: [&str; 6] = ["a", "as", "a", "amos", "áis", "an"];

pub fn present_ending(class: ConjugationClass, person: Person) -> &'static str {
    match class {
        ConjugationClass::Ar => PRESENT_AR[person.index()],
        ConjugationClass::Er | ConjugationClass::Ir => PRESENT_ER_IR[person.index()],
    }
}

/// Voseo present subjunctive ending (regional tú alternative), built on
/// the unstressed stem: hablés, comás, vivás.
pub fn voseo_present_ending(class: ConjugationClass) -> &'static str {
    match class {
        ConjugationClass::Ar => "és",
        ConjugationClass::Er | ConjugationClass::Ir => "ás",
    }
}

/// Imperfect subjunctive endings attached to the third-person-plural
/// preterite base (minus -ron). The nosotros slot additionally accents
/// the base's final vowel; the engine handles that.
const IMPERFECT_RA: [&str; 6] = ["ra", "ras", "ra", "ramos", "rais", "ran"];
const IMPERFECT_SE: [&str; 6] = ["se", "ses", "se", "semos", "seis", "sen"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImperfectSet {
    Ra,
    Se,
}

pub fn imperfect_ending(set: ImperfectSet, person: Person) -> &'static str {
    match set {
        ImperfectSet::Ra => IMPERFECT_RA[person.index()],
        ImperfectSet::Se => IMPERFECT_SE[person.index()],
    }
}
