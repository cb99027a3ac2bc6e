use super::{
    endings::{
        imperfect_ending,
        present_ending,
        voseo_present_ending,
        ImperfectSet,
    },
    orthography,
    stem,
};
use crate::{
    catalog::VerbCatalog,
    core::{
        models::{
            Conjugation,
            ConjugationClass,
            IrregularTable,
            Person,
            RegularityClass,
            Tense,
            VerbEntry,
        },
        SubjunctError,
    },
};

/// Derives subjunctive surface forms from catalog entries. Borrows the
/// catalog because compound tenses recurse into the auxiliary haber.
/// Pure: no interior state, identical inputs give identical output.
pub struct ConjugationEngine<'a> {
    catalog: &'a VerbCatalog,
}

impl<'a> ConjugationEngine<'a> {
    pub fn new(catalog: &'a VerbCatalog) -> Self {
        ConjugationEngine { catalog }
    }

    /// Ground truth for one verb/tense/person cell: the canonical form
    /// plus any accepted alternative spellings (-se counterparts,
    /// regional voseo).
    pub fn conjugate(
        &self,
        infinitive: &str,
        tense: Tense,
        person: Person,
    ) -> Result<Conjugation, SubjunctError> {
        let entry = self
            .catalog
            .get(infinitive)
            .ok_or_else(|| SubjunctError::UnknownVerb(infinitive.to_string()))?;
        self.conjugate_entry(entry, tense, person)
    }

    pub fn conjugate_entry(
        &self,
        entry: &VerbEntry,
        tense: Tense,
        person: Person,
    ) -> Result<Conjugation, SubjunctError> {
        let class = entry.class().ok_or_else(|| {
            SubjunctError::Custom(format!("'{}' has no conjugation class", entry.infinitive))
        })?;

        match tense {
            Tense::FutureSubjunctive => Err(SubjunctError::UnsupportedTense(tense)),
            Tense::PresentPerfectSubjunctive => {
                self.compound(entry, class, Tense::PresentSubjunctive, person)
            }
            Tense::PluperfectSubjunctive => {
                self.compound(entry, class, Tense::ImperfectSubjunctiveRa, person)
            }
            Tense::PresentSubjunctive
            | Tense::ImperfectSubjunctiveRa
            | Tense::ImperfectSubjunctiveSe => match &entry.regularity {
                RegularityClass::Irregular(table) => {
                    self.from_table(entry, table, tense, person)
                }
                _ => match tense {
                    Tense::PresentSubjunctive => self.present(entry, class, person),
                    Tense::ImperfectSubjunctiveRa => {
                        self.imperfect(entry, class, ImperfectSet::Ra, person)
                    }
                    _ => self.imperfect(entry, class, ImperfectSet::Se, person),
                },
            },
        }
    }

    fn present(
        &self,
        entry: &VerbEntry,
        class: ConjugationClass,
        person: Person,
    ) -> Result<Conjugation, SubjunctError> {
        let stem = match person {
            Person::Nosotros | Person::Vosotros => stem::unstressed_stem(entry, class)?,
            _ => stem::stressed_stem(entry)?,
        };
        let primary = orthography::join(&stem, present_ending(class, person), entry.orthographic);

        let mut alternatives = Vec::new();
        if person == Person::Tu {
            // Voseo regional variant, built on the unchanged stem.
            let vos_stem = stem::unstressed_stem(entry, class)?;
            alternatives.push(orthography::join(
                &vos_stem,
                voseo_present_ending(class),
                entry.orthographic,
            ));
        }
        Ok(Conjugation { primary, alternatives })
    }

    fn imperfect(
        &self,
        entry: &VerbEntry,
        class: ConjugationClass,
        set: ImperfectSet,
        person: Person,
    ) -> Result<Conjugation, SubjunctError> {
        let base = stem::imperfect_base(entry, class)?;
        let other = match set {
            ImperfectSet::Ra => ImperfectSet::Se,
            ImperfectSet::Se => ImperfectSet::Ra,
        };
        // Both historic sets are accepted for the same cell.
        Ok(Conjugation {
            primary: attach_imperfect(&base, set, person),
            alternatives: vec![attach_imperfect(&base, other, person)],
        })
    }

    /// Compound tense: conjugated haber + past participle. The
    /// auxiliary's alternatives (hubiera/hubiese) carry through.
    fn compound(
        &self,
        entry: &VerbEntry,
        class: ConjugationClass,
        aux_tense: Tense,
        person: Person,
    ) -> Result<Conjugation, SubjunctError> {
        let aux = self.conjugate("haber", aux_tense, person)?;
        let participle = stem::past_participle(entry, class)?;
        Ok(Conjugation {
            primary: format!("{} {}", aux.primary, participle),
            alternatives: aux
                .alternatives
                .iter()
                .map(|form| format!("{} {}", form, participle))
                .collect(),
        })
    }

    /// Irregular verbs bypass derivation: the form comes straight from
    /// the override table, and a missing cell is a data-integrity
    /// error, never a guess.
    fn from_table(
        &self,
        entry: &VerbEntry,
        table: &IrregularTable,
        tense: Tense,
        person: Person,
    ) -> Result<Conjugation, SubjunctError> {
        let missing = || SubjunctError::IncompleteIrregularData {
            infinitive: entry.infinitive.clone(),
            tense,
            person,
        };
        let row = table.row(tense).ok_or_else(&missing)?;
        let primary = row[person.index()].clone();
        if primary.is_empty() {
            return Err(missing());
        }

        let other = match tense {
            Tense::ImperfectSubjunctiveRa => table.row(Tense::ImperfectSubjunctiveSe),
            Tense::ImperfectSubjunctiveSe => table.row(Tense::ImperfectSubjunctiveRa),
            _ => None,
        };
        let alternatives = other
            .map(|row| row[person.index()].clone())
            .filter(|form| !form.is_empty())
            .into_iter()
            .collect();
        Ok(Conjugation { primary, alternatives })
    }
}

fn attach_imperfect(base: &str, set: ImperfectSet, person: Person) -> String {
    // Nosotros stresses the syllable before the ending: habláramos.
    if person == Person::Nosotros {
        format!("{}{}", stem::accent_last_vowel(base), imperfect_ending(set, person))
    } else {
        format!("{}{}", base, imperfect_ending(set, person))
    }
}
