use std::fmt;

use chrono::{
    DateTime,
    NaiveDate,
    Utc,
};
use serde::{
    Deserialize,
    Serialize,
};

/// Grammatical person, in the canonical paradigm order used by every
/// form table in the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Person {
    Yo,
    Tu,
    El,
    Nosotros,
    Vosotros,
    Ellos,
}

impl Person {
    pub const ALL: [Person; 6] =
        [Person::Yo, Person::Tu, Person::El, Person::Nosotros, Person::Vosotros, Person::Ellos];

    /// Index into a six-slot form row.
    pub fn index(&self) -> usize {
        match self {
            Person::Yo => 0,
            Person::Tu => 1,
            Person::El => 2,
            Person::Nosotros => 3,
            Person::Vosotros => 4,
            Person::Ellos => 5,
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Person::Yo => "yo",
            Person::Tu => "tú",
            Person::El => "él/ella/usted",
            Person::Nosotros => "nosotros",
            Person::Vosotros => "vosotros",
            Person::Ellos => "ellos/ustedes",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tense {
    PresentSubjunctive,
    ImperfectSubjunctiveRa,
    ImperfectSubjunctiveSe,
    PresentPerfectSubjunctive,
    PluperfectSubjunctive,
    FutureSubjunctive,
}

impl Tense {
    /// Tenses the engine actually models. The future subjunctive is
    /// archaic and requesting it is an `UnsupportedTense` error.
    pub const SUPPORTED: [Tense; 5] = [
        Tense::PresentSubjunctive,
        Tense::ImperfectSubjunctiveRa,
        Tense::ImperfectSubjunctiveSe,
        Tense::PresentPerfectSubjunctive,
        Tense::PluperfectSubjunctive,
    ];

    pub fn is_compound(&self) -> bool {
        matches!(self, Tense::PresentPerfectSubjunctive | Tense::PluperfectSubjunctive)
    }
}

impl fmt::Display for Tense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Tense::PresentSubjunctive => "present subjunctive",
            Tense::ImperfectSubjunctiveRa => "imperfect subjunctive (-ra)",
            Tense::ImperfectSubjunctiveSe => "imperfect subjunctive (-se)",
            Tense::PresentPerfectSubjunctive => "present perfect subjunctive",
            Tense::PluperfectSubjunctive => "pluperfect subjunctive",
            Tense::FutureSubjunctive => "future subjunctive",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConjugationClass {
    Ar,
    Er,
    Ir,
}

impl ConjugationClass {
    pub fn of(infinitive: &str) -> Option<ConjugationClass> {
        if infinitive.ends_with("ar") {
            Some(ConjugationClass::Ar)
        } else if infinitive.ends_with("er") {
            Some(ConjugationClass::Er)
        } else if infinitive.ends_with("ir") || infinitive.ends_with("ír") {
            // oír, reír carry the accent on the ending itself
            Some(ConjugationClass::Ir)
        } else {
            None
        }
    }
}

/// Vowel alternation in the stressed syllable of stem-changing verbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StemChange {
    #[serde(rename = "e_ie")]
    EToIe,
    #[serde(rename = "e_i")]
    EToI,
    #[serde(rename = "o_ue")]
    OToUe,
    #[serde(rename = "o_u")]
    OToU,
    #[serde(rename = "u_ue")]
    UToUe,
}

/// Spelling adjustment at the stem/ending boundary that keeps the
/// consonant sound of the infinitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrthographicChange {
    #[serde(rename = "c_qu")]
    CToQu,
    #[serde(rename = "g_gu")]
    GToGu,
    #[serde(rename = "z_c")]
    ZToC,
    #[serde(rename = "gu_gue")]
    GuToGue,
    #[serde(rename = "g_j")]
    GToJ,
    #[serde(rename = "gu_g")]
    GuToG,
    #[serde(rename = "c_z")]
    CToZ,
}

/// Full form rows for verbs whose subjunctive cannot be derived from
/// the infinitive. Only the simple tenses live here; compound tenses
/// are always built from haber + participle.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IrregularTable {
    #[serde(default)]
    pub present: Option<[String; 6]>,
    #[serde(default)]
    pub imperfect_ra: Option<[String; 6]>,
    #[serde(default)]
    pub imperfect_se: Option<[String; 6]>,
}

impl IrregularTable {
    pub fn row(&self, tense: Tense) -> Option<&[String; 6]> {
        match tense {
            Tense::PresentSubjunctive => self.present.as_ref(),
            Tense::ImperfectSubjunctiveRa => self.imperfect_ra.as_ref(),
            Tense::ImperfectSubjunctiveSe => self.imperfect_se.as_ref(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegularityClass {
    Regular,
    StemChanging(StemChange),
    Irregular(IrregularTable),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerbEntry {
    pub infinitive: String,
    pub translation: String, // display only, never compared against
    pub regularity: RegularityClass,
    #[serde(default)]
    pub orthographic: Option<OrthographicChange>,
    #[serde(default)]
    pub yo_present: Option<String>, // the fixed -go/-zco set (digo, pongo, conozco, ...)
    #[serde(default)]
    pub preterite_ellos: Option<String>, // strong preterites (dijeron, vinieron, ...)
    #[serde(default)]
    pub past_participle: Option<String>,
    pub frequency_rank: u32,
}

impl VerbEntry {
    pub fn class(&self) -> Option<ConjugationClass> {
        ConjugationClass::of(&self.infinitive)
    }

    pub fn stem_change(&self) -> Option<StemChange> {
        match &self.regularity {
            RegularityClass::StemChanging(pattern) => Some(*pattern),
            _ => None,
        }
    }
}

/// The surface form(s) accepted for one verb/tense/person cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conjugation {
    pub primary: String,
    pub alternatives: Vec<String>,
}

impl Conjugation {
    pub fn single(primary: impl Into<String>) -> Self {
        Conjugation { primary: primary.into(), alternatives: Vec::new() }
    }

    pub fn accepted_forms(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.primary.as_str()).chain(self.alternatives.iter().map(|s| s.as_str()))
    }
}

/// Addresses one learner's review state for one verb/tense/person cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellKey {
    pub learner_id: String,
    pub infinitive: String,
    pub tense: Tense,
    pub person: Person,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewItem {
    pub cell: CellKey,
    pub easiness_factor: f64,
    pub interval_days: u32,
    pub repetition_count: u32,
    pub next_review_date: NaiveDate,
    pub last_reviewed_at: Option<DateTime<Utc>>,
}

impl ReviewItem {
    /// Lazily-created default state for a cell on first exposure: due
    /// immediately, never reviewed.
    pub fn new(cell: CellKey, today: NaiveDate) -> Self {
        ReviewItem {
            cell,
            easiness_factor: crate::srs::scheduler::INITIAL_EASINESS,
            interval_days: 0,
            repetition_count: 0,
            next_review_date: today,
            last_reviewed_at: None,
        }
    }
}

/// One submission, as reported by the exercise front end. Not persisted
/// here; only consumed when deriving a quality grade.
#[derive(Debug, Clone)]
pub struct Attempt {
    pub cell: CellKey,
    pub submitted_text: String,
    pub is_correct: bool,
    pub response_time_seconds: f64,
}
