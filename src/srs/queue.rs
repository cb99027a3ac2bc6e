use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::{
    catalog::VerbCatalog,
    core::models::ReviewItem,
};

/// How many previously-reviewed cells go out between two never-reviewed
/// ones when both are waiting.
const NEW_ITEM_STRIDE: usize = 2;

/// Pick and order the cells a learner should see next.
///
/// Reviewed cells filter to `next_review_date <= today` and sort most
/// overdue first, weakest easiness breaking ties. Cells that have never
/// been reviewed are due immediately, but instead of dumping a new
/// verb's whole paradigm at the top of the session they are taken one
/// cell per verb in frequency-rank order and interleaved into the
/// reviewed stream.
pub fn select_due<'a>(
    items: &'a [ReviewItem],
    catalog: &VerbCatalog,
    today: NaiveDate,
    limit: usize,
) -> Vec<&'a ReviewItem> {
    let mut reviewed: Vec<&ReviewItem> = Vec::new();
    let mut fresh: Vec<&ReviewItem> = Vec::new();

    for item in items {
        if item.last_reviewed_at.is_none() {
            fresh.push(item);
        } else if item.next_review_date <= today {
            reviewed.push(item);
        }
    }

    reviewed.sort_by(|a, b| {
        let overdue_a = (today - a.next_review_date).num_days();
        let overdue_b = (today - b.next_review_date).num_days();
        overdue_b
            .cmp(&overdue_a)
            .then_with(|| a.easiness_factor.total_cmp(&b.easiness_factor))
    });

    let fresh = order_fresh(fresh, catalog);
    let mut queue = interleave(reviewed, fresh);
    queue.truncate(limit);
    queue
}

/// Round-robin new cells one per verb, verbs in frequency-rank order,
/// so six forms of the same new verb never arrive as a block.
fn order_fresh<'a>(fresh: Vec<&'a ReviewItem>, catalog: &VerbCatalog) -> Vec<&'a ReviewItem> {
    // BTreeMap keyed by (rank, infinitive) keeps the verb order stable.
    let mut by_verb: BTreeMap<(u32, String), Vec<&ReviewItem>> = BTreeMap::new();
    for item in fresh {
        let rank = catalog.frequency_rank(&item.cell.infinitive);
        by_verb.entry((rank, item.cell.infinitive.clone())).or_default().push(item);
    }

    let mut lanes: Vec<Vec<&ReviewItem>> = by_verb.into_values().collect();
    let mut ordered = Vec::new();
    let mut round = 0;
    loop {
        let mut took_any = false;
        for lane in &mut lanes {
            if let Some(item) = lane.get(round) {
                ordered.push(*item);
                took_any = true;
            }
        }
        if !took_any {
            break;
        }
        round += 1;
    }
    ordered
}

fn interleave<'a>(
    reviewed: Vec<&'a ReviewItem>,
    fresh: Vec<&'a ReviewItem>,
) -> Vec<&'a ReviewItem> {
    let mut queue = Vec::with_capacity(reviewed.len() + fresh.len());
    let mut fresh_iter = fresh.into_iter();

    for (i, item) in reviewed.iter().enumerate() {
        queue.push(*item);
        if (i + 1) % NEW_ITEM_STRIDE == 0 {
            if let Some(new_item) = fresh_iter.next() {
                queue.push(new_item);
            }
        }
    }
    queue.extend(fresh_iter);
    queue
}

#[cfg(test)]
mod tests {
    use chrono::{
        Duration,
        NaiveDate,
        TimeZone,
        Utc,
    };

    use super::*;
    use crate::core::models::{
        CellKey,
        Person,
        ReviewItem,
        Tense,
    };

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
    }

    fn key(infinitive: &str, person: Person) -> CellKey {
        CellKey {
            learner_id: "learner-1".to_string(),
            infinitive: infinitive.to_string(),
            tense: Tense::PresentSubjunctive,
            person,
        }
    }

    fn reviewed_item(infinitive: &str, person: Person, due: NaiveDate, ef: f64) -> ReviewItem {
        ReviewItem {
            cell: key(infinitive, person),
            easiness_factor: ef,
            interval_days: 6,
            repetition_count: 2,
            next_review_date: due,
            last_reviewed_at: Some(Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()),
        }
    }

    fn fresh_item(infinitive: &str, person: Person) -> ReviewItem {
        ReviewItem::new(key(infinitive, person), today())
    }

    #[test]
    fn most_overdue_first_weakest_breaks_ties() {
        let catalog = VerbCatalog::load_default().unwrap();
        let items = vec![
            reviewed_item("hablar", Person::Yo, today() - Duration::days(1), 2.5),
            reviewed_item("comer", Person::Yo, today() - Duration::days(5), 2.5),
            reviewed_item("vivir", Person::Yo, today() - Duration::days(5), 1.7),
            reviewed_item("pensar", Person::Yo, today() + Duration::days(3), 1.3),
        ];
        let queue = select_due(&items, &catalog, today(), 10);
        let order: Vec<&str> =
            queue.iter().map(|item| item.cell.infinitive.as_str()).collect();
        // pensar is not due yet; vivir wins the 5-day tie on weaker EF
        assert_eq!(order, vec!["vivir", "comer", "hablar"]);
    }

    #[test]
    fn fresh_cells_interleave_one_verb_at_a_time() {
        let catalog = VerbCatalog::load_default().unwrap();
        let items = vec![
            reviewed_item("comer", Person::Yo, today() - Duration::days(4), 2.5),
            reviewed_item("comer", Person::Tu, today() - Duration::days(3), 2.5),
            reviewed_item("comer", Person::El, today() - Duration::days(2), 2.5),
            reviewed_item("comer", Person::Nosotros, today() - Duration::days(1), 2.5),
            // ser outranks hablar, so its cells lead each round
            fresh_item("hablar", Person::Yo),
            fresh_item("hablar", Person::Tu),
            fresh_item("ser", Person::Yo),
            fresh_item("ser", Person::Tu),
        ];
        let queue = select_due(&items, &catalog, today(), 10);
        let order: Vec<(&str, Person)> = queue
            .iter()
            .map(|item| (item.cell.infinitive.as_str(), item.cell.person))
            .collect();
        assert_eq!(
            order,
            vec![
                ("comer", Person::Yo),
                ("comer", Person::Tu),
                ("ser", Person::Yo),
                ("comer", Person::El),
                ("comer", Person::Nosotros),
                ("hablar", Person::Yo),
                ("ser", Person::Tu),
                ("hablar", Person::Tu),
            ]
        );
    }

    #[test]
    fn limit_truncates() {
        let catalog = VerbCatalog::load_default().unwrap();
        let items: Vec<ReviewItem> = Person::ALL
            .iter()
            .map(|person| reviewed_item("hablar", *person, today() - Duration::days(1), 2.5))
            .collect();
        assert_eq!(select_due(&items, &catalog, today(), 4).len(), 4);
    }

    #[test]
    fn all_fresh_queue_round_robins_by_rank() {
        let catalog = VerbCatalog::load_default().unwrap();
        let items = vec![
            fresh_item("hablar", Person::Yo),
            fresh_item("ser", Person::Yo),
            fresh_item("ser", Person::Tu),
        ];
        let queue = select_due(&items, &catalog, today(), 10);
        let order: Vec<(&str, Person)> = queue
            .iter()
            .map(|item| (item.cell.infinitive.as_str(), item.cell.person))
            .collect();
        assert_eq!(
            order,
            vec![("ser", Person::Yo), ("hablar", Person::Yo), ("ser", Person::Tu)]
        );
    }
}
