use chrono::{
    DateTime,
    Duration,
    Utc,
};

use crate::core::{
    models::ReviewItem,
    SubjunctError,
};

pub const INITIAL_EASINESS: f64 = 2.5;
pub const MIN_EASINESS: f64 = 1.3;

/// Quality grades below this reset the repetition streak.
pub const PASSING_QUALITY: u8 = 3;

/// SM-2 transition: take a cell's prior state and a 0-5 quality grade,
/// return the next state. Callers clamp quality before calling;
/// anything above 5 is rejected.
///
/// A failed recall resets the streak to a 1-day interval no matter how
/// long it was. That cliff is the intended SM-2 shape, not something to
/// smooth over.
pub fn schedule(
    item: &ReviewItem,
    quality: u8,
    now: DateTime<Utc>,
) -> Result<ReviewItem, SubjunctError> {
    if quality > 5 {
        return Err(SubjunctError::InvalidQuality(quality));
    }
    let today = now.date_naive();
    let mut next = item.clone();

    if quality < PASSING_QUALITY {
        next.repetition_count = 0;
        next.interval_days = 1;
        // easiness untouched on failure
    } else {
        next.repetition_count = item.repetition_count + 1;
        next.interval_days = match next.repetition_count {
            1 => 1,
            2 => 6,
            // prior easiness, before this review's adjustment
            _ => (item.interval_days as f64 * item.easiness_factor).round() as u32,
        };
        let shortfall = (5 - quality) as f64;
        let adjusted = item.easiness_factor + (0.1 - shortfall * (0.08 + shortfall * 0.02));
        next.easiness_factor = adjusted.max(MIN_EASINESS);
    }

    next.next_review_date = today + Duration::days(next.interval_days as i64);
    next.last_reviewed_at = Some(now);
    Ok(next)
}

/// Map a validated attempt onto the 0-5 grade the scheduler consumes:
/// correctness decides pass/fail, latency scales within each band.
pub fn quality_from_attempt(is_correct: bool, response_time_seconds: f64) -> u8 {
    if is_correct {
        if response_time_seconds < 5.0 {
            5
        } else if response_time_seconds < 15.0 {
            4
        } else {
            3
        }
    } else if response_time_seconds < 15.0 {
        2
    } else {
        1
    }
}
