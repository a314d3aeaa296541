// ABOUTME: Deterministic UUID v5 identifiers for plan days, cycles and personal records
// ABOUTME: Identical inputs always produce identical ids so repeated generation is reproducible

use chrono::NaiveDate;
use periodize_core::constants::id_namespaces::{PLAN_DAY, PR_RECORD, TRAINING_CYCLE};
use uuid::Uuid;

/// Id of a plan day
#[must_use]
pub fn plan_day_id(user_id: Uuid, date: NaiveDate, day_index: u32) -> Uuid {
    Uuid::new_v5(&PLAN_DAY, format!("{user_id}:{date}:{day_index}").as_bytes())
}

/// Id of a training cycle
#[must_use]
pub fn training_cycle_id(user_id: Uuid, start_date: NaiveDate, weeks: u32) -> Uuid {
    Uuid::new_v5(
        &TRAINING_CYCLE,
        format!("{user_id}:{start_date}:{weeks}").as_bytes(),
    )
}

/// Id of a personal record set by the set at `set_position` of a session
#[must_use]
pub fn pr_record_id(user_id: Uuid, session_id: Uuid, exercise_id: &str, set_position: usize) -> Uuid {
    Uuid::new_v5(
        &PR_RECORD,
        format!("{user_id}:{session_id}:{exercise_id}:{set_position}").as_bytes(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_stable_and_distinct() {
        let user = Uuid::nil();
        let date = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
        assert_eq!(plan_day_id(user, date, 0), plan_day_id(user, date, 0));
        assert_ne!(plan_day_id(user, date, 0), plan_day_id(user, date, 1));
        assert_ne!(plan_day_id(user, date, 4), training_cycle_id(user, date, 4));
    }
}
