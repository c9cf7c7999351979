//! Goal operations.
//!
//! Goals are append-only: they can be added and their completion toggled,
//! but no delete operation exists. Adding with a blank title is a silent
//! no-op.

use chrono::{Days, NaiveDate};

use crate::notes::next_id;
use crate::store::{Goal, GoalId, StudyStore};

/// Deadline applied when the caller leaves it out: one week from today.
const DEFAULT_DEADLINE_DAYS: u64 = 7;

/// Append a new goal. Returns the new id, or `None` when the title is
/// blank and the collection was left unchanged.
pub fn add(
    store: &mut StudyStore,
    title: &str,
    deadline: Option<NaiveDate>,
    today: NaiveDate,
) -> Option<GoalId> {
    if title.trim().is_empty() {
        return None;
    }

    let deadline = deadline.unwrap_or_else(|| {
        today
            .checked_add_days(Days::new(DEFAULT_DEADLINE_DAYS))
            .unwrap_or(today)
    });
    let id = next_id(store.goals().iter().map(|g| g.id));
    let mut goals = store.goals().to_vec();
    goals.push(Goal {
        id,
        title: title.to_string(),
        completed: false,
        deadline,
    });
    store.replace_goals(goals);
    Some(id)
}

/// Flip `completed` on the goal with the given id. An unknown id leaves
/// the collection unchanged; returns whether a goal was found.
pub fn toggle(store: &mut StudyStore, id: GoalId) -> bool {
    let mut found = false;
    let goals = store
        .goals()
        .iter()
        .map(|goal| {
            if goal.id == id {
                found = true;
                Goal {
                    completed: !goal.completed,
                    ..goal.clone()
                }
            } else {
                goal.clone()
            }
        })
        .collect();
    store.replace_goals(goals);
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 20).unwrap()
    }

    #[test]
    fn add_appends_with_default_deadline() {
        let mut store = StudyStore::seeded();
        let id = add(&mut store, "Finish thesis chapter", None, today()).unwrap();

        assert_eq!(store.goals().len(), 3);
        let goal = store.goals().last().unwrap();
        assert_eq!(goal.id, id);
        assert!(!goal.completed);
        assert_eq!(
            goal.deadline,
            NaiveDate::from_ymd_opt(2024, 1, 27).unwrap()
        );
    }

    #[test]
    fn add_honors_explicit_deadline() {
        let mut store = StudyStore::new();
        let deadline = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        add(&mut store, "Read two papers", Some(deadline), today()).unwrap();
        assert_eq!(store.goals()[0].deadline, deadline);
    }

    #[test]
    fn blank_title_is_a_no_op() {
        let mut store = StudyStore::seeded();
        let before = store.goals().to_vec();
        assert!(add(&mut store, "   ", None, today()).is_none());
        assert_eq!(store.goals(), before.as_slice());
    }

    #[test]
    fn toggle_twice_restores_original_value() {
        let mut store = StudyStore::seeded();
        let original = store.goals()[0].completed;

        assert!(toggle(&mut store, 1));
        assert_eq!(store.goals()[0].completed, !original);
        assert!(toggle(&mut store, 1));
        assert_eq!(store.goals()[0].completed, original);
    }

    #[test]
    fn toggle_unknown_id_leaves_collection_unchanged() {
        let mut store = StudyStore::seeded();
        let before = store.goals().to_vec();
        assert!(!toggle(&mut store, 999));
        assert_eq!(store.goals(), before.as_slice());
    }
}
