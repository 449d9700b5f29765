//! Savings goals and the one-shot completion signal.

use uuid::Uuid;

use crate::domain::{Goal, Profile};

/// Emitted when a contribution first pushes a goal past its target.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalCompleted {
    pub goal_id: Uuid,
    pub name: String,
    pub target: f64,
    pub saved: f64,
}

pub struct GoalService;

impl GoalService {
    /// Appends a new goal with nothing saved yet.
    pub fn add(profile: &Profile, name: impl Into<String>, target: f64) -> Profile {
        let mut updated = profile.clone();
        updated.goals.push(Goal::new(name, target));
        updated
    }

    /// Increases the saved amount of the goal identified by `goal_id`.
    ///
    /// Unknown ids leave the profile unchanged. The completion signal is
    /// returned only for the contribution that first makes
    /// `saved >= target`; later contributions to a completed goal stay
    /// silent.
    pub fn contribute(
        profile: &Profile,
        goal_id: Uuid,
        amount: f64,
    ) -> (Profile, Option<GoalCompleted>) {
        let mut updated = profile.clone();
        let mut completed = None;

        if let Some(goal) = updated.goals.iter_mut().find(|goal| goal.id == goal_id) {
            let previously_reached = goal.is_reached();
            goal.saved += amount;
            if goal.is_reached() && !previously_reached {
                completed = Some(GoalCompleted {
                    goal_id: goal.id,
                    name: goal.name.clone(),
                    target: goal.target,
                    saved: goal.saved,
                });
            }
        }

        (updated, completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_with_goal(target: f64, saved: f64) -> (Profile, Uuid) {
        let profile = GoalService::add(&Profile::new("Maya"), "Bike", target);
        let goal_id = profile.goals[0].id;
        let (profile, _) = GoalService::contribute(&profile, goal_id, saved);
        (profile, goal_id)
    }

    #[test]
    fn add_appends_in_insertion_order() {
        let profile = GoalService::add(&Profile::new("Maya"), "Bike", 120.0);
        let profile = GoalService::add(&profile, "Concert", 60.0);
        let names: Vec<&str> = profile.goals.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, ["Bike", "Concert"]);
        assert!(profile.goals.iter().all(|g| g.saved == 0.0));
    }

    #[test]
    fn completion_fires_exactly_once_on_the_crossing_contribution() {
        let (profile, goal_id) = profile_with_goal(50.0, 40.0);
        assert_eq!(profile.goals[0].saved, 40.0);

        let (profile, completed) = GoalService::contribute(&profile, goal_id, 10.0);
        assert_eq!(profile.goals[0].saved, 50.0);
        let completed = completed.expect("crossing contribution signals completion");
        assert_eq!(completed.goal_id, goal_id);
        assert_eq!(completed.saved, 50.0);

        let (profile, completed) = GoalService::contribute(&profile, goal_id, 5.0);
        assert_eq!(profile.goals[0].saved, 55.0);
        assert!(completed.is_none(), "no re-fire after completion");
    }

    #[test]
    fn contribution_to_unknown_goal_is_a_no_op() {
        let (profile, _) = profile_with_goal(50.0, 10.0);
        let (unchanged, completed) = GoalService::contribute(&profile, Uuid::new_v4(), 25.0);
        assert_eq!(unchanged, profile);
        assert!(completed.is_none());
    }

    #[test]
    fn saved_never_decreases_across_contributions() {
        let (mut profile, goal_id) = profile_with_goal(100.0, 0.0);
        let mut last = profile.goals[0].saved;
        for amount in [5.0, 0.0, 30.0, 70.0, 1.0] {
            let (next, _) = GoalService::contribute(&profile, goal_id, amount);
            assert!(next.goals[0].saved >= last);
            last = next.goals[0].saved;
            profile = next;
        }
    }
}
