use chrono::NaiveDate;
use derive_more::Deref;
use uuid::Uuid;

use crate::{Category, Name, SetEntry};

#[derive(Deref, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WorkoutID(Uuid);

impl WorkoutID {
    #[must_use]
    pub fn new_random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl From<Uuid> for WorkoutID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for WorkoutID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

impl std::fmt::Display for WorkoutID {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseEntry {
    pub name: Name,
    pub sets: Vec<SetEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    pub id: WorkoutID,
    pub user_id: Name,
    pub date: NaiveDate,
    pub category: Category,
    pub exercises: Vec<ExerciseEntry>,
}

impl Workout {
    #[must_use]
    pub fn exercise(&self, name: &Name) -> Option<&ExerciseEntry> {
        self.exercises.iter().find(|e| e.name == *name)
    }
}

/// Result of a completed entry wizard that has not been assigned an identity yet.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutDraft {
    pub date: NaiveDate,
    pub category: Category,
    pub exercises: Vec<ExerciseEntry>,
}

impl WorkoutDraft {
    #[must_use]
    pub fn into_workout(self, id: WorkoutID, user_id: Name) -> Workout {
        Workout {
            id,
            user_id,
            date: self.date,
            category: self.category,
            exercises: self.exercises,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{Reps, Weight};

    use super::*;

    fn set(weight: f32, reps: u32) -> SetEntry {
        SetEntry::new(Weight::new(weight).unwrap(), Reps::new(reps).unwrap())
    }

    #[test]
    fn test_workout_id_new_random() {
        assert_ne!(WorkoutID::new_random(), WorkoutID::new_random());
        assert_ne!(WorkoutID::new_random(), WorkoutID::default());
    }

    #[test]
    fn test_workout_id_from_u128() {
        assert_eq!(
            WorkoutID::from(1).to_string(),
            "00000000-0000-0000-0000-000000000001"
        );
    }

    #[test]
    fn test_workout_exercise() {
        let workout = Workout {
            id: 1.into(),
            user_id: Name::new("alice").unwrap(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            category: Category::BackTriceps,
            exercises: vec![
                ExerciseEntry {
                    name: Name::new("A").unwrap(),
                    sets: vec![set(50.0, 8), set(50.0, 8)],
                },
                ExerciseEntry {
                    name: Name::new("B").unwrap(),
                    sets: vec![set(20.0, 12)],
                },
            ],
        };
        assert_eq!(
            workout
                .exercise(&Name::new("B").unwrap())
                .map(|e| e.sets.len()),
            Some(1)
        );
        assert_eq!(workout.exercise(&Name::new("C").unwrap()), None);
    }

    #[test]
    fn test_workout_draft_into_workout() {
        let draft = WorkoutDraft {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            category: Category::ChestBiceps,
            exercises: vec![],
        };
        let workout = draft.into_workout(7.into(), Name::new("bob").unwrap());
        assert_eq!(workout.id, WorkoutID::from(7));
        assert_eq!(workout.user_id, Name::new("bob").unwrap());
        assert_eq!(workout.category, Category::ChestBiceps);
    }
}
