//! Queries over the workout history of a single user.
//!
//! Workouts on the same date are ordered by their position in the collection. The collection
//! keeps insertion order and edits replace workouts in place, so of two workouts on the same
//! date the one stored later is considered more recent.

use crate::{Category, Name, SetEntry, Workout, WorkoutID};

#[must_use]
pub fn latest_workout_of_category<'a, I>(
    workouts: I,
    category: Category,
    exclude: Option<WorkoutID>,
) -> Option<&'a Workout>
where
    I: IntoIterator<Item = &'a Workout>,
{
    workouts
        .into_iter()
        .filter(|w| w.category == category && Some(w.id) != exclude)
        .max_by_key(|w| w.date)
}

/// Sets of the most recent workout containing the exercise, regardless of the workout's category.
#[must_use]
pub fn latest_sets_for_exercise<'a, I>(
    workouts: I,
    exercise: &Name,
    exclude: Option<WorkoutID>,
) -> Option<&'a [SetEntry]>
where
    I: IntoIterator<Item = &'a Workout>,
{
    workouts
        .into_iter()
        .filter(|w| Some(w.id) != exclude)
        .filter_map(|w| w.exercise(exercise).map(|e| (w.date, e.sets.as_slice())))
        .max_by_key(|(date, _)| *date)
        .map(|(_, sets)| sets)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::{ExerciseEntry, Reps, Weight};

    use super::*;

    fn set(weight: f32, reps: u32) -> SetEntry {
        SetEntry::new(Weight::new(weight).unwrap(), Reps::new(reps).unwrap())
    }

    fn workout(
        id: u128,
        date: (i32, u32, u32),
        category: Category,
        exercises: &[(&str, f32)],
    ) -> Workout {
        Workout {
            id: id.into(),
            user_id: Name::new("alice").unwrap(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            category,
            exercises: exercises
                .iter()
                .map(|(name, weight)| ExerciseEntry {
                    name: Name::new(name).unwrap(),
                    sets: vec![set(*weight, 8)],
                })
                .collect(),
        }
    }

    const PULLDOWN: &str = "Тяга верхнего блока к груди";
    const BENCH_PRESS: &str = "Жим лёжа на горизонтальной скамье";

    static WORKOUTS: std::sync::LazyLock<Vec<Workout>> = std::sync::LazyLock::new(|| {
        vec![
            workout(1, (2024, 1, 1), Category::BackTriceps, &[(PULLDOWN, 40.0)]),
            workout(2, (2024, 1, 10), Category::BackTriceps, &[(PULLDOWN, 45.0)]),
            workout(3, (2024, 1, 5), Category::ChestBiceps, &[(BENCH_PRESS, 60.0)]),
            workout(4, (2024, 1, 3), Category::LegsShoulders, &[(PULLDOWN, 30.0)]),
        ]
    });

    #[rstest]
    #[case(Category::BackTriceps, None, Some(2))]
    #[case(Category::BackTriceps, Some(2), Some(1))]
    #[case(Category::ChestBiceps, None, Some(3))]
    #[case(Category::ChestBiceps, Some(3), None)]
    #[case(Category::LegsShoulders, None, Some(4))]
    fn test_latest_workout_of_category(
        #[case] category: Category,
        #[case] exclude: Option<u128>,
        #[case] expected: Option<u128>,
    ) {
        assert_eq!(
            latest_workout_of_category(WORKOUTS.iter(), category, exclude.map(WorkoutID::from))
                .map(|w| w.id),
            expected.map(WorkoutID::from)
        );
    }

    #[test]
    fn test_latest_workout_of_category_same_date() {
        let workouts = vec![
            workout(1, (2024, 1, 1), Category::ChestBiceps, &[]),
            workout(2, (2024, 1, 1), Category::ChestBiceps, &[]),
        ];
        assert_eq!(
            latest_workout_of_category(&workouts, Category::ChestBiceps, None).map(|w| w.id),
            Some(2.into())
        );
    }

    #[test]
    fn test_latest_sets_for_exercise() {
        assert_eq!(
            latest_sets_for_exercise(
                WORKOUTS.iter(),
                &Name::new("Тяга верхнего блока к груди").unwrap(),
                None
            ),
            Some([set(45.0, 8)].as_slice())
        );
    }

    #[test]
    fn test_latest_sets_for_exercise_excluding_workout() {
        assert_eq!(
            latest_sets_for_exercise(
                WORKOUTS.iter(),
                &Name::new("Тяга верхнего блока к груди").unwrap(),
                Some(2.into())
            ),
            Some([set(30.0, 8)].as_slice())
        );
    }

    #[test]
    fn test_latest_sets_for_exercise_across_categories() {
        let workouts = vec![
            workout(1, (2024, 1, 1), Category::LegsShoulders, &[("Жим штанги стоя", 35.0)]),
            workout(2, (2024, 1, 2), Category::ChestBiceps, &[("Отжимания", 0.0)]),
        ];
        assert_eq!(
            latest_sets_for_exercise(&workouts, &Name::new("Жим штанги стоя").unwrap(), None),
            Some([set(35.0, 8)].as_slice())
        );
    }

    #[test]
    fn test_latest_sets_for_exercise_same_date() {
        let workouts = vec![
            workout(1, (2024, 1, 1), Category::ChestBiceps, &[("A", 10.0)]),
            workout(2, (2024, 1, 1), Category::ChestBiceps, &[("A", 20.0)]),
        ];
        assert_eq!(
            latest_sets_for_exercise(&workouts, &Name::new("A").unwrap(), None),
            Some([set(20.0, 8)].as_slice())
        );
    }

    #[test]
    fn test_latest_sets_for_exercise_unknown() {
        assert_eq!(
            latest_sets_for_exercise(WORKOUTS.iter(), &Name::new("Шраги").unwrap(), None),
            None
        );
    }

    #[test]
    fn test_queries_are_deterministic() {
        let name = Name::new("Тяга верхнего блока к груди").unwrap();
        assert_eq!(
            latest_sets_for_exercise(WORKOUTS.iter(), &name, Some(1.into())),
            latest_sets_for_exercise(WORKOUTS.iter(), &name, Some(1.into()))
        );
    }
}
