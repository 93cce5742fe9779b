use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use log::debug;

use crate::{
    ActionError, AuthError, Category, CustomExercises, Name, User, Wizard, Workout, WorkoutError,
    WorkoutID,
};

/// Change of the application data.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Register(User),
    AddCustomExercise {
        user: Name,
        category: Category,
        name: Name,
    },
    DeleteCustomExercise {
        user: Name,
        category: Category,
        name: Name,
    },
    AddWorkout(Workout),
    ReplaceWorkout(Workout),
    DeleteWorkout {
        user: Name,
        id: WorkoutID,
    },
}

/// Root aggregate of all persisted data.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AppData {
    pub users: BTreeMap<Name, User>,
    /// Workouts of all users in insertion order.
    pub workouts: Vec<Workout>,
    pub custom_exercises: CustomExercises,
}

impl AppData {
    #[must_use]
    pub fn user(&self, login: &Name) -> Option<&User> {
        self.users.get(login)
    }

    pub fn authenticate(&self, login: &str, password_hash: &str) -> Result<&User, AuthError> {
        let login = Name::new(login).map_err(|_| AuthError::UserNotFound)?;
        let user = self.user(&login).ok_or(AuthError::UserNotFound)?;

        if !user.verify(password_hash) {
            return Err(AuthError::WrongPassword);
        }

        Ok(user)
    }

    #[must_use]
    pub fn workout(&self, id: WorkoutID) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id == id)
    }

    pub fn workouts_of<'a>(&'a self, user: &'a Name) -> impl Iterator<Item = &'a Workout> {
        self.workouts.iter().filter(move |w| w.user_id == *user)
    }

    #[must_use]
    pub fn workouts_on<'a>(&'a self, user: &'a Name, date: NaiveDate) -> Vec<&'a Workout> {
        self.workouts_of(user).filter(|w| w.date == date).collect()
    }

    /// Merged exercise list of a category for a user.
    #[must_use]
    pub fn exercises(&self, user: &Name, category: Category) -> Vec<Name> {
        self.custom_exercises.resolve(user, category)
    }

    #[must_use]
    pub fn new_wizard(&self, user: &Name, date: NaiveDate) -> Wizard {
        Wizard::new(
            date,
            Category::iter()
                .map(|c| (*c, self.exercises(user, *c)))
                .collect(),
            self.workouts_of(user).cloned().collect(),
        )
    }

    pub fn edit_wizard(&self, user: &Name, id: WorkoutID) -> Result<Wizard, WorkoutError> {
        let workout = self.owned_workout(user, id)?;
        Ok(Wizard::edit(
            workout.clone(),
            self.workouts_of(user).cloned().collect(),
        ))
    }

    /// Returns the data resulting from applying the action.
    ///
    /// The current data is left untouched, also when the action is rejected.
    pub fn apply(&self, action: Action) -> Result<AppData, ActionError> {
        let mut data = self.clone();

        match action {
            Action::Register(user) => {
                if data.users.contains_key(&user.login) {
                    return Err(AuthError::DuplicateUser(user.login).into());
                }
                debug!("registering user {}", user.login);
                data.users.insert(user.login.clone(), user);
            }
            Action::AddCustomExercise {
                user,
                category,
                name,
            } => {
                data.ensure_user(&user)?;
                data.custom_exercises.add(&user, category, name)?;
            }
            Action::DeleteCustomExercise {
                user,
                category,
                name,
            } => {
                data.custom_exercises.delete(&user, category, &name);
            }
            Action::AddWorkout(workout) => {
                data.validate_workout(&workout, None)?;
                debug!("adding workout {} of {}", workout.id, workout.user_id);
                data.workouts.push(workout);
            }
            Action::ReplaceWorkout(workout) => {
                let index = data
                    .workouts
                    .iter()
                    .position(|w| w.id == workout.id)
                    .ok_or(WorkoutError::NotFound)?;
                if data.workouts[index].user_id != workout.user_id {
                    return Err(WorkoutError::Foreign.into());
                }
                data.validate_workout(&workout, Some(&data.workouts[index]))?;
                debug!("replacing workout {} of {}", workout.id, workout.user_id);
                data.workouts[index] = workout;
            }
            Action::DeleteWorkout { user, id } => {
                if let Some(workout) = data.workout(id) {
                    if workout.user_id != user {
                        return Err(WorkoutError::Foreign.into());
                    }
                    debug!("deleting workout {id} of {user}");
                    data.workouts.retain(|w| w.id != id);
                }
            }
        }

        Ok(data)
    }

    fn ensure_user(&self, user: &Name) -> Result<(), WorkoutError> {
        if self.users.contains_key(user) {
            Ok(())
        } else {
            Err(WorkoutError::UnknownUser(user.clone()))
        }
    }

    fn owned_workout(&self, user: &Name, id: WorkoutID) -> Result<&Workout, WorkoutError> {
        let workout = self.workout(id).ok_or(WorkoutError::NotFound)?;
        if workout.user_id != *user {
            return Err(WorkoutError::Foreign);
        }
        Ok(workout)
    }

    /// Exercise names must be unique and known in the category. Names kept from the previous
    /// version of an edited workout stay valid even if they were removed from the catalog since.
    fn validate_workout(
        &self,
        workout: &Workout,
        previous: Option<&Workout>,
    ) -> Result<(), WorkoutError> {
        self.ensure_user(&workout.user_id)?;

        let mut names = HashSet::new();
        for exercise in &workout.exercises {
            if !names.insert(&exercise.name) {
                return Err(WorkoutError::DuplicateExercise(exercise.name.clone()));
            }
            let known = self.custom_exercises.contains(
                &workout.user_id,
                workout.category,
                &exercise.name,
            ) || previous.is_some_and(|p| p.exercise(&exercise.name).is_some());
            if !known {
                return Err(WorkoutError::UnknownExercise(exercise.name.clone()));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::{CatalogError, ExerciseEntry, Outcome, Reps, SetEntry, Weight};

    use super::*;

    fn name(value: &str) -> Name {
        Name::new(value).unwrap()
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    fn set(weight: f32, reps: u32) -> SetEntry {
        SetEntry::new(Weight::new(weight).unwrap(), Reps::new(reps).unwrap())
    }

    fn workout(id: u128, user: &str, day: u32, exercises: &[&str]) -> Workout {
        Workout {
            id: id.into(),
            user_id: name(user),
            date: date(day),
            category: Category::BackTriceps,
            exercises: exercises
                .iter()
                .map(|e| ExerciseEntry {
                    name: name(e),
                    sets: vec![set(40.0, 10)],
                })
                .collect(),
        }
    }

    static DATA: std::sync::LazyLock<AppData> = std::sync::LazyLock::new(|| {
        AppData::default()
            .apply(Action::Register(User::new("alice", "a").unwrap()))
            .unwrap()
            .apply(Action::Register(User::new("bob", "b").unwrap()))
            .unwrap()
            .apply(Action::AddWorkout(workout(1, "alice", 1, &["Тяга штанги в наклоне"])))
            .unwrap()
            .apply(Action::AddWorkout(workout(2, "bob", 1, &["Тяга штанги в наклоне"])))
            .unwrap()
            .apply(Action::AddWorkout(workout(3, "alice", 5, &["Тяга верхнего блока к груди"])))
            .unwrap()
    });

    #[test]
    fn test_register_duplicate_user() {
        assert_eq!(
            DATA.apply(Action::Register(User::new("alice", "other").unwrap())),
            Err(ActionError::Auth(AuthError::DuplicateUser(name("alice"))))
        );
    }

    #[rstest]
    #[case("alice", "a", Ok(()))]
    #[case("alice", "b", Err(AuthError::WrongPassword))]
    #[case("carol", "a", Err(AuthError::UserNotFound))]
    #[case("", "a", Err(AuthError::UserNotFound))]
    fn test_authenticate(
        #[case] login: &str,
        #[case] password: &str,
        #[case] expected: Result<(), AuthError>,
    ) {
        assert_eq!(DATA.authenticate(login, password).map(|_| ()), expected);
    }

    #[test]
    fn test_workouts_are_scoped_to_user() {
        assert_eq!(
            DATA.workouts_of(&name("alice"))
                .map(|w| w.id)
                .collect::<Vec<_>>(),
            vec![WorkoutID::from(1), WorkoutID::from(3)]
        );
        assert_eq!(
            DATA.workouts_on(&name("bob"), date(1))
                .iter()
                .map(|w| w.id)
                .collect::<Vec<_>>(),
            vec![WorkoutID::from(2)]
        );
        assert!(DATA.workouts_on(&name("bob"), date(5)).is_empty());
    }

    #[test]
    fn test_add_custom_exercise() {
        let data = DATA
            .apply(Action::AddCustomExercise {
                user: name("alice"),
                category: Category::LegsShoulders,
                name: name("Голень"),
            })
            .unwrap();
        assert_eq!(
            data.exercises(&name("alice"), Category::LegsShoulders)
                .last(),
            Some(&name("Голень"))
        );
        assert_eq!(data.exercises(&name("bob"), Category::LegsShoulders).len(), 4);
    }

    #[test]
    fn test_add_custom_exercise_duplicate() {
        assert_eq!(
            DATA.apply(Action::AddCustomExercise {
                user: name("alice"),
                category: Category::LegsShoulders,
                name: name("Приседания со штангой"),
            }),
            Err(ActionError::Catalog(CatalogError::DuplicateExerciseName(
                name("Приседания со штангой")
            )))
        );
        assert!(
            DATA.custom_exercises
                .of(&name("alice"), Category::LegsShoulders)
                .is_empty()
        );
    }

    #[test]
    fn test_add_custom_exercise_unknown_user() {
        assert_eq!(
            DATA.apply(Action::AddCustomExercise {
                user: name("carol"),
                category: Category::LegsShoulders,
                name: name("Голень"),
            }),
            Err(ActionError::Workout(WorkoutError::UnknownUser(name("carol"))))
        );
    }

    #[test]
    fn test_delete_custom_exercise_keeps_history() {
        let data = DATA
            .apply(Action::AddCustomExercise {
                user: name("alice"),
                category: Category::BackTriceps,
                name: name("Пуловер"),
            })
            .unwrap()
            .apply(Action::AddWorkout(workout(4, "alice", 7, &["Пуловер"])))
            .unwrap()
            .apply(Action::DeleteCustomExercise {
                user: name("alice"),
                category: Category::BackTriceps,
                name: name("Пуловер"),
            })
            .unwrap();
        assert_eq!(data.exercises(&name("alice"), Category::BackTriceps).len(), 4);
        assert_eq!(data.workout(4.into()), Some(&workout(4, "alice", 7, &["Пуловер"])));

        let mut edited = workout(4, "alice", 7, &["Пуловер"]);
        edited.exercises[0].sets.push(set(20.0, 12));
        assert!(data.apply(Action::ReplaceWorkout(edited)).is_ok());
    }

    #[rstest]
    #[case::unknown_user(
        workout(4, "carol", 7, &["Тяга штанги в наклоне"]),
        WorkoutError::UnknownUser(name("carol"))
    )]
    #[case::unknown_exercise(
        workout(4, "alice", 7, &["Приседания со штангой"]),
        WorkoutError::UnknownExercise(name("Приседания со штангой"))
    )]
    #[case::duplicate_exercise(
        workout(4, "alice", 7, &["Тяга штанги в наклоне", "Тяга штанги в наклоне"]),
        WorkoutError::DuplicateExercise(name("Тяга штанги в наклоне"))
    )]
    fn test_add_invalid_workout(#[case] workout: Workout, #[case] expected: WorkoutError) {
        assert_eq!(
            DATA.apply(Action::AddWorkout(workout)),
            Err(ActionError::Workout(expected))
        );
    }

    #[test]
    fn test_replace_workout_preserves_identity() {
        let mut wizard = DATA.edit_wizard(&name("alice"), 1.into()).unwrap();
        wizard.input_weight(0, "42.5").unwrap();
        wizard.next().unwrap();
        let Ok(Outcome::Edited(edited)) = wizard.save() else {
            panic!("unexpected outcome");
        };
        let data = DATA.apply(Action::ReplaceWorkout(edited)).unwrap();
        let matching = data
            .workouts
            .iter()
            .filter(|w| w.id == WorkoutID::from(1))
            .collect::<Vec<_>>();
        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].user_id, name("alice"));
        assert_eq!(matching[0].exercises[0].sets, vec![set(42.5, 10)]);
        assert_eq!(
            data.workouts.iter().map(|w| w.id).collect::<Vec<_>>(),
            DATA.workouts.iter().map(|w| w.id).collect::<Vec<_>>()
        );
    }

    #[rstest]
    #[case(workout(9, "alice", 1, &[]), WorkoutError::NotFound)]
    #[case(workout(2, "alice", 1, &[]), WorkoutError::Foreign)]
    fn test_replace_invalid_workout(#[case] workout: Workout, #[case] expected: WorkoutError) {
        assert_eq!(
            DATA.apply(Action::ReplaceWorkout(workout)),
            Err(ActionError::Workout(expected))
        );
    }

    #[test]
    fn test_delete_workout() {
        let data = DATA
            .apply(Action::DeleteWorkout {
                user: name("alice"),
                id: 1.into(),
            })
            .unwrap();
        assert_eq!(data.workout(1.into()), None);
        assert_eq!(data.workouts.len(), 2);
        assert_eq!(
            data.apply(Action::DeleteWorkout {
                user: name("alice"),
                id: 1.into(),
            }),
            Ok(data.clone())
        );
        assert_eq!(
            DATA.apply(Action::DeleteWorkout {
                user: name("alice"),
                id: 2.into(),
            }),
            Err(ActionError::Workout(WorkoutError::Foreign))
        );
    }

    #[test]
    fn test_cancelled_wizard_leaves_data_unchanged() {
        let before = DATA.clone();
        let mut wizard = DATA.new_wizard(&name("alice"), date(12));
        wizard.select_category(Category::BackTriceps).unwrap();
        wizard.start_capture().unwrap();
        wizard.input_weight(0, "100").unwrap();
        wizard.next().unwrap();
        wizard.cancel();
        assert_eq!(*DATA, before);
    }

    #[test]
    fn test_new_wizard_uses_history_of_user() {
        let mut wizard = DATA.new_wizard(&name("alice"), date(12));
        wizard.select_category(Category::BackTriceps).unwrap();
        wizard.start_capture().unwrap();
        assert_eq!(
            wizard.current_exercise(),
            Some(&name("Тяга верхнего блока к груди"))
        );
        assert_eq!(wizard.sets(), &[set(41.25, 10)]);
    }

    #[test]
    fn test_edit_wizard_of_foreign_workout() {
        assert!(matches!(
            DATA.edit_wizard(&name("alice"), 2.into()),
            Err(WorkoutError::Foreign)
        ));
    }
}
