use chrono::NaiveDate;
use log::{debug, error};

use crate::{
    Action, AppData, AuthError, Category, Name, Outcome, ReadError, ServiceError, User, Wizard,
    Workout, WorkoutID, WriteError,
};

pub trait DataRepository {
    fn read_data(&self) -> Result<AppData, ReadError>;
    fn write_data(&self, data: &AppData) -> Result<(), WriteError>;
}

pub trait SessionRepository {
    fn read_session(&self) -> Result<Option<Name>, ReadError>;
    fn write_session(&self, login: &Name) -> Result<(), WriteError>;
    fn delete_session(&self) -> Result<(), WriteError>;
}

macro_rules! log_on_error {
    ($result: expr, $action: literal, $entity: literal) => {{
        let result = $result;
        if let Err(ref err) = result {
            error!("failed to {} {}: {err}", $action, $entity);
        }
        result
    }};
}

/// Entry point for all user actions.
///
/// The data is loaded once and every change is written back as a whole before the call returns.
pub struct Service<R> {
    repository: R,
    data: AppData,
    session: Option<Name>,
}

impl<R> Service<R>
where
    R: DataRepository + SessionRepository,
{
    pub fn new(repository: R) -> Result<Self, ReadError> {
        let data = log_on_error!(repository.read_data(), "read", "data")?;
        let session = log_on_error!(repository.read_session(), "read", "session")?
            .filter(|login| data.users.contains_key(login));
        debug!(
            "loaded {} users and {} workouts",
            data.users.len(),
            data.workouts.len()
        );
        Ok(Self {
            repository,
            data,
            session,
        })
    }

    #[must_use]
    pub fn data(&self) -> &AppData {
        &self.data
    }

    #[must_use]
    pub fn current_user(&self) -> Option<&User> {
        self.session
            .as_ref()
            .and_then(|login| self.data.user(login))
    }

    pub fn register(&mut self, login: &str, password_hash: &str) -> Result<User, ServiceError> {
        let user = User::new(login, password_hash)?;
        self.update(Action::Register(user.clone()))?;
        self.start_session(&user.login)?;
        Ok(user)
    }

    pub fn login(&mut self, login: &str, password_hash: &str) -> Result<User, ServiceError> {
        let user = self.data.authenticate(login, password_hash)?.clone();
        self.start_session(&user.login)?;
        Ok(user)
    }

    pub fn logout(&mut self) -> Result<(), ServiceError> {
        log_on_error!(self.repository.delete_session(), "delete", "session")?;
        self.session = None;
        Ok(())
    }

    /// Merged exercise list of a category for the current user.
    pub fn exercises(&self, category: Category) -> Result<Vec<Name>, ServiceError> {
        Ok(self.data.exercises(self.session_login()?, category))
    }

    pub fn custom_exercises(&self, category: Category) -> Result<&[Name], ServiceError> {
        Ok(self.data.custom_exercises.of(self.session_login()?, category))
    }

    pub fn add_custom_exercise(
        &mut self,
        category: Category,
        name: &str,
    ) -> Result<Name, ServiceError> {
        let name = Name::new(name).map_err(crate::CatalogError::from)?;
        self.update(Action::AddCustomExercise {
            user: self.session_login()?.clone(),
            category,
            name: name.clone(),
        })?;
        Ok(name)
    }

    pub fn delete_custom_exercise(
        &mut self,
        category: Category,
        name: &str,
    ) -> Result<(), ServiceError> {
        let Ok(name) = Name::new(name) else {
            return Ok(());
        };
        self.update(Action::DeleteCustomExercise {
            user: self.session_login()?.clone(),
            category,
            name,
        })
    }

    pub fn workouts(&self) -> Result<Vec<&Workout>, ServiceError> {
        Ok(self.data.workouts_of(self.session_login()?).collect())
    }

    pub fn workouts_on(&self, date: NaiveDate) -> Result<Vec<&Workout>, ServiceError> {
        Ok(self.data.workouts_on(self.session_login()?, date))
    }

    pub fn new_wizard(&self, date: NaiveDate) -> Result<Wizard, ServiceError> {
        Ok(self.data.new_wizard(self.session_login()?, date))
    }

    pub fn edit_wizard(&self, id: WorkoutID) -> Result<Wizard, ServiceError> {
        Ok(self.data.edit_wizard(self.session_login()?, id)?)
    }

    /// Stores the result of a completed wizard.
    pub fn commit(&mut self, outcome: Outcome) -> Result<Workout, ServiceError> {
        let login = self.session_login()?.clone();
        let (workout, action) = match outcome {
            Outcome::Created(draft) => {
                let workout = draft.into_workout(WorkoutID::new_random(), login);
                (workout.clone(), Action::AddWorkout(workout))
            }
            Outcome::Edited(workout) => {
                if workout.user_id != login {
                    return Err(crate::WorkoutError::Foreign.into());
                }
                (workout.clone(), Action::ReplaceWorkout(workout))
            }
        };
        self.update(action)?;
        Ok(workout)
    }

    pub fn delete_workout(&mut self, id: WorkoutID) -> Result<(), ServiceError> {
        self.update(Action::DeleteWorkout {
            user: self.session_login()?.clone(),
            id,
        })
    }

    fn session_login(&self) -> Result<&Name, AuthError> {
        self.session.as_ref().ok_or(AuthError::NoSession)
    }

    fn start_session(&mut self, login: &Name) -> Result<(), ServiceError> {
        log_on_error!(self.repository.write_session(login), "write", "session")?;
        self.session = Some(login.clone());
        Ok(())
    }

    fn update(&mut self, action: Action) -> Result<(), ServiceError> {
        let data = self.data.apply(action)?;
        log_on_error!(self.repository.write_data(&data), "write", "data")?;
        self.data = data;
        Ok(())
    }
}
