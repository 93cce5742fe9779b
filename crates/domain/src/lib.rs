#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod app_data;
pub mod calendar;
pub mod catalog;
pub mod category;
pub mod error;
pub mod history;
pub mod name;
pub mod recommendation;
pub mod service;
pub mod training;
pub mod user;
pub mod wizard;
pub mod workout;

pub use app_data::{Action, AppData};
pub use calendar::week_dates;
pub use catalog::CustomExercises;
pub use category::{Category, CategoryError};
pub use error::{
    ActionError, AuthError, CatalogError, ReadError, ServiceError, StorageError, WizardError,
    WorkoutError, WriteError,
};
pub use name::{Name, NameError};
pub use recommendation::{PROGRESSION_INCREMENT, suggest_next_sets};
pub use service::{DataRepository, Service, SessionRepository};
pub use training::{Reps, RepsError, SetEntry, Weight, WeightError};
pub use user::User;
pub use wizard::{Outcome, SetHint, Step, Wizard};
pub use workout::{ExerciseEntry, Workout, WorkoutDraft, WorkoutID};
