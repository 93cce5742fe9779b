use crate::{CategoryError, Name, NameError};

#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

#[derive(thiserror::Error, Debug)]
pub enum WriteError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("invalid data: {0}")]
    InvalidData(String),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl From<CategoryError> for StorageError {
    fn from(value: CategoryError) -> Self {
        StorageError::InvalidData(value.to_string())
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum AuthError {
    #[error("login and password must not be empty")]
    MissingCredentials,
    #[error("user {0} already exists")]
    DuplicateUser(Name),
    #[error("user not found")]
    UserNotFound,
    #[error("wrong password")]
    WrongPassword,
    #[error("not logged in")]
    NoSession,
    #[error(transparent)]
    InvalidLogin(#[from] NameError),
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum CatalogError {
    #[error("exercise {0} already exists in this category")]
    DuplicateExerciseName(Name),
    #[error(transparent)]
    InvalidName(#[from] NameError),
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WorkoutError {
    #[error("unknown user {0}")]
    UnknownUser(Name),
    #[error("unknown exercise {0}")]
    UnknownExercise(Name),
    #[error("exercise {0} occurs more than once")]
    DuplicateExercise(Name),
    #[error("workout not found")]
    NotFound,
    #[error("workout belongs to another user")]
    Foreign,
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WizardError {
    #[error("select at least one exercise")]
    EmptySelection,
    #[error("not available in this step")]
    NotAvailable,
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ActionError {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Workout(#[from] WorkoutError),
}

#[derive(thiserror::Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    Action(#[from] ActionError),
    #[error(transparent)]
    Read(#[from] ReadError),
    #[error(transparent)]
    Write(#[from] WriteError),
}

impl From<AuthError> for ServiceError {
    fn from(value: AuthError) -> Self {
        ServiceError::Action(ActionError::Auth(value))
    }
}

impl From<CatalogError> for ServiceError {
    fn from(value: CatalogError) -> Self {
        ServiceError::Action(ActionError::Catalog(value))
    }
}

impl From<WorkoutError> for ServiceError {
    fn from(value: WorkoutError) -> Self {
        ServiceError::Action(ActionError::Workout(value))
    }
}
