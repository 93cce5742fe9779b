//! Persisted layout of the diary.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use diary_domain as domain;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ModelError {
    #[error(transparent)]
    Name(#[from] domain::NameError),
    #[error(transparent)]
    Category(#[from] domain::CategoryError),
    #[error(transparent)]
    Weight(#[from] domain::WeightError),
    #[error(transparent)]
    Reps(#[from] domain::RepsError),
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppData {
    pub users: BTreeMap<String, User>,
    pub workouts: Vec<Workout>,
    #[serde(default)]
    pub custom_exercises: BTreeMap<String, BTreeMap<String, Vec<String>>>,
}

impl From<&domain::AppData> for AppData {
    fn from(value: &domain::AppData) -> Self {
        Self {
            users: value
                .users
                .iter()
                .map(|(login, user)| (login.to_string(), User::from(user)))
                .collect(),
            workouts: value.workouts.iter().map(Workout::from).collect(),
            custom_exercises: value
                .custom_exercises
                .iter()
                .map(|(login, categories)| {
                    (
                        login.to_string(),
                        categories
                            .iter()
                            .map(|(category, names)| {
                                (
                                    category.key().to_string(),
                                    names.iter().map(ToString::to_string).collect(),
                                )
                            })
                            .collect(),
                    )
                })
                .collect(),
        }
    }
}

impl TryFrom<AppData> for domain::AppData {
    type Error = ModelError;

    fn try_from(value: AppData) -> Result<Self, Self::Error> {
        let users = value
            .users
            .into_values()
            .map(|user| -> Result<_, ModelError> {
                let user = domain::User::try_from(user)?;
                Ok((user.login.clone(), user))
            })
            .collect::<Result<BTreeMap<_, _>, _>>()?;
        let workouts = value
            .workouts
            .into_iter()
            .map(domain::Workout::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let mut custom_exercises = BTreeMap::new();
        for (login, categories) in value.custom_exercises {
            let mut entry = BTreeMap::new();
            for (category, names) in categories {
                entry.insert(
                    domain::Category::try_from(category.as_str())?,
                    names
                        .iter()
                        .map(|name| domain::Name::restore(name.as_str()))
                        .collect::<Result<Vec<_>, _>>()?,
                );
            }
            custom_exercises.insert(domain::Name::restore(&login)?, entry);
        }

        Ok(Self {
            users,
            workouts,
            custom_exercises: custom_exercises.into(),
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub login: String,
    pub password_hash: String,
}

impl From<&domain::User> for User {
    fn from(value: &domain::User) -> Self {
        Self {
            login: value.login.to_string(),
            password_hash: value.password_hash.clone(),
        }
    }
}

impl TryFrom<User> for domain::User {
    type Error = domain::NameError;

    fn try_from(value: User) -> Result<Self, Self::Error> {
        Ok(Self {
            login: domain::Name::restore(&value.login)?,
            password_hash: value.password_hash,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub id: Uuid,
    pub user_id: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub category: String,
    pub exercises: Vec<ExerciseEntry>,
}

impl From<&domain::Workout> for Workout {
    fn from(value: &domain::Workout) -> Self {
        Self {
            id: *value.id,
            user_id: value.user_id.to_string(),
            date: value.date,
            category: value.category.key().to_string(),
            exercises: value.exercises.iter().map(ExerciseEntry::from).collect(),
        }
    }
}

impl TryFrom<Workout> for domain::Workout {
    type Error = ModelError;

    fn try_from(value: Workout) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            user_id: domain::Name::restore(&value.user_id)?,
            date: value.date,
            category: domain::Category::try_from(value.category.as_str())?,
            exercises: value
                .exercises
                .into_iter()
                .map(domain::ExerciseEntry::try_from)
                .collect::<Result<Vec<_>, _>>()?,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ExerciseEntry {
    pub name: String,
    pub sets: Vec<SetEntry>,
}

impl From<&domain::ExerciseEntry> for ExerciseEntry {
    fn from(value: &domain::ExerciseEntry) -> Self {
        Self {
            name: value.name.to_string(),
            sets: value.sets.iter().map(SetEntry::from).collect(),
        }
    }
}

impl TryFrom<ExerciseEntry> for domain::ExerciseEntry {
    type Error = ModelError;

    fn try_from(value: ExerciseEntry) -> Result<Self, Self::Error> {
        Ok(Self {
            name: domain::Name::restore(&value.name)?,
            sets: value
                .sets
                .into_iter()
                .map(domain::SetEntry::try_from)
                .collect::<Result<Vec<_>, _>>()?,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct SetEntry {
    pub weight: f32,
    pub reps: u32,
}

impl From<&domain::SetEntry> for SetEntry {
    fn from(value: &domain::SetEntry) -> Self {
        Self {
            weight: value.weight.into(),
            reps: value.reps.into(),
        }
    }
}

impl TryFrom<SetEntry> for domain::SetEntry {
    type Error = ModelError;

    fn try_from(value: SetEntry) -> Result<Self, Self::Error> {
        Ok(Self {
            weight: domain::Weight::new(value.weight)?,
            reps: domain::Reps::new(value.reps)?,
        })
    }
}
