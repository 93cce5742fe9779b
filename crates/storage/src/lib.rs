#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

use std::collections::VecDeque;

use diary_app::log;
use diary_domain as domain;
use ::log::debug;
use serde::{Serialize, de::DeserializeOwned};
use strum::AsRefStr;

pub mod local_storage;
pub mod memory;
pub mod model;

#[cfg(test)]
mod tests {
    pub mod data;
}

pub use local_storage::LocalStorage;
pub use memory::MemoryStorage;

/// Blob store holding one serialized value per key.
pub trait KeyValueStore {
    fn get(&self, key: Key) -> Result<Option<String>, StoreError>;
    fn set(&self, key: Key, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: Key) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: Key) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: Key, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: Key) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

#[derive(AsRefStr, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Key {
    #[strum(serialize = "workout_diary_v1")]
    Data,
    #[strum(serialize = "current_user_login")]
    Session,
    #[strum(serialize = "log")]
    Log,
}

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Model(#[from] model::ModelError),
    #[error("storage lock poisoned")]
    Poisoned,
}

impl From<StoreError> for domain::ReadError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::Model(err) => {
                domain::ReadError::Storage(domain::StorageError::InvalidData(err.to_string()))
            }
            err => domain::ReadError::Storage(domain::StorageError::Other(Box::new(err))),
        }
    }
}

impl From<StoreError> for domain::WriteError {
    fn from(value: StoreError) -> Self {
        domain::WriteError::Storage(domain::StorageError::Other(Box::new(value)))
    }
}

/// Repository persisting the diary as JSON values in a [`KeyValueStore`].
pub struct Repository<S> {
    store: S,
}

impl<S: KeyValueStore> Repository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn read<V: DeserializeOwned>(&self, key: Key) -> Result<Option<V>, StoreError> {
        match self.store.get(key)? {
            Some(value) => Ok(Some(serde_json::from_str(&value)?)),
            None => Ok(None),
        }
    }

    fn write<V: Serialize>(&self, key: Key, value: &V) -> Result<(), StoreError> {
        self.store.set(key, &serde_json::to_string(value)?)
    }
}

impl<S: KeyValueStore> domain::DataRepository for Repository<S> {
    fn read_data(&self) -> Result<domain::AppData, domain::ReadError> {
        match self.read::<model::AppData>(Key::Data)? {
            Some(data) => Ok(domain::AppData::try_from(data).map_err(StoreError::from)?),
            None => {
                debug!("no stored data, starting empty");
                Ok(domain::AppData::default())
            }
        }
    }

    fn write_data(&self, data: &domain::AppData) -> Result<(), domain::WriteError> {
        Ok(self.write(Key::Data, &model::AppData::from(data))?)
    }
}

impl<S: KeyValueStore> domain::SessionRepository for Repository<S> {
    fn read_session(&self) -> Result<Option<domain::Name>, domain::ReadError> {
        Ok(self
            .read::<String>(Key::Session)?
            .and_then(|login| domain::Name::new(&login).ok()))
    }

    fn write_session(&self, login: &domain::Name) -> Result<(), domain::WriteError> {
        Ok(self.write(Key::Session, &login.to_string())?)
    }

    fn delete_session(&self) -> Result<(), domain::WriteError> {
        Ok(self.store.remove(Key::Session)?)
    }
}

impl<S: KeyValueStore + Send + Sync + 'static> log::Repository for Repository<S> {
    fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        self.read(Key::Log)
            .map(Option::unwrap_or_default)
            .map_err(|err| log::Error::Unknown(err.to_string()))
    }

    fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        let mut entries = self.read_entries()?;
        log::push_entry(&mut entries, entry);
        self.write(Key::Log, &entries)
            .map_err(|err| log::Error::Unknown(err.to_string()))
    }
}
