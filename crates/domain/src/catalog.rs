use std::collections::BTreeMap;

use log::debug;

use crate::{Category, CatalogError, Name};

/// Merges the template of a category with the custom exercises of a user.
///
/// Template names come first in their fixed order, followed by the custom names in insertion
/// order. Both lists are disjoint, as adding a custom exercise that collides with an existing
/// name is rejected.
#[must_use]
pub fn resolve(category: Category, custom: &[Name]) -> Vec<Name> {
    category
        .template_names()
        .into_iter()
        .chain(custom.iter().cloned())
        .collect()
}

/// User-defined exercises, keyed by login and category.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CustomExercises(BTreeMap<Name, BTreeMap<Category, Vec<Name>>>);

impl CustomExercises {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Name, &BTreeMap<Category, Vec<Name>>)> {
        self.0.iter()
    }

    #[must_use]
    pub fn of(&self, user: &Name, category: Category) -> &[Name] {
        self.0
            .get(user)
            .and_then(|categories| categories.get(&category))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn resolve(&self, user: &Name, category: Category) -> Vec<Name> {
        resolve(category, self.of(user, category))
    }

    #[must_use]
    pub fn contains(&self, user: &Name, category: Category, name: &Name) -> bool {
        category.is_template(name) || self.of(user, category).contains(name)
    }

    pub fn add(&mut self, user: &Name, category: Category, name: Name) -> Result<(), CatalogError> {
        if self.contains(user, category, &name) {
            return Err(CatalogError::DuplicateExerciseName(name));
        }

        debug!("adding custom exercise {name} to {} of {user}", category.key());

        self.0
            .entry(user.clone())
            .or_insert_with(|| Category::iter().map(|c| (*c, vec![])).collect())
            .entry(category)
            .or_default()
            .push(name);

        Ok(())
    }

    pub fn delete(&mut self, user: &Name, category: Category, name: &Name) {
        if let Some(names) = self
            .0
            .get_mut(user)
            .and_then(|categories| categories.get_mut(&category))
        {
            names.retain(|n| n != name);
        }
    }
}

impl From<BTreeMap<Name, BTreeMap<Category, Vec<Name>>>> for CustomExercises {
    fn from(value: BTreeMap<Name, BTreeMap<Category, Vec<Name>>>) -> Self {
        Self(value)
    }
}
