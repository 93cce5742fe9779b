//! Guided entry of a workout.
//!
//! A [`Wizard`] stages the whole workout locally. Nothing is written until [`Wizard::save`]
//! produces an [`Outcome`], which the caller applies to the data store as a single update.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use log::debug;

use crate::{
    Category, ExerciseEntry, Name, Reps, SetEntry, Weight, WizardError, Workout, WorkoutDraft,
    WorkoutID, history, recommendation,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    CategorySelection,
    ExerciseSelection,
    ExerciseCapture(usize),
    Summary,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Created(WorkoutDraft),
    Edited(Workout),
}

/// Set recorded at the same position in the previous session of an exercise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SetHint {
    pub previous: SetEntry,
    pub target: Weight,
}

#[derive(Debug, Clone)]
pub struct Wizard {
    date: NaiveDate,
    original: Option<(WorkoutID, Name)>,
    catalog: BTreeMap<Category, Vec<Name>>,
    history: Vec<Workout>,
    step: Step,
    category: Category,
    selection: Vec<Name>,
    results: Vec<ExerciseEntry>,
    sets: Vec<SetEntry>,
}

impl Wizard {
    /// Starts the entry of a new workout.
    ///
    /// `catalog` holds the merged exercise list of every category and `history` the workouts of
    /// the user, both as of the start of the entry.
    #[must_use]
    pub fn new(
        date: NaiveDate,
        catalog: BTreeMap<Category, Vec<Name>>,
        history: Vec<Workout>,
    ) -> Self {
        Self {
            date,
            original: None,
            catalog,
            history,
            step: Step::CategorySelection,
            category: Category::ChestBiceps,
            selection: vec![],
            results: vec![],
            sets: vec![],
        }
    }

    /// Starts editing an existing workout at its first exercise.
    #[must_use]
    pub fn edit(workout: Workout, history: Vec<Workout>) -> Self {
        let mut wizard = Self {
            date: workout.date,
            original: Some((workout.id, workout.user_id)),
            catalog: BTreeMap::new(),
            history,
            step: Step::ExerciseCapture(0),
            category: workout.category,
            selection: workout.exercises.iter().map(|e| e.name.clone()).collect(),
            results: workout.exercises,
            sets: vec![],
        };
        wizard.load_sets();
        wizard
    }

    #[must_use]
    pub fn step(&self) -> Step {
        self.step
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.original.is_some()
    }

    /// Exercises offered for selection in the chosen category.
    #[must_use]
    pub fn candidates(&self) -> &[Name] {
        self.catalog
            .get(&self.category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Exercises to be captured, in catalog order.
    #[must_use]
    pub fn selection(&self) -> &[Name] {
        &self.selection
    }

    #[must_use]
    pub fn is_selected(&self, name: &Name) -> bool {
        self.selection.contains(name)
    }

    pub fn select_category(&mut self, category: Category) -> Result<(), WizardError> {
        if self.step != Step::CategorySelection {
            return Err(WizardError::NotAvailable);
        }

        self.category = category;
        self.selection = self.candidates().to_vec();
        self.step = Step::ExerciseSelection;

        Ok(())
    }

    pub fn toggle_exercise(&mut self, name: &Name) -> Result<(), WizardError> {
        if self.step != Step::ExerciseSelection {
            return Err(WizardError::NotAvailable);
        }

        let selected = !self.is_selected(name);
        self.selection = self
            .candidates()
            .iter()
            .filter(|c| {
                if *c == name {
                    selected
                } else {
                    self.selection.contains(*c)
                }
            })
            .cloned()
            .collect();

        Ok(())
    }

    pub fn start_capture(&mut self) -> Result<(), WizardError> {
        if self.step != Step::ExerciseSelection {
            return Err(WizardError::NotAvailable);
        }

        if self.selection.is_empty() {
            return Err(WizardError::EmptySelection);
        }

        let selection = &self.selection;
        self.results.retain(|r| selection.contains(&r.name));
        self.enter_capture(0);

        Ok(())
    }

    /// Exercise shown in the current capture step.
    #[must_use]
    pub fn current_exercise(&self) -> Option<&Name> {
        match self.step {
            Step::ExerciseCapture(index) => self.selection.get(index),
            _ => None,
        }
    }

    /// Working sets of the current capture step.
    #[must_use]
    pub fn sets(&self) -> &[SetEntry] {
        &self.sets
    }

    #[must_use]
    pub fn hint(&self, index: usize) -> Option<SetHint> {
        let exercise = self.current_exercise()?;
        let previous =
            *history::latest_sets_for_exercise(&self.history, exercise, self.excluded())?
                .get(index)?;
        Some(SetHint {
            previous,
            target: recommendation::target_weight(previous.weight),
        })
    }

    /// Appends a copy of the last set.
    pub fn add_set(&mut self) -> Result<(), WizardError> {
        self.ensure_capture()?;
        let set = self.sets.last().copied().unwrap_or_default();
        self.sets.push(set);
        Ok(())
    }

    /// Removes a set, keeping at least one.
    pub fn remove_set(&mut self, index: usize) -> Result<(), WizardError> {
        self.ensure_capture()?;
        if self.sets.len() > 1 && index < self.sets.len() {
            self.sets.remove(index);
        }
        Ok(())
    }

    pub fn set_weight(&mut self, index: usize, weight: Weight) -> Result<(), WizardError> {
        self.ensure_capture()?;
        if let Some(set) = self.sets.get_mut(index) {
            set.weight = weight;
        }
        Ok(())
    }

    pub fn set_reps(&mut self, index: usize, reps: Reps) -> Result<(), WizardError> {
        self.ensure_capture()?;
        if let Some(set) = self.sets.get_mut(index) {
            set.reps = reps;
        }
        Ok(())
    }

    pub fn input_weight(&mut self, index: usize, input: &str) -> Result<(), WizardError> {
        self.set_weight(index, Weight::parse_or_zero(input))
    }

    pub fn input_reps(&mut self, index: usize, input: &str) -> Result<(), WizardError> {
        self.set_reps(index, Reps::parse_or_zero(input))
    }

    /// Records the current sets and advances to the next exercise or the summary.
    pub fn next(&mut self) -> Result<(), WizardError> {
        let Step::ExerciseCapture(index) = self.step else {
            return Err(WizardError::NotAvailable);
        };
        let Some(name) = self.selection.get(index).cloned() else {
            return Err(WizardError::NotAvailable);
        };

        let entry = ExerciseEntry {
            name,
            sets: std::mem::take(&mut self.sets),
        };
        match self.results.iter_mut().find(|r| r.name == entry.name) {
            Some(result) => *result = entry,
            None => self.results.push(entry),
        }

        if index + 1 < self.selection.len() {
            self.enter_capture(index + 1);
        } else {
            self.step = Step::Summary;
        }

        Ok(())
    }

    /// Returns to the previous step without recording the current sets.
    pub fn back(&mut self) -> Result<(), WizardError> {
        match self.step {
            Step::ExerciseCapture(index) if index > 0 => {
                self.enter_capture(index - 1);
            }
            Step::ExerciseCapture(_) if !self.is_editing() => {
                self.sets.clear();
                self.step = Step::ExerciseSelection;
            }
            Step::ExerciseSelection => {
                self.selection.clear();
                self.results.clear();
                self.step = Step::CategorySelection;
            }
            _ => return Err(WizardError::NotAvailable),
        }

        Ok(())
    }

    /// Returns from the summary to the last exercise.
    pub fn revise(&mut self) -> Result<(), WizardError> {
        if self.step != Step::Summary || self.selection.is_empty() {
            return Err(WizardError::NotAvailable);
        }

        self.enter_capture(self.selection.len() - 1);

        Ok(())
    }

    /// Recorded exercises in capture order.
    #[must_use]
    pub fn exercises(&self) -> Vec<ExerciseEntry> {
        self.selection
            .iter()
            .filter_map(|name| self.results.iter().find(|r| r.name == *name))
            .cloned()
            .collect()
    }

    /// Names and set counts of the recorded exercises.
    #[must_use]
    pub fn summary(&self) -> Vec<(Name, usize)> {
        self.exercises()
            .into_iter()
            .map(|e| (e.name, e.sets.len()))
            .collect()
    }

    pub fn save(&self) -> Result<Outcome, WizardError> {
        if self.step != Step::Summary {
            return Err(WizardError::NotAvailable);
        }

        let draft = WorkoutDraft {
            date: self.date,
            category: self.category,
            exercises: self.exercises(),
        };

        Ok(match &self.original {
            Some((id, user_id)) => Outcome::Edited(draft.into_workout(*id, user_id.clone())),
            None => Outcome::Created(draft),
        })
    }

    /// Discards the staged workout.
    pub fn cancel(self) {
        debug!("discarding workout entry of {}", self.date);
    }

    fn excluded(&self) -> Option<WorkoutID> {
        self.original.as_ref().map(|(id, _)| *id)
    }

    fn ensure_capture(&self) -> Result<(), WizardError> {
        match self.step {
            Step::ExerciseCapture(_) => Ok(()),
            _ => Err(WizardError::NotAvailable),
        }
    }

    fn enter_capture(&mut self, index: usize) {
        self.step = Step::ExerciseCapture(index);
        self.load_sets();
    }

    fn load_sets(&mut self) {
        let sets = match self.current_exercise() {
            Some(name) => match self.results.iter().find(|r| r.name == *name) {
                Some(result) => result.sets.clone(),
                None => recommendation::suggest_next_sets(history::latest_sets_for_exercise(
                    &self.history,
                    name,
                    self.excluded(),
                )),
            },
            None => vec![],
        };
        self.sets = sets;
    }
}
