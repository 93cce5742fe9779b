use crate::{Reps, SetEntry, Weight};

/// Weight added to each set of the previous session.
pub const PROGRESSION_INCREMENT: f32 = 1.25;

/// Number of empty sets offered for an exercise without history.
pub const DEFAULT_SET_COUNT: usize = 3;

/// Suggests the sets for the next session of an exercise.
///
/// Reps are carried over and the weight of each set is increased by [`PROGRESSION_INCREMENT`].
#[must_use]
pub fn suggest_next_sets(previous: Option<&[SetEntry]>) -> Vec<SetEntry> {
    match previous {
        Some(sets) if !sets.is_empty() => sets
            .iter()
            .map(|s| SetEntry::new(target_weight(s.weight), s.reps))
            .collect(),
        _ => vec![SetEntry::new(Weight::ZERO, Reps::ZERO); DEFAULT_SET_COUNT],
    }
}

#[must_use]
pub fn target_weight(previous: Weight) -> Weight {
    previous.increased_by(PROGRESSION_INCREMENT)
}
