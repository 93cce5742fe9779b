//! Plain text rendering of diary data for terminal output.

use chrono::NaiveDate;
use diary_domain::{Name, SetEntry, SetHint, Workout};

#[must_use]
pub fn sets(sets: &[SetEntry]) -> String {
    sets.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[must_use]
pub fn workout(workout: &Workout) -> String {
    let mut lines = vec![format!("{} [{}]", workout.category, workout.id)];
    lines.extend(
        workout
            .exercises
            .iter()
            .map(|e| format!("  {}: {}", e.name, sets(&e.sets))),
    );
    lines.join("\n")
}

#[must_use]
pub fn set(index: usize, set: &SetEntry, hint: Option<SetHint>) -> String {
    let line = format!("Сет {}: {set}", index + 1);
    match hint {
        Some(hint) => format!("{line}  (Было: {}, Цель: {}кг)", hint.previous, hint.target),
        None => line,
    }
}

#[must_use]
pub fn summary(exercises: &[(Name, usize)]) -> String {
    exercises
        .iter()
        .map(|(name, count)| format!("{name}: {count} подходов"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[must_use]
pub fn day(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        String::from("Сегодня")
    } else {
        date.to_string()
    }
}

#[must_use]
pub fn week(days: &[(NaiveDate, &str)], selected: NaiveDate, workouts: &[&Workout]) -> String {
    days.iter()
        .map(|(date, label)| {
            let marker = if *date == selected { '>' } else { ' ' };
            let count = workouts.iter().filter(|w| w.date == *date).count();
            if count > 0 {
                format!("{marker} {label} {date} ({count})")
            } else {
                format!("{marker} {label} {date}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
