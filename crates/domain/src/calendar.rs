use chrono::{Datelike, Days, NaiveDate};

const DAY_LABELS: [&str; 7] = ["ПН", "ВТ", "СР", "ЧТ", "ПТ", "СБ", "ВС"];

/// Days from Monday to Sunday of the week containing `today`, together with their labels.
#[must_use]
pub fn week_dates(today: NaiveDate) -> Vec<(NaiveDate, &'static str)> {
    let monday = today - Days::new(u64::from(today.weekday().num_days_from_monday()));
    DAY_LABELS
        .iter()
        .enumerate()
        .filter_map(|(offset, label)| {
            monday
                .checked_add_days(Days::new(offset as u64))
                .map(|date| (date, *label))
        })
        .collect()
}
