//! Terminal front end of the workout entry wizard.

use anyhow::Result;
use colored::Colorize;
use diary_app::format;
use diary_domain::{Category, Outcome, Step, Wizard};
use dialoguer::{Input, MultiSelect, Select};

const CANCEL: &str = "Отмена";
const BACK: &str = "Назад";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CaptureAction {
    Next,
    Edit,
    Heavier,
    Lighter,
    Add,
    Remove,
    Back,
    Cancel,
}

impl CaptureAction {
    const ALL: [CaptureAction; 8] = [
        CaptureAction::Next,
        CaptureAction::Edit,
        CaptureAction::Heavier,
        CaptureAction::Lighter,
        CaptureAction::Add,
        CaptureAction::Remove,
        CaptureAction::Back,
        CaptureAction::Cancel,
    ];

    fn label(self, last: bool) -> &'static str {
        match self {
            CaptureAction::Next if last => "К итогам",
            CaptureAction::Next => "Следующее упражнение",
            CaptureAction::Edit => "Изменить сет",
            CaptureAction::Heavier => "Вес +0.25 кг",
            CaptureAction::Lighter => "Вес -0.25 кг",
            CaptureAction::Add => "Добавить сет",
            CaptureAction::Remove => "Удалить сет",
            CaptureAction::Back => BACK,
            CaptureAction::Cancel => CANCEL,
        }
    }
}

/// Drives the wizard until the workout is saved or the entry is cancelled.
pub fn run(mut wizard: Wizard) -> Result<Option<Outcome>> {
    loop {
        match wizard.step() {
            Step::CategorySelection => {
                let categories = Category::iter().copied().collect::<Vec<_>>();
                let mut items = categories.iter().map(|c| c.label()).collect::<Vec<_>>();
                items.push(CANCEL);
                let choice = Select::new()
                    .with_prompt(format!("Тренировка на {}", wizard.date()))
                    .items(&items)
                    .default(0)
                    .interact()?;
                match categories.get(choice) {
                    Some(category) => wizard.select_category(*category)?,
                    None => {
                        wizard.cancel();
                        return Ok(None);
                    }
                }
            }
            Step::ExerciseSelection => select_exercises(&mut wizard)?,
            Step::ExerciseCapture(index) => {
                if !capture(&mut wizard, index)? {
                    wizard.cancel();
                    return Ok(None);
                }
            }
            Step::Summary => {
                println!("{}", wizard.category().label().bold());
                println!("{}", format::summary(&wizard.summary()));
                let choice = Select::new()
                    .items(&["Сохранить", "Изменить", CANCEL])
                    .default(0)
                    .interact()?;
                match choice {
                    0 => return Ok(Some(wizard.save()?)),
                    1 => wizard.revise()?,
                    _ => {
                        wizard.cancel();
                        return Ok(None);
                    }
                }
            }
        }
    }
}

fn select_exercises(wizard: &mut Wizard) -> Result<()> {
    let candidates = wizard.candidates().to_vec();
    let defaults = candidates
        .iter()
        .map(|name| wizard.is_selected(name))
        .collect::<Vec<_>>();
    let chosen = MultiSelect::new()
        .with_prompt(wizard.category().label())
        .items(&candidates)
        .defaults(&defaults)
        .interact()?;

    for (index, name) in candidates.iter().enumerate() {
        if chosen.contains(&index) != wizard.is_selected(name) {
            wizard.toggle_exercise(name)?;
        }
    }

    if wizard.selection().is_empty() {
        println!("{}", "Выберите хотя бы одно упражнение".yellow());
        let choice = Select::new()
            .items(&["Выбрать упражнения", BACK])
            .default(0)
            .interact()?;
        if choice == 1 {
            wizard.back()?;
        }
        return Ok(());
    }

    Ok(wizard.start_capture()?)
}

/// Returns `false` if the entry was cancelled.
fn capture(wizard: &mut Wizard, index: usize) -> Result<bool> {
    let count = wizard.selection().len();
    if let Some(name) = wizard.current_exercise() {
        println!("{} ({}/{count})", name.to_string().bold(), index + 1);
    }
    for (i, set) in wizard.sets().iter().enumerate() {
        println!("  {}", format::set(i, set, wizard.hint(i)));
    }

    let last = index + 1 == count;
    let items = CaptureAction::ALL
        .iter()
        .map(|action| action.label(last))
        .collect::<Vec<_>>();
    let choice = Select::new().items(&items).default(0).interact()?;

    match CaptureAction::ALL.get(choice).copied() {
        Some(CaptureAction::Next) => {
            if let Err(err) = wizard.next() {
                println!("{}", err.to_string().yellow());
            }
        }
        Some(CaptureAction::Edit) => {
            if let Some((i, set)) = select_set(wizard)?
                .and_then(|i| wizard.sets().get(i).map(|set| (i, *set)))
            {
                let weight: String = Input::new()
                    .with_prompt("Вес, кг")
                    .with_initial_text(set.weight.to_string())
                    .allow_empty(true)
                    .interact_text()?;
                wizard.input_weight(i, &weight)?;
                let reps: String = Input::new()
                    .with_prompt("Повторения")
                    .with_initial_text(set.reps.to_string())
                    .allow_empty(true)
                    .interact_text()?;
                wizard.input_reps(i, &reps)?;
            }
        }
        Some(action @ (CaptureAction::Heavier | CaptureAction::Lighter)) => {
            if let Some((i, set)) = select_set(wizard)?
                .and_then(|i| wizard.sets().get(i).map(|set| (i, *set)))
            {
                let weight = if action == CaptureAction::Heavier {
                    set.weight.step_up()
                } else {
                    set.weight.step_down()
                };
                wizard.set_weight(i, weight)?;
            }
        }
        Some(CaptureAction::Add) => wizard.add_set()?,
        Some(CaptureAction::Remove) => {
            if let Some(i) = select_set(wizard)? {
                wizard.remove_set(i)?;
            }
        }
        Some(CaptureAction::Back) => {
            if let Err(err) = wizard.back() {
                println!("{}", err.to_string().yellow());
            }
        }
        Some(CaptureAction::Cancel) | None => return Ok(false),
    }

    Ok(true)
}

fn select_set(wizard: &Wizard) -> Result<Option<usize>> {
    let items = wizard
        .sets()
        .iter()
        .enumerate()
        .map(|(i, set)| format::set(i, set, None))
        .collect::<Vec<_>>();
    Ok(Select::new()
        .with_prompt("Сет")
        .items(&items)
        .default(0)
        .interact_opt()?)
}
