#![warn(clippy::pedantic)]

use std::{
    path::PathBuf,
    sync::{Arc, Mutex},
};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use colored::Colorize;
use diary_app::format;
use diary_domain::{self as domain, Category, Service};
use diary_storage::{LocalStorage, Repository};
use log::{LevelFilter, info};
use uuid::Uuid;

mod wizard;

#[derive(Parser, Debug)]
#[command(name = "diary", version, about = "Workout diary", long_about = None)]
struct Cli {
    /// Directory holding the diary data
    #[arg(long, global = true, env = "DIARY_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Print debug messages
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create an account and log in
    Register { login: String },
    Login { login: String },
    Logout,
    /// Show the logged in user
    Whoami,
    Exercises {
        #[command(subcommand)]
        command: ExercisesCommand,
    },
    /// List the workouts of a day
    Workouts {
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    DeleteWorkout { id: Uuid },
    /// Record a new workout
    New {
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Change the sets of a recorded workout
    Edit { id: Uuid },
    /// Show the current week
    Week {
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Show recent log messages
    Log,
}

#[derive(Subcommand, Debug)]
enum ExercisesCommand {
    List {
        #[arg(long, value_parser = parse_category)]
        category: Category,
    },
    Add {
        #[arg(long, value_parser = parse_category)]
        category: Category,
        name: String,
    },
    Delete {
        #[arg(long, value_parser = parse_category)]
        category: Category,
        name: String,
    },
}

fn parse_category(value: &str) -> Result<Category, domain::CategoryError> {
    Category::try_from(value.trim().to_uppercase().replace('-', "_").as_str())
}

fn data_dir(cli: &Cli) -> Result<PathBuf> {
    match &cli.data_dir {
        Some(dir) => Ok(dir.clone()),
        None => Ok(dirs::data_dir()
            .context("no data directory found, use --data-dir")?
            .join("workout-diary")),
    }
}

fn password(confirm: bool) -> Result<String> {
    let prompt = dialoguer::Password::new().with_prompt("Пароль");
    Ok(if confirm {
        prompt
            .with_confirmation("Повторите пароль", "Пароли не совпадают")
            .interact()?
    } else {
        prompt.interact()?
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let storage = LocalStorage::new(data_dir(&cli)?);

    let log_repository = Arc::new(Mutex::new(Repository::new(storage.clone())));
    diary_app::log::init(
        log_repository.clone(),
        if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        },
    )
    .map_err(|err| anyhow::anyhow!("{err}"))?;

    if let Command::Log = cli.command {
        let repository = log_repository
            .lock()
            .map_err(|_| anyhow::anyhow!("log storage unavailable"))?;
        for entry in diary_app::log::Repository::read_entries(&*repository)? {
            println!("{} {:5} {}", entry.time.dimmed(), entry.level, entry.message);
        }
        return Ok(());
    }

    let mut service = Service::new(Repository::new(storage))?;
    let today = Local::now().date_naive();

    match cli.command {
        Command::Register { login } => {
            let user = service.register(&login, &password(true)?)?;
            info!("registered {}", user.login);
        }
        Command::Login { login } => {
            let user = service.login(&login, &password(false)?)?;
            println!("{}", user.login.to_string().green());
        }
        Command::Logout => service.logout()?,
        Command::Whoami => match service.current_user() {
            Some(user) => println!("{}", user.login),
            None => println!("{}", "не выполнен вход".yellow()),
        },
        Command::Exercises { command } => match command {
            ExercisesCommand::List { category } => {
                let custom = service.custom_exercises(category)?;
                for name in service.exercises(category)? {
                    if custom.contains(&name) {
                        println!("{name} {}", "*".cyan());
                    } else {
                        println!("{name}");
                    }
                }
            }
            ExercisesCommand::Add { category, name } => {
                let name = service.add_custom_exercise(category, &name)?;
                info!("added {name} to {category}");
            }
            ExercisesCommand::Delete { category, name } => {
                service.delete_custom_exercise(category, &name)?;
            }
        },
        Command::Workouts { date } => {
            let date = date.unwrap_or(today);
            println!("{}", format::day(date, today).bold());
            for workout in service.workouts_on(date)? {
                println!("{}", format::workout(workout));
            }
        }
        Command::DeleteWorkout { id } => service.delete_workout(id.into())?,
        Command::New { date } => {
            let wizard = service.new_wizard(date.unwrap_or(today))?;
            if let Some(outcome) = wizard::run(wizard)? {
                let workout = service.commit(outcome)?;
                info!("saved workout {}", workout.id);
            }
        }
        Command::Edit { id } => {
            let wizard = service.edit_wizard(id.into())?;
            if let Some(outcome) = wizard::run(wizard)? {
                let workout = service.commit(outcome)?;
                info!("updated workout {}", workout.id);
            }
        }
        Command::Week { date } => {
            let selected = date.unwrap_or(today);
            let workouts = service.workouts()?;
            println!(
                "{}",
                format::week(&domain::week_dates(selected), selected, &workouts)
            );
            for workout in workouts.iter().filter(|w| w.date == selected) {
                println!("{}", format::workout(workout));
            }
        }
        Command::Log => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("CHEST_BICEPS", Some(Category::ChestBiceps))]
    #[case("back-triceps", Some(Category::BackTriceps))]
    #[case(" legs_shoulders ", Some(Category::LegsShoulders))]
    #[case("arms", None)]
    fn test_parse_category(#[case] value: &str, #[case] expected: Option<Category>) {
        assert_eq!(parse_category(value).ok(), expected);
    }

    #[test]
    fn test_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_new() {
        let cli = Cli::try_parse_from([
            "diary",
            "--data-dir",
            "/tmp/d",
            "new",
            "--date",
            "2024-01-02",
        ])
        .unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/d")));
        let expected = NaiveDate::from_ymd_opt(2024, 1, 2);
        assert!(matches!(cli.command, Command::New { date } if date == expected));
    }
}
