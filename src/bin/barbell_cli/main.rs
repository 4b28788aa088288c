// ABOUTME: Barbell CLI - command-line front end for the weightlifting log
// ABOUTME: Loads the store, runs one subcommand, prints text or JSON, and saves on change
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org
//!
//! Usage:
//! ```bash
//! # Start a workout and log sets
//! barbell-cli workout start
//! barbell-cli workout log "Bench Press" 185 5
//! barbell-cli workout end
//!
//! # Compare today's sets with the previous session
//! barbell-cli compare "Bench Press"
//!
//! # Analytics as JSON
//! barbell-cli --json records
//! barbell-cli volume --weeks 12
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use anyhow::Result;
use barbell::config::AppConfig;
use barbell::models::{
    ActivityLevel, BiologicalSex, InputMethod, MuscleGroup, ThemePreference, WeightUnit,
};
use barbell::store::persistence;
use chrono::{NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};
use uuid::Uuid;

use commands::CommandContext;
use helpers::display::Output;

#[derive(Parser)]
#[command(
    name = "barbell-cli",
    about = "Barbell weightlifting log",
    long_about = "Log workouts and sets, track body weight, and view progress analytics."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Store file (defaults to BARBELL_DATA_PATH, then the platform data directory)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Workout session commands
    Workout {
        #[command(subcommand)]
        action: WorkoutCommand,
    },

    /// Exercise catalog commands
    Exercise {
        #[command(subcommand)]
        action: ExerciseCommand,
    },

    /// Profile commands
    Profile {
        #[command(subcommand)]
        action: ProfileCommand,
    },

    /// Body-weight log commands
    Weight {
        #[command(subcommand)]
        action: WeightCommand,
    },

    /// Workout counters
    Stats,

    /// Personal records per exercise
    Records {
        /// Only this exercise
        exercise: Option<String>,
    },

    /// Weekly training volume
    Volume {
        /// Number of weeks ending with the current one
        #[arg(long)]
        weeks: Option<usize>,
    },

    /// Heaviest set per workout for one exercise
    Progression {
        /// Exercise name
        exercise: String,
    },

    /// Compare a workout's sets with the previous session
    Compare {
        /// Exercise name
        exercise: String,

        /// Workout to compare (defaults to the active or latest workout)
        #[arg(long)]
        workout: Option<Uuid>,
    },

    /// Resting metabolic rate, TDEE, and this week's workout calories
    Calories,

    /// Completed workouts, newest first
    History {
        /// Show at most this many workouts
        #[arg(long)]
        limit: Option<usize>,
    },
}

#[derive(Subcommand)]
enum WorkoutCommand {
    /// Start a new workout
    Start,

    /// Finish the active workout
    End,

    /// Throw away the active workout and its sets
    Discard,

    /// Set or clear a workout note
    Note {
        /// Note text; omit to clear
        text: Option<String>,

        /// Workout id (defaults to the active workout)
        #[arg(long)]
        workout: Option<Uuid>,
    },

    /// Log a set in the active workout
    Log {
        /// Exercise name
        exercise: String,

        /// Weight in the profile's unit
        weight: f64,

        /// Repetitions
        reps: u32,
    },

    /// Delete a set and renumber the rest
    DeleteSet {
        /// Set id
        set_id: Uuid,
    },

    /// Show a workout (defaults to the active or latest workout)
    Show {
        /// Workout id
        #[arg(long)]
        workout: Option<Uuid>,
    },
}

#[derive(Subcommand)]
enum ExerciseCommand {
    /// List exercises sorted by name
    List {
        /// Only this muscle group
        #[arg(long)]
        muscle_group: Option<MuscleGroup>,
    },

    /// Search exercises by name
    Search {
        /// Text to look for
        query: String,
    },

    /// Add a custom exercise
    Add {
        /// Exercise name
        name: String,

        /// Primary muscle group
        #[arg(long)]
        muscle_group: MuscleGroup,
    },

    /// Rename a custom exercise
    Rename {
        /// Current name
        from: String,

        /// New name
        to: String,
    },

    /// Delete a custom exercise with no logged sets
    Delete {
        /// Exercise name
        name: String,
    },

    /// Recently used exercises
    Recent {
        /// Maximum number to show
        #[arg(long)]
        limit: Option<usize>,
    },
}

#[derive(Subcommand)]
enum ProfileCommand {
    /// Show the profile
    Show,

    /// Create or update the profile
    Set(ProfileArgs),
}

/// Profile fields; omitted fields keep their current value
#[derive(Args)]
struct ProfileArgs {
    /// Display name
    #[arg(long)]
    name: Option<String>,

    /// Age in years
    #[arg(long)]
    age: Option<u32>,

    /// male or female
    #[arg(long)]
    sex: Option<BiologicalSex>,

    /// Height in inches (lb) or centimeters (kg)
    #[arg(long)]
    height: Option<f64>,

    /// Body weight in the preferred unit
    #[arg(long)]
    body_weight: Option<f64>,

    /// Waist measurement in the preferred length unit
    #[arg(long)]
    waist: Option<f64>,

    /// lb or kg
    #[arg(long)]
    unit: Option<WeightUnit>,

    /// sedentary, light, moderate, very, or extra
    #[arg(long)]
    activity: Option<ActivityLevel>,

    /// system, light, or dark
    #[arg(long)]
    theme: Option<ThemePreference>,

    /// keypad or stepper
    #[arg(long)]
    input_method: Option<InputMethod>,

    /// Default rest timer in seconds
    #[arg(long)]
    rest_timer: Option<u32>,

    /// Path to a profile photo
    #[arg(long)]
    photo: Option<String>,

    /// Program start date (YYYY-MM-DD)
    #[arg(long)]
    program_start: Option<NaiveDate>,
}

#[derive(Subcommand)]
enum WeightCommand {
    /// Record body weight
    Log {
        /// Weight in the profile's unit
        weight: f64,
    },

    /// Body-weight trend
    Trend {
        /// Trailing days for the recent change
        #[arg(long)]
        days: Option<i64>,
    },
}

impl Command {
    /// Whether the command changes the store and needs a save
    fn mutates(&self) -> bool {
        match self {
            Self::Workout { action } => !matches!(action, WorkoutCommand::Show { .. }),
            Self::Exercise { action } => matches!(
                action,
                ExerciseCommand::Add { .. }
                    | ExerciseCommand::Rename { .. }
                    | ExerciseCommand::Delete { .. }
            ),
            Self::Profile { action } => matches!(action, ProfileCommand::Set(_)),
            Self::Weight { action } => matches!(action, WeightCommand::Log { .. }),
            _ => false,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::with_data_path(cli.data.clone())?;
    let logging = if cli.verbose {
        config.logging.clone().verbose()
    } else {
        config.logging.clone()
    };
    logging.init()?;

    let now = Utc::now();
    let store = persistence::load(&config.data_path, now)?;
    let mutates = cli.command.mutates();
    debug!(path = %config.data_path.display(), mutates, "Store loaded");

    let mut context = CommandContext {
        store,
        output: Output::new(cli.json),
        analytics: config.analytics.clone(),
        now,
    };
    run(cli.command, &mut context)?;

    if mutates {
        persistence::save(&context.store, &config.data_path)?;
        info!(path = %config.data_path.display(), "Store saved");
    }
    Ok(())
}

fn run(command: Command, context: &mut CommandContext) -> Result<()> {
    match command {
        Command::Workout { action } => match action {
            WorkoutCommand::Start => commands::workout::start(context)?,
            WorkoutCommand::End => commands::workout::end(context)?,
            WorkoutCommand::Discard => commands::workout::discard(context)?,
            WorkoutCommand::Note { text, workout } => {
                commands::workout::note(context, text.as_deref(), workout)?;
            }
            WorkoutCommand::Log {
                exercise,
                weight,
                reps,
            } => commands::workout::log(context, &exercise, weight, reps)?,
            WorkoutCommand::DeleteSet { set_id } => {
                commands::workout::delete_set(context, set_id)?;
            }
            WorkoutCommand::Show { workout } => commands::workout::show(context, workout)?,
        },
        Command::Exercise { action } => match action {
            ExerciseCommand::List { muscle_group } => {
                commands::exercise::list(context, muscle_group)?;
            }
            ExerciseCommand::Search { query } => commands::exercise::search(context, &query)?,
            ExerciseCommand::Add { name, muscle_group } => {
                commands::exercise::add(context, &name, muscle_group)?;
            }
            ExerciseCommand::Rename { from, to } => {
                commands::exercise::rename(context, &from, &to)?;
            }
            ExerciseCommand::Delete { name } => commands::exercise::delete(context, &name)?,
            ExerciseCommand::Recent { limit } => commands::exercise::recent(context, limit)?,
        },
        Command::Profile { action } => match action {
            ProfileCommand::Show => commands::profile::show(context)?,
            ProfileCommand::Set(args) => commands::profile::set(context, args.into())?,
        },
        Command::Weight { action } => match action {
            WeightCommand::Log { weight } => commands::profile::log_weight(context, weight)?,
            WeightCommand::Trend { days } => commands::profile::weight_trend(context, days)?,
        },
        Command::Stats => commands::analytics::stats(context)?,
        Command::Records { exercise } => {
            commands::analytics::records(context, exercise.as_deref())?;
        }
        Command::Volume { weeks } => commands::analytics::volume(context, weeks)?,
        Command::Progression { exercise } => {
            commands::analytics::progression(context, &exercise)?;
        }
        Command::Compare { exercise, workout } => {
            commands::analytics::compare(context, &exercise, workout)?;
        }
        Command::Calories => commands::analytics::calories(context)?,
        Command::History { limit } => commands::analytics::history(context, limit)?,
    }
    Ok(())
}

impl From<ProfileArgs> for commands::profile::ProfileUpdate {
    fn from(args: ProfileArgs) -> Self {
        Self {
            name: args.name,
            age: args.age,
            sex: args.sex,
            height: args.height,
            body_weight: args.body_weight,
            waist: args.waist,
            unit: args.unit,
            activity: args.activity,
            theme: args.theme,
            input_method: args.input_method,
            rest_timer: args.rest_timer,
            photo: args.photo,
            program_start: args.program_start,
        }
    }
}
