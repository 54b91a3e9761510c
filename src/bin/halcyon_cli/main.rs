// ABOUTME: Command-line interface to the Halcyon Health platform
// ABOUTME: Parses subcommands, wires up the client with a file-backed token store, dispatches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Halcyon Health

//! # Halcyon CLI
//!
//! Thin command-line consumer of the `halcyon_client` SDK. Sessions persist
//! between invocations through the file-backed credential store.
//!
//! ## Usage
//!
//! ```bash
//! # Log in once; the token lands in the platform config dir
//! halcyon-cli login user@example.com --password secret
//!
//! # Track things
//! halcyon-cli weight log 81.4
//! halcyon-cli meal log lunch "chicken salad" --calories 520
//! halcyon-cli workout log running 35
//!
//! # Talk to the assistant
//! halcyon-cli chat send "How did my week go?"
//!
//! # Point at a different backend
//! halcyon-cli --base-url https://staging.halcyon.health/api whoami
//! ```

mod commands;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use uuid::Uuid;

use halcyon_client::auth::FileTokenStore;
use halcyon_client::client::ApiClient;
use halcyon_client::config::ClientConfig;
use halcyon_client::logging;
use halcyon_client::models::user::Gender;

#[derive(Parser)]
#[command(
    name = "halcyon-cli",
    about = "Halcyon Health command-line client",
    long_about = "Track weight, meals, and workouts, read lab reports, and work with \
                  AI-generated plans from the terminal"
)]
struct Cli {
    /// API base URL override (otherwise HALCYON_BASE_URL or the local default)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Credentials file override (otherwise the platform config dir)
    #[arg(long, global = true)]
    credentials: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and store the session token
    Login {
        /// Account email
        email: String,
        /// Account password
        #[arg(long)]
        password: String,
    },
    /// Create an account (logs in immediately when the backend allows it)
    Register {
        /// Account email
        email: String,
        /// Account password
        #[arg(long)]
        password: String,
        /// Gender: male, female, other, or unspecified
        #[arg(long)]
        gender: Option<Gender>,
    },
    /// Destroy the stored session token
    Logout,
    /// Show the profile of the logged-in user
    Whoami,
    /// Weight tracking
    #[command(subcommand)]
    Weight(WeightCommand),
    /// Meal tracking and food search
    #[command(subcommand)]
    Meal(MealCommand),
    /// Workout tracking
    #[command(subcommand)]
    Workout(WorkoutCommand),
    /// Lab reports
    #[command(subcommand)]
    Labs(LabsCommand),
    /// AI-generated plans
    #[command(subcommand)]
    Plan(PlanCommand),
    /// AI assistant chat
    #[command(subcommand)]
    Chat(ChatCommand),
}

#[derive(Subcommand)]
enum WeightCommand {
    /// Record a measurement in kilograms
    Log {
        /// Weight in kilograms
        kg: f64,
        /// Day of the measurement (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Free-form note
        #[arg(long)]
        note: Option<String>,
    },
    /// Show history, newest first
    List {
        /// Maximum number of entries
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Delete an entry
    Delete {
        /// Entry id
        id: Uuid,
    },
}

#[derive(Subcommand)]
enum MealCommand {
    /// Record a meal
    Log {
        /// Meal slot: breakfast, lunch, dinner, or snack
        meal_type: String,
        /// What was eaten
        description: String,
        /// Energy in kilocalories
        #[arg(long)]
        calories: Option<f64>,
        /// Day of the meal (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Show meals for a day
    List {
        /// Day to list (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Search the food catalog
    Search {
        /// Search text
        query: String,
        /// Maximum number of matches
        #[arg(long, default_value_t = 10)]
        limit: u32,
    },
}

#[derive(Subcommand)]
enum WorkoutCommand {
    /// Record an exercise session
    Log {
        /// Activity name ("running", "bench press")
        activity: String,
        /// Duration in minutes
        minutes: u32,
        /// Estimated energy burned in kilocalories
        #[arg(long)]
        calories: Option<f64>,
        /// Day of the session (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Show sessions for a day
    List {
        /// Day to list (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

#[derive(Subcommand)]
enum LabsCommand {
    /// List lab reports, newest first
    List,
    /// Show one report with all markers
    Show {
        /// Report id
        id: Uuid,
    },
}

#[derive(Subcommand)]
enum PlanCommand {
    /// Show the monthly guidance
    Monthly {
        /// Calendar year
        year: i32,
        /// Calendar month, 1 through 12
        month: u32,
    },
    /// Show a weekly plan
    Weekly {
        /// Plan id
        id: Uuid,
    },
    /// Generate a weekly plan
    Generate {
        /// Monday of the week to plan (YYYY-MM-DD)
        week_start: NaiveDate,
        /// Optional theme to steer generation
        #[arg(long)]
        focus: Option<String>,
    },
    /// Adjust a weekly plan with a free-form instruction
    Adjust {
        /// Plan id
        id: Uuid,
        /// What to change, in your own words
        instruction: String,
    },
    /// Mark a plan item as done
    Complete {
        /// Plan id
        plan: Uuid,
        /// Item id
        item: Uuid,
    },
}

#[derive(Subcommand)]
enum ChatCommand {
    /// Send a message and print the assistant reply
    Send {
        /// Message text
        message: String,
        /// Conversation to continue (default: start a new one)
        #[arg(long)]
        conversation: Option<Uuid>,
    },
    /// List conversations, most recently active first
    Conversations,
    /// Print a conversation transcript
    History {
        /// Conversation id
        id: Uuid,
    },
}

fn build_client(cli: &Cli) -> Result<ApiClient> {
    let config = match &cli.base_url {
        Some(url) => ClientConfig::new(url),
        None => ClientConfig::from_env().context("failed to read configuration")?,
    };

    let store = match &cli.credentials {
        Some(path) => FileTokenStore::new(path.clone()),
        None => FileTokenStore::from_default_location()
            .context("failed to locate the credentials file")?,
    };

    ApiClient::new(config, Arc::new(store)).context("failed to build the API client")
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_filter = if cli.verbose { "debug" } else { "warn" };
    logging::init(log_filter).context("failed to initialize logging")?;

    let client = build_client(&cli)?;

    match cli.command {
        Commands::Login { email, password } => commands::auth::login(&client, &email, &password).await,
        Commands::Register {
            email,
            password,
            gender,
        } => commands::auth::register(&client, &email, &password, gender).await,
        Commands::Logout => commands::auth::logout(&client).await,
        Commands::Whoami => commands::auth::whoami(&client).await,
        Commands::Weight(command) => match command {
            WeightCommand::Log { kg, date, note } => {
                commands::tracking::weight_log(&client, kg, date, note).await
            }
            WeightCommand::List { limit } => commands::tracking::weight_list(&client, limit).await,
            WeightCommand::Delete { id } => commands::tracking::weight_delete(&client, id).await,
        },
        Commands::Meal(command) => match command {
            MealCommand::Log {
                meal_type,
                description,
                calories,
                date,
            } => commands::tracking::meal_log(&client, &meal_type, &description, calories, date).await,
            MealCommand::List { date } => commands::tracking::meal_list(&client, date).await,
            MealCommand::Search { query, limit } => {
                commands::tracking::food_search(&client, &query, limit).await
            }
        },
        Commands::Workout(command) => match command {
            WorkoutCommand::Log {
                activity,
                minutes,
                calories,
                date,
            } => commands::tracking::workout_log(&client, &activity, minutes, calories, date).await,
            WorkoutCommand::List { date } => commands::tracking::workout_list(&client, date).await,
        },
        Commands::Labs(command) => match command {
            LabsCommand::List => commands::labs::list(&client).await,
            LabsCommand::Show { id } => commands::labs::show(&client, id).await,
        },
        Commands::Plan(command) => match command {
            PlanCommand::Monthly { year, month } => {
                commands::plans::monthly(&client, year, month).await
            }
            PlanCommand::Weekly { id } => commands::plans::weekly(&client, id).await,
            PlanCommand::Generate { week_start, focus } => {
                commands::plans::generate(&client, week_start, focus).await
            }
            PlanCommand::Adjust { id, instruction } => {
                commands::plans::adjust(&client, id, &instruction).await
            }
            PlanCommand::Complete { plan, item } => {
                commands::plans::complete(&client, plan, item).await
            }
        },
        Commands::Chat(command) => match command {
            ChatCommand::Send {
                message,
                conversation,
            } => commands::chat::send(&client, &message, conversation).await,
            ChatCommand::Conversations => commands::chat::conversations(&client).await,
            ChatCommand::History { id } => commands::chat::history(&client, id).await,
        },
    }
}
