use clap::{Parser, Subcommand};

/// MenuAllocator — plans one breakfast, lunch, and dinner per day from a
/// recipe catalog under calorie and dietary constraints.
#[derive(Parser, Debug)]
#[command(name = "menu_allocator")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the recipe catalog JSON file.
    #[arg(short, long, default_value = "recipes.json")]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Allocate a multi-day meal plan.
    Plan {
        /// Number of days to plan; prompted when omitted.
        #[arg(short, long)]
        days: Option<u32>,

        /// Daily calorie target per person; prompted when omitted.
        #[arg(short, long)]
        calories: Option<u32>,

        /// Number of people served.
        #[arg(short, long)]
        people: Option<u32>,

        /// Required dietary tags (repeatable); prompted when omitted.
        #[arg(long = "pref")]
        prefs: Option<Vec<String>>,

        /// Seed for the weighted draw; omit for a fresh plan each run.
        #[arg(long)]
        seed: Option<u64>,

        /// Start date label shown in the output (e.g. 2026-09-01).
        #[arg(long)]
        start_date: Option<String>,
    },

    /// Import a CSV recipe catalog into the JSON catalog file.
    Import {
        /// Path to the CSV file to import.
        #[arg(long)]
        csv: String,
    },

    /// List the dietary tags present in the catalog.
    Tags,
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan {
            days: None,
            calories: None,
            people: None,
            prefs: None,
            seed: None,
            start_date: None,
        }
    }
}
