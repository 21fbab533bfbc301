use clap::{Parser, Subcommand};

/// Nutrition Advisor: log meals, check totals against daily targets, and get
/// diet advice for health conditions.
#[derive(Parser, Debug)]
#[command(name = "nutrition_advisor")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the day log JSON file.
    #[arg(short, long, default_value = "nutrition_day.json", global = true)]
    pub file: String,

    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show today's totals, progress against targets, and recommendations.
    Summary {
        /// Print the summary as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Add a food to a meal. Prompts for anything not given.
    Add {
        /// Catalog id or food name.
        food: Option<String>,

        /// breakfast, lunch, dinner or snacks.
        #[arg(short, long)]
        meal: Option<String>,
    },

    /// List catalog foods.
    Foods {
        /// Only foods whose name contains this text.
        #[arg(short, long, default_value = "")]
        search: String,

        /// Only foods in this category (fruits, vegetables, meats, dairy, grains, sweets, other).
        #[arg(short, long)]
        category: Option<String>,
    },

    /// List the health conditions.
    Conditions,

    /// Diet advice for health conditions based on today's foods.
    Advise {
        /// Condition ids. Prompts when omitted.
        ids: Vec<String>,

        /// Print the advice as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Start a new empty day.
    NewDay {
        /// Date label (default: today).
        #[arg(long)]
        date: Option<String>,
    },

    /// Export today's foods to CSV.
    Export {
        /// Output CSV path.
        path: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Summary { json: false }
    }
}
