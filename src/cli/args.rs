use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "salat", version, about = "Daily prayer times, completion tracking and reminders in your terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show today's prayer times for the selected city
    Times,
    /// Search cities by name (at least 2 characters)
    Search {
        /// Beginning of the city name
        query: String,
    },
    /// Select a city and show its prayer times
    Select {
        /// City name, as returned by `search`
        city: String,
    },
    /// Select the city at the given coordinates
    #[command(allow_negative_numbers = true)]
    Locate {
        /// Decimal degrees, north positive
        latitude: f64,
        /// Decimal degrees, east positive
        longitude: f64,
    },
    /// Mark a prayer as completed for today
    Mark {
        /// Prayer name (fajr, dhuhr, asr, maghrib, isha)
        prayer: String,
        /// Clear the mark instead
        #[arg(long)]
        undo: bool,
    },
    /// Show today's completion progress
    Status,
    /// Show the config file location and effective settings
    Config {
        /// Write a config file with the defaults if none exists
        #[arg(long)]
        init: bool,
    },
}
