use crate::models::WorkoutKind;
use clap::{ArgAction, Parser, Subcommand};

/// Command-line interface definition for rcardio
#[derive(Parser, Debug)]
#[command(
    name = "rcardio",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log running and cycling workouts on a map",
    long_about = None
)]
pub struct Cli {
    /// Use this configuration file instead of ~/.rcardio/rcardio.conf
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Override the storage directory (useful for tests or a second history)
    #[arg(global = true, long = "storage", value_name = "DIR")]
    pub storage: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease log verbosity (-q)
    #[arg(short = 'q', long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the configuration file and the storage directory
    Init {
        /// Latitude of the default map center
        #[arg(long = "home-lat", requires = "home_lng", allow_hyphen_values = true)]
        home_lat: Option<f64>,

        /// Longitude of the default map center
        #[arg(long = "home-lng", requires = "home_lat", allow_hyphen_values = true)]
        home_lng: Option<f64>,
    },

    /// Show the configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Log a workout at a map location
    Add {
        /// Latitude of the picked location
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// Longitude of the picked location
        #[arg(long, allow_hyphen_values = true)]
        lng: f64,

        #[arg(long, value_enum, default_value = "running")]
        kind: WorkoutKind,

        /// Distance in km
        #[arg(long, allow_hyphen_values = true, default_value = "")]
        distance: String,

        /// Duration in minutes
        #[arg(long, allow_hyphen_values = true, default_value = "")]
        duration: String,

        /// Cadence in steps per minute (running)
        #[arg(long, allow_hyphen_values = true, default_value = "")]
        cadence: String,

        /// Elevation gain in meters (cycling)
        #[arg(long, allow_hyphen_values = true, default_value = "")]
        elevation: String,
    },

    /// List logged workouts
    List,

    /// Center the map on a logged workout
    Show {
        /// Workout id, as printed by `list`
        id: String,
    },

    /// Delete every logged workout
    Reset {
        #[arg(long, short = 'f', help = "Do not ask for confirmation")]
        force: bool,
    },
}
