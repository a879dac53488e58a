use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "spreadkit")]
#[command(about = "Non-mutating sequence and object composition", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file (defaults to the nearest .spreadkit.toml)
    #[arg(long, global = true, env = "SPREADKIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Seed for remove-random, for reproducible output
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Keep only the even numbers
    FilterOutOdds {
        #[arg(allow_negative_numbers = true)]
        numbers: Vec<f64>,
    },

    /// Print the smallest number (Infinity when none are given)
    FindMin {
        #[arg(allow_negative_numbers = true)]
        numbers: Vec<f64>,
    },

    /// Append each extra number, doubled, to a JSON array of numbers
    DoubleAndReturnArgs {
        /// JSON array of numbers
        array: String,

        #[arg(allow_negative_numbers = true)]
        numbers: Vec<f64>,
    },

    /// Drop one randomly chosen element from a JSON array
    RemoveRandom {
        /// JSON array
        array: String,
    },

    /// Concatenate two JSON arrays
    Extend { first: String, second: String },

    /// Shallow-merge two JSON objects; the second wins on shared keys
    MergeObjects { first: String, second: String },

    /// Combine two JSON objects; the second wins on shared keys
    Combine { first: String, second: String },

    /// Set a key on a JSON object
    AddKeyVal {
        object: String,
        key: String,
        /// JSON value; anything that is not valid JSON is taken as a string
        value: String,
    },

    /// Set or overwrite a key on a JSON object
    Update {
        object: String,
        key: String,
        /// JSON value; anything that is not valid JSON is taken as a string
        value: String,
    },

    /// Remove a key from a JSON object
    RemoveKey { object: String, key: String },

    /// Write a default .spreadkit.toml to the current directory
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
