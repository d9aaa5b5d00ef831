use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "artisort", bin_name = "artisort", version = env!("ARTISORT_VERSION"))]
#[command(about = "Decide which artifacts to lock, using your own spreadsheet rules", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a rule workbook and list its rules
    Check {
        /// Rule workbook (.json, .tsv or .txt)
        rules: PathBuf,
    },

    /// Decide keep/discard for every artifact in an item file
    #[command(alias = "c")]
    Classify {
        /// JSON array of artifact records
        items: PathBuf,

        /// Rule workbook; overrides the configured one
        #[arg(short, long, value_name = "PATH")]
        rules: Option<PathBuf>,

        /// Ignore any configured rules and use the built-in heuristic
        #[arg(long, conflicts_with = "rules")]
        heuristic: bool,
    },

    /// List the words a rule sheet accepts
    Labels,

    /// Show or change settings in the config file
    Config {
        /// rules_file or active_sheet; omit to list both
        key: Option<String>,

        /// New value; an empty rules_file goes back to the heuristic
        value: Option<String>,
    },

    /// Write an empty rule workbook with the expected header
    Template {
        /// Output file (.json for a workbook, .tsv or .txt for tab-separated)
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
