//! Command-line argument definitions for the exam layout CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Each [`Command`] reads JSON input files and writes JSON to
//! an output file or stdout.

use clap::{Parser, Subcommand};

/// Command-line arguments for the exam layout tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,
}

/// Operations on a test version
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate the layout of an attempt
    Generate {
        /// Path to the test version (JSON)
        #[arg(long)]
        version: String,

        /// Attempt identifier
        #[arg(long)]
        attempt: String,

        /// Participant identifier
        #[arg(long)]
        participant: String,

        /// Output path; stdout if omitted
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Reorder a test version by a stored layout
    Apply {
        /// Path to the test version (JSON)
        #[arg(long)]
        version: String,

        /// Path to the stored layout (JSON); canonical order if omitted
        #[arg(long)]
        layout: Option<String>,

        /// Output path; stdout if omitted
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Show the fixed-seed authoring preview of a test version
    Preview {
        /// Path to the test version (JSON)
        #[arg(long)]
        version: String,

        /// Output path; stdout if omitted
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Grade a response sheet
    Grade {
        /// Path to the test version (JSON)
        #[arg(long)]
        version: String,

        /// Path to the attempt's stored layout (JSON)
        #[arg(long)]
        layout: Option<String>,

        /// Path to the response sheet (JSON)
        #[arg(long)]
        responses: String,

        /// Output path; stdout if omitted
        #[arg(short, long)]
        output: Option<String>,
    },
}
