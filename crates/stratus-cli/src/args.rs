//! Command-line argument definitions for the Stratus CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the input template, stack identity,
//! report destination, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Stratus stack interpreter
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input template file
    #[arg(help = "Path to the template file")]
    pub input: String,

    /// Path to write the stack report to (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Name of the stack to build
    #[arg(short = 'n', long, default_value = "local")]
    pub stack_name: String,

    /// Region to build the stack in
    #[arg(short, long, default_value = "us-east-1")]
    pub region: String,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
