//! CLI Arguments
//!
//! Command-line argument parsing for the inspector binary.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;
use crate::options::{ParseOptions, PathPolicy};

/// Inspect how a raw command line reconstructs into named arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "argline-cli")]
#[command(version)]
#[command(about = "Reconstruct and inspect command-line arguments", long_about = None)]
pub struct CliArgs {
    /// Parse this command line and exit
    #[arg(short = 'c', long)]
    pub command: Option<String>,

    /// Read command lines from stdin (pipe mode)
    #[arg(short = 'x', long)]
    pub pipe: bool,

    /// Raw output (tab-separated, no decoration)
    #[arg(long)]
    pub raw: bool,

    /// Enable verbose output
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Do not treat "-" as an argument delimiter
    #[arg(long)]
    pub disable_dash: bool,

    /// Do not treat "/" as an argument delimiter
    #[arg(long)]
    pub disable_slash: bool,

    /// Ignore inline --disabledash / --disableslash instructions
    #[arg(long)]
    pub no_special: bool,

    /// Argument name whose value is recovered via the file-path heuristic
    /// (repeatable)
    #[arg(long = "path-arg")]
    pub path_args: Vec<String>,

    /// Accept a file path anywhere in the token sequence instead of only
    /// when it runs to the end of the line
    #[arg(long)]
    pub path_anywhere: bool,

    /// Strip a leading program path before parsing
    #[arg(long)]
    pub strip_program: bool,

    /// Configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl CliArgs {
    /// Effective parse options: file configuration with CLI flags layered
    /// on top.
    pub fn parse_options(&self, file: &Config) -> ParseOptions {
        let mut options = file.parse_options();
        options.disable_dash |= self.disable_dash;
        options.disable_slash |= self.disable_slash;
        if self.no_special {
            options.allow_special_instructions = false;
        }
        options.strip_program |= self.strip_program;
        options.path_args.extend(self.path_args.iter().cloned());
        if self.path_anywhere {
            options.path_policy = PathPolicy::AnywhereInSequence;
        }
        options
    }

    pub fn colors_enabled(&self, file: &Config) -> bool {
        !(self.no_color || file.output.no_color)
    }

    pub fn raw_output(&self, file: &Config) -> bool {
        self.raw || file.output.raw
    }
}
