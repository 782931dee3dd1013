//! Inspector CLI
//!
//! Modular front end for parsing raw command lines interactively, one-shot,
//! or from stdin.

pub mod colors;
pub mod config;
pub mod output;
pub mod repl;
