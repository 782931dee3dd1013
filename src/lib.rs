//! argline — reconstruct structured arguments from a raw command-line string.
//!
//! A naive whitespace/quote tokenizer falls apart when argument values carry
//! embedded switch characters meant for a downstream program, quoted
//! negative numbers, or file paths containing spaces and dashes. argline
//! keeps the raw string intact and reconstructs an ordered list of
//! name/value pairs under a few togglable policies: pass-all bracketing
//! (`[A]`, `[ALL]`, `|`), one-level nested pass-through (`[A1]`, `[ALL1]`),
//! sticky delimiter suppression (`--disabledash`, `--disableslash`), and a
//! filesystem-backed path heuristic for values that look like paths.
//!
//! Malformed input never fails a parse; it degrades to a literal
//! interpretation of the offending tokens.
//!
//! ```
//! use argline::CmdLine;
//!
//! let line = CmdLine::parse(r#"-say "hello world" -num "-1""#);
//! assert_eq!(line.value_of(&["say"]), "hello world");
//! assert_eq!(line.value_of(&["num", "n"]), "-1");
//!
//! let line = CmdLine::parse("-run [A] cmd.exe /k dir [A]");
//! let run = line.arg(&["run"]).unwrap();
//! assert_eq!(run.value, "cmd.exe /k dir");
//! assert!(run.full_arg_supplied);
//! ```

pub mod arg;
pub mod cli;
pub mod cmdline;
pub mod config;
mod nesting;
pub mod options;
pub mod probe;
mod reconstruct;
pub mod split;
pub mod tokenizer;

pub use arg::Arg;
pub use cmdline::CmdLine;
pub use options::{ParseOptions, PathPolicy};
pub use probe::{FsProbe, PathProbe};
pub use reconstruct::{DISABLE_DASH_TOKEN, DISABLE_SLASH_TOKEN, PASS_ALL_MARKERS};
