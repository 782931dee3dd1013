//! Output Formatting
//!
//! Renders a reconstructed argument list for display.

use super::colors::Colors;
use crate::arg::Arg;
use crate::cmdline::CmdLine;

/// Format a parsed command line for display
pub fn format_parsed(line: &CmdLine, colors: &Colors) -> String {
    if line.args().is_empty() {
        let note = if line.any_token_supplied() {
            "(no arguments recognized)"
        } else {
            "(empty command line)"
        };
        return format!("{}{}{}", colors.yellow(), note, colors.reset());
    }

    let mut out = String::new();
    for (i, arg) in line.args().iter().enumerate() {
        out.push_str(&format_arg(i + 1, arg, colors));
        out.push('\n');
    }
    if line.dash_or_slash_disabled() {
        out.push_str(&format!(
            "{}(delimiter suppression active){}\n",
            colors.dim(),
            colors.reset()
        ));
    }
    out.trim_end().to_string()
}

fn format_arg(index: usize, arg: &Arg, colors: &Colors) -> String {
    let mut notes = Vec::new();
    if arg.full_arg_supplied {
        notes.push("pass-all");
    }
    if arg.delimiter.is_none() {
        notes.push("nested");
    }
    let notes = if notes.is_empty() {
        String::new()
    } else {
        format!(" {}[{}]{}", colors.dim(), notes.join(", "), colors.reset())
    };

    format!(
        "{:>2}) {}{}{}{} = {}\"{}\"{}{}",
        index,
        colors.green(),
        arg.delimiter.unwrap_or(' '),
        arg.name,
        colors.reset(),
        colors.cyan(),
        arg.value,
        colors.reset(),
        notes
    )
}

/// Format raw output (no colors, no prefixes)
pub fn format_raw(line: &CmdLine) -> String {
    line.args()
        .iter()
        .map(|a| format!("{}\t{}", a.name, a.value))
        .collect::<Vec<_>>()
        .join("\n")
}
