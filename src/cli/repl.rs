//! Interactive REPL
//!
//! Reads raw command lines and prints the reconstructed argument list,
//! with history across sessions.

use std::io::{self, BufRead};

use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{Config, Editor};

use super::colors::Colors;
use super::output::{format_parsed, format_raw};
use crate::cmdline::CmdLine;
use crate::options::ParseOptions;

/// Settings shared by the three run modes.
pub struct Inspector {
    pub options: ParseOptions,
    pub raw: bool,
    pub colors_enabled: bool,
    pub verbose: bool,
}

impl Inspector {
    fn show(&self, input: &str, colors: &Colors) {
        let line = CmdLine::parse_with(input, &self.options);
        let output = if self.raw {
            format_raw(&line)
        } else {
            format_parsed(&line, colors)
        };
        println!("{}", output);
    }
}

/// Get history file path
fn history_path() -> Option<std::path::PathBuf> {
    dirs::data_dir().map(|p| p.join("argline").join("cli_history"))
}

/// Run the interactive REPL
pub fn run_interactive(inspector: &Inspector) -> io::Result<()> {
    let colors = Colors::new(inspector.colors_enabled);

    let config = Config::builder()
        .history_ignore_space(true)
        .auto_add_history(true)
        .build();

    let mut rl: Editor<(), DefaultHistory> =
        Editor::with_config(config).map_err(io::Error::other)?;

    // Load history
    if let Some(path) = history_path() {
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let _ = rl.load_history(&path);
    }

    loop {
        match rl.readline("argline> ") {
            Ok(line) => {
                let input = line.trim();
                if input.is_empty() {
                    continue;
                }

                match input.to_lowercase().as_str() {
                    "quit" | "exit" => break,
                    "help" | "?" => {
                        print_help(&colors);
                        continue;
                    }
                    "clear" => {
                        clear_screen();
                        continue;
                    }
                    _ => {}
                }

                inspector.show(input, &colors);
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl-D
                break;
            }
            Err(err) => {
                println!("{}Error: {:?}{}", colors.red(), err, colors.reset());
                break;
            }
        }
    }

    // Save history
    if let Some(path) = history_path() {
        let _ = rl.save_history(&path);
    }

    Ok(())
}

/// Parse a single command line and exit
pub fn run_command(command: &str, inspector: &Inspector) -> io::Result<()> {
    let colors = Colors::new(inspector.colors_enabled);
    inspector.show(command, &colors);
    Ok(())
}

/// Run in pipe mode (read command lines from stdin)
pub fn run_pipe(inspector: &Inspector) -> io::Result<()> {
    let colors = Colors::new(inspector.colors_enabled);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if inspector.verbose {
            println!("> {}", line);
        }
        inspector.show(line, &colors);
    }

    Ok(())
}

fn print_help(colors: &Colors) {
    println!("{}Commands:{}", colors.bold(), colors.reset());
    println!("  <any text>    - Parse it as a raw command line");
    println!("  clear         - Clear screen");
    println!("  quit, exit    - Leave (Ctrl-D works too)");
    println!();
    println!("{}Reserved tokens:{}", colors.bold(), colors.reset());
    println!("  [A] [ALL] |       - Pass-through bracketing");
    println!("  [A1] [ALL1]       - One-level nested command line");
    println!("  --disabledash     - Stop treating \"-\" as a delimiter");
    println!("  --disableslash    - Stop treating \"/\" as a delimiter");
}

fn clear_screen() {
    print!("\x1b[2J\x1b[1;1H");
}
