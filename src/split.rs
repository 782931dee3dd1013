//! Command-line splitting helpers.
//!
//! Separates a leading program path from the rest of a combined command
//! line. The path may contain spaces and be unquoted, so the candidate
//! grows token by token until the filesystem confirms it. Environment
//! variables can be expanded along the way for programs that do not expand
//! them themselves.

use crate::probe::PathProbe;
use crate::tokenizer;

/// Split `line` into `(program, arguments)`.
///
/// The candidate program grows one quote-stripped token at a time until it
/// names an existing file. If no prefix ever resolves, the first token is
/// taken as the program. The argument part keeps its quoting.
pub fn split_program(line: &str, probe: &dyn PathProbe, expand: bool) -> (String, String) {
    let tokens = tokenizer::tokenize(line);
    if tokens.is_empty() {
        return (line.trim().to_string(), String::new());
    }

    let mut candidate = String::new();
    for (i, token) in tokens.iter().enumerate() {
        if !candidate.is_empty() {
            candidate.push(' ');
        }
        let piece = token.replace('"', "");
        candidate.push_str(&maybe_expand(&piece, expand));
        if probe.exists(&candidate) {
            return (candidate, join_rest(&tokens[i + 1..], expand));
        }
    }

    (tokens[0].clone(), join_rest(&tokens[1..], expand))
}

/// The argument part of `line`, program path removed.
pub fn strip_program(line: &str, probe: &dyn PathProbe, expand: bool) -> String {
    split_program(line, probe, expand).1
}

/// The program part of `line`, arguments removed.
pub fn program_of(line: &str, probe: &dyn PathProbe, expand: bool) -> String {
    split_program(line, probe, expand).0
}

fn join_rest(tokens: &[String], expand: bool) -> String {
    tokens
        .iter()
        .map(|t| maybe_expand(t, expand))
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

fn maybe_expand(input: &str, expand: bool) -> String {
    if expand {
        expand_env(input)
    } else {
        input.to_string()
    }
}

/// Expand `%NAME%`, `$NAME` and `${NAME}` environment references. Unknown
/// variables are left verbatim.
pub fn expand_env(input: &str) -> String {
    expand_dollar(&expand_percent(input))
}

fn expand_percent(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(start) = rest.find('%') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        match after.find('%') {
            Some(end) if end > 0 => {
                let name = &after[..end];
                match std::env::var(name) {
                    Ok(value) => out.push_str(&value),
                    Err(_) => {
                        out.push('%');
                        out.push_str(name);
                        out.push('%');
                    }
                }
                rest = &after[end + 1..];
            }
            _ => {
                out.push('%');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

fn expand_dollar(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '$' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some('{') => {
                chars.next();
                let mut name = String::new();
                let mut closed = false;
                while let Some(&n) = chars.peek() {
                    chars.next();
                    if n == '}' {
                        closed = true;
                        break;
                    }
                    name.push(n);
                }
                match std::env::var(&name) {
                    Ok(value) if closed => out.push_str(&value),
                    _ => {
                        out.push_str("${");
                        out.push_str(&name);
                        if closed {
                            out.push('}');
                        }
                    }
                }
            }
            Some(&n) if n.is_ascii_alphanumeric() || n == '_' => {
                let mut name = String::new();
                while let Some(&n) = chars.peek() {
                    if n.is_ascii_alphanumeric() || n == '_' {
                        name.push(n);
                        chars.next();
                    } else {
                        break;
                    }
                }
                match std::env::var(&name) {
                    Ok(value) => out.push_str(&value),
                    Err(_) => {
                        out.push('$');
                        out.push_str(&name);
                    }
                }
            }
            _ => out.push('$'),
        }
    }
    out
}
