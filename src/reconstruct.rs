//! Argument reconstructor.
//!
//! Consumes the token sequence and decides, token by token, whether each
//! token starts a new named argument or extends the value of the current
//! one. Pass-all bracketing, sticky delimiter suppression, and the
//! file-path heuristic all live here.

use tracing::{debug, trace};

use crate::arg::Arg;
use crate::options::{ParseOptions, PathPolicy};
use crate::probe::PathProbe;

/// Pass-all bracket markers, case-insensitive. Open and close share the
/// same literal; `|` works interchangeably as either.
pub const PASS_ALL_MARKERS: &[&str] = &["[ALL]", "[A]", "|"];

/// Inline token that suppresses `/` as a delimiter for the rest of the parse.
pub const DISABLE_SLASH_TOKEN: &str = "--disableslash";
/// Inline token that suppresses `-` as a delimiter for the rest of the parse.
pub const DISABLE_DASH_TOKEN: &str = "--disabledash";

/// Scan mode. `just_opened` is true for exactly one token after a pass-all
/// opener so that token can still act as the closing marker without the
/// opener closing itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Scanning,
    PassAll { just_opened: bool },
}

/// Sticky delimiter suppression. Once a flag turns on it stays on for the
/// remainder of the parse.
#[derive(Debug, Clone, Copy)]
struct Suppression {
    dash: bool,
    slash: bool,
}

pub(crate) struct Reconstruction {
    pub args: Vec<Arg>,
    pub dash_or_slash_disabled: bool,
}

/// Outcome of probing the tokens that follow a path-sensitive switch.
enum PathOutcome {
    /// Full remaining concatenation resolved; the scan terminates.
    Final(String),
    /// A prefix resolved; `consumed` tokens are skipped.
    Prefix { path: String, consumed: usize },
    Miss,
}

/// Run the state machine over `tokens`. Never fails: malformed input
/// degrades to a literal interpretation of the offending tokens.
pub(crate) fn reconstruct(
    tokens: &[String],
    options: &ParseOptions,
    probe: &dyn PathProbe,
) -> Reconstruction {
    let mut args: Vec<Arg> = Vec::new();
    let mut current: Option<Arg> = None;
    let mut mode = Mode::Scanning;
    let mut suppress = Suppression {
        dash: options.disable_dash,
        slash: options.disable_slash,
    };

    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i].trim();
        i += 1;

        if mode == Mode::Scanning && options.allow_special_instructions {
            if token.eq_ignore_ascii_case(DISABLE_SLASH_TOKEN) {
                suppress.slash = true;
                continue;
            }
            if token.eq_ignore_ascii_case(DISABLE_DASH_TOKEN) {
                suppress.dash = true;
                continue;
            }
        }

        match mode {
            Mode::Scanning => {
                if let Some(marker) = leading_marker(token) {
                    trace!(token, "pass-all opened");
                    if let Some(arg) = current.as_mut() {
                        arg.full_arg_supplied = true;
                    }
                    let rest = &token[marker.len()..];
                    if rest.is_empty() {
                        mode = Mode::PassAll { just_opened: true };
                    } else if let Some(close) = trailing_marker(rest) {
                        // Opened and closed within a single token, e.g. [a]-1[a].
                        append_fragment(current.as_mut(), &rest[..rest.len() - close.len()], false);
                    } else {
                        append_fragment(current.as_mut(), rest, false);
                        mode = Mode::PassAll { just_opened: true };
                    }
                    continue;
                }

                let delimiter = match token.chars().next() {
                    Some('-') if !suppress.dash => Some('-'),
                    Some('/') if !suppress.slash => Some('/'),
                    _ => None,
                };

                if let Some(delimiter) = delimiter {
                    if let Some(prev) = current.take().filter(Arg::has_content) {
                        args.push(prev);
                    }
                    let name = &token[1..];
                    trace!(name, "new argument");
                    let mut arg = Arg::switch(delimiter, name);

                    if options.is_path_arg(name) {
                        match probe_path(&tokens[i..], options.path_policy, probe) {
                            PathOutcome::Final(path) => {
                                debug!(path, "file-path heuristic consumed remaining tokens");
                                arg.value = path;
                                args.push(arg);
                                break;
                            }
                            PathOutcome::Prefix { path, consumed } => {
                                debug!(path, consumed, "file-path heuristic matched a prefix");
                                arg.value = path;
                                args.push(arg);
                                i += consumed;
                                continue;
                            }
                            PathOutcome::Miss => {}
                        }
                    }

                    current = Some(arg);
                    continue;
                }

                append_fragment(current.as_mut(), token, true);
            }
            Mode::PassAll { just_opened } => {
                mode = Mode::PassAll { just_opened: false };

                if current.is_none() {
                    // Pass-all opened with no argument in progress swallows
                    // tokens without producing anything.
                    continue;
                }
                if just_opened && is_marker(token) {
                    // The token right after the opener was the closer.
                    mode = Mode::Scanning;
                    continue;
                }
                if let Some(close) = trailing_marker(token) {
                    append_fragment(current.as_mut(), &token[..token.len() - close.len()], false);
                    mode = Mode::Scanning;
                    trace!("pass-all closed");
                } else {
                    append_fragment(current.as_mut(), token, false);
                }
            }
        }
    }

    if let Some(arg) = current.take().filter(Arg::has_content) {
        args.push(arg);
    }

    for arg in &mut args {
        arg.value = arg.value.trim().to_string();
    }

    Reconstruction {
        dash_or_slash_disabled: suppress.dash || suppress.slash,
        args,
    }
}

/// Append a token to the current argument's value, separated by a single
/// space. Outside pass-all regions, at most one pair of wrapping quotes is
/// stripped from the fragment. Without an argument in progress the token is
/// dropped.
fn append_fragment(arg: Option<&mut Arg>, fragment: &str, trim_quotes: bool) {
    let Some(arg) = arg else { return };
    let fragment = if trim_quotes {
        trim_quote_pair(fragment)
    } else {
        fragment
    };
    if fragment.is_empty() {
        return;
    }
    if !arg.value.is_empty() {
        arg.value.push(' ');
    }
    arg.value.push_str(fragment);
}

/// Strip one leading and one trailing `"`, each only if the remainder keeps
/// at least one character.
fn trim_quote_pair(fragment: &str) -> &str {
    let mut out = fragment;
    if out.len() > 1 && out.starts_with('"') {
        out = &out[1..];
    }
    if out.len() > 1 && out.ends_with('"') {
        out = &out[..out.len() - 1];
    }
    out
}

fn is_marker(token: &str) -> bool {
    PASS_ALL_MARKERS.iter().any(|m| token.eq_ignore_ascii_case(m))
}

fn leading_marker(token: &str) -> Option<&'static str> {
    PASS_ALL_MARKERS
        .iter()
        .find(|m| {
            token
                .get(..m.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(m))
        })
        .copied()
}

fn trailing_marker(token: &str) -> Option<&'static str> {
    PASS_ALL_MARKERS
        .iter()
        .find(|m| {
            token.len() >= m.len()
                && token
                    .get(token.len() - m.len()..)
                    .is_some_and(|tail| tail.eq_ignore_ascii_case(m))
        })
        .copied()
}

/// Speculatively concatenate the remaining tokens and ask the probe whether
/// the result names an existing file. Quote characters are dropped from the
/// candidates, as a path with spaces is usually supplied quoted.
fn probe_path(remaining: &[String], policy: PathPolicy, probe: &dyn PathProbe) -> PathOutcome {
    if remaining.is_empty() {
        return PathOutcome::Miss;
    }
    match policy {
        PathPolicy::MustBeFinal => {
            let candidate = remaining
                .iter()
                .map(|t| t.trim().replace('"', ""))
                .collect::<Vec<_>>()
                .join(" ");
            if probe.exists(&candidate) {
                PathOutcome::Final(candidate)
            } else {
                PathOutcome::Miss
            }
        }
        PathPolicy::AnywhereInSequence => {
            let mut candidate = String::new();
            for (idx, token) in remaining.iter().enumerate() {
                if !candidate.is_empty() {
                    candidate.push(' ');
                }
                candidate.push_str(&token.trim().replace('"', ""));
                if probe.exists(&candidate) {
                    return PathOutcome::Prefix {
                        path: candidate,
                        consumed: idx + 1,
                    };
                }
            }
            PathOutcome::Miss
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::fake::FakeProbe;
    use crate::tokenizer::tokenize;

    fn parse(line: &str) -> Vec<Arg> {
        parse_with(line, &ParseOptions::default())
    }

    fn parse_with(line: &str, options: &ParseOptions) -> Vec<Arg> {
        reconstruct(&tokenize(line), options, &FakeProbe::empty()).args
    }

    fn arg(name: &str, value: &str) -> Arg {
        Arg {
            name: name.to_string(),
            value: value.to_string(),
            full_arg_supplied: false,
            delimiter: Some('-'),
        }
    }

    #[test]
    fn test_name_value_with_spaces() {
        assert_eq!(parse("-name value with spaces"), vec![arg("name", "value with spaces")]);
    }

    #[test]
    fn test_multiple_switches() {
        let args = parse("-a 1 -b two words /c 3");
        assert_eq!(args.len(), 3);
        assert_eq!(args[0], arg("a", "1"));
        assert_eq!(args[1], arg("b", "two words"));
        assert_eq!(args[2].name, "c");
        assert_eq!(args[2].value, "3");
        assert_eq!(args[2].delimiter, Some('/'));
    }

    #[test]
    fn test_tokens_before_first_switch_dropped() {
        assert_eq!(parse("stray tokens -a 1"), vec![arg("a", "1")]);
    }

    #[test]
    fn test_switch_without_value() {
        assert_eq!(parse("-flag"), vec![arg("flag", "")]);
        assert_eq!(parse("-flag -a 1"), vec![arg("flag", ""), arg("a", "1")]);
    }

    #[test]
    fn test_quoted_negative_number() {
        // The quotes keep -1 from starting a new argument and are stripped.
        assert_eq!(parse(r#"-num "-1""#), vec![arg("num", "-1")]);
    }

    #[test]
    fn test_quoted_value_keeps_inner_spacing() {
        assert_eq!(parse(r#"-m "a  b""#), vec![arg("m", "a  b")]);
    }

    #[test]
    fn test_pass_all_brackets() {
        let args = parse("-a [A] -x -y [A]");
        assert_eq!(args.len(), 1);
        assert_eq!(args[0].name, "a");
        assert_eq!(args[0].value, "-x -y");
        assert!(args[0].full_arg_supplied);
    }

    #[test]
    fn test_pass_all_case_insensitive() {
        let args = parse("-a [all] /k dir [ALL]");
        assert_eq!(args[0].value, "/k dir");
        assert!(args[0].full_arg_supplied);
    }

    #[test]
    fn test_pass_all_pipe_marker() {
        let args = parse("-a | -x -y |");
        assert_eq!(args, vec![Arg { full_arg_supplied: true, ..arg("a", "-x -y") }]);
    }

    #[test]
    fn test_pass_all_single_token() {
        let args = parse("-s [a]-1[a] -d hello");
        assert_eq!(args.len(), 2);
        assert_eq!(args[0].value, "-1");
        assert!(args[0].full_arg_supplied);
        assert_eq!(args[1], arg("d", "hello"));
    }

    #[test]
    fn test_pass_all_empty_region() {
        let args = parse("-a [a] [a] -b 1");
        assert_eq!(args.len(), 2);
        assert_eq!(args[0].value, "");
        assert!(args[0].full_arg_supplied);
        assert_eq!(args[1], arg("b", "1"));
    }

    #[test]
    fn test_pass_all_without_open_argument_swallows() {
        assert!(parse("[a] x -b 1").is_empty());
    }

    #[test]
    fn test_unclosed_pass_all_runs_to_end() {
        let args = parse("-a [A] -x -y");
        assert_eq!(args[0].value, "-x -y");
        assert!(args[0].full_arg_supplied);
    }

    #[test]
    fn test_disable_dash_inline() {
        let args = parse("-a 1 --disabledash -x");
        assert_eq!(args, vec![arg("a", "1 -x")]);
    }

    #[test]
    fn test_disable_slash_inline() {
        let args = parse("/a 1 --DisableSlash /k");
        assert_eq!(args.len(), 1);
        assert_eq!(args[0].value, "1 /k");
    }

    #[test]
    fn test_disable_dash_config() {
        let options = ParseOptions {
            disable_dash: true,
            ..ParseOptions::default()
        };
        let args = parse_with("/a -x", &options);
        assert_eq!(args.len(), 1);
        assert_eq!(args[0].name, "a");
        assert_eq!(args[0].value, "-x");
    }

    #[test]
    fn test_disabled_flag_reported() {
        let tokens = tokenize("-a 1 --disabledash");
        let rec = reconstruct(&tokens, &ParseOptions::default(), &FakeProbe::empty());
        assert!(rec.dash_or_slash_disabled);

        let rec = reconstruct(&tokenize("-a 1"), &ParseOptions::default(), &FakeProbe::empty());
        assert!(!rec.dash_or_slash_disabled);
    }

    #[test]
    fn test_special_instructions_inert() {
        let options = ParseOptions {
            allow_special_instructions: false,
            ..ParseOptions::default()
        };
        let args = parse_with("--disabledash -a 1", &options);
        assert_eq!(args.len(), 2);
        assert_eq!(args[0].name, "-disabledash");
        assert_eq!(args[1], arg("a", "1"));
    }

    #[test]
    fn test_path_must_be_final_hit() {
        let probe = FakeProbe::new(&[r"C:\Apps\test -dir\ToRun.exe"]);
        let options = ParseOptions {
            path_args: vec!["a".to_string()],
            ..ParseOptions::default()
        };
        let rec = reconstruct(&tokenize(r"-a C:\Apps\test -dir\ToRun.exe"), &options, &probe);
        assert_eq!(rec.args.len(), 1);
        assert_eq!(rec.args[0].value, r"C:\Apps\test -dir\ToRun.exe");
    }

    #[test]
    fn test_path_must_be_final_miss_falls_through() {
        let options = ParseOptions {
            path_args: vec!["a".to_string()],
            ..ParseOptions::default()
        };
        let args = parse_with(r"-a C:\missing.exe -t 1", &options);
        assert_eq!(args.len(), 2);
        assert_eq!(args[0].value, r"C:\missing.exe");
        assert_eq!(args[1], arg("t", "1"));
    }

    #[test]
    fn test_path_anywhere_resumes_after_match() {
        let probe = FakeProbe::new(&[r"C:\Apps\test -dir\ToRun.exe"]);
        let options = ParseOptions {
            path_args: vec!["a".to_string()],
            path_policy: PathPolicy::AnywhereInSequence,
            ..ParseOptions::default()
        };
        let rec = reconstruct(
            &tokenize(r"-a C:\Apps\test -dir\ToRun.exe -test"),
            &options,
            &probe,
        );
        assert_eq!(rec.args.len(), 2);
        assert_eq!(rec.args[0].value, r"C:\Apps\test -dir\ToRun.exe");
        assert_eq!(rec.args[1], arg("test", ""));
    }

    #[test]
    fn test_path_anywhere_miss_falls_through() {
        let options = ParseOptions {
            path_args: vec!["a".to_string()],
            path_policy: PathPolicy::AnywhereInSequence,
            ..ParseOptions::default()
        };
        assert_eq!(parse_with("-a x y", &options), vec![arg("a", "x y")]);
    }

    #[test]
    fn test_path_candidate_quotes_stripped() {
        let probe = FakeProbe::new(&[r"C:\My Apps\run.exe"]);
        let options = ParseOptions {
            path_args: vec!["a".to_string()],
            ..ParseOptions::default()
        };
        let rec = reconstruct(&tokenize(r#"-a "C:\My Apps\run.exe""#), &options, &probe);
        assert_eq!(rec.args[0].value, r"C:\My Apps\run.exe");
    }

    #[test]
    fn test_path_heuristic_skipped_for_other_names() {
        let probe = FakeProbe::new(&["x"]);
        let options = ParseOptions {
            path_args: vec!["run".to_string()],
            ..ParseOptions::default()
        };
        let rec = reconstruct(&tokenize("-other x"), &options, &probe);
        assert_eq!(rec.args, vec![arg("other", "x")]);
    }

    #[test]
    fn test_reparse_is_identical() {
        let line = r#"-a [A] /k "x y" [A] -b "-2" --disableslash /lit"#;
        assert_eq!(parse(line), parse(line));
    }
}
