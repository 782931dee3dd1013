//! Parsed command line and its query layer.
//!
//! `CmdLine` runs one parse over a raw string and owns the resulting
//! argument list immutably. All lookups are case-insensitive and
//! first-match-wins; a leading `-` or `/` on a queried name is ignored so
//! callers may write `"-num"` or `"num"` interchangeably.

use tracing::debug;

use crate::arg::Arg;
use crate::nesting;
use crate::options::ParseOptions;
use crate::probe::{FsProbe, PathProbe};
use crate::reconstruct::reconstruct;
use crate::split;
use crate::tokenizer;

/// One parsed command line. Built once per parse invocation; immutable
/// afterwards.
#[derive(Debug, Clone)]
pub struct CmdLine {
    args: Vec<Arg>,
    any_token_supplied: bool,
    dash_or_slash_disabled: bool,
}

impl CmdLine {
    /// Parse `raw` with default options and the real filesystem probe.
    pub fn parse(raw: &str) -> Self {
        Self::parse_with(raw, &ParseOptions::default())
    }

    /// Parse `raw` with explicit options.
    pub fn parse_with(raw: &str, options: &ParseOptions) -> Self {
        Self::parse_with_probe(raw, options, &FsProbe)
    }

    /// Parse `raw` with explicit options and an injected existence probe.
    pub fn parse_with_probe(raw: &str, options: &ParseOptions, probe: &dyn PathProbe) -> Self {
        let stripped;
        let raw = if options.strip_program {
            stripped = split::strip_program(raw, probe, false);
            stripped.as_str()
        } else {
            raw
        };

        if let Some(nested) = nesting::split_nested(raw) {
            debug!(name = nested.name.as_str(), "applying one-level nesting");
            let tokens = tokenizer::tokenize(&nested.remainder);
            let mut rec = reconstruct(&tokens, options, probe);
            rec.args.push(Arg::nested(&nested.name, nested.payload.trim()));
            return CmdLine {
                args: rec.args,
                any_token_supplied: true,
                dash_or_slash_disabled: rec.dash_or_slash_disabled,
            };
        }

        let tokens = tokenizer::tokenize(raw);
        let any_token_supplied = !tokens.is_empty();
        let rec = reconstruct(&tokens, options, probe);
        CmdLine {
            args: rec.args,
            any_token_supplied,
            dash_or_slash_disabled: rec.dash_or_slash_disabled,
        }
    }

    /// Parse the current process's arguments with default options.
    ///
    /// There is no raw command line to read back on most platforms, so the
    /// line is rebuilt from `std::env::args`, re-quoting any argument that
    /// contains whitespace. The program path itself is skipped.
    pub fn from_env() -> Self {
        Self::parse(&env_command_line())
    }

    /// The reconstructed arguments, in the order their first token appeared.
    pub fn args(&self) -> &[Arg] {
        &self.args
    }

    /// Whether the raw string contained at least one token, switch or not.
    pub fn any_token_supplied(&self) -> bool {
        self.any_token_supplied
    }

    /// Whether at least one argument with a recognized delimiter was
    /// produced.
    pub fn any_switch_supplied(&self) -> bool {
        self.args.iter().any(|a| a.delimiter.is_some())
    }

    /// Whether `-` or `/` was suppressed, by configuration or by an inline
    /// disable token.
    pub fn dash_or_slash_disabled(&self) -> bool {
        self.dash_or_slash_disabled
    }

    /// First argument matching any of `aliases`.
    pub fn arg(&self, aliases: &[&str]) -> Option<&Arg> {
        aliases.iter().find_map(|alias| self.find(alias))
    }

    /// Value of the first alias that was supplied with a non-blank value;
    /// empty string when none was.
    pub fn value_of(&self, aliases: &[&str]) -> &str {
        aliases
            .iter()
            .filter_map(|alias| self.find(alias))
            .map(|a| a.value.as_str())
            .find(|v| !v.trim().is_empty())
            .unwrap_or("")
    }

    /// Like [`value_of`](Self::value_of), but `default` when no alias was
    /// supplied at all. An alias supplied with a blank value still yields
    /// the empty string, not the default.
    pub fn value_of_or<'a>(&'a self, aliases: &[&str], default: &'a str) -> &'a str {
        if self.was_supplied(aliases) {
            self.value_of(aliases)
        } else {
            default
        }
    }

    /// Whether any of `aliases` was supplied.
    pub fn was_supplied(&self, aliases: &[&str]) -> bool {
        self.arg(aliases).is_some()
    }

    /// First argument whose name starts with `prefix`, so `imp` finds
    /// `-imp`, `-impersonate` or `-impersonation`.
    pub fn arg_starts_with(&self, prefix: &str) -> Option<&Arg> {
        let prefix = normalize(prefix);
        self.args.iter().find(|a| {
            a.name
                .get(..prefix.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
        })
    }

    /// Whether an argument name starting with `prefix` was supplied.
    pub fn was_supplied_starts_with(&self, prefix: &str) -> bool {
        self.arg_starts_with(prefix).is_some()
    }

    /// Value of the first argument whose name starts with `prefix`.
    pub fn value_of_starts_with(&self, prefix: &str) -> &str {
        self.arg_starts_with(prefix)
            .map(|a| a.value.as_str())
            .unwrap_or("")
    }

    /// Exact name that matched a prefix query, as supplied on the line.
    pub fn supplied_name_starts_with(&self, prefix: &str) -> Option<&str> {
        self.arg_starts_with(prefix).map(|a| a.name.as_str())
    }

    /// First of `names` that was supplied, as supplied on the line.
    pub fn first_supplied_name(&self, names: &[&str]) -> Option<&str> {
        names
            .iter()
            .find_map(|n| self.find(n).map(|a| a.name.as_str()))
    }

    /// All of `names` that were supplied, in query order, each as supplied
    /// on the line.
    pub fn supplied_names(&self, names: &[&str]) -> Vec<String> {
        names
            .iter()
            .filter_map(|n| self.find(n).map(|a| a.name.clone()))
            .collect()
    }

    /// Whether any argument outside `exclusions` was supplied.
    pub fn any_supplied_except(&self, exclusions: &[&str]) -> bool {
        self.args.iter().any(|a| {
            !exclusions
                .iter()
                .any(|e| normalize(e).eq_ignore_ascii_case(&a.name))
        })
    }

    fn find(&self, alias: &str) -> Option<&Arg> {
        let name = normalize(alias);
        self.args.iter().find(|a| a.name.eq_ignore_ascii_case(name))
    }
}

/// Trim one leading `-` or `/` from a queried name, in case the caller
/// wrote the switch form.
fn normalize(query: &str) -> &str {
    if query.len() > 1 {
        query.strip_prefix(['-', '/']).unwrap_or(query)
    } else {
        query
    }
}

fn env_command_line() -> String {
    std::env::args()
        .skip(1)
        .map(|arg| {
            if arg.contains(char::is_whitespace) {
                format!("\"{arg}\"")
            } else {
                arg
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::PathPolicy;
    use crate::probe::fake::FakeProbe;

    #[test]
    fn test_nesting_end_to_end() {
        let line = CmdLine::parse("pre -cmdline [A1] run -x -y [A1] post");
        assert_eq!(line.args().len(), 1);
        let nested = &line.args()[0];
        assert_eq!(nested.name, "cmdline");
        assert_eq!(nested.value, "run -x -y");
        assert!(nested.full_arg_supplied);
        assert_eq!(nested.delimiter, None);
    }

    #[test]
    fn test_nesting_keeps_surrounding_switches() {
        let line = CmdLine::parse("-v 1 -cmdline [A1] run -x [A1] -w 2");
        assert_eq!(line.value_of(&["v"]), "1");
        assert_eq!(line.value_of(&["w"]), "2");
        assert_eq!(line.value_of(&["cmdline"]), "run -x");
        assert!(line.arg(&["cmdline"]).unwrap().full_arg_supplied);
    }

    #[test]
    fn test_unmatched_nesting_marker_is_literal() {
        let line = CmdLine::parse("-cmdline [A1] run");
        assert_eq!(line.value_of(&["cmdline"]), "[A1] run");
    }

    #[test]
    fn test_derived_flags() {
        assert!(!CmdLine::parse("").any_token_supplied());
        let line = CmdLine::parse("bare");
        assert!(line.any_token_supplied());
        assert!(!line.any_switch_supplied());
        let line = CmdLine::parse("-x");
        assert!(line.any_switch_supplied());
        assert!(!line.dash_or_slash_disabled());
        assert!(CmdLine::parse("-a 1 --disabledash").dash_or_slash_disabled());
    }

    #[test]
    fn test_alias_lookup_prefers_first_nonblank() {
        let line = CmdLine::parse("-n -num 5");
        assert_eq!(line.value_of(&["n", "num"]), "5");
        assert!(line.was_supplied(&["n"]));
    }

    #[test]
    fn test_lookup_is_case_insensitive_and_trims_delimiters() {
        let line = CmdLine::parse("-Say hello");
        assert!(line.was_supplied(&["-say"]));
        assert!(line.was_supplied(&["/SAY"]));
        assert_eq!(line.value_of(&["say"]), "hello");
        assert_eq!(line.arg(&["say"]).unwrap().name, "Say");
    }

    #[test]
    fn test_value_of_or() {
        let line = CmdLine::parse("-num 5 -blank");
        assert_eq!(line.value_of_or(&["num"], "1"), "5");
        assert_eq!(line.value_of_or(&["missing"], "1"), "1");
        assert_eq!(line.value_of_or(&["blank"], "1"), "");
    }

    #[test]
    fn test_starts_with_queries() {
        let line = CmdLine::parse("-impersonate user1");
        assert!(line.was_supplied_starts_with("imp"));
        assert!(!line.was_supplied_starts_with("con"));
        assert_eq!(line.value_of_starts_with("-imp"), "user1");
        assert_eq!(line.supplied_name_starts_with("imp"), Some("impersonate"));
    }

    #[test]
    fn test_name_sets() {
        let line = CmdLine::parse("-a 1 -b 2");
        assert_eq!(line.first_supplied_name(&["-x", "-b"]), Some("b"));
        assert_eq!(line.supplied_names(&["-hide", "-a", "-b"]), vec!["a", "b"]);
        assert!(line.any_supplied_except(&["a"]));
        assert!(!line.any_supplied_except(&["a", "-b"]));
    }

    #[test]
    fn test_strip_program_option() {
        let probe = FakeProbe::new(&["my tool.exe"]);
        let options = ParseOptions {
            strip_program: true,
            ..ParseOptions::default()
        };
        let line = CmdLine::parse_with_probe("my tool.exe -a 1", &options, &probe);
        assert_eq!(line.args().len(), 1);
        assert_eq!(line.value_of(&["a"]), "1");
    }

    #[test]
    fn test_path_policy_through_top_level() {
        let probe = FakeProbe::new(&["C:\\Apps\\To Run.exe"]);
        let options = ParseOptions {
            path_args: vec!["run".to_string()],
            path_policy: PathPolicy::AnywhereInSequence,
            ..ParseOptions::default()
        };
        let line = CmdLine::parse_with_probe("-run C:\\Apps\\To Run.exe -wait", &options, &probe);
        assert_eq!(line.value_of(&["run"]), "C:\\Apps\\To Run.exe");
        assert!(line.was_supplied(&["wait"]));
    }
}
