//! Parse-time configuration.

/// How the file-path heuristic consumes tokens for a path-sensitive
/// argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathPolicy {
    /// The path must extend to the end of the token sequence; on a hit the
    /// scan terminates immediately.
    #[default]
    MustBeFinal,
    /// Grow a prefix one token at a time; on a hit, resume scanning at the
    /// token after the matched prefix.
    AnywhereInSequence,
}

/// Configuration supplied by the caller for a single parse invocation.
///
/// No state persists across parses; two invocations with the same options
/// and input always produce the same argument list.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Start the parse with `-` suppressed as an argument delimiter.
    pub disable_dash: bool,
    /// Start the parse with `/` suppressed as an argument delimiter.
    pub disable_slash: bool,
    /// When false, the inline `--disabledash` / `--disableslash` tokens are
    /// inert and parse as ordinary tokens.
    pub allow_special_instructions: bool,
    /// Strip a leading program path (see [`crate::split::split_program`])
    /// before parsing.
    pub strip_program: bool,
    /// Argument names whose values are recovered via the file-path
    /// heuristic. Compared case-insensitively; a leading `-` or `/` in an
    /// entry is ignored.
    pub path_args: Vec<String>,
    /// Token-consumption policy for `path_args`.
    pub path_policy: PathPolicy,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            disable_dash: false,
            disable_slash: false,
            allow_special_instructions: true,
            strip_program: false,
            path_args: Vec::new(),
            path_policy: PathPolicy::MustBeFinal,
        }
    }
}

impl ParseOptions {
    /// Whether `name` is registered for the file-path heuristic.
    pub(crate) fn is_path_arg(&self, name: &str) -> bool {
        self.path_args.iter().any(|entry| {
            let entry = entry.strip_prefix(['-', '/']).unwrap_or(entry);
            entry.eq_ignore_ascii_case(name)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_arg_matching() {
        let options = ParseOptions {
            path_args: vec!["-Run".to_string(), "app".to_string()],
            ..ParseOptions::default()
        };
        assert!(options.is_path_arg("run"));
        assert!(options.is_path_arg("APP"));
        assert!(!options.is_path_arg("other"));
    }
}
