//! Quote-aware tokenizer.
//!
//! Splits a raw command-line string on whitespace runs, except inside
//! double-quote regions. Quote characters are preserved in the output so
//! later stages decide whether to strip them.

/// Split `raw` into tokens, treating whitespace inside `"` pairs as part of
/// the current token.
///
/// The quote toggle flips on every `"` encountered; an unterminated quote
/// leaves it on for the remainder of the string, so all trailing whitespace
/// joins the final token. That is accepted behavior, not an error.
pub fn tokenize(raw: &str) -> Vec<String> {
    split_on_unquoted_whitespace(raw, true)
}

/// Split `raw` like [`tokenize`], but drop the quote characters themselves.
///
/// This is the portable stand-in for handing the string to the OS argv
/// splitter: simpler downstream handling, at the cost of quote fidelity.
/// The core reconstruction path does not use it.
pub fn tokenize_discarding_quotes(raw: &str) -> Vec<String> {
    split_on_unquoted_whitespace(raw, false)
}

fn split_on_unquoted_whitespace(raw: &str, keep_quotes: bool) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in raw.chars() {
        if c == '"' {
            in_quotes = !in_quotes;
            if keep_quotes {
                current.push(c);
            }
            continue;
        }

        if c.is_whitespace() && !in_quotes {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
        } else {
            current.push(c);
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}
