//! One-level nesting pre-processor.
//!
//! Detects a reserved bracket pair surrounding an entire sub-command-line,
//! captures the bracketed text verbatim, and hands the rest of the string
//! back for normal reconstruction. The captured text becomes the value of
//! the switch immediately preceding the opening marker.

use tracing::debug;

/// Nesting bracket markers, case-insensitive. The extended spelling wins
/// detection when both appear.
pub(crate) const NESTING_MARKERS: &[&str] = &["[ALL1]", "[A1]"];

/// Result of carving the nested region out of a raw command line.
pub(crate) struct NestedSplit {
    /// Text before the owning switch joined with text after the closing
    /// marker; reconstructed normally.
    pub remainder: String,
    /// Name of the switch owning the payload, delimiter stripped.
    pub name: String,
    /// Verbatim text between the markers, never re-tokenized.
    pub payload: String,
}

/// Try to apply nesting to `raw`. Returns `None` whenever the marker pair
/// or its owning switch cannot be located; the caller then parses the
/// whole string the plain way.
pub(crate) fn split_nested(raw: &str) -> Option<NestedSplit> {
    let lower = raw.to_ascii_lowercase();
    let needle = NESTING_MARKERS
        .iter()
        .map(|m| m.to_ascii_lowercase())
        .find(|m| lower.contains(m.as_str()))?;

    let open = lower.find(&needle)?;
    let payload_start = open + needle.len();
    let close = lower.rfind(&needle)?;
    if close <= payload_start {
        // No matching close marker.
        return None;
    }

    // Nearest `-` before the payload starts the owning switch; the next
    // space ends its name. Either missing means nesting is not applied.
    let switch_start = raw[..payload_start].rfind('-')?;
    let name_end = raw[switch_start..].find(' ').map(|o| switch_start + o)?;
    let name = raw[switch_start + 1..name_end].trim().to_string();

    let payload = raw[payload_start..close].to_string();
    let before = raw[..switch_start].trim();
    let after = raw[close + needle.len()..].trim();
    let remainder = format!("{before} {after}").trim().to_string();

    debug!(name, "nested region captured");
    Some(NestedSplit {
        remainder,
        name,
        payload,
    })
}
