//! Filesystem existence probing.
//!
//! The reconstructor never touches the filesystem directly; it asks an
//! injected probe so the scan stays pure and testable with a fake.

use std::path::Path;

/// Existence predicate used by the file-path heuristic.
pub trait PathProbe {
    /// Whether `path` resolves to an existing file. Implementations must
    /// swallow access errors (permission denied, overlong paths) and report
    /// them as non-existence.
    fn exists(&self, path: &str) -> bool;
}

/// Real-filesystem probe.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl PathProbe for FsProbe {
    fn exists(&self, path: &str) -> bool {
        // Path::is_file collapses every I/O error to false.
        Path::new(path).is_file()
    }
}


#[cfg(test)]
pub(crate) mod fake {
    use super::PathProbe;
    use std::collections::HashSet;

    /// In-memory probe for reconstructor tests.
    pub struct FakeProbe {
        paths: HashSet<String>,
    }

    impl FakeProbe {
        pub fn new(paths: &[&str]) -> Self {
            FakeProbe {
                paths: paths.iter().map(|p| p.to_string()).collect(),
            }
        }

        pub fn empty() -> Self {
            FakeProbe::new(&[])
        }
    }

    impl PathProbe for FakeProbe {
        fn exists(&self, path: &str) -> bool {
            self.paths.contains(path)
        }
    }
}
