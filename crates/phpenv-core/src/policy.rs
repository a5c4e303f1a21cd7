//! Copy policy threaded through every level of a tree merge.

use std::collections::HashSet;

use crate::layout::SCAFFOLD_DIR_NAME;

/// Per-run policy for [`crate::merge::TreeMerger`].
///
/// Invariant: [`SCAFFOLD_DIR_NAME`] is always a member of the ignore set,
/// regardless of what the caller supplies. The scaffold must never be
/// merged into itself when source and scaffold share a working directory.
#[derive(Debug, Clone)]
pub struct CopyPolicy {
    /// Delete each source entry once it is accounted for at the destination.
    pub delete_source: bool,
    /// Replace destination files that already exist.
    pub overwrite: bool,
    ignored: HashSet<String>,
}

impl CopyPolicy {
    pub fn new(delete_source: bool, overwrite: bool) -> Self {
        let mut ignored = HashSet::new();
        ignored.insert(SCAFFOLD_DIR_NAME.to_string());
        Self {
            delete_source,
            overwrite,
            ignored,
        }
    }

    /// Add caller-supplied names to the ignore set.
    pub fn with_ignored<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignored.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn is_ignored(&self, name: &str) -> bool {
        self.ignored.contains(name)
    }
}

impl Default for CopyPolicy {
    fn default() -> Self {
        Self::new(false, false)
    }
}
