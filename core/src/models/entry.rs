// SPDX-License-Identifier: GPL-3.0-only

use std::fmt;
use std::ops::Range;

/// A row of the demo catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: usize,
    pub name: String,
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl Entry {
    /// Builds the entries at the given zero-based indices (ids start at 1)
    pub fn range(indices: Range<usize>) -> Vec<Entry> {
        indices
            .map(|index| {
                let id = index + 1;
                Entry {
                    id,
                    name: format!("Entry #{id:04}"),
                }
            })
            .collect()
    }
}
