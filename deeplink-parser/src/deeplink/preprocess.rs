//! Cursor clean-up before parsing

use super::cursor::Cursor;
use serde::{Deserialize, Serialize};

/// Which filters run on a freshly built cursor.
///
/// Naive path splitting leaves a `"/"` segment for the root and empty segments for doubled
/// or trailing slashes. Both are dropped by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preprocessing {
    pub leading_slash: bool,
    pub empty_path: bool,
}

impl Default for Preprocessing {
    fn default() -> Self {
        Self {
            leading_slash: true,
            empty_path: true,
        }
    }
}

impl Preprocessing {
    /// Neither filter runs.
    pub fn none() -> Self {
        Self {
            leading_slash: false,
            empty_path: false,
        }
    }

    pub fn apply(&self, cursor: &mut Cursor) {
        if self.leading_slash {
            cursor.filter_leading_slash();
        }
        if self.empty_path {
            cursor.filter_empty_path();
        }
    }
}
