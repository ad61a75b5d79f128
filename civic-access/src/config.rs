// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration of display strings.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default separator between the levels of a hierarchy path.
pub const DEFAULT_PATH_SEPARATOR: &str = " - ";

/// Default separator between the levels of a membership summary.
pub const DEFAULT_MEMBERSHIP_SEPARATOR: &str = " / ";

/// Configuration parameters for paths and scope descriptions.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DisplayConfig {
    /// Joins the levels of the active hierarchy path, and the parts of a scope description.
    pub path_separator: String,

    /// Joins the levels shown per dimension when listing a user's memberships.
    pub membership_separator: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            path_separator: DEFAULT_PATH_SEPARATOR.to_string(),
            membership_separator: DEFAULT_MEMBERSHIP_SEPARATOR.to_string(),
        }
    }
}
