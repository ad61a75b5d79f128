// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::config::DisplayConfig;
use crate::level::level_name;
use crate::path::active_path;
use crate::user::User;

/// Suffix shown for superusers instead of a hierarchy path.
pub const UNRESTRICTED_ACCESS: &str = "الوصول لجميع المستويات";

/// One-line summary of a user's scope, joined with the default separator.
pub fn scope_description(user: &User) -> String {
    scope_description_with(user, &DisplayConfig::default())
}

/// One-line summary of a user's scope: their level name, the label of their active hierarchy and
/// their path within it.
///
/// The label is not repeated when the path already carries it, as is the case for the expatriate
/// hierarchy and for sector paths without any resolved name.
pub fn scope_description_with(user: &User, config: &DisplayConfig) -> String {
    let separator = config.path_separator.as_str();
    let level = level_name(user.admin_level);

    if user.is_superuser() {
        return format!("{level}{separator}{UNRESTRICTED_ACCESS}");
    }

    let (path, labelled) = active_path(user, config);
    if labelled {
        return format!("{level}{separator}{path}");
    }

    let label = user.active_hierarchy.label();
    format!("{level}{separator}{label}: {path}")
}
