// SPDX-License-Identifier: MIT OR Apache-2.0

//! Eligibility for switching the active hierarchy, and per-dimension membership summaries.
//!
//! The switch itself is performed by the profile service. This module only decides whether a
//! switch may be requested and what the request looks like.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::DisplayConfig;
use crate::hierarchy::ActiveHierarchy;
use crate::level::UNSPECIFIED_LEVEL_NAME;
use crate::path::dimension_names;
use crate::user::User;

/// Shown for a dimension the user is not a member of.
pub const NOT_REGISTERED: &str = "غير مسجل";

/// True if the user holds any membership identifier in the requested dimension.
pub fn can_switch(user: &User, hierarchy: ActiveHierarchy) -> bool {
    user.memberships.is_member_of(hierarchy)
}

/// Dimensions a user is registered in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HierarchyMemberships {
    pub has_original: bool,
    pub has_expatriate: bool,
    pub has_sector: bool,
}

impl HierarchyMemberships {
    pub fn contains(&self, hierarchy: ActiveHierarchy) -> bool {
        match hierarchy {
            ActiveHierarchy::Original => self.has_original,
            ActiveHierarchy::Expatriate => self.has_expatriate,
            ActiveHierarchy::Sector => self.has_sector,
        }
    }
}

pub fn memberships(user: &User) -> HierarchyMemberships {
    HierarchyMemberships {
        has_original: can_switch(user, ActiveHierarchy::Original),
        has_expatriate: can_switch(user, ActiveHierarchy::Expatriate),
        has_sector: can_switch(user, ActiveHierarchy::Sector),
    }
}

/// Dimensions the user may switch to, in fixed order.
pub fn available_hierarchies(user: &User) -> Vec<ActiveHierarchy> {
    let memberships = memberships(user);
    ActiveHierarchy::ALL
        .into_iter()
        .filter(|hierarchy| memberships.contains(*hierarchy))
        .collect()
}

/// A switch control only makes sense with more than one dimension to choose from.
pub fn offers_switch(user: &User) -> bool {
    available_hierarchies(user).len() > 1
}

/// Summary of the user's position in one dimension, joined with the default separator.
pub fn membership_path(user: &User, hierarchy: ActiveHierarchy) -> String {
    membership_path_with(user, hierarchy, &DisplayConfig::default())
}

/// Summary of the user's position in one dimension, whether it is active or not.
///
/// Only resolved names are shown; unlike [`hierarchy_path`](crate::hierarchy_path) no
/// placeholders are injected.
pub fn membership_path_with(
    user: &User,
    hierarchy: ActiveHierarchy,
    config: &DisplayConfig,
) -> String {
    if !can_switch(user, hierarchy) {
        return NOT_REGISTERED.to_string();
    }

    let names = dimension_names(user, hierarchy);
    if names.is_empty() {
        return UNSPECIFIED_LEVEL_NAME.to_string();
    }

    names.join(config.membership_separator.as_str())
}

/// Body of the request asking the profile service to change the active hierarchy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SwitchRequest {
    pub active_hierarchy: ActiveHierarchy,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SwitchError {
    #[error("user {0} holds no membership in the {1} hierarchy")]
    NotAMember(String, ActiveHierarchy),

    #[error("user {0} is already operating under the {1} hierarchy")]
    AlreadyActive(String, ActiveHierarchy),
}

/// Validate a switch before it is requested from the profile service.
pub fn plan_switch(user: &User, target: ActiveHierarchy) -> Result<SwitchRequest, SwitchError> {
    if user.active_hierarchy == target {
        return Err(SwitchError::AlreadyActive(user.id.clone(), target));
    }

    if !can_switch(user, target) {
        return Err(SwitchError::NotAMember(user.id.clone(), target));
    }

    debug!(
        user = %user.id,
        from = %user.active_hierarchy,
        to = %target,
        "planned hierarchy switch"
    );

    Ok(SwitchRequest {
        active_hierarchy: target,
    })
}
