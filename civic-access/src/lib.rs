// SPDX-License-Identifier: MIT OR Apache-2.0

//! Hierarchical access control for civic-engagement content.
//!
//! Users belong to up to three parallel organizational hierarchies (geographic, expatriate and
//! sector) and operate under one of them at a time. Content is targeted at nodes of these
//! hierarchies. [`has_access`] decides whether a user may see a piece of content, while
//! [`hierarchy_path`], [`scope_description`] and [`level_name`] derive display strings from a
//! user's position.
//!
//! All functions are pure: they take plain data and never fail or perform I/O.
mod access;
pub mod config;
pub mod hierarchy;
mod level;
mod path;
mod scope;
mod switch;
mod targeting;
#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
#[cfg(test)]
mod tests;
mod user;
pub mod wire;

pub use access::{AccessDecision, decide, filter_visible, has_access};
pub use config::DisplayConfig;
pub use hierarchy::{
    ActiveHierarchy, ActiveHierarchyError, Chain, ChainLevel, Membership, Memberships, NodeId,
    Position, ResolvedNode,
};
pub use level::{AdminLevel, AdminLevelError, UNSPECIFIED_LEVEL_NAME, level_name};
pub use path::{hierarchy_path, hierarchy_path_with};
pub use scope::{UNRESTRICTED_ACCESS, scope_description, scope_description_with};
pub use switch::{
    HierarchyMemberships, NOT_REGISTERED, SwitchError, SwitchRequest, available_hierarchies,
    can_switch, membership_path, membership_path_with, memberships, offers_switch, plan_switch,
};
pub use targeting::{ContentTargeting, TargetChain, TargetScope, Targeted};
pub use user::User;
pub use wire::UserPayload;
