// SPDX-License-Identifier: MIT OR Apache-2.0

//! Human-readable paths through a user's active hierarchy.
use crate::config::DisplayConfig;
use crate::hierarchy::{ActiveHierarchy, Chain, ChainLevel, Membership, Position};
use crate::level::{AdminLevel, level_name};
use crate::user::User;

/// Generic word shown in the original hierarchy for the user's own level when no name was
/// resolved for it.
fn placeholder(level: ChainLevel) -> &'static str {
    match level {
        ChainLevel::NationalLevel => "المستوى القومي",
        ChainLevel::Region => "ولاية",
        ChainLevel::Locality => "محلية",
        ChainLevel::AdminUnit => "وحدة إدارية",
        ChainLevel::District => "حي",
    }
}

/// Admin level whose holders sit at the given original chain level.
fn own_chain_level(level: AdminLevel) -> Option<ChainLevel> {
    match level {
        AdminLevel::NationalLevel => Some(ChainLevel::NationalLevel),
        AdminLevel::Region => Some(ChainLevel::Region),
        AdminLevel::Locality => Some(ChainLevel::Locality),
        AdminLevel::AdminUnit => Some(ChainLevel::AdminUnit),
        AdminLevel::District => Some(ChainLevel::District),
        AdminLevel::GeneralSecretariat
        | AdminLevel::User
        | AdminLevel::Admin
        | AdminLevel::ExpatriateGeneral
        | AdminLevel::ExpatriateRegion => None,
    }
}

fn original_path(chain: &Chain, admin_level: Option<AdminLevel>, separator: &str) -> String {
    let own_level = admin_level.and_then(own_chain_level);

    let parts: Vec<&str> = ChainLevel::SHALLOWEST_FIRST
        .into_iter()
        .filter_map(|level| match chain.membership(level).name() {
            Some(name) => Some(name),
            None if own_level == Some(level) => Some(placeholder(level)),
            None => None,
        })
        .collect();

    if parts.is_empty() {
        return level_name(admin_level).to_string();
    }

    parts.join(separator)
}

fn sector_path(chain: &Chain, separator: &str) -> (String, bool) {
    let parts: Vec<&str> = chain.names().collect();

    if parts.is_empty() {
        return (ActiveHierarchy::Sector.label().to_string(), true);
    }

    (parts.join(separator), false)
}

fn expatriate_path(membership: &Membership, separator: &str) -> (String, bool) {
    let label = ActiveHierarchy::Expatriate.label();

    match membership.name() {
        Some(name) => (format!("{label}{separator}{name}"), true),
        None => (label.to_string(), true),
    }
}

/// Path through the user's active hierarchy, joined with the default separator.
pub fn hierarchy_path(user: &User) -> String {
    hierarchy_path_with(user, &DisplayConfig::default())
}

/// Path through the user's active hierarchy.
///
/// Levels without a resolved name are skipped. In the original hierarchy the user's own level is
/// shown with a generic word instead, and a user without any resolved level is described by the
/// name of their admin level. The sector hierarchy has no such fallbacks and shows its label
/// instead.
pub fn hierarchy_path_with(user: &User, config: &DisplayConfig) -> String {
    active_path(user, config).0
}

/// Path through the user's active hierarchy, and whether it already carries the label of that
/// hierarchy.
pub(crate) fn active_path(user: &User, config: &DisplayConfig) -> (String, bool) {
    let separator = config.path_separator.as_str();

    match user.position() {
        Position::Original(chain) => (original_path(chain, user.admin_level, separator), false),
        Position::Expatriate(membership) => expatriate_path(membership, separator),
        Position::Sector(chain) => sector_path(chain, separator),
    }
}

/// Resolved names of one dimension, independent of which one is active.
pub(crate) fn dimension_names(user: &User, hierarchy: ActiveHierarchy) -> Vec<&str> {
    match user.memberships.position(hierarchy) {
        Position::Original(chain) | Position::Sector(chain) => chain.names().collect(),
        Position::Expatriate(membership) => membership.name().into_iter().collect(),
    }
}
