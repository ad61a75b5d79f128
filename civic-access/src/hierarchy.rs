// SPDX-License-Identifier: MIT OR Apache-2.0

//! The three parallel organizational hierarchies and a user's position within them.
//!
//! A user holds memberships in all three dimensions at the same time. Exactly one of them, the
//! active hierarchy, governs which content the user sees and how their scope is displayed.
use std::fmt::Display;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Organizational dimension a user is currently operating under.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum ActiveHierarchy {
    /// Geographic tree: national level, region, locality, admin unit, district.
    #[default]
    Original,

    /// Flat tree consisting of expatriate regions only.
    Expatriate,

    /// Separate tree with the same depth as the geographic one.
    Sector,
}

impl ActiveHierarchy {
    pub const ALL: [ActiveHierarchy; 3] = [
        ActiveHierarchy::Original,
        ActiveHierarchy::Expatriate,
        ActiveHierarchy::Sector,
    ];

    /// Display label of this dimension.
    pub fn label(&self) -> &'static str {
        match self {
            ActiveHierarchy::Original => "التسلسل الأصلي",
            ActiveHierarchy::Expatriate => "تسلسل المغتربين",
            ActiveHierarchy::Sector => "تسلسل القطاع",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActiveHierarchy::Original => "ORIGINAL",
            ActiveHierarchy::Expatriate => "EXPATRIATE",
            ActiveHierarchy::Sector => "SECTOR",
        }
    }
}

impl Display for ActiveHierarchy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ActiveHierarchy {
    type Err = ActiveHierarchyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        ActiveHierarchy::ALL
            .into_iter()
            .find(|hierarchy| hierarchy.as_str() == value)
            .ok_or_else(|| ActiveHierarchyError::Unknown(value.to_string()))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActiveHierarchyError {
    #[error("unknown hierarchy \"{0}\"")]
    Unknown(String),
}

/// Level within one of the two chain-shaped dimensions (original and sector).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChainLevel {
    NationalLevel,
    Region,
    Locality,
    AdminUnit,
    District,
}

impl ChainLevel {
    /// All levels from the root of the tree down to its leaves.
    pub const SHALLOWEST_FIRST: [ChainLevel; 5] = [
        ChainLevel::NationalLevel,
        ChainLevel::Region,
        ChainLevel::Locality,
        ChainLevel::AdminUnit,
        ChainLevel::District,
    ];

    /// All levels from the leaves of the tree up to its root.
    pub const DEEPEST_FIRST: [ChainLevel; 5] = [
        ChainLevel::District,
        ChainLevel::AdminUnit,
        ChainLevel::Locality,
        ChainLevel::Region,
        ChainLevel::NationalLevel,
    ];
}

/// Identifier of an organizational node, as assigned by the profile and content services.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Turns empty identifiers into absent ones.
    pub(crate) fn non_empty(id: Option<NodeId>) -> Option<NodeId> {
        id.filter(|id| !id.0.is_empty())
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for NodeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Organizational node with its resolved display name.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResolvedNode {
    #[cfg_attr(feature = "serde", serde(default))]
    pub id: NodeId,
    pub name: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub code: Option<String>,
}

impl ResolvedNode {
    pub fn new(id: impl Into<NodeId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            code: None,
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Display name, if it is not blank.
    pub fn display_name(&self) -> Option<&str> {
        let name = self.name.trim();
        (!name.is_empty()).then_some(name)
    }
}

/// Membership at a single level: the identifier used for access checks and, independently, the
/// resolved node used for display. Either may be missing in denormalized profiles.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Membership {
    pub id: Option<NodeId>,
    pub resolved: Option<ResolvedNode>,
}

impl Membership {
    pub fn new(id: Option<NodeId>, resolved: Option<ResolvedNode>) -> Self {
        Self {
            id: NodeId::non_empty(id),
            resolved,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.resolved.as_ref().and_then(ResolvedNode::display_name)
    }
}

/// Position of a user within a chain-shaped dimension.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Chain {
    pub national_level: Membership,
    pub region: Membership,
    pub locality: Membership,
    pub admin_unit: Membership,
    pub district: Membership,
}

impl Chain {
    pub fn membership(&self, level: ChainLevel) -> &Membership {
        match level {
            ChainLevel::NationalLevel => &self.national_level,
            ChainLevel::Region => &self.region,
            ChainLevel::Locality => &self.locality,
            ChainLevel::AdminUnit => &self.admin_unit,
            ChainLevel::District => &self.district,
        }
    }

    pub fn membership_mut(&mut self, level: ChainLevel) -> &mut Membership {
        match level {
            ChainLevel::NationalLevel => &mut self.national_level,
            ChainLevel::Region => &mut self.region,
            ChainLevel::Locality => &mut self.locality,
            ChainLevel::AdminUnit => &mut self.admin_unit,
            ChainLevel::District => &mut self.district,
        }
    }

    pub fn id(&self, level: ChainLevel) -> Option<&NodeId> {
        self.membership(level).id.as_ref()
    }

    /// True if the user holds an identifier at any level of this chain.
    pub fn is_member(&self) -> bool {
        ChainLevel::SHALLOWEST_FIRST
            .iter()
            .any(|level| self.id(*level).is_some())
    }

    /// Resolved display names from root to leaf, skipping levels without one.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        ChainLevel::SHALLOWEST_FIRST
            .into_iter()
            .filter_map(|level| self.membership(level).name())
    }
}

/// A user's memberships in all three dimensions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Memberships {
    pub original: Chain,
    pub expatriate: Membership,
    pub sector: Chain,
}

impl Memberships {
    /// True if the user holds any identifier in the given dimension.
    pub fn is_member_of(&self, hierarchy: ActiveHierarchy) -> bool {
        match hierarchy {
            ActiveHierarchy::Original => self.original.is_member(),
            ActiveHierarchy::Expatriate => self.expatriate.id.is_some(),
            ActiveHierarchy::Sector => self.sector.is_member(),
        }
    }

    /// Tagged view on the memberships of one dimension.
    pub fn position(&self, hierarchy: ActiveHierarchy) -> Position<'_> {
        match hierarchy {
            ActiveHierarchy::Original => Position::Original(&self.original),
            ActiveHierarchy::Expatriate => Position::Expatriate(&self.expatriate),
            ActiveHierarchy::Sector => Position::Sector(&self.sector),
        }
    }
}

/// A user's position within a single dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Position<'a> {
    Original(&'a Chain),
    Expatriate(&'a Membership),
    Sector(&'a Chain),
}

impl Position<'_> {
    pub fn hierarchy(&self) -> ActiveHierarchy {
        match self {
            Position::Original(_) => ActiveHierarchy::Original,
            Position::Expatriate(_) => ActiveHierarchy::Expatriate,
            Position::Sector(_) => ActiveHierarchy::Sector,
        }
    }
}
