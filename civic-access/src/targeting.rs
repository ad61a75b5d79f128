// SPDX-License-Identifier: MIT OR Apache-2.0

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::hierarchy::{ChainLevel, NodeId};

/// Where a piece of content applies, as delivered by the content services.
///
/// Every field is optional. Content without any target is global and visible to everyone. Within
/// the original and sector dimensions only the deepest target which is set decides access, see
/// [`decide`](crate::decide).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ContentTargeting {
    pub target_national_level_id: Option<NodeId>,
    pub target_region_id: Option<NodeId>,
    pub target_locality_id: Option<NodeId>,
    pub target_admin_unit_id: Option<NodeId>,
    pub target_district_id: Option<NodeId>,

    pub target_expatriate_region_id: Option<NodeId>,

    pub target_sector_national_level_id: Option<NodeId>,
    pub target_sector_region_id: Option<NodeId>,
    pub target_sector_locality_id: Option<NodeId>,
    pub target_sector_admin_unit_id: Option<NodeId>,
    pub target_sector_district_id: Option<NodeId>,
}

impl ContentTargeting {
    /// Targeting without any restriction.
    pub fn global() -> Self {
        Self::default()
    }

    /// Targets per dimension, with empty identifiers removed.
    pub fn scope(&self) -> TargetScope {
        let target = |id: &Option<NodeId>| NodeId::non_empty(id.clone());

        TargetScope {
            original: TargetChain {
                national_level: target(&self.target_national_level_id),
                region: target(&self.target_region_id),
                locality: target(&self.target_locality_id),
                admin_unit: target(&self.target_admin_unit_id),
                district: target(&self.target_district_id),
            },
            expatriate: target(&self.target_expatriate_region_id),
            sector: TargetChain {
                national_level: target(&self.target_sector_national_level_id),
                region: target(&self.target_sector_region_id),
                locality: target(&self.target_sector_locality_id),
                admin_unit: target(&self.target_sector_admin_unit_id),
                district: target(&self.target_sector_district_id),
            },
        }
    }

    /// True if no dimension restricts this content.
    pub fn is_global(&self) -> bool {
        self.scope().is_global()
    }
}

/// Targets within one chain-shaped dimension.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TargetChain {
    pub national_level: Option<NodeId>,
    pub region: Option<NodeId>,
    pub locality: Option<NodeId>,
    pub admin_unit: Option<NodeId>,
    pub district: Option<NodeId>,
}

impl TargetChain {
    pub fn get(&self, level: ChainLevel) -> Option<&NodeId> {
        match level {
            ChainLevel::NationalLevel => self.national_level.as_ref(),
            ChainLevel::Region => self.region.as_ref(),
            ChainLevel::Locality => self.locality.as_ref(),
            ChainLevel::AdminUnit => self.admin_unit.as_ref(),
            ChainLevel::District => self.district.as_ref(),
        }
    }

    /// Deepest level which carries a target, together with that target.
    pub fn most_specific(&self) -> Option<(ChainLevel, &NodeId)> {
        ChainLevel::DEEPEST_FIRST
            .into_iter()
            .find_map(|level| self.get(level).map(|id| (level, id)))
    }

    pub fn is_empty(&self) -> bool {
        self.most_specific().is_none()
    }
}

/// Targets of a piece of content, split by dimension.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TargetScope {
    pub original: TargetChain,
    pub expatriate: Option<NodeId>,
    pub sector: TargetChain,
}

impl TargetScope {
    pub fn is_global(&self) -> bool {
        self.original.is_empty() && self.expatriate.is_none() && self.sector.is_empty()
    }
}

/// Anything which carries a targeting descriptor, for example a bulletin, survey or vote.
pub trait Targeted {
    fn targeting(&self) -> &ContentTargeting;
}

impl Targeted for ContentTargeting {
    fn targeting(&self) -> &ContentTargeting {
        self
    }
}

impl<T: Targeted> Targeted for &T {
    fn targeting(&self) -> &ContentTargeting {
        (*self).targeting()
    }
}
