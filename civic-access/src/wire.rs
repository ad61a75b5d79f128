// SPDX-License-Identifier: MIT OR Apache-2.0

//! Flat user representation as delivered by the profile service.
//!
//! The profile service sends all three dimensions as one bag of optional fields. Converting a
//! [`UserPayload`] into a [`User`] moves them into the tagged [`Memberships`] model. The conversion
//! is lossy but never fails: unknown admin levels become `None` and unknown hierarchies fall back
//! to the original one.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::hierarchy::{ActiveHierarchy, Chain, Membership, Memberships, NodeId, ResolvedNode};
use crate::level::AdminLevel;
use crate::user::User;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct UserPayload {
    pub id: String,
    pub email: Option<String>,
    pub mobile_number: Option<String>,
    pub role: Option<String>,
    pub admin_level: Option<String>,
    pub active_hierarchy: Option<String>,

    pub national_level_id: Option<NodeId>,
    pub region_id: Option<NodeId>,
    pub locality_id: Option<NodeId>,
    pub admin_unit_id: Option<NodeId>,
    pub district_id: Option<NodeId>,

    pub expatriate_region_id: Option<NodeId>,

    pub sector_national_level_id: Option<NodeId>,
    pub sector_region_id: Option<NodeId>,
    pub sector_locality_id: Option<NodeId>,
    pub sector_admin_unit_id: Option<NodeId>,
    pub sector_district_id: Option<NodeId>,

    pub national_level: Option<ResolvedNode>,
    pub region: Option<ResolvedNode>,
    pub locality: Option<ResolvedNode>,
    pub admin_unit: Option<ResolvedNode>,
    pub district: Option<ResolvedNode>,

    pub expatriate_region: Option<ResolvedNode>,

    pub sector_national_level: Option<ResolvedNode>,
    pub sector_region: Option<ResolvedNode>,
    pub sector_locality: Option<ResolvedNode>,
    pub sector_admin_unit: Option<ResolvedNode>,
    pub sector_district: Option<ResolvedNode>,
}

fn parse_admin_level(user_id: &str, value: Option<String>) -> Option<AdminLevel> {
    let value = value?;
    match value.parse() {
        Ok(level) => Some(level),
        Err(err) => {
            warn!(user = user_id, "{err}, treating level as unspecified");
            None
        }
    }
}

fn parse_active_hierarchy(user_id: &str, value: Option<String>) -> ActiveHierarchy {
    let Some(value) = value else {
        return ActiveHierarchy::default();
    };

    match value.parse() {
        Ok(hierarchy) => hierarchy,
        Err(err) => {
            warn!(user = user_id, "{err}, falling back to original hierarchy");
            ActiveHierarchy::default()
        }
    }
}

impl From<UserPayload> for User {
    fn from(payload: UserPayload) -> Self {
        let admin_level = parse_admin_level(&payload.id, payload.admin_level);
        let active_hierarchy = parse_active_hierarchy(&payload.id, payload.active_hierarchy);

        let original = Chain {
            national_level: Membership::new(payload.national_level_id, payload.national_level),
            region: Membership::new(payload.region_id, payload.region),
            locality: Membership::new(payload.locality_id, payload.locality),
            admin_unit: Membership::new(payload.admin_unit_id, payload.admin_unit),
            district: Membership::new(payload.district_id, payload.district),
        };

        let sector = Chain {
            national_level: Membership::new(
                payload.sector_national_level_id,
                payload.sector_national_level,
            ),
            region: Membership::new(payload.sector_region_id, payload.sector_region),
            locality: Membership::new(payload.sector_locality_id, payload.sector_locality),
            admin_unit: Membership::new(payload.sector_admin_unit_id, payload.sector_admin_unit),
            district: Membership::new(payload.sector_district_id, payload.sector_district),
        };

        let expatriate = Membership::new(payload.expatriate_region_id, payload.expatriate_region);

        User {
            id: payload.id,
            admin_level,
            active_hierarchy,
            memberships: Memberships {
                original,
                expatriate,
                sector,
            },
        }
    }
}
