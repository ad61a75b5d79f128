// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities.
use crate::hierarchy::{ActiveHierarchy, Chain, ChainLevel, NodeId, ResolvedNode};
use crate::level::AdminLevel;
use crate::targeting::ContentTargeting;
use crate::user::User;

/// Enable logging when `RUST_LOG` is set.
pub fn setup_logging() {
    if std::env::var("RUST_LOG").is_ok() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    }
}

/// Builder for users with memberships in any of the three dimensions.
#[derive(Clone, Debug)]
pub struct UserBuilder {
    user: User,
}

impl UserBuilder {
    pub fn new(admin_level: AdminLevel) -> Self {
        Self {
            user: User::new("user", admin_level),
        }
    }

    /// User whose profile carried an admin level unknown to the catalog.
    pub fn unknown_level() -> Self {
        Self {
            user: User {
                id: "user".to_string(),
                ..Default::default()
            },
        }
    }

    pub fn id(mut self, id: &str) -> Self {
        self.user.id = id.to_string();
        self
    }

    pub fn active(mut self, hierarchy: ActiveHierarchy) -> Self {
        self.user.active_hierarchy = hierarchy;
        self
    }

    fn chain(&mut self, hierarchy: ActiveHierarchy) -> &mut Chain {
        match hierarchy {
            ActiveHierarchy::Sector => &mut self.user.memberships.sector,
            _ => &mut self.user.memberships.original,
        }
    }

    fn member(mut self, hierarchy: ActiveHierarchy, level: ChainLevel, id: &str) -> Self {
        self.chain(hierarchy).membership_mut(level).id = Some(NodeId::from(id));
        self
    }

    fn named(
        mut self,
        hierarchy: ActiveHierarchy,
        level: ChainLevel,
        id: &str,
        name: &str,
    ) -> Self {
        let membership = self.chain(hierarchy).membership_mut(level);
        membership.id = Some(NodeId::from(id));
        membership.resolved = Some(ResolvedNode::new(id, name));
        self
    }

    pub fn national_level(self, id: &str) -> Self {
        self.member(ActiveHierarchy::Original, ChainLevel::NationalLevel, id)
    }

    pub fn region(self, id: &str) -> Self {
        self.member(ActiveHierarchy::Original, ChainLevel::Region, id)
    }

    pub fn locality(self, id: &str) -> Self {
        self.member(ActiveHierarchy::Original, ChainLevel::Locality, id)
    }

    pub fn admin_unit(self, id: &str) -> Self {
        self.member(ActiveHierarchy::Original, ChainLevel::AdminUnit, id)
    }

    pub fn district(self, id: &str) -> Self {
        self.member(ActiveHierarchy::Original, ChainLevel::District, id)
    }

    pub fn named_national_level(self, id: &str, name: &str) -> Self {
        self.named(ActiveHierarchy::Original, ChainLevel::NationalLevel, id, name)
    }

    pub fn named_region(self, id: &str, name: &str) -> Self {
        self.named(ActiveHierarchy::Original, ChainLevel::Region, id, name)
    }

    pub fn named_locality(self, id: &str, name: &str) -> Self {
        self.named(ActiveHierarchy::Original, ChainLevel::Locality, id, name)
    }

    pub fn named_district(self, id: &str, name: &str) -> Self {
        self.named(ActiveHierarchy::Original, ChainLevel::District, id, name)
    }

    pub fn sector_national_level(self, id: &str) -> Self {
        self.member(ActiveHierarchy::Sector, ChainLevel::NationalLevel, id)
    }

    pub fn sector_region(self, id: &str) -> Self {
        self.member(ActiveHierarchy::Sector, ChainLevel::Region, id)
    }

    pub fn sector_locality(self, id: &str) -> Self {
        self.member(ActiveHierarchy::Sector, ChainLevel::Locality, id)
    }

    pub fn sector_admin_unit(self, id: &str) -> Self {
        self.member(ActiveHierarchy::Sector, ChainLevel::AdminUnit, id)
    }

    pub fn sector_district(self, id: &str) -> Self {
        self.member(ActiveHierarchy::Sector, ChainLevel::District, id)
    }

    pub fn named_sector_region(self, id: &str, name: &str) -> Self {
        self.named(ActiveHierarchy::Sector, ChainLevel::Region, id, name)
    }

    pub fn named_sector_district(self, id: &str, name: &str) -> Self {
        self.named(ActiveHierarchy::Sector, ChainLevel::District, id, name)
    }

    pub fn expatriate_region(mut self, id: &str) -> Self {
        self.user.memberships.expatriate.id = Some(NodeId::from(id));
        self
    }

    pub fn named_expatriate_region(mut self, id: &str, name: &str) -> Self {
        let membership = &mut self.user.memberships.expatriate;
        membership.id = Some(NodeId::from(id));
        membership.resolved = Some(ResolvedNode::new(id, name));
        self
    }

    pub fn build(self) -> User {
        self.user
    }
}

/// Builder for content targeting descriptors.
#[derive(Clone, Debug, Default)]
pub struct TargetingBuilder {
    targeting: ContentTargeting,
}

impl TargetingBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn national_level(mut self, id: &str) -> Self {
        self.targeting.target_national_level_id = Some(NodeId::from(id));
        self
    }

    pub fn region(mut self, id: &str) -> Self {
        self.targeting.target_region_id = Some(NodeId::from(id));
        self
    }

    pub fn locality(mut self, id: &str) -> Self {
        self.targeting.target_locality_id = Some(NodeId::from(id));
        self
    }

    pub fn admin_unit(mut self, id: &str) -> Self {
        self.targeting.target_admin_unit_id = Some(NodeId::from(id));
        self
    }

    pub fn district(mut self, id: &str) -> Self {
        self.targeting.target_district_id = Some(NodeId::from(id));
        self
    }

    pub fn expatriate_region(mut self, id: &str) -> Self {
        self.targeting.target_expatriate_region_id = Some(NodeId::from(id));
        self
    }

    pub fn sector_national_level(mut self, id: &str) -> Self {
        self.targeting.target_sector_national_level_id = Some(NodeId::from(id));
        self
    }

    pub fn sector_region(mut self, id: &str) -> Self {
        self.targeting.target_sector_region_id = Some(NodeId::from(id));
        self
    }

    pub fn sector_locality(mut self, id: &str) -> Self {
        self.targeting.target_sector_locality_id = Some(NodeId::from(id));
        self
    }

    pub fn sector_admin_unit(mut self, id: &str) -> Self {
        self.targeting.target_sector_admin_unit_id = Some(NodeId::from(id));
        self
    }

    pub fn sector_district(mut self, id: &str) -> Self {
        self.targeting.target_sector_district_id = Some(NodeId::from(id));
        self
    }

    pub fn build(self) -> ContentTargeting {
        self.targeting
    }
}
