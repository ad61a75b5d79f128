// SPDX-License-Identifier: MIT OR Apache-2.0

//! Access decisions for targeted content.
//!
//! Visibility cascades down a hierarchy: content targeted at a region is visible in every
//! locality, admin unit and district below it. Only the deepest target which is set decides,
//! shallower targets are ignored and ancestors are not required to match as well.
use std::fmt::Display;

use tracing::trace;

use crate::hierarchy::{Chain, ChainLevel, NodeId, Position};
use crate::targeting::{ContentTargeting, TargetChain, Targeted};
use crate::user::User;

/// Outcome of an access check, with the reason it was reached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessDecision {
    /// User level sees everything.
    Superuser,

    /// Content carries no targeting in any dimension.
    Global,

    /// The deciding target of the user's active dimension matched. `None` for the expatriate
    /// dimension which has no levels.
    Matched(Option<ChainLevel>),

    /// No target of the user's active dimension matched.
    Denied,
}

impl AccessDecision {
    pub fn is_granted(&self) -> bool {
        !matches!(self, AccessDecision::Denied)
    }
}

impl Display for AccessDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            AccessDecision::Superuser => "superuser",
            AccessDecision::Global => "global",
            AccessDecision::Matched(_) => "matched",
            AccessDecision::Denied => "denied",
        };

        write!(f, "{}", s)
    }
}

/// Most-specific-match over one chain-shaped dimension.
///
/// The deepest level with a target is the deciding level. Access is granted iff the user sits on
/// exactly that node; if no level carries a target the content is not addressed to this
/// dimension and access is denied.
fn match_chain(user: &Chain, target: &TargetChain) -> AccessDecision {
    let Some((level, target_id)) = target.most_specific() else {
        return AccessDecision::Denied;
    };

    if user.id(level) == Some(target_id) {
        AccessDecision::Matched(Some(level))
    } else {
        AccessDecision::Denied
    }
}

fn match_expatriate(user: Option<&NodeId>, target: Option<&NodeId>) -> AccessDecision {
    match (user, target) {
        (Some(user_id), Some(target_id)) if user_id == target_id => AccessDecision::Matched(None),
        _ => AccessDecision::Denied,
    }
}

fn evaluate(user: &User, position: Position<'_>, targeting: &ContentTargeting) -> AccessDecision {
    if user.is_superuser() {
        return AccessDecision::Superuser;
    }

    let scope = targeting.scope();
    if scope.is_global() {
        return AccessDecision::Global;
    }

    match position {
        Position::Original(chain) => match_chain(chain, &scope.original),
        Position::Expatriate(membership) => {
            match_expatriate(membership.id.as_ref(), scope.expatriate.as_ref())
        }
        Position::Sector(chain) => match_chain(chain, &scope.sector),
    }
}

/// Decide whether `user` may see content with the given targeting.
pub fn decide(user: &User, targeting: &ContentTargeting) -> AccessDecision {
    let position = user.position();
    let decision = evaluate(user, position, targeting);

    trace!(
        user = %user.id,
        hierarchy = %position.hierarchy(),
        %decision,
        "decided access for content"
    );

    decision
}

/// True if `user` may see content with the given targeting.
pub fn has_access(user: &User, targeting: &ContentTargeting) -> bool {
    decide(user, targeting).is_granted()
}

/// Keep only the items `user` may see, in their original order.
pub fn filter_visible<I, T>(user: &User, items: I) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    T: Targeted,
{
    items
        .into_iter()
        .filter(|item| has_access(user, item.targeting()))
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::hierarchy::{ActiveHierarchy, ChainLevel};
    use crate::level::AdminLevel;
    use crate::targeting::ContentTargeting;
    use crate::test_utils::{TargetingBuilder, UserBuilder, setup_logging};

    use super::{AccessDecision, decide, has_access};

    #[test]
    fn superusers_see_everything() {
        let targeting = TargetingBuilder::new()
            .district("D9")
            .sector_region("SR9")
            .expatriate_region("E9")
            .build();

        for level in [AdminLevel::GeneralSecretariat, AdminLevel::Admin] {
            for hierarchy in ActiveHierarchy::ALL {
                let user = UserBuilder::new(level).active(hierarchy).build();
                assert_eq!(decide(&user, &targeting), AccessDecision::Superuser);
                assert!(has_access(&user, &ContentTargeting::global()));
            }
        }
    }

    #[test]
    fn global_content_is_visible_to_everyone() {
        let users = [
            UserBuilder::new(AdminLevel::User).build(),
            UserBuilder::new(AdminLevel::District)
                .active(ActiveHierarchy::Expatriate)
                .build(),
            UserBuilder::new(AdminLevel::Region)
                .active(ActiveHierarchy::Sector)
                .build(),
            UserBuilder::unknown_level().build(),
        ];

        for user in &users {
            assert_eq!(
                decide(user, &ContentTargeting::global()),
                AccessDecision::Global
            );
        }
    }

    #[test]
    fn most_specific_target_decides() {
        let user = UserBuilder::new(AdminLevel::Locality)
            .region("R1")
            .locality("L1")
            .build();

        let targeting = TargetingBuilder::new().region("R1").build();
        assert_eq!(
            decide(&user, &targeting),
            AccessDecision::Matched(Some(ChainLevel::Region))
        );

        let targeting = TargetingBuilder::new().region("R2").build();
        assert!(!has_access(&user, &targeting));

        // Locality is more specific, the matching region is not consulted.
        let targeting = TargetingBuilder::new().region("R1").locality("L2").build();
        assert!(!has_access(&user, &targeting));

        // Ancestors are not required to be set or to match.
        let targeting = TargetingBuilder::new().locality("L1").build();
        assert!(has_access(&user, &targeting));
        let targeting = TargetingBuilder::new().region("R7").locality("L1").build();
        assert!(has_access(&user, &targeting));
    }

    #[test]
    fn content_for_a_leaf_is_hidden_from_its_ancestors() {
        let regional_admin = UserBuilder::new(AdminLevel::Region).region("R1").build();
        let targeting = TargetingBuilder::new().region("R1").district("D1").build();
        assert!(!has_access(&regional_admin, &targeting));

        let resident = UserBuilder::new(AdminLevel::User)
            .region("R1")
            .locality("L1")
            .admin_unit("A1")
            .district("D1")
            .build();
        assert_eq!(
            decide(&resident, &targeting),
            AccessDecision::Matched(Some(ChainLevel::District))
        );
    }

    #[test]
    fn national_level_target() {
        let user = UserBuilder::new(AdminLevel::NationalLevel)
            .national_level("N1")
            .build();

        assert!(has_access(
            &user,
            &TargetingBuilder::new().national_level("N1").build()
        ));
        assert!(!has_access(
            &user,
            &TargetingBuilder::new().national_level("N2").build()
        ));
    }

    #[test]
    fn dimensions_are_isolated() {
        let user = UserBuilder::new(AdminLevel::Region)
            .region("R1")
            .sector_region("R1")
            .active(ActiveHierarchy::Sector)
            .build();

        // Original targets never satisfy a user active on the sector hierarchy.
        let targeting = TargetingBuilder::new().region("R1").build();
        assert_eq!(decide(&user, &targeting), AccessDecision::Denied);

        let targeting = TargetingBuilder::new().sector_region("R1").build();
        assert!(has_access(&user, &targeting));

        // Sector targets never satisfy a user active on the original hierarchy.
        let user = user.with_active_hierarchy(ActiveHierarchy::Original);
        assert!(!has_access(&user, &targeting));
    }

    #[test]
    fn sector_uses_most_specific_match() {
        let user = UserBuilder::new(AdminLevel::User)
            .sector_region("SR1")
            .sector_locality("SL1")
            .active(ActiveHierarchy::Sector)
            .build();

        assert!(has_access(
            &user,
            &TargetingBuilder::new().sector_region("SR1").build()
        ));
        assert!(!has_access(
            &user,
            &TargetingBuilder::new()
                .sector_region("SR1")
                .sector_locality("SL2")
                .build()
        ));
        assert!(!has_access(
            &user,
            &TargetingBuilder::new().sector_district("SD1").build()
        ));
    }

    #[test]
    fn expatriate_requires_exact_region() {
        let user = UserBuilder::new(AdminLevel::ExpatriateRegion)
            .region("R1")
            .expatriate_region("E1")
            .active(ActiveHierarchy::Expatriate)
            .build();

        let targeting = TargetingBuilder::new().expatriate_region("E1").build();
        assert_eq!(decide(&user, &targeting), AccessDecision::Matched(None));

        let targeting = TargetingBuilder::new().expatriate_region("E2").build();
        assert!(!has_access(&user, &targeting));

        let targeting = TargetingBuilder::new().region("R1").build();
        assert!(!has_access(&user, &targeting));

        // Without an expatriate region nothing targeted is visible.
        let user = UserBuilder::new(AdminLevel::User)
            .active(ActiveHierarchy::Expatriate)
            .build();
        let targeting = TargetingBuilder::new().expatriate_region("E1").build();
        assert!(!has_access(&user, &targeting));
    }

    #[test]
    fn unknown_level_is_not_a_superuser() {
        let user = UserBuilder::unknown_level().region("R1").build();

        assert!(has_access(&user, &TargetingBuilder::new().region("R1").build()));
        assert!(!has_access(
            &user,
            &TargetingBuilder::new().region("R2").build()
        ));
    }

    #[test]
    fn active_dimension_without_membership_denies() {
        let user = UserBuilder::new(AdminLevel::User)
            .region("R1")
            .active(ActiveHierarchy::Sector)
            .build();

        let targeting = TargetingBuilder::new().sector_region("SR1").build();
        assert_eq!(decide(&user, &targeting), AccessDecision::Denied);
    }

    #[test]
    fn decision_names() {
        assert_eq!(AccessDecision::Superuser.to_string(), "superuser");
        assert_eq!(AccessDecision::Global.to_string(), "global");
        assert_eq!(
            AccessDecision::Matched(Some(ChainLevel::Region)).to_string(),
            "matched"
        );
        assert_eq!(AccessDecision::Denied.to_string(), "denied");
        assert!(!AccessDecision::Denied.is_granted());
    }

    #[test]
    fn every_decision_is_logged() {
        setup_logging();

        let admin = UserBuilder::new(AdminLevel::Admin).build();
        let user = UserBuilder::new(AdminLevel::User).region("R1").build();

        assert_eq!(
            decide(&admin, &TargetingBuilder::new().region("R2").build()),
            AccessDecision::Superuser
        );
        assert_eq!(
            decide(&user, &ContentTargeting::global()),
            AccessDecision::Global
        );
    }

    #[test]
    fn decisions_are_repeatable() {
        let user = UserBuilder::new(AdminLevel::District)
            .region("R1")
            .district("D1")
            .build();
        let targeting = TargetingBuilder::new().district("D1").build();

        let first = decide(&user, &targeting);
        for _ in 0..10 {
            assert_eq!(decide(&user, &targeting), first);
        }
    }
}
