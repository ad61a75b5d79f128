// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::test_utils::{TargetingBuilder, UserBuilder, setup_logging};
use crate::{
    ActiveHierarchy, AdminLevel, ContentTargeting, Targeted, can_switch, filter_visible,
    has_access, hierarchy_path, scope_description,
};

#[derive(Clone, Debug, PartialEq)]
struct Bulletin {
    title: &'static str,
    targeting: ContentTargeting,
}

impl Targeted for Bulletin {
    fn targeting(&self) -> &ContentTargeting {
        &self.targeting
    }
}

fn bulletins() -> Vec<Bulletin> {
    vec![
        Bulletin {
            title: "national announcement",
            targeting: ContentTargeting::global(),
        },
        Bulletin {
            title: "khartoum region",
            targeting: TargetingBuilder::new().region("R1").build(),
        },
        Bulletin {
            title: "other region",
            targeting: TargetingBuilder::new().region("R2").build(),
        },
        Bulletin {
            title: "neighbouring district",
            targeting: TargetingBuilder::new().region("R1").district("D2").build(),
        },
        Bulletin {
            title: "own district",
            targeting: TargetingBuilder::new().district("D1").build(),
        },
        Bulletin {
            title: "sector region",
            targeting: TargetingBuilder::new().sector_region("SR1").build(),
        },
        Bulletin {
            title: "gulf expatriates",
            targeting: TargetingBuilder::new().expatriate_region("E1").build(),
        },
    ]
}

fn titles(items: &[Bulletin]) -> Vec<&'static str> {
    items.iter().map(|item| item.title).collect()
}

#[test]
fn filter_bulletins_per_active_hierarchy() {
    setup_logging();

    let user = UserBuilder::new(AdminLevel::District)
        .region("R1")
        .locality("L1")
        .admin_unit("A1")
        .district("D1")
        .sector_region("SR1")
        .expatriate_region("E1")
        .build();

    let visible = filter_visible(&user, bulletins());
    assert_eq!(
        titles(&visible),
        vec!["national announcement", "khartoum region", "own district"]
    );

    let user = user.with_active_hierarchy(ActiveHierarchy::Sector);
    let visible = filter_visible(&user, bulletins());
    assert_eq!(
        titles(&visible),
        vec!["national announcement", "sector region"]
    );

    let user = user.with_active_hierarchy(ActiveHierarchy::Expatriate);
    let visible = filter_visible(&user, bulletins());
    assert_eq!(
        titles(&visible),
        vec!["national announcement", "gulf expatriates"]
    );
}

#[test]
fn filter_borrowed_items() {
    let items = bulletins();
    let admin = UserBuilder::new(AdminLevel::Admin).build();

    let visible = filter_visible(&admin, &items);
    assert_eq!(visible.len(), items.len());

    let nobody = UserBuilder::new(AdminLevel::User).build();
    let visible = filter_visible(&nobody, items.iter());
    assert_eq!(visible, vec![&items[0]]);
}

#[test]
fn every_targeting_field_restricts_content() {
    let user = UserBuilder::new(AdminLevel::User).build();

    let targetings = [
        TargetingBuilder::new().national_level("X").build(),
        TargetingBuilder::new().region("X").build(),
        TargetingBuilder::new().locality("X").build(),
        TargetingBuilder::new().admin_unit("X").build(),
        TargetingBuilder::new().district("X").build(),
        TargetingBuilder::new().expatriate_region("X").build(),
        TargetingBuilder::new().sector_national_level("X").build(),
        TargetingBuilder::new().sector_region("X").build(),
        TargetingBuilder::new().sector_locality("X").build(),
        TargetingBuilder::new().sector_admin_unit("X").build(),
        TargetingBuilder::new().sector_district("X").build(),
    ];

    for targeting in &targetings {
        assert!(!targeting.is_global());
        assert!(!has_access(&user, targeting));
    }
}

#[test]
fn switching_changes_visibility_and_display() {
    let user = UserBuilder::new(AdminLevel::Region)
        .named_region("R1", "الخرطوم")
        .named_sector_region("SR1", "قطاع التعليم")
        .build();
    let sector_bulletin = TargetingBuilder::new().sector_region("SR1").build();

    assert!(!has_access(&user, &sector_bulletin));
    assert_eq!(hierarchy_path(&user), "الخرطوم");

    assert!(can_switch(&user, ActiveHierarchy::Sector));
    let user = user.with_active_hierarchy(ActiveHierarchy::Sector);

    assert!(has_access(&user, &sector_bulletin));
    assert_eq!(hierarchy_path(&user), "قطاع التعليم");
    assert_eq!(
        scope_description(&user),
        "الولاية - تسلسل القطاع: قطاع التعليم"
    );
}

#[cfg(feature = "serde")]
#[test]
fn decide_on_service_payloads() {
    use crate::{User, UserPayload};

    let user: UserPayload = serde_json::from_str(
        r#"{
            "id": "u-1",
            "adminLevel": "ADMIN_UNIT",
            "regionId": "R1",
            "localityId": "L1",
            "adminUnitId": "A1",
            "region": { "id": "R1", "name": "الجزيرة" },
            "locality": { "id": "L1", "name": "مدني الكبرى" }
        }"#,
    )
    .unwrap();
    let user = User::from(user);

    let items: Vec<ContentTargeting> = serde_json::from_str(
        r#"[
            {},
            { "targetRegionId": "R1" },
            { "targetRegionId": "R1", "targetAdminUnitId": "A2" },
            { "targetLocalityId": "L1", "targetDistrictId": "" },
            { "targetSectorRegionId": "R1" }
        ]"#,
    )
    .unwrap();

    let visible: Vec<bool> = items.iter().map(|item| has_access(&user, item)).collect();
    assert_eq!(visible, vec![true, true, false, true, false]);

    assert_eq!(
        hierarchy_path(&user),
        "الجزيرة - مدني الكبرى - وحدة إدارية"
    );
}
