// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::hierarchy::{ActiveHierarchy, Memberships, Position};
use crate::level::AdminLevel;

/// A user as seen by the access engine.
///
/// Built from the profile service payload, see [`UserPayload`](crate::wire::UserPayload). The
/// engine never mutates a user; switching hierarchies produces a new value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct User {
    pub id: String,

    /// `None` if the profile carried a level unknown to the catalog.
    pub admin_level: Option<AdminLevel>,

    pub active_hierarchy: ActiveHierarchy,

    pub memberships: Memberships,
}

impl User {
    pub fn new(id: impl Into<String>, admin_level: AdminLevel) -> Self {
        Self {
            id: id.into(),
            admin_level: Some(admin_level),
            active_hierarchy: ActiveHierarchy::default(),
            memberships: Memberships::default(),
        }
    }

    /// Position of this user in their active hierarchy.
    pub fn position(&self) -> Position<'_> {
        self.memberships.position(self.active_hierarchy)
    }

    pub fn is_superuser(&self) -> bool {
        self.admin_level.is_some_and(|level| level.is_superuser())
    }

    /// Copy of this user operating under another hierarchy.
    ///
    /// This is what gets stored locally once the profile service confirmed the switch.
    pub fn with_active_hierarchy(&self, hierarchy: ActiveHierarchy) -> Self {
        Self {
            active_hierarchy: hierarchy,
            ..self.clone()
        }
    }
}
