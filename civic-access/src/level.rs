// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt::Display;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Display name returned for levels which are unknown to the catalog.
///
/// A user rendered with this name never satisfies a check which requires a specific level.
pub const UNSPECIFIED_LEVEL_NAME: &str = "غير محدد";

/// Administrative rank a user or organizational node occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum AdminLevel {
    GeneralSecretariat,
    Region,
    Locality,
    AdminUnit,
    District,
    User,
    Admin,
    NationalLevel,
    ExpatriateGeneral,
    ExpatriateRegion,
}

impl AdminLevel {
    pub const ALL: [AdminLevel; 10] = [
        AdminLevel::GeneralSecretariat,
        AdminLevel::Region,
        AdminLevel::Locality,
        AdminLevel::AdminUnit,
        AdminLevel::District,
        AdminLevel::User,
        AdminLevel::Admin,
        AdminLevel::NationalLevel,
        AdminLevel::ExpatriateGeneral,
        AdminLevel::ExpatriateRegion,
    ];

    /// Arabic display name of this level.
    pub fn name(&self) -> &'static str {
        match self {
            AdminLevel::GeneralSecretariat => "الأمانة العامة",
            AdminLevel::Region => "الولاية",
            AdminLevel::Locality => "المحلية",
            AdminLevel::AdminUnit => "الوحدة الإدارية",
            AdminLevel::District => "الحي",
            AdminLevel::User => "مستخدم",
            AdminLevel::Admin => "مدير النظام",
            AdminLevel::NationalLevel => "المستوى القومي",
            AdminLevel::ExpatriateGeneral => "الأمانة العامة للمغتربين",
            AdminLevel::ExpatriateRegion => "قطاع المغتربين",
        }
    }

    /// Levels which see all content regardless of targeting or active hierarchy.
    pub fn is_superuser(&self) -> bool {
        matches!(self, AdminLevel::GeneralSecretariat | AdminLevel::Admin)
    }

    /// Wire spelling of this level, for example `ADMIN_UNIT`.
    pub fn as_str(&self) -> &'static str {
        match self {
            AdminLevel::GeneralSecretariat => "GENERAL_SECRETARIAT",
            AdminLevel::Region => "REGION",
            AdminLevel::Locality => "LOCALITY",
            AdminLevel::AdminUnit => "ADMIN_UNIT",
            AdminLevel::District => "DISTRICT",
            AdminLevel::User => "USER",
            AdminLevel::Admin => "ADMIN",
            AdminLevel::NationalLevel => "NATIONAL_LEVEL",
            AdminLevel::ExpatriateGeneral => "EXPATRIATE_GENERAL",
            AdminLevel::ExpatriateRegion => "EXPATRIATE_REGION",
        }
    }
}

/// Display name of an optional level, falling back to [`UNSPECIFIED_LEVEL_NAME`].
pub fn level_name(level: Option<AdminLevel>) -> &'static str {
    level.map_or(UNSPECIFIED_LEVEL_NAME, |level| level.name())
}

impl Display for AdminLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AdminLevel {
    type Err = AdminLevelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        AdminLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == value)
            .ok_or_else(|| AdminLevelError::Unknown(value.to_string()))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AdminLevelError {
    #[error("unknown admin level \"{0}\"")]
    Unknown(String),
}
