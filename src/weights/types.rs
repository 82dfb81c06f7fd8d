//! Relationship categories and preference modes.

/// Kind of relationship between two guests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RelationshipCategory {
    SignificantOther,
    CloseFriend,
    Family,
    #[default]
    Friend,
    Acquaintance,
    None,
}

impl RelationshipCategory {
    /// All categories, strongest first.
    pub const ALL: [RelationshipCategory; 6] = [
        RelationshipCategory::SignificantOther,
        RelationshipCategory::CloseFriend,
        RelationshipCategory::Family,
        RelationshipCategory::Friend,
        RelationshipCategory::Acquaintance,
        RelationshipCategory::None,
    ];

    /// Weight of the category before any preference scaling.
    pub fn base_weight(self) -> f64 {
        match self {
            RelationshipCategory::SignificantOther => 10.0,
            RelationshipCategory::CloseFriend => 4.0,
            RelationshipCategory::Family => 3.0,
            RelationshipCategory::Friend => 2.0,
            RelationshipCategory::Acquaintance => 1.0,
            RelationshipCategory::None => 0.0,
        }
    }
}

/// Global modifier that rescales specific relationship categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PreferenceMode {
    #[default]
    Balanced,
    /// Scales `Family` edges.
    FamilyFirst,
    /// Scales `CloseFriend` edges.
    RelationshipsFirst,
}

impl PreferenceMode {
    pub const ALL: [PreferenceMode; 3] = [
        PreferenceMode::Balanced,
        PreferenceMode::FamilyFirst,
        PreferenceMode::RelationshipsFirst,
    ];

    /// Returns `true` if this mode scales the given category.
    pub fn boosts(self, category: RelationshipCategory) -> bool {
        matches!(
            (self, category),
            (PreferenceMode::FamilyFirst, RelationshipCategory::Family)
                | (
                    PreferenceMode::RelationshipsFirst,
                    RelationshipCategory::CloseFriend
                )
        )
    }
}
