//! Notification categories and their icon styling.

use serde::{Deserialize, Serialize};

/// Topic of a push broadcast.
///
/// Closed set: used for preference filtering (opt-out per category) and for
/// the in-app icon styling lookup. Unknown category strings are rejected at
/// the HTTP boundary, so [`Category::icon`] has no fallback arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Courses,
    Trajets,
    Promotions,
}

/// Icon metadata attached to every in-app notification of a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconStyle {
    pub icon: &'static str,
    pub color: &'static str,
    pub background: &'static str,
}

impl Category {
    /// Parse from the wire string. Returns `None` for unknown values.
    pub fn parse(v: &str) -> Option<Self> {
        match v {
            "courses" => Some(Self::Courses),
            "trajets" => Some(Self::Trajets),
            "promotions" => Some(Self::Promotions),
            _ => None,
        }
    }

    /// Wire string used as preference key and `notifications.type` value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Courses => "courses",
            Self::Trajets => "trajets",
            Self::Promotions => "promotions",
        }
    }

    /// Static icon styling, one entry per category.
    pub fn icon(self) -> IconStyle {
        match self {
            Self::Courses => IconStyle {
                icon: "cart",
                color: "#F97316",
                background: "#FFEDD5",
            },
            Self::Trajets => IconStyle {
                icon: "car",
                color: "#2563EB",
                background: "#DBEAFE",
            },
            Self::Promotions => IconStyle {
                icon: "pricetag",
                color: "#16A34A",
                background: "#DCFCE7",
            },
        }
    }
}
