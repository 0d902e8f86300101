//! Fashion styles and product categories.

use serde::{Deserialize, Serialize};

/// The closed set of fashion styles the catalog tags products with.
///
/// Styles double as theming context: both lookup tables in the theme
/// cascade are keyed by this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FashionStyle {
    Casual,
    Business,
    Party,
    Sport,
}

impl FashionStyle {
    pub const ALL: [FashionStyle; 4] = [
        FashionStyle::Casual,
        FashionStyle::Business,
        FashionStyle::Party,
        FashionStyle::Sport,
    ];

    /// Display label shown by the presentation layer.
    pub fn label(self) -> &'static str {
        match self {
            FashionStyle::Casual => "休闲风",
            FashionStyle::Business => "商务风",
            FashionStyle::Party => "晚宴/派对",
            FashionStyle::Sport => "运动风",
        }
    }
}

/// Garment category, used by the presentation layer for matching logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    Top,
    Bottom,
    Dress,
    Outer,
    Shoes,
}
