//! Derives the background treatment from the combined core state.
//!
//! The cascade is an ordered list of (predicate, resolver) pairs,
//! evaluated in sequence and short-circuited at the first match, so the
//! priority order is visible and independently testable. The final rule
//! is a catch-all: resolution always terminates with a token.

use serde::Serialize;

use crate::model::{FashionStyle, Product};
use crate::tryon::TryOnPhase;
use crate::view::Screen;

/// Opaque background-treatment token consumed by the presentation layer.
///
/// The detail and context families map the same styles to distinct
/// tokens on purpose: the two surfaces stay visually differentiated
/// even when showing the same style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    /// Merchant dashboard: clean flat gray, overrides everything.
    MerchantFlat,
    /// Image synthesis in flight.
    Processing,
    /// Try-on room before a photo exists.
    IdleUpload,
    /// Fallback for a product with no style tag.
    Neutral,
    DetailCasual,
    DetailBusiness,
    DetailParty,
    DetailSport,
    ContextCasual,
    ContextBusiness,
    ContextParty,
    ContextSport,
    /// Default explore gradient.
    DefaultGradient,
}

impl Theme {
    /// Literal background treatment for this token.
    pub fn background(self) -> &'static str {
        match self {
            Theme::MerchantFlat => "bg-gray-50",
            Theme::Processing => "bg-[#F3E5F5]",
            Theme::IdleUpload => "bg-[#FAFAFA]",
            Theme::Neutral => "bg-white",
            Theme::DetailCasual => "bg-gradient-to-br from-[#FFF9C4] to-[#E8F5E9]",
            Theme::DetailBusiness => "bg-gradient-to-br from-[#F5F5F5] to-[#E3F2FD]",
            Theme::DetailParty => {
                "bg-gradient-to-br from-[#311B92] via-[#512DA8] to-[#673AB7] text-white"
            }
            Theme::DetailSport => "bg-gradient-to-br from-[#FFECB3] to-[#E8F5E9]",
            Theme::ContextCasual => "bg-gradient-to-br from-[#FFF9C4] to-[#E8F5E9]",
            Theme::ContextBusiness => "bg-gradient-to-br from-[#ECEFF1] to-[#CFD8DC]",
            Theme::ContextParty => {
                "bg-gradient-to-br from-[#4A148C] via-[#7B1FA2] to-[#AB47BC] text-white"
            }
            Theme::ContextSport => "bg-gradient-to-br from-[#E0F2F1] to-[#80CBC4]",
            Theme::DefaultGradient => "bg-gradient-to-br from-[#E3F2FD] to-[#F3E5F5]",
        }
    }
}

/// The slice of post-mutation state the cascade reads.
#[derive(Debug, Clone, Copy)]
pub struct ThemeInputs<'a> {
    pub screen: Screen,
    pub phase: TryOnPhase,
    pub style_context: Option<FashionStyle>,
    pub selected_product: Option<&'a Product>,
}

/// Token table for the product-detail surface, keyed by the product's
/// first style tag.
fn detail_theme(style: FashionStyle) -> Theme {
    match style {
        FashionStyle::Casual => Theme::DetailCasual,
        FashionStyle::Business => Theme::DetailBusiness,
        FashionStyle::Party => Theme::DetailParty,
        FashionStyle::Sport => Theme::DetailSport,
    }
}

/// Token table for explore/try-on style context.
fn context_theme(style: FashionStyle) -> Theme {
    match style {
        FashionStyle::Casual => Theme::ContextCasual,
        FashionStyle::Business => Theme::ContextBusiness,
        FashionStyle::Party => Theme::ContextParty,
        FashionStyle::Sport => Theme::ContextSport,
    }
}

struct Rule {
    name: &'static str,
    applies: fn(&ThemeInputs<'_>) -> bool,
    resolve: fn(&ThemeInputs<'_>) -> Theme,
}

/// Priority-ordered cascade. First matching rule wins; later rules are
/// never evaluated once an earlier one matches.
const CASCADE: &[Rule] = &[
    Rule {
        name: "merchant",
        applies: |i| i.screen == Screen::Merchant,
        resolve: |_| Theme::MerchantFlat,
    },
    Rule {
        name: "processing",
        applies: |i| i.phase == TryOnPhase::Processing,
        resolve: |_| Theme::Processing,
    },
    Rule {
        name: "idle_upload",
        applies: |i| i.phase == TryOnPhase::Idle && i.screen == Screen::TryOn,
        resolve: |_| Theme::IdleUpload,
    },
    Rule {
        name: "product_detail",
        applies: |i| i.screen == Screen::ProductDetail && i.selected_product.is_some(),
        resolve: |i| {
            i.selected_product
                .and_then(|p| p.tags.first().copied())
                .map_or(Theme::Neutral, detail_theme)
        },
    },
    Rule {
        name: "style_context",
        applies: |i| i.style_context.is_some(),
        resolve: |i| i.style_context.map_or(Theme::DefaultGradient, context_theme),
    },
    Rule {
        name: "default",
        applies: |_| true,
        resolve: |_| Theme::DefaultGradient,
    },
];

/// Resolve the theme for the given state. Always terminates with a
/// token: the last cascade rule matches unconditionally.
pub fn resolve(inputs: &ThemeInputs<'_>) -> Theme {
    let (name, theme) = CASCADE
        .iter()
        .find(|rule| (rule.applies)(inputs))
        .map_or(("default", Theme::DefaultGradient), |rule| {
            (rule.name, (rule.resolve)(inputs))
        });
    tracing::trace!(rule = name, ?theme, "theme resolved");
    theme
}
