//! Intents for navigation and theming context.

use crate::model::{FashionStyle, Product};
use crate::mvi::Intent;
use crate::view::state::Screen;

/// Intents that can be dispatched to the view reducer.
///
/// Cross-machine side effects (resetting the try-on phase) are composed
/// by the orchestrator, not hidden in this reducer.
#[derive(Debug, Clone)]
pub enum ViewIntent {
    /// Shopper tapped a product card: show its detail screen.
    SelectProduct(Product),

    /// Tab-bar navigation to a top-level screen.
    Navigate(Screen),

    /// Back affordance on the product detail screen.
    GoBackFromDetail,

    /// A style-browsing screen reported the style currently in focus.
    SetStyleContext(Option<FashionStyle>),
}

impl Intent for ViewIntent {}
