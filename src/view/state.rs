//! State for the active screen and its theming context.

use serde::{Deserialize, Serialize};

use crate::model::{FashionStyle, Product};
use crate::mvi::AppState;

/// The single active top-level screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    #[default]
    Explore,
    TryOn,
    Profile,
    ProductDetail,
    Merchant,
}

/// Navigation state.
///
/// `selected_product` is owned weakly: it is only meaningful while
/// `screen` is ProductDetail and is dropped on any navigation away.
/// `style_context` is the most recently focused fashion style, used
/// purely for theming.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub screen: Screen,
    pub selected_product: Option<Product>,
    pub style_context: Option<FashionStyle>,
}

impl AppState for ViewState {}

impl ViewState {
    /// Whether the tab bar is shown. Pure function of the screen:
    /// hidden on ProductDetail and Merchant, visible otherwise.
    pub fn navigation_visible(&self) -> bool {
        !matches!(self.screen, Screen::ProductDetail | Screen::Merchant)
    }
}
